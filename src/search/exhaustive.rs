//! Exhaustive strategy search
//!
//! Enumerates every set of `k` distinct questions of length `l` in
//! lexicographic order.

use super::SearchParams;
use crate::core::Question;
use crate::strategy::Strategy;
use itertools::Itertools;
use tracing::debug;

/// Every question of length `l` over {1, ..., n}, in lexicographic order
///
/// # Examples
/// ```
/// use offline_guessing::search::{SearchParams, all_questions};
///
/// let params = SearchParams::new(3, 2, 1).unwrap();
/// let questions: Vec<String> = all_questions(params).map(|q| q.to_string()).collect();
/// assert_eq!(questions, vec!["{1, 2}", "{1, 3}", "{2, 3}"]);
/// ```
pub fn all_questions(params: SearchParams) -> impl Iterator<Item = Question> {
    (1..=params.n())
        .combinations(params.l() as usize)
        .map(Question::from)
}

/// Lazily enumerate every strategy of `k` distinct length-`l` questions
///
/// Yields C(C(n, l), k) strategies when `winning_only` is false; otherwise only
/// those that are winning for the Questioner. Each call starts a fresh
/// enumeration.
///
/// # Examples
/// ```
/// use offline_guessing::search::{SearchParams, generate_all_strategies};
///
/// let params = SearchParams::new(3, 1, 2).unwrap();
/// assert_eq!(generate_all_strategies(params, false).count(), 3);
/// ```
pub fn generate_all_strategies(
    params: SearchParams,
    winning_only: bool,
) -> impl Iterator<Item = Strategy> {
    let n = params.n();

    all_questions(params)
        .combinations(params.k())
        .map(move |questions| Strategy::from_parts(questions, n))
        .filter(move |strategy| {
            if !winning_only {
                return true;
            }
            let winning = strategy.is_winning_for_questioner();
            if winning {
                debug!(questions = ?strategy.questions(), "winning strategy found");
            }
            winning
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn params(n: u32, l: u32, k: usize) -> SearchParams {
        SearchParams::new(n, l, k).unwrap()
    }

    #[test]
    fn questions_have_requested_length() {
        let questions: Vec<Question> = all_questions(params(5, 3, 1)).collect();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.len() == 3));
        assert_eq!(questions[0], Question::new([1, 2, 3]));
        assert_eq!(questions[9], Question::new([3, 4, 5]));
    }

    #[test]
    fn three_singleton_universe() {
        let strategies: Vec<Strategy> = generate_all_strategies(params(3, 1, 2), false).collect();
        let listed: Vec<Vec<Question>> = strategies.iter().map(|s| s.questions().to_vec()).collect();

        assert_eq!(
            listed,
            vec![
                vec![Question::new([1]), Question::new([2])],
                vec![Question::new([1]), Question::new([3])],
                vec![Question::new([2]), Question::new([3])],
            ]
        );
        assert!(strategies.iter().all(Strategy::is_winning_for_questioner));
    }

    #[test]
    fn yields_every_combination_exactly_once() {
        for (n, l, k) in [(4, 2, 2), (4, 2, 3), (5, 2, 2), (5, 3, 3), (4, 1, 4)] {
            let p = params(n, l, k);
            let as_sets: Vec<BTreeSet<Question>> = generate_all_strategies(p, false)
                .map(|s| s.questions().iter().cloned().collect())
                .collect();
            let distinct: BTreeSet<&BTreeSet<Question>> = as_sets.iter().collect();

            let expected = p.exhaustive_count().unwrap() as usize;
            assert_eq!(as_sets.len(), expected, "n={n} l={l} k={k}");
            assert_eq!(distinct.len(), expected, "n={n} l={l} k={k}");
            assert!(as_sets.iter().all(|qs| qs.len() == k));
            assert!(as_sets.iter().flatten().all(|q| q.len() == l as usize));
        }
    }

    #[test]
    fn strategy_size_beyond_question_count_yields_nothing() {
        assert_eq!(generate_all_strategies(params(3, 1, 4), false).count(), 0);
    }

    #[test]
    fn winning_only_filters() {
        let p = params(4, 2, 3);
        let all: Vec<Strategy> = generate_all_strategies(p, false).collect();
        let winning: Vec<Strategy> = generate_all_strategies(p, true).collect();

        let expected: Vec<&Strategy> = all
            .iter()
            .filter(|s| s.is_winning_for_questioner())
            .collect();
        assert_eq!(winning.iter().collect::<Vec<_>>(), expected);
        assert!(winning.contains(&Strategy::new([[1, 2], [1, 3], [1, 4]], 4).unwrap()));
    }

    #[test]
    fn two_pair_questions_never_win_on_four() {
        assert_eq!(generate_all_strategies(params(4, 2, 2), true).count(), 0);
    }

    #[test]
    fn enumeration_is_restartable() {
        let p = params(4, 2, 2);
        let first: Vec<Strategy> = generate_all_strategies(p, false).collect();
        let second: Vec<Strategy> = generate_all_strategies(p, false).collect();
        assert_eq!(first, second);
    }
}
