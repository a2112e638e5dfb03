//! Circulant strategy search
//!
//! Each candidate starts from one length-`l` question and repeatedly shifts it
//! cyclically: every element `i` becomes `i + 1`, and `n` wraps to 1.

use super::{SearchParams, all_questions};
use crate::core::Question;
use crate::strategy::Strategy;
use std::fmt;
use std::iter;
use tracing::debug;

/// How many questions a circulant chain contains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainLength {
    /// `k` questions, matching the exhaustive search's strategy size
    #[default]
    StrategySize,
    /// `l` questions, one per element of the starting question; `k` is ignored
    QuestionLength,
}

impl ChainLength {
    /// Create a chain length from its name
    ///
    /// Accepts `strategy-size` (or `k`) and `question-length` (or `l`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strategy-size" | "k" => Some(Self::StrategySize),
            "question-length" | "l" => Some(Self::QuestionLength),
            _ => None,
        }
    }

    /// Number of questions per chain for these parameters
    #[must_use]
    pub const fn questions(self, params: SearchParams) -> usize {
        match self {
            Self::StrategySize => params.k(),
            Self::QuestionLength => params.l() as usize,
        }
    }
}

impl fmt::Display for ChainLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrategySize => write!(f, "strategy-size"),
            Self::QuestionLength => write!(f, "question-length"),
        }
    }
}

/// Shift every element of `question` by one, wrapping `n` to 1
///
/// # Examples
/// ```
/// use offline_guessing::core::Question;
/// use offline_guessing::search::shift_question;
///
/// assert_eq!(shift_question(&Question::new([1, 2]), 4), Question::new([2, 3]));
/// assert_eq!(shift_question(&Question::new([3, 4]), 4), Question::new([1, 4]));
/// ```
#[must_use]
pub fn shift_question(question: &Question, n: u32) -> Question {
    question
        .iter()
        .map(|i| if i == n { 1 } else { i + 1 })
        .collect()
}

/// The chain `first, shift(first), shift(shift(first)), ...` of `length` questions
fn chain(first: Question, n: u32, length: usize) -> Vec<Question> {
    iter::successors(Some(first), |previous| Some(shift_question(previous, n)))
        .take(length)
        .collect()
}

/// Lazily enumerate one circulant strategy per length-`l` starting question
///
/// Starting questions follow the exhaustive search's lexicographic order. Only
/// winning strategies are yielded when `winning_only` is set. Each call starts a
/// fresh enumeration.
///
/// Unlike the exhaustive search, a chain may repeat questions: once the chain is
/// longer than the shift period of its starting question, the cycle starts over.
/// With n = 4 and k = 3, `{1, 3}` gives `[{1, 3}, {2, 4}, {1, 3}]`.
///
/// # Examples
/// ```
/// use offline_guessing::core::Question;
/// use offline_guessing::search::{ChainLength, SearchParams, generate_circulant_strategies};
///
/// let params = SearchParams::new(4, 2, 2).unwrap();
/// let first = generate_circulant_strategies(params, ChainLength::StrategySize, false)
///     .next()
///     .unwrap();
/// assert_eq!(first.questions(), &[Question::new([1, 2]), Question::new([2, 3])]);
/// ```
pub fn generate_circulant_strategies(
    params: SearchParams,
    chain_length: ChainLength,
    winning_only: bool,
) -> impl Iterator<Item = Strategy> {
    let n = params.n();
    let length = chain_length.questions(params);

    all_questions(params)
        .map(move |first| Strategy::from_parts(chain(first, n, length), n))
        .filter(move |strategy| {
            if !winning_only {
                return true;
            }
            let winning = strategy.is_winning_for_questioner();
            if winning {
                debug!(questions = ?strategy.questions(), "winning circulant strategy found");
            }
            winning
        })
}
