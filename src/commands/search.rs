//! Strategy search command
//!
//! Runs one of the search generators and collects the strategies it yields.

use crate::search::{SearchError, SearchMode, SearchParams};
use crate::strategy::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a strategy search
pub struct SearchConfig {
    pub n: u32,
    pub l: u32,
    pub k: usize,
    pub mode: SearchMode,
    pub winning_only: bool,
    /// Stop after this many strategies
    pub limit: Option<usize>,
    /// Show a progress spinner while searching
    pub progress: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(n: u32, l: u32, k: usize) -> Self {
        Self {
            n,
            l,
            k,
            mode: SearchMode::Exhaustive,
            winning_only: false,
            limit: None,
            progress: false,
        }
    }
}

/// Result of a strategy search
pub struct SearchResult {
    pub params: SearchParams,
    pub mode: SearchMode,
    pub winning_only: bool,
    pub strategies: Vec<Strategy>,
    /// Size of the candidate space, if it fits in a `u128`
    pub candidate_count: Option<u128>,
    /// Whether the limit cut the search short
    ///
    /// Without `winning_only` this means more strategies exist. With
    /// `winning_only` the remaining candidates are not examined, so it only
    /// means the limit was reached.
    pub truncated: bool,
    pub duration: Duration,
}

/// Run the configured search
///
/// # Errors
///
/// Returns an error if `n`, `l` or `k` are out of range.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_search(config: &SearchConfig) -> Result<SearchResult, SearchError> {
    let params = SearchParams::new(config.n, config.l, config.k)?;
    let candidate_count = config.mode.candidate_count(params);
    let limit = config.limit.unwrap_or(usize::MAX);

    info!(
        mode = %config.mode,
        n = params.n(),
        l = params.l(),
        k = params.k(),
        candidates = ?candidate_count,
        winning_only = config.winning_only,
        "starting search"
    );

    let pb = if config.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("constant template"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut strategies = Vec::new();
    let mut generator = config.mode.strategies(params, config.winning_only);

    while strategies.len() < limit {
        let Some(strategy) = generator.next() else {
            break;
        };
        strategies.push(strategy);
        pb.set_message(format!("{} strategies", strategies.len()));
        pb.tick();
    }
    // A winning-only lookahead could scan the rest of the space
    let truncated =
        strategies.len() == limit && (config.winning_only || generator.next().is_some());

    pb.finish_and_clear();
    let duration = start.elapsed();

    info!(
        found = strategies.len(),
        truncated,
        elapsed_ms = duration.as_millis(),
        "search finished"
    );

    Ok(SearchResult {
        params,
        mode: config.mode,
        winning_only: config.winning_only,
        strategies,
        candidate_count,
        truncated,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ChainLength;

    #[test]
    fn exhaustive_search_collects_everything() {
        let result = run_search(&SearchConfig::new(3, 1, 2)).unwrap();

        assert_eq!(result.strategies.len(), 3);
        assert_eq!(result.candidate_count, Some(3));
        assert!(!result.truncated);
    }

    #[test]
    fn winning_only_search() {
        let mut config = SearchConfig::new(4, 2, 3);
        config.winning_only = true;
        let result = run_search(&config).unwrap();

        assert!(!result.strategies.is_empty());
        assert!(result.strategies.iter().all(Strategy::is_winning_for_questioner));
        assert_eq!(result.candidate_count, Some(20));
    }

    #[test]
    fn limit_truncates() {
        let mut config = SearchConfig::new(4, 2, 2);
        config.limit = Some(4);
        let result = run_search(&config).unwrap();

        assert_eq!(result.strategies.len(), 4);
        assert!(result.truncated);
    }

    #[test]
    fn limit_equal_to_total_is_not_truncated() {
        let mut config = SearchConfig::new(3, 1, 2);
        config.limit = Some(3);
        let result = run_search(&config).unwrap();

        assert_eq!(result.strategies.len(), 3);
        assert!(!result.truncated);
    }

    #[test]
    fn winning_only_limit_does_not_search_past_the_limit() {
        // All three strategies win, but reaching the limit stops the search
        let mut config = SearchConfig::new(3, 1, 2);
        config.winning_only = true;
        config.limit = Some(3);
        let result = run_search(&config).unwrap();

        assert_eq!(result.strategies.len(), 3);
        assert!(result.truncated);
    }

    #[test]
    fn circulant_search() {
        let mut config = SearchConfig::new(4, 2, 2);
        config.mode = SearchMode::Circulant(ChainLength::StrategySize);
        let result = run_search(&config).unwrap();

        assert_eq!(result.strategies.len(), 6);
        assert_eq!(result.candidate_count, Some(6));
    }

    #[test]
    fn invalid_params_return_error() {
        assert!(run_search(&SearchConfig::new(4, 5, 1)).is_err());
        assert!(run_search(&SearchConfig::new(4, 2, 0)).is_err());
    }
}
