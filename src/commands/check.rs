//! Strategy check command
//!
//! Builds a strategy from user-supplied questions and runs the full winning check.

use crate::core::Question;
use crate::strategy::{Strategy, StrategyError, Verdict};
use tracing::info;

/// Configuration for checking a strategy
pub struct CheckConfig {
    pub n: u32,
    pub questions: Vec<Question>,
    /// Check the complementary strategy instead
    pub complement: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(n: u32, questions: Vec<Question>) -> Self {
        Self {
            n,
            questions,
            complement: false,
        }
    }
}

/// Result of checking a strategy
pub struct CheckResult {
    pub strategy: Strategy,
    pub verdict: Verdict,
}

/// Check whether the configured strategy is winning for the Questioner
///
/// # Errors
///
/// Returns an error if the questions do not form a valid strategy over
/// {1, ..., n}.
pub fn check_strategy(config: CheckConfig) -> Result<CheckResult, StrategyError> {
    let strategy = Strategy::new(config.questions, config.n)?;
    let strategy = if config.complement {
        strategy.complement()
    } else {
        strategy
    };

    let verdict = strategy.verdict();
    info!(
        n = strategy.n(),
        questions = strategy.len(),
        winning = verdict.is_winning(),
        collisions = verdict.collisions().len(),
        "strategy checked"
    );

    Ok(CheckResult { strategy, verdict })
}
