//! Strategy matrix command

use crate::core::Question;
use crate::strategy::{Strategy, StrategyError, StrategyMatrix};

/// Build the 0/1 membership matrix of the given questions over {1, ..., n}
///
/// # Errors
///
/// Returns an error if the questions do not form a valid strategy.
pub fn strategy_matrix(n: u32, questions: Vec<Question>) -> Result<StrategyMatrix, StrategyError> {
    Ok(Strategy::new(questions, n)?.to_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_for_questions() {
        let matrix = strategy_matrix(3, vec![Question::new([1]), Question::new([2])]).unwrap();
        assert_eq!(matrix.rows(), &[vec![1, 0, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn matrix_rejects_invalid_strategy() {
        assert!(strategy_matrix(3, vec![Question::new([4])]).is_err());
    }
}
