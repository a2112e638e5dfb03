//! Formatting utilities for terminal output

use crate::strategy::Strategy;

/// Format a strategy's questions on one line: `[{1, 2}, {2, 3}]`
#[must_use]
pub fn strategy_inline(strategy: &Strategy) -> String {
    let questions: Vec<String> = strategy.questions().iter().map(ToString::to_string).collect();
    format!("[{}]", questions.join(", "))
}

/// Format a count that may have overflowed
#[must_use]
pub fn format_count(count: Option<u128>) -> String {
    count.map_or_else(|| "more than 2^128".to_string(), |c| c.to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_inline_lists_questions() {
        let strategy = Strategy::new([vec![1, 2], vec![2, 3]], 4).unwrap();
        assert_eq!(strategy_inline(&strategy), "[{1, 2}, {2, 3}]");
    }

    #[test]
    fn format_count_overflow() {
        assert_eq!(format_count(Some(15)), "15");
        assert_eq!(format_count(None), "more than 2^128");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
