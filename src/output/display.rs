//! Display functions for command results

use super::formatters::{create_progress_bar, format_count, strategy_inline};
use crate::commands::{CheckResult, SearchResult};
use crate::strategy::StrategyMatrix;
use colored::Colorize;

/// Print the result of checking a strategy, with every collision
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Strategy over {}:",
        format!("{{1, ..., {}}}", result.strategy.n()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, question) in result.strategy.questions().iter().enumerate() {
        println!("  Q{}: {question}", i + 1);
    }

    println!();
    if result.verdict.is_winning() {
        println!("{}", format!("✅ {}", result.verdict.headline()).green().bold());
    } else {
        println!("{}", format!("❌ {}", result.verdict.headline()).red().bold());
        for collision in result.verdict.collisions() {
            println!("   {collision}");
        }
    }
}

/// Print the result of a strategy search
pub fn print_search_result(result: &SearchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} n={} l={} k={} ",
        "STRATEGY SEARCH".bright_cyan().bold(),
        result.params.n(),
        result.params.l(),
        result.params.k()
    );
    println!("{}", "═".repeat(60).cyan());

    for strategy in &result.strategies {
        let line = strategy_inline(strategy);
        if result.winning_only {
            println!("  {}", line.green());
        } else if strategy.is_winning_for_questioner() {
            println!("  {} {}", line.green(), "(winning)".bright_black());
        } else {
            println!("  {line}");
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Mode:             {}", result.mode);
    println!(
        "   Candidates:       {}",
        format_count(result.candidate_count)
    );

    let label = if result.winning_only {
        "Winning found:"
    } else {
        "Strategies:   "
    };
    let found = result.strategies.len();
    println!(
        "   {label}    {}{}",
        format!("{found}").bright_yellow().bold(),
        if result.truncated {
            " (limit reached)".yellow().to_string()
        } else {
            String::new()
        }
    );

    if let Some(total) = result.candidate_count
        && !result.winning_only
        && total > 0
    {
        let bar = create_progress_bar(found as f64, total as f64, 40);
        println!("   Coverage:         {}", bar.green());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}

/// Print a strategy matrix, one row per question
pub fn print_matrix(matrix: &StrategyMatrix) {
    println!(
        "{}",
        format!(
            "Strategy matrix ({} × {}):",
            matrix.row_count(),
            matrix.column_count()
        )
        .bright_cyan()
        .bold()
    );
    println!("{matrix}");
}
