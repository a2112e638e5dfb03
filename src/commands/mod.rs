//! Command implementations

pub mod check;
pub mod matrix;
pub mod search;

pub use check::{CheckConfig, CheckResult, check_strategy};
pub use matrix::strategy_matrix;
pub use search::{SearchConfig, SearchResult, run_search};
