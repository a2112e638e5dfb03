//! Offline Guessing
//!
//! Strategy search for the offline pair-guessing game: the Questioner fixes a set
//! of subset questions over {1, ..., n} up front, the Responder secretly picks
//! two numbers, and the Questioner wins if the answers identify the pair.
//!
//! # Quick Start
//!
//! ```rust
//! use offline_guessing::search::{SearchParams, generate_all_strategies};
//! use offline_guessing::strategy::Strategy;
//!
//! // Check a single strategy
//! let strategy = Strategy::new([vec![1, 2], vec![1, 3], vec![1, 4]], 4).unwrap();
//! assert!(strategy.is_winning_for_questioner());
//!
//! // Find every winning strategy of three 2-element questions over {1, 2, 3, 4}
//! let params = SearchParams::new(4, 2, 3).unwrap();
//! let winning: Vec<Strategy> = generate_all_strategies(params, true).collect();
//! assert!(winning.contains(&strategy));
//! ```

// Core domain types
pub mod core;

// Strategies and the winning check
pub mod strategy;

// Strategy generators
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
