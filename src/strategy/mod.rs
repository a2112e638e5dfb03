//! Questioner strategies
//!
//! A strategy is an ordered collection of questions over a shared universe.
//! This module holds the strategy type, the winning check and the matrix view.

mod matrix;
mod model;
mod verdict;

pub use matrix::StrategyMatrix;
pub use model::{Strategy, StrategyError};
pub use verdict::{Collision, Verdict};
