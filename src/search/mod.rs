//! Strategy search
//!
//! Lazy generators over candidate strategies built from a parameterised
//! question space, either exhaustively or by cyclic shifts.
//!
//! Search spaces grow combinatorially: the exhaustive search visits
//! C(C(n, l), k) candidates, which is only feasible for small n, l and k.

pub mod circulant;
pub mod exhaustive;
mod mode;
mod params;

pub use circulant::{ChainLength, generate_circulant_strategies, shift_question};
pub use exhaustive::{all_questions, generate_all_strategies};
pub use mode::SearchMode;
pub use params::{SearchError, SearchParams, binomial};
