//! Core domain types for the offline guessing game
//!
//! This module contains the fundamental value types: questions, Responder pairs
//! and answer vectors. All types here are pure, immutable and cheap to compare.

mod answer;
mod pair;
pub(crate) mod question;

pub use answer::AnswerVector;
pub use pair::Pair;
pub use question::{Question, QuestionError};
