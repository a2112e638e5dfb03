//! Answer vectors
//!
//! The tuple of per-question answers for one Responder pair, ordered by the
//! position of each question in its strategy.

use std::fmt;

/// Answers (each 0, 1 or 2) to every question of a strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerVector(Vec<u8>);

impl AnswerVector {
    #[inline]
    #[must_use]
    pub const fn new(answers: Vec<u8>) -> Self {
        Self(answers)
    }

    /// The raw answers, one per question
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u8> for AnswerVector {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Formats as a tuple: `(1, 0, 2)`, with a trailing comma for one answer: `(1,)`
impl fmt::Display for AnswerVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, answer) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{answer}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_as_tuple() {
        assert_eq!(AnswerVector::new(vec![1, 0, 2]).to_string(), "(1, 0, 2)");
        assert_eq!(AnswerVector::new(vec![2]).to_string(), "(2,)");
        assert_eq!(AnswerVector::new(vec![]).to_string(), "()");
    }

    #[test]
    fn equality_is_positional() {
        let v: AnswerVector = [1, 0].into_iter().collect();
        assert_eq!(v, AnswerVector::new(vec![1, 0]));
        assert_ne!(v, AnswerVector::new(vec![0, 1]));
        assert_eq!(v.len(), 2);
        assert_eq!(v.answers(), &[1, 0]);
    }
}
