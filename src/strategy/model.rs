//! Strategy representation and derivations

use crate::core::{AnswerVector, Pair, Question};
use std::fmt;
use thiserror::Error;

/// An ordered collection of questions over the universe {1, ..., n}
///
/// Question order defines the coordinate order of answer vectors and the row
/// order of the strategy matrix. Every derivation builds a fresh question list,
/// so a derived strategy never aliases its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strategy {
    questions: Vec<Question>,
    n: u32,
}

/// Error type for invalid strategies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("A strategy needs at least one question")]
    Empty,
    #[error("The universe needs at least 2 numbers, got n = {0}")]
    UniverseTooSmall(u32),
    #[error("Question {index} contains {element}, which is outside the universe 1..={n}")]
    ElementOutOfUniverse { index: usize, element: u32, n: u32 },
}

impl Strategy {
    /// Create a strategy from questions or raw subsets
    ///
    /// Every element is normalised into a [`Question`] on its own, so plain
    /// number collections and pre-built questions are handled the same way.
    ///
    /// # Errors
    /// Returns `StrategyError` if:
    /// - `n` is smaller than 2
    /// - No questions are given
    /// - A question contains a number outside {1, ..., n}
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::strategy::Strategy;
    ///
    /// let strategy = Strategy::new([vec![1], vec![2]], 3).unwrap();
    /// assert_eq!(strategy.len(), 2);
    ///
    /// assert!(Strategy::new(Vec::<Vec<u32>>::new(), 3).is_err());
    /// assert!(Strategy::new([vec![4]], 3).is_err());
    /// ```
    pub fn new<I, Q>(questions: I, n: u32) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Question>,
    {
        if n < 2 {
            return Err(StrategyError::UniverseTooSmall(n));
        }

        let questions: Vec<Question> = questions.into_iter().map(Into::into).collect();
        if questions.is_empty() {
            return Err(StrategyError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if let Some(element) = question.first_outside(n) {
                return Err(StrategyError::ElementOutOfUniverse { index, element, n });
            }
        }

        Ok(Self { questions, n })
    }

    /// Build a strategy from questions already known to be valid
    pub(crate) const fn from_parts(questions: Vec<Question>, n: u32) -> Self {
        Self { questions, n }
    }

    /// The questions, in answer-vector order
    #[inline]
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The universe size
    #[inline]
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// Number of questions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer every question for the Responder's pair `(a, b)`
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::strategy::Strategy;
    ///
    /// let strategy = Strategy::new([vec![1], vec![2]], 3).unwrap();
    /// assert_eq!(strategy.answer_questions(1, 3).to_string(), "(1, 0)");
    /// ```
    #[must_use]
    pub fn answer_questions(&self, a: u32, b: u32) -> AnswerVector {
        self.questions.iter().map(|q| q.answer(a, b)).collect()
    }

    /// The answer vector of every pair, in canonical pair order
    #[must_use]
    pub fn answer_vectors(&self) -> Vec<(Pair, AnswerVector)> {
        Pair::all(self.n)
            .map(|pair| (pair, self.answer_questions(pair.a(), pair.b())))
            .collect()
    }

    /// The strategy made of every question's complement, in the same order
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            questions: self.questions.iter().map(|q| q.complement(self.n)).collect(),
            n: self.n,
        }
    }

    /// A new strategy with `question` appended; `self` is left unchanged
    ///
    /// # Errors
    /// Returns `StrategyError::ElementOutOfUniverse` if the question does not fit
    /// the universe.
    pub fn add_question(&self, question: impl Into<Question>) -> Result<Self, StrategyError> {
        let question = question.into();
        if let Some(element) = question.first_outside(self.n) {
            return Err(StrategyError::ElementOutOfUniverse {
                index: self.questions.len(),
                element,
                n: self.n,
            });
        }

        let mut questions = Vec::with_capacity(self.questions.len() + 1);
        questions.extend(self.questions.iter().cloned());
        questions.push(question);
        Ok(Self { questions, n: self.n })
    }
}

/// One question per line
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for question in &self.questions {
            writeln!(f, "{question}")?;
        }
        Ok(())
    }
}
