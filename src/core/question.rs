//! Question representation
//!
//! A question is a subset of the universe {1, ..., n}. The Responder answers it
//! with how many of their two secret numbers it contains.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A subset-membership question posed by the Questioner
///
/// Questions are immutable values: every derivation (`complement`, `add_number`)
/// returns a new question and leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Question {
    components: BTreeSet<u32>,
}

/// Error type for questions parsed from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("Question element must be a non-negative integer, got '{0}'")]
    InvalidElement(String),
}

impl Question {
    /// Create a question from any collection of numbers
    ///
    /// Duplicates collapse; the empty collection gives the always-silent question.
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::core::Question;
    ///
    /// let q = Question::new([3, 1, 3]);
    /// assert_eq!(q.len(), 2);
    /// assert_eq!(q.to_string(), "{1, 3}");
    /// ```
    pub fn new(components: impl IntoIterator<Item = u32>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// The elements of this question
    #[inline]
    #[must_use]
    pub const fn components(&self) -> &BTreeSet<u32> {
        &self.components
    }

    /// Iterate over the elements in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.components.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Answer the question for the Responder's pair `(a, b)`
    ///
    /// Returns how many of `a` and `b` are in the question (0, 1 or 2).
    /// Values outside the question never match, so out-of-range input is fine.
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::core::Question;
    ///
    /// let q = Question::new([1, 2]);
    /// assert_eq!(q.answer(1, 2), 2);
    /// assert_eq!(q.answer(2, 3), 1);
    /// assert_eq!(q.answer(3, 4), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn answer(&self, a: u32, b: u32) -> u8 {
        u8::from(self.contains_element(a)) + u8::from(self.contains_element(b))
    }

    /// The complementary question relative to the universe {1, ..., n}
    ///
    /// The caller is responsible for passing the same `n` the question was
    /// built against.
    #[must_use]
    pub fn complement(&self, n: u32) -> Self {
        Self::new((1..=n).filter(|i| !self.components.contains(i)))
    }

    /// A new question with `i` added (no-op if already present)
    #[must_use]
    pub fn add_number(&self, i: u32) -> Self {
        let mut components = self.components.clone();
        components.insert(i);
        Self { components }
    }

    /// Check whether the question contains the number `i`
    #[inline]
    #[must_use]
    pub fn contains_element(&self, i: u32) -> bool {
        self.components.contains(&i)
    }

    /// Check whether every element of `other` is in this question
    #[inline]
    #[must_use]
    pub fn contains_question(&self, other: &Self) -> bool {
        other.components.is_subset(&self.components)
    }

    /// The first element not in {1, ..., n}, if any
    #[must_use]
    pub fn first_outside(&self, n: u32) -> Option<u32> {
        self.iter().find(|&i| i == 0 || i > n)
    }
}

impl FromIterator<u32> for Question {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<u32>> for Question {
    fn from(components: Vec<u32>) -> Self {
        Self::new(components)
    }
}

impl From<&[u32]> for Question {
    fn from(components: &[u32]) -> Self {
        Self::new(components.iter().copied())
    }
}

impl<const N: usize> From<[u32; N]> for Question {
    fn from(components: [u32; N]) -> Self {
        Self::new(components)
    }
}

impl From<BTreeSet<u32>> for Question {
    fn from(components: BTreeSet<u32>) -> Self {
        Self { components }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, element) in self.components.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

/// Parse a question from text like `"1,2,3"`, `"1 2 3"` or `"{1, 2, 3}"`
///
/// An empty string (or `"{}"`) is the empty question.
impl FromStr for Question {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches('{')
            .trim_end_matches('}');

        inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| QuestionError::InvalidElement(token.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    /// Universe size used by the generated questions
    pub(crate) const ARBITRARY_N: u32 = 8;

    impl Arbitrary for Question {
        fn arbitrary(g: &mut Gen) -> Self {
            (1..=ARBITRARY_N).filter(|_| bool::arbitrary(g)).collect()
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let components: Vec<u32> = self.iter().collect();
            Box::new(components.shrink().map(Question::from))
        }
    }

    #[test]
    fn question_creation_dedups() {
        let q = Question::new([2, 1, 2, 3, 1]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_question_is_silent() {
        let q = Question::default();
        assert!(q.is_empty());
        assert_eq!(q.answer(1, 2), 0);
        assert_eq!(q.to_string(), "{}");
    }

    #[test]
    fn answer_counts_members() {
        let q = Question::new([1, 3]);
        assert_eq!(q.answer(1, 3), 2);
        assert_eq!(q.answer(1, 2), 1);
        assert_eq!(q.answer(2, 3), 1);
        assert_eq!(q.answer(2, 4), 0);
    }

    #[test]
    fn answer_tolerates_out_of_range_and_equal_values() {
        let q = Question::new([1]);
        assert_eq!(q.answer(1, 1), 2);
        assert_eq!(q.answer(0, 99), 0);
    }

    #[test]
    fn complement_within_universe() {
        let q = Question::new([1, 3]);
        assert_eq!(q.complement(5), Question::new([2, 4, 5]));
        assert_eq!(Question::default().complement(3), Question::new([1, 2, 3]));
        assert!(Question::new([1, 2, 3]).complement(3).is_empty());
    }

    #[test]
    fn add_number_leaves_original_untouched() {
        let q = Question::new([1, 2]);
        let bigger = q.add_number(4);

        assert_eq!(q, Question::new([1, 2]));
        assert_eq!(bigger, Question::new([1, 2, 4]));
        assert_eq!(bigger.add_number(4), bigger);
    }

    #[test]
    fn containment_queries() {
        let q = Question::new([1, 2, 3]);
        assert!(q.contains_element(2));
        assert!(!q.contains_element(4));

        assert!(q.contains_question(&Question::new([1, 3])));
        assert!(q.contains_question(&Question::default()));
        assert!(!q.contains_question(&Question::new([3, 4])));
    }

    #[test]
    fn first_outside_finds_out_of_universe_elements() {
        assert_eq!(Question::new([1, 4]).first_outside(4), None);
        assert_eq!(Question::new([1, 5]).first_outside(4), Some(5));
        assert_eq!(Question::new([0, 2]).first_outside(4), Some(0));
    }

    #[test]
    fn parse_accepts_common_notations() {
        let expected = Question::new([1, 2, 3]);
        assert_eq!("1,2,3".parse::<Question>().unwrap(), expected);
        assert_eq!("1 2 3".parse::<Question>().unwrap(), expected);
        assert_eq!("{1, 2, 3}".parse::<Question>().unwrap(), expected);
        assert_eq!("".parse::<Question>().unwrap(), Question::default());
        assert_eq!("{}".parse::<Question>().unwrap(), Question::default());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "1,x".parse::<Question>(),
            Err(QuestionError::InvalidElement("x".to_string()))
        );
        assert!("-1".parse::<Question>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let q = Question::new([4, 2, 7]);
        assert_eq!(q.to_string(), "{2, 4, 7}");
        assert_eq!(q.to_string().parse::<Question>().unwrap(), q);
    }

    #[test]
    fn complement_is_an_involution() {
        let test = |q: Question| q.complement(ARBITRARY_N).complement(ARBITRARY_N) == q;
        QuickCheck::new().quickcheck(test as fn(Question) -> bool);
    }

    #[test]
    fn add_number_inserts_element() {
        let test = |q: Question, i: u32| {
            let before = q.clone();
            let added = q.add_number(i);
            added.contains_element(i) && q == before && added.contains_question(&q)
        };
        QuickCheck::new().quickcheck(test as fn(Question, u32) -> bool);
    }

    #[test]
    fn answer_is_sum_of_memberships() {
        let test = |q: Question, a: u32, b: u32| {
            let a = a % (ARBITRARY_N + 2);
            let b = b % (ARBITRARY_N + 2);
            let answer = q.answer(a, b);
            answer <= 2
                && answer == u8::from(q.contains_element(a)) + u8::from(q.contains_element(b))
        };
        QuickCheck::new().quickcheck(test as fn(Question, u32, u32) -> bool);
    }
}
