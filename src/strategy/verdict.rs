//! Winning check for the Questioner
//!
//! A strategy is winning iff the map from Responder pairs to answer vectors is
//! injective over all C(n, 2) pairs of the universe.

use super::Strategy;
use crate::core::{AnswerVector, Pair};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use tracing::debug;

/// Two distinct pairs that share an answer vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub first: Pair,
    pub second: Pair,
    pub vector: AnswerVector,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {} both have the answer vector {}.",
            self.first, self.second, self.vector
        )
    }
}

/// Outcome of a full winning check, with every collision found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    collisions: Vec<Collision>,
}

impl Verdict {
    /// True iff no two pairs share an answer vector
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Every unordered colliding pair, ordered by the canonical index of the
    /// first pair and then of the second
    #[inline]
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// One-line summary of the verdict
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.collisions.is_empty() {
            "This is a winning strategy for the Questioner!"
        } else {
            "This is NOT a winning strategy for the Questioner"
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        for collision in &self.collisions {
            write!(f, "\n{collision}")?;
        }
        Ok(())
    }
}

impl Strategy {
    /// Check whether the strategy identifies every Responder pair
    ///
    /// Stops at the first repeated answer vector. Use [`Strategy::verdict`] to
    /// list every collision.
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::strategy::Strategy;
    ///
    /// let winning = Strategy::new([vec![1], vec![2]], 3).unwrap();
    /// assert!(winning.is_winning_for_questioner());
    ///
    /// let losing = Strategy::new([vec![1, 2], vec![1, 3]], 4).unwrap();
    /// assert!(!losing.is_winning_for_questioner());
    /// ```
    #[must_use]
    pub fn is_winning_for_questioner(&self) -> bool {
        let mut seen: FxHashSet<AnswerVector> = FxHashSet::default();
        Pair::all(self.n()).all(|pair| seen.insert(self.answer_questions(pair.a(), pair.b())))
    }

    /// Full winning check over every pair, reporting each collision
    ///
    /// Each unordered collision between two pairs is reported exactly once.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        let vectors = self.answer_vectors();

        // Pair indices grouped by answer vector, ascending within each group
        let mut groups: FxHashMap<&AnswerVector, Vec<usize>> = FxHashMap::default();
        for (idx, (_, vector)) in vectors.iter().enumerate() {
            groups.entry(vector).or_default().push(idx);
        }

        let mut colliding: Vec<(usize, usize)> = groups
            .values()
            .filter(|indices| indices.len() > 1)
            .flat_map(|indices| {
                indices.iter().enumerate().flat_map(move |(pos, &i)| {
                    indices[pos + 1..].iter().map(move |&j| (i, j))
                })
            })
            .collect();
        colliding.sort_unstable();

        let collisions = colliding
            .into_iter()
            .map(|(i, j)| {
                let collision = Collision {
                    first: vectors[i].0,
                    second: vectors[j].0,
                    vector: vectors[i].1.clone(),
                };
                debug!(%collision, "answer vector collision");
                collision
            })
            .collect();

        Verdict { collisions }
    }
}
