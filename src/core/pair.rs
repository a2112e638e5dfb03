//! Responder pairs
//!
//! The Responder secretly picks an unordered pair of distinct numbers from the
//! universe. Pairs are always stored with `a < b`.

use std::fmt;

/// An unordered pair `(a, b)` with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    a: u32,
    b: u32,
}

impl Pair {
    /// Create a pair from two numbers in any order
    ///
    /// Returns `None` if the numbers are equal.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Option<Self> {
        if x < y {
            Some(Self { a: x, b: y })
        } else if y < x {
            Some(Self { a: y, b: x })
        } else {
            None
        }
    }

    /// The smaller number
    #[inline]
    #[must_use]
    pub const fn a(self) -> u32 {
        self.a
    }

    /// The larger number
    #[inline]
    #[must_use]
    pub const fn b(self) -> u32 {
        self.b
    }

    /// Every pair of the universe {1, ..., n} in canonical order
    ///
    /// Ascending by `a`, then by `b`. Yields C(n, 2) pairs.
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::core::Pair;
    ///
    /// let pairs: Vec<String> = Pair::all(3).map(|p| p.to_string()).collect();
    /// assert_eq!(pairs, vec!["(1, 2)", "(1, 3)", "(2, 3)"]);
    /// ```
    pub fn all(n: u32) -> impl Iterator<Item = Self> {
        (1..=n).flat_map(move |a| ((a + 1)..=n).map(move |b| Self { a, b }))
    }

    /// Number of pairs in the universe {1, ..., n}
    #[must_use]
    pub const fn count(n: u32) -> usize {
        let n = n as usize;
        n * n.saturating_sub(1) / 2
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
