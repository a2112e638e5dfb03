//! Search parameters and search-space sizes

use thiserror::Error;

/// Validated parameters of a strategy search
///
/// - `n`: universe size, at least 2
/// - `l`: question length, between 1 and `n`
/// - `k`: questions per strategy, at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    n: u32,
    l: u32,
    k: usize,
}

/// Error type for invalid search parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("The universe needs at least 2 numbers, got n = {0}")]
    UniverseTooSmall(u32),
    #[error("Question length must be between 1 and n = {n}, got l = {l}")]
    InvalidQuestionLength { l: u32, n: u32 },
    #[error("A strategy needs at least one question, got k = {0}")]
    InvalidStrategySize(usize),
}

impl SearchParams {
    /// Validate and create search parameters
    ///
    /// # Errors
    /// Returns `SearchError` if `n < 2`, `l` is outside `1..=n`, or `k == 0`.
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::search::SearchParams;
    ///
    /// assert!(SearchParams::new(4, 2, 2).is_ok());
    /// assert!(SearchParams::new(4, 5, 2).is_err());
    /// ```
    pub const fn new(n: u32, l: u32, k: usize) -> Result<Self, SearchError> {
        if n < 2 {
            return Err(SearchError::UniverseTooSmall(n));
        }
        if l == 0 || l > n {
            return Err(SearchError::InvalidQuestionLength { l, n });
        }
        if k == 0 {
            return Err(SearchError::InvalidStrategySize(k));
        }
        Ok(Self { n, l, k })
    }

    #[inline]
    #[must_use]
    pub const fn n(self) -> u32 {
        self.n
    }

    #[inline]
    #[must_use]
    pub const fn l(self) -> u32 {
        self.l
    }

    #[inline]
    #[must_use]
    pub const fn k(self) -> usize {
        self.k
    }

    /// Number of distinct questions of length `l`: C(n, l)
    ///
    /// Saturates at `u128::MAX`.
    #[must_use]
    pub fn question_count(self) -> u128 {
        binomial(u128::from(self.n), u128::from(self.l)).unwrap_or(u128::MAX)
    }

    /// Number of candidates the exhaustive search visits: C(C(n, l), k)
    ///
    /// Returns `None` when the count does not fit in a `u128`.
    #[must_use]
    pub fn exhaustive_count(self) -> Option<u128> {
        let questions = binomial(u128::from(self.n), u128::from(self.l))?;
        binomial(questions, self.k as u128)
    }

    /// Number of candidates the circulant search visits: one per starting question
    #[must_use]
    pub fn circulant_count(self) -> u128 {
        self.question_count()
    }
}

/// Binomial coefficient C(n, k), or `None` on overflow
///
/// # Examples
/// ```
/// use offline_guessing::search::binomial;
///
/// assert_eq!(binomial(4, 2), Some(6));
/// assert_eq!(binomial(3, 5), Some(0));
/// ```
#[must_use]
pub fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);

    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by i + 1
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}
