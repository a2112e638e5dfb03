//! Runtime selection of the search generator

use super::{ChainLength, SearchParams, generate_all_strategies, generate_circulant_strategies};
use crate::strategy::Strategy;
use std::fmt;

/// Which generator a search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Every set of `k` distinct questions
    Exhaustive,
    /// Cyclic-shift chains from each starting question
    Circulant(ChainLength),
}

impl SearchMode {
    /// Start a fresh enumeration for this mode
    #[must_use]
    pub fn strategies(
        self,
        params: SearchParams,
        winning_only: bool,
    ) -> Box<dyn Iterator<Item = Strategy>> {
        match self {
            Self::Exhaustive => Box::new(generate_all_strategies(params, winning_only)),
            Self::Circulant(chain_length) => Box::new(generate_circulant_strategies(
                params,
                chain_length,
                winning_only,
            )),
        }
    }

    /// Number of candidates this mode examines, if it fits in a `u128`
    #[must_use]
    pub fn candidate_count(self, params: SearchParams) -> Option<u128> {
        match self {
            Self::Exhaustive => params.exhaustive_count(),
            Self::Circulant(_) => Some(params.circulant_count()),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Circulant(chain_length) => write!(f, "circulant ({chain_length})"),
        }
    }
}
