//! Strategy matrix projection
//!
//! Row `i`, column `j` is 1 when number `j + 1` belongs to question `i`. The
//! grid is meant for external linear-algebra tooling.

use super::Strategy;
use std::fmt;

/// A rows × n grid of 0/1 entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyMatrix {
    rows: Vec<Vec<u8>>,
    columns: usize,
}

impl StrategyMatrix {
    /// The rows of the grid, one per question
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Entry at `row`, `column` (both 0-indexed)
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }
}

impl fmt::Display for StrategyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

impl Strategy {
    /// Project the strategy onto its 0/1 membership matrix
    ///
    /// # Examples
    /// ```
    /// use offline_guessing::strategy::Strategy;
    ///
    /// let strategy = Strategy::new([vec![1], vec![2]], 3).unwrap();
    /// assert_eq!(strategy.to_matrix().rows(), &[vec![1, 0, 0], vec![0, 1, 0]]);
    /// ```
    #[must_use]
    pub fn to_matrix(&self) -> StrategyMatrix {
        let rows = self
            .questions()
            .iter()
            .map(|q| {
                (1..=self.n())
                    .map(|j| u8::from(q.contains_element(j)))
                    .collect::<Vec<u8>>()
            })
            .collect();

        StrategyMatrix {
            rows,
            columns: self.n() as usize,
        }
    }
}
