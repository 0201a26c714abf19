use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Zero rows, or a zero-length first row.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A row whose length breaks the rectangular invariant.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Negative Manhattan radius. Rejected up front, never treated as an
    /// empty neighborhood.
    #[error("manhattan radius must be non-negative, got {0}")]
    NegativeRadius(i64),
}
