//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from file and HTTP errors.

use super::{InvalidStation, Station};

/// Domain-level errors raised while building records from raw cells.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A numeric column held something that is not a finite number
    #[error("{field} is not a finite number: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    /// A station cell was blank
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// The same station was listed twice in a travel-time matrix
    #[error("station {0} listed more than once")]
    DuplicateStation(Station),
}
