use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Programmer errors at the presentation boundary. These never arise when a
/// screen only drives the exposed controller operations, and they are never
/// silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("unknown facet key: {0}")]
    UnknownFacet(String),

    #[error("value {value:?} is not in the enumerated set for facet {facet:?}")]
    InvalidFacetValue { facet: String, value: String },

    #[error("unknown sort column: {0}")]
    UnknownSortColumn(String),

    #[error("page {0} is out of range, pages start at 1")]
    PageOutOfRange(usize),

    #[error("page size must be at least 1")]
    PageSizeOutOfRange,
}

/// Runtime retrieval failures. Caught at the controller boundary, surfaced
/// as a human-readable message while the last good page stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RetrievalError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

pub type RetrievalResult<T> = std::result::Result<T, RetrievalError>;
