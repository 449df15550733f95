//! Core data model definitions shared across Deskhub crates.

pub mod criteria;
pub mod error;
pub mod page;
pub mod wire;

// Intentionally curated re-exports for downstream consumers.
pub use criteria::{FacetSelection, FilterCriteria, SortDirection};
pub use error::{RetrievalError, RetrievalResult, ValidationError};
pub use page::PageResult;
pub use wire::{PageEnvelope, PageMeta, PageRequest};
