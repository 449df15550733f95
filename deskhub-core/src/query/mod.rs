//! Pure pieces of the pipeline: predicate evaluation, stable ordering, and
//! page slicing. No I/O anywhere in this module; the source adapters
//! compose these over whatever collection they hold.

pub mod evaluate;
pub mod paginate;
pub mod sorting;

pub use evaluate::{evaluate, matches_facets, matches_search};
pub use paginate::{PageSlice, paginate};
pub use sorting::{compare_records, sort_records};
