//! Intentional crate surface consumed by screens and view layers.

pub use crate::config::RemoteConfig;
pub use crate::controller::{
    FetchOutcome, FetchRequest, ListController, ListState,
};
pub use crate::query::{
    PageSlice, compare_records, evaluate, matches_facets, matches_search,
    paginate, sort_records,
};
pub use crate::schema::{ColumnDef, FacetDef, ListSchema, SortKey};
pub use crate::source::{
    InMemorySource, RecordSource, RemoteSource, apply_client_facets,
};
pub use deskhub_model::{
    FacetSelection, FilterCriteria, PageEnvelope, PageMeta, PageRequest,
    PageResult, RetrievalError, RetrievalResult, SortDirection,
    ValidationError,
};
