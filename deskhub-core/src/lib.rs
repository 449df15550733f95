//! Deskhub core: the read-path pipeline behind every dashboard list screen.
//!
//! A screen supplies its record shape once as a [`schema::ListSchema`]
//! (facets, sortable columns, searchable text fields), picks a
//! [`source::RecordSource`] (fully in-memory or remote page-by-page), and
//! drives a [`controller::ListController`] with user intents. The controller
//! owns the screen's criteria and state machine; the pure pieces in
//! [`query`] do the actual filtering, ordering, and slicing.

pub mod config;
pub mod controller;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod source;

pub use config::RemoteConfig;
pub use controller::{FetchOutcome, FetchRequest, ListController, ListState};
pub use schema::{ColumnDef, FacetDef, ListSchema, SortKey};
pub use source::{InMemorySource, RecordSource, RemoteSource};
