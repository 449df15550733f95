//! Source adapters: criteria in, one page out.

pub mod memory;
pub mod remote;

pub use memory::InMemorySource;
pub use remote::{RemoteSource, apply_client_facets};

use async_trait::async_trait;
use deskhub_model::{FilterCriteria, PageResult, RetrievalResult};

/// The one capability every source exposes. Stateless per call: the same
/// criteria always describe the same page, and a source never owns screen
/// state.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
    ) -> RetrievalResult<PageResult<R>>;
}
