//! Fully-loaded source: evaluate, sort, and slice synchronously.

use crate::query::{evaluate, paginate, sort_records};
use crate::schema::ListSchema;
use crate::source::RecordSource;
use async_trait::async_trait;
use deskhub_model::{FilterCriteria, PageResult, RetrievalResult};
use std::sync::Arc;
use tracing::warn;

/// Source over a collection already held in memory. Retrieval never fails
/// here; anything wrong is a programmer error, not a runtime condition.
#[derive(Debug)]
pub struct InMemorySource<R> {
    records: Vec<R>,
    schema: Arc<ListSchema<R>>,
}

impl<R: Clone> InMemorySource<R> {
    pub fn new(records: Vec<R>, schema: Arc<ListSchema<R>>) -> Self {
        Self { records, schema }
    }

    /// Run the full local pipeline: filter across all records, stable sort,
    /// then slice the requested page.
    pub fn query(&self, criteria: &FilterCriteria) -> PageResult<R> {
        let mut matched: Vec<R> = self
            .records
            .iter()
            .filter(|record| evaluate(*record, criteria, &self.schema))
            .cloned()
            .collect();

        if !criteria.sort_column.is_empty() {
            match self.schema.column_def(&criteria.sort_column) {
                Some(column) => sort_records(
                    &mut matched,
                    column,
                    criteria.sort_direction,
                ),
                None => warn!(
                    column = %criteria.sort_column,
                    "sort column not in schema, keeping original order"
                ),
            }
        }

        let total_count = matched.len();
        let slice = paginate(&matched, criteria.page, criteria.page_size);
        PageResult::new(
            slice.items,
            total_count,
            slice.page,
            criteria.page_size,
        )
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> RecordSource<R> for InMemorySource<R> {
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
    ) -> RetrievalResult<PageResult<R>> {
        Ok(self.query(criteria))
    }
}
