//! Remote source: search, sort, and pagination happen server-side; facet
//! constraints are re-applied locally to the returned page.
//!
//! The backend only understands `{ search, column, dir, length, page,
//! draw }`, so facets filter the visible rows of the current page without
//! reducing the server's `total` or touching other pages. The "N results"
//! count can therefore exceed the rows actually shown. That narrower
//! guarantee is deliberate and observable, not masked here.

use crate::config::RemoteConfig;
use crate::query::matches_facets;
use crate::schema::ListSchema;
use crate::source::RecordSource;
use async_trait::async_trait;
use deskhub_model::{
    FilterCriteria, PageEnvelope, PageRequest, PageResult, RetrievalError,
    RetrievalResult,
};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;
use url::Url;

/// Re-apply facet constraints to a page the server already cut.
///
/// Only `items` shrinks: `total_count` and `total_pages` stay authoritative
/// from the server because records on other pages were never seen and may
/// well match.
pub fn apply_client_facets<R>(
    mut page: PageResult<R>,
    criteria: &FilterCriteria,
    schema: &ListSchema<R>,
) -> PageResult<R> {
    if criteria.active_facet_count() == 0 {
        return page;
    }
    let before = page.items.len();
    page.items
        .retain(|record| matches_facets(record, criteria, schema));
    if page.items.len() != before {
        debug!(
            kept = page.items.len(),
            dropped = before - page.items.len(),
            total = page.total_count,
            "client-side facets narrowed the visible page"
        );
    }
    page
}

/// Source backed by a paginating endpoint.
#[derive(Debug)]
pub struct RemoteSource<R> {
    client: reqwest::Client,
    endpoint: Url,
    schema: Arc<ListSchema<R>>,
    draw: AtomicU64,
    /// Last criteria sent, kept only so a caller can retry after a failure.
    /// Never treated as authoritative screen state.
    last_criteria: Mutex<Option<FilterCriteria>>,
}

impl<R> RemoteSource<R>
where
    R: DeserializeOwned + Send + Sync,
{
    /// Build against a configured endpoint with a fresh client.
    pub fn new(
        config: &RemoteConfig,
        path: &str,
        schema: Arc<ListSchema<R>>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self::with_client(
            reqwest::Client::new(),
            config.endpoint_for(path)?,
            schema,
        ))
    }

    /// Build with a caller-supplied client (shared pools, custom TLS).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: Url,
        schema: Arc<ListSchema<R>>,
    ) -> Self {
        Self {
            client,
            endpoint,
            schema,
            draw: AtomicU64::new(0),
            last_criteria: Mutex::new(None),
        }
    }

    /// Re-issue the last request, if any. Retrying is the caller's decision;
    /// nothing here retries automatically.
    pub async fn retry(&self) -> Option<RetrievalResult<PageResult<R>>> {
        let criteria = self
            .last_criteria
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;
        Some(self.send(&criteria).await)
    }

    async fn send(
        &self,
        criteria: &FilterCriteria,
    ) -> RetrievalResult<PageResult<R>> {
        let draw = self.draw.fetch_add(1, Ordering::Relaxed) + 1;
        let request = PageRequest::from_criteria(criteria, draw);
        debug!(
            endpoint = %self.endpoint,
            draw,
            page = request.page,
            search = %request.search,
            "fetching remote page"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request)
            .send()
            .await
            .map_err(|err| RetrievalError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status(status.as_u16()));
        }

        let envelope: PageEnvelope<R> = response
            .json()
            .await
            .map_err(|err| RetrievalError::MalformedPayload(err.to_string()))?;

        Ok(apply_client_facets(
            envelope.into_page_result(),
            criteria,
            &self.schema,
        ))
    }
}

#[async_trait]
impl<R> RecordSource<R> for RemoteSource<R>
where
    R: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
    ) -> RetrievalResult<PageResult<R>> {
        *self
            .last_criteria
            .lock()
            .unwrap_or_else(PoisonError::into_inner) =
            Some(criteria.clone());
        self.send(criteria).await
    }
}
