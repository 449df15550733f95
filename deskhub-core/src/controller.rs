//! Per-screen orchestration: owns the criteria and the list state machine,
//! issues exactly one fetch per criteria change, and discards stale
//! responses by sequence number (last-request-wins, no true cancellation).

use crate::schema::ListSchema;
use crate::source::RecordSource;
use deskhub_model::{
    FacetSelection, FilterCriteria, PageResult, RetrievalResult,
    ValidationError,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle of one list screen. `Loading` and `Error` carry the last good
/// page so the view never blanks while waiting or after a failure.
#[derive(Debug, Clone)]
pub enum ListState<R> {
    Idle,
    Loading { previous: Option<PageResult<R>> },
    Ready(PageResult<R>),
    Error {
        message: String,
        previous: Option<PageResult<R>>,
    },
}

impl<R> ListState<R> {
    /// The page a view should render right now: the current one when ready,
    /// otherwise the retained previous page.
    pub fn visible_page(&self) -> Option<&PageResult<R>> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } => previous.as_ref(),
            Self::Ready(page) => Some(page),
            Self::Error { previous, .. } => previous.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// A single issued retrieval, tagged with the sequence number that decides
/// whether its outcome is still current when it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub criteria: FilterCriteria,
}

/// The resolution of one [`FetchRequest`].
#[derive(Debug)]
pub struct FetchOutcome<R> {
    pub seq: u64,
    pub result: RetrievalResult<PageResult<R>>,
}

/// One controller per screen; nothing is shared across screens.
///
/// Intent operations mutate the criteria immutably (old value swapped for
/// new), move the state to `Loading`, and hand back the `FetchRequest` to
/// run. Splitting [`perform`](Self::perform) from [`apply`](Self::apply)
/// lets callers overlap requests; [`resolve`](Self::resolve) is the
/// one-call path when they do not.
pub struct ListController<R> {
    source: Arc<dyn RecordSource<R>>,
    schema: Arc<ListSchema<R>>,
    criteria: FilterCriteria,
    state: ListState<R>,
    seq: u64,
}

impl<R> std::fmt::Debug for ListController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("criteria", &self.criteria)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl<R: Clone> ListController<R> {
    pub fn new(
        source: Arc<dyn RecordSource<R>>,
        schema: Arc<ListSchema<R>>,
    ) -> Self {
        Self::with_criteria(source, schema, FilterCriteria::new())
    }

    /// Start from restored criteria (deep links, saved views).
    pub fn with_criteria(
        source: Arc<dyn RecordSource<R>>,
        schema: Arc<ListSchema<R>>,
        criteria: FilterCriteria,
    ) -> Self {
        Self {
            source,
            schema,
            criteria,
            state: ListState::Idle,
            seq: 0,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn state(&self) -> &ListState<R> {
        &self.state
    }

    pub fn active_facet_count(&self) -> usize {
        self.criteria.active_facet_count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    // === Intent operations (the presentation boundary's interface) ===

    pub fn set_search_text(
        &mut self,
        text: impl Into<String>,
    ) -> Option<FetchRequest> {
        let next = self.criteria.clone().with_search(text);
        self.submit(next)
    }

    pub fn set_facet(
        &mut self,
        name: &str,
        selection: FacetSelection,
    ) -> Result<Option<FetchRequest>, ValidationError> {
        self.schema.validate_facet(name, &selection)?;
        let next = self.criteria.clone().with_facet(name, selection);
        Ok(self.submit(next))
    }

    pub fn set_sort(
        &mut self,
        column: &str,
    ) -> Result<Option<FetchRequest>, ValidationError> {
        if self.schema.column_def(column).is_none() {
            return Err(ValidationError::UnknownSortColumn(
                column.to_string(),
            ));
        }
        let next = self.criteria.clone().with_sort(column);
        Ok(self.submit(next))
    }

    pub fn set_page(
        &mut self,
        page: usize,
    ) -> Result<Option<FetchRequest>, ValidationError> {
        if page == 0 {
            return Err(ValidationError::PageOutOfRange(page));
        }
        let next = self.criteria.clone().with_page(page);
        Ok(self.submit(next))
    }

    pub fn set_page_size(
        &mut self,
        page_size: usize,
    ) -> Result<Option<FetchRequest>, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::PageSizeOutOfRange);
        }
        let next = self.criteria.clone().with_page_size(page_size);
        Ok(self.submit(next))
    }

    pub fn clear_all(&mut self) -> Option<FetchRequest> {
        let next = self.criteria.clone().cleared();
        self.submit(next)
    }

    /// Re-fetch under the current criteria. Always issues a request; this is
    /// also how a screen kicks off its initial load and how a caller retries
    /// after an error.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    // === Retrieval ===

    /// Run one issued request against the source. Takes `&self` so multiple
    /// in-flight requests can overlap; sequencing is settled in
    /// [`apply`](Self::apply).
    pub async fn perform(&self, request: &FetchRequest) -> FetchOutcome<R> {
        let result = self.source.fetch_page(&request.criteria).await;
        FetchOutcome {
            seq: request.seq,
            result,
        }
    }

    /// Apply a landed outcome. Returns `false` when the outcome belonged to
    /// a superseded request and was discarded.
    pub fn apply(&mut self, outcome: FetchOutcome<R>) -> bool {
        if outcome.seq != self.seq {
            debug!(
                landed = outcome.seq,
                current = self.seq,
                "discarding stale response"
            );
            return false;
        }
        match outcome.result {
            Ok(page) => {
                debug!(
                    page = page.page,
                    total = page.total_count,
                    "page applied"
                );
                self.state = ListState::Ready(page);
            }
            Err(err) => {
                warn!(error = %err, "retrieval failed");
                self.state = ListState::Error {
                    message: err.to_string(),
                    previous: self.last_good(),
                };
            }
        }
        true
    }

    /// Perform and apply in one call, for callers with no overlapping
    /// requests to juggle.
    pub async fn resolve(&mut self, request: FetchRequest) -> bool {
        let outcome = self.perform(&request).await;
        self.apply(outcome)
    }

    // === Internals ===

    /// Install changed criteria and issue a fetch, or skip entirely when the
    /// operation was a no-op.
    fn submit(&mut self, next: FilterCriteria) -> Option<FetchRequest> {
        if next == self.criteria {
            debug!("criteria unchanged, skipping retrieval");
            return None;
        }
        self.criteria = next;
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchRequest {
        self.seq += 1;
        self.state = ListState::Loading {
            previous: self.last_good(),
        };
        debug!(seq = self.seq, "fetch issued");
        FetchRequest {
            seq: self.seq,
            criteria: self.criteria.clone(),
        }
    }

    fn last_good(&self) -> Option<PageResult<R>> {
        self.state.visible_page().cloned()
    }
}
