//! Wire contract for endpoints that paginate server-side.
//!
//! Field names here match the backend exactly: the request goes out as
//! `{ search, column, dir, length, page, draw }` query parameters and the
//! response comes back as `{ data, meta: { current_page, total, last_page,
//! per_page } }`.

use crate::criteria::FilterCriteria;
use crate::page::PageResult;
use serde::{Deserialize, Serialize};

/// Query parameters for one remote page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub search: String,
    pub column: String,
    /// `asc` or `desc`.
    pub dir: String,
    /// Rows per page.
    pub length: usize,
    pub page: usize,
    /// Opaque echo token, increases per request. Lets a response be
    /// correlated with its request independently of controller sequencing.
    pub draw: u64,
}

impl PageRequest {
    /// Project the remotely-understood subset of `criteria` onto the wire.
    /// Facets are deliberately absent: the backend does not know them, the
    /// caller re-applies them to the returned page.
    pub fn from_criteria(criteria: &FilterCriteria, draw: u64) -> Self {
        Self {
            search: criteria.search_text.clone(),
            column: criteria.sort_column.clone(),
            dir: criteria.sort_direction.wire_token().to_string(),
            length: criteria.page_size,
            page: criteria.page,
            draw,
        }
    }
}

/// Pagination totals reported by the backend. `total` is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub total: usize,
    pub last_page: usize,
    pub per_page: usize,
}

/// One page of records as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<R> {
    pub data: Vec<R>,
    pub meta: PageMeta,
}

impl<R> PageEnvelope<R> {
    /// Convert into the pipeline's page type, trusting the server totals.
    pub fn into_page_result(self) -> PageResult<R> {
        PageResult {
            items: self.data,
            total_count: self.meta.total,
            page: self.meta.current_page.max(1),
            page_size: self.meta.per_page.max(1),
            total_pages: self.meta.last_page.max(1),
        }
    }
}
