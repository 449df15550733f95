//! One retrieved page of records plus its page metadata.

use serde::{Deserialize, Serialize};

/// An ordered page of records together with the totals needed to render
/// pagination chrome. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<R> {
    pub items: Vec<R>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_count / page_size)`, floored at 1: an empty collection is
    /// "page 1 of 1", never "page 1 of 0".
    pub total_pages: usize,
}

impl<R> PageResult<R> {
    /// Build a result, deriving `total_pages` from the totals.
    pub fn new(
        items: Vec<R>,
        total_count: usize,
        page: usize,
        page_size: usize,
    ) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1)).max(1);
        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
        }
    }

    /// An empty "page 1 of 1" result.
    pub fn empty(page_size: usize) -> Self {
        Self::new(Vec::new(), 0, 1, page_size)
    }
}
