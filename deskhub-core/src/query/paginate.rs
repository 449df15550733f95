//! Page slicing over an already-ordered result set.

use serde::{Deserialize, Serialize};

/// One page slice plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// The page actually returned, after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Slice `items` into the requested page.
///
/// `total_pages` is `ceil(len / page_size)` floored at 1, so an empty
/// collection is "page 1 of 1". The requested page is clamped into
/// `[1, total_pages]` before slicing the half-open range
/// `[(page - 1) * page_size, page * page_size)`: asking for a page past the
/// end returns the last valid page instead of an empty one.
pub fn paginate<T: Clone>(
    items: &[T],
    page: usize,
    page_size: usize,
) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items = items.get(start..end).unwrap_or_default().to_vec();

    PageSlice {
        items,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five() {
        let records: Vec<usize> = (0..25).collect();
        let slice = paginate(&records, 3, 10);
        assert_eq!(slice.items, (20..25).collect::<Vec<_>>());
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.page, 3);
    }

    #[test]
    fn past_the_end_clamps_to_the_last_page() {
        let records: Vec<usize> = (0..25).collect();
        let slice = paginate(&records, 9, 10);
        assert_eq!(slice.page, 3);
        assert_eq!(slice.items, (20..25).collect::<Vec<_>>());
        assert!(!slice.items.is_empty());
    }

    #[test]
    fn page_zero_clamps_to_the_first_page() {
        let records: Vec<usize> = (0..5).collect();
        let slice = paginate(&records, 0, 2);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.items, vec![0, 1]);
    }

    #[test]
    fn empty_collection_is_page_one_of_one() {
        let records: Vec<usize> = Vec::new();
        let slice = paginate(&records, 4, 10);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.total_pages, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let records: Vec<usize> = (0..42).collect();
        let first = paginate(&records, 2, 7);
        for _ in 0..10 {
            assert_eq!(paginate(&records, 2, 7), first);
        }
    }
}
