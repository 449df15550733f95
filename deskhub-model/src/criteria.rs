//! Immutable search/filter/sort/page criteria for one list screen.
//!
//! Every operation returns a new value; the controller compares old and new
//! criteria to skip retrieval when an intent turned out to be a no-op.
//! Operations that change what is being looked at (`with_search`,
//! `with_facet`, `with_page_size`) reset the page position to 1, because the
//! old position is meaningless against the new result set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size applied when a screen does not choose its own.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort order for the active column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short token used on the wire (`asc` / `desc`).
    pub fn wire_token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// One facet's selected value, where [`FacetSelection::Any`] is the
/// "unconstrained" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetSelection {
    Any,
    Value(String),
}

impl FacetSelection {
    /// Constrain to a concrete enumerated value.
    pub fn of(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The selected value, or `None` when unconstrained.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Value(v) => Some(v.as_str()),
        }
    }
}

/// Complete retrieval criteria for one screen: search text, facet
/// constraints, sort, and page position.
///
/// The facet map only ever holds constrained entries; selecting
/// [`FacetSelection::Any`] removes the key, so derived equality matches
/// equality of meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub facets: BTreeMap<String, FacetSelection>,
    /// Empty string means no explicit sort; original order is kept.
    pub sort_column: String,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            facets: BTreeMap::new(),
            sort_column: String::new(),
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text. Resets the page to 1.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.page = 1;
        self
    }

    /// Replace one facet's selection. Resets the page to 1.
    pub fn with_facet(
        mut self,
        name: impl Into<String>,
        selection: FacetSelection,
    ) -> Self {
        let name = name.into();
        match selection {
            FacetSelection::Any => {
                self.facets.remove(&name);
            }
            constrained => {
                self.facets.insert(name, constrained);
            }
        }
        self.page = 1;
        self
    }

    /// Sort by `column`: selecting the active column flips the direction,
    /// selecting a new one resets the direction to ascending. The page
    /// position is kept, only the row order changes.
    pub fn with_sort(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        if column == self.sort_column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Replace the page size. Resets the page to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }

    /// Drop the search text and every facet constraint and return to page 1,
    /// keeping the sort and page size the user already chose.
    pub fn cleared(mut self) -> Self {
        self.search_text.clear();
        self.facets.clear();
        self.page = 1;
        self
    }

    /// Number of facets currently constrained.
    pub fn active_facet_count(&self) -> usize {
        self.facets.values().filter(|s| !s.is_any()).count()
    }

    /// Whether any search text or facet constraint is active.
    pub fn has_active_filters(&self) -> bool {
        self.active_facet_count() > 0 || !self.search_text.is_empty()
    }
}
