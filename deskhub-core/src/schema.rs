//! Per-screen record shape, supplied by the caller rather than hardcoded.
//!
//! Different screens recognize different facet sets (country/state/city/role
//! for one entity, payment status/workspace type for another), so the shape
//! is a value: named facets with their enumerated sets, named sortable
//! columns, and the text projections search runs over.

use chrono::{DateTime, Utc};
use deskhub_model::{FacetSelection, ValidationError};
use ordered_float::OrderedFloat;
use std::fmt;

/// A borrowed text projection out of a record, `None` when the record has
/// no value for the field.
pub type TextProjection<R> = fn(&R) -> Option<&str>;

/// Comparable key extracted from a record for one column.
///
/// Variant order matters: `Missing` is declared last so records without a
/// value sort after every present value in ascending order, and the derived
/// order negates cleanly for descending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Lexical order, compared exactly as produced.
    Text(String),
    /// Numeric order over a total-ordered float.
    Number(OrderedFloat<f64>),
    /// Chronological order.
    Date(DateTime<Utc>),
    Missing,
}

impl SortKey {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Case-folded text, for columns that should ignore case.
    pub fn folded_text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    pub fn date(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::text)
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::number)
    }

    pub fn opt_date(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Missing, Self::date)
    }
}

/// A discrete filter dimension: its name, its fixed enumerated value set,
/// and the projection reading the record's value for it.
pub struct FacetDef<R> {
    pub name: &'static str,
    pub values: &'static [&'static str],
    pub get: TextProjection<R>,
}

impl<R> fmt::Debug for FacetDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetDef")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// A sortable column: its name and the key projection it orders by.
pub struct ColumnDef<R> {
    pub name: &'static str,
    pub key: fn(&R) -> SortKey,
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Everything the pipeline needs to know about one screen's records.
pub struct ListSchema<R> {
    facets: Vec<FacetDef<R>>,
    columns: Vec<ColumnDef<R>>,
    search_fields: Vec<TextProjection<R>>,
}

impl<R> Default for ListSchema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ListSchema<R> {
    pub fn new() -> Self {
        Self {
            facets: Vec::new(),
            columns: Vec::new(),
            search_fields: Vec::new(),
        }
    }

    /// Declare a facet with its enumerated value set.
    pub fn with_facet(
        mut self,
        name: &'static str,
        values: &'static [&'static str],
        get: TextProjection<R>,
    ) -> Self {
        self.facets.push(FacetDef { name, values, get });
        self
    }

    /// Declare a sortable column.
    pub fn with_column(
        mut self,
        name: &'static str,
        key: fn(&R) -> SortKey,
    ) -> Self {
        self.columns.push(ColumnDef { name, key });
        self
    }

    /// Declare a text field that free-text search runs over.
    pub fn with_search_field(mut self, get: TextProjection<R>) -> Self {
        self.search_fields.push(get);
        self
    }

    pub fn facet_def(&self, name: &str) -> Option<&FacetDef<R>> {
        self.facets.iter().find(|f| f.name == name)
    }

    pub fn column_def(&self, name: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn search_fields(&self) -> &[TextProjection<R>] {
        &self.search_fields
    }

    /// Check a facet selection against the declared shape: the key must be
    /// declared and a constrained value must be a member of the enumerated
    /// set.
    pub fn validate_facet(
        &self,
        name: &str,
        selection: &FacetSelection,
    ) -> Result<(), ValidationError> {
        let def = self
            .facet_def(name)
            .ok_or_else(|| ValidationError::UnknownFacet(name.to_string()))?;
        match selection.value() {
            None => Ok(()),
            Some(value) if def.values.contains(&value) => Ok(()),
            Some(value) => Err(ValidationError::InvalidFacetValue {
                facet: name.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl<R> fmt::Debug for ListSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSchema")
            .field("facets", &self.facets)
            .field("columns", &self.columns)
            .field("search_fields", &self.search_fields.len())
            .finish()
    }
}
