//! Record-against-criteria predicate. Pure and deterministic.

use crate::schema::ListSchema;
use deskhub_model::FilterCriteria;

/// True when the search text is empty or its lowercase form is a substring
/// of at least one of the schema's search fields (also lowercased).
pub fn matches_search<R>(
    record: &R,
    criteria: &FilterCriteria,
    schema: &ListSchema<R>,
) -> bool {
    if criteria.search_text.is_empty() {
        return true;
    }
    let needle = criteria.search_text.to_lowercase();
    schema.search_fields().iter().any(|get| {
        get(record).is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// True when every constrained facet matches the record's value exactly.
/// Facets combine with AND only. A facet the schema does not declare, or a
/// record value outside the enumerated set, fails closed rather than
/// erroring.
pub fn matches_facets<R>(
    record: &R,
    criteria: &FilterCriteria,
    schema: &ListSchema<R>,
) -> bool {
    criteria.facets.iter().all(|(name, selection)| {
        match selection.value() {
            None => true,
            Some(wanted) => schema
                .facet_def(name)
                .is_some_and(|def| (def.get)(record) == Some(wanted)),
        }
    })
}

/// The full predicate: search AND all constrained facets.
pub fn evaluate<R>(
    record: &R,
    criteria: &FilterCriteria,
    schema: &ListSchema<R>,
) -> bool {
    matches_search(record, criteria, schema)
        && matches_facets(record, criteria, schema)
}
