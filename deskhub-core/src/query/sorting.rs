//! Stable column ordering.
//!
//! One comparator per column: descending is always the reversal of the
//! ascending comparison, never a second hand-written comparator, so the two
//! directions cannot drift apart. Reversing each pairwise comparison keeps
//! ties equal, so the stable sort below never reshuffles tied rows in either
//! direction.

use crate::schema::ColumnDef;
use deskhub_model::SortDirection;
use std::cmp::Ordering;

/// Compare two records on one column in the given direction.
pub fn compare_records<R>(
    a: &R,
    b: &R,
    column: &ColumnDef<R>,
    direction: SortDirection,
) -> Ordering {
    let ordering = (column.key)(a).cmp(&(column.key)(b));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort in place with the standard library's stable sort: tied records keep
/// their original relative order.
pub fn sort_records<R>(
    items: &mut [R],
    column: &ColumnDef<R>,
    direction: SortDirection,
) {
    items.sort_by(|a, b| compare_records(a, b, column, direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SortKey;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Space {
        name: String,
        rate: f64,
        opened: Option<i32>, // year, None for unopened spaces
    }

    fn space(name: &str, rate: f64, opened: Option<i32>) -> Space {
        Space {
            name: name.to_string(),
            rate,
            opened,
        }
    }

    const NAME: ColumnDef<Space> = ColumnDef {
        name: "name",
        key: |s| SortKey::folded_text(&s.name),
    };
    const RATE: ColumnDef<Space> = ColumnDef {
        name: "rate",
        key: |s| SortKey::number(s.rate),
    };
    const OPENED: ColumnDef<Space> = ColumnDef {
        name: "opened",
        key: |s| {
            SortKey::opt_date(s.opened.and_then(|year| {
                Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()
            }))
        },
    };

    #[test]
    fn text_sort_ignores_case() {
        let mut spaces = vec![
            space("beacon", 10.0, None),
            space("Atrium", 10.0, None),
            space("cowork", 10.0, None),
        ];
        sort_records(&mut spaces, &NAME, SortDirection::Ascending);
        let names: Vec<&str> =
            spaces.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Atrium", "beacon", "cowork"]);
    }

    #[test]
    fn descending_is_exactly_the_reverse_per_pair() {
        let a = space("Atrium", 12.5, Some(2019));
        let b = space("Beacon", 8.0, Some(2021));
        for column in [&NAME, &RATE, &OPENED] {
            let asc = compare_records(&a, &b, column, SortDirection::Ascending);
            let desc =
                compare_records(&a, &b, column, SortDirection::Descending);
            assert_eq!(asc.reverse(), desc, "column {}", column.name);
        }
    }

    #[test]
    fn numeric_sort_is_numeric_not_lexical() {
        let mut spaces = vec![
            space("A", 100.0, None),
            space("B", 20.0, None),
            space("C", 3.0, None),
        ];
        sort_records(&mut spaces, &RATE, SortDirection::Ascending);
        let rates: Vec<f64> = spaces.iter().map(|s| s.rate).collect();
        assert_eq!(rates, vec![3.0, 20.0, 100.0]);
    }

    #[test]
    fn date_sort_is_chronological_with_missing_last() {
        let mut spaces = vec![
            space("Unopened", 0.0, None),
            space("New", 0.0, Some(2023)),
            space("Old", 0.0, Some(2015)),
        ];
        sort_records(&mut spaces, &OPENED, SortDirection::Ascending);
        let names: Vec<&str> =
            spaces.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Old", "New", "Unopened"]);
    }

    #[test]
    fn ties_preserve_original_relative_order_both_directions() {
        let original = vec![
            space("First", 10.0, None),
            space("Second", 10.0, None),
            space("Third", 10.0, None),
        ];
        for direction in
            [SortDirection::Ascending, SortDirection::Descending]
        {
            let mut spaces = original.clone();
            sort_records(&mut spaces, &RATE, direction);
            assert_eq!(spaces, original, "direction {direction:?}");
        }
    }
}
