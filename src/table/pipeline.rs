//! Sort-then-filter derivation of the rows a table displays.
//!
//! The pipeline is a pure function of `(rows, sort, filters)` and works on row
//! indices, so the input rows are never reordered or copied:
//!
//! ```text
//! rows ──► sort stage ──► filter stage ──► display indices
//!          (stable)       (every filter key must match)
//! ```
//!
//! Sorting always happens before filtering. The filter stage keeps the relative
//! order produced by the sort stage.

use crate::domain::{Row, SortConfig, SortDirection};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Derives the display order of `rows` as indices into the input slice.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use zwidgets::{Row, SortConfig};
/// use zwidgets::table::derive_rows;
///
/// let rows = vec![
///     Row::new().with("name", "Bob").with("age", 30),
///     Row::new().with("name", "Ann").with("age", 25),
/// ];
/// let sort = SortConfig::ascending("name");
/// let mut filters = BTreeMap::new();
/// filters.insert("name".to_string(), "b".to_string());
///
/// assert_eq!(derive_rows(&rows, Some(&sort), &BTreeMap::new()), vec![1, 0]);
/// assert_eq!(derive_rows(&rows, Some(&sort), &filters), vec![0]);
/// ```
#[must_use]
pub fn derive_rows(
    rows: &[Row],
    sort: Option<&SortConfig>,
    filters: &BTreeMap<String, String>,
) -> Vec<usize> {
    let _span = tracing::trace_span!(
        "derive_rows",
        row_count = rows.len(),
        sorted = sort.is_some(),
        filter_count = filters.len()
    )
    .entered();

    let mut order = sort_indices(rows, sort);
    order.retain(|&idx| row_matches(&rows[idx], filters));
    order
}

/// Sort stage: input order when `sort` is `None`, otherwise a stable sort on the key.
#[must_use]
pub fn sort_indices(rows: &[Row], sort: Option<&SortConfig>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(sort) = sort {
        // slice::sort_by is stable: ties keep their input order in both directions.
        order.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], sort));
    }
    order
}

/// Three-way comparison of two rows on the sort key, inverted for descending.
///
/// A missing value orders before any present value.
#[must_use]
pub fn compare_rows(a: &Row, b: &Row, sort: &SortConfig) -> Ordering {
    let ordering = match (a.get(&sort.key), b.get(&sort.key)) {
        (Some(a), Some(b)) => a.natural_cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Filter stage predicate: every filter must be a case-insensitive substring of
/// the row's display text for that key.
///
/// A missing value is matched as the empty string. Empty filter text matches
/// every row.
#[must_use]
pub fn row_matches(row: &Row, filters: &BTreeMap<String, String>) -> bool {
    filters.iter().all(|(key, needle)| {
        needle.is_empty() || row.display(key).to_lowercase().contains(&needle.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Row> {
        vec![
            Row::new().with("id", 1).with("name", "Alice").with("age", 25),
            Row::new().with("id", 2).with("name", "Bob").with("age", 30),
            Row::new().with("id", 3).with("name", "Charlie").with("age", 20),
        ]
    }

    fn filter(key: &str, text: &str) -> BTreeMap<String, String> {
        BTreeMap::from([(key.to_string(), text.to_string())])
    }

    #[test]
    fn no_sort_preserves_input_order() {
        assert_eq!(sort_indices(&people(), None), vec![0, 1, 2]);
    }

    #[test]
    fn sorts_numbers_in_both_directions() {
        let rows = people();
        assert_eq!(sort_indices(&rows, Some(&SortConfig::ascending("age"))), vec![2, 0, 1]);
        assert_eq!(sort_indices(&rows, Some(&SortConfig::descending("age"))), vec![1, 0, 2]);
    }

    #[test]
    fn missing_values_sort_first_ascending() {
        let rows = vec![
            Row::new().with("age", 3),
            Row::new(),
            Row::new().with("age", 1),
        ];
        assert_eq!(sort_indices(&rows, Some(&SortConfig::ascending("age"))), vec![1, 2, 0]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = people();
        assert_eq!(derive_rows(&rows, None, &filter("name", "ALI")), vec![0]);
        assert_eq!(derive_rows(&rows, None, &filter("name", "li")), vec![0, 2]);
    }

    #[test]
    fn filter_matches_numbers_as_text() {
        assert_eq!(derive_rows(&people(), None, &filter("id", "2")), vec![1]);
    }

    #[test]
    fn filter_on_missing_value_sees_empty_text() {
        let rows = vec![Row::new().with("name", "x"), Row::new()];
        assert_eq!(derive_rows(&rows, None, &filter("name", "x")), vec![0]);
        assert_eq!(derive_rows(&rows, None, &filter("name", "")), vec![0, 1]);
    }

    #[test]
    fn every_filter_must_match() {
        let mut filters = filter("name", "a");
        filters.insert("id".into(), "3".into());
        assert_eq!(derive_rows(&people(), None, &filters), vec![2]);
    }

    #[test]
    fn filter_runs_after_sort() {
        let rows = people();
        let sort = SortConfig::descending("name");
        assert_eq!(derive_rows(&rows, Some(&sort), &filter("name", "a")), vec![2, 0]);
    }
}
