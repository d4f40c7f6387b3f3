//! Table row model: scalar cell values keyed by column.
//!
//! A [`Row`] is an ordered mapping from column key to [`CellValue`]. Rows carry no
//! identity of their own; the table identifies them by their position in the input
//! sequence. A key may be absent from a row, in which case the cell renders blank
//! and filters see an empty string.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A scalar display value stored in a table cell.
///
/// Deserializes untagged, so `1`, `2.5`, `true` and `"Ann"` in JSON or TOML map to
/// the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Rank used to order values of different kinds: booleans, then numbers, then text.
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Integer(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Total three-way comparison using the natural ordering of the value type.
    ///
    /// Integers and floats compare numerically with each other. Floats use
    /// `f64::total_cmp` so `NaN` has a fixed place. Values of unrelated kinds are
    /// ordered by kind (booleans < numbers < text), which keeps the ordering total
    /// and the sort deterministic on heterogeneous columns.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An ordered mapping from column key to cell value.
///
/// # Examples
///
/// ```
/// use zwidgets::Row;
///
/// let row = Row::new().with("id", 1).with("name", "Ann");
/// assert_eq!(row.display("name"), "Ann");
/// assert_eq!(row.display("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Returns the row with `key` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, keeping the key's original position if present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.cells.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.cells.push((key, value));
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the display text of `key`; a missing value is the empty string.
    #[must_use]
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let row = Row::new().with("a", 1).with("b", 2).with("a", "x");
        let keys: Vec<&str> = row.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&CellValue::Text("x".into())));
    }

    #[test]
    fn mixed_numbers_compare_numerically() {
        assert_eq!(CellValue::Integer(2).natural_cmp(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).natural_cmp(&CellValue::Integer(3)), Ordering::Equal);
    }

    #[test]
    fn unrelated_kinds_order_by_kind() {
        assert_eq!(CellValue::Integer(99).natural_cmp(&CellValue::from("1")), Ordering::Less);
        assert_eq!(CellValue::from(true).natural_cmp(&CellValue::Integer(0)), Ordering::Less);
    }

    #[test]
    fn display_formats_scalars() {
        let row = Row::new().with("f", 2.5).with("i", -4).with("b", false);
        assert_eq!(row.display("f"), "2.5");
        assert_eq!(row.display("i"), "-4");
        assert_eq!(row.display("b"), "false");
    }

    #[test]
    fn untagged_values_deserialize() {
        let values: Vec<CellValue> = serde_json::from_str(r#"[1, 2.5, "x", true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Integer(1),
                CellValue::Float(2.5),
                CellValue::Text("x".into()),
                CellValue::Bool(true),
            ]
        );
    }
}
