//! Column descriptors and sort configuration for the table widget.

use serde::{Deserialize, Serialize};

/// Describes one table column.
///
/// Column descriptors are fixed for the lifetime of a table. `key` must be unique
/// within the table; `Table::new` rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Row key this column displays.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether the header offers a sort toggle.
    #[serde(default)]
    pub sortable: bool,
    /// Whether the header offers a filter input.
    #[serde(default)]
    pub filterable: bool,
}

impl Column {
    /// Creates a plain column that is neither sortable nor filterable.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            filterable: false,
        }
    }

    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: which column, which direction.
///
/// The table holds an `Option<SortConfig>`; `None` preserves input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    #[must_use]
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Advances the three-state toggle for a click on `key`.
    ///
    /// ```text
    /// none --click--> ascending --click--> descending --click--> none
    /// ```
    ///
    /// A click on a different column than the active one starts over at ascending
    /// for that column.
    ///
    /// # Examples
    ///
    /// ```
    /// use zwidgets::{SortConfig, SortDirection};
    ///
    /// let first = SortConfig::toggle(None, "name");
    /// assert_eq!(first, Some(SortConfig::ascending("name")));
    /// let second = SortConfig::toggle(first.as_ref(), "name");
    /// assert_eq!(second.map(|s| s.direction), Some(SortDirection::Descending));
    /// ```
    #[must_use]
    pub fn toggle(current: Option<&Self>, key: &str) -> Option<Self> {
        match current {
            Some(active) if active.key == key => match active.direction {
                SortDirection::Ascending => Some(Self::descending(key)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let a = SortConfig::toggle(None, "age");
        let b = SortConfig::toggle(a.as_ref(), "age");
        let c = SortConfig::toggle(b.as_ref(), "age");
        assert_eq!(a, Some(SortConfig::ascending("age")));
        assert_eq!(b, Some(SortConfig::descending("age")));
        assert_eq!(c, None);
    }

    #[test]
    fn toggle_on_other_column_restarts_ascending() {
        let current = SortConfig::descending("age");
        assert_eq!(
            SortConfig::toggle(Some(&current), "name"),
            Some(SortConfig::ascending("name"))
        );
    }

    #[test]
    fn column_flags_default_to_false_when_deserialized() {
        let column: Column = toml::from_str("key = \"id\"\ntitle = \"ID\"").unwrap();
        assert!(!column.sortable);
        assert!(!column.filterable);
    }
}
