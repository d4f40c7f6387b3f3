//! Stateful sortable/filterable table.
//!
//! [`Table`] owns the input rows, the column descriptors, and the two pieces of
//! interactive state: the sort configuration and the filter map. The display order
//! is derived by [`derive_rows`](super::derive_rows) and kept until one of its
//! inputs changes; every mutating method re-derives it before returning.
//!
//! Keyboard hosts drive the table through a focused column (sort toggle, filter
//! editing) and a row cursor. Both are clamped after every re-derivation.

use super::pipeline::derive_rows;
use crate::domain::{Column, Result, Row, SortConfig, SortDirection, WidgetError};
use crate::ui::theme::TableStyles;
use crate::ui::viewmodel::{HeaderCell, TableRowView, TableView};
use std::collections::{BTreeMap, HashSet};

/// Indicator for a sortable column that is not the active sort.
pub const UNSORTED_INDICATOR: &str = "⇵";
/// Indicator for an ascending sort.
pub const ASCENDING_INDICATOR: &str = "▲";
/// Indicator for a descending sort.
pub const DESCENDING_INDICATOR: &str = "▼";

/// A sortable/filterable table over a sequence of rows.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    columns: Vec<Column>,
    styles: TableStyles,
    sort: Option<SortConfig>,
    filters: BTreeMap<String, String>,
    /// Derived display order, indices into `rows`.
    display: Vec<usize>,
    focused_column: usize,
    editing_filter: bool,
    selected_index: usize,
}

impl Table {
    /// Creates a table with no sort and no filters.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::DuplicateColumnKey`] if two columns share a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zwidgets::{Column, Row, Table};
    ///
    /// let table = Table::new(
    ///     vec![Row::new().with("name", "Bob"), Row::new().with("name", "Ann")],
    ///     vec![Column::new("name", "Name").sortable().filterable()],
    /// )?;
    /// assert_eq!(table.display_rows().count(), 2);
    /// # Ok::<(), zwidgets::WidgetError>(())
    /// ```
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(WidgetError::DuplicateColumnKey(column.key.clone()));
            }
        }

        let mut table = Self {
            rows,
            columns,
            styles: TableStyles::default(),
            sort: None,
            filters: BTreeMap::new(),
            display: Vec::new(),
            focused_column: 0,
            editing_filter: false,
            selected_index: 0,
        };
        table.refresh();
        Ok(table)
    }

    /// Sets the optional `container`/`header`/`body` style slots.
    #[must_use]
    pub fn with_styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub const fn styles(&self) -> &TableStyles {
        &self.styles
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Current filter text of a column, empty if never typed into.
    #[must_use]
    pub fn filter_text(&self, key: &str) -> &str {
        self.filters.get(key).map_or("", String::as_str)
    }

    /// Replaces the input rows and re-derives the display order.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.refresh();
    }

    /// Applies a click on a column's sort affordance.
    ///
    /// Cycles `none → ascending → descending → none` on the same column; a click on
    /// another column starts at ascending for that column. Returns the new sort.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownColumn`] or [`WidgetError::NotSortable`].
    pub fn toggle_sort(&mut self, key: &str) -> Result<Option<SortConfig>> {
        let column = self.column(key)?;
        if !column.sortable {
            return Err(WidgetError::NotSortable(key.to_string()));
        }

        self.sort = SortConfig::toggle(self.sort.as_ref(), key);
        tracing::debug!(column = %key, sort = ?self.sort, "sort toggled");
        self.refresh();
        Ok(self.sort.clone())
    }

    /// Sets the filter text of a column. Empty text places no constraint.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownColumn`] or [`WidgetError::NotFilterable`].
    pub fn set_filter(&mut self, key: &str, text: impl Into<String>) -> Result<()> {
        let column = self.column(key)?;
        if !column.filterable {
            return Err(WidgetError::NotFilterable(key.to_string()));
        }

        let text = text.into();
        tracing::trace!(column = %key, filter = %text, "filter updated");
        self.filters.insert(key.to_string(), text);
        self.refresh();
        Ok(())
    }

    /// Indices into [`rows`](Self::rows) in display order.
    #[must_use]
    pub fn display_indices(&self) -> &[usize] {
        &self.display
    }

    /// Rows in display order.
    pub fn display_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.display.iter().map(|&idx| &self.rows[idx])
    }

    /// Sort indicator for a column header; `None` for non-sortable columns.
    #[must_use]
    pub fn sort_indicator(&self, key: &str) -> Option<&'static str> {
        let column = self.columns.iter().find(|c| c.key == key)?;
        if !column.sortable {
            return None;
        }
        Some(match &self.sort {
            Some(sort) if sort.key == key => match sort.direction {
                SortDirection::Ascending => ASCENDING_INDICATOR,
                SortDirection::Descending => DESCENDING_INDICATOR,
            },
            _ => UNSORTED_INDICATOR,
        })
    }

    #[must_use]
    pub fn focused_column(&self) -> Option<&Column> {
        self.columns.get(self.focused_column)
    }

    pub fn focus_next_column(&mut self) {
        if self.columns.is_empty() {
            return;
        }
        self.editing_filter = false;
        self.focused_column = (self.focused_column + 1) % self.columns.len();
    }

    pub fn focus_prev_column(&mut self) {
        if self.columns.is_empty() {
            return;
        }
        self.editing_filter = false;
        self.focused_column = self
            .focused_column
            .checked_sub(1)
            .unwrap_or(self.columns.len() - 1);
    }

    /// Toggles the sort of the focused column. No-op if it is not sortable.
    ///
    /// Returns whether the sort changed.
    pub fn toggle_focused_sort(&mut self) -> Result<bool> {
        let Some(column) = self.focused_column() else {
            return Ok(false);
        };
        if !column.sortable {
            return Ok(false);
        }
        let key = column.key.clone();
        self.toggle_sort(&key)?;
        Ok(true)
    }

    #[must_use]
    pub const fn is_editing_filter(&self) -> bool {
        self.editing_filter
    }

    /// Starts typing into the focused column's filter. No-op if not filterable.
    pub fn begin_filter_edit(&mut self) -> bool {
        self.editing_filter = self.focused_column().is_some_and(|c| c.filterable);
        self.editing_filter
    }

    pub fn end_filter_edit(&mut self) {
        self.editing_filter = false;
    }

    /// Appends a character to the focused filter while editing.
    pub fn push_filter_char(&mut self, c: char) -> Result<bool> {
        self.edit_focused_filter(|text| text.push(c))
    }

    /// Removes the last character of the focused filter while editing.
    pub fn pop_filter_char(&mut self) -> Result<bool> {
        self.edit_focused_filter(|text| {
            text.pop();
        })
    }

    fn edit_focused_filter(&mut self, edit: impl FnOnce(&mut String)) -> Result<bool> {
        if !self.editing_filter {
            return Ok(false);
        }
        let Some(key) = self.focused_column().map(|c| c.key.clone()) else {
            return Ok(false);
        };
        let mut text = self.filter_text(&key).to_string();
        edit(&mut text);
        self.set_filter(&key, text)?;
        Ok(true)
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Row under the cursor, if any row is displayed.
    #[must_use]
    pub fn selected_row(&self) -> Option<&Row> {
        self.display.get(self.selected_index).map(|&idx| &self.rows[idx])
    }

    /// Moves the row cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.display.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.display.len();
    }

    /// Moves the row cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.display.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.display.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Builds the renderable view of the table.
    ///
    /// `available_rows` bounds the number of body rows; the window is centered on
    /// the cursor the same way a list view scrolls. `focused` marks whether the
    /// table panel currently owns keyboard input.
    #[must_use]
    pub fn compute_view(&self, available_rows: usize, focused: bool) -> TableView {
        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| HeaderCell {
                title: column.title.clone(),
                sort_indicator: self.sort_indicator(&column.key),
                filter: column.filterable.then(|| self.filter_text(&column.key).to_string()),
                filter_placeholder: format!("Filter {}", column.title),
                is_focused: focused && idx == self.focused_column,
                is_editing: focused && self.editing_filter && idx == self.focused_column,
            })
            .collect();

        let total = self.display.len();
        let mut start = self.selected_index.saturating_sub(available_rows / 2);
        let end = (start + available_rows).min(total);
        if end - start < available_rows && total >= available_rows {
            start = end.saturating_sub(available_rows);
        }

        let rows = self.display[start..end]
            .iter()
            .enumerate()
            .map(|(offset, &idx)| {
                let row = &self.rows[idx];
                TableRowView {
                    cells: self.columns.iter().map(|c| row.display(&c.key)).collect(),
                    is_selected: focused && start + offset == self.selected_index,
                }
            })
            .collect();

        TableView {
            headers,
            rows,
            total_rows: self.rows.len(),
            shown_rows: total,
            styles: self.styles.clone(),
        }
    }

    fn column(&self, key: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| WidgetError::UnknownColumn(key.to_string()))
    }

    /// Re-derives the display order and clamps the cursor.
    fn refresh(&mut self) {
        self.display = derive_rows(&self.rows, self.sort.as_ref(), &self.filters);
        if self.display.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.display.len() - 1);
        }
        tracing::trace!(shown = self.display.len(), total = self.rows.len(), "table re-derived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            vec![
                Row::new().with("id", 1).with("name", "Alice").with("age", 25),
                Row::new().with("id", 2).with("name", "Bob").with("age", 30),
                Row::new().with("id", 3).with("name", "Charlie").with("age", 20),
            ],
            vec![
                Column::new("id", "ID").sortable().filterable(),
                Column::new("name", "Name").sortable().filterable(),
                Column::new("age", "Age").sortable(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_column_keys() {
        let err = Table::new(vec![], vec![Column::new("a", "A"), Column::new("a", "B")]).unwrap_err();
        assert!(matches!(err, WidgetError::DuplicateColumnKey(k) if k == "a"));
    }

    #[test]
    fn sort_and_filter_errors_name_the_column() {
        let mut t = table();
        assert!(matches!(t.toggle_sort("email"), Err(WidgetError::UnknownColumn(_))));
        assert!(matches!(t.set_filter("age", "2"), Err(WidgetError::NotFilterable(_))));
        let mut plain = Table::new(vec![], vec![Column::new("x", "X")]).unwrap();
        assert!(matches!(plain.toggle_sort("x"), Err(WidgetError::NotSortable(_))));
    }

    #[test]
    fn indicators_follow_the_sort_state() {
        let mut t = table();
        assert_eq!(t.sort_indicator("age"), Some(UNSORTED_INDICATOR));
        t.toggle_sort("age").unwrap();
        assert_eq!(t.sort_indicator("age"), Some(ASCENDING_INDICATOR));
        assert_eq!(t.sort_indicator("name"), Some(UNSORTED_INDICATOR));
        t.toggle_sort("age").unwrap();
        assert_eq!(t.sort_indicator("age"), Some(DESCENDING_INDICATOR));
    }

    #[test]
    fn filter_edit_targets_focused_column() {
        let mut t = table();
        t.focus_next_column();
        assert!(t.begin_filter_edit());
        t.push_filter_char('B').unwrap();
        assert_eq!(t.filter_text("name"), "B");
        assert_eq!(t.display_indices(), &[1]);
        t.pop_filter_char().unwrap();
        assert_eq!(t.display_indices(), &[0, 1, 2]);
    }

    #[test]
    fn filter_edit_refuses_non_filterable_column() {
        let mut t = table();
        t.focus_prev_column();
        assert_eq!(t.focused_column().map(|c| c.key.as_str()), Some("age"));
        assert!(!t.begin_filter_edit());
        assert!(!t.push_filter_char('x').unwrap());
    }

    #[test]
    fn cursor_is_clamped_after_filtering() {
        let mut t = table();
        t.move_selection_up();
        assert_eq!(t.selected_index(), 2);
        t.set_filter("name", "bob").unwrap();
        assert_eq!(t.selected_index(), 0);
        assert_eq!(t.selected_row().map(|r| r.display("name")), Some("Bob".into()));
    }

    #[test]
    fn view_renders_missing_values_blank() {
        let t = Table::new(
            vec![Row::new().with("a", "x")],
            vec![Column::new("a", "A"), Column::new("b", "B")],
        )
        .unwrap();
        let view = t.compute_view(10, false);
        assert_eq!(view.rows[0].cells, vec!["x".to_string(), String::new()]);
        assert_eq!(view.headers[1].sort_indicator, None);
        assert_eq!(view.headers[1].filter, None);
    }

    #[test]
    fn view_windows_around_the_cursor() {
        let rows = (0..10).map(|i| Row::new().with("n", i)).collect();
        let mut t = Table::new(rows, vec![Column::new("n", "N")]).unwrap();
        for _ in 0..8 {
            t.move_selection_down();
        }
        let view = t.compute_view(4, true);
        let shown: Vec<&str> = view.rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(shown, vec!["6", "7", "8", "9"]);
        assert!(view.rows[2].is_selected);
    }
}
