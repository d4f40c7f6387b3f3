//! View model types representing renderable UI state.
//!
//! View models are computed from widget state (`Table::compute_view`,
//! `Form::compute_view`, `DateRangeSelector::compute_view`) and assembled into a
//! [`UIViewModel`] by `AppState::compute_viewmodel`. They contain no behavior,
//! only display-ready data.

use crate::domain::FieldType;
use crate::ui::theme::TableStyles;

/// Complete page view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Page title bar.
    pub header: HeaderInfo,
    pub table_section: SectionInfo,
    pub table: TableView,
    pub form_section: SectionInfo,
    pub form: FormView,
    pub date_section: SectionInfo,
    pub date_picker: DatePickerView,
    /// Last submitted/selected value, if any.
    pub status: Option<String>,
    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Page title bar.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Keybinding hints for the bottom of the page.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Title line above a widget.
#[derive(Debug, Clone)]
pub struct SectionInfo {
    pub title: String,
    /// Whether the widget below owns keyboard input.
    pub is_focused: bool,
}

/// One table header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub title: String,
    /// `▲`, `▼` or `⇵` for sortable columns, `None` otherwise.
    pub sort_indicator: Option<&'static str>,
    /// Current filter text for filterable columns, `None` otherwise.
    pub filter: Option<String>,
    /// Hint shown in an empty filter input.
    pub filter_placeholder: String,
    pub is_focused: bool,
    /// Whether keystrokes currently go into this column's filter.
    pub is_editing: bool,
}

/// One displayed table row: the display text of each column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowView {
    pub cells: Vec<String>,
    pub is_selected: bool,
}

/// Renderable table.
#[derive(Debug, Clone)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    /// Visible window of derived rows.
    pub rows: Vec<TableRowView>,
    /// Number of input rows.
    pub total_rows: usize,
    /// Number of rows surviving the filters.
    pub shown_rows: usize,
    pub styles: TableStyles,
}

/// Renderable form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub kind: FieldType,
    /// The bound value, split into lines for textareas.
    pub value_lines: Vec<String>,
    /// Shown instead of the value while it is empty.
    pub placeholder: Option<String>,
    /// Options of a select field.
    pub options: Vec<String>,
    /// Index of the option equal to the value.
    pub selected_option: Option<usize>,
    pub is_focused: bool,
}

/// Renderable form.
#[derive(Debug, Clone)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_focused: bool,
}

/// Renderable date-range selector.
#[derive(Debug, Clone)]
pub struct DatePickerView {
    /// Preset button labels with their focus state.
    pub presets: Vec<(String, bool)>,
    pub from: String,
    pub to: String,
    pub from_focused: bool,
    pub to_focused: bool,
}

/// Page lines outside the table body and the form fields: title bar, section
/// titles, table header/filter/rule lines, submit button, date selector, status
/// line, spacers and footer.
pub const PAGE_CHROME_LINES: usize = 18;

impl FieldView {
    /// Lines the field occupies: one for single-line controls, a label line
    /// plus one per value line for textareas.
    #[must_use]
    pub fn height(&self) -> usize {
        match self.kind {
            FieldType::Textarea => 1 + self.value_lines.len().max(1),
            FieldType::Text | FieldType::Select => 1,
        }
    }
}

impl FormView {
    /// Lines occupied by the fields, excluding the submit button.
    #[must_use]
    pub fn fields_height(&self) -> usize {
        self.fields.iter().map(FieldView::height).sum()
    }
}
