//! Application state management and view model computation.
//!
//! [`AppState`] composes the three widgets of the demo page, the active theme,
//! the focused panel and the last emitted value. Each widget owns its own state;
//! the page only decides which one receives input and how they are laid out.
//!
//! # Example
//!
//! ```
//! use zwidgets::app::{demo, AppState};
//! use zwidgets::date::DateRangeSelector;
//! use zwidgets::{Form, Table, Theme};
//!
//! let table = Table::new(demo::sample_rows(), demo::sample_columns())?;
//! let form = Form::new(demo::sample_fields())?;
//! let state = AppState::new(table, form, DateRangeSelector::new(), Theme::default());
//! let viewmodel = state.compute_viewmodel(30, 80);
//! assert_eq!(viewmodel.table.rows.len(), 3);
//! # Ok::<(), zwidgets::WidgetError>(())
//! ```

use super::modes::Panel;
use crate::date::DateRangeSelector;
use crate::form::Form;
use crate::table::Table;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, SectionInfo, UIViewModel, PAGE_CHROME_LINES};

const PAGE_TITLE: &str = "zwidgets";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub table: Table,
    pub form: Form,
    pub date_picker: DateRangeSelector,

    /// Color scheme for UI rendering, resolved from the plugin configuration.
    pub theme: Theme,

    /// Widget receiving keyboard input.
    pub focused_panel: Panel,

    /// Description of the last submitted form or selected range.
    pub status: Option<String>,
}

impl AppState {
    /// Creates the page with focus on the table and an empty status line.
    ///
    /// The theme's table style slots are applied to the table.
    #[must_use]
    pub fn new(table: Table, form: Form, date_picker: DateRangeSelector, theme: Theme) -> Self {
        let table = table.with_styles(theme.table.clone());
        Self {
            table,
            form,
            date_picker,
            theme,
            focused_panel: Panel::default(),
            status: None,
        }
    }

    /// Computes a complete view model for rendering.
    ///
    /// The table body receives whatever height the other sections leave, at
    /// least one row, windowed around the row cursor.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let form = self.form.compute_view(self.focused_panel == Panel::Form);
        let available_rows = rows
            .saturating_sub(PAGE_CHROME_LINES + form.fields_height())
            .max(1);
        let table = self
            .table
            .compute_view(available_rows, self.focused_panel == Panel::Table);

        UIViewModel {
            header: HeaderInfo {
                title: PAGE_TITLE.to_string(),
            },
            table_section: self.compute_table_section(table.shown_rows, table.total_rows),
            table,
            form_section: self.compute_section(Panel::Form),
            form,
            date_section: self.compute_section(Panel::DatePicker),
            date_picker: self
                .date_picker
                .compute_view(self.focused_panel == Panel::DatePicker),
            status: self.status.clone(),
            footer: self.compute_footer(),
        }
    }

    fn compute_section(&self, panel: Panel) -> SectionInfo {
        SectionInfo {
            title: panel.title().to_string(),
            is_focused: self.focused_panel == panel,
        }
    }

    fn compute_table_section(&self, shown: usize, total: usize) -> SectionInfo {
        let mut section = self.compute_section(Panel::Table);
        if shown != total {
            section.title = format!("{} ({shown} of {total} rows)", section.title);
        }
        section
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focused_panel {
            Panel::Table if self.table.is_editing_filter() => {
                "type: filter | backspace: delete | enter/esc: done | tab: next widget"
            }
            Panel::Table => {
                "←/→: column | ↑/↓: row | enter: sort | /: filter | tab: next widget | q: quit"
            }
            Panel::Form => {
                "↑/↓: field | ←/→: option | enter: submit | ctrl+s: submit | tab: next widget | ctrl+q: quit"
            }
            Panel::DatePicker => {
                "←/→: move | enter: select preset | type: edit date | tab: next widget | ctrl+q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{initialize, Config};

    #[test]
    fn table_window_shrinks_with_the_pane() {
        let state = initialize(&Config::default()).unwrap();
        let form_height = state.form.compute_view(false).fields_height();

        let vm = state.compute_viewmodel(PAGE_CHROME_LINES + form_height + 2, 80);
        assert_eq!(vm.table.rows.len(), 2);
        assert_eq!(vm.table.shown_rows, 3);

        let vm = state.compute_viewmodel(5, 80);
        assert_eq!(vm.table.rows.len(), 1);
    }

    #[test]
    fn section_title_reports_filtered_count() {
        let mut state = initialize(&Config::default()).unwrap();
        state.table.set_filter("name", "b").unwrap();
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.table_section.title, "Custom Table (1 of 3 rows)");
        assert!(vm.table_section.is_focused);
        assert!(!vm.form_section.is_focused);
    }

    #[test]
    fn footer_follows_focus() {
        let mut state = initialize(&Config::default()).unwrap();
        state.focused_panel = Panel::DatePicker;
        assert!(state.compute_viewmodel(40, 80).footer.keybindings.contains("select preset"));
    }
}
