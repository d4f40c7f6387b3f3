//! Date-range selector renderer: preset buttons on one line, the two inputs on
//! the next.

use crate::domain::DATE_INPUT_FORMAT;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DatePickerView;

/// Renders the selector starting at `row`. Returns the next available row.
pub fn render_date_picker(frame: &mut Frame, row: usize, view: &DatePickerView, theme: &Theme) -> usize {
    frame.move_to(row, 1);
    frame.pad(1);
    for (label, focused) in &view.presets {
        if *focused {
            frame.push(Theme::bold());
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.push(&Theme::fg(&theme.colors.button_fg));
            frame.push(&Theme::bg(&theme.colors.button_bg));
        }
        frame.push(&format!("[ {label} ]"));
        frame.reset();
        frame.pad(1);
    }

    frame.move_to(row + 1, 1);
    render_input(frame, "From", &view.from, view.from_focused, theme);
    frame.pad(2);
    render_input(frame, "To", &view.to, view.to_focused, theme);
    row + 2
}

fn render_input(frame: &mut Frame, label: &str, value: &str, focused: bool, theme: &Theme) {
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&format!(" {label} "));

    let width = "YYYY-MM-DD".len() + 1;
    if focused {
        frame.push(&Theme::fg(&theme.colors.focus_fg));
        frame.push("[");
        frame.push_fit(&format!("{value}_"), width);
        frame.push("]");
    } else if value.is_empty() {
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push("[");
        frame.push_fit(&placeholder(), width);
        frame.push("]");
    } else {
        frame.push(&Theme::fg(&theme.colors.input_border));
        frame.push("[");
        frame.push_fit(value, width);
        frame.push("]");
    }
    frame.reset();
}

fn placeholder() -> String {
    DATE_INPUT_FORMAT
        .replace("%Y", "YYYY")
        .replace("%m", "MM")
        .replace("%d", "DD")
}
