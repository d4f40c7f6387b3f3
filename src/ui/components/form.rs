//! Form component renderer.
//!
//! One control per [`FieldView`], followed by the submit button:
//!
//! ```text
//!  Name      [Enter your name]
//!  Feedback
//!            │ first line
//!            │ second line
//!  Rating     1  2 [3] 4  5
//!            [ Submit ]
//! ```

use crate::domain::FieldType;
use crate::ui::helpers::{display_width, fit, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldView, FormView};

const LABEL_WIDTH: usize = 11;

/// Renders the form starting at `row`. Returns the row after the submit button.
pub fn render_form(frame: &mut Frame, row: usize, view: &FormView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in &view.fields {
        current_row = render_field(frame, current_row, field, theme, cols);
    }
    render_submit(frame, current_row, view.submit_focused, theme)
}

fn render_label(frame: &mut Frame, row: usize, field: &FieldView, theme: &Theme) {
    frame.move_to(row, 1);
    if field.is_focused {
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.focus_fg));
    } else {
        frame.push(&Theme::fg(&theme.colors.text_normal));
    }
    frame.push_fit(&format!(" {}", field.label), LABEL_WIDTH);
    frame.reset();
}

fn render_field(frame: &mut Frame, row: usize, field: &FieldView, theme: &Theme, cols: usize) -> usize {
    render_label(frame, row, field, theme);
    let control_width = cols.saturating_sub(LABEL_WIDTH);

    match field.kind {
        FieldType::Text => {
            let value = field.value_lines.first().map_or("", String::as_str);
            render_text_input(frame, value, field, theme, control_width);
            row + 1
        }
        FieldType::Textarea => {
            let mut current_row = row + 1;
            let placeholder = field.placeholder.as_deref();
            let last = field.value_lines.len().saturating_sub(1);
            for (idx, line) in field.value_lines.iter().enumerate() {
                frame.move_to(current_row, LABEL_WIDTH + 1);
                frame.push(&Theme::fg(&theme.colors.input_border));
                frame.push("│ ");
                match placeholder {
                    Some(hint) if idx == 0 && line.is_empty() && !field.is_focused => {
                        frame.push(&Theme::fg(&theme.colors.text_dim));
                        frame.push(&fit(hint, control_width.saturating_sub(2)));
                    }
                    _ => {
                        frame.push(&Theme::fg(&theme.colors.text_normal));
                        let cursor = if field.is_focused && idx == last { "_" } else { "" };
                        frame.push(&fit(&format!("{line}{cursor}"), control_width.saturating_sub(2)));
                    }
                }
                frame.reset();
                current_row += 1;
            }
            current_row
        }
        FieldType::Select => {
            render_options(frame, field, theme, control_width);
            row + 1
        }
    }
}

fn render_text_input(frame: &mut Frame, value: &str, field: &FieldView, theme: &Theme, width: usize) {
    let inner = width.saturating_sub(2);
    match (&field.placeholder, field.is_focused) {
        (Some(hint), false) => {
            frame.push(&Theme::fg(&theme.colors.text_dim));
            frame.push(&fit(&format!("[{hint}]"), inner));
        }
        (_, true) => {
            frame.push(&Theme::fg(&theme.colors.focus_fg));
            frame.push(&fit(&format!("[{value}_]"), inner));
        }
        (None, false) => {
            frame.push(&Theme::fg(&theme.colors.input_border));
            frame.push(&fit(&format!("[{value}]"), inner));
        }
    }
    frame.reset();
}

fn render_options(frame: &mut Frame, field: &FieldView, theme: &Theme, width: usize) {
    let mut used = 0;
    for (idx, option) in field.options.iter().enumerate() {
        let selected = field.selected_option == Some(idx);
        let label = if selected {
            format!("[{option}]")
        } else {
            format!(" {option} ")
        };
        let label_len = display_width(&label);
        if used + label_len > width {
            break;
        }

        if selected {
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.push(&Theme::fg(&theme.colors.text_normal));
        }
        frame.push(&label);
        frame.reset();
        used += label_len;
    }
}

fn render_submit(frame: &mut Frame, row: usize, focused: bool, theme: &Theme) -> usize {
    frame.move_to(row, LABEL_WIDTH + 1);
    if focused {
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.selection_fg));
        frame.push(&Theme::bg(&theme.colors.selection_bg));
    } else {
        frame.push(&Theme::fg(&theme.colors.button_fg));
        frame.push(&Theme::bg(&theme.colors.button_bg));
    }
    frame.push("[ Submit ]");
    frame.reset();
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::render_field as field_view;
    use crate::ui::helpers::strip_ansi;
    use crate::Field;

    #[test]
    fn renders_every_control_and_the_button() {
        let view = FormView {
            fields: vec![
                field_view(&Field::text("name", "Name").with_placeholder("Enter your name"), "", false),
                field_view(&Field::textarea("feedback", "Feedback"), "a\nb", false),
                field_view(&Field::select("rating", "Rating", ["1", "2", "3"]), "2", false),
            ],
            submit_focused: true,
        };

        let mut frame = Frame::new();
        let next = render_form(&mut frame, 1, &view, &Theme::default(), 60);
        assert_eq!(next, 1 + view.fields_height() + 1);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains("[Enter your name]"));
        assert!(text.contains("│ a"));
        assert!(text.contains("│ b"));
        assert!(text.contains("[2]"));
        assert!(text.contains("[ Submit ]"));
    }

    #[test]
    fn focused_text_input_shows_cursor_instead_of_placeholder() {
        let field = Field::text("name", "Name").with_placeholder("Enter your name");
        let view = FormView {
            fields: vec![field_view(&field, "", true)],
            submit_focused: false,
        };
        let mut frame = Frame::new();
        render_form(&mut frame, 1, &view, &Theme::default(), 60);
        let text = strip_ansi(frame.as_str());
        assert!(text.contains("[_]"));
        assert!(!text.contains("Enter your name"));
    }
}
