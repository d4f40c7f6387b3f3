//! Stateless field renderer.
//!
//! Maps a field descriptor plus the value the form currently holds for it to a
//! [`FieldView`], and turns a user edit into a [`FieldChange`] for the form to
//! apply. The renderer never keeps a copy of the value: it reads the value it is
//! given and reports the edited value upward.

use crate::domain::{Field, FieldType};
use crate::ui::viewmodel::FieldView;

/// An edit a user performs on a field control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Types a character (text and textarea).
    Insert(char),
    /// Deletes the last character (text and textarea).
    Backspace,
    /// Starts a new line (textarea only).
    Newline,
    /// Selects the next option, wrapping (select only).
    NextOption,
    /// Selects the previous option, wrapping (select only).
    PrevOption,
}

/// A value change emitted by the renderer: `(field key, new text value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub key: String,
    pub value: String,
}

/// Renders a field bound to `value`.
#[must_use]
pub fn render_field(field: &Field, value: &str, focused: bool) -> FieldView {
    let value_lines = match field.kind {
        FieldType::Textarea => value.split('\n').map(ToString::to_string).collect(),
        FieldType::Text | FieldType::Select => vec![value.to_string()],
    };

    let placeholder = (value.is_empty() && !field.placeholder.is_empty())
        .then(|| field.placeholder.clone());

    let selected_option = match field.kind {
        FieldType::Select => field.options.iter().position(|o| o == value),
        FieldType::Text | FieldType::Textarea => None,
    };

    FieldView {
        key: field.key.clone(),
        label: field.label.clone(),
        kind: field.kind,
        value_lines,
        placeholder,
        options: field.options.clone(),
        selected_option,
        is_focused: focused,
    }
}

/// Applies `edit` to `value` and reports the resulting change.
///
/// Returns `None` when the edit does not apply to the field type, e.g. typing
/// into a select or cycling options of a text field.
///
/// # Examples
///
/// ```
/// use zwidgets::Field;
/// use zwidgets::form::{apply_edit, FieldEdit};
///
/// let field = Field::select("rating", "Rating", ["1", "2", "3"]);
/// let change = apply_edit(&field, "3", FieldEdit::NextOption).unwrap();
/// assert_eq!(change.value, "1");
/// assert!(apply_edit(&field, "3", FieldEdit::Insert('x')).is_none());
/// ```
#[must_use]
pub fn apply_edit(field: &Field, value: &str, edit: FieldEdit) -> Option<FieldChange> {
    let new_value = match (field.kind, edit) {
        (FieldType::Text | FieldType::Textarea, FieldEdit::Insert(c)) => {
            let mut next = value.to_string();
            next.push(c);
            next
        }
        (FieldType::Text | FieldType::Textarea, FieldEdit::Backspace) => {
            let mut next = value.to_string();
            next.pop()?;
            next
        }
        (FieldType::Textarea, FieldEdit::Newline) => format!("{value}\n"),
        (FieldType::Select, FieldEdit::NextOption) => cycle_option(&field.options, value, true)?,
        (FieldType::Select, FieldEdit::PrevOption) => cycle_option(&field.options, value, false)?,
        _ => return None,
    };

    Some(FieldChange {
        key: field.key.clone(),
        value: new_value,
    })
}

/// Next or previous option after `current`; an unset value starts at either end.
fn cycle_option(options: &[String], current: &str, forward: bool) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let last = options.len() - 1;
    let next = match (options.iter().position(|o| o == current), forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(idx), true) => if idx == last { 0 } else { idx + 1 },
        (Some(idx), false) => idx.checked_sub(1).unwrap_or(last),
    };
    options.get(next).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_edits_append_and_delete() {
        let field = Field::text("name", "Name");
        assert_eq!(apply_edit(&field, "ab", FieldEdit::Insert('c')).unwrap().value, "abc");
        assert_eq!(apply_edit(&field, "ab", FieldEdit::Backspace).unwrap().value, "a");
        assert!(apply_edit(&field, "", FieldEdit::Backspace).is_none());
        assert!(apply_edit(&field, "ab", FieldEdit::Newline).is_none());
    }

    #[test]
    fn textarea_accepts_newlines() {
        let field = Field::textarea("feedback", "Feedback");
        let change = apply_edit(&field, "line", FieldEdit::Newline).unwrap();
        assert_eq!(change, FieldChange { key: "feedback".into(), value: "line\n".into() });
        let view = render_field(&field, "a\nb", true);
        assert_eq!(view.value_lines, vec!["a", "b"]);
    }

    #[test]
    fn select_cycles_from_unset_value() {
        let field = Field::select("rating", "Rating", ["1", "2"]);
        assert_eq!(apply_edit(&field, "", FieldEdit::NextOption).unwrap().value, "1");
        assert_eq!(apply_edit(&field, "", FieldEdit::PrevOption).unwrap().value, "2");
        assert_eq!(apply_edit(&field, "1", FieldEdit::PrevOption).unwrap().value, "2");
    }

    #[test]
    fn placeholder_shows_only_while_empty() {
        let field = Field::text("name", "Name").with_placeholder("Enter your name");
        assert_eq!(render_field(&field, "", false).placeholder.as_deref(), Some("Enter your name"));
        assert_eq!(render_field(&field, "Jo", false).placeholder, None);
    }

    #[test]
    fn select_view_marks_current_option() {
        let field = Field::select("rating", "Rating", ["1", "2", "3"]);
        assert_eq!(render_field(&field, "2", false).selected_option, Some(1));
        assert_eq!(render_field(&field, "", false).selected_option, None);
    }
}
