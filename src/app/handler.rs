//! Event handling and state transition logic.
//!
//! The plugin runtime maps raw keys to [`Event`]s; [`handle_event`] routes each
//! event to the focused widget, mutates state, and returns whether the page must
//! be redrawn along with the actions to execute.
//!
//! # Event Types
//!
//! - **Focus**: `NextPanel`, `PrevPanel`
//! - **Navigation**: `Left`, `Right`, `Up`, `Down`
//! - **Input**: `Enter`, `Char`, `Backspace`, `Escape`
//! - **Commands**: `Submit`, `Quit`
//!
//! # Example
//!
//! ```
//! use zwidgets::app::{handle_event, Event, Panel};
//! use zwidgets::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPanel)?;
//! assert!(should_render && actions.is_empty());
//! assert_eq!(state.focused_panel, Panel::Form);
//! # Ok::<(), zwidgets::WidgetError>(())
//! ```

use crate::app::{Action, AppState, Panel};
use crate::domain::Result;
use crate::form::FieldEdit;

/// Events triggered by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves keyboard focus to the next widget.
    NextPanel,
    /// Moves keyboard focus to the previous widget.
    PrevPanel,
    Left,
    Right,
    Up,
    Down,
    /// Activates the focused control.
    Enter,
    /// A typed character.
    Char(char),
    Backspace,
    /// Leaves the table's filter input.
    Escape,
    /// Submits the form regardless of which field has focus.
    Submit,
    /// Closes the plugin pane.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Emitted values are also recorded as the
/// page's status line.
///
/// # Errors
///
/// Returns widget errors raised while applying the event, and
/// [`WidgetError::Serialization`](crate::WidgetError::Serialization) if an
/// emitted value cannot be described.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, panel = ?state.focused_panel).entered();

    let (should_render, actions) = match event {
        Event::Quit => (false, vec![Action::CloseFocus]),
        Event::NextPanel => {
            state.table.end_filter_edit();
            state.focused_panel = state.focused_panel.next();
            tracing::debug!(panel = ?state.focused_panel, "focus moved");
            (true, vec![])
        }
        Event::PrevPanel => {
            state.table.end_filter_edit();
            state.focused_panel = state.focused_panel.prev();
            tracing::debug!(panel = ?state.focused_panel, "focus moved");
            (true, vec![])
        }
        _ => match state.focused_panel {
            Panel::Table => handle_table_event(state, *event)?,
            Panel::Form => handle_form_event(state, *event)?,
            Panel::DatePicker => handle_date_event(state, *event),
        },
    };

    for action in &actions {
        if let Some(line) = action.describe()? {
            tracing::info!(action = %line, "value emitted");
            state.status = Some(line);
        }
    }

    Ok((should_render || !actions.is_empty(), actions))
}

fn handle_table_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let table = &mut state.table;

    if table.is_editing_filter() {
        let changed = match event {
            Event::Char(c) => table.push_filter_char(c)?,
            Event::Backspace => table.pop_filter_char()?,
            Event::Enter | Event::Escape => {
                table.end_filter_edit();
                true
            }
            _ => false,
        };
        return Ok((changed, vec![]));
    }

    let changed = match event {
        Event::Left => {
            table.focus_prev_column();
            true
        }
        Event::Right => {
            table.focus_next_column();
            true
        }
        Event::Up => {
            table.move_selection_up();
            true
        }
        Event::Down => {
            table.move_selection_down();
            true
        }
        Event::Enter => table.toggle_focused_sort()?,
        Event::Char('/') => table.begin_filter_edit(),
        Event::Char('q') => return Ok((false, vec![Action::CloseFocus])),
        _ => false,
    };
    Ok((changed, vec![]))
}

fn handle_form_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let form = &mut state.form;

    let edit = match event {
        Event::Up => {
            form.focus_prev();
            return Ok((true, vec![]));
        }
        Event::Down => {
            form.focus_next();
            return Ok((true, vec![]));
        }
        Event::Submit => return Ok((true, vec![Action::FormSubmitted(form.submit())])),
        Event::Enter if form.enter_submits() => {
            return Ok((true, vec![Action::FormSubmitted(form.submit())]));
        }
        Event::Enter => FieldEdit::Newline,
        Event::Left => FieldEdit::PrevOption,
        Event::Right => FieldEdit::NextOption,
        Event::Char(c) => FieldEdit::Insert(c),
        Event::Backspace => FieldEdit::Backspace,
        _ => return Ok((false, vec![])),
    };

    Ok((form.edit_focused(edit)?, vec![]))
}

fn handle_date_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let picker = &mut state.date_picker;

    match event {
        Event::Left => {
            picker.focus_prev();
            (true, vec![])
        }
        Event::Right => {
            picker.focus_next();
            (true, vec![])
        }
        Event::Enter => match picker.activate() {
            Some(range) => (true, vec![Action::DateSelected(Some(range))]),
            None => (false, vec![]),
        },
        Event::Char(c) => (picker.push_char(c), vec![]),
        Event::Backspace => (picker.pop_char(), vec![]),
        _ => (false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use crate::{Config, DateRange};
    use chrono::{TimeZone, Utc};

    fn state() -> AppState {
        crate::initialize(&Config::default()).unwrap()
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|e| handle_event(state, e).unwrap().1)
            .collect()
    }

    #[test]
    fn quit_closes_from_any_panel() {
        let mut state = state();
        state.focused_panel = Panel::Form;
        assert_eq!(send(&mut state, &[Event::Quit]), vec![Action::CloseFocus]);
    }

    #[test]
    fn q_types_into_form_instead_of_quitting() {
        let mut state = state();
        state.focused_panel = Panel::Form;
        assert!(send(&mut state, &[Event::Char('q')]).is_empty());
        assert_eq!(state.form.value("name"), Some("q"));
    }

    #[test]
    fn slash_starts_filter_on_filterable_column_only() {
        let mut state = state();
        send(&mut state, &[Event::Right, Event::Right, Event::Char('/')]);
        assert!(!state.table.is_editing_filter(), "age is not filterable");

        send(&mut state, &[Event::Left, Event::Char('/'), Event::Char('b')]);
        assert_eq!(state.table.filter_text("name"), "b");
        assert_eq!(state.table.display_rows().count(), 1);

        send(&mut state, &[Event::Escape, Event::Down]);
        assert!(!state.table.is_editing_filter());
    }

    #[test]
    fn leaving_the_table_ends_filter_editing() {
        let mut state = state();
        send(&mut state, &[Event::Char('/'), Event::NextPanel]);
        assert!(!state.table.is_editing_filter());
    }

    #[test]
    fn submit_shortcut_emits_once_and_sets_status() {
        let mut state = state();
        state.focused_panel = Panel::Form;
        let actions = send(&mut state, &[Event::Down, Event::Char('o'), Event::Submit]);
        assert_eq!(actions.len(), 1);
        assert!(state.status.as_deref().is_some_and(|s| s.starts_with("Form Submitted: ")));
    }

    #[test]
    fn enter_in_textarea_adds_a_line() {
        let mut state = state();
        state.focused_panel = Panel::Form;
        let actions = send(&mut state, &[Event::Down, Event::Char('a'), Event::Enter, Event::Char('b')]);
        assert!(actions.is_empty());
        assert_eq!(state.form.value("feedback"), Some("a\nb"));
    }

    #[test]
    fn date_preset_emits_and_input_does_not() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let mut state = state();
        state.date_picker = crate::date::DateRangeSelector::with_clock(Box::new(FixedClock(now)));
        state.focused_panel = Panel::DatePicker;

        let actions = send(&mut state, &[Event::Enter]);
        assert_eq!(actions, vec![Action::DateSelected(Some(DateRange { from: now, to: now }))]);

        let actions = send(&mut state, &[Event::Right, Event::Right, Event::Char('2'), Event::Enter]);
        assert!(actions.is_empty());
        assert_eq!(state.date_picker.custom_range().from, "2");
    }
}
