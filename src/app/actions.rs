//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! widgets' outward notifications (form submission, date selection) travel as
//! actions so the host decides what to do with them; the demo page prints them.

use crate::domain::{DateRange, FormValues, Result};

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// The form was submitted with its complete current mapping.
    ///
    /// The key that triggered the submission is consumed by the handler and
    /// never reaches the host's default key handling.
    FormSubmitted(FormValues),

    /// A date-range preset was activated.
    ///
    /// Always `Some` today: only preset buttons emit, and they always resolve
    /// to a range. `None` is reserved for a future "clear" control.
    DateSelected(Option<DateRange>),
}

impl Action {
    /// Human-readable line for the status bar and the log.
    ///
    /// Returns `None` for actions that carry no value.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Serialization`](crate::WidgetError::Serialization)
    /// if the carried value cannot be encoded as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zwidgets::app::Action;
    ///
    /// let values = BTreeMap::from([("x".to_string(), "bye".to_string())]);
    /// let line = Action::FormSubmitted(values).describe()?;
    /// assert_eq!(line.as_deref(), Some(r#"Form Submitted: {"x":"bye"}"#));
    /// # Ok::<(), zwidgets::WidgetError>(())
    /// ```
    pub fn describe(&self) -> Result<Option<String>> {
        let line = match self {
            Self::CloseFocus => return Ok(None),
            Self::FormSubmitted(values) => {
                format!("Form Submitted: {}", serde_json::to_string(values)?)
            }
            Self::DateSelected(range) => {
                format!("Date Selected: {}", serde_json::to_string(range)?)
            }
        };
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn date_selection_is_described_as_json() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let line = Action::DateSelected(Some(DateRange { from: now, to: now }))
            .describe()
            .unwrap()
            .unwrap();
        assert_eq!(
            line,
            r#"Date Selected: {"from":"2024-05-10T12:00:00Z","to":"2024-05-10T12:00:00Z"}"#
        );
    }

    #[test]
    fn close_has_no_description() {
        assert!(Action::CloseFocus.describe().unwrap().is_none());
    }
}
