//! Focus state of the demo page.
//!
//! Exactly one widget owns keyboard input at a time. The focused [`Panel`]
//! decides how the handler routes arrows, Enter and typed characters.
//!
//! # Example
//!
//! ```
//! use zwidgets::app::Panel;
//!
//! assert_eq!(Panel::Table.next(), Panel::Form);
//! assert_eq!(Panel::Table.prev(), Panel::DatePicker);
//! ```

/// The widget that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Arrows move the column focus and row cursor; `/` edits the column filter.
    #[default]
    Table,
    /// Arrows move between fields and cycle select options; typing edits the value.
    Form,
    /// Arrows move between the preset buttons and the two date inputs.
    DatePicker,
}

impl Panel {
    const ORDER: [Self; 3] = [Self::Table, Self::Form, Self::DatePicker];

    fn position(self) -> usize {
        match self {
            Self::Table => 0,
            Self::Form => 1,
            Self::DatePicker => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Section title shown above the widget.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Table => "Custom Table",
            Self::Form => "Custom Form",
            Self::DatePicker => "Custom Date Picker",
        }
    }
}
