//! Date-range selector widget.
//!
//! Two interaction surfaces:
//!
//! - preset buttons (`Today`, `Yesterday`) compute a range from the current moment
//!   and emit it immediately;
//! - two free-text inputs (`from`, `to`) update the held [`CustomRange`] and emit
//!   nothing.
//!
//! The manual inputs have no confirm step, so a typed range is never reported to
//! the host. [`DateRangeSelector::custom_range`] exposes it for whoever reads it.

use crate::domain::{CustomRange, DateRange, Preset, RangeEnd};
use crate::ui::viewmodel::DatePickerView;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Source of the current moment for preset ranges.
pub trait Clock: Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Focus stops of the selector, in keyboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFocus {
    Preset(Preset),
    Input(RangeEnd),
}

impl DateFocus {
    const ORDER: [Self; 4] = [
        Self::Preset(Preset::Today),
        Self::Preset(Preset::Yesterday),
        Self::Input(RangeEnd::From),
        Self::Input(RangeEnd::To),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Preset buttons plus a manually typed custom range.
#[derive(Debug)]
pub struct DateRangeSelector {
    custom: CustomRange,
    focus: DateFocus,
    clock: Box<dyn Clock>,
}

impl Default for DateRangeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DateRangeSelector {
    /// Creates a selector reading the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            custom: CustomRange::default(),
            focus: DateFocus::Preset(Preset::Today),
            clock,
        }
    }

    /// Activates a preset and returns the range to emit.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use zwidgets::Preset;
    /// use zwidgets::date::{DateRangeSelector, FixedClock};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
    /// let selector = DateRangeSelector::with_clock(Box::new(FixedClock(now)));
    /// let range = selector.select_preset(Preset::Today);
    /// assert_eq!((range.from, range.to), (now, now));
    /// ```
    #[must_use]
    pub fn select_preset(&self, preset: Preset) -> DateRange {
        let range = preset.resolve(self.clock.now());
        tracing::debug!(preset = preset.label(), from = %range.from, to = %range.to, "preset selected");
        range
    }

    /// Replaces one end of the custom range. Emits nothing.
    pub fn set_custom(&mut self, end: RangeEnd, value: impl Into<String>) {
        self.custom.set(end, value.into());
        tracing::trace!(end = ?end, "custom range edited");
    }

    /// The manually typed range as it stands.
    #[must_use]
    pub const fn custom_range(&self) -> &CustomRange {
        &self.custom
    }

    #[must_use]
    pub const fn focus(&self) -> DateFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % DateFocus::ORDER.len();
        self.focus = DateFocus::ORDER[next];
    }

    pub fn focus_prev(&mut self) {
        let len = DateFocus::ORDER.len();
        let prev = (self.focus.position() + len - 1) % len;
        self.focus = DateFocus::ORDER[prev];
    }

    /// Activates the focused control.
    ///
    /// Returns the range to emit if a preset button is focused; inputs return `None`.
    #[must_use]
    pub fn activate(&self) -> Option<DateRange> {
        match self.focus {
            DateFocus::Preset(preset) => Some(self.select_preset(preset)),
            DateFocus::Input(_) => None,
        }
    }

    /// Types a character into the focused input. Returns whether the range changed.
    pub fn push_char(&mut self, c: char) -> bool {
        let DateFocus::Input(end) = self.focus else {
            return false;
        };
        let mut value = self.custom.get(end).to_string();
        value.push(c);
        self.set_custom(end, value);
        true
    }

    /// Deletes the last character of the focused input. Returns whether the range changed.
    pub fn pop_char(&mut self) -> bool {
        let DateFocus::Input(end) = self.focus else {
            return false;
        };
        let mut value = self.custom.get(end).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.set_custom(end, value);
        true
    }

    /// Builds the renderable view of the selector.
    #[must_use]
    pub fn compute_view(&self, focused: bool) -> DatePickerView {
        DatePickerView {
            presets: Preset::ALL
                .iter()
                .map(|p| (p.label().to_string(), focused && self.focus == DateFocus::Preset(*p)))
                .collect(),
            from: self.custom.from.clone(),
            to: self.custom.to.clone(),
            from_focused: focused && self.focus == DateFocus::Input(RangeEnd::From),
            to_focused: focused && self.focus == DateFocus::Input(RangeEnd::To),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn selector() -> DateRangeSelector {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        DateRangeSelector::with_clock(Box::new(FixedClock(now)))
    }

    #[test]
    fn focus_cycles_through_buttons_and_inputs() {
        let mut s = selector();
        s.focus_prev();
        assert_eq!(s.focus(), DateFocus::Input(RangeEnd::To));
        s.focus_next();
        s.focus_next();
        assert_eq!(s.focus(), DateFocus::Preset(Preset::Yesterday));
    }

    #[test]
    fn activating_an_input_emits_nothing() {
        let mut s = selector();
        s.focus_next();
        s.focus_next();
        assert!(s.activate().is_none());
        assert!(s.push_char('2'));
        assert_eq!(s.custom_range().from, "2");
    }

    #[test]
    fn typing_on_a_button_is_ignored() {
        let mut s = selector();
        assert!(!s.push_char('x'));
        assert!(!s.pop_char());
        assert_eq!(s.custom_range(), &CustomRange::default());
    }

    #[test]
    fn yesterday_button_emits_previous_day() {
        let mut s = selector();
        s.focus_next();
        let range = s.activate().unwrap();
        assert_eq!(range.from, Utc.with_ymd_and_hms(2024, 5, 9, 12, 0, 0).unwrap());
    }
}
