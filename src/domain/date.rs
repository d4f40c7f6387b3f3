//! Date range types used by the date-range selector.

use crate::domain::error::{Result, WidgetError};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Format of the manual date inputs.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A resolved `(from, to)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Named ranges offered as one-click buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Today,
    Yesterday,
}

impl Preset {
    /// All presets in button order.
    pub const ALL: [Self; 2] = [Self::Today, Self::Yesterday];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
        }
    }

    /// Computes the range for this preset relative to `now`.
    ///
    /// Both ends of the range are the same instant: `now` for today, exactly
    /// 24 hours earlier for yesterday.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> DateRange {
        let instant = match self {
            Self::Today => now,
            Self::Yesterday => now - Duration::hours(24),
        };
        DateRange {
            from: instant,
            to: instant,
        }
    }
}

/// Which end of the custom range an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    From,
    To,
}

/// Free-text `(from, to)` pair typed into the manual inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRange {
    pub from: String,
    pub to: String,
}

impl CustomRange {
    #[must_use]
    pub fn get(&self, end: RangeEnd) -> &str {
        match end {
            RangeEnd::From => &self.from,
            RangeEnd::To => &self.to,
        }
    }

    pub fn set(&mut self, end: RangeEnd, value: String) {
        match end {
            RangeEnd::From => self.from = value,
            RangeEnd::To => self.to = value,
        }
    }

    /// Parses both inputs as `YYYY-MM-DD` dates.
    ///
    /// Returns `Ok(None)` while either input is still empty.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidDate`] if a non-empty input does not parse.
    pub fn parse(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some((parse_date(&self.from)?, parse_date(&self.to)?)))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).map_err(|e| WidgetError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn yesterday_is_exactly_one_day_earlier() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        let range = Preset::Yesterday.resolve(now);
        assert_eq!(range.from, Utc.with_ymd_and_hms(2024, 2, 29, 0, 30, 0).unwrap());
        assert_eq!(range.from, range.to);
    }

    #[test]
    fn parse_waits_for_both_inputs() {
        let range = CustomRange {
            from: "2024-01-02".into(),
            to: String::new(),
        };
        assert_eq!(range.parse().unwrap(), None);
    }

    #[test]
    fn parse_reports_bad_input() {
        let range = CustomRange {
            from: "2024-01-02".into(),
            to: "tomorrow".into(),
        };
        assert!(matches!(range.parse(), Err(WidgetError::InvalidDate { .. })));
    }
}
