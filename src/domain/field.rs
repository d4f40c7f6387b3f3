//! Form field descriptors.
//!
//! A [`Field`] describes one input of a form: its key, the kind of control, the
//! label and placeholder, the options of a select, and an optional default value.
//! Field types form a closed set; descriptors loaded from configuration with any
//! other type name are rejected with [`WidgetError::UnknownFieldType`].

use crate::domain::error::{Result, WidgetError};
use crate::domain::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current values of a form, keyed by field key.
pub type FormValues = BTreeMap<String, String>;

/// Kind of input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Choice among a fixed list of options.
    Select,
}

impl FieldType {
    /// Parses a lowercase type name (`text`, `textarea`, `select`).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Describes one form field.
///
/// # Examples
///
/// ```
/// use zwidgets::{Field, FieldType};
///
/// let field = Field::text("name", "Name").with_placeholder("Enter your name");
/// assert_eq!(field.kind, FieldType::Text);
/// assert!(field.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    /// Unique key of the field within its form.
    pub key: String,
    /// Control kind.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Label shown before the control.
    pub label: String,
    /// Hint shown while the value is empty.
    pub placeholder: String,
    /// Choices of a select field; empty for other kinds.
    pub options: Vec<String>,
    /// Value seeded when the form mounts.
    pub default_value: Option<String>,
}

impl Field {
    fn new(kind: FieldType, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            label: label.into(),
            placeholder: String::new(),
            options: Vec::new(),
            default_value: None,
        }
    }

    #[must_use]
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldType::Text, key, label)
    }

    #[must_use]
    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldType::Textarea, key, label)
    }

    #[must_use]
    pub fn select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(FieldType::Select, key, label);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Value the form seeds for this field at mount time.
    #[must_use]
    pub fn initial_value(&self) -> String {
        self.default_value.clone().unwrap_or_default()
    }

    /// Checks the descriptor is renderable.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingOptions`] for a select field without options.
    pub fn validate(&self) -> Result<()> {
        if self.kind == FieldType::Select && self.options.is_empty() {
            return Err(WidgetError::MissingOptions(self.key.clone()));
        }
        Ok(())
    }
}

/// Wire shape of a field descriptor before its type name is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    key: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    placeholder: String,
    #[serde(default)]
    options: Vec<CellValue>,
    #[serde(default, alias = "default_value")]
    default_value: Option<String>,
}

impl TryFrom<RawField> for Field {
    type Error = WidgetError;

    fn try_from(raw: RawField) -> Result<Self> {
        let kind = FieldType::parse(&raw.kind).ok_or_else(|| WidgetError::UnknownFieldType {
            key: raw.key.clone(),
            kind: raw.kind.clone(),
        })?;

        let field = Self {
            key: raw.key,
            kind,
            label: raw.label,
            placeholder: raw.placeholder,
            options: raw.options.iter().map(ToString::to_string).collect(),
            default_value: raw.default_value,
        };
        field.validate()?;
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_select_options() {
        let field: Field = serde_json::from_str(
            r#"{"key": "rating", "type": "select", "label": "Rating", "options": [1, 2, 3]}"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldType::Select);
        assert_eq!(field.options, vec!["1", "2", "3"]);
    }

    #[test]
    fn accepts_camel_case_default_value() {
        let field: Field =
            serde_json::from_str(r#"{"key": "x", "type": "text", "defaultValue": "hi"}"#).unwrap();
        assert_eq!(field.initial_value(), "hi");
    }

    #[test]
    fn rejects_unknown_type() {
        let err = serde_json::from_str::<Field>(r#"{"key": "when", "type": "date"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown field type 'date' for field 'when'"));
    }

    #[test]
    fn rejects_select_without_options() {
        let err = serde_json::from_str::<Field>(r#"{"key": "pick", "type": "select"}"#).unwrap_err();
        assert!(err.to_string().contains("Select field 'pick' has no options"));
        assert!(Field::select("pick", "Pick", Vec::<String>::new()).validate().is_err());
    }
}
