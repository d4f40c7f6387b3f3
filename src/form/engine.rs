//! Form engine: owns the values of a set of fields.
//!
//! Values are seeded when the form is created (each field's default value, or an
//! empty string), updated one entry per field edit, and read as a whole on
//! submission. Focus cycles through the fields followed by the submit button.

use super::field::{apply_edit, render_field, FieldChange, FieldEdit};
use crate::domain::{Field, FieldType, FormValues, Result, WidgetError};
use crate::ui::viewmodel::FormView;
use std::collections::HashSet;

/// Where keyboard focus sits inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// The field at this index.
    Field(usize),
    /// The submit button after the last field.
    Submit,
}

/// A form rendering one control per field descriptor.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    values: FormValues,
    focus: FormFocus,
}

impl Form {
    /// Mounts a form, seeding every value from the field defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::DuplicateFieldKey`] if two fields share a key, or
    /// [`WidgetError::MissingOptions`] for a select field without options.
    ///
    /// # Examples
    ///
    /// ```
    /// use zwidgets::{Field, Form};
    ///
    /// let form = Form::new(vec![Field::text("x", "X").with_default("hi")])?;
    /// assert_eq!(form.value("x"), Some("hi"));
    /// # Ok::<(), zwidgets::WidgetError>(())
    /// ```
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            field.validate()?;
            if !seen.insert(field.key.as_str()) {
                return Err(WidgetError::DuplicateFieldKey(field.key.clone()));
            }
        }

        let values = Self::initial_values(&fields);
        let focus = if fields.is_empty() {
            FormFocus::Submit
        } else {
            FormFocus::Field(0)
        };

        tracing::debug!(field_count = fields.len(), "form mounted");
        Ok(Self {
            fields,
            values,
            focus,
        })
    }

    fn initial_values(fields: &[Field]) -> FormValues {
        fields
            .iter()
            .map(|f| (f.key.clone(), f.initial_value()))
            .collect()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Replaces the value of one field.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownField`] if no field has this key.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .values
            .get_mut(key)
            .ok_or_else(|| WidgetError::UnknownField(key.to_string()))?;
        *slot = value.into();
        tracing::trace!(field = %key, "form value updated");
        Ok(())
    }

    /// Applies a change emitted by the field renderer.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownField`] if the change names an unknown field.
    pub fn apply(&mut self, change: FieldChange) -> Result<()> {
        self.set_value(&change.key, change.value)
    }

    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    #[must_use]
    pub fn focused_field(&self) -> Option<&Field> {
        match self.focus {
            FormFocus::Field(idx) => self.fields.get(idx),
            FormFocus::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(idx) if idx + 1 < self.fields.len() => FormFocus::Field(idx + 1),
            FormFocus::Field(_) => FormFocus::Submit,
            FormFocus::Submit if self.fields.is_empty() => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(0),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(0) => FormFocus::Submit,
            FormFocus::Field(idx) => FormFocus::Field(idx - 1),
            FormFocus::Submit if self.fields.is_empty() => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(self.fields.len() - 1),
        };
    }

    /// Routes an edit to the focused field. Returns whether a value changed.
    ///
    /// # Errors
    ///
    /// Propagates [`Form::apply`] errors.
    pub fn edit_focused(&mut self, edit: FieldEdit) -> Result<bool> {
        let Some(field) = self.focused_field() else {
            return Ok(false);
        };
        let current = self.values.get(&field.key).map_or("", String::as_str);
        match apply_edit(field, current, edit) {
            Some(change) => {
                self.apply(change)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether Enter on the current focus submits the form.
    ///
    /// Enter inserts a newline in a textarea and submits everywhere else.
    #[must_use]
    pub fn enter_submits(&self) -> bool {
        self.focused_field()
            .map_or(true, |f| f.kind != FieldType::Textarea)
    }

    /// Reads the complete current mapping for submission.
    #[must_use]
    pub fn submit(&self) -> FormValues {
        tracing::debug!(field_count = self.values.len(), "form submitted");
        self.values.clone()
    }

    /// Restores every value to its mount-time default.
    pub fn reset(&mut self) {
        self.values = Self::initial_values(&self.fields);
    }

    /// Builds the renderable view of the form.
    #[must_use]
    pub fn compute_view(&self, focused: bool) -> FormView {
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let value = self.values.get(&field.key).map_or("", String::as_str);
                render_field(field, value, focused && self.focus == FormFocus::Field(idx))
            })
            .collect();

        FormView {
            fields,
            submit_focused: focused && self.focus == FormFocus::Submit,
        }
    }
}
