//! Dynamic form widget.
//!
//! - [`field`]: stateless renderer from a field descriptor and value to a control
//! - [`engine`]: the [`Form`] owning the values and handing them out on submission

pub mod engine;
pub mod field;

pub use engine::{Form, FormFocus};
pub use field::{apply_edit, render_field, FieldChange, FieldEdit};
