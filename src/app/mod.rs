//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the widgets. It
//! composes the demo page and routes input to the focused widget.
//!
//! ```text
//! Key → Event → handle_event → widget state changes → (should_render, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`demo`]: Sample rows, columns and fields shown on the page
//! - [`handler`]: Event processing and routing to the focused widget
//! - [`modes`]: Panel focus state
//! - [`state`]: Page state container and view model computation

pub mod actions;
pub mod demo;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Panel;
pub use state::AppState;
