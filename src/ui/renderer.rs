//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: the page components write into a [`Frame`]

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Renders the page to an ANSI string.
///
/// # Example
///
/// ```
/// use zwidgets::{initialize, Config};
/// use zwidgets::ui::{helpers::strip_ansi, render_to_string};
///
/// let state = initialize(&Config::default())?;
/// let page = strip_ansi(&render_to_string(&state, 30, 80));
/// assert!(page.contains("Charlie"));
/// # Ok::<(), zwidgets::WidgetError>(())
/// ```
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut frame = Frame::new();
    components::render_page(&mut frame, &viewmodel, &state.theme, cols, rows);
    frame.into_string()
}

/// Renders the page to stdout.
///
/// Does not clear the screen; the host redraws the pane before calling.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}
