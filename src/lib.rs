//! zwidgets: reusable terminal widgets for Zellij plugins.
//!
//! Three widgets and a demo page composing them:
//! - a sortable, filterable [`Table`] over rows of scalar values
//! - a [`Form`] rendering one control per field descriptor and handing out the
//!   complete value mapping on submission
//! - a [`DateRangeSelector`](date::DateRangeSelector) with one-click presets and a
//!   free-text custom range
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Demo page
//! │  - Event routing to the focused widget              │
//! │  - Actions (submitted / selected values)            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ table/        │   │ form/         │   │ date/         │
//! │ - Sort cycle  │   │ - Value map   │   │ - Presets     │
//! │ - Filters     │   │ - Field edits │   │ - Custom range│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and UI (ui/)                      │
//! │  - Rows, columns, fields, ranges, errors            │
//! │  - Themes, view models, ANSI components             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, OTLP JSON file export     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zwidgets.wasm" {
//!         theme "catppuccin-latte"
//!         theme_file "~/.config/zellij/zwidgets-theme.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zwidgets::app::{handle_event, Action, Event};
//! use zwidgets::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! // Sort the table by ID twice (descending), then submit the form.
//! let events = [Event::Enter, Event::Enter, Event::NextPanel, Event::Submit];
//! let mut emitted = Vec::new();
//! for event in &events {
//!     let (_should_render, actions) = handle_event(&mut state, event)?;
//!     emitted.extend(actions);
//! }
//!
//! let names: Vec<String> = state.table.display_rows().map(|r| r.display("name")).collect();
//! assert_eq!(names, ["Charlie", "Bob", "Alice"]);
//! assert!(matches!(emitted.as_slice(), [Action::FormSubmitted(_)]));
//! # Ok::<(), zwidgets::WidgetError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod date;
pub mod domain;
pub mod form;
pub mod infrastructure;
pub mod observability;
pub mod table;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Panel};
pub use date::DateRangeSelector;
pub use domain::{
    CellValue, Column, CustomRange, DateRange, Field, FieldType, FormValues, Preset, RangeEnd,
    Result, Row, SortConfig, SortDirection, WidgetError,
};
pub use form::Form;
pub use table::Table;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` resolves to the sandbox `/host`.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zwidgets::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("theme".to_string(), "catppuccin-latte".to_string()),
    ///     ("trace_level".to_string(), " ".to_string()),
    /// ]);
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }
}

/// Resolves the configured theme: file, then built-in name, then the default.
///
/// Failures are logged and fall through to the next source.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file"),
        }
    }

    if let Some(theme_name) = &config.theme_name {
        match Theme::from_name(theme_name) {
            Some(theme) => return theme,
            None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
        }
    }

    Theme::default()
}

/// Builds the demo page from configuration.
///
/// Does not install a tracing subscriber; the plugin shim calls
/// [`observability::init_tracing`] first.
///
/// # Errors
///
/// Returns [`WidgetError`] if the demo's column or field descriptors are invalid.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing zwidgets demo page");

    let theme = resolve_theme(config);
    let table = Table::new(app::demo::sample_rows(), app::demo::sample_columns())?;
    let form = Form::new(app::demo::sample_fields())?;

    Ok(AppState::new(table, form, DateRangeSelector::new(), theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let latte = include_str!("../themes/catppuccin-latte.toml");
        write!(file, "{}", latte.replace("catppuccin-latte", "custom")).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".into()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            trace_level: None,
        };
        assert_eq!(resolve_theme(&config).name, "custom");
    }

    #[test]
    fn missing_theme_sources_fall_back() {
        let config = Config {
            theme_name: Some("catppuccin-latte".into()),
            theme_file: Some("/nonexistent/theme.toml".into()),
            trace_level: None,
        };
        assert_eq!(resolve_theme(&config).name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("nope".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, "catppuccin-mocha");
    }

    #[test]
    fn theme_table_styles_reach_the_table() {
        let config = Config {
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert!(state.table.styles().header.is_some());
        assert!(state.table.styles().container.is_some());
    }
}
