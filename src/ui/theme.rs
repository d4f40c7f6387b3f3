//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting both built-in themes
//! (Catppuccin variants) and custom themes loaded from TOML files. A theme can
//! also carry the table's optional style slots (`container`, `header`, `body`).
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! focus_fg = "#f5c2e7"
//! input_border = "#585b70"
//! sort_indicator_fg = "#f9e2af"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! status_fg = "#a6e3a1"
//!
//! [table.header]
//! fg = "#89b4fa"
//! bold = true
//! ```

use crate::domain::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
    /// Style slots applied to the table widget.
    #[serde(default)]
    pub table: TableStyles,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page title color.
    pub header_fg: String,
    /// Optional page title background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row / focused control foreground.
    pub selection_fg: String,
    /// Selected row / focused control background.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text (footer, placeholders, labels).
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Title of the focused section.
    pub focus_fg: String,
    /// Frame of text inputs.
    pub input_border: String,
    /// Sort indicators in table headers.
    pub sort_indicator_fg: String,

    /// Button label.
    pub button_fg: String,
    /// Button background.
    pub button_bg: String,

    /// Status line (submitted/selected values).
    pub status_fg: String,
}

/// A style applicable to one region of a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Style {
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

impl Style {
    /// ANSI prefix that switches this style on. Empty for the default style.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(Theme::bold());
        }
        if let Some(fg) = &self.fg {
            out.push_str(&Theme::fg(fg));
        }
        if let Some(bg) = &self.bg {
            out.push_str(&Theme::bg(bg));
        }
        out
    }
}

/// Optional style slots of the table widget.
///
/// `container` applies to the table frame lines, `header` to the header cells,
/// `body` to the data rows. Unset slots fall back to the theme colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableStyles {
    #[serde(default)]
    pub container: Option<Style>,
    #[serde(default)]
    pub header: Option<Style>,
    #[serde(default)]
    pub body: Option<Style>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Io`] if the file cannot be read and
    /// [`WidgetError::Theme`] if its content does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| WidgetError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape sequence for a hex color.
    ///
    /// ```
    /// use zwidgets::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
