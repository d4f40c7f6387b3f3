//! Shared rendering utilities.
//!
//! Components write into a [`Frame`] instead of stdout, so a whole page can be
//! rendered to a string, inspected in tests, and printed once by the plugin.
//!
//! Widths are measured in terminal columns, so wide glyphs (CJK, emoji) count
//! as two. Control characters in user text are shown as spaces.

use crate::ui::theme::Theme;
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// An ANSI output buffer for one rendered page.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a 1-indexed row and column.
    ///
    /// ```
    /// use zwidgets::ui::helpers::Frame;
    ///
    /// let mut frame = Frame::new();
    /// frame.move_to(5, 1);
    /// assert_eq!(frame.as_str(), "\u{1b}[5;1H");
    /// ```
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Writes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Writes `text` cut or padded to exactly `width` columns.
    pub fn push_fit(&mut self, text: &str, width: usize) {
        let fitted = fit(text, width);
        let used = display_width(&fitted);
        self.buf.push_str(&fitted);
        self.pad(width.saturating_sub(used));
    }

    pub fn reset(&mut self) {
        self.buf.push_str(Theme::reset());
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Terminal columns occupied by `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cuts `text` to at most `width` columns, marking the cut with `…`.
///
/// Control characters become spaces so a cell never spans terminal lines.
///
/// ```
/// use zwidgets::ui::helpers::fit;
///
/// assert_eq!(fit("Charlie", 4), "Cha…");
/// assert_eq!(fit("Bob", 4), "Bob");
/// assert_eq!(fit("x\ny", 4), "x y");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let clean: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if display_width(&clean) <= width {
        return clean;
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in clean.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

/// Left padding that centers `len` columns inside `width`.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Splits `width` into `count` column widths, giving the remainder to the
/// leftmost columns.
#[must_use]
pub fn split_columns(width: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let base = width / count;
    let extra = width % count;
    (0..count).map(|i| base + usize::from(i < extra)).collect()
}

/// Strips ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC '[' params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_fit_pads_short_text() {
        let mut frame = Frame::new();
        frame.push_fit("ab", 4);
        frame.push("|");
        assert_eq!(frame.as_str(), "ab  |");
    }

    #[test]
    fn fit_to_zero_width_is_empty() {
        assert_eq!(fit("abc", 0), "");
        assert_eq!(fit("▲", 1), "▲");
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(fit("日本語", 4), "日…");
        assert_eq!(display_width(&fit("日本語日本語", 6)), 5);

        let mut frame = Frame::new();
        frame.push_fit("日本語日本語日本語", 8);
        frame.push("|");
        assert_eq!(display_width(frame.as_str()), 9);
    }

    #[test]
    fn control_characters_become_spaces() {
        assert_eq!(fit("x\ny", 10), "x y");
        assert_eq!(fit("a\tb\r", 10), "a b ");
        assert!(!fit("line one\nline two", 5).contains('\n'));
    }

    #[test]
    fn columns_share_remainder_from_the_left() {
        assert_eq!(split_columns(10, 3), vec![4, 3, 3]);
        assert!(split_columns(10, 0).is_empty());
    }

    #[test]
    fn strip_ansi_keeps_visible_text() {
        let styled = format!("{}Name{}", Theme::fg("#ffffff"), Theme::reset());
        assert_eq!(strip_ansi(&styled), "Name");
        assert_eq!(strip_ansi("\u{1b}[3;1Hrow"), "row");
    }
}
