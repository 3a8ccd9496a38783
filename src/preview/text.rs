//! Plain-text rendering of decoded lines.
//!
//! Lays each [`ParsedLine`] onto a fixed-width column grid the way the
//! printer would place it. Double-size glyphs are two columns wide, so
//! they are drawn with a space after every character.

use super::ParsedLine;
use crate::layout::COLUMNS;
use crate::protocol::text::Alignment;

/// Render lines as a `width`-column text preview, one row per line.
///
/// ## Example
///
/// ```
/// use recibo::preview::{decode, render_text};
///
/// let lines = decode(b"\x1B\x61\x01Hi\x0A");
/// assert_eq!(render_text(&lines, 8), "   Hi\n");
/// ```
pub fn render_text(lines: &[ParsedLine], width: usize) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&render_line(line, width));
        out.push('\n');
    }
    out
}

/// Render with the receipt's native column count.
pub fn render_receipt(lines: &[ParsedLine]) -> String {
    render_text(lines, COLUMNS)
}

fn render_line(line: &ParsedLine, width: usize) -> String {
    let glyphs = if line.double_size {
        line.text.chars().flat_map(|c| [c, ' ']).collect::<String>()
    } else {
        line.text.clone()
    };
    let used = glyphs.trim_end().chars().count();
    let free = width.saturating_sub(used);

    let indent = match line.align {
        Alignment::Left => 0,
        Alignment::Center => free / 2,
        Alignment::Right => free,
    };

    format!("{}{}", " ".repeat(indent), glyphs).trim_end().to_string()
}
