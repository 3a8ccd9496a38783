//! # Byte Stream Preview Decoder
//!
//! Parses an ESC/POS byte stream back into styled lines for on-screen
//! preview.
//!
//! ## Architecture
//!
//! ```text
//! bytes → decode() → Vec<ParsedLine> → render_text() → String
//!            ↓
//!      Single left-to-right scan:
//!      - ESC/GS commands update the style state
//!      - printable bytes accumulate into the line buffer
//!      - LF flushes the buffer into a ParsedLine
//! ```
//!
//! ## Style Semantics
//!
//! A line carries the style that was active when its first text byte was
//! read, so `ESC E 1, "TOTAL", ESC E 0, LF` yields a bold line.
//! Alignment persists across lines. Bold and double size are switched off
//! after every non-empty line, whether or not the stream turned them off.
//! This mirrors how receipts are written here (style off before LF); it
//! is a previewer's simplification, not a faithful printer emulation.
//!
//! The decoder never fails: unknown commands are skipped by their prefix
//! length and truncated commands at the end of the stream end the scan.
//!
//! ## Example
//!
//! ```
//! use recibo::preview::{decode, ParsedLine};
//! use recibo::protocol::text::Alignment;
//!
//! let lines = decode(b"\x1B\x40\x1B\x61\x01\x1B\x45\x01ONEFAITH\x0A");
//! assert_eq!(
//!     lines,
//!     vec![ParsedLine {
//!         text: "ONEFAITH".into(),
//!         align: Alignment::Center,
//!         bold: true,
//!         double_size: false,
//!     }]
//! );
//! ```

mod text;

pub use text::{render_receipt, render_text};

use serde::Serialize;

use crate::ir::StyleState;
use crate::protocol::commands::{ESC, GS, LF, SEL_ALIGN, SEL_BOLD, SEL_CUT, SEL_SIZE, is_printable};
use crate::protocol::text::Alignment;

/// One printed line as reconstructed from the byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub text: String,
    pub align: Alignment,
    pub bold: bool,
    #[serde(rename = "doubleSize")]
    pub double_size: bool,
}

impl ParsedLine {
    /// A blank printed line in the given alignment.
    pub fn blank(align: Alignment) -> Self {
        Self {
            text: String::new(),
            align,
            bold: false,
            double_size: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Scan state of the decoder.
#[derive(Debug, Default)]
struct DecoderState {
    /// Style driven by the commands seen so far.
    style: StyleState,
    /// Style captured at the first text byte of the pending line.
    line_style: Option<StyleState>,
    text: String,
    lines: Vec<ParsedLine>,
}

impl DecoderState {
    fn push_char(&mut self, byte: u8) {
        if self.line_style.is_none() {
            self.line_style = Some(self.style);
        }
        self.text.push(char::from(byte));
    }

    fn flush(&mut self) {
        match self.line_style.take() {
            Some(style) if !self.text.is_empty() => {
                self.lines.push(ParsedLine {
                    text: std::mem::take(&mut self.text),
                    align: style.alignment,
                    bold: style.bold,
                    double_size: style.double_size,
                });
                self.style.bold = false;
                self.style.double_size = false;
            }
            _ => {
                self.text.clear();
                self.lines.push(ParsedLine::blank(self.style.alignment));
            }
        }
    }

    fn finish(mut self) -> Vec<ParsedLine> {
        if let Some(style) = self.line_style.take()
            && !self.text.is_empty()
        {
            self.lines.push(ParsedLine {
                text: self.text,
                align: style.alignment,
                bold: style.bold,
                double_size: style.double_size,
            });
        }
        self.lines
    }
}

/// Decode a byte stream into styled lines.
pub fn decode(bytes: &[u8]) -> Vec<ParsedLine> {
    let mut state = DecoderState::default();
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let next = bytes.get(i + 1).copied();
        let param = bytes.get(i + 2).copied();

        i += match (byte, next) {
            (ESC, Some(selector)) => match (selector, param) {
                (SEL_ALIGN, Some(n)) => {
                    state.style.alignment = Alignment::from_param(n);
                    3
                }
                (SEL_BOLD, Some(n)) => {
                    state.style.bold = n == 1;
                    3
                }
                // ESC @ and anything unrecognised: two-byte skip
                _ => 2,
            },
            (GS, Some(selector)) => match (selector, param) {
                (SEL_SIZE, Some(n)) => {
                    state.style.double_size = n != 0;
                    3
                }
                (SEL_CUT, _) => 3,
                _ => 2,
            },
            (LF, _) => {
                state.flush();
                1
            }
            (b, _) if is_printable(b) => {
                state.push_char(b);
                1
            }
            _ => 1,
        };
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::stream::ByteStream;

    fn line(text: &str, align: Alignment, bold: bool, double_size: bool) -> ParsedLine {
        ParsedLine {
            text: text.into(),
            align,
            bold,
            double_size,
        }
    }

    #[test]
    fn test_centered_bold_brand_line() {
        let mut stream = ByteStream::new();
        stream
            .init()
            .align(Alignment::Center)
            .bold(true)
            .text("ONEFAITH")
            .line_feed();
        assert_eq!(
            decode(stream.as_bytes()),
            vec![line("ONEFAITH", Alignment::Center, true, false)]
        );
    }

    #[test]
    fn test_empty_stream() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_blank_line_keeps_alignment() {
        let lines = decode(b"\x1B\x61\x02\x1B\x45\x01\x0A");
        assert_eq!(lines, vec![ParsedLine::blank(Alignment::Right)]);
    }

    #[test]
    fn test_blank_line_does_not_reset_style() {
        // bold survives an empty flush and applies to the next text
        let lines = decode(b"\x1B\x45\x01\x0AX\x0A");
        assert_eq!(
            lines,
            vec![
                ParsedLine::blank(Alignment::Left),
                line("X", Alignment::Left, true, false),
            ]
        );
    }

    #[test]
    fn test_style_captured_before_off() {
        let lines = decode(b"\x1B\x45\x01TOTAL\x1B\x45\x00\x0A");
        assert_eq!(lines, vec![line("TOTAL", Alignment::Left, true, false)]);
    }

    #[test]
    fn test_bold_and_size_reset_after_line() {
        let lines = decode(b"\x1D\x21\x11\x1B\x45\x01BIG\x0Asmall\x0A");
        assert_eq!(
            lines,
            vec![
                line("BIG", Alignment::Left, true, true),
                line("small", Alignment::Left, false, false),
            ]
        );
    }

    #[test]
    fn test_alignment_persists() {
        let lines = decode(b"\x1B\x61\x01a\x0Ab\x0A");
        assert_eq!(lines[1].align, Alignment::Center);
    }

    #[test]
    fn test_trailing_text_flushed() {
        let lines = decode(b"\x1B\x61\x02tail");
        assert_eq!(lines, vec![line("tail", Alignment::Right, false, false)]);
    }

    #[test]
    fn test_init_and_cut_invisible() {
        let lines = decode(b"\x1B\x40A\x1D\x56\x00\x0A");
        assert_eq!(lines, vec![line("A", Alignment::Left, false, false)]);
    }

    #[test]
    fn test_unknown_commands_skip_two() {
        // ESC d / GS B consume two bytes; the third is text
        let lines = decode(b"\x1B\x64Z\x1D\x42Y\x0A");
        assert_eq!(lines, vec![line("ZY", Alignment::Left, false, false)]);
    }

    #[test]
    fn test_non_printable_skipped() {
        let lines = decode(&[b'a', 0x00, 0x7F, 0xFF, b'b', 0x0D, LF]);
        assert_eq!(lines, vec![line("ab", Alignment::Left, false, false)]);
    }

    #[test]
    fn test_truncated_commands_end_scan() {
        assert_eq!(decode(b"hi\x1B"), vec![line("hi", Alignment::Left, false, false)]);
        assert_eq!(decode(b"hi\x1B\x61"), vec![line("hi", Alignment::Left, false, false)]);
        assert_eq!(decode(b"hi\x1D\x21"), vec![line("hi", Alignment::Left, false, false)]);
        assert_eq!(decode(b"hi\x1D\x56"), vec![line("hi", Alignment::Left, false, false)]);
    }

    #[test]
    fn test_size_param_nonzero() {
        let lines = decode(b"\x1D\x21\x01w\x0A");
        assert!(lines[0].double_size);
    }

    #[test]
    fn test_bold_param_other_than_one_is_off() {
        let lines = decode(b"\x1B\x45\x02x\x0A");
        assert!(!lines[0].bold);
    }

    #[test]
    fn test_parsed_line_json() {
        let json = serde_json::to_value(line("A", Alignment::Center, true, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "A", "align": "center", "bold": true, "doubleSize": false})
        );
    }
}
