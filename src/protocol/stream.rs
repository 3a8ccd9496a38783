//! # Byte Stream Builder
//!
//! [`ByteStream`] owns the growable buffer a receipt is written into. Each
//! opcode has its own append method, so every command lands in the buffer
//! whole before the next one starts.

use super::commands;
use super::text::{self, Alignment};

/// An append-only sequence of printer bytes.
///
/// ## Example
///
/// ```
/// use recibo::protocol::stream::ByteStream;
/// use recibo::protocol::text::Alignment;
///
/// let mut stream = ByteStream::new();
/// stream.init().align(Alignment::Center).bold(true).text("HELLO").line_feed();
///
/// assert_eq!(
///     stream.as_bytes(),
///     b"\x1B\x40\x1B\x61\x01\x1B\x45\x01HELLO\x0A"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteStream {
    bytes: Vec<u8>,
}

impl ByteStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `ESC @`.
    pub fn init(&mut self) -> &mut Self {
        self.bytes.extend(commands::init());
        self
    }

    /// Append `ESC a n`.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.bytes.extend(text::align(alignment));
        self
    }

    /// Append `ESC E n`.
    pub fn bold(&mut self, enabled: bool) -> &mut Self {
        self.bytes.extend(text::bold(enabled));
        self
    }

    /// Append `GS ! n`.
    pub fn double_size(&mut self, enabled: bool) -> &mut Self {
        self.bytes.extend(text::double_size(enabled));
        self
    }

    /// Append `GS V 0`.
    pub fn cut(&mut self) -> &mut Self {
        self.bytes.extend(commands::cut());
        self
    }

    /// Append `LF`.
    pub fn line_feed(&mut self) -> &mut Self {
        self.bytes.extend(commands::line_feed());
        self
    }

    /// Append literal text.
    ///
    /// Bytes are copied as-is. Callers are expected to hand over printable
    /// ASCII only; see [`commands::is_printable`].
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.bytes.extend_from_slice(s.as_bytes());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
