//! # ESC/POS Protocol Implementation
//!
//! This module provides the low-level byte builders for the subset of the
//! ESC/POS command language a 58mm receipt needs.
//!
//! ## Module Structure
//!
//! - [`commands`]: Prefix bytes, initialize, line feed, cut
//! - [`text`]: Alignment, bold and double-size styling
//! - [`stream`]: [`ByteStream`](stream::ByteStream), the buffer receipts are written into
//!
//! ## Opcode Table
//!
//! | Opcode | Bytes |
//! |---|---|
//! | Initialize | `1B 40` |
//! | Align Left / Center / Right | `1B 61 00` / `01` / `02` |
//! | Bold On / Off | `1B 45 01` / `00` |
//! | Double Size On / Off | `1D 21 11` / `00` |
//! | Line Feed | `0A` |
//! | Cut | `1D 56 00` |
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::stream::ByteStream;
//! use recibo::protocol::text::Alignment;
//!
//! let mut data = ByteStream::new();
//! data.init();
//! data.align(Alignment::Center).bold(true).text("RECEIPT").bold(false).line_feed();
//! data.cut();
//!
//! assert_eq!(&data.as_bytes()[..2], &[0x1B, 0x40]);
//! ```

pub mod commands;
pub mod stream;
pub mod text;

pub use stream::ByteStream;
