//! # Recibo - Receipt Protocol Engine
//!
//! Recibo turns completed coffee and carwash orders into ESC/POS byte
//! streams for 58mm (32-column) thermal printers, and decodes those
//! streams back into styled lines for previewing. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders and [`ByteStream`]
//! - **Layout**: fixed-width padding and word wrapping
//! - **Receipt encoding**: orders → components → IR → bytes
//! - **Preview**: bytes → [`preview::ParsedLine`]s → text
//! - **Transport**: Base64 hand-off, device writes and intent links
//!
//! ## Quick Start
//!
//! ```
//! use recibo::{
//!     order::{LineItem, OrderKind, OrderRecord},
//!     preview, receipt,
//!     transport::to_transport_encoding,
//! };
//!
//! let order = OrderRecord {
//!     id: "1042".into(),
//!     kind: OrderKind::Coffee { discount: None },
//!     items: vec![LineItem::new("Latte", 2, 120.0).with_descriptor("Iced")],
//!     subtotal: 240.0,
//!     total: 240.0,
//!     payment_method: "Cash".into(),
//!     cash_received: Some(300.0),
//!     change: None,
//!     timestamp: "2024-05-01 09:15:00".into(),
//! };
//!
//! let stream = receipt::encode(&order);
//! let payload = to_transport_encoding(&stream);
//! assert!(payload.starts_with("G0A"));
//!
//! let lines = preview::decode(stream.as_bytes());
//! assert_eq!(lines[0].text, "ONEFAITH");
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`ir`] | Printer operations and code generation |
//! | [`layout`] | Column padding, wrapping, money |
//! | [`components`] | Receipt building blocks |
//! | [`order`] | Order records |
//! | [`receipt`] | Order → byte stream |
//! | [`preview`] | Byte stream → styled lines |
//! | [`transport`] | Base64 and delivery backends |
//! | [`json_api`] | Order JSON intake |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod components;
pub mod error;
pub mod ir;
pub mod json_api;
pub mod layout;
pub mod order;
pub mod preview;
pub mod protocol;
pub mod receipt;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::ReciboError;
pub use order::OrderRecord;
pub use protocol::ByteStream;
pub use transport::DeviceTransport;
