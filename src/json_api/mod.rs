//! # JSON API
//!
//! Order intake for the ordering backend.
//!
//! Orders arrive as camelCase JSON. They are validated here, at the edge,
//! so the encoder only ever sees printable ASCII and a filled timestamp.
//!
//! ## Example
//!
//! ```
//! use recibo::json_api::parse_order;
//!
//! let json = r#"{
//!     "kind": "coffee",
//!     "id": "1042",
//!     "items": [{"name": "Latte", "option": "Iced", "quantity": 2, "price": 120}],
//!     "subtotal": 240,
//!     "total": 240,
//!     "paymentMethod": "Cash",
//!     "cashReceived": 300,
//!     "timestamp": "2024-05-01 09:15:00"
//! }"#;
//!
//! let order = parse_order(json).unwrap();
//! let bytes = recibo::receipt::encode(&order);
//! assert!(!bytes.is_empty());
//! ```

mod convert;
mod schema;

pub use convert::{JsonApiError, TIMESTAMP_FORMAT};
pub use schema::{JsonItem, JsonOrder, JsonOrderKind};

use crate::error::ReciboError;
use crate::order::OrderRecord;

/// Parse and validate an order document.
///
/// Malformed JSON and rejected field values are both reported as
/// [`ReciboError::InvalidOrder`].
pub fn parse_order(json: &str) -> Result<OrderRecord, ReciboError> {
    let doc: JsonOrder =
        serde_json::from_str(json).map_err(|e| ReciboError::InvalidOrder(e.to_string()))?;
    Ok(doc.to_order()?)
}
