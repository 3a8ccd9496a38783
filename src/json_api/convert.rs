//! Conversion from JSON schema types to [`OrderRecord`]s.

use std::fmt;

use chrono::Local;

use super::schema::*;
use crate::error::ReciboError;
use crate::order::{Discount, LineItem, OrderKind, OrderRecord};
use crate::protocol::commands::is_printable;

/// Format used for timestamps filled in at intake.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The peso sign is not in the printer's character set.
const PESO_SIGN: char = '\u{20B1}';

/// Errors from JSON → order conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonApiError {
    /// A field value is invalid.
    InvalidField { field: String, message: String },
    /// Text contains a character the printer cannot render.
    Unprintable { field: String, character: char },
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonApiError::InvalidField { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            JsonApiError::Unprintable { field, character } => write!(
                f,
                "{}: character {:?} (U+{:04X}) is not printable ASCII",
                field, character, *character as u32
            ),
        }
    }
}

impl std::error::Error for JsonApiError {}

impl From<JsonApiError> for ReciboError {
    fn from(err: JsonApiError) -> Self {
        ReciboError::InvalidOrder(err.to_string())
    }
}

impl JsonOrder {
    /// Validate and convert into an order record.
    ///
    /// All text is checked against printable ASCII after substituting the
    /// peso sign with `P`. A missing or empty timestamp becomes the current
    /// local time.
    pub fn to_order(&self) -> Result<OrderRecord, JsonApiError> {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_line_item(i, self.kind))
            .collect::<Result<Vec<_>, _>>()?;

        let kind = match self.kind {
            JsonOrderKind::Coffee => OrderKind::Coffee {
                discount: self.discount()?,
            },
            JsonOrderKind::Carwash => OrderKind::Carwash {
                customer_name: optional_text("customerName", self.customer_name.as_deref())?,
                customer_phone: optional_text("customerPhone", self.customer_phone.as_deref())?,
            },
        };

        let timestamp = match self.timestamp.as_deref().map(str::trim) {
            Some(ts) if !ts.is_empty() => printable_text("timestamp", ts)?,
            _ => Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        Ok(OrderRecord {
            id: printable_text("id", &self.id)?,
            kind,
            items,
            subtotal: amount("subtotal", self.subtotal)?,
            total: amount("total", self.total)?,
            payment_method: printable_text("paymentMethod", &self.payment_method)?,
            cash_received: self
                .cash_received
                .map(|v| amount("cashReceived", v))
                .transpose()?,
            change: self.change.map(|v| amount("change", v)).transpose()?,
            timestamp,
        })
    }

    fn discount(&self) -> Result<Option<Discount>, JsonApiError> {
        let kind = optional_text("discountType", self.discount_type.as_deref())?;
        match (kind, self.discount_amount) {
            (Some(kind), Some(value)) => Ok(Some(Discount {
                kind,
                amount: amount("discountAmount", value)?,
            })),
            _ => Ok(None),
        }
    }
}

impl JsonItem {
    fn to_line_item(&self, index: usize, kind: JsonOrderKind) -> Result<LineItem, JsonApiError> {
        let name = printable_text(&format!("items[{}].name", index), &self.name)?;
        let (descriptor_field, descriptor) = match kind {
            JsonOrderKind::Coffee => ("option", self.option.as_deref()),
            JsonOrderKind::Carwash => ("vehicleType", self.vehicle_type.as_deref()),
        };

        let mut item = LineItem::new(
            name,
            self.quantity,
            amount(&format!("items[{}].price", index), self.price)?,
        );
        if let Some(d) = descriptor {
            item = item.with_descriptor(printable_text(
                &format!("items[{}].{}", index, descriptor_field),
                d,
            )?);
        }
        Ok(item)
    }
}

/// Substitute the peso sign and reject anything outside 0x20..=0x7E.
fn printable_text(field: &str, value: &str) -> Result<String, JsonApiError> {
    let text = value.replace(PESO_SIGN, "P");
    if let Some(character) = text.chars().find(|&c| !(c.is_ascii() && is_printable(c as u8))) {
        return Err(JsonApiError::Unprintable {
            field: field.to_string(),
            character,
        });
    }
    Ok(text)
}

fn optional_text(field: &str, value: Option<&str>) -> Result<Option<String>, JsonApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| printable_text(field, v))
        .transpose()
}

fn amount(field: &str, value: f64) -> Result<f64, JsonApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(JsonApiError::InvalidField {
            field: field.to_string(),
            message: format!("expected a finite amount, got {}", value),
        })
    }
}
