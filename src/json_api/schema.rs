//! JSON schema types for orders posted by the ordering backend.

use serde::Deserialize;

/// Which business line an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonOrderKind {
    Coffee,
    Carwash,
}

/// Top-level order document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOrder {
    pub kind: JsonOrderKind,
    /// Order number; the backend sends either a string or an integer.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub items: Vec<JsonItem>,
    pub subtotal: f64,
    pub total: f64,
    pub payment_method: String,
    #[serde(default)]
    pub cash_received: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    /// Pre-formatted order time. Filled with the local time when absent.
    #[serde(default)]
    pub timestamp: Option<String>,

    // Coffee only
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_amount: Option<f64>,

    // Carwash only
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
}

/// One ordered product or service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonItem {
    pub name: String,
    /// Drink option (coffee orders).
    #[serde(default)]
    pub option: Option<String>,
    /// Vehicle type (carwash orders).
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price: f64,
}

fn default_quantity() -> u32 {
    1
}

/// Deserialize an order id given as `"1042"` or `1042`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Text(String),
        Number(u64),
    }

    match IdValue::deserialize(deserializer)? {
        IdValue::Text(s) => Ok(s),
        IdValue::Number(n) => Ok(n.to_string()),
    }
}
