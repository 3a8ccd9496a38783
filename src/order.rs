//! # Order Records
//!
//! The immutable input of the receipt encoder. An [`OrderRecord`] is built
//! once by the ordering front end (or by [`crate::json_api`]) and read once
//! by [`crate::receipt::encode`].
//!
//! Values are taken as-is. Negative prices, empty item lists or totals that
//! do not add up are business-level problems and are printed faithfully.

/// One ordered product or service.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Product or service label, e.g. `Latte` or `Full Wash`.
    pub name: String,
    /// Secondary descriptor: drink option for coffee, vehicle type for carwash.
    pub descriptor: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            descriptor: None,
            quantity,
            unit_price,
        }
    }

    /// Attach a secondary descriptor.
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    /// Printed label: `name`, or `name(descriptor)` when a non-empty
    /// descriptor is present.
    pub fn label(&self) -> String {
        match self.descriptor.as_deref() {
            Some(d) if !d.is_empty() => format!("{}({})", self.name, d),
            _ => self.name.clone(),
        }
    }
}

/// A coffee-order discount such as `Senior` or `PWD`.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub kind: String,
    pub amount: f64,
}

/// The kind-specific part of an order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderKind {
    Coffee {
        discount: Option<Discount>,
    },
    Carwash {
        customer_name: Option<String>,
        customer_phone: Option<String>,
    },
}

impl OrderKind {
    /// Second brand line under the business name.
    pub fn subtitle(&self) -> &'static str {
        match self {
            OrderKind::Coffee { .. } => "COFFEE",
            OrderKind::Carwash { .. } => "CARWASH",
        }
    }

    /// Second footer line under "Thank you!".
    pub fn farewell(&self) -> &'static str {
        match self {
            OrderKind::Coffee { .. } => "Please come again!",
            OrderKind::Carwash { .. } => "Drive safely!",
        }
    }

    /// Short lowercase name, as used in JSON and logs.
    pub fn name(&self) -> &'static str {
        match self {
            OrderKind::Coffee { .. } => "coffee",
            OrderKind::Carwash { .. } => "carwash",
        }
    }
}

/// A completed order, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: String,
    pub kind: OrderKind,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub total: f64,
    /// Free-form payment method label, e.g. `Cash` or `GCash`.
    pub payment_method: String,
    pub cash_received: Option<f64>,
    pub change: Option<f64>,
    /// Pre-formatted by the caller; printed verbatim.
    pub timestamp: String,
}

impl OrderRecord {
    /// True when the payment method is cash (case-insensitive).
    pub fn is_cash(&self) -> bool {
        self.payment_method.trim().eq_ignore_ascii_case("cash")
    }

    /// Change to hand back: the supplied value, otherwise
    /// `cash_received - total` when cash was received.
    pub fn change_due(&self) -> Option<f64> {
        self.change
            .or_else(|| self.cash_received.map(|cash| cash - self.total))
    }
}
