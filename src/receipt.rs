//! # Receipt Encoder
//!
//! Turns an [`OrderRecord`] into the byte stream for a 32-column receipt.
//!
//! Coffee and carwash receipts share one layout; the [`OrderKind`] decides
//! the brand subtitle, the optional discount or customer lines, and the
//! farewell line.
//!
//! ```text
//!             ONEFAITH              (double size, bold)
//!              COFFEE
//!
//!        2026-10-15 09:30:00
//!          Order: C-1042            (bold)
//! ================================
//! Latte(Iced)
//!   2 x P120.00            P240.00
//! --------------------------------
//! Subtotal:                P240.00
//! TOTAL:                   P240.00  (bold)
//! ================================
//! Payment:                    Cash
//! Cash:                    P300.00
//! Change:                   P60.00
//!
//!            Thank you!
//!        Please come again!
//! ```
//!
//! The encoder is total and deterministic: the same order always yields
//! the same bytes, and nothing about the order is validated here.

use crate::components::{
    Align, Banner, BlankLine, Columns, ComponentExt, Divider, LineItem, Receipt, Text, Total,
};
use crate::ir::Program;
use crate::layout;
use crate::order::{OrderKind, OrderRecord};
use crate::protocol::stream::ByteStream;

/// Brand name printed as the first banner line.
pub const DEFAULT_BRAND: &str = "ONEFAITH";

/// Shop-level text that does not come from the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub name: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: DEFAULT_BRAND.to_string(),
        }
    }
}

impl Branding {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Encode an order with the default branding.
///
/// ## Example
///
/// ```
/// use recibo::order::{LineItem, OrderKind, OrderRecord};
/// use recibo::receipt;
///
/// let order = OrderRecord {
///     id: "C-1".into(),
///     kind: OrderKind::Coffee { discount: None },
///     items: vec![LineItem::new("Americano", 1, 95.0)],
///     subtotal: 95.0,
///     total: 95.0,
///     payment_method: "GCash".into(),
///     cash_received: None,
///     change: None,
///     timestamp: "2026-10-15 09:30:00".into(),
/// };
///
/// let bytes = receipt::encode(&order);
/// assert_eq!(bytes, receipt::encode(&order));
/// ```
pub fn encode(order: &OrderRecord) -> ByteStream {
    encode_with(order, &Branding::default())
}

/// Encode an order with explicit branding.
pub fn encode_with(order: &OrderRecord, branding: &Branding) -> ByteStream {
    program(order, branding).to_stream()
}

/// Compile an order to IR without generating bytes (for inspection).
pub fn program(order: &OrderRecord, branding: &Branding) -> Program {
    component(order, branding).compile()
}

/// Build the receipt component tree for an order.
pub fn component(order: &OrderRecord, branding: &Branding) -> Receipt {
    let mut receipt = Receipt::new()
        .child(Banner::new(&branding.name, order.kind.subtitle()))
        .child(Text::new(&order.timestamp))
        .child(Text::new(format!("Order: {}", order.id)).bold());

    if let OrderKind::Carwash {
        customer_name,
        customer_phone,
    } = &order.kind
    {
        receipt = receipt
            .child_opt(
                customer_name
                    .as_ref()
                    .map(|name| Text::new(format!("Customer: {}", name))),
            )
            .child_opt(
                customer_phone
                    .as_ref()
                    .map(|phone| Text::new(format!("Phone: {}", phone))),
            );
    }

    receipt = receipt
        .child(Divider::equals())
        .child(Align::left())
        .children(
            order
                .items
                .iter()
                .map(|item| LineItem::new(item.label(), item.quantity, item.unit_price)),
        )
        .child(Divider::dashed())
        .child(Total::labeled("Subtotal:", order.subtotal));

    if let OrderKind::Coffee {
        discount: Some(discount),
    } = &order.kind
        && !discount.kind.is_empty()
        && layout::cents(discount.amount) > 0.0
    {
        receipt = receipt.child(
            Total::labeled(format!("Discount ({}):", discount.kind), discount.amount).deduction(),
        );
    }

    receipt = receipt
        .child(Total::new(order.total).bold())
        .child(Divider::equals())
        .child(Columns::new("Payment:", &order.payment_method));

    if order.is_cash()
        && let Some(cash) = order.cash_received
    {
        receipt = receipt.child(Total::labeled("Cash:", cash));
        if let Some(change) = order.change_due()
            && layout::cents(change) > 0.0
        {
            receipt = receipt.child(Total::labeled("Change:", change));
        }
    }

    receipt
        .child(BlankLine::new())
        .child(Align::center())
        .child(Text::new("Thank you!"))
        .child(Text::new(order.kind.farewell()))
        .child(BlankLine::lines(2))
        .cut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Op;
    use crate::layout::COLUMNS;
    use crate::order::{Discount, LineItem as OrderLine};
    use crate::protocol::text::Alignment;

    fn latte_order() -> OrderRecord {
        OrderRecord {
            id: "C-1042".into(),
            kind: OrderKind::Coffee { discount: None },
            items: vec![OrderLine::new("Latte", 2, 120.0).with_descriptor("Iced")],
            subtotal: 240.0,
            total: 240.0,
            payment_method: "Cash".into(),
            cash_received: Some(300.0),
            change: None,
            timestamp: "2026-10-15 09:30:00".into(),
        }
    }

    fn carwash_order() -> OrderRecord {
        OrderRecord {
            id: "W-7".into(),
            kind: OrderKind::Carwash {
                customer_name: None,
                customer_phone: None,
            },
            items: vec![OrderLine::new("Full Wash", 1, 250.0).with_descriptor("Sedan")],
            subtotal: 250.0,
            total: 250.0,
            payment_method: "GCash".into(),
            cash_received: None,
            change: None,
            timestamp: "2026-10-15 10:00:00".into(),
        }
    }

    fn texts(order: &OrderRecord) -> Vec<String> {
        program(order, &Branding::default())
            .texts()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_quantity_line_and_derived_change() {
        let lines = texts(&latte_order());

        let detail = format!("  2 x P120.00{}P240.00", " ".repeat(COLUMNS - 13 - 7));
        assert!(lines.contains(&detail), "{:#?}", lines);
        assert_eq!(detail.len(), COLUMNS);

        let change = lines.iter().find(|l| l.starts_with("Change:")).unwrap();
        assert!(change.ends_with("P60.00"));
        assert_eq!(change.len(), COLUMNS);
    }

    #[test]
    fn test_header_sequence() {
        let ir = program(&latte_order(), &Branding::default());
        assert_eq!(
            ir.ops[..12],
            [
                Op::Init,
                Op::SetAlign(Alignment::Center),
                Op::SetDoubleSize(true),
                Op::SetBold(true),
                Op::Text("ONEFAITH".into()),
                Op::Newline,
                Op::Text("COFFEE".into()),
                Op::Newline,
                Op::SetDoubleSize(false),
                Op::SetBold(false),
                Op::Newline,
                Op::Text("2026-10-15 09:30:00".into()),
            ]
        );
    }

    #[test]
    fn test_footer_sequence() {
        let ir = program(&latte_order(), &Branding::default());
        let n = ir.ops.len();
        assert_eq!(
            ir.ops[n - 9..],
            [
                Op::Newline,
                Op::SetAlign(Alignment::Center),
                Op::Text("Thank you!".into()),
                Op::Newline,
                Op::Text("Please come again!".into()),
                Op::Newline,
                Op::Newline,
                Op::Newline,
                Op::Cut,
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let order = latte_order();
        assert_eq!(encode(&order), encode(&order));
        assert_eq!(encode(&order).as_bytes(), encode(&order.clone()).as_bytes());
    }

    #[test]
    fn test_custom_branding() {
        let lines = texts_with(&latte_order(), "KAPE NI JUAN");
        assert_eq!(lines[0], "KAPE NI JUAN");
    }

    fn texts_with(order: &OrderRecord, brand: &str) -> Vec<String> {
        program(order, &Branding::new(brand))
            .texts()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_discount_line() {
        let mut order = latte_order();
        order.kind = OrderKind::Coffee {
            discount: Some(Discount {
                kind: "Senior".into(),
                amount: 48.0,
            }),
        };
        order.total = 192.0;
        let lines = texts(&order);
        let idx = lines.iter().position(|l| l.starts_with("Subtotal:")).unwrap();
        assert!(lines[idx + 1].starts_with("Discount (Senior):"));
        assert!(lines[idx + 1].ends_with(" -P48.00"));
        assert!(lines[idx + 2].starts_with("TOTAL:"));
    }

    #[test]
    fn test_zero_discount_omitted() {
        let mut order = latte_order();
        order.kind = OrderKind::Coffee {
            discount: Some(Discount {
                kind: "Promo".into(),
                amount: 0.0,
            }),
        };
        assert!(!texts(&order).iter().any(|l| l.starts_with("Discount")));
    }

    #[test]
    fn test_sub_cent_discount_omitted() {
        let mut order = latte_order();
        order.kind = OrderKind::Coffee {
            discount: Some(Discount {
                kind: "Promo".into(),
                amount: 1e-9,
            }),
        };
        assert!(!texts(&order).iter().any(|l| l.starts_with("Discount")));
    }

    #[test]
    fn test_float_noise_change_omitted() {
        let mut order = latte_order();
        order.total = 0.1 + 0.2 - 1e-16;
        order.cash_received = Some(0.30000000000000004);
        let lines = texts(&order);
        assert!(lines.iter().any(|l| l.starts_with("Cash:")));
        assert!(!lines.iter().any(|l| l.starts_with("Change:")), "{:#?}", lines);
    }

    #[test]
    fn test_carwash_without_customer_lines() {
        let lines = texts(&carwash_order());
        assert_eq!(lines[1], "CARWASH");
        assert!(!lines.iter().any(|l| l.starts_with("Customer:")));
        assert!(!lines.iter().any(|l| l.starts_with("Phone:")));
        assert_eq!(lines[3], "Order: W-7");
        assert_eq!(lines[4], "=".repeat(COLUMNS));
    }

    #[test]
    fn test_carwash_customer_lines() {
        let mut order = carwash_order();
        order.kind = OrderKind::Carwash {
            customer_name: Some("Maria Santos".into()),
            customer_phone: Some("09171234567".into()),
        };
        let lines = texts(&order);
        assert_eq!(lines[4], "Customer: Maria Santos");
        assert_eq!(lines[5], "Phone: 09171234567");
        assert_eq!(lines[6], "=".repeat(COLUMNS));
    }

    #[test]
    fn test_non_cash_payment_has_no_cash_lines() {
        let lines = texts(&carwash_order());
        assert!(lines.iter().any(|l| l.starts_with("Payment:") && l.ends_with("GCash")));
        assert!(!lines.iter().any(|l| l.starts_with("Cash:")));
        assert!(!lines.iter().any(|l| l.starts_with("Change:")));
    }

    #[test]
    fn test_exact_cash_has_no_change_line() {
        let mut order = latte_order();
        order.cash_received = Some(240.0);
        let lines = texts(&order);
        assert!(lines.iter().any(|l| l.starts_with("Cash:")));
        assert!(!lines.iter().any(|l| l.starts_with("Change:")));
    }

    #[test]
    fn test_empty_items_separators_back_to_back() {
        let mut order = latte_order();
        order.items.clear();
        let ir = program(&order, &Branding::default());
        let eq = Op::Text("=".repeat(COLUMNS));
        let pos = ir.ops.iter().position(|op| *op == eq).unwrap();
        assert_eq!(
            ir.ops[pos..pos + 5],
            [
                eq.clone(),
                Op::Newline,
                Op::SetAlign(Alignment::Left),
                Op::Text("-".repeat(COLUMNS)),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_negative_total() {
        let mut order = latte_order();
        order.total = -15.5;
        let lines = texts(&order);
        let total = lines.iter().find(|l| l.starts_with("TOTAL:")).unwrap();
        assert!(total.ends_with(" P-15.50"));
    }

    #[test]
    fn test_long_item_wraps() {
        let mut order = carwash_order();
        order.items = vec![OrderLine::new("Premium Interior Detailing Package", 1, 1800.0)];
        let lines = texts(&order);
        let start = lines.iter().position(|l| l == "Premium Interior Detailing").unwrap();
        assert_eq!(lines[start + 1], "Package");
        assert!(lines[start + 2].starts_with("  1 x P1800.00"));
    }

    #[test]
    fn test_bytes_are_opcodes_or_printable() {
        let bytes = encode(&latte_order());
        assert!(bytes
            .as_bytes()
            .iter()
            .all(|b| matches!(b, 0x1B | 0x1D | 0x0A | 0x20..=0x7E | 0x00..=0x02 | 0x11)));
    }
}
