//! # Text Components
//!
//! Components for printing text lines, the brand banner, order lines and
//! money totals.

use super::Component;
use crate::ir::Op;
use crate::layout::{self, COLUMNS};
use crate::protocol::text::Alignment;

/// A single line of text, optionally bold.
///
/// Bold is switched off again before the line feed, so the flag never
/// leaks into the next line.
///
/// ## Example
///
/// ```
/// use recibo::components::*;
///
/// let plain = Text::new("2026-10-15 09:30:00");
/// let order = Text::new("Order: A-1042").bold();
/// ```
pub struct Text {
    content: String,
    bold: bool,
}

impl Text {
    /// Create a new text line.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
        }
    }

    /// Make text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Component for Text {
    fn emit(&self, ops: &mut Vec<Op>) {
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        ops.push(Op::Text(self.content.clone()));
        if self.bold {
            ops.push(Op::SetBold(false));
        }
        ops.push(Op::Newline);
    }
}

/// The centered, bold, double-size brand block at the top of a receipt.
///
/// Prints the brand name and the business line underneath, then drops
/// back to normal size with an empty line.
///
/// ```text
/// ESC a 1, GS ! 11, ESC E 1
/// ONEFAITH LF
/// COFFEE LF
/// GS ! 00, ESC E 0, LF
/// ```
pub struct Banner {
    title: String,
    subtitle: String,
}

impl Banner {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

impl Component for Banner {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::SetAlign(Alignment::Center));
        ops.push(Op::SetDoubleSize(true));
        ops.push(Op::SetBold(true));
        ops.push(Op::Text(self.title.clone()));
        ops.push(Op::Newline);
        ops.push(Op::Text(self.subtitle.clone()));
        ops.push(Op::Newline);
        ops.push(Op::SetDoubleSize(false));
        ops.push(Op::SetBold(false));
        ops.push(Op::Newline);
    }
}

/// An ordered line: the wrapped label, then quantity and line total.
///
/// ```text
/// Latte(Iced)
///   2 x P120.00            P240.00
/// ```
///
/// ## Example
///
/// ```
/// use recibo::components::LineItem;
///
/// let item = LineItem::new("Latte(Iced)", 2, 120.0);
/// ```
pub struct LineItem {
    label: String,
    quantity: u32,
    unit_price: f64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(label: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            label: label.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

impl Component for LineItem {
    fn emit(&self, ops: &mut Vec<Op>) {
        for segment in layout::wrap_text(&self.label, COLUMNS) {
            ops.push(Op::Text(segment));
            ops.push(Op::Newline);
        }

        let detail = format!("  {} x {}", self.quantity, layout::money(self.unit_price));
        let line = layout::pad_line(&detail, &layout::money(self.line_total()), COLUMNS);
        ops.push(Op::Text(line));
        ops.push(Op::Newline);
    }
}

/// A money total: label on the left, amount right-justified.
///
/// ## Example
///
/// ```
/// use recibo::components::Total;
///
/// let total = Total::new(240.0).bold();
/// let subtotal = Total::labeled("Subtotal:", 240.0);
/// let discount = Total::labeled("Discount (Senior):", 48.0).deduction();
/// ```
pub struct Total {
    label: String,
    amount: f64,
    bold: bool,
    deduction: bool,
}

impl Total {
    /// Create a new total with default "TOTAL:" label.
    pub fn new(amount: f64) -> Self {
        Self::labeled("TOTAL:", amount)
    }

    /// Create a total with a custom label.
    pub fn labeled(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            bold: false,
            deduction: false,
        }
    }

    /// Make the total bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Print the amount as a deduction (`-P48.00`).
    pub fn deduction(mut self) -> Self {
        self.deduction = true;
        self
    }
}

impl Component for Total {
    fn emit(&self, ops: &mut Vec<Op>) {
        let amount = if self.deduction {
            format!("-{}", layout::money(self.amount))
        } else {
            layout::money(self.amount)
        };
        let line = layout::pad_line(&self.label, &amount, COLUMNS);

        if self.bold {
            ops.push(Op::SetBold(true));
        }
        ops.push(Op::Text(line));
        if self.bold {
            ops.push(Op::SetBold(false));
        }
        ops.push(Op::Newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    fn ops_of(component: &impl Component) -> Vec<Op> {
        let mut ops = Vec::new();
        component.emit(&mut ops);
        ops
    }

    #[test]
    fn test_text_plain() {
        assert_eq!(
            ops_of(&Text::new("hello")),
            vec![Op::Text("hello".into()), Op::Newline]
        );
    }

    #[test]
    fn test_text_bold_off_before_newline() {
        assert_eq!(
            ops_of(&Text::new("Order: 7").bold()),
            vec![
                Op::SetBold(true),
                Op::Text("Order: 7".into()),
                Op::SetBold(false),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_banner() {
        let ir = Banner::new("ONEFAITH", "CARWASH").compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::Init,
                Op::SetAlign(Alignment::Center),
                Op::SetDoubleSize(true),
                Op::SetBold(true),
                Op::Text("ONEFAITH".into()),
                Op::Newline,
                Op::Text("CARWASH".into()),
                Op::Newline,
                Op::SetDoubleSize(false),
                Op::SetBold(false),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_line_item() {
        let ops = ops_of(&LineItem::new("Latte(Iced)", 2, 120.0));
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], Op::Text("Latte(Iced)".into()));
        let Op::Text(detail) = &ops[2] else {
            panic!("expected text, got {:?}", ops[2]);
        };
        assert_eq!(detail.len(), COLUMNS);
        assert!(detail.starts_with("  2 x P120.00"));
        assert!(detail.ends_with("P240.00"));
    }

    #[test]
    fn test_line_item_wraps_label() {
        let ops = ops_of(&LineItem::new("Premium Interior Detailing Package(SUV)", 1, 1500.0));
        let texts: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts[..2],
            ["Premium Interior Detailing", "Package(SUV)"]
        );
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn test_total_bold() {
        let ops = ops_of(&Total::new(240.0).bold());
        assert_eq!(ops[0], Op::SetBold(true));
        assert_eq!(
            ops[1],
            Op::Text(format!("TOTAL:{}P240.00", " ".repeat(19)))
        );
        assert_eq!(ops[2], Op::SetBold(false));
        assert_eq!(ops[3], Op::Newline);
    }

    #[test]
    fn test_total_deduction() {
        let ops = ops_of(&Total::labeled("Discount (PWD):", 12.5).deduction());
        let Op::Text(line) = &ops[0] else {
            panic!("expected text");
        };
        assert!(line.ends_with(" -P12.50"));
        assert_eq!(line.len(), COLUMNS);
    }
}
