//! # Layout Components
//!
//! Components for controlling layout and spacing.

use super::Component;
use crate::ir::Op;
use crate::layout::{self, COLUMNS};
use crate::protocol::text::Alignment;

/// Divider style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// Dashed line (default): ------------
    #[default]
    Dashed,
    /// Equals line: ============
    Equals,
}

/// A full-width horizontal divider line.
///
/// ## Example
///
/// ```
/// use recibo::components::{Divider, DividerStyle};
///
/// let dashed = Divider::dashed();
/// let equals = Divider::new(DividerStyle::Equals);
/// ```
pub struct Divider {
    style: DividerStyle,
}

impl Divider {
    /// Create a divider with a specific style.
    pub fn new(style: DividerStyle) -> Self {
        Self { style }
    }

    /// Create a dashed divider.
    pub fn dashed() -> Self {
        Self::new(DividerStyle::Dashed)
    }

    /// Create an equals-sign divider.
    pub fn equals() -> Self {
        Self::new(DividerStyle::Equals)
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::dashed()
    }
}

impl Component for Divider {
    fn emit(&self, ops: &mut Vec<Op>) {
        let line = match self.style {
            DividerStyle::Dashed => "-".repeat(COLUMNS),
            DividerStyle::Equals => "=".repeat(COLUMNS),
        };
        ops.push(Op::Text(line));
        ops.push(Op::Newline);
    }
}

/// A two-column layout (left and right aligned text on same line).
///
/// Built on [`layout::pad_line`], so the right column is always printed
/// in full and the left column gives way.
///
/// ## Example
///
/// ```
/// use recibo::components::Columns;
///
/// let row = Columns::new("Payment:", "GCash");
/// ```
pub struct Columns {
    left: String,
    right: String,
}

impl Columns {
    /// Create a two-column row.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Component for Columns {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Text(layout::pad_line(&self.left, &self.right, COLUMNS)));
        ops.push(Op::Newline);
    }
}

/// One or more empty lines (bare line feeds).
pub struct BlankLine {
    count: usize,
}

impl BlankLine {
    pub fn new() -> Self {
        Self { count: 1 }
    }

    /// `n` consecutive empty lines.
    pub fn lines(n: usize) -> Self {
        Self { count: n }
    }
}

impl Default for BlankLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BlankLine {
    fn emit(&self, ops: &mut Vec<Op>) {
        for _ in 0..self.count {
            ops.push(Op::Newline);
        }
    }
}

/// A bare alignment change that applies to every following line.
pub struct Align(pub Alignment);

impl Align {
    pub fn left() -> Self {
        Self(Alignment::Left)
    }

    pub fn center() -> Self {
        Self(Alignment::Center)
    }
}

impl Component for Align {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::SetAlign(self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_dashed_divider() {
        let ir = Divider::default().compile();
        assert_eq!(ir.ops[1], Op::Text("-".repeat(COLUMNS)));
    }

    #[test]
    fn test_equals_divider_default_width() {
        let ir = Divider::equals().compile();
        assert_eq!(
            ir.ops,
            vec![Op::Init, Op::Text("=".repeat(32)), Op::Newline]
        );
    }

    #[test]
    fn test_columns() {
        let ir = Columns::new("Payment:", "GCash").compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::Init,
                Op::Text(format!("Payment:{}GCash", " ".repeat(19))),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_blank_lines() {
        let ir = BlankLine::lines(2).compile();
        assert_eq!(ir.ops, vec![Op::Init, Op::Newline, Op::Newline]);
        assert_eq!(BlankLine::new().compile().len(), 2);
    }

    #[test]
    fn test_align() {
        let ir = Align::center().compile();
        assert_eq!(ir.ops[1], Op::SetAlign(Alignment::Center));
    }
}
