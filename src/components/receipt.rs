//! # Receipt Component
//!
//! The root container for building receipts.

use super::Component;
use crate::ir::Op;

/// Receipt is the root container component.
///
/// It holds child components and optionally adds a cut at the end.
///
/// ## Example
///
/// ```
/// use recibo::components::*;
///
/// let receipt = Receipt::new()
///     .child(Banner::new("ONEFAITH", "COFFEE"))
///     .child(Divider::dashed())
///     .child(LineItem::new("Americano", 1, 95.0))
///     .child(Total::new(95.0))
///     .cut();
///
/// let bytes = receipt.build();
/// assert_eq!(bytes.as_bytes()[..2], [0x1B, 0x40]);
/// ```
pub struct Receipt {
    children: Vec<Box<dyn Component>>,
    auto_cut: bool,
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            auto_cut: false,
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add a child only when `component` is `Some`.
    pub fn child_opt<C: Component + 'static>(self, component: Option<C>) -> Self {
        match component {
            Some(c) => self.child(c),
            None => self,
        }
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }

    /// Enable a full cut at the end.
    pub fn cut(mut self) -> Self {
        self.auto_cut = true;
        self
    }
}

impl Component for Receipt {
    fn emit(&self, ops: &mut Vec<Op>) {
        // Emit all children
        for child in &self.children {
            child.emit(ops);
        }

        if self.auto_cut {
            ops.push(Op::Cut);
        }
    }
}
