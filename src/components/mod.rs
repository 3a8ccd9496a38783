//! # Declarative Components
//!
//! React-like components for building receipts declaratively.
//!
//! ## Design Philosophy
//!
//! Instead of imperative commands, you describe *what* you want:
//!
//! ```
//! use recibo::components::*;
//!
//! let receipt = Receipt::new()
//!     .child(Banner::new("ONEFAITH", "COFFEE"))
//!     .child(Divider::equals())
//!     .child(Align::left())
//!     .child(LineItem::new("Espresso", 1, 90.0))
//!     .child(Total::new(90.0).bold())
//!     .cut();
//!
//! // Compile to IR (inspectable)
//! let ir = receipt.compile();
//! assert!(ir.len() > 10);
//!
//! // Generate bytes
//! let bytes = receipt.build();
//! assert!(!bytes.is_empty());
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits IR ops.
//! Components can be nested (containers hold children).

mod layout;
mod receipt;
mod text;

pub use layout::*;
pub use receipt::*;
pub use text::*;

use crate::ir::{Op, Program};
use crate::protocol::stream::ByteStream;

/// Trait for declarative components.
///
/// Components emit IR ops when compiled. This is the core abstraction
/// that enables the declarative receipt building pattern.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    ///
    /// The program starts with an Init op, followed by the component's ops.
    fn compile(&self) -> Program {
        let mut program = Program::new();
        program.push(Op::Init);
        self.emit(&mut program.ops);
        program
    }

    /// Compile and generate bytes.
    fn build(&self) -> ByteStream {
        self.compile().to_stream()
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}
