//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for receipt printing.
//! The IR is a sequence of opcodes that can be inspected and compiled to
//! ESC/POS bytes.
//!
//! ## Design Philosophy
//!
//! The IR sits between declarative components and raw printer bytes:
//!
//! ```text
//! Components → IR (inspectable) → Codegen → ByteStream
//! ```
//!
//! Each opcode represents a single, atomic operation. Style changes are
//! individual ops (not combined) so the byte output mirrors the op list
//! one-to-one. There is no optimizer: the byte stream must be reproducible
//! exactly from the order that produced it.

use crate::protocol::text::Alignment;

/// Style state shared by the text flags the protocol can toggle.
///
/// The decoder threads one of these through its scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub alignment: Alignment,
    pub bold: bool,
    pub double_size: bool,
}

/// IR opcodes - the "bytecode" for receipt printing.
///
/// Every variant except [`Op::Text`] maps to a fixed 1-3 byte command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Resets to default state.
    Init,

    /// Full paper cut (GS V 0).
    Cut,

    // ========== Style Changes ==========
    /// Set text alignment (ESC a n).
    SetAlign(Alignment),

    /// Enable/disable bold (ESC E n).
    SetBold(bool),

    /// Enable/disable double width + height (GS ! n).
    SetDoubleSize(bool),

    // ========== Content ==========
    /// Raw text (no trailing newline). Printable ASCII only.
    Text(String),

    /// Line feed (newline).
    Newline,
}

/// A compiled IR program.
///
/// Contains a sequence of ops that can be compiled to bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Text of every `Op::Text`, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::Init);
        program.push(Op::SetBold(true));
        program.push(Op::Text("Hello".into()));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn test_program_texts() {
        let program: Program = vec![
            Op::Init,
            Op::Text("a".into()),
            Op::Newline,
            Op::Text("b".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(program.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_style_state_default() {
        let state = StyleState::default();
        assert_eq!(state.alignment, Alignment::Left);
        assert!(!state.bold);
        assert!(!state.double_size);
    }
}
