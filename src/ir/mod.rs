//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for receipt printing. The IR is a
//! "bytecode" representation that sits between declarative components
//! and the raw ESC/POS byte stream.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ Components  │ ──► │     IR      │ ──► │   Codegen    │
//! │(declarative)│     │  (Vec<Op>)  │     │ (ByteStream) │
//! └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use recibo::ir::{Op, Program};
//! use recibo::protocol::text::Alignment;
//!
//! let mut program = Program::new();
//! program.push(Op::Init);
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("HELLO".into()));
//! program.push(Op::Newline);
//! program.push(Op::Cut);
//!
//! let bytes = program.to_bytes();
//! assert_eq!(bytes.len(), 2 + 3 + 3 + 5 + 1 + 3);
//! ```

mod codegen;
mod ops;

pub use ops::*;
