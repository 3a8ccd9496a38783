//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes.

use super::ops::{Op, Program};
use crate::protocol::stream::ByteStream;

impl Program {
    /// Compile the IR program into a [`ByteStream`].
    pub fn to_stream(&self) -> ByteStream {
        let mut out = ByteStream::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => {
                    out.init();
                }
                Op::Cut => {
                    out.cut();
                }

                // ===== Style Changes =====
                Op::SetAlign(align) => {
                    out.align(*align);
                }
                Op::SetBold(enabled) => {
                    out.bold(*enabled);
                }
                Op::SetDoubleSize(enabled) => {
                    out.double_size(*enabled);
                }

                // ===== Content =====
                Op::Text(s) => {
                    out.text(s);
                }
                Op::Newline => {
                    out.line_feed();
                }
            }
        }

        out
    }

    /// Compile the IR program to raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_stream().into_bytes()
    }
}
