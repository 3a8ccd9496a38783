//! # ESC/POS Text Styling Commands
//!
//! Text formatting commands understood by 58mm receipt printers.
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right justification |
//! | Bold | ESC E n | **Emphasized** text |
//! | Double size | GS ! n | 2x width and 2x height |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS, SEL_ALIGN, SEL_BOLD, SEL_SIZE};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Map the parameter byte of `ESC a n` back to an alignment.
    ///
    /// `1` is center, `2` is right, anything else falls back to left.
    pub fn from_param(n: u8) -> Self {
        match n {
            1 => Alignment::Center,
            2 => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Affects all subsequent text until changed
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), [0x1B, 0x61, 0x01]);
/// ```
pub const fn align(alignment: Alignment) -> [u8; 3] {
    [ESC, SEL_ALIGN, alignment as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Set Emphasis (ESC E n)
///
/// `n = 1` turns bold on, `n = 0` turns it off.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 45 n |
pub const fn bold(enabled: bool) -> [u8; 3] {
    [ESC, SEL_BOLD, enabled as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Parameter of `GS ! n` for 2x width and 2x height.
pub const DOUBLE_SIZE: u8 = 0x11;

/// # Select Character Size (GS ! n)
///
/// Only the two sizes the receipt uses are exposed: normal (`n = 0x00`)
/// and double width plus double height (`n = 0x11`).
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 21 n |
///
/// A double-size character occupies two columns, so a 32-column line
/// holds 16 double-size characters.
pub const fn double_size(enabled: bool) -> [u8; 3] {
    [GS, SEL_SIZE, if enabled { DOUBLE_SIZE } else { 0x00 }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), [0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), [0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), [0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_alignment_from_param() {
        assert_eq!(Alignment::from_param(0), Alignment::Left);
        assert_eq!(Alignment::from_param(1), Alignment::Center);
        assert_eq!(Alignment::from_param(2), Alignment::Right);
        assert_eq!(Alignment::from_param(0x31), Alignment::Left);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold(true), [0x1B, 0x45, 0x01]);
        assert_eq!(bold(false), [0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_double_size() {
        assert_eq!(double_size(true), [0x1D, 0x21, 0x11]);
        assert_eq!(double_size(false), [0x1D, 0x21, 0x00]);
    }

    #[test]
    fn test_alignment_serde() {
        assert_eq!(
            serde_json::to_string(&Alignment::Center).unwrap(),
            "\"center\""
        );
    }
}
