//! # ESC/POS Control Commands
//!
//! Printer control commands for 58mm ESC/POS thermal printers.
//!
//! ## Protocol Overview
//!
//! The printer consumes a flat byte stream in which control sequences are
//! interleaved with raw printable ASCII. Every control sequence begins with
//! one of three reserved bytes:
//!
//! | Byte | Name | Role |
//! |------|------|------|
//! | 0x1B | ESC  | Prefix for init, alignment and emphasis |
//! | 0x1D | GS   | Prefix for character size and cutter |
//! | 0x0A | LF   | Print line buffer and advance one line |
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Three bytes: `ESC a n`, `ESC E n`, `GS ! n`, `GS V n`
//!
//! Text bytes are restricted to printable ASCII (`0x20..=0x7E`), so a
//! reserved prefix can never appear inside text.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Selects initialize, alignment and bold commands.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Selects character size and paper cut commands.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by one line.
pub const LF: u8 = 0x0A;

/// Second byte of `ESC @` (initialize).
pub const SEL_INIT: u8 = b'@';

/// Second byte of `ESC a n` (alignment).
pub const SEL_ALIGN: u8 = b'a';

/// Second byte of `ESC E n` (emphasis).
pub const SEL_BOLD: u8 = b'E';

/// Second byte of `GS ! n` (character size).
pub const SEL_SIZE: u8 = b'!';

/// Second byte of `GS V n` (cutter).
pub const SEL_CUT: u8 = b'V';

/// Lowest printable ASCII byte accepted as text.
pub const PRINTABLE_MIN: u8 = 0x20;

/// Highest printable ASCII byte accepted as text.
pub const PRINTABLE_MAX: u8 = 0x7E;

/// True if `byte` may appear as a text byte in a receipt stream.
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    byte >= PRINTABLE_MIN && byte <= PRINTABLE_MAX
}

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Emitted once at the
/// start of every receipt.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::init(), [0x1B, 0x40]);
/// ```
#[inline]
pub const fn init() -> [u8; 2] {
    [ESC, SEL_INIT]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut (GS V 0)
///
/// Cuts the paper completely at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
/// | Decimal | 29 86 0  |
///
/// The cutter sits a few lines above the print head, so receipts feed
/// blank lines before cutting.
#[inline]
pub const fn cut() -> [u8; 3] {
    [GS, SEL_CUT, 0]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Line Feed (LF)
///
/// Prints the line buffer and advances one line. An LF with an empty
/// buffer prints a blank line.
#[inline]
pub const fn line_feed() -> [u8; 1] {
    [LF]
}

// ============================================================================
// TESTS
// ============================================================================
