//! # Text Layout
//!
//! Fixed-width column justification and greedy word wrapping for a
//! 32-column receipt.
//!
//! Both functions are pure and total: empty input is valid input.
//!
//! ```text
//! |Subtotal:                P240.00|   pad_line("Subtotal:", "P240.00")
//! |Premium Interior Detailing      |   wrap_text(..)[0]
//! |Package                         |   wrap_text(..)[1]
//! ```

/// Columns on a 58mm roll in the normal font.
pub const COLUMNS: usize = 32;

/// Lay out `left` at the start and `right` flush against the end of a
/// `width`-column line.
///
/// When both do not fit with at least one space between them, `left` is
/// truncated to `width - right.len() - 1` characters and a single space
/// separates the two. `right` is never truncated, so a `right` of `width`
/// characters or more produces a line longer than `width`.
///
/// ## Example
///
/// ```
/// use recibo::layout::pad_line;
///
/// assert_eq!(pad_line("TOTAL:", "P9.50", 16), "TOTAL:     P9.50");
/// assert_eq!(pad_line("Cappuccino Grande", "P9.50", 16), "Cappuccino P9.50");
/// ```
pub fn pad_line(left: &str, right: &str, width: usize) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();

    if left_len + right_len >= width {
        let keep = width.saturating_sub(right_len + 1);
        let truncated: String = left.chars().take(keep).collect();
        format!("{} {}", truncated, right)
    } else {
        let gap = width - left_len - right_len;
        format!("{}{}{}", left, " ".repeat(gap), right)
    }
}

/// Greedily pack the space-separated words of `text` into lines of at most
/// `width` columns.
///
/// Words are never split: a single word longer than `width` occupies a
/// line of its own and overflows it. Trailing spaces are trimmed from each
/// line and blank lines are not produced.
///
/// ## Example
///
/// ```
/// use recibo::layout::wrap_text;
///
/// assert_eq!(wrap_text("one two three", 8), vec!["one two", "three"]);
/// assert!(wrap_text("", 32).is_empty());
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = current.chars().count() + 1 + word.chars().count();
        if candidate > width {
            push_line(&mut lines, &current);
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    push_line(&mut lines, &current);

    lines
}

/// ASCII stand-in for the peso sign, which the printer cannot render.
pub const CURRENCY: &str = "P";

/// Format an amount as currency with exactly two decimals, e.g. `P120.00`.
///
/// Cents are rounded half away from zero. Negative amounts keep their
/// sign after the currency letter (`P-5.00`); a zero result never prints
/// as `-0.00`.
pub fn money(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY, cents(amount) / 100.0)
}

/// Whole cents of an amount as printed by [`money`], rounded half away
/// from zero. Never returns `-0.0`.
///
/// Use this to decide whether an amount shows on paper: `0.0049` rounds
/// to zero cents and would print as `P0.00`.
pub fn cents(amount: f64) -> f64 {
    let cents = (amount * 100.0).round();
    if cents == 0.0 { 0.0 } else { cents }
}

fn push_line(lines: &mut Vec<String>, line: &str) {
    let trimmed = line.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}
