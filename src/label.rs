//! Label validation.
//!
//! Tesseract routinely emits stray punctuation or mis-segmented digits for a
//! printed number, so a garbled label is a normal outcome here, not an error.
//! A label is accepted only if the whole trimmed text parses as a decimal
//! integer inside the board's value range.

use std::fmt;

/// Smallest value printed on the board.
pub const LABEL_MIN: i32 = 1;
/// Largest value printed on the board. Not derived from the grid size;
/// 16×16 = 256 cells, but values run up to 512.
pub const LABEL_MAX: i32 = 512;

/// Outcome of validating one sub-label's raw OCR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Number(i32),
    Unknown,
}

impl Label {
    /// Validates raw OCR text for one sub-label.
    ///
    /// The trimmed text must be consumed entirely by the integer parse
    /// (`"12x"` is rejected, not truncated to 12) and the value must lie in
    /// `[LABEL_MIN, LABEL_MAX]`. Anything else is `Unknown`.
    pub fn parse(raw: &str) -> Label {
        let text = raw.trim();

        // str::parse accepts a leading '+', but the board never prints one;
        // a '+' can only be engine noise.
        if text.starts_with('+') {
            return Label::Unknown;
        }

        match text.parse::<i32>() {
            Ok(n) if (LABEL_MIN..=LABEL_MAX).contains(&n) => Label::Number(n),
            _ => Label::Unknown,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Unknown => write!(f, "?"),
        }
    }
}
