//! Monetary amounts as typed into the form.

use std::fmt;

use super::RenderError;

/// A whole, non-negative dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(u64);

impl Amount {
    /// Wraps a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses form text into an amount.
    ///
    /// Surrounding whitespace is ignored. Anything other than ASCII digits
    /// (signs, separators, decimals) is rejected, as is empty text.
    pub fn parse(raw: &str) -> Result<Self, RenderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RenderError::InvalidAmount(raw.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| RenderError::InvalidAmount(raw.to_string()))
    }

    /// Returns the raw value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Formats with `,` thousands separators, e.g. `1,000,000`.
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grouped())
    }
}
