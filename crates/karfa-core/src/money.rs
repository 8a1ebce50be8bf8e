//! # Money Module
//!
//! Provides the `Money` type and the `CurrencyFormat` renderer.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ISK HAS NO MINOR UNIT                                                  │
//! │                                                                         │
//! │  Prices are whole krónur: 5.000 kr., 20.000 kr.                         │
//! │  Line totals are price × quantity, cart totals are sums of lines.      │
//! │  Everything stays in i64, nothing is ever rounded.                      │
//! │                                                                         │
//! │  Rendering (grouping, suffix) happens only at the edge, through        │
//! │  CurrencyFormat.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use karfa_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_kronur(3_000);
//! let line_total = price.checked_mul(4).unwrap();
//!
//! let isk = CurrencyFormat::default();
//! assert_eq!(isk.format(line_total), "12.000 kr.");
//! ```

use serde::Deserialize;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole krónur.
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the parsed price text, so no conversion step
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked arithmetic only**: An amount that does not fit is an error,
///   never a clamped or wrapped number
/// - **`#[serde(transparent)]`**: Seed files store prices as plain numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole krónur.
    #[inline]
    pub const fn from_kronur(kronur: i64) -> Self {
        Money(kronur)
    }

    /// Returns the amount in whole krónur.
    #[inline]
    pub const fn kronur(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity, or `None` if the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use karfa_core::money::Money;
    ///
    /// let unit_price = Money::from_kronur(5_000);
    /// assert_eq!(unit_price.checked_mul(3), Some(Money::from_kronur(15_000)));
    /// assert_eq!(Money::from_kronur(i64::MAX).checked_mul(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }

    /// Subtracts `other`, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) => Some(Money(value)),
            None => None,
        }
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Renders amounts as shopper-facing currency text.
///
/// The default is Icelandic krónur: thousands grouped with `.` and a
/// ` kr.` suffix. Hosts may configure another separator or suffix; the
/// rendering is not validated against any locale database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Thousands separator. `None` disables grouping.
    pub group_separator: Option<char>,

    /// Text placed after the number (including any leading space).
    pub suffix: String,
}

impl CurrencyFormat {
    /// Icelandic krónur: `123.000 kr.`
    pub fn isk() -> Self {
        CurrencyFormat {
            group_separator: Some('.'),
            suffix: " kr.".to_string(),
        }
    }

    /// Formats an amount.
    ///
    /// ## Example
    /// ```rust
    /// use karfa_core::money::{CurrencyFormat, Money};
    ///
    /// let isk = CurrencyFormat::isk();
    /// assert_eq!(isk.format(Money::from_kronur(123_000)), "123.000 kr.");
    /// assert_eq!(isk.format(Money::from_kronur(999)), "999 kr.");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let value = amount.kronur();
        let digits = value.unsigned_abs().to_string();
        let grouped = match self.group_separator {
            Some(sep) => group_digits(&digits, sep),
            None => digits,
        };
        let sign = if value < 0 { "-" } else { "" };
        format!("{sign}{grouped}{}", self.suffix)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::isk()
    }
}

/// Inserts `sep` between every group of three digits, counting from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
