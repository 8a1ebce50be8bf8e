//! # Validation Module
//!
//! Input validation utilities for Karfa.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  Prompt answer (text)                                                  │
//! │       │                                                                 │
//! │       ├── empty?            → ValidationError::Required                │
//! │       │                                                                 │
//! │       ├── parse_integer     → None  → ValidationError::InvalidInteger  │
//! │       │                                                                 │
//! │       └── is_valid_integer  → false → ValidationError::InvalidInteger  │
//! │                                                                         │
//! │  Every numeric input (price, id, quantity) goes through this gate.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use karfa_core::error::Field;
//! use karfa_core::validation::{validate_integer, IntRange};
//!
//! let quantity = validate_integer(Field::Quantity, "3", IntRange::new(1, 99)).unwrap();
//! assert_eq!(quantity, 3);
//!
//! assert!(validate_integer(Field::Quantity, "100", IntRange::new(1, 99)).is_err());
//! ```

use crate::error::{Field, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Integer Range
// =============================================================================

/// Inclusive integer bounds `[min, max]`.
///
/// `max = i64::MAX` stands in for "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    /// Bounds `[min, max]`.
    pub const fn new(min: i64, max: i64) -> Self {
        IntRange { min, max }
    }

    /// Bounds `[min, +inf]`.
    pub const fn at_least(min: i64) -> Self {
        IntRange { min, max: i64::MAX }
    }

    /// Checks an already-integral value.
    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// `[0, +inf]`
impl Default for IntRange {
    fn default() -> Self {
        IntRange::at_least(0)
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Checks whether `value` is a whole number inside `range`.
///
/// ## Rules
/// - NaN and infinities are never valid
/// - Fractional values are never valid
/// - Bounds are inclusive on both ends
///
/// ## Example
/// ```rust
/// use karfa_core::validation::{is_valid_integer, IntRange};
///
/// assert!(is_valid_integer(5.0, IntRange::default()));
/// assert!(!is_valid_integer(2.5, IntRange::default()));
/// assert!(!is_valid_integer(f64::NAN, IntRange::default()));
/// assert!(!is_valid_integer(0.0, IntRange::at_least(1)));
/// ```
pub fn is_valid_integer(value: f64, range: IntRange) -> bool {
    if !value.is_finite() || value.fract() != 0.0 {
        return false;
    }

    // Bounds past 2^53 round when widened to f64.
    (range.min as f64) <= value && value <= (range.max as f64)
}

/// Parses trimmed text as a base-10 integer with an optional sign.
///
/// Anything else (fractions, trailing garbage, empty text) is rejected
/// rather than truncated.
///
/// ## Example
/// ```rust
/// use karfa_core::validation::parse_integer;
///
/// assert_eq!(parse_integer(" 42 "), Some(42));
/// assert_eq!(parse_integer("-7"), Some(-7));
/// assert_eq!(parse_integer("2.5"), None);
/// assert_eq!(parse_integer("12abc"), None);
/// assert_eq!(parse_integer(""), None);
/// ```
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Parses `text` and checks it against `range`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Add to cart                                                            │
/// │                                                                         │
/// │  User enters quantity: "100"                                           │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_integer(Quantity, "100", [1, 99]) ← THIS FUNCTION            │
/// │       │                                                                 │
/// │       ├── not an integer? → InvalidInteger                             │
/// │       ├── outside range?  → InvalidInteger                             │
/// │       └── OK → 100 returned to the caller                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_integer(field: Field, text: &str, range: IntRange) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidInteger {
        field,
        min: range.min,
        max: range.max,
    };

    let value = parse_integer(text).ok_or_else(invalid)?;

    if !range.contains(value) {
        return Err(invalid());
    }

    Ok(value)
}

// =============================================================================
// String Validators
// =============================================================================

/// Requires non-blank text and returns it trimmed.
///
/// ## Example
/// ```rust
/// use karfa_core::error::Field;
/// use karfa_core::validation::require_text;
///
/// assert_eq!(require_text(Field::Name, "  Jón ").unwrap(), "Jón");
/// assert!(require_text(Field::Name, "   ").is_err());
/// ```
pub fn require_text(field: Field, text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(text.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_valid_integer_defaults() {
        let range = IntRange::default();
        assert!(is_valid_integer(0.0, range));
        assert!(is_valid_integer(1e9, range));
        assert!(!is_valid_integer(-1.0, range));
        assert!(!is_valid_integer(0.5, range));
        assert!(!is_valid_integer(f64::NAN, range));
        assert!(!is_valid_integer(f64::INFINITY, range));
    }

    #[test]
    fn test_is_valid_integer_bounds_inclusive() {
        let range = IntRange::new(1, 99);
        assert!(is_valid_integer(1.0, range));
        assert!(is_valid_integer(99.0, range));
        assert!(!is_valid_integer(0.0, range));
        assert!(!is_valid_integer(100.0, range));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer("\t10\n"), Some(10));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("1 2"), None);
        assert_eq!(parse_integer("3.0"), None);
    }

    #[test]
    fn test_validate_integer() {
        let quantity = IntRange::new(1, 99);
        assert_eq!(validate_integer(Field::Quantity, "99", quantity), Ok(99));
        assert_eq!(
            validate_integer(Field::Quantity, "0", quantity),
            Err(ValidationError::InvalidInteger {
                field: Field::Quantity,
                min: 1,
                max: 99,
            })
        );
        assert!(validate_integer(Field::Quantity, "100", quantity).is_err());
        assert!(validate_integer(Field::Quantity, "two", quantity).is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Field::Title, "Húfa"), Ok("Húfa".to_string()));
        assert_eq!(
            require_text(Field::Title, ""),
            Err(ValidationError::Required {
                field: Field::Title
            })
        );
    }

    proptest! {
        /// Property: whole numbers are accepted exactly when inside the range.
        #[test]
        fn whole_numbers_match_range(value in -1_000i64..1_000, min in -500i64..500, span in 0i64..500) {
            let range = IntRange::new(min, min + span);
            prop_assert_eq!(is_valid_integer(value as f64, range), range.contains(value));
        }

        /// Property: any value with a fractional part is rejected.
        #[test]
        fn fractions_are_rejected(whole in -1_000i64..1_000, frac in 0.01f64..0.99) {
            prop_assert!(!is_valid_integer(whole as f64 + frac, IntRange::new(i64::MIN, i64::MAX)));
        }

        /// Property: parsing agrees with the validator on integer text.
        #[test]
        fn parse_then_validate_agrees(value in -200i64..200) {
            let range = IntRange::new(1, 99);
            let parsed = validate_integer(Field::Quantity, &value.to_string(), range);
            prop_assert_eq!(parsed.is_ok(), range.contains(value));
        }
    }
}
