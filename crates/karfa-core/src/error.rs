//! # Error Types
//!
//! Domain-specific error types for karfa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  karfa-core errors (this file)                                         │
//! │  ├── CoreError        - Shop operation failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  karfa-cli errors (app crate)                                          │
//! │  └── CliError         - Config / terminal failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Output::error (fixed message)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `Display` of every variant is the message shown to the shopper
//! 3. Errors are enum variants, never String
//! 4. No error crosses a session operation boundary

use std::fmt;

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Field
// =============================================================================

/// The piece of user input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Price,
    ProductId,
    Quantity,
    Name,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Price => "price",
            Field::ProductId => "product_id",
            Field::Quantity => "quantity",
            Field::Name => "name",
            Field::Address => "address",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Shop operation errors.
///
/// These errors represent business rule violations. The session layer
/// reports them on the error channel and aborts the operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// Only if the catalog and the id bound disagree. `add_to_cart` checks
    /// the id against the catalog length first, so this is not expected.
    #[error("Vara fannst ekki.")]
    ProductNotFound(ProductId),

    /// Checkout attempted with no lines in the cart.
    #[error("Karfan er tóm.")]
    EmptyCart,

    /// The line or cart total would not fit in an amount.
    ///
    /// The addition is rejected and the cart keeps its previous state.
    #[error("Upphæð körfu yrði of há, vöru ekki bætt við.")]
    AmountTooLarge,

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// `Required` covers empty input (missing title, name, address, ...).
/// `InvalidInteger` covers text that is not a whole number or falls outside
/// the accepted range (bad id, quantity or price).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{}", required_message(.field))]
    Required { field: Field },

    /// Value is not an integer within `[min, max]`.
    #[error("{}", invalid_integer_message(.field, .min, .max))]
    InvalidInteger { field: Field, min: i64, max: i64 },
}

impl ValidationError {
    /// Returns the field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field } => *field,
            ValidationError::InvalidInteger { field, .. } => *field,
        }
    }
}

fn required_message(field: &Field) -> String {
    match field {
        Field::Title => "Titill má ekki vera tómur.".to_string(),
        Field::Description => "Lýsing má ekki vera tóm.".to_string(),
        Field::Price => "Verð má ekki vera tómt.".to_string(),
        Field::ProductId => "Auðkenni vöru má ekki vera tómt.".to_string(),
        Field::Quantity => "Fjöldi má ekki vera tómur.".to_string(),
        Field::Name => "Nafn má ekki vera tómt.".to_string(),
        Field::Address => "Heimilisfang má ekki vera tómt.".to_string(),
    }
}

fn invalid_integer_message(field: &Field, min: &i64, max: &i64) -> String {
    match field {
        Field::Price => "Verð verður að vera jákvæð heiltala.".to_string(),
        Field::ProductId => {
            "Auðkenni vöru er ekki löglegt, verður að vera heiltala stærri en 0.".to_string()
        }
        Field::Quantity => format!("Fjöldi er ekki löglegur, lágmark {min} og hámark {max}."),
        other => format!("{other} verður að vera heiltala á bilinu {min} til {max}."),
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
