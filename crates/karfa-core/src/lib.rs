//! # karfa-core: Pure Business Logic for Karfa
//!
//! This crate is the **heart** of Karfa, a console web-shop cart. It holds
//! the catalog, the cart and every shop operation with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Karfa Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    karfa-cli (console)                          │   │
//! │  │    menu loop ──► stdin Input / stdout+stderr Output             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Session<I, O>                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ karfa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │   shop    │  │  format   │  │ validation│  │   │
//! │  │   │  prompts  │─►│  catalog  │─►│  lines    │  │  ranges   │  │   │
//! │  │   │  output   │  │  cart     │  │  receipt  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO FILES • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Cart)
//! - [`money`] - Money type and currency rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Integer-range and required-text checks
//! - [`format`] - Product lines, cart summary, receipt
//! - [`catalog`] - Append-only product list
//! - [`shop`] - Catalog + cart operations
//! - [`session`] - Operations driven through `Input` / `Output`
//!
//! ## Example Usage
//!
//! ```rust
//! use karfa_core::Shop;
//!
//! let mut shop = Shop::default();
//! shop.add_to_cart("2", "3").unwrap();
//! shop.add_to_cart("2", "1").unwrap();
//!
//! assert_eq!(shop.cart().lines().len(), 1);
//! assert_eq!(
//!     shop.show_cart(),
//!     "CSS sokkar — 4x3.000 kr. samtals 12.000 kr.\nSamtals: 12.000 kr."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod session;
pub mod shop;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, SeedError};
pub use error::{CoreError, CoreResult, Field, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use session::{Input, Output, Session};
pub use shop::Shop;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a single add-to-cart accepts.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Largest quantity a single add-to-cart accepts.
///
/// Applies to each addition, not to the merged line: adding 99 twice
/// leaves a line of 198.
pub const MAX_ITEM_QUANTITY: i64 = 99;
