//! # Domain Types
//!
//! Core domain types used throughout Karfa.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (1, 2, ..)  │◄──│  product        │◄──│  lines          │       │
//! │  │  title          │   │  quantity       │   │  total          │       │
//! │  │  description    │   │  total          │   │  name?          │       │
//! │  │  price          │   └─────────────────┘   │  address?       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once created, so a cart line keeps its own copy.
//!
//! ## Totals
//! Line and cart totals are computed with checked arithmetic when the cart
//! changes and stored. An addition whose totals would not fit in an `i64`
//! is rejected with [`CoreError::AmountTooLarge`], so every stored total is
//! exactly `Σ price × quantity`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Catalog-assigned product identifier, starting at 1.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Position in the catalog, 1-based.
    pub id: ProductId,

    /// Display name, never empty.
    pub title: String,

    /// Longer description, never empty.
    pub description: String,

    /// Unit price in whole krónur, always positive.
    pub price: Money,
}

impl Product {
    /// Price of `quantity` units, or `None` if it does not fit.
    #[inline]
    pub fn line_total(&self, quantity: i64) -> Option<Money> {
        self.price.checked_mul(quantity)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product-and-quantity pairing within a cart.
///
/// Only [`Cart::add`] creates lines, so `total` always equals
/// `product.price × quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: i64,
    total: Money,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always >= 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total (unit price × quantity).
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Cart Addition
// =============================================================================

/// What `add_to_cart` did with the requested product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAddition {
    /// A new line was appended.
    Added(CartLine),
    /// The product was already in the cart; its quantity grew.
    Merged(CartLine),
}

impl CartAddition {
    /// The resulting line, whether new or merged.
    pub fn line(&self) -> &CartLine {
        match self {
            CartAddition::Added(line) | CartAddition::Merged(line) => line,
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, CartAddition::Merged(_))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges)
/// - Lines keep insertion order
/// - `total` is the exact sum of the line totals
/// - `name` and `address` are only set by a successful checkout
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Money,

    /// Buyer name, set at checkout.
    pub name: Option<String>,

    /// Shipping address, set at checkout.
    pub address: Option<String>,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,

    /// When checkout last succeeded.
    pub checked_out_at: Option<DateTime<Utc>>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            total: Money::zero(),
            name: None,
            address: None,
            created_at: Utc::now(),
            checked_out_at: None,
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for `product_id`, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity (merge policy)
    /// - If product not in cart: appends a new line
    /// - If the new line total or cart total would not fit: `AmountTooLarge`,
    ///   and the cart is unchanged
    ///
    /// The caller validates `quantity` before calling.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<CartAddition> {
        let position = self.lines.iter().position(|l| l.product.id == product.id);

        let (old_quantity, old_total) = match position {
            Some(i) => (self.lines[i].quantity, self.lines[i].total),
            None => (0, Money::zero()),
        };

        let new_quantity = old_quantity
            .checked_add(quantity)
            .ok_or(CoreError::AmountTooLarge)?;
        let line_total = product
            .line_total(new_quantity)
            .ok_or(CoreError::AmountTooLarge)?;
        let cart_total = self
            .total
            .checked_sub(old_total)
            .and_then(|rest| rest.checked_add(line_total))
            .ok_or(CoreError::AmountTooLarge)?;

        self.total = cart_total;

        match position {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = new_quantity;
                line.total = line_total;
                Ok(CartAddition::Merged(line.clone()))
            }
            None => {
                let line = CartLine {
                    product: product.clone(),
                    quantity: new_quantity,
                    total: line_total,
                };
                self.lines.push(line.clone());
                Ok(CartAddition::Added(line))
            }
        }
    }

    /// Records the buyer details and returns the checkout time.
    pub fn set_buyer(&mut self, name: String, address: String) -> DateTime<Utc> {
        let now = Utc::now();
        self.name = Some(name);
        self.address = Some(address);
        self.checked_out_at = Some(now);
        now
    }

    /// Returns the number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    ///
    /// Cannot overflow: every price is at least 1, so the quantity sum is
    /// bounded by the cart total.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
