//! # Shop Context
//!
//! Owns the catalog and the cart and implements every shop operation as a
//! plain method returning a `Result`.
//!
//! ## Operation Gates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product   title? ─► description? ─► price ≥ 1 ─► append           │
//! │                                                                         │
//! │  add_to_cart   id ∈ [1, len] ─► lookup ─► qty ∈ [1, 99] ─► merge/push  │
//! │                                                                         │
//! │  checkout      lines? ─► name? ─► address? ─► record buyer ─► receipt  │
//! │                                                                         │
//! │  Any failed gate returns Err before state is touched.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, Field};
use crate::format::{
    format_cart_summary, format_catalog_line, format_receipt, EMPTY_CART_MESSAGE,
};
use crate::money::{CurrencyFormat, Money};
use crate::types::{Cart, CartAddition, CartTotals, Product, ProductId};
use crate::validation::{require_text, validate_integer, IntRange};
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

/// Catalog, cart and display settings for one shopping session.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    currency: CurrencyFormat,
}

impl Shop {
    /// Creates a shop over `catalog` with an empty cart.
    pub fn new(catalog: Catalog, currency: CurrencyFormat) -> Self {
        Shop {
            catalog,
            cart: Cart::new(),
            currency,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Adds a product to the catalog.
    ///
    /// ## Rules
    /// - title and description must be non-blank
    /// - price must be an integer ≥ 1
    ///
    /// Returns the created product; displaying it is up to the caller.
    pub fn add_product(
        &mut self,
        title: &str,
        description: &str,
        price_text: &str,
    ) -> CoreResult<Product> {
        let title = require_text(Field::Title, title)?;
        let description = require_text(Field::Description, description)?;
        require_text(Field::Price, price_text)?;
        let price = validate_integer(Field::Price, price_text, IntRange::at_least(1))?;

        let product = self
            .catalog
            .append(title, description, Money::from_kronur(price))
            .clone();

        info!(product_id = product.id, price, "Product added to catalog");
        Ok(product)
    }

    /// One display line per catalog product, in id order.
    pub fn list_products(&self) -> Vec<String> {
        self.catalog
            .products()
            .iter()
            .map(|p| format_catalog_line(&self.currency, p))
            .collect()
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Resolves product id text against the catalog.
    ///
    /// Fails with `InvalidInteger(ProductId)` unless the id is in
    /// `[1, catalog.len()]`.
    pub fn select_product(&self, id_text: &str) -> CoreResult<&Product> {
        let max = self.catalog.len() as i64;
        let id = validate_integer(Field::ProductId, id_text, IntRange::new(1, max))?;
        let id = id as ProductId;

        self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Adds `quantity_text` units of product `id_text` to the cart.
    ///
    /// ## Behavior
    /// - id must be in `[1, catalog.len()]`
    /// - quantity must be in `[1, 99]`
    /// - a product already in the cart has its quantity increased
    /// - a line or cart total that would not fit is rejected with
    ///   `AmountTooLarge`, leaving the cart unchanged
    pub fn add_to_cart(&mut self, id_text: &str, quantity_text: &str) -> CoreResult<CartAddition> {
        let product = self.select_product(id_text)?.clone();
        let quantity = validate_integer(
            Field::Quantity,
            quantity_text,
            IntRange::new(MIN_ITEM_QUANTITY, MAX_ITEM_QUANTITY),
        )?;

        let addition = self.cart.add(&product, quantity)?;

        debug!(
            product_id = product.id,
            quantity,
            line_quantity = addition.line().quantity(),
            merged = addition.is_merged(),
            "Cart updated"
        );
        Ok(addition)
    }

    /// Cart summary, or the empty-cart sentinel.
    pub fn show_cart(&self) -> String {
        if self.cart.is_empty() {
            return EMPTY_CART_MESSAGE.to_string();
        }

        format_cart_summary(&self.currency, &self.cart)
    }

    /// Records buyer details and returns the receipt.
    ///
    /// ## Rules
    /// - the cart must have at least one line
    /// - name and address must be non-blank
    ///
    /// On error the cart is untouched. The cart is not cleared afterwards.
    pub fn checkout(&mut self, name: &str, address: &str) -> CoreResult<String> {
        self.ensure_cart_not_empty()?;
        let name = require_text(Field::Name, name)?;
        let address = require_text(Field::Address, address)?;

        let receipt = format_receipt(&self.currency, &self.cart, &name, &address);
        let checked_out_at = self.cart.set_buyer(name, address);
        let cart_age = checked_out_at - self.cart.created_at;

        let totals = self.totals();
        info!(
            %checked_out_at,
            cart_age_secs = cart_age.num_seconds(),
            lines = totals.line_count,
            quantity = totals.total_quantity,
            total = totals.total.kronur(),
            "Order placed"
        );
        Ok(receipt)
    }

    /// Fails with `EmptyCart` when there is nothing to check out.
    pub fn ensure_cart_not_empty(&self) -> CoreResult<()> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        Ok(())
    }
}

impl Default for Shop {
    /// Default catalog, ISK formatting.
    fn default() -> Self {
        Shop::new(Catalog::with_default_products(), CurrencyFormat::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn invalid(field: Field, min: i64, max: i64) -> CoreError {
        CoreError::Validation(ValidationError::InvalidInteger { field, min, max })
    }

    fn required(field: Field) -> CoreError {
        CoreError::Validation(ValidationError::Required { field })
    }

    #[test]
    fn test_add_product() {
        let mut shop = Shop::default();

        let product = shop.add_product("Bolur", "Svartur bolur", "4500").unwrap();

        assert_eq!(product.id, 4);
        assert_eq!(product.price.kronur(), 4_500);
        assert_eq!(shop.catalog().len(), 4);
    }

    #[test]
    fn test_add_product_validation() {
        let mut shop = Shop::default();

        assert_eq!(
            shop.add_product("", "Lýsing", "100"),
            Err(required(Field::Title))
        );
        assert_eq!(
            shop.add_product("Bolur", "  ", "100"),
            Err(required(Field::Description))
        );
        assert_eq!(
            shop.add_product("Bolur", "Lýsing", ""),
            Err(required(Field::Price))
        );
        assert_eq!(
            shop.add_product("Bolur", "Lýsing", "0"),
            Err(invalid(Field::Price, 1, i64::MAX))
        );
        assert_eq!(
            shop.add_product("Bolur", "Lýsing", "ókeypis"),
            Err(invalid(Field::Price, 1, i64::MAX))
        );

        // Nothing was appended
        assert_eq!(shop.catalog().len(), 3);
    }

    #[test]
    fn test_list_products() {
        let shop = Shop::default();
        let lines = shop.list_products();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#1 HTML húfa — "));
        assert!(lines[2].ends_with("— 20.000 kr."));
    }

    #[test]
    fn test_add_to_cart_merges_same_product() {
        let mut shop = Shop::default();

        let first = shop.add_to_cart("2", "3").unwrap();
        assert!(!first.is_merged());

        let second = shop.add_to_cart("2", "1").unwrap();
        assert!(second.is_merged());

        let lines = shop.cart().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product().title, "CSS sokkar");
        assert_eq!(lines[0].quantity(), 4);
        assert_eq!(shop.cart().total().kronur(), 3_000 * 4);
        assert!(shop.show_cart().ends_with("Samtals: 12.000 kr."));
    }

    #[test]
    fn test_add_to_cart_rejects_bad_ids() {
        let mut shop = Shop::default();

        for id in ["0", "4", "-1", "abc", "1.5", ""] {
            assert_eq!(
                shop.add_to_cart(id, "1"),
                Err(invalid(Field::ProductId, 1, 3)),
                "id {id:?} should be rejected"
            );
        }
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_quantity_bounds() {
        let mut shop = Shop::default();

        assert_eq!(
            shop.add_to_cart("1", "0"),
            Err(invalid(Field::Quantity, 1, 99))
        );
        assert_eq!(
            shop.add_to_cart("1", "100"),
            Err(invalid(Field::Quantity, 1, 99))
        );
        assert!(shop.cart().is_empty());

        let added = shop.add_to_cart("1", "99").unwrap();
        assert_eq!(added.line().quantity(), 99);
    }

    #[test]
    fn test_add_to_cart_on_empty_catalog() {
        let mut shop = Shop::new(Catalog::new(), CurrencyFormat::isk());
        assert_eq!(
            shop.add_to_cart("1", "1"),
            Err(invalid(Field::ProductId, 1, 0))
        );
    }

    #[test]
    fn test_add_to_cart_rejects_total_that_does_not_fit() {
        let mut shop = Shop::default();
        let max_price = i64::MAX.to_string();
        shop.add_product("Dýrt", "Mjög dýrt", &max_price).unwrap();

        assert_eq!(shop.add_to_cart("4", "2"), Err(CoreError::AmountTooLarge));
        assert!(shop.cart().is_empty());

        shop.add_to_cart("4", "1").unwrap();
        assert_eq!(shop.add_to_cart("1", "1"), Err(CoreError::AmountTooLarge));
        assert_eq!(shop.cart().line_count(), 1);
        assert_eq!(shop.cart().total().kronur(), i64::MAX);
        assert!(shop
            .show_cart()
            .starts_with("Dýrt — 1x9.223.372.036.854.775.807 kr. samtals 9.223.372.036.854.775.807 kr."));
    }

    #[test]
    fn test_show_empty_cart() {
        let shop = Shop::default();
        assert_eq!(shop.show_cart(), "Karfan er tóm.");
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut shop = Shop::default();
        assert_eq!(shop.checkout("Jón", "Laugavegur 1"), Err(CoreError::EmptyCart));
        assert!(shop.cart().name.is_none());
    }

    #[test]
    fn test_checkout_missing_fields_do_not_mutate() {
        let mut shop = Shop::default();
        shop.add_to_cart("3", "1").unwrap();

        assert_eq!(
            shop.checkout("", "Laugavegur 1"),
            Err(required(Field::Name))
        );
        assert_eq!(shop.checkout("Jón", " "), Err(required(Field::Address)));

        assert!(shop.cart().name.is_none());
        assert!(shop.cart().address.is_none());
    }

    #[test]
    fn test_checkout_receipt() {
        let mut shop = Shop::default();
        shop.add_to_cart("1", "1").unwrap();
        shop.add_to_cart("2", "2").unwrap();

        let receipt = shop.checkout("Jón", "Laugavegur 1").unwrap();

        assert_eq!(
            receipt,
            "Pöntun móttekin Jón.\nVörur verða sendar á Laugavegur 1.\n\n\
             HTML húfa — 1x5.000 kr. samtals 5.000 kr.\n\
             CSS sokkar — 2x3.000 kr. samtals 6.000 kr.\n\
             Samtals: 11.000 kr."
        );
        assert_eq!(shop.cart().name.as_deref(), Some("Jón"));
        assert_eq!(shop.cart().address.as_deref(), Some("Laugavegur 1"));
        // Cart is kept after checkout
        assert_eq!(shop.cart().line_count(), 2);
        let checked_out_at = shop.cart().checked_out_at.unwrap();
        assert!(checked_out_at >= shop.cart().created_at);
    }
}
