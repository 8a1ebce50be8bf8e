//! # Display Formatting
//!
//! Renders products, carts and receipts as shopper-facing text.
//!
//! ```text
//! HTML húfa — 5.000 kr.                               format_product_line(p, None)
//! CSS sokkar — 2x3.000 kr. samtals 6.000 kr.          format_product_line(p, Some(2))
//! #1 HTML húfa — Húfa sem ... — 5.000 kr.             format_catalog_line(p)
//! Samtals: 11.000 kr.                                 last line of format_cart_summary
//! ```
//!
//! All functions are pure; amounts go through the given [`CurrencyFormat`].

use crate::money::{CurrencyFormat, Money};
use crate::types::{Cart, CartLine, Product};
use crate::validation::{is_valid_integer, IntRange};

/// Text shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Karfan er tóm.";

/// Renders one product, optionally with a quantity and line total.
///
/// A quantity that is absent, zero or negative renders the plain
/// `"<title> — <price>"` form, as does one whose total does not fit.
pub fn format_product_line(
    currency: &CurrencyFormat,
    product: &Product,
    quantity: Option<i64>,
) -> String {
    let price = currency.format(product.price);

    let quantity = quantity.filter(|&qty| is_valid_integer(qty as f64, IntRange::at_least(1)));
    match quantity.and_then(|qty| Some((qty, product.line_total(qty)?))) {
        Some((qty, total)) => quantity_line(currency, product, qty, &price, total),
        None => format!("{} — {}", product.title, price),
    }
}

/// Renders a cart line with its stored total.
pub fn format_cart_line(currency: &CurrencyFormat, line: &CartLine) -> String {
    let product = line.product();
    let price = currency.format(product.price);
    quantity_line(currency, product, line.quantity(), &price, line.total())
}

fn quantity_line(
    currency: &CurrencyFormat,
    product: &Product,
    quantity: i64,
    price: &str,
    total: Money,
) -> String {
    format!(
        "{} — {}x{} samtals {}",
        product.title,
        quantity,
        price,
        currency.format(total)
    )
}

/// Renders a catalog entry: `"#<id> <title> — <description> — <price>"`.
pub fn format_catalog_line(currency: &CurrencyFormat, product: &Product) -> String {
    format!(
        "#{} {} — {} — {}",
        product.id,
        product.title,
        product.description,
        currency.format(product.price)
    )
}

/// Renders every cart line followed by the cart total.
pub fn format_cart_summary(currency: &CurrencyFormat, cart: &Cart) -> String {
    let mut output = String::new();

    for line in cart.lines() {
        output.push_str(&format_cart_line(currency, line));
        output.push('\n');
    }

    output.push_str("Samtals: ");
    output.push_str(&currency.format(cart.total()));
    output
}

/// Renders the order confirmation shown after checkout.
pub fn format_receipt(currency: &CurrencyFormat, cart: &Cart, name: &str, address: &str) -> String {
    format!(
        "Pöntun móttekin {name}.\nVörur verða sendar á {address}.\n\n{}",
        format_cart_summary(currency, cart)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socks() -> Product {
        Product {
            id: 2,
            title: "CSS sokkar".to_string(),
            description: "Sokkar sem skalast vel með hvaða fótum sem er.".to_string(),
            price: Money::from_kronur(3_000),
        }
    }

    fn hat() -> Product {
        Product {
            id: 1,
            title: "HTML húfa".to_string(),
            description: "Húfa".to_string(),
            price: Money::from_kronur(5_000),
        }
    }

    #[test]
    fn test_product_line_without_quantity() {
        let isk = CurrencyFormat::isk();
        assert_eq!(
            format_product_line(&isk, &hat(), None),
            "HTML húfa — 5.000 kr."
        );
    }

    #[test]
    fn test_product_line_with_quantity() {
        let isk = CurrencyFormat::isk();
        assert_eq!(
            format_product_line(&isk, &socks(), Some(2)),
            "CSS sokkar — 2x3.000 kr. samtals 6.000 kr."
        );
    }

    #[test]
    fn test_non_positive_quantity_falls_back() {
        let isk = CurrencyFormat::isk();
        let plain = format_product_line(&isk, &socks(), None);
        assert_eq!(format_product_line(&isk, &socks(), Some(0)), plain);
        assert_eq!(format_product_line(&isk, &socks(), Some(-3)), plain);
    }

    #[test]
    fn test_product_line_total_too_large_falls_back() {
        let isk = CurrencyFormat::isk();
        let pricey = Product {
            price: Money::from_kronur(i64::MAX),
            ..socks()
        };
        assert_eq!(
            format_product_line(&isk, &pricey, Some(2)),
            "CSS sokkar — 9.223.372.036.854.775.807 kr."
        );
    }

    #[test]
    fn test_cart_line_uses_stored_total() {
        let isk = CurrencyFormat::isk();
        let mut cart = Cart::new();
        let line = cart.add(&socks(), 4).unwrap();

        assert_eq!(
            format_cart_line(&isk, line.line()),
            "CSS sokkar — 4x3.000 kr. samtals 12.000 kr."
        );
    }

    #[test]
    fn test_catalog_line() {
        let isk = CurrencyFormat::isk();
        assert_eq!(
            format_catalog_line(&isk, &socks()),
            "#2 CSS sokkar — Sokkar sem skalast vel með hvaða fótum sem er. — 3.000 kr."
        );
    }

    #[test]
    fn test_cart_summary() {
        let isk = CurrencyFormat::isk();
        let mut cart = Cart::new();
        cart.add(&hat(), 1).unwrap();
        cart.add(&socks(), 2).unwrap();

        assert_eq!(
            format_cart_summary(&isk, &cart),
            "HTML húfa — 1x5.000 kr. samtals 5.000 kr.\n\
             CSS sokkar — 2x3.000 kr. samtals 6.000 kr.\n\
             Samtals: 11.000 kr."
        );
    }

    #[test]
    fn test_empty_cart_summary_is_total_only() {
        let isk = CurrencyFormat::isk();
        assert_eq!(format_cart_summary(&isk, &Cart::new()), "Samtals: 0 kr.");
    }

    #[test]
    fn test_receipt() {
        let isk = CurrencyFormat::isk();
        let mut cart = Cart::new();
        cart.add(&socks(), 1).unwrap();

        let receipt = format_receipt(&isk, &cart, "Jón", "Laugavegur 1");
        assert_eq!(
            receipt,
            "Pöntun móttekin Jón.\nVörur verða sendar á Laugavegur 1.\n\n\
             CSS sokkar — 1x3.000 kr. samtals 3.000 kr.\nSamtals: 3.000 kr."
        );
    }
}
