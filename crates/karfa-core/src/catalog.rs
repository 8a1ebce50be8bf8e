//! # Product Catalog
//!
//! Ordered, append-only list of products.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products: [ #1 HTML húfa, #2 CSS sokkar, #3 JavaScript jakki ]        │
//! │                                                                         │
//! │  append("Bolur", ...) ──► id = len + 1 = 4                             │
//! │                                                                         │
//! │  Products are never removed, so ids stay 1..=len with no gaps and      │
//! │  `get(id)` is an index lookup.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog can also be seeded from JSON:
//! ```json
//! [
//!   { "id": 1, "title": "HTML húfa", "description": "...", "price": 5000 }
//! ]
//! ```

use thiserror::Error;

use crate::error::{Field, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// Errors raised while loading a seed catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed is not valid JSON for a list of products.
    #[error("Catalog seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ids must run 1, 2, 3, ... in file order.
    #[error("Catalog seed product at position {position} has id {found}, expected {expected}")]
    IdOutOfOrder {
        position: usize,
        expected: ProductId,
        found: ProductId,
    },

    /// A product breaks a catalog invariant.
    #[error("Catalog seed product #{id} is invalid: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: ValidationError,
    },
}

/// The full list of purchasable products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// The three products the shop opens with.
    pub fn with_default_products() -> Self {
        let mut catalog = Catalog::new();
        catalog.append(
            "HTML húfa".to_string(),
            "Húfa sem heldur hausnum heitum og hvíslar hugsanlega að þér hvaða element væri best að nota.".to_string(),
            Money::from_kronur(5_000),
        );
        catalog.append(
            "CSS sokkar".to_string(),
            "Sokkar sem skalast vel með hvaða fótum sem er.".to_string(),
            Money::from_kronur(3_000),
        );
        catalog.append(
            "JavaScript jakki".to_string(),
            "Mjög töff jakki fyrir öll sem skrifa JavaScript reglulega.".to_string(),
            Money::from_kronur(20_000),
        );
        catalog
    }

    /// Parses and checks a JSON seed catalog.
    ///
    /// ## Rules
    /// - ids run 1..=n in file order
    /// - title and description are non-blank
    /// - price is positive
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        for (position, product) in products.iter().enumerate() {
            let expected = (position + 1) as ProductId;
            if product.id != expected {
                return Err(SeedError::IdOutOfOrder {
                    position,
                    expected,
                    found: product.id,
                });
            }
            check_seed_product(product).map_err(|source| SeedError::InvalidProduct {
                id: product.id,
                source,
            })?;
        }

        Ok(Catalog { products })
    }

    /// Appends a product and returns it with its assigned id.
    ///
    /// The caller validates the fields first.
    pub fn append(&mut self, title: String, description: String, price: Money) -> &Product {
        let id = self.next_id();
        self.products.push(Product {
            id,
            title,
            description,
            price,
        });
        &self.products[self.products.len() - 1]
    }

    /// Id the next appended product will get.
    pub fn next_id(&self) -> ProductId {
        (self.products.len() + 1) as ProductId
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        let index = id.checked_sub(1)? as usize;
        self.products.get(index)
    }

    /// Products in id order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn check_seed_product(product: &Product) -> Result<(), ValidationError> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: Field::Title,
        });
    }
    if product.description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: Field::Description,
        });
    }
    if !product.price.is_positive() {
        return Err(ValidationError::InvalidInteger {
            field: Field::Price,
            min: 1,
            max: i64::MAX,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products() {
        let catalog = Catalog::with_default_products();
        assert_eq!(catalog.len(), 3);

        let socks = catalog.get(2).expect("product 2");
        assert_eq!(socks.title, "CSS sokkar");
        assert_eq!(socks.price.kronur(), 3_000);

        let ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_assigns_next_id() {
        let mut catalog = Catalog::with_default_products();
        assert_eq!(catalog.next_id(), 4);

        let product = catalog.append(
            "Bolur".to_string(),
            "Bolur með merki".to_string(),
            Money::from_kronur(4_500),
        );
        assert_eq!(product.id, 4);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(4).map(|p| p.title.as_str()), Some("Bolur"));
        assert!(catalog.get(5).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.next_id(), 1);
        assert!(catalog.get(1).is_none());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": 1, "title": "Bolli", "description": "Kaffibolli", "price": 2500 },
            { "id": 2, "title": "Penni", "description": "Blár penni", "price": 300 }
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().price.kronur(), 300);
    }

    #[test]
    fn test_from_json_rejects_gaps() {
        let json = r#"[
            { "id": 1, "title": "Bolli", "description": "Kaffibolli", "price": 2500 },
            { "id": 3, "title": "Penni", "description": "Blár penni", "price": 300 }
        ]"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SeedError::IdOutOfOrder {
                position: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_products() {
        let free = r#"[{ "id": 1, "title": "Bolli", "description": "Kaffibolli", "price": 0 }]"#;
        assert!(matches!(
            Catalog::from_json(free),
            Err(SeedError::InvalidProduct { id: 1, .. })
        ));

        let untitled = r#"[{ "id": 1, "title": " ", "description": "Kaffibolli", "price": 10 }]"#;
        assert!(matches!(
            Catalog::from_json(untitled),
            Err(SeedError::InvalidProduct { id: 1, .. })
        ));

        assert!(matches!(
            Catalog::from_json("not json"),
            Err(SeedError::Parse(_))
        ));
    }
}
