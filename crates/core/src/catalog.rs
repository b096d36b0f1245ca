//! The product catalog.
//!
//! A [`Catalog`] is an ordered, explicit mapping from [`ProductId`] to
//! [`Product`]. It is built once at startup and handed by reference to
//! everything that needs prices, so there is no global product list and no
//! lookup by list position.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{InvalidProductId, Price, ProductId};

/// Errors from building or querying a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The text is not a product id at all.
    #[error(transparent)]
    InvalidId(#[from] InvalidProductId),
    /// The id is well-formed but no product has it.
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),
    /// Two products were given the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    /// A product was given a price below zero.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Renders the catalog listing line, e.g. `ID: 1, Name: Gadget, Price: $15.00`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}",
            self.id,
            self.name,
            self.price.display()
        )
    }
}

/// The fixed list of products offered in a session.
///
/// ```
/// use order_desk_core::{Catalog, ProductId};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.resolve("3").unwrap().name, "Headphone");
/// assert!(catalog.get(ProductId::new(9)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id and
    /// [`CatalogError::NegativePrice`] if a price is below zero.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (i, product) in products.iter().enumerate() {
            if product.price < Price::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if products
                .iter()
                .skip(i + 1)
                .any(|other| other.id == product.id)
            {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The products the desk sells.
    #[must_use]
    pub fn standard() -> Self {
        let product = |id, name: &str, dollars: i64| {
            Product::new(ProductId::new(id), name, Price::from_cents(dollars * 100))
        };
        Self {
            products: vec![
                product(1, "Car floor Mats", 25),
                product(2, "Gadget", 15),
                product(3, "Headphone", 50),
                product(4, "Pillow", 30),
                product(5, "Mobile Cover", 10),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Parse operator input as an id and look the product up.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidId`] for non-numeric input and
    /// [`CatalogError::UnknownProduct`] for an id with no product.
    pub fn resolve(&self, input: &str) -> Result<&Product, CatalogError> {
        let id: ProductId = input.parse()?;
        self.get(id).ok_or(CatalogError::UnknownProduct(id))
    }

    /// Products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
