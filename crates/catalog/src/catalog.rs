use std::collections::HashSet;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Price, Product};

/// The session's product catalog.
///
/// Products keep their seed order (the order they are rendered in). Lookups
/// are linear: catalogs are small and fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in seed catalog. Every product starts outside the cart.
    pub fn seed() -> Self {
        let products = vec![
            Product::new(
                ProductId::new(1),
                "SAMSUNG LED TV",
                "Samsung 80 cm (32 inches) HD Ready Smart LED TV UA32T4380AKXXL (Glossy Black)",
                Price::new("300$"),
            ),
            Product::new(
                ProductId::new(2),
                "LG LED TV",
                "LG 108 cm (43 inches) 4K Ultra HD Smart LED TV 43UR7500PSC (Dark Iron Gray)",
                Price::new("500$"),
            ),
            Product::new(
                ProductId::new(3),
                "SONY LED TV",
                "Sony Bravia 139 cm (55 inches) 4K Ultra HD Smart LED Google TV KD-55X74K (Black)",
                Price::new("560$"),
            ),
        ];
        Self { products }
    }

    /// Build a catalog from caller-supplied products.
    ///
    /// Ids must be unique and names non-blank. Flags are taken as given.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id()
                )));
            }
            if !seen.insert(*product.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products (`id`, `name`, `description`, `price`,
    /// optional `inCart`).
    pub fn from_json(document: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(document)
            .map_err(|e| DomainError::validation(format!("catalog document: {e}")))?;
        Self::from_products(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    /// New catalog where the product `id` has `in_cart = flag`.
    ///
    /// Unknown ids are a silent no-op: the returned catalog equals `self`.
    pub fn set_in_cart(&self, id: ProductId, flag: bool) -> Self {
        let products = self
            .products
            .iter()
            .map(|p| if *p.id() == id { p.with_in_cart(flag) } else { p.clone() })
            .collect();
        Self { products }
    }

    /// In-place form of [`Catalog::set_in_cart`]. Returns whether `id` matched.
    pub fn set_in_cart_mut(&mut self, id: ProductId, flag: bool) -> bool {
        let mut matched = false;
        for product in self.products.iter_mut().filter(|p| *p.id() == id) {
            product.set_in_cart(flag);
            matched = true;
        }
        matched
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
