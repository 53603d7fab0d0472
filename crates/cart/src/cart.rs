use serde::{Deserialize, Serialize};

use storefront_catalog::{Price, Product};
use storefront_core::{Entity, ProductId};

/// Snapshot of a product taken when it was added to the cart.
///
/// Later catalog flag changes do not reach existing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    in_cart: bool,
}

impl CartEntry {
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: *product.id(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price().clone(),
            in_cart: product.in_cart(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// The product's flag at the moment the snapshot was taken.
    pub fn in_cart_at_snapshot(&self) -> bool {
        self.in_cart
    }
}

/// Ordered cart contents, oldest addition first.
///
/// Duplicate ids are representable; nothing here prevents them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Item count shown on the cart badge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn count_of(&self, id: ProductId) -> usize {
        self.entries.iter().filter(|e| e.id == id).count()
    }

    pub fn push(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    /// Remove every entry with `id`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove_all(&mut self, id: ProductId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before - self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
