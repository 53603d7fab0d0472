use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, ValueObject};

/// Display-formatted price (e.g. `"300$"`).
///
/// Never parsed as a number: the storefront has no totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable product.
///
/// Everything except `in_cart` is fixed for the session; `in_cart` mirrors
/// cart membership and only drives which button a product card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    #[serde(default)]
    in_cart: bool,
}

impl Product {
    /// A product that is not in the cart.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            in_cart: false,
        }
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

    pub fn in_cart(&self) -> bool {
        self.in_cart
    }

    /// Copy of this product with the flag set to `in_cart`.
    pub fn with_in_cart(&self, in_cart: bool) -> Self {
        Self {
            in_cart,
            ..self.clone()
        }
    }

    pub(crate) fn set_in_cart(&mut self, in_cart: bool) {
        self.in_cart = in_cart;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_starts_outside_the_cart() {
        let p = Product::new(ProductId::new(7), "TV", "A television", Price::new("10$"));
        assert!(!p.in_cart());
        assert_eq!(p.price().to_string(), "10$");
    }

    #[test]
    fn with_in_cart_leaves_the_original_untouched() {
        let p = Product::new(ProductId::new(7), "TV", "A television", Price::new("10$"));
        let flagged = p.with_in_cart(true);

        assert!(flagged.in_cart());
        assert!(!p.in_cart());
        assert_eq!(flagged.id(), p.id());
        assert_eq!(flagged.name(), p.name());
    }

    #[test]
    fn missing_in_cart_field_deserializes_as_false() {
        let json = r#"{"id": 3, "name": "SONY LED TV", "description": "Bravia", "price": "560$"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(*p.id(), ProductId::new(3));
        assert!(!p.in_cart());
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let p = Product::new(ProductId::new(1), "A", "B", Price::new("1$")).with_in_cart(true);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["inCart"], serde_json::Value::Bool(true));
        assert_eq!(value["price"], serde_json::Value::String("1$".to_string()));
    }
}
