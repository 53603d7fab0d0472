//! Plain-text rendering of the storefront page.
//!
//! Layout, top to bottom: navbar with the cart badge, the shopping cart panel
//! (only while shown), then one card per catalog product.

use core::fmt;

use storefront_cart::{Cart, Storefront};
use storefront_catalog::Product;
use storefront_core::Entity;

pub const STORE_TITLE: &str = "Online Store";
pub const CART_ICON: &str = "🛒";

/// Borrowing view over a storefront state; `Display` draws the page.
#[derive(Debug, Clone, Copy)]
pub struct StorefrontView<'a> {
    state: &'a Storefront,
}

impl<'a> StorefrontView<'a> {
    pub fn new(state: &'a Storefront) -> Self {
        Self { state }
    }
}

/// Render the whole page.
pub fn render(state: &Storefront) -> String {
    StorefrontView::new(state).to_string()
}

impl fmt::Display for StorefrontView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cart = self.state.cart();

        writeln!(f, "{STORE_TITLE} | Cart {CART_ICON} {}", cart.len())?;
        writeln!(f, "{}", "=".repeat(40))?;

        if self.state.visibility().is_shown() {
            write_cart_panel(f, cart)?;
        }

        for product in self.state.catalog() {
            write_product_card(f, product)?;
        }

        Ok(())
    }
}

fn write_cart_panel(f: &mut fmt::Formatter<'_>, cart: &Cart) -> fmt::Result {
    writeln!(f, "Shopping Cart")?;

    // The icon only carries a count once something is in the cart.
    if cart.is_empty() {
        writeln!(f, "{CART_ICON}")?;
    } else {
        writeln!(f, "{CART_ICON} {}", cart.len())?;
    }

    for entry in cart {
        writeln!(f, "  - {} - [Remove #{}]", entry.name(), entry.product_id())?;
    }
    writeln!(f, "{}", "-".repeat(40))
}

fn write_product_card(f: &mut fmt::Formatter<'_>, product: &Product) -> fmt::Result {
    let marker = if product.in_cart() { "*" } else { " " };
    writeln!(f, "{marker}#{} {}", product.id(), product.name())?;
    writeln!(f, "   {}", product.description())?;
    writeln!(f, "   {}", product.price())?;

    if product.in_cart() {
        writeln!(f, "   [Remove from Cart]")
    } else {
        writeln!(f, "   [Add to Cart]")
    }
}
