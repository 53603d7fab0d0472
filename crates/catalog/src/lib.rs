//! Catalog module.
//!
//! Holds the fixed set of purchasable products and their per-product
//! `in_cart` flag, implemented purely as deterministic domain logic
//! (no IO beyond parsing a catalog document handed in by the caller).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Price, Product};
