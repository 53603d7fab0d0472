//! Cart module.
//!
//! The storefront state container (catalog + cart + visibility) and the three
//! cart operations, implemented as a pure aggregate: commands are decided
//! into events, events are applied to state. No IO, no rendering.

pub mod cart;
pub mod storefront;
pub mod visibility;

pub use cart::{Cart, CartEntry};
pub use storefront::{
    CartCommand, CartEvent, CartVisibilityToggled, ProductAdded, ProductRemoved, Storefront,
    reduce,
};
pub use visibility::CartVisibility;
