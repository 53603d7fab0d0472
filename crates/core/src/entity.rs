//! Entity trait: things the storefront tracks by identity.

/// Something that stays "the same thing" while its state changes.
///
/// A catalog product is an entity: its `in_cart` flag flips, its
/// `ProductId` never does, and lookups go by that id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
