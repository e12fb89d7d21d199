//! Entity trait: objects identified by an id rather than by their values.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same entity, whatever their other
/// fields say. The catalog relies on this: a product is addressed, stored
/// and deleted purely by its `ProductId`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
