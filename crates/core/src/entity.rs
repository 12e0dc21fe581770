//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Child entities of an aggregate only need to be unique within their root,
/// so `Id` may be a value object rather than a global identifier.
pub trait Entity {
    /// Identifier, unique at least within the owning aggregate.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
