//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A catalog product keeps its identity while its stock moves up and down.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
