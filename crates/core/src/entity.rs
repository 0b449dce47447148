//! Entity trait: identity that outlives state changes.

/// Marker + minimal interface for domain entities.
///
/// An entity is the opposite of a value object: its attributes move (an
/// account's balance changes with every transaction applied to it) while
/// its identity stays fixed. Asking whether two entities are "the same"
/// is a question about identity, never about current state.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier the entity keeps across state changes.
    fn id(&self) -> &Self::Id;
}
