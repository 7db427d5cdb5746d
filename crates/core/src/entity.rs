//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Accounts keep their identity across renames and appends; operations keep
/// theirs forever (they are never mutated).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
