//! Entity trait: records keyed by a stable identifier.

/// Something looked up by identifier rather than by value.
///
/// Bean bag records are entities: two records with the same id name the same
/// stock-keeping unit even when their quantities differ.
pub trait Entity {
    /// Key type of the collection holding this entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// `true` when both sides carry the same identifier.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
