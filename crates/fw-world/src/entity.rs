//! The examine/interact surface shared by every entity type.

/// A lightweight view of another entity used as an interaction target.
///
/// Entities never hold references to each other; when an interaction needs a
/// target (using a key on a door, giving an item to a character), the engine
/// passes this borrowed view instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef<'a> {
    /// The target's unique id.
    pub id: &'a str,
    /// The target's display name.
    pub name: &'a str,
}

/// Behavior common to all world entities.
pub trait GameEntity {
    /// The entity's unique id.
    fn id(&self) -> &str;

    /// The entity's display name.
    fn name(&self) -> &str;

    /// Long-form description, extended per entity type (contained items,
    /// carried items, exits).
    fn examine(&self) -> String;

    /// Dispatch a string-named action against this entity.
    ///
    /// Unrecognized actions produce a "can't do that" message rather than
    /// an error.
    fn interact(&mut self, action: &str, target: Option<&EntityRef<'_>>) -> String;
}
