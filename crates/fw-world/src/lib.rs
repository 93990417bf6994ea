//! Entity model for the Fablewood interactive fiction engine.
//!
//! Provides the passive data holders the engine operates on (rooms, items,
//! non-player characters, and the player) together with their small
//! per-entity behaviors: examine/interact dispatch, container operations,
//! the per-NPC dialogue state machine, and weight-capped inventories.

/// The examine/interact surface shared by every entity type.
pub mod entity;
/// Items, typed item effects, and use-with strategies.
pub mod item;
/// Non-player characters and their dialogue state machine.
pub mod npc;
/// The player and their weight-capped inventory.
pub mod player;
/// Rooms, exits, and presence lists.
pub mod room;

pub use entity::{EntityRef, GameEntity};
pub use item::{Item, ItemEffect, ItemKind};
pub use npc::{Dialogue, DialogueCondition, Npc};
pub use player::Player;
pub use room::{Exit, Room};
