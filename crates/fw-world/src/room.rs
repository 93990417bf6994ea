//! Rooms, exits, and presence lists.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityRef, GameEntity};

/// A directed, possibly-locked connection from one room to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    /// Direction word ("north", "up", ...).
    pub direction: String,
    /// Id of the destination room.
    pub room_id: String,
    /// Whether the exit is currently locked.
    #[serde(default)]
    pub is_locked: bool,
    /// Message shown when movement is blocked by the lock.
    #[serde(default)]
    pub lock_description: Option<String>,
}

impl Exit {
    /// Create an unlocked exit.
    pub fn new(direction: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            room_id: room_id.into(),
            is_locked: false,
            lock_description: None,
        }
    }

    /// Lock the exit with a block message.
    pub fn locked(mut self, description: impl Into<String>) -> Self {
        self.is_locked = true;
        self.lock_description = Some(description.into());
        self
    }
}

/// A location in the world.
///
/// Rooms hold presence lists of item and NPC ids; an id appears in at most
/// one room's list at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description shown on revisits.
    pub short_description: String,
    /// Description shown on first visit or explicit request.
    pub long_description: String,
    /// Exits in definition order.
    pub exits: Vec<Exit>,
    /// Ids of items present.
    item_ids: Vec<String>,
    /// Ids of NPCs present.
    npc_ids: Vec<String>,
    /// Whether the player has ever been here.
    pub visited: bool,
}

impl Room {
    /// Create a room with the given descriptions.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_description: short_description.into(),
            long_description: long_description.into(),
            exits: Vec::new(),
            item_ids: Vec::new(),
            npc_ids: Vec::new(),
            visited: false,
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    /// Seed the items present.
    pub fn with_items(mut self, item_ids: Vec<String>) -> Self {
        self.item_ids = item_ids;
        self
    }

    /// Seed the NPCs present.
    pub fn with_npcs(mut self, npc_ids: Vec<String>) -> Self {
        self.npc_ids = npc_ids;
        self
    }

    /// Render the room description.
    ///
    /// The long form is used on first visit or when explicitly requested;
    /// otherwise the short form. Present items, present NPCs, and exit
    /// directions follow, each section omitted when empty.
    pub fn description(&self, long: bool) -> String {
        let mut result = if long || !self.visited {
            self.long_description.clone()
        } else {
            self.short_description.clone()
        };

        if !self.item_ids.is_empty() {
            result.push_str(&format!("\n\nYou can see: {}", self.item_ids.join(", ")));
        }

        if !self.npc_ids.is_empty() {
            result.push_str(&format!("\n\nPresent: {}", self.npc_ids.join(", ")));
        }

        if !self.exits.is_empty() {
            let directions: Vec<&str> = self.exits.iter().map(|e| e.direction.as_str()).collect();
            result.push_str(&format!("\n\nExits: {}", directions.join(", ")));
        }

        result
    }

    /// Whether an exit exists in the given direction (case-insensitive).
    pub fn has_exit(&self, direction: &str) -> bool {
        self.exit(direction).is_some()
    }

    /// Look up the exit in the given direction (case-insensitive).
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits
            .iter()
            .find(|e| e.direction.eq_ignore_ascii_case(direction))
    }

    /// Ids of items present.
    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    /// Ids of NPCs present.
    pub fn npc_ids(&self) -> &[String] {
        &self.npc_ids
    }

    /// Add an item id to the presence list. Duplicates are ignored.
    pub fn add_item(&mut self, item_id: impl Into<String>) {
        let item_id = item_id.into();
        if !self.item_ids.contains(&item_id) {
            self.item_ids.push(item_id);
        }
    }

    /// Remove an item id from the presence list. Non-members are ignored.
    pub fn remove_item(&mut self, item_id: &str) {
        self.item_ids.retain(|id| id != item_id);
    }

    /// Add an NPC id to the presence list. Duplicates are ignored.
    pub fn add_npc(&mut self, npc_id: impl Into<String>) {
        let npc_id = npc_id.into();
        if !self.npc_ids.contains(&npc_id) {
            self.npc_ids.push(npc_id);
        }
    }

    /// Remove an NPC id from the presence list. Non-members are ignored.
    pub fn remove_npc(&mut self, npc_id: &str) {
        self.npc_ids.retain(|id| id != npc_id);
    }

    /// Mark the room as visited.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}

impl GameEntity for Room {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn examine(&self) -> String {
        self.description(true)
    }

    fn interact(&mut self, action: &str, _target: Option<&EntityRef<'_>>) -> String {
        match action.to_lowercase().as_str() {
            "examine" | "look" => self.examine(),
            other => format!("You can't {other} the {}.", self.name),
        }
    }
}
