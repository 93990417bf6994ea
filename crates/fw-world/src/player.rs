//! The player and their weight-capped inventory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default carry capacity.
const DEFAULT_MAX_CARRY_WEIGHT: f64 = 10.0;

/// Weight assumed for items missing from the weight table.
const DEFAULT_ITEM_WEIGHT: f64 = 1.0;

/// The player's state: location, inventory, and carry capacity.
///
/// The inventory holds item ids; weights come from a lookup table seeded by
/// the engine when a game is loaded. The sum of carried weights never
/// exceeds `max_carry_weight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Id of the room the player is in.
    pub current_room_id: String,
    /// Ids of carried items. An id appears at most once.
    inventory: Vec<String>,
    /// Maximum total carry weight.
    pub max_carry_weight: f64,
    /// Per-item weight lookup.
    item_weights: HashMap<String, f64>,
}

impl Player {
    /// Create a player at the given room with the default capacity.
    pub fn new(starting_room_id: impl Into<String>) -> Self {
        Self::with_capacity(starting_room_id, DEFAULT_MAX_CARRY_WEIGHT)
    }

    /// Create a player with an explicit carry capacity.
    pub fn with_capacity(starting_room_id: impl Into<String>, max_carry_weight: f64) -> Self {
        Self {
            current_room_id: starting_room_id.into(),
            inventory: Vec::new(),
            max_carry_weight,
            item_weights: HashMap::new(),
        }
    }

    /// Total weight currently carried.
    pub fn current_weight(&self) -> f64 {
        self.inventory
            .iter()
            .map(|id| self.item_weight(id))
            .sum()
    }

    /// Whether picking up the given item would stay within capacity.
    pub fn can_carry(&self, item_id: &str) -> bool {
        self.current_weight() + self.item_weight(item_id) <= self.max_carry_weight
    }

    /// Add an item to the inventory.
    ///
    /// Returns `false` for duplicates and when the weight limit would be
    /// exceeded.
    pub fn add_item(&mut self, item_id: impl Into<String>) -> bool {
        let item_id = item_id.into();
        if self.inventory.contains(&item_id) || !self.can_carry(&item_id) {
            return false;
        }
        self.inventory.push(item_id);
        true
    }

    /// Remove an item from the inventory. Returns `false` for non-members.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|id| id == item_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether the player carries the given item.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// Ids of carried items.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Record an item's weight in the lookup table.
    pub fn set_item_weight(&mut self, item_id: impl Into<String>, weight: f64) {
        self.item_weights.insert(item_id.into(), weight);
    }

    /// Look up an item's weight, defaulting for unknown ids.
    pub fn item_weight(&self, item_id: &str) -> f64 {
        self.item_weights
            .get(item_id)
            .copied()
            .unwrap_or(DEFAULT_ITEM_WEIGHT)
    }

    /// Move the player to another room.
    pub fn move_to_room(&mut self, room_id: impl Into<String>) {
        self.current_room_id = room_id.into();
    }

    /// Drop everything.
    pub fn clear_inventory(&mut self) {
        self.inventory.clear();
    }

    /// Describe the carried items.
    ///
    /// `display_name` resolves an item id to its display name; unresolved
    /// ids fall back to the id itself.
    pub fn inventory_description<F>(&self, display_name: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.inventory.is_empty() {
            return "You are not carrying anything.".to_string();
        }

        let names: Vec<String> = self
            .inventory
            .iter()
            .map(|id| display_name(id).unwrap_or_else(|| id.clone()))
            .collect();

        format!(
            "You are carrying: {} ({:.1}/{:.1} weight)",
            names.join(", "),
            self.current_weight(),
            self.max_carry_weight
        )
    }
}
