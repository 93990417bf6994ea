//! Serde definition structs for world JSON.
//!
//! Field names follow the camelCase authoring format. Optional fields have
//! defaults so minimal definitions stay terse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fw_world::{Dialogue, Exit, ItemEffect, ItemKind};

/// Metadata about a game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    /// Game title.
    #[serde(default)]
    pub title: String,
    /// Author name.
    #[serde(default)]
    pub author: String,
    /// Content version string.
    #[serde(default)]
    pub version: String,
    /// Introductory description shown when a game starts.
    #[serde(default)]
    pub description: String,
    /// Id of the room the player starts in.
    #[serde(default)]
    pub starting_room_id: String,
}

/// Definition of a single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDefinition {
    /// Display name.
    pub name: String,
    /// Description shown on revisits.
    pub short_description: String,
    /// Description shown on first visit.
    pub long_description: String,
    /// Exits in presentation order.
    #[serde(default)]
    pub exits: Vec<Exit>,
    /// Ids of items initially present.
    #[serde(default)]
    pub items: Vec<String>,
    /// Ids of NPCs initially present.
    #[serde(default)]
    pub npcs: Vec<String>,
}

/// Definition of a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base description.
    pub description: String,
    /// Carry weight.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Item kind.
    #[serde(default, rename = "type")]
    pub kind: ItemKind,
    /// Whether this item holds other items.
    #[serde(default)]
    pub is_container: bool,
    /// Whether `use` does anything.
    #[serde(default)]
    pub is_usable: bool,
    /// Text for a targetless use.
    #[serde(default)]
    pub use_description: Option<String>,
    /// Whether the item can be picked up. Defaults to true.
    #[serde(default = "default_true")]
    pub can_take: bool,
    /// Custom take message.
    #[serde(default)]
    pub on_take_message: Option<String>,
    /// Custom drop message.
    #[serde(default)]
    pub on_drop_message: Option<String>,
    /// Typed effects.
    #[serde(default)]
    pub effects: Vec<ItemEffect>,
}

/// Definition of a single NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcDefinition {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Long description shown on examine.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Whether the NPC starts alive. Defaults to true.
    #[serde(default = "default_true")]
    pub is_alive: bool,
    /// Ids of items initially carried.
    #[serde(default)]
    pub starting_inventory: Vec<String>,
    /// Dialogue nodes in definition order.
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,
    /// Fallback line when no dialogue applies.
    #[serde(default)]
    pub default_response: Option<String>,
}

/// A complete author-supplied world definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    /// Game metadata.
    pub metadata: GameMetadata,
    /// Rooms by id.
    #[serde(default)]
    pub rooms: HashMap<String, RoomDefinition>,
    /// Items by id.
    #[serde(default)]
    pub items: HashMap<String, ItemDefinition>,
    /// NPCs by id.
    #[serde(default)]
    pub npcs: HashMap<String, NpcDefinition>,
}

fn default_weight() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_item_definition_deserializes() {
        let json = r#"{ "id": "rock", "name": "grey rock", "description": "A rock." }"#;
        let def: ItemDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.weight, 1.0);
        assert_eq!(def.kind, ItemKind::Regular);
        assert!(def.can_take);
        assert!(def.effects.is_empty());
    }

    #[test]
    fn camel_case_fields_roundtrip() {
        let json = r#"{
            "id": "key",
            "name": "brass key",
            "description": "A small brass key.",
            "weight": 0.1,
            "type": "key",
            "isUsable": true,
            "canTake": true,
            "onTakeMessage": "You pick up the brass key.",
            "useDescription": "This key might unlock something.",
            "effects": [{ "kind": "unlocks", "target": "door" }]
        }"#;
        let def: ItemDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.kind, ItemKind::Key);
        assert_eq!(def.on_take_message.as_deref(), Some("You pick up the brass key."));
        assert_eq!(
            def.effects,
            vec![ItemEffect::Unlocks { target: "door".to_string() }]
        );

        let back = serde_json::to_string(&def).unwrap();
        assert!(back.contains("onTakeMessage"));
        let again: ItemDefinition = serde_json::from_str(&back).unwrap();
        assert_eq!(def, again);
    }

    #[test]
    fn npc_dialogues_in_order() {
        let json = r#"{
            "id": "guard",
            "name": "guard",
            "description": "A guard.",
            "dialogues": [
                { "id": "greeting", "response": "Halt!", "nextDialogueId": "explain" },
                { "id": "explain", "response": "Carry on." }
            ]
        }"#;
        let def: NpcDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.dialogues.len(), 2);
        assert_eq!(def.dialogues[0].id, "greeting");
        assert_eq!(def.dialogues[0].next_dialogue_id.as_deref(), Some("explain"));
        assert_eq!(def.dialogues[1].next_dialogue_id, None);
        assert!(def.is_alive);
    }
}
