//! The built-in sample game.
//!
//! Two rooms, a brass key, and a guard with a short dialogue. Used by the
//! test suites and by `fw play --sample`.

use std::collections::HashMap;

use fw_world::{Dialogue, Exit, ItemKind};

use crate::definition::{
    GameDefinition, GameMetadata, ItemDefinition, NpcDefinition, RoomDefinition,
};

/// Build the sample game definition.
pub fn sample_game() -> GameDefinition {
    let mut rooms = HashMap::new();
    rooms.insert(
        "start".to_string(),
        RoomDefinition {
            name: "Starting Room".to_string(),
            short_description: "A simple room.".to_string(),
            long_description: "You are in a simple room with white walls and a single door."
                .to_string(),
            exits: vec![Exit::new("north", "north_room")],
            items: vec!["key".to_string()],
            npcs: Vec::new(),
        },
    );
    rooms.insert(
        "north_room".to_string(),
        RoomDefinition {
            name: "Northern Room".to_string(),
            short_description: "Northern room.".to_string(),
            long_description: "This northern room is slightly larger than the previous one."
                .to_string(),
            exits: vec![Exit::new("south", "start")],
            items: Vec::new(),
            npcs: vec!["guard".to_string()],
        },
    );

    let mut items = HashMap::new();
    items.insert(
        "key".to_string(),
        ItemDefinition {
            id: "key".to_string(),
            name: "brass key".to_string(),
            description: "A small brass key that looks important.".to_string(),
            weight: 0.1,
            kind: ItemKind::Key,
            is_container: false,
            is_usable: true,
            use_description: Some("This key might unlock something.".to_string()),
            can_take: true,
            on_take_message: Some("You pick up the brass key.".to_string()),
            on_drop_message: None,
            effects: Vec::new(),
        },
    );

    let mut npcs = HashMap::new();
    npcs.insert(
        "guard".to_string(),
        NpcDefinition {
            id: "guard".to_string(),
            name: "guard".to_string(),
            description: "A stern-looking guard.".to_string(),
            long_description: Some("A tall guard in armor, watching you carefully.".to_string()),
            is_alive: true,
            starting_inventory: Vec::new(),
            dialogues: vec![
                Dialogue::new("greeting", "Halt! What are you doing here?").with_next("explain"),
                Dialogue::new("explain", "I see. Well, be careful around here."),
            ],
            default_response: Some("The guard nods at you.".to_string()),
        },
    );

    GameDefinition {
        metadata: GameMetadata {
            title: "Sample Game".to_string(),
            author: "Test Author".to_string(),
            version: "1.0.0".to_string(),
            description: "A simple test game".to_string(),
            starting_room_id: "start".to_string(),
        },
        rooms,
        items,
        npcs,
    }
}
