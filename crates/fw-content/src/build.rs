//! Entity construction from definitions.
//!
//! Assumes the definition has already passed [`crate::validate`]; builders
//! fill defaults but do not re-check references.

use fw_world::{Item, Npc, Room};

use crate::definition::{ItemDefinition, NpcDefinition, RoomDefinition};

/// Build a room from its definition.
pub fn build_room(room_id: &str, def: &RoomDefinition) -> Room {
    let mut room = Room::new(
        room_id,
        &def.name,
        &def.short_description,
        &def.long_description,
    )
    .with_items(def.items.clone())
    .with_npcs(def.npcs.clone());
    room.exits = def.exits.clone();
    room
}

/// Build an item from its definition.
pub fn build_item(def: &ItemDefinition) -> Item {
    let mut item = Item::new(&def.id, &def.name, &def.description);
    item.weight = def.weight;
    item.kind = def.kind;
    item.is_container = def.is_container;
    item.is_usable = def.is_usable;
    item.takeable = def.can_take;
    item.effects = def.effects.clone();
    if let Some(text) = &def.use_description {
        item.use_description = text.clone();
    }
    if let Some(text) = &def.on_take_message {
        item.take_message = text.clone();
    }
    if let Some(text) = &def.on_drop_message {
        item.drop_message = text.clone();
    }
    item
}

/// Build an NPC from its definition.
pub fn build_npc(def: &NpcDefinition) -> Npc {
    let mut npc = Npc::new(&def.id, &def.name, &def.description)
        .with_inventory(def.starting_inventory.clone());
    if let Some(text) = &def.long_description {
        npc = npc.with_long_description(text);
    }
    if let Some(text) = &def.default_response {
        npc = npc.with_default_response(text);
    }
    for dialogue in &def.dialogues {
        npc.add_dialogue(dialogue.clone());
    }
    if !def.is_alive {
        npc.kill();
    }
    npc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_game;

    #[test]
    fn build_sample_rooms() {
        let def = sample_game();
        let start = build_room("start", &def.rooms["start"]);

        assert_eq!(start.id, "start");
        assert_eq!(start.name, "Starting Room");
        assert!(start.has_exit("north"));
        assert_eq!(start.item_ids(), ["key".to_string()]);
        assert!(!start.visited);
    }

    #[test]
    fn build_sample_item() {
        let def = sample_game();
        let key = build_item(&def.items["key"]);

        assert_eq!(key.name, "brass key");
        assert_eq!(key.weight, 0.1);
        assert!(key.is_usable);
        assert!(key.can_take());
        assert_eq!(key.on_take(), "You pick up the brass key.");
    }

    #[test]
    fn build_sample_npc() {
        let def = sample_game();
        let mut guard = build_npc(&def.npcs["guard"]);

        assert!(guard.is_alive);
        assert_eq!(guard.talk(), "guard says: \"Halt! What are you doing here?\"");
    }

    #[test]
    fn dead_npc_definition() {
        let mut def = sample_game().npcs["guard"].clone();
        def.is_alive = false;
        let npc = build_npc(&def);
        assert!(!npc.is_alive);
    }
}
