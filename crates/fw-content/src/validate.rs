//! Referential and structural validation.
//!
//! Problems are collected exhaustively rather than failing fast, so an
//! author sees every broken reference in one pass. Loading a definition
//! with a non-empty report is all-or-nothing: the engine refuses it.

use std::fmt;

use thiserror::Error;

use crate::definition::GameDefinition;

/// A single structural or referential problem in a world definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The metadata has no title.
    #[error("game metadata missing title")]
    MissingTitle,

    /// The metadata has no starting room id.
    #[error("game metadata missing startingRoomId")]
    MissingStartingRoom,

    /// The starting room id is not in the room table.
    #[error("starting room '{0}' not found")]
    StartingRoomNotFound(String),

    /// A room exit points at a room id not in the room table.
    #[error("room '{room}' has exit to non-existent room '{target}'")]
    UnknownExitTarget {
        /// The room owning the exit.
        room: String,
        /// The missing destination id.
        target: String,
    },

    /// A room presence list names an item id not in the item table.
    #[error("room '{room}' contains non-existent item '{item}'")]
    UnknownRoomItem {
        /// The room.
        room: String,
        /// The missing item id.
        item: String,
    },

    /// A room presence list names an NPC id not in the NPC table.
    #[error("room '{room}' contains non-existent NPC '{npc}'")]
    UnknownRoomNpc {
        /// The room.
        room: String,
        /// The missing NPC id.
        npc: String,
    },

    /// An NPC dialogue successor points at a node id the NPC lacks.
    #[error("NPC '{npc}' dialogue '{dialogue}' continues to unknown dialogue '{target}'")]
    UnknownDialogueSuccessor {
        /// The NPC.
        npc: String,
        /// The node with the dangling successor.
        dialogue: String,
        /// The missing successor id.
        target: String,
    },
}

/// The aggregated outcome of validating a world definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every problem found, in discovery order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Whether the definition passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Validate a world definition, collecting every problem found.
pub fn validate(definition: &GameDefinition) -> ValidationReport {
    let mut errors = Vec::new();

    if definition.metadata.title.is_empty() {
        errors.push(ValidationError::MissingTitle);
    }
    if definition.metadata.starting_room_id.is_empty() {
        errors.push(ValidationError::MissingStartingRoom);
    } else if !definition
        .rooms
        .contains_key(&definition.metadata.starting_room_id)
    {
        errors.push(ValidationError::StartingRoomNotFound(
            definition.metadata.starting_room_id.clone(),
        ));
    }

    // Sort room ids so the report order is stable across runs.
    let mut room_ids: Vec<&String> = definition.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let room = &definition.rooms[room_id];

        for exit in &room.exits {
            if !definition.rooms.contains_key(&exit.room_id) {
                errors.push(ValidationError::UnknownExitTarget {
                    room: room_id.clone(),
                    target: exit.room_id.clone(),
                });
            }
        }
        for item_id in &room.items {
            if !definition.items.contains_key(item_id) {
                errors.push(ValidationError::UnknownRoomItem {
                    room: room_id.clone(),
                    item: item_id.clone(),
                });
            }
        }
        for npc_id in &room.npcs {
            if !definition.npcs.contains_key(npc_id) {
                errors.push(ValidationError::UnknownRoomNpc {
                    room: room_id.clone(),
                    npc: npc_id.clone(),
                });
            }
        }
    }

    let mut npc_ids: Vec<&String> = definition.npcs.keys().collect();
    npc_ids.sort();

    for npc_id in npc_ids {
        let npc = &definition.npcs[npc_id];
        for dialogue in &npc.dialogues {
            if let Some(next) = &dialogue.next_dialogue_id
                && !npc.dialogues.iter().any(|d| &d.id == next)
            {
                errors.push(ValidationError::UnknownDialogueSuccessor {
                    npc: npc_id.clone(),
                    dialogue: dialogue.id.clone(),
                    target: next.clone(),
                });
            }
        }
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_game;

    #[test]
    fn sample_game_is_valid() {
        let report = validate(&sample_game());
        assert!(report.is_valid(), "unexpected errors: {report}");
    }

    #[test]
    fn missing_title_and_starting_room() {
        let mut def = sample_game();
        def.metadata.title.clear();
        def.metadata.starting_room_id.clear();

        let report = validate(&def);
        assert!(report.errors.contains(&ValidationError::MissingTitle));
        assert!(report.errors.contains(&ValidationError::MissingStartingRoom));
    }

    #[test]
    fn starting_room_must_exist() {
        let mut def = sample_game();
        def.metadata.starting_room_id = "nowhere".to_string();

        let report = validate(&def);
        assert!(
            report
                .errors
                .contains(&ValidationError::StartingRoomNotFound("nowhere".to_string()))
        );
    }

    #[test]
    fn broken_references_are_all_collected() {
        let mut def = sample_game();
        {
            let start = def.rooms.get_mut("start").unwrap();
            start.exits[0].room_id = "missing_room".to_string();
            start.items.push("missing_item".to_string());
            start.npcs.push("missing_npc".to_string());
        }

        let report = validate(&def);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn dangling_dialogue_successor() {
        let mut def = sample_game();
        def.npcs.get_mut("guard").unwrap().dialogues[0].next_dialogue_id =
            Some("never_written".to_string());

        let report = validate(&def);
        assert!(report.errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownDialogueSuccessor { npc, .. } if npc == "guard"
        )));
    }

    #[test]
    fn report_display_joins_messages() {
        let mut def = sample_game();
        def.metadata.title.clear();
        def.metadata.starting_room_id.clear();

        let text = validate(&def).to_string();
        assert!(text.contains("missing title"));
        assert!(text.contains("missing startingRoomId"));
    }
}
