//! Serializable session state.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A typed value stored in the session's variable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameValue {
    /// A boolean value.
    Boolean(bool),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value.
    String(String),
}

impl std::fmt::Display for GameValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameValue::Boolean(value) => write!(f, "{value}"),
            GameValue::Integer(value) => write!(f, "{value}"),
            GameValue::Float(value) => write!(f, "{value}"),
            GameValue::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for GameValue {
    fn from(value: bool) -> Self {
        GameValue::Boolean(value)
    }
}

impl From<i64> for GameValue {
    fn from(value: i64) -> Self {
        GameValue::Integer(value)
    }
}

impl From<f64> for GameValue {
    fn from(value: f64) -> Self {
        GameValue::Float(value)
    }
}

impl From<&str> for GameValue {
    fn from(value: &str) -> Self {
        GameValue::String(value.to_string())
    }
}

/// A snapshot of everything that changes during play.
///
/// The world tables (rooms, items, NPCs) are rebuilt from the definition on
/// load; this struct captures only the mutable session: where the player
/// is, what they carry, where they have been, and the flag/variable
/// scratchpad scripts use. Serializes to camelCase JSON, with the visited
/// set encoded as a plain array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Id of the room the player is in.
    pub current_room_id: String,
    /// Ids of carried items.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Ids of every room the player has entered.
    #[serde(default)]
    pub visited_rooms: BTreeSet<String>,
    /// Named boolean flags.
    #[serde(default)]
    pub game_flags: HashMap<String, bool>,
    /// Named typed variables.
    #[serde(default)]
    pub game_variables: HashMap<String, GameValue>,
    /// Commands processed so far, counting failures.
    #[serde(default)]
    pub turn_count: u64,
}

impl GameState {
    /// Fresh state for a session starting in the given room.
    pub fn new(starting_room_id: impl Into<String>) -> Self {
        let starting_room_id = starting_room_id.into();
        let mut visited_rooms = BTreeSet::new();
        visited_rooms.insert(starting_room_id.clone());
        Self {
            current_room_id: starting_room_id,
            visited_rooms,
            ..Self::default()
        }
    }

    /// Read a flag, defaulting unset flags to `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.game_flags.get(name).copied().unwrap_or(false)
    }

    /// Set a flag.
    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.game_flags.insert(name.into(), value);
    }

    /// Read a variable.
    pub fn variable(&self, name: &str) -> Option<&GameValue> {
        self.game_variables.get(name)
    }

    /// Set a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<GameValue>) {
        self.game_variables.insert(name.into(), value.into());
    }
}
