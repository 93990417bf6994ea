//! The turn-based game engine.

use std::collections::HashMap;

use fw_content::{GameDefinition, GameMetadata, build, validate};
use fw_parser::{Command, CommandParser};
use fw_world::{EntityRef, GameEntity, Item, Npc, Player, Room};

use crate::error::{EngineError, EngineResult};
use crate::events::{EventBus, SubscriberId};
use crate::state::{GameState, GameValue};

/// The outcome of processing one player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command did what the player asked.
    pub success: bool,
    /// Feedback line for the player. May be empty when the narrative was
    /// already delivered through the output channel.
    pub message: String,
    /// Whether the session state changed (movement, take, drop, use).
    pub game_state_changed: bool,
}

impl CommandResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            game_state_changed: false,
        }
    }

    fn changed(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            game_state_changed: true,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            game_state_changed: false,
        }
    }
}

/// The game engine: world tables, session state, parser, and listeners.
///
/// Lifecycle: [`load_game`](Self::load_game) installs a validated world,
/// [`start_new_game`](Self::start_new_game) opens a session, then
/// [`process_command`](Self::process_command) drives play one turn at a
/// time. Sessions can be snapshotted with [`save_game`](Self::save_game)
/// and restored with [`load_game_state`](Self::load_game_state). The
/// caller owns the engine; nothing here is global.
#[derive(Debug, Default)]
pub struct GameEngine {
    metadata: Option<GameMetadata>,
    rooms: HashMap<String, Room>,
    items: HashMap<String, Item>,
    npcs: HashMap<String, Npc>,
    player: Option<Player>,
    state: Option<GameState>,
    parser: CommandParser,
    events: EventBus,
}

impl GameEngine {
    /// Create an engine with no game loaded.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- lifecycle -------------------------------------------------------

    /// Validate and install a world definition.
    ///
    /// Loading is all-or-nothing: any validation error rejects the whole
    /// definition and the engine keeps its previous world. Entity tables
    /// are fully replaced, never merged; an existing player has its weight
    /// table re-seeded from the new items.
    pub fn load_game(&mut self, definition: GameDefinition) -> EngineResult<()> {
        let report = validate(&definition);
        if !report.is_valid() {
            return Err(EngineError::InvalidGameData(report));
        }

        self.rooms = definition
            .rooms
            .iter()
            .map(|(id, def)| (id.clone(), build::build_room(id, def)))
            .collect();
        self.items = definition
            .items
            .iter()
            .map(|(id, def)| (id.clone(), build::build_item(def)))
            .collect();
        self.npcs = definition
            .npcs
            .iter()
            .map(|(id, def)| (id.clone(), build::build_npc(def)))
            .collect();

        if let Some(player) = self.player.as_mut() {
            for item in self.items.values() {
                player.set_item_weight(&item.id, item.weight);
            }
        }

        self.events.emit_output(&format!(
            "Loaded game: {} by {}",
            definition.metadata.title, definition.metadata.author
        ));
        self.metadata = Some(definition.metadata);
        Ok(())
    }

    /// Start a fresh session in the loaded world's starting room.
    ///
    /// Emits the welcome banner and the starting room's description, then
    /// broadcasts the initial state.
    pub fn start_new_game(&mut self) -> EngineResult<()> {
        let metadata = self.metadata.as_ref().ok_or(EngineError::NoGameLoaded)?;
        let starting_room_id = metadata.starting_room_id.clone();
        let title = metadata.title.clone();
        let description = metadata.description.clone();

        let mut player = Player::new(&starting_room_id);
        for item in self.items.values() {
            player.set_item_weight(&item.id, item.weight);
        }
        self.player = Some(player);
        self.state = Some(GameState::new(&starting_room_id));

        if let Some(room) = self.rooms.get_mut(&starting_room_id) {
            room.mark_visited();
        }

        self.events.emit_output(&format!("Welcome to {title}!"));
        self.events.emit_output(&description);
        self.events.emit_output("");
        self.look_around()?;

        self.notify_state_change();
        Ok(())
    }

    /// Snapshot the active session.
    ///
    /// The snapshot is detached: later play does not affect it.
    pub fn save_game(&self) -> EngineResult<GameState> {
        let state = self.state.as_ref().ok_or(EngineError::NoActiveSession)?;
        let player = self.player.as_ref().ok_or(EngineError::NoActiveSession)?;

        let mut snapshot = state.clone();
        snapshot.current_room_id = player.current_room_id.clone();
        snapshot.inventory = player.inventory().to_vec();
        Ok(snapshot)
    }

    /// Restore a session from a snapshot.
    ///
    /// The engine keeps its own copy of the snapshot and rebuilds the
    /// player from it; room visited marks and presence lists are brought
    /// back in line with the restored state.
    pub fn load_game_state(&mut self, snapshot: &GameState) -> EngineResult<()> {
        if self.metadata.is_none() {
            return Err(EngineError::NoGameLoaded);
        }
        if !self.rooms.contains_key(&snapshot.current_room_id) {
            return Err(EngineError::RoomNotFound(snapshot.current_room_id.clone()));
        }

        let mut player = Player::new(&snapshot.current_room_id);
        for item in self.items.values() {
            player.set_item_weight(&item.id, item.weight);
        }
        for item_id in &snapshot.inventory {
            player.add_item(item_id.clone());
        }

        for room_id in &snapshot.visited_rooms {
            if let Some(room) = self.rooms.get_mut(room_id) {
                room.mark_visited();
            }
        }
        // Carried items must not also sit in a room's presence list.
        for item_id in &snapshot.inventory {
            for room in self.rooms.values_mut() {
                room.remove_item(item_id);
            }
        }

        self.player = Some(player);
        self.state = Some(snapshot.clone());

        self.notify_state_change();
        Ok(())
    }

    /// Whether a world definition is loaded.
    pub fn is_loaded(&self) -> bool {
        self.metadata.is_some()
    }

    /// Whether a session is active.
    pub fn has_session(&self) -> bool {
        self.state.is_some() && self.player.is_some()
    }

    // ---- command processing ----------------------------------------------

    /// Parse and execute one line of player input.
    ///
    /// The turn counter increments for every processed command, including
    /// failed ones; a failed command otherwise leaves the session exactly
    /// as it was. State-changing commands broadcast the updated state
    /// before this returns.
    pub fn process_command(&mut self, input: &str) -> CommandResult {
        if !self.has_session() {
            return CommandResult::fail("No active game");
        }

        let command = self.parser.parse(input);
        if let Some(state) = self.state.as_mut() {
            state.turn_count += 1;
        }

        let result = match self.execute(&command) {
            Ok(result) => result,
            Err(error) => CommandResult::fail(format!("Error executing command: {error}")),
        };

        if result.game_state_changed {
            self.notify_state_change();
        }
        result
    }

    fn execute(&mut self, command: &Command) -> EngineResult<CommandResult> {
        let object = command.object.as_deref();
        match command.verb.as_str() {
            "go" | "move" => self.handle_movement(object),
            "look" | "examine" => self.handle_look(object),
            "take" | "get" => self.handle_take(object),
            "drop" => self.handle_drop(object),
            "use" => self.handle_use(object, command.indirect_object.as_deref()),
            "talk" | "speak" => self.handle_talk(object),
            "inventory" => self.handle_inventory(),
            "help" => Ok(CommandResult::ok(self.help_text())),
            "quit" => Ok(CommandResult::ok("Thanks for playing!")),
            "" => Ok(CommandResult::fail("Please enter a command.")),
            other => Ok(CommandResult::fail(format!("I don't understand \"{other}\"."))),
        }
    }

    fn handle_movement(&mut self, direction: Option<&str>) -> EngineResult<CommandResult> {
        let Some(direction) = direction else {
            return Ok(CommandResult::fail("Go where?"));
        };

        let room = self.current_room()?;
        let Some(exit) = room.exit(direction) else {
            return Ok(CommandResult::fail(format!(
                "You can't go {direction} from here."
            )));
        };

        if exit.is_locked {
            let message = exit
                .lock_description
                .clone()
                .unwrap_or_else(|| format!("The way {direction} is blocked."));
            return Ok(CommandResult::fail(message));
        }

        let destination = exit.room_id.clone();
        if !self.rooms.contains_key(&destination) {
            return Ok(CommandResult::fail("That room doesn't exist."));
        }

        let player = self.player.as_mut().ok_or(EngineError::NoActiveSession)?;
        player.move_to_room(&destination);
        let state = self.state.as_mut().ok_or(EngineError::NoActiveSession)?;
        state.current_room_id = destination.clone();
        state.visited_rooms.insert(destination.clone());
        if let Some(room) = self.rooms.get_mut(&destination) {
            room.mark_visited();
        }

        self.events.emit_output(&format!("You go {direction}."));
        self.look_around()?;

        Ok(CommandResult::changed(""))
    }

    fn handle_look(&mut self, target: Option<&str>) -> EngineResult<CommandResult> {
        let Some(target) = target else {
            self.look_around()?;
            return Ok(CommandResult::ok(""));
        };

        if let Some(item) = self.find_item_in_room_or_inventory(target) {
            return Ok(CommandResult::ok(item.examine()));
        }
        if let Some(npc) = self.find_npc_in_room(target) {
            return Ok(CommandResult::ok(npc.examine()));
        }

        Ok(CommandResult::fail(format!(
            "You don't see any {target} here."
        )))
    }

    fn handle_take(&mut self, object: Option<&str>) -> EngineResult<CommandResult> {
        let Some(name) = object else {
            return Ok(CommandResult::fail("Take what?"));
        };

        let Some(item) = self.find_item_in_room(name) else {
            return Ok(CommandResult::fail(format!(
                "You don't see any {name} here."
            )));
        };
        if !item.can_take() {
            return Ok(CommandResult::fail(format!(
                "You can't take the {}.",
                item.name
            )));
        }

        let item_id = item.id.clone();
        let message = item.on_take();

        let player = self.player.as_mut().ok_or(EngineError::NoActiveSession)?;
        if !player.add_item(&item_id) {
            return Ok(CommandResult::fail("You are carrying too much weight."));
        }
        let room_id = player.current_room_id.clone();
        if let Some(room) = self.rooms.get_mut(&room_id) {
            room.remove_item(&item_id);
        }

        Ok(CommandResult::changed(message))
    }

    fn handle_drop(&mut self, object: Option<&str>) -> EngineResult<CommandResult> {
        let Some(name) = object else {
            return Ok(CommandResult::fail("Drop what?"));
        };

        let Some(item) = self.find_item_in_inventory(name) else {
            return Ok(CommandResult::fail(format!("You don't have any {name}.")));
        };
        let item_id = item.id.clone();
        let message = item.on_drop();

        let player = self.player.as_mut().ok_or(EngineError::NoActiveSession)?;
        player.remove_item(&item_id);
        let room_id = player.current_room_id.clone();
        if let Some(room) = self.rooms.get_mut(&room_id) {
            room.add_item(item_id);
        }

        Ok(CommandResult::changed(message))
    }

    fn handle_use(
        &mut self,
        object: Option<&str>,
        indirect: Option<&str>,
    ) -> EngineResult<CommandResult> {
        let Some(name) = object else {
            return Ok(CommandResult::fail("Use what?"));
        };

        let Some(item) = self.find_item_in_inventory(name) else {
            return Ok(CommandResult::fail(format!("You don't have any {name}.")));
        };

        let target = match indirect {
            Some(target_name) => {
                let entity = self
                    .find_item_in_room_or_inventory(target_name)
                    .map(|t| (t.id.as_str(), t.name.as_str()))
                    .or_else(|| {
                        self.find_npc_in_room(target_name)
                            .map(|n| (n.id.as_str(), n.name.as_str()))
                    });
                match entity {
                    Some((id, name)) => Some(EntityRef { id, name }),
                    None => {
                        return Ok(CommandResult::fail(format!(
                            "You don't see any {target_name} here."
                        )));
                    }
                }
            }
            None => None,
        };

        Ok(CommandResult::changed(item.use_on(target.as_ref())))
    }

    fn handle_talk(&mut self, object: Option<&str>) -> EngineResult<CommandResult> {
        let Some(name) = object else {
            return Ok(CommandResult::fail("Talk to whom?"));
        };

        let Some(npc_id) = self.find_npc_in_room(name).map(|npc| npc.id.clone()) else {
            return Ok(CommandResult::fail(format!(
                "You don't see any {name} here."
            )));
        };
        let Some(npc) = self.npcs.get_mut(&npc_id) else {
            return Ok(CommandResult::fail(format!(
                "You don't see any {name} here."
            )));
        };

        Ok(CommandResult::ok(npc.talk()))
    }

    fn handle_inventory(&self) -> EngineResult<CommandResult> {
        let player = self.player.as_ref().ok_or(EngineError::NoActiveSession)?;
        let items = &self.items;
        Ok(CommandResult::ok(player.inventory_description(|id| {
            items.get(id).map(|item| item.name.clone())
        })))
    }

    fn help_text(&self) -> String {
        format!(
            "Available commands:\n{}",
            self.parser.available_commands().join("\n")
        )
    }

    /// Emit the current room's full description on the output channel.
    fn look_around(&mut self) -> EngineResult<()> {
        let description = self.current_room()?.description(true);
        self.events.emit_output(&description);
        Ok(())
    }

    // ---- name resolution -------------------------------------------------

    fn find_item_in_room(&self, name: &str) -> Option<&Item> {
        let room = self.current_room().ok()?;
        let candidates: Vec<&Item> = room
            .item_ids()
            .iter()
            .filter_map(|id| self.items.get(id))
            .collect();
        crate::resolve::pick_by_name(name, &candidates, |item| item.name.as_str())
    }

    fn find_item_in_inventory(&self, name: &str) -> Option<&Item> {
        let player = self.player.as_ref()?;
        let candidates: Vec<&Item> = player
            .inventory()
            .iter()
            .filter_map(|id| self.items.get(id))
            .collect();
        crate::resolve::pick_by_name(name, &candidates, |item| item.name.as_str())
    }

    fn find_item_in_room_or_inventory(&self, name: &str) -> Option<&Item> {
        self.find_item_in_room(name)
            .or_else(|| self.find_item_in_inventory(name))
    }

    fn find_npc_in_room(&self, name: &str) -> Option<&Npc> {
        let room = self.current_room().ok()?;
        let candidates: Vec<&Npc> = room
            .npc_ids()
            .iter()
            .filter_map(|id| self.npcs.get(id))
            .collect();
        crate::resolve::pick_by_name(name, &candidates, |npc| npc.name.as_str())
    }

    // ---- accessors -------------------------------------------------------

    /// The room the player is in.
    pub fn current_room(&self) -> EngineResult<&Room> {
        let player = self.player.as_ref().ok_or(EngineError::NoActiveSession)?;
        self.rooms
            .get(&player.current_room_id)
            .ok_or_else(|| EngineError::RoomNotFound(player.current_room_id.clone()))
    }

    /// The active player.
    pub fn player(&self) -> EngineResult<&Player> {
        self.player.as_ref().ok_or(EngineError::NoActiveSession)
    }

    /// The active session state.
    pub fn game_state(&self) -> EngineResult<&GameState> {
        self.state.as_ref().ok_or(EngineError::NoActiveSession)
    }

    /// Look up a room by id.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// Look up an item by id.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// Look up an NPC by id.
    pub fn npc(&self, npc_id: &str) -> Option<&Npc> {
        self.npcs.get(npc_id)
    }

    /// Metadata of the loaded game, if any.
    pub fn metadata(&self) -> Option<&GameMetadata> {
        self.metadata.as_ref()
    }

    /// Set a session flag. Ignored without an active session.
    pub fn set_game_flag(&mut self, name: &str, value: bool) {
        if let Some(state) = self.state.as_mut() {
            state.set_flag(name, value);
        }
    }

    /// Read a session flag, defaulting to `false`.
    pub fn game_flag(&self, name: &str) -> bool {
        self.state.as_ref().is_some_and(|state| state.flag(name))
    }

    /// Set a session variable. Ignored without an active session.
    pub fn set_game_variable(&mut self, name: &str, value: impl Into<GameValue>) {
        if let Some(state) = self.state.as_mut() {
            state.set_variable(name, value);
        }
    }

    /// Read a session variable.
    pub fn game_variable(&self, name: &str) -> Option<&GameValue> {
        self.state.as_ref().and_then(|state| state.variable(name))
    }

    // ---- listeners -------------------------------------------------------

    /// Register a listener for narrative output lines.
    pub fn on_output<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&str) + 'static,
    {
        self.events.on_output(listener)
    }

    /// Remove an output listener by handle.
    pub fn remove_output_listener(&mut self, id: SubscriberId) -> bool {
        self.events.remove_output(id)
    }

    /// Register a listener for session state changes.
    pub fn on_game_state_change<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&GameState) + 'static,
    {
        self.events.on_state_change(listener)
    }

    /// Remove a state-change listener by handle.
    pub fn remove_game_state_listener(&mut self, id: SubscriberId) -> bool {
        self.events.remove_state_change(id)
    }

    /// Drop every registered listener.
    pub fn clear_all_listeners(&mut self) {
        self.events.clear();
    }

    fn notify_state_change(&mut self) {
        let (Some(state), Some(player)) = (self.state.as_mut(), self.player.as_ref()) else {
            return;
        };
        state.current_room_id = player.current_room_id.clone();
        state.inventory = player.inventory().to_vec();
        self.events.emit_state_change(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_content::sample_game;

    fn started_engine() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.load_game(sample_game()).unwrap();
        engine.start_new_game().unwrap();
        engine
    }

    #[test]
    fn lifecycle_preconditions() {
        let mut engine = GameEngine::new();
        assert!(matches!(
            engine.start_new_game(),
            Err(EngineError::NoGameLoaded)
        ));
        assert!(matches!(engine.save_game(), Err(EngineError::NoActiveSession)));
        assert!(matches!(
            engine.current_room(),
            Err(EngineError::NoActiveSession)
        ));

        engine.load_game(sample_game()).unwrap();
        assert!(engine.is_loaded());
        assert!(!engine.has_session());

        engine.start_new_game().unwrap();
        assert!(engine.has_session());
        assert_eq!(engine.current_room().unwrap().id, "start");
    }

    #[test]
    fn invalid_definition_is_rejected_whole() {
        let mut def = sample_game();
        def.metadata.starting_room_id = "nowhere".to_string();

        let mut engine = GameEngine::new();
        assert!(matches!(
            engine.load_game(def),
            Err(EngineError::InvalidGameData(_))
        ));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn commands_require_a_session() {
        let mut engine = GameEngine::new();
        engine.load_game(sample_game()).unwrap();

        let result = engine.process_command("look");
        assert!(!result.success);
        assert_eq!(result.message, "No active game");
    }

    #[test]
    fn unknown_verb_fails_but_counts_a_turn() {
        let mut engine = started_engine();
        let result = engine.process_command("dance wildly");
        assert!(!result.success);
        assert_eq!(result.message, "I don't understand \"unknown\".");
        assert_eq!(engine.game_state().unwrap().turn_count, 1);
    }

    #[test]
    fn empty_input_prompts_for_a_command() {
        let mut engine = started_engine();
        let result = engine.process_command("   ");
        assert!(!result.success);
        assert_eq!(result.message, "Please enter a command.");
    }

    #[test]
    fn take_and_drop_round_trip() {
        let mut engine = started_engine();

        let take = engine.process_command("take key");
        assert!(take.success);
        assert!(take.game_state_changed);
        assert_eq!(take.message, "You pick up the brass key.");
        assert!(engine.player().unwrap().has_item("key"));
        assert!(!engine.current_room().unwrap().item_ids().contains(&"key".to_string()));

        let drop = engine.process_command("drop key");
        assert!(drop.success);
        assert!(drop.game_state_changed);
        assert!(!engine.player().unwrap().has_item("key"));
        assert!(engine.current_room().unwrap().item_ids().contains(&"key".to_string()));
    }

    #[test]
    fn take_missing_item() {
        let mut engine = started_engine();
        let result = engine.process_command("take sword");
        assert!(!result.success);
        assert_eq!(result.message, "You don't see any sword here.");
    }

    #[test]
    fn drop_item_not_carried() {
        let mut engine = started_engine();
        let result = engine.process_command("drop key");
        assert!(!result.success);
        assert_eq!(result.message, "You don't have any key.");
    }

    #[test]
    fn bare_verbs_prompt_for_objects() {
        let mut engine = started_engine();
        assert_eq!(engine.process_command("take").message, "Take what?");
        assert_eq!(engine.process_command("drop").message, "Drop what?");
        assert_eq!(engine.process_command("use").message, "Use what?");
        assert_eq!(engine.process_command("talk").message, "Talk to whom?");
        assert_eq!(engine.process_command("go").message, "Go where?");
    }

    #[test]
    fn movement_into_missing_exit() {
        let mut engine = started_engine();
        let result = engine.process_command("go west");
        assert!(!result.success);
        assert_eq!(result.message, "You can't go west from here.");
        assert_eq!(engine.current_room().unwrap().id, "start");
    }

    #[test]
    fn examine_item_in_room() {
        let mut engine = started_engine();
        let result = engine.process_command("examine key");
        assert!(result.success);
        // Usable items append their use description to the examine text.
        assert_eq!(
            result.message,
            "A small brass key that looks important.\n\nThis key might unlock something."
        );
        assert!(!result.game_state_changed);
    }

    #[test]
    fn use_carried_item() {
        let mut engine = started_engine();
        engine.process_command("take key");
        let result = engine.process_command("use key");
        assert!(result.success);
        assert_eq!(result.message, "This key might unlock something.");
    }

    #[test]
    fn use_requires_visible_target() {
        let mut engine = started_engine();
        engine.process_command("take key");
        let result = engine.process_command("use key on door");
        assert!(!result.success);
        assert_eq!(result.message, "You don't see any door here.");
    }

    #[test]
    fn inventory_reports_names_and_weight() {
        let mut engine = started_engine();
        assert_eq!(
            engine.process_command("inventory").message,
            "You are not carrying anything."
        );

        engine.process_command("take key");
        let text = engine.process_command("i").message;
        assert!(text.contains("brass key"));
        assert!(text.contains("0.1/10.0 weight"));
    }

    #[test]
    fn help_lists_commands() {
        let mut engine = started_engine();
        let text = engine.process_command("help").message;
        assert!(text.starts_with("Available commands:\n"));
        assert!(text.contains("go [direction]"));
    }

    #[test]
    fn quit_acknowledges() {
        let mut engine = started_engine();
        let result = engine.process_command("quit");
        assert!(result.success);
        assert_eq!(result.message, "Thanks for playing!");
    }

    #[test]
    fn flags_and_variables() {
        let mut engine = started_engine();
        assert!(!engine.game_flag("met_guard"));
        engine.set_game_flag("met_guard", true);
        assert!(engine.game_flag("met_guard"));

        engine.set_game_variable("score", 5i64);
        assert_eq!(engine.game_variable("score"), Some(&GameValue::Integer(5)));
    }

    #[test]
    fn fuzzy_resolution_absorbs_typos() {
        let mut engine = started_engine();
        engine.process_command("go north");
        let result = engine.process_command("talk to gurad");
        assert!(result.success);
        assert_eq!(result.message, "guard says: \"Halt! What are you doing here?\"");
    }
}
