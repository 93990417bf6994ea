//! Non-player characters and their dialogue state machine.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityRef, GameEntity};

/// A condition gating a dialogue node.
///
/// Conditions are parsed and stored but not yet evaluated against game
/// flags or variables: [`Npc::available_dialogues`] treats every node as
/// satisfied. The variants exist so content can already declare its intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogueCondition {
    /// Requires a game flag to be set.
    FlagSet {
        /// The flag name.
        flag: String,
    },
    /// Requires the player to carry an item.
    HasItem {
        /// The item id.
        item: String,
    },
}

/// One turn of NPC speech with an optional successor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialogue {
    /// Unique id within the owning NPC.
    pub id: String,
    /// The line spoken.
    pub response: String,
    /// Dialogue to continue with on the next talk, if any. Terminal
    /// dialogues have none.
    #[serde(default)]
    pub next_dialogue_id: Option<String>,
    /// Conditions that must hold for this node to start a conversation.
    #[serde(default)]
    pub conditions: Vec<DialogueCondition>,
}

impl Dialogue {
    /// Create a terminal dialogue node.
    pub fn new(id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            response: response.into(),
            next_dialogue_id: None,
            conditions: Vec::new(),
        }
    }

    /// Set the successor node.
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next_dialogue_id = Some(next.into());
        self
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: DialogueCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Long description shown on examine.
    pub long_description: String,
    /// Whether the NPC is alive. Dead NPCs short-circuit every interaction.
    pub is_alive: bool,
    /// The in-progress dialogue node, if a conversation is underway.
    pub current_dialogue_id: Option<String>,
    /// Ids of carried items.
    inventory: Vec<String>,
    /// Dialogue nodes in definition order. Order matters: the first
    /// satisfied node starts a conversation.
    dialogues: Vec<Dialogue>,
    /// Fallback line when no dialogue applies.
    pub default_response: String,
}

impl Npc {
    /// Create an NPC with the given descriptions.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();
        Self {
            id: id.into(),
            default_response: format!("{name} doesn't respond."),
            name,
            long_description: description.clone(),
            description,
            is_alive: true,
            current_dialogue_id: None,
            inventory: Vec::new(),
            dialogues: Vec::new(),
        }
    }

    /// Set the long description.
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Set the fallback response.
    pub fn with_default_response(mut self, text: impl Into<String>) -> Self {
        self.default_response = text.into();
        self
    }

    /// Add a dialogue node.
    pub fn with_dialogue(mut self, dialogue: Dialogue) -> Self {
        self.add_dialogue(dialogue);
        self
    }

    /// Seed the starting inventory.
    pub fn with_inventory(mut self, item_ids: Vec<String>) -> Self {
        self.inventory = item_ids;
        self
    }

    /// Advance the dialogue state machine by one turn and return the line.
    ///
    /// An in-progress conversation emits its current node and moves to the
    /// successor (or back to idle for terminal nodes). Otherwise the first
    /// satisfied node starts a conversation; with none, the fallback
    /// response is emitted.
    pub fn talk(&mut self) -> String {
        if !self.is_alive {
            return format!("{} is dead and cannot speak.", self.name);
        }

        let in_progress = self
            .current_dialogue_id
            .as_deref()
            .and_then(|id| self.dialogue(id))
            .map(|d| (d.response.clone(), d.next_dialogue_id.clone()));
        if let Some((response, next)) = in_progress {
            self.current_dialogue_id = next;
            return format!("{} says: \"{response}\"", self.name);
        }

        let opener = self
            .available_dialogues()
            .first()
            .map(|d| (d.response.clone(), d.next_dialogue_id.clone()));
        if let Some((response, next)) = opener {
            self.current_dialogue_id = next;
            return format!("{} says: \"{response}\"", self.name);
        }

        format!("{} says: \"{}\"", self.name, self.default_response)
    }

    /// Hand an item to the player, if the NPC carries it.
    pub fn give_item(&mut self, item_id: &str) -> String {
        if !self.is_alive {
            return format!("{} is dead and cannot give you anything.", self.name);
        }

        if let Some(pos) = self.inventory.iter().position(|id| id == item_id) {
            self.inventory.remove(pos);
            format!("{} gives you the {item_id}.", self.name)
        } else {
            format!("{} doesn't have that item.", self.name)
        }
    }

    /// Accept an item into the NPC's inventory.
    pub fn take_item(&mut self, item_id: impl Into<String>) -> String {
        if !self.is_alive {
            return format!("{} is dead and cannot take anything.", self.name);
        }

        let item_id = item_id.into();
        if self.has_item(&item_id) {
            format!("{} already has that item.", self.name)
        } else {
            let message = format!("{} takes the {item_id}.", self.name);
            self.inventory.push(item_id);
            message
        }
    }

    /// Whether the NPC carries the given item.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// Ids of carried items.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Look up a dialogue node by id.
    pub fn dialogue(&self, dialogue_id: &str) -> Option<&Dialogue> {
        self.dialogues.iter().find(|d| d.id == dialogue_id)
    }

    /// Force the conversation to a specific node. Unknown ids are ignored.
    pub fn set_dialogue(&mut self, dialogue_id: &str) {
        if self.dialogue(dialogue_id).is_some() {
            self.current_dialogue_id = Some(dialogue_id.to_string());
        }
    }

    /// Dialogue nodes whose conditions are satisfied, in definition order.
    ///
    /// Condition evaluation is not yet wired to game flags; every node is
    /// treated as satisfied.
    pub fn available_dialogues(&self) -> Vec<&Dialogue> {
        self.dialogues.iter().collect()
    }

    /// Add a dialogue node, replacing any node with the same id.
    pub fn add_dialogue(&mut self, dialogue: Dialogue) {
        if let Some(existing) = self.dialogues.iter_mut().find(|d| d.id == dialogue.id) {
            *existing = dialogue;
        } else {
            self.dialogues.push(dialogue);
        }
    }

    /// Remove a dialogue node, clearing the pointer if it dangles.
    pub fn remove_dialogue(&mut self, dialogue_id: &str) {
        self.dialogues.retain(|d| d.id != dialogue_id);
        if self.current_dialogue_id.as_deref() == Some(dialogue_id) {
            self.current_dialogue_id = None;
        }
    }

    /// Kill the NPC, abandoning any in-progress conversation.
    pub fn kill(&mut self) {
        self.is_alive = false;
        self.current_dialogue_id = None;
    }

    /// Bring the NPC back to life.
    pub fn revive(&mut self) {
        self.is_alive = true;
    }
}

impl GameEntity for Npc {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn examine(&self) -> String {
        if !self.is_alive {
            return format!("{} is dead.", self.name);
        }

        let mut result = self.long_description.clone();
        if !self.inventory.is_empty() {
            result.push_str(&format!(
                "\n\n{} is carrying: {}",
                self.name,
                self.inventory.join(", ")
            ));
        }
        result
    }

    fn interact(&mut self, action: &str, target: Option<&EntityRef<'_>>) -> String {
        if !self.is_alive {
            return format!("{} is dead and cannot respond.", self.name);
        }

        match action.to_lowercase().as_str() {
            "talk" | "speak" | "ask" => self.talk(),
            "examine" | "look" => self.examine(),
            "give" => match target {
                Some(target) => self.give_item(target.id),
                None => "Give what?".to_string(),
            },
            other => format!("You can't {other} {}.", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> Npc {
        Npc::new("guard", "guard", "A stern-looking guard.")
            .with_long_description("A tall guard in armor, watching you carefully.")
            .with_default_response("The guard nods at you.")
            .with_dialogue(Dialogue::new("greeting", "Halt! What are you doing here?").with_next("explain"))
            .with_dialogue(Dialogue::new("explain", "I see. Well, be careful around here."))
    }

    #[test]
    fn dialogue_advances_then_goes_idle() {
        let mut npc = guard();
        assert_eq!(npc.talk(), "guard says: \"Halt! What are you doing here?\"");
        assert_eq!(npc.current_dialogue_id.as_deref(), Some("explain"));

        assert_eq!(npc.talk(), "guard says: \"I see. Well, be careful around here.\"");
        assert_eq!(npc.current_dialogue_id, None);
    }

    #[test]
    fn idle_restarts_from_first_available() {
        let mut npc = guard();
        npc.talk();
        npc.talk();
        // Back to idle: the first node starts over.
        assert_eq!(npc.talk(), "guard says: \"Halt! What are you doing here?\"");
    }

    #[test]
    fn no_dialogues_falls_back() {
        let mut npc = Npc::new("cat", "cat", "A sleepy cat.").with_default_response("Meow.");
        assert_eq!(npc.talk(), "cat says: \"Meow.\"");
        assert_eq!(npc.current_dialogue_id, None);
    }

    #[test]
    fn dead_npc_short_circuits() {
        let mut npc = guard();
        npc.talk();
        npc.kill();

        assert_eq!(npc.current_dialogue_id, None);
        assert_eq!(npc.talk(), "guard is dead and cannot speak.");
        assert_eq!(npc.examine(), "guard is dead.");
        assert_eq!(npc.give_item("coin"), "guard is dead and cannot give you anything.");
        assert_eq!(npc.take_item("coin"), "guard is dead and cannot take anything.");
    }

    #[test]
    fn revive_restores_interaction() {
        let mut npc = guard();
        npc.kill();
        npc.revive();
        assert_eq!(npc.talk(), "guard says: \"Halt! What are you doing here?\"");
    }

    #[test]
    fn inventory_transfer() {
        let mut npc = guard().with_inventory(vec!["coin".to_string()]);

        assert!(npc.has_item("coin"));
        assert_eq!(npc.give_item("coin"), "guard gives you the coin.");
        assert!(!npc.has_item("coin"));
        assert_eq!(npc.give_item("coin"), "guard doesn't have that item.");

        assert_eq!(npc.take_item("coin"), "guard takes the coin.");
        assert_eq!(npc.take_item("coin"), "guard already has that item.");
    }

    #[test]
    fn remove_dialogue_clears_dangling_pointer() {
        let mut npc = guard();
        npc.talk();
        assert_eq!(npc.current_dialogue_id.as_deref(), Some("explain"));

        npc.remove_dialogue("explain");
        assert_eq!(npc.current_dialogue_id, None);
    }

    #[test]
    fn set_dialogue_ignores_unknown_ids() {
        let mut npc = guard();
        npc.set_dialogue("nonsense");
        assert_eq!(npc.current_dialogue_id, None);

        npc.set_dialogue("explain");
        assert_eq!(npc.current_dialogue_id.as_deref(), Some("explain"));
    }

    #[test]
    fn examine_lists_carried_items() {
        let npc = guard().with_inventory(vec!["coin".to_string(), "spear".to_string()]);
        let text = npc.examine();
        assert!(text.contains("A tall guard in armor"));
        assert!(text.contains("guard is carrying: coin, spear"));
    }

    #[test]
    fn interact_give_without_target() {
        let mut npc = guard();
        assert_eq!(npc.interact("give", None), "Give what?");
    }
}
