//! Items, typed item effects, and use-with strategies.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityRef, GameEntity};

/// The kind of an item. Determines which use-with strategy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An ordinary object with no special behavior.
    #[default]
    Regular,
    /// An item that can hold other items.
    Container,
    /// An item that unlocks something.
    Key,
    /// An item that can be wielded.
    Weapon,
    /// An item used to accomplish a task.
    Tool,
    /// An item consumed on use.
    Consumable,
}

/// A typed effect an item carries.
///
/// This is the closed replacement for the open-ended property bags of older
/// content formats: every known effect kind is enumerated here with typed
/// parameters, and dispatch goes through [`UseStrategy`] rather than stored
/// callables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemEffect {
    /// The item deals damage when wielded.
    Damage {
        /// Damage dealt per strike.
        amount: i64,
    },
    /// The item can hold up to this many other items.
    Capacity {
        /// Maximum number of contained items.
        slots: u32,
    },
    /// The item unlocks a specific target entity.
    Unlocks {
        /// Id of the entity this item unlocks.
        target: String,
    },
}

/// An item in the world or in an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base description shown on examine.
    pub description: String,
    /// Carry weight.
    pub weight: f64,
    /// Item kind, keying the use-with strategy.
    pub kind: ItemKind,
    /// Whether this item can hold other items.
    pub is_container: bool,
    /// Ids of contained items. Only populated when `is_container` is set.
    pub contents: Vec<String>,
    /// Whether `use` does anything at all.
    pub is_usable: bool,
    /// Text shown when the item is used without a matching target.
    pub use_description: String,
    /// Whether the item can be picked up.
    pub takeable: bool,
    /// Message shown when the item is taken.
    pub take_message: String,
    /// Message shown when the item is dropped.
    pub drop_message: String,
    /// Typed effects this item carries.
    pub effects: Vec<ItemEffect>,
}

impl Item {
    /// Create a plain item with default weight and messages.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            take_message: format!("You take the {name}."),
            drop_message: format!("You drop the {name}."),
            name,
            description: description.into(),
            weight: 1.0,
            kind: ItemKind::Regular,
            is_container: false,
            contents: Vec::new(),
            is_usable: false,
            use_description: String::new(),
            takeable: true,
            effects: Vec::new(),
        }
    }

    /// Create a key that unlocks the given target.
    pub fn key(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        unlocks: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(id, name, description);
        item.weight = 0.1;
        item.kind = ItemKind::Key;
        item.is_usable = true;
        item.use_description = format!("The {} might unlock something.", item.name);
        item.effects.push(ItemEffect::Unlocks {
            target: unlocks.into(),
        });
        item
    }

    /// Create a container with the given capacity.
    pub fn container(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        slots: u32,
    ) -> Self {
        let mut item = Self::new(id, name, description);
        item.weight = 2.0;
        item.kind = ItemKind::Container;
        item.is_container = true;
        item.effects.push(ItemEffect::Capacity { slots });
        item
    }

    /// Create a weapon dealing the given damage.
    pub fn weapon(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        damage: i64,
    ) -> Self {
        let mut item = Self::new(id, name, description);
        item.kind = ItemKind::Weapon;
        item.is_usable = true;
        item.use_description = format!("You wield the {}.", item.name);
        item.effects.push(ItemEffect::Damage { amount: damage });
        item
    }

    /// Set the carry weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the use description and mark the item usable.
    pub fn with_use_description(mut self, text: impl Into<String>) -> Self {
        self.is_usable = true;
        self.use_description = text.into();
        self
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Whether the item can be picked up.
    pub fn can_take(&self) -> bool {
        self.takeable
    }

    /// Message shown when the item is taken.
    pub fn on_take(&self) -> String {
        self.take_message.clone()
    }

    /// Message shown when the item is dropped.
    pub fn on_drop(&self) -> String {
        self.drop_message.clone()
    }

    /// Use the item, optionally on a target.
    ///
    /// Unusable items decline. With a target the kind-specific strategy is
    /// consulted first; if it does not apply, the generic use description is
    /// returned.
    pub fn use_on(&self, target: Option<&EntityRef<'_>>) -> String {
        if !self.is_usable {
            return format!("You can't use the {}.", self.name);
        }

        if let Some(target) = target {
            let strategy = strategy_for(self.kind);
            if strategy.can_use_with(self, target) {
                return strategy.use_with(self, target);
            }
        }

        if self.use_description.is_empty() {
            format!("You use the {}.", self.name)
        } else {
            self.use_description.clone()
        }
    }

    /// Whether the kind-specific strategy applies to the given target.
    pub fn can_use_with(&self, target: &EntityRef<'_>) -> bool {
        strategy_for(self.kind).can_use_with(self, target)
    }

    /// Add an item id to this container.
    ///
    /// No-op returning `false` for non-containers, duplicates, and full
    /// containers.
    pub fn add_to_container(&mut self, item_id: impl Into<String>) -> bool {
        if !self.is_container {
            return false;
        }
        let item_id = item_id.into();
        if self.contents.contains(&item_id) {
            return false;
        }
        if let Some(slots) = self.capacity()
            && self.contents.len() >= slots as usize
        {
            return false;
        }
        self.contents.push(item_id);
        true
    }

    /// Remove an item id from this container.
    ///
    /// No-op returning `false` for non-containers and non-members.
    pub fn remove_from_container(&mut self, item_id: &str) -> bool {
        if !self.is_container {
            return false;
        }
        if let Some(pos) = self.contents.iter().position(|id| id == item_id) {
            self.contents.remove(pos);
            true
        } else {
            false
        }
    }

    /// Ids of contained items. Empty for non-containers.
    pub fn container_contents(&self) -> &[String] {
        if self.is_container { &self.contents } else { &[] }
    }

    /// Capacity in slots, if this item carries a capacity effect.
    pub fn capacity(&self) -> Option<u32> {
        self.effects.iter().find_map(|e| match e {
            ItemEffect::Capacity { slots } => Some(*slots),
            _ => None,
        })
    }

    /// Damage dealt, if this item carries a damage effect.
    pub fn damage(&self) -> Option<i64> {
        self.effects.iter().find_map(|e| match e {
            ItemEffect::Damage { amount } => Some(*amount),
            _ => None,
        })
    }

    /// Id of the entity this item unlocks, if any.
    pub fn unlocks(&self) -> Option<&str> {
        self.effects.iter().find_map(|e| match e {
            ItemEffect::Unlocks { target } => Some(target.as_str()),
            _ => None,
        })
    }
}

impl GameEntity for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn examine(&self) -> String {
        let mut result = self.description.clone();

        if self.is_container && !self.contents.is_empty() {
            result.push_str(&format!("\n\nInside you can see: {}", self.contents.join(", ")));
        }

        if self.is_usable && !self.use_description.is_empty() {
            result.push_str(&format!("\n\n{}", self.use_description));
        }

        result
    }

    fn interact(&mut self, action: &str, target: Option<&EntityRef<'_>>) -> String {
        match action.to_lowercase().as_str() {
            "examine" | "look" => self.examine(),
            "use" => self.use_on(target),
            "take" => self.on_take(),
            "drop" => self.on_drop(),
            other => format!("You can't {other} the {}.", self.name),
        }
    }
}

/// Kind-specific use-with behavior, resolved at dispatch time.
///
/// The default strategy always declines; keys and weapons override it. This
/// replaces deep per-item inheritance while keeping the extension point.
pub trait UseStrategy {
    /// Whether using `item` on `target` does anything specific.
    fn can_use_with(&self, item: &Item, target: &EntityRef<'_>) -> bool;

    /// The outcome of using `item` on `target`.
    fn use_with(&self, item: &Item, target: &EntityRef<'_>) -> String;
}

struct DefaultStrategy;

impl UseStrategy for DefaultStrategy {
    fn can_use_with(&self, _item: &Item, _target: &EntityRef<'_>) -> bool {
        false
    }

    fn use_with(&self, item: &Item, target: &EntityRef<'_>) -> String {
        format!("You use the {} with the {}.", item.name, target.name)
    }
}

struct KeyStrategy;

impl UseStrategy for KeyStrategy {
    fn can_use_with(&self, item: &Item, target: &EntityRef<'_>) -> bool {
        item.unlocks() == Some(target.id)
    }

    fn use_with(&self, item: &Item, target: &EntityRef<'_>) -> String {
        format!("You unlock the {} with the {}.", target.name, item.name)
    }
}

struct WeaponStrategy;

impl UseStrategy for WeaponStrategy {
    fn can_use_with(&self, item: &Item, _target: &EntityRef<'_>) -> bool {
        item.damage().is_some()
    }

    fn use_with(&self, item: &Item, target: &EntityRef<'_>) -> String {
        format!("You swing the {} at the {}.", item.name, target.name)
    }
}

/// Resolve the use-with strategy for an item kind.
fn strategy_for(kind: ItemKind) -> &'static dyn UseStrategy {
    match kind {
        ItemKind::Key => &KeyStrategy,
        ItemKind::Weapon => &WeaponStrategy,
        _ => &DefaultStrategy,
    }
}
