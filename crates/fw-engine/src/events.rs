//! Listener registration and synchronous event dispatch.

use crate::state::GameState;

/// Opaque handle returned by listener registration.
///
/// Holders can only pass it back to the matching `remove_*` method; ids are
/// never reused within one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type OutputListener = Box<dyn FnMut(&str)>;
type StateListener = Box<dyn FnMut(&GameState)>;

/// Registered listeners for engine output and state-change events.
///
/// Dispatch is synchronous and in registration order; a listener that
/// panics propagates to the caller of the emitting engine method.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    output_listeners: Vec<(SubscriberId, OutputListener)>,
    state_listeners: Vec<(SubscriberId, StateListener)>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> SubscriberId {
        self.next_id += 1;
        SubscriberId(self.next_id)
    }

    /// Register a listener for narrative output lines.
    pub fn on_output<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&str) + 'static,
    {
        let id = self.next_id();
        self.output_listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove an output listener. Returns `false` for unknown handles.
    pub fn remove_output(&mut self, id: SubscriberId) -> bool {
        let before = self.output_listeners.len();
        self.output_listeners.retain(|(lid, _)| *lid != id);
        self.output_listeners.len() != before
    }

    /// Register a listener for session state changes.
    pub fn on_state_change<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = self.next_id();
        self.state_listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a state-change listener. Returns `false` for unknown handles.
    pub fn remove_state_change(&mut self, id: SubscriberId) -> bool {
        let before = self.state_listeners.len();
        self.state_listeners.retain(|(lid, _)| *lid != id);
        self.state_listeners.len() != before
    }

    /// Drop every registered listener.
    pub fn clear(&mut self) {
        self.output_listeners.clear();
        self.state_listeners.clear();
    }

    /// Deliver an output line to every output listener.
    pub fn emit_output(&mut self, message: &str) {
        for (_, listener) in &mut self.output_listeners {
            listener(message);
        }
    }

    /// Deliver a state snapshot to every state-change listener.
    pub fn emit_state_change(&mut self, state: &GameState) {
        for (_, listener) in &mut self.state_listeners {
            listener(state);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("output_listeners", &self.output_listeners.len())
            .field("state_listeners", &self.state_listeners.len())
            .finish()
    }
}
