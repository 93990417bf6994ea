//! Turn-based game engine for the Fablewood interactive fiction engine.
//!
//! Owns the world tables and session state, parses player input, and
//! mutates the world one command at a time. Hosts drive it through a small
//! synchronous surface: load a definition, start (or restore) a session,
//! feed it command lines, and listen for narrative output and state
//! changes.

/// The game engine and command handlers.
pub mod engine;
/// Engine error types.
pub mod error;
/// Listener registration and event dispatch.
pub mod events;
/// Name matching for player-typed entity references.
mod resolve;
/// Serializable session state.
pub mod state;

pub use engine::{CommandResult, GameEngine};
pub use error::{EngineError, EngineResult};
pub use events::{EventBus, SubscriberId};
pub use state::{GameState, GameValue};
