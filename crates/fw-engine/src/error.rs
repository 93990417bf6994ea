//! Error types for the game engine.

use thiserror::Error;

use fw_content::ValidationReport;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the game engine.
///
/// These indicate lifecycle misuse by the hosting code (calling into the
/// engine before a game is loaded or a session started) or rejected
/// content. Player-input problems never surface here; they become failed
/// command results instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A lifecycle call requires a loaded game.
    #[error("no game data loaded")]
    NoGameLoaded,

    /// A call requires an active session (started or restored game).
    #[error("no active game session")]
    NoActiveSession,

    /// The player's current room id is not in the room table.
    #[error("current room '{0}' not found")]
    RoomNotFound(String),

    /// The world definition failed validation; nothing was loaded.
    #[error("game data validation failed: {0}")]
    InvalidGameData(ValidationReport),
}
