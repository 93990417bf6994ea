//! World definition loading and validation for the Fablewood interactive
//! fiction engine.
//!
//! Author-supplied world definitions arrive as JSON (camelCase field
//! names), are validated exhaustively for structural and referential
//! integrity, and are only then turned into entity-model instances. The
//! engine consumes this crate through a pass/fail + error-list contract:
//! loading is all-or-nothing.

/// Entity construction from definitions.
pub mod build;
/// Serde definition structs for world JSON.
pub mod definition;
/// The built-in sample game.
pub mod sample;
/// Referential and structural validation.
pub mod validate;

pub use definition::{GameDefinition, GameMetadata, ItemDefinition, NpcDefinition, RoomDefinition};
pub use sample::sample_game;
pub use validate::{ValidationError, ValidationReport, validate};
