//! Natural-language command parser for the Fablewood interactive fiction
//! engine.
//!
//! Converts a raw text line into a structured command (verb, direct object,
//! preposition, indirect object) using synonym tables, direction
//! abbreviation expansion, and lexicon-based part-of-speech tagging.

/// The structured command produced by parsing.
pub mod command;
/// The parse pipeline.
pub mod parser;
/// Lexicon-based part-of-speech tagging.
pub mod tagger;
/// Synonym tables, directions, prepositions, and articles.
pub mod vocabulary;

pub use command::Command;
pub use parser::CommandParser;
