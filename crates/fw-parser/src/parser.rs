//! The parse pipeline.
//!
//! Raw input is lowercased and trimmed, direction abbreviations are
//! expanded, special lexical triggers are checked, and the remainder is
//! tagged and scanned for a verb / object / preposition / indirect object
//! structure. Priority-ordered special cases keep "i" and "?" from fighting
//! with natural commands, and the token scan supplements tagging where a
//! multi-word object would otherwise be under-segmented.

use crate::command::{Command, UNKNOWN_VERB};
use crate::tagger;
use crate::vocabulary;

/// Parses raw player text into structured commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser;

impl CommandParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw input line.
    ///
    /// Empty or whitespace-only input yields an empty-verb command; input
    /// with no recognizable verb yields [`UNKNOWN_VERB`].
    pub fn parse(&self, input: &str) -> Command {
        let clean = input.trim().to_lowercase();
        if clean.is_empty() {
            return Command::default();
        }

        let expanded = vocabulary::expand_directions(&clean);

        // A lone direction is shorthand for movement.
        if vocabulary::is_direction(&expanded) {
            return Command::with_object("go", expanded);
        }

        // Special lexical triggers, in priority order.
        if clean.contains("inventory") || clean == "i" || clean == "inv" {
            return Command::bare("inventory");
        }
        if clean.contains("help") || clean == "?" {
            return Command::bare("help");
        }
        if clean.contains("quit") || clean == "q" {
            return Command::bare("quit");
        }

        let tagged = tagger::tag(&expanded);

        let mut verb = String::new();
        let mut object = String::new();
        let mut preposition = String::new();
        let mut indirect_object = String::new();

        if let Some(first) = tagged.verbs.first() {
            verb = vocabulary::normalize_verb(first);
        } else if let Some(noun) = tagged.nouns.first()
            && vocabulary::is_direction(noun)
        {
            // "north" phrased without "go".
            verb = "go".to_string();
            object = noun.clone();
        }

        // Token scan: skip up to the verb, then extract object /
        // preposition / indirect object, always skipping articles.
        let mut found_verb = false;
        let mut found_preposition = false;
        for word in expanded.split_whitespace() {
            if !found_verb && (tagged.verbs.iter().any(|v| v == word) || vocabulary::is_verb(word))
            {
                found_verb = true;
                continue;
            }

            if found_verb && !found_preposition && vocabulary::is_preposition(word) {
                preposition = word.to_string();
                found_preposition = true;
                continue;
            }

            if found_verb && !found_preposition && object.is_empty() && !vocabulary::is_article(word)
            {
                object = word.to_string();
            } else if found_preposition
                && indirect_object.is_empty()
                && !vocabulary::is_article(word)
            {
                indirect_object = word.to_string();
            }
        }

        // Compound-noun fallback ("bird cage") when the scan found nothing.
        if object.is_empty() && tagged.nouns.len() > 1 {
            object = tagged.nouns.join(" ");
        } else if object.is_empty() && !tagged.nouns.is_empty() {
            object = tagged.nouns[0].clone();
        }

        // Fold a nearby adjective into the object ("brass key").
        if !object.is_empty()
            && let Some(adjective) = tagged
                .adjectives
                .iter()
                .find(|a| expanded.contains(a.as_str()))
            && !object.contains(adjective.as_str())
        {
            object = format!("{adjective} {object}");
        }

        Command {
            verb: if verb.is_empty() {
                UNKNOWN_VERB.to_string()
            } else {
                verb
            },
            object: (!object.is_empty()).then_some(object),
            preposition: (!preposition.is_empty()).then_some(preposition),
            indirect_object: (!indirect_object.is_empty()).then_some(indirect_object),
        }
    }

    /// The command patterns documented to the player via `help`.
    pub fn available_commands(&self) -> &'static [&'static str] {
        vocabulary::help_lines()
    }
}
