//! Lexicon-based part-of-speech tagging.
//!
//! Classifies the words of an expanded input line into verbs, nouns, and
//! adjectives. Classification is lexicon-driven: words in the verb synonym
//! tables are verbs, words in a small adjective lexicon are adjectives,
//! articles and prepositions are function words, and everything else
//! (including direction words) is treated as a noun.

use crate::vocabulary;

/// Descriptive words recognized as adjectives.
///
/// A deliberately small lexicon covering the qualifiers world authors
/// typically put in item names ("brass key", "rusty sword").
const ADJECTIVES: &[&str] = &[
    "ancient", "brass", "broken", "copper", "dark", "dusty", "golden", "heavy", "iron", "large",
    "little", "old", "rusty", "shiny", "silver", "small", "stone", "tall", "tiny", "wooden",
];

/// Words of an input line grouped by part of speech, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedWords {
    /// Words recognized as verbs.
    pub verbs: Vec<String>,
    /// Words treated as nouns.
    pub nouns: Vec<String>,
    /// Words recognized as adjectives.
    pub adjectives: Vec<String>,
}

/// Tag the words of an (already lowercased and expanded) input line.
pub fn tag(input: &str) -> TaggedWords {
    let mut tagged = TaggedWords::default();

    for word in input.split_whitespace() {
        if vocabulary::is_article(word) || vocabulary::is_preposition(word) {
            continue;
        }
        if vocabulary::is_verb(word) {
            tagged.verbs.push(word.to_string());
        } else if ADJECTIVES.contains(&word) {
            tagged.adjectives.push(word.to_string());
        } else {
            tagged.nouns.push(word.to_string());
        }
    }

    tagged
}
