//! Synonym tables, directions, prepositions, and articles.

/// Canonical verbs and the synonyms that map to them.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("go", &["move", "walk", "travel", "head", "run"]),
    ("take", &["get", "grab", "pick", "collect"]),
    ("drop", &["put", "place", "leave"]),
    ("look", &["examine", "inspect", "check", "view", "see"]),
    ("use", &["utilize", "employ", "apply"]),
    ("talk", &["speak", "chat", "converse"]),
    ("open", &["unlock", "unseal"]),
    ("close", &["shut", "seal", "lock"]),
    ("help", &["assist", "info", "instructions"]),
    ("inventory", &["inv", "items", "carrying"]),
];

/// Direction words, full forms and abbreviations.
const DIRECTIONS: &[&str] = &[
    "north", "south", "east", "west", "northeast", "northwest", "southeast", "southwest", "up",
    "down", "n", "s", "e", "w", "ne", "nw", "se", "sw", "u", "d",
];

/// Abbreviation -> full direction word.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
    ("u", "up"),
    ("d", "down"),
];

/// Prepositions that switch object extraction into indirect-object mode.
const PREPOSITIONS: &[&str] = &["with", "to", "on", "in", "at", "from", "using"];

/// Articles skipped during object extraction.
const ARTICLES: &[&str] = &["the", "a", "an"];

/// Whether a word is a known verb (canonical or synonym).
pub fn is_verb(word: &str) -> bool {
    SYNONYMS
        .iter()
        .any(|(canonical, synonyms)| *canonical == word || synonyms.contains(&word))
}

/// Normalize a verb through the synonym table.
///
/// Unknown words pass through unchanged.
pub fn normalize_verb(word: &str) -> String {
    let word = word.to_lowercase();
    for (canonical, synonyms) in SYNONYMS {
        if *canonical == word || synonyms.contains(&word.as_str()) {
            return (*canonical).to_string();
        }
    }
    word
}

/// Whether a word is a recognized direction (full form or abbreviation).
pub fn is_direction(word: &str) -> bool {
    DIRECTIONS.contains(&word)
}

/// Whether a word is a preposition.
pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}

/// Whether a word is an article.
pub fn is_article(word: &str) -> bool {
    ARTICLES.contains(&word)
}

/// Expand standalone direction abbreviations to their full words.
pub fn expand_directions(input: &str) -> String {
    input
        .split_whitespace()
        .map(|token| {
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == token)
                .map_or(token, |(_, full)| *full)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The command patterns shown to the player by `help`.
pub fn help_lines() -> &'static [&'static str] {
    &[
        "go [direction] - Move in a direction (north, south, east, west, etc.)",
        "look / examine [object] - Look around or examine something",
        "take / get [object] - Pick up an item",
        "drop [object] - Drop an item from inventory",
        "use [object] - Use an item",
        "talk [npc] - Talk to a character",
        "inventory / i - Show your inventory",
        "help - Show this help message",
        "quit - Exit the game",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_normalize_to_canonical() {
        assert_eq!(normalize_verb("walk"), "go");
        assert_eq!(normalize_verb("get"), "take");
        assert_eq!(normalize_verb("examine"), "look");
        assert_eq!(normalize_verb("speak"), "talk");
        assert_eq!(normalize_verb("go"), "go");
    }

    #[test]
    fn unknown_verbs_pass_through() {
        assert_eq!(normalize_verb("dance"), "dance");
    }

    #[test]
    fn directions_include_abbreviations() {
        assert!(is_direction("north"));
        assert!(is_direction("ne"));
        assert!(is_direction("u"));
        assert!(!is_direction("sideways"));
    }

    #[test]
    fn expand_standalone_abbreviations() {
        assert_eq!(expand_directions("n"), "north");
        assert_eq!(expand_directions("go n"), "go north");
        assert_eq!(expand_directions("go sw"), "go southwest");
        // Only standalone tokens are expanded.
        assert_eq!(expand_directions("drop nut"), "drop nut");
    }

    #[test]
    fn prepositions_and_articles() {
        assert!(is_preposition("with"));
        assert!(is_preposition("using"));
        assert!(!is_preposition("under"));
        assert!(is_article("the"));
        assert!(!is_article("this"));
    }
}
