//! The structured command produced by parsing.

/// The verb used when no recognizable verb was found.
pub const UNKNOWN_VERB: &str = "unknown";

/// A parsed player command.
///
/// The verb is always present (possibly empty for blank input, or
/// [`UNKNOWN_VERB`] when nothing was recognized); the other slots are
/// filled when the input provides them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    /// Canonical verb ("go", "take", ...).
    pub verb: String,
    /// Direct object, if any.
    pub object: Option<String>,
    /// Preposition linking object and indirect object, if any.
    pub preposition: Option<String>,
    /// Indirect object, if any.
    pub indirect_object: Option<String>,
}

impl Command {
    /// A command with only a verb.
    pub fn bare(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    /// A command with a verb and direct object.
    pub fn with_object(verb: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            object: Some(object.into()),
            ..Self::default()
        }
    }

    /// Whether the input was empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }
}
