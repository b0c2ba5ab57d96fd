//! Fact and modifier definitions - the statements the store records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactId(pub Uuid);

impl FactId {
    /// Create a new random fact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its string form. Returns `None` for anything that
    /// is not a well-formed UUID; such a string can never name a stored fact.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Modifier of any sort. Usually an adpositional phrase.
///
/// The empty tag means "direct object". Neither field is validated or ever
/// mutated in place; replace the whole modifier to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    tag: String,
    value: String,
}

impl Modifier {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.tag, self.value)
        }
    }
}

/// A subject-verb-modifiers statement with a unique identity.
///
/// The id is generated once at construction and never regenerated; a fact
/// restored from storage keeps the id it was stored with. Two facts with
/// identical text but different ids are distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    subject: String,
    verb: String,
    mods: Vec<Modifier>,
    #[serde(rename = "uuid")]
    id: FactId,
}

impl Fact {
    /// Create a fact with a freshly generated id.
    pub fn new(subject: impl Into<String>, verb: impl Into<String>, mods: Vec<Modifier>) -> Self {
        Self {
            subject: subject.into(),
            verb: verb.into(),
            mods,
            id: FactId::new(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Modifiers in display order, preserved across serialization.
    pub fn mods(&self) -> &[Modifier] {
        &self.mods
    }

    pub fn id(&self) -> FactId {
        self.id
    }
}

/// Identity equality: by id only.
impl PartialEq for Fact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Fact {}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.subject, self.verb)?;
        for modifier in &self.mods {
            write!(f, " {}", modifier)?;
        }
        write!(f, ".")
    }
}
