//! The ordered fact collection and its JSON round-trip.

use crate::error::{Error, Result};
use crate::fact::{Fact, FactId, Modifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered collection of all facts in memory.
///
/// Insertion order is display order. Removal keeps the survivors' order
/// stable. Ids are unique within the store at all times; duplicates of
/// subject/verb/modifier text are permitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    pub fn new() -> Self {
        Self { facts: Vec::new() }
    }

    /// Append a fact with a freshly generated id and return that id.
    /// No duplicate detection: the same statement may be recorded twice.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        verb: impl Into<String>,
        mods: Vec<Modifier>,
    ) -> FactId {
        let fact = Fact::new(subject, verb, mods);
        let id = fact.id();
        self.facts.push(fact);
        id
    }

    /// Remove the first fact whose id matches. An unknown id is a silent
    /// no-op, never an error: removing an already-removed fact must not
    /// fail the caller's request.
    pub fn remove(&mut self, id: &FactId) {
        if let Some(index) = self.facts.iter().position(|fact| fact.id() == *id) {
            self.facts.remove(index);
        }
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Serialize to the wire form: a JSON array of fact records in store order.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.facts).map_err(|err| Error::internal(err.to_string()))
    }

    /// Parse a store from its wire form.
    ///
    /// Any element that fails to parse rejects the whole batch with
    /// `MalformedRecord`; there are no partial stores. A batch carrying the
    /// same id twice is rejected the same way.
    pub fn from_json(data: &str) -> Result<Self> {
        let facts: Vec<Fact> =
            serde_json::from_str(data).map_err(|err| Error::malformed(err.to_string()))?;

        let mut seen = HashSet::new();
        for fact in &facts {
            if !seen.insert(fact.id()) {
                return Err(Error::malformed(format!("duplicate fact id {}", fact.id())));
            }
        }

        Ok(Self { facts })
    }

    /// Plain-text rendering: one fact per line, in store order.
    pub fn render_text(&self) -> String {
        self.facts
            .iter()
            .map(|fact| fact.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
