//! Fact emission
//!
//! Expands extracted rows into atomic (standard, sdk, service) facts and
//! hands them to a sink.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::extractors::Extracted;

/// One applicability record. An empty `sdk` means the standard applies to
/// the service with no SDK distinction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub standard: String,
    pub sdk: String,
    pub service: String,
}

impl Fact {
    pub fn new(standard: impl Into<String>, sdk: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            standard: standard.into(),
            sdk: sdk.into(),
            service: service.into(),
        }
    }
}

/// Receiver of emitted facts, usually a deduplicating store
pub trait FactSink {
    fn append(&mut self, fact: Fact);
}

/// Keeps every fact in emission order, duplicates included
impl FactSink for Vec<Fact> {
    fn append(&mut self, fact: Fact) {
        self.push(fact);
    }
}

/// In-memory deduplicating sink with sorted iteration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FactSet {
    facts: BTreeSet<Fact>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn into_vec(self) -> Vec<Fact> {
        self.facts.into_iter().collect()
    }
}

impl FactSink for FactSet {
    fn append(&mut self, fact: Fact) {
        self.facts.insert(fact);
    }
}

/// Facts for one extracted tuple: one per SDK, or a single SDK-less fact
/// when the row names no SDK. Absent statuses expand to nothing.
pub fn expand(extracted: &Extracted) -> Vec<Fact> {
    if !extracted.status.present {
        return Vec::new();
    }

    if extracted.sdks.is_empty() {
        return vec![Fact::new(&extracted.standard, "", &extracted.service)];
    }

    extracted
        .sdks
        .iter()
        .map(|sdk| Fact::new(&extracted.standard, sdk, &extracted.service))
        .collect()
}

/// Expand a tuple and append every fact, passing each to `on_fact` first.
/// Returns the number of facts appended.
pub fn emit<S, F>(extracted: &Extracted, sink: &mut S, mut on_fact: F) -> usize
where
    S: FactSink + ?Sized,
    F: FnMut(&Fact),
{
    let facts = expand(extracted);
    let count = facts.len();
    for fact in facts {
        on_fact(&fact);
        sink.append(fact);
    }
    count
}
