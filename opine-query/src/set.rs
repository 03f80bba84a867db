//! The ordered, genus-keyed parameter collection backing every query type.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::param::{Genus, Parameter};

/// An ordered collection of query parameters with at most one entry per
/// genus.
///
/// Adding a parameter whose genus is already present never appends a
/// sibling: the entry is either replaced ([`ParameterSet::add`]) or merged
/// into the existing chain ([`ParameterSet::coalesce`]).
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    entries: IndexMap<Genus, Parameter>,
}

impl ParameterSet {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any existing entry of the same genus.
    ///
    /// Replacement is last-write-wins; re-adding a structurally identical
    /// parameter is a no-op.
    pub fn add(&mut self, param: Parameter) {
        self.insert(param, false);
    }

    /// Add a parameter, merging it into an existing entry of the same
    /// genus.
    ///
    /// The merged entry is the new parameter with the previous entry as its
    /// chain, so one genus accumulates multiple concerns under a single
    /// wire name. A parameter already present in the existing chain falls
    /// back to the [`ParameterSet::add`] rule.
    pub fn coalesce(&mut self, param: Parameter) {
        self.insert(param, true);
    }

    fn insert(&mut self, param: Parameter, coalesce: bool) {
        let genus = param.genus();
        let Some(existing) = self.entries.get(&genus) else {
            tracing::trace!(name = %genus.name, "adding parameter");
            self.entries.insert(genus, param);
            return;
        };

        if coalesce && !existing.chain_contains(&param) {
            tracing::trace!(name = %genus.name, "coalescing parameter into existing chain");
            let merged = param.chained(existing.clone());
            self.entries.insert(genus, merged);
            return;
        }

        if !param.deep_equals(existing) {
            tracing::trace!(name = %genus.name, "replacing parameter");
            self.entries.insert(genus, param);
        }
    }

    /// Number of distinct genera in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for a genus, if present.
    pub fn get(&self, genus: &Genus) -> Option<&Parameter> {
        self.entries.get(genus)
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.values()
    }

    /// Render the collection to ordered name/value pairs.
    ///
    /// Values are already wire-escaped by the parameter rendering; names
    /// are plain tokens.
    pub fn pairs(&self) -> Vec<(SmolStr, String)> {
        self.entries
            .values()
            .map(|param| (param.name(), param.value()))
            .collect()
    }

    /// Render the collection to an encoded query string.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (index, (name, value)) in self.pairs().into_iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            out.push_str(&name);
            out.push('=');
            out.push_str(&value);
        }
        out
    }
}

impl Extend<Parameter> for ParameterSet {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        for param in iter {
            self.add(param);
        }
    }
}
