//! Combination rules - fixed species-pair breeding recipes
//!
//! A combination rule maps an unordered species pair to a guaranteed
//! offspring species. Lookup is order-insensitive; the pair key is
//! normalized lexicographically at insert and query time.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::species::{SpeciesCatalog, SpeciesId};
use crate::core::error::{ReefError, Result};

/// One recipe: an unordered parent pair and its deterministic child
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationRule {
    pub parents: (SpeciesId, SpeciesId),
    pub child: SpeciesId,
}

/// Registry of combination rules with order-insensitive lookup
#[derive(Debug, Clone, Default)]
pub struct CombinationTable {
    rules: AHashMap<(SpeciesId, SpeciesId), SpeciesId>,
}

impl CombinationTable {
    pub fn new(rules: Vec<CombinationRule>) -> Self {
        let mut table = Self::default();
        for rule in rules {
            table.insert(rule.parents.0, rule.parents.1, rule.child);
        }
        table
    }

    fn key(a: SpeciesId, b: SpeciesId) -> (SpeciesId, SpeciesId) {
        if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn insert(&mut self, a: SpeciesId, b: SpeciesId, child: SpeciesId) {
        self.rules.insert(Self::key(a, b), child);
    }

    /// Result species for the pair, matching either argument order
    pub fn lookup(&self, a: &SpeciesId, b: &SpeciesId) -> Option<&SpeciesId> {
        self.rules.get(&Self::key(a.clone(), b.clone()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check every parent and child id against the species catalog
    ///
    /// Run at load time so a modded rule set referencing a missing
    /// species fails loudly instead of corrupting breeding results.
    pub fn validate(&self, catalog: &SpeciesCatalog) -> Result<()> {
        for ((a, b), child) in &self.rules {
            for id in [a, b, child] {
                if catalog.get(id).is_err() {
                    return Err(ReefError::SpeciesNotFound(id.to_string()));
                }
            }
        }
        Ok(())
    }

    /// The standard recipe ladder, common pairs up to the mythical hybrid
    pub fn standard() -> Self {
        let pairs = [
            ("goldfish", "clownfish", "guppy"),
            ("angelfish", "betta", "discus"),
            ("neon_tetra", "guppy", "mandarin"),
            ("discus", "mandarin", "arowana"),
            ("seahorse", "angelfish", "lionfish"),
            ("arowana", "lionfish", "koi_dragon"),
            ("koi_dragon", "phoenix_fish", "leviathan"),
            ("leviathan", "unicorn_fish", "cosmic_fish"),
        ];
        Self::new(
            pairs
                .iter()
                .map(|(a, b, child)| CombinationRule {
                    parents: (SpeciesId::new(*a), SpeciesId::new(*b)),
                    child: SpeciesId::new(*child),
                })
                .collect(),
        )
    }
}
