//! Fish entity - the unit the genetics engine operates on
//!
//! Fish are created by a purchase or by the offspring generator; the
//! engine never mutates one after creation. Position, happiness decay
//! and removal are owned by the tank-simulation caller.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::species::{SpeciesDef, SpeciesId};
use crate::catalog::traits::TraitId;
use crate::core::types::FishId;

/// Default happiness for newly created fish
pub const DEFAULT_HAPPINESS: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    pub species: SpeciesId,
    pub traits: AHashSet<TraitId>,
    /// 1 for shop-purchased fish, `max(parent generations) + 1` for bred
    pub generation: u32,
    /// Ordered parent pair; `None` for non-bred fish
    pub parents: Option<(FishId, FishId)>,
    /// In [0, 100]; mutated only by the tank-simulation caller
    pub happiness: f32,
}

impl Fish {
    /// A shop-purchased fish: generation 1, species innate traits,
    /// no parents
    pub fn purchased(def: &SpeciesDef) -> Self {
        Self {
            id: FishId::new(),
            species: def.id.clone(),
            traits: def.innate_traits.iter().cloned().collect(),
            generation: 1,
            parents: None,
            happiness: DEFAULT_HAPPINESS,
        }
    }

    /// A bred fish produced by the offspring generator
    pub fn offspring(
        species: SpeciesId,
        traits: AHashSet<TraitId>,
        parents: (FishId, FishId),
        generation: u32,
    ) -> Self {
        Self {
            id: FishId::new(),
            species,
            traits,
            generation,
            parents: Some(parents),
            happiness: DEFAULT_HAPPINESS,
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.as_str() == name)
    }

    /// Trait ids in stable sorted order, for deterministic iteration
    pub fn ordered_traits(&self) -> Vec<&TraitId> {
        let mut ordered: Vec<&TraitId> = self.traits.iter().collect();
        ordered.sort();
        ordered
    }
}
