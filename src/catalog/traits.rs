//! Trait catalog - inheritable and mutable fish traits
//!
//! Each trait carries a rarity weight in (0,1] (smaller = rarer) and an
//! effect descriptor consumed by presentation and value-calculation
//! callers. Ids without a catalog entry (legacy saves, species innate
//! flavor traits) resolve to documented defaults rather than failing.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use ahash::AHashMap;

use crate::entity::fish::Fish;

/// Fallback rarity weight for traits without a catalog entry
pub const DEFAULT_TRAIT_WEIGHT: f64 = 0.5;

/// Fallback effect descriptor for traits without a catalog entry
pub const DEFAULT_TRAIT_EFFECT: &str = "Special trait";

/// Unique key of a trait
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TraitId(pub String);

impl TraitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait grouping used to build mutation pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Size,
    Color,
    Behavior,
    Magical,
}

/// One catalog entry, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDef {
    pub id: TraitId,
    pub category: TraitCategory,
    /// Rarity weight in (0,1]; smaller values are drawn less often
    pub rarity_weight: f64,
    /// Opaque to the engine; presentation layer renders it
    pub effect: String,
}

#[derive(Debug, Deserialize)]
struct TraitFile {
    traits: Vec<TraitDef>,
}

/// Immutable trait registry
///
/// Insertion order is preserved so mutation pools are deterministic
/// under a fixed seed.
#[derive(Debug, Clone)]
pub struct TraitCatalog {
    by_id: AHashMap<TraitId, TraitDef>,
    order: Vec<TraitId>,
}

impl TraitCatalog {
    pub fn new(defs: Vec<TraitDef>) -> Self {
        let order: Vec<TraitId> = defs.iter().map(|d| d.id.clone()).collect();
        let by_id = defs.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self { by_id, order }
    }

    pub fn from_toml_str(content: &str) -> crate::core::Result<Self> {
        let file: TraitFile = toml::from_str(content)?;
        Ok(Self::new(file.traits))
    }

    pub fn get(&self, id: &TraitId) -> Option<&TraitDef> {
        self.by_id.get(id)
    }

    /// Hard lookup for callers that must reject unregistered ids
    /// (catalog editors, save validators); gameplay paths use the
    /// soft-degrading accessors below instead
    pub fn require(&self, id: &TraitId) -> crate::core::Result<&TraitDef> {
        self.by_id
            .get(id)
            .ok_or_else(|| crate::core::ReefError::UnknownTrait(id.to_string()))
    }

    /// Rarity weight, degrading to [`DEFAULT_TRAIT_WEIGHT`] for ids
    /// referenced by legacy data but absent from the catalog
    pub fn rarity_weight(&self, id: &TraitId) -> f64 {
        match self.by_id.get(id) {
            Some(def) => def.rarity_weight,
            None => {
                tracing::debug!("trait {} not in catalog, using default weight", id);
                DEFAULT_TRAIT_WEIGHT
            }
        }
    }

    /// Effect descriptor, degrading to a generic description
    pub fn effect(&self, id: &TraitId) -> &str {
        self.by_id
            .get(id)
            .map(|def| def.effect.as_str())
            .unwrap_or(DEFAULT_TRAIT_EFFECT)
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &TraitDef> {
        self.order.iter().map(|id| &self.by_id[id])
    }

    /// All traits whose category is in the given pool, in catalog order
    pub fn pool(&self, categories: &[TraitCategory]) -> Vec<&TraitDef> {
        self.iter()
            .filter(|d| categories.contains(&d.category))
            .collect()
    }

    /// The standard trait database
    pub fn standard() -> Self {
        let def = |id: &str, category: TraitCategory, rarity_weight: f64, effect: &str| TraitDef {
            id: TraitId::new(id),
            category,
            rarity_weight,
            effect: effect.to_string(),
        };

        Self::new(vec![
            // Size
            def("tiny", TraitCategory::Size, 0.1, "Moves faster, needs less food"),
            def("small", TraitCategory::Size, 0.3, "Slightly faster movement"),
            def("large", TraitCategory::Size, 0.2, "Slower but more impressive"),
            def("giant", TraitCategory::Size, 0.05, "Very slow but highly valuable"),
            // Color
            def("shiny", TraitCategory::Color, 0.05, "Attracts collectors, +50% value"),
            def("rainbow", TraitCategory::Color, 0.02, "Multiple colors, +100% value"),
            def(
                "translucent",
                TraitCategory::Color,
                0.08,
                "Semi-transparent, unique look",
            ),
            def(
                "glowing",
                TraitCategory::Color,
                0.03,
                "Bioluminescent, attracts mates",
            ),
            // Behavior
            def(
                "aggressive",
                TraitCategory::Behavior,
                0.15,
                "Territorial, breeds less often",
            ),
            def("peaceful", TraitCategory::Behavior, 0.4, "Gets along with others"),
            def(
                "playful",
                TraitCategory::Behavior,
                0.25,
                "More active, attracts visitors",
            ),
            def("wise", TraitCategory::Behavior, 0.1, "Lives longer, teaches others"),
            // Magical
            def(
                "mystical",
                TraitCategory::Magical,
                0.01,
                "Enhances breeding success",
            ),
            def(
                "ancient",
                TraitCategory::Magical,
                0.005,
                "Immune to disease, very long-lived",
            ),
            def("blessed", TraitCategory::Magical, 0.008, "Brings good luck to tank"),
            def(
                "cursed",
                TraitCategory::Magical,
                0.003,
                "Brings challenges but rare offspring",
            ),
            // Synergy-only traits, never drawn by mutation pools directly
            def("majestic", TraitCategory::Color, 0.04, "Radiant presence, +80% value"),
            def(
                "legendary_bloodline",
                TraitCategory::Magical,
                0.01,
                "Carries the blood of legends",
            ),
        ])
    }
}

/// Aggregate gameplay effect of a trait set
///
/// Consumed by the economy and tank-simulation callers; the engine only
/// computes it, never applies it.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitEffects {
    pub value_multiplier: f64,
    pub breeding_success_bonus: f64,
    pub movement_speed: f64,
    pub happiness_delta: f64,
    pub special_effects: Vec<String>,
}

impl Default for TraitEffects {
    fn default() -> Self {
        Self {
            value_multiplier: 1.0,
            breeding_success_bonus: 0.0,
            movement_speed: 1.0,
            happiness_delta: 0.0,
            special_effects: Vec::new(),
        }
    }
}

impl TraitEffects {
    /// Fold a trait set into its aggregate effects
    pub fn from_traits(traits: &AHashSet<TraitId>) -> Self {
        let mut effects = Self::default();

        // Stable order so the special-effects list is reproducible
        let mut ordered: Vec<&TraitId> = traits.iter().collect();
        ordered.sort();

        for id in ordered {
            match id.as_str() {
                "shiny" => {
                    effects.value_multiplier *= 1.5;
                    effects.special_effects.push("attracts_collectors".into());
                }
                "rainbow" => {
                    effects.value_multiplier *= 2.0;
                    effects.special_effects.push("rainbow_effect".into());
                }
                "large" => {
                    effects.value_multiplier *= 1.3;
                    effects.movement_speed *= 0.8;
                }
                "small" => {
                    effects.movement_speed *= 1.2;
                    effects.value_multiplier *= 0.8;
                }
                "mystical" => {
                    effects.breeding_success_bonus += 0.2;
                    effects.special_effects.push("breeding_enhancement".into());
                }
                "peaceful" => effects.happiness_delta += 10.0,
                "aggressive" => {
                    effects.breeding_success_bonus -= 0.1;
                    effects.happiness_delta -= 5.0;
                }
                "ancient" => {
                    effects.value_multiplier *= 3.0;
                    effects.special_effects.push("immunity".into());
                }
                "blessed" => {
                    effects.special_effects.push("luck_bonus".into());
                    effects.happiness_delta += 20.0;
                }
                _ => {}
            }
        }

        effects
    }
}

/// Economic value of a fish: base species value scaled by trait effects
/// and a 10% bonus per generation
pub fn genetic_value(fish: &Fish, species: &crate::catalog::species::SpeciesCatalog) -> u64 {
    let base_value = match species.get(&fish.species) {
        Ok(def) => def.base_value as f64,
        Err(_) => {
            tracing::warn!("valuing fish of unknown species {}", fish.species);
            0.0
        }
    };
    let effects = TraitEffects::from_traits(&fish.traits);
    let generation_bonus = 1.0 + fish.generation as f64 * 0.1;
    (base_value * effects.value_multiplier * generation_bonus).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::species::{SpeciesCatalog, SpeciesId};

    #[test]
    fn test_known_trait_lookup() {
        let catalog = TraitCatalog::standard();
        let shiny = TraitId::new("shiny");
        assert_eq!(catalog.rarity_weight(&shiny), 0.05);
        assert_eq!(catalog.effect(&shiny), "Attracts collectors, +50% value");
    }

    #[test]
    fn test_require_rejects_unregistered() {
        let catalog = TraitCatalog::standard();
        assert!(catalog.require(&TraitId::new("shiny")).is_ok());
        assert!(matches!(
            catalog.require(&TraitId::new("orange")),
            Err(crate::core::ReefError::UnknownTrait(_))
        ));
    }

    #[test]
    fn test_legacy_trait_defaults() {
        let catalog = TraitCatalog::standard();
        // Species innate flavor traits are deliberately uncatalogued
        let orange = TraitId::new("orange");
        assert_eq!(catalog.rarity_weight(&orange), DEFAULT_TRAIT_WEIGHT);
        assert_eq!(catalog.effect(&orange), DEFAULT_TRAIT_EFFECT);
    }

    #[test]
    fn test_toml_trait_catalog() {
        let toml_src = r#"
            [[traits]]
            id = "iridescent"
            category = "color"
            rarity_weight = 0.07
            effect = "Shifts color under light"
        "#;
        let catalog = TraitCatalog::from_toml_str(toml_src).unwrap();
        assert_eq!(catalog.rarity_weight(&TraitId::new("iridescent")), 0.07);
        assert_eq!(
            catalog.get(&TraitId::new("iridescent")).unwrap().category,
            TraitCategory::Color
        );
    }

    #[test]
    fn test_pool_respects_categories() {
        let catalog = TraitCatalog::standard();
        let mundane = catalog.pool(&[
            TraitCategory::Size,
            TraitCategory::Color,
            TraitCategory::Behavior,
        ]);
        assert!(mundane.iter().all(|d| d.category != TraitCategory::Magical));

        let magical = catalog.pool(&[TraitCategory::Magical]);
        assert!(magical.iter().any(|d| d.id.as_str() == "mystical"));
    }

    #[test]
    fn test_trait_effects_composition() {
        let mut traits = AHashSet::new();
        traits.insert(TraitId::new("shiny"));
        traits.insert(TraitId::new("large"));
        let effects = TraitEffects::from_traits(&traits);
        assert!((effects.value_multiplier - 1.5 * 1.3).abs() < 1e-9);
        assert!((effects.movement_speed - 0.8).abs() < 1e-9);
        assert_eq!(effects.special_effects, vec!["attracts_collectors"]);
    }

    #[test]
    fn test_genetic_value_generation_bonus() {
        let species = SpeciesCatalog::standard();
        let goldfish = species.get(&SpeciesId::new("goldfish")).unwrap();
        let mut fish = Fish::purchased(goldfish);
        fish.traits.clear();
        // generation 1, no trait multipliers: 20 * 1.1 = 22
        assert_eq!(genetic_value(&fish, &species), 22);
    }
}
