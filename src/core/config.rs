//! Engine configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

/// Tuning constants for the genetics and breeding engine
///
/// These values have been tuned to produce good collection pacing.
/// Changing them will affect how quickly players fill the encyclopedia.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticsConfig {
    // === TRAIT INHERITANCE ===
    /// Chance for each parent trait to be passed to the offspring
    ///
    /// Rolled independently per trait occurrence; a trait carried by both
    /// parents gets two chances and collapses to one entry via set
    /// semantics.
    pub trait_inheritance_chance: f64,

    /// Base chance of a single extra mutation during offspring generation
    ///
    /// Scaled by the offspring species' rarity strength and clamped to 1.0,
    /// so mythical-tier offspring (strength 100) always mutate.
    pub mutation_chance: f64,

    /// Rarity strength at which the magical trait category unlocks
    ///
    /// Below this, mutation draws come only from the size/color/behavior
    /// pools. Rare tier (strength 8) is the first to qualify at the
    /// default of 5.
    pub magical_unlock_strength: u32,

    // === BREEDING SUCCESS ===
    /// Base probability that a compatible pairing produces offspring
    pub base_success_rate: f64,

    /// Success bonus per point of combined parent rarity strength
    ///
    /// At the default 0.01, two mythical parents (strength 100 each) push
    /// the raw rate to 2.7 before clamping; the clamp below is what keeps
    /// the roll meaningful.
    pub success_rate_per_strength: f64,

    /// Lower clamp on the success probability
    pub min_success_rate: f64,

    /// Upper clamp on the success probability
    ///
    /// Breeding is never a sure thing, even for mythical pairs.
    pub max_success_rate: f64,

    // === COMPATIBILITY ===
    /// Maximum rarity strength gap across which unrelated species breed
    ///
    /// Common (1) through rare (8) fall within the default gap of 10;
    /// epic and above only pair with their own tier or via a combination
    /// rule.
    pub compatibility_threshold: u32,

    // === RARITY UPGRADES ===
    /// Chance that offspring species is drawn from the uncommon tier
    /// instead of either parent species
    ///
    /// Deliberate rarity injection so pure-common tanks still discover
    /// new species.
    pub uncommon_injection_chance: f64,

    /// Base chance of the post-generation rarity upgrade roll
    pub base_upgrade_chance: f64,

    /// Upgrade bonus per point of combined parent rarity strength
    pub upgrade_per_strength: f64,

    /// Upgrade bonus per parent carrying the shiny trait
    pub shiny_upgrade_bonus: f64,

    /// Upgrade bonus per parent carrying the mystical trait
    pub mystical_upgrade_bonus: f64,

    /// Upper clamp on the rarity upgrade chance
    pub max_upgrade_chance: f64,

    // === BREEDING QUEUE ===
    /// Base breeding duration in milliseconds, before rarity scaling
    ///
    /// Total duration is `base * (strength_a + strength_b) / 2`, further
    /// scaled by the caller-supplied boost multiplier at enqueue time.
    pub base_breeding_ms: u64,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        Self {
            trait_inheritance_chance: 0.7,
            mutation_chance: 0.1,
            magical_unlock_strength: 5,
            base_success_rate: 0.7,
            success_rate_per_strength: 0.01,
            min_success_rate: 0.05,
            max_success_rate: 0.95,
            compatibility_threshold: 10,
            uncommon_injection_chance: 0.15,
            base_upgrade_chance: 0.05,
            upgrade_per_strength: 0.002,
            shiny_upgrade_bonus: 0.02,
            mystical_upgrade_bonus: 0.05,
            max_upgrade_chance: 0.2,
            base_breeding_ms: 60_000,
        }
    }
}
