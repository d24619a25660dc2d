//! Breeding compatibility checks and probability formulas
//!
//! All probabilities here are pure queries; the same functions back the
//! real breeding rolls and any UI preview, so the two can never diverge.

use crate::catalog::combinations::CombinationTable;
use crate::catalog::species::SpeciesCatalog;
use crate::core::config::GeneticsConfig;
use crate::entity::fish::Fish;

/// Whether two fish may breed at all
///
/// True for a shared species or a registered combination rule; otherwise
/// the parents' rarity strengths must be within the compatibility
/// threshold. Fails closed on self-pairing and on species missing from
/// the catalog.
pub fn can_breed(
    a: &Fish,
    b: &Fish,
    species: &SpeciesCatalog,
    combos: &CombinationTable,
    config: &GeneticsConfig,
) -> bool {
    if a.id == b.id {
        return false;
    }

    if a.species == b.species {
        return true;
    }

    if combos.lookup(&a.species, &b.species).is_some() {
        return true;
    }

    let (strength_a, strength_b) = match (species.get(&a.species), species.get(&b.species)) {
        (Ok(def_a), Ok(def_b)) => (def_a.rarity.strength(), def_b.rarity.strength()),
        _ => {
            tracing::warn!(
                "compatibility check with uncatalogued species {} / {}",
                a.species,
                b.species
            );
            return false;
        }
    };

    strength_a.abs_diff(strength_b) <= config.compatibility_threshold
}

/// Probability that a compatible pairing produces offspring
///
/// `base + per_strength * (strength_a + strength_b)`, clamped to the
/// configured [min, max] band. Unknown species degrade to common
/// strength rather than poisoning the roll.
pub fn breeding_success_probability(
    a: &Fish,
    b: &Fish,
    species: &SpeciesCatalog,
    config: &GeneticsConfig,
) -> f64 {
    let combined = (species.strength_of(&a.species) + species.strength_of(&b.species)) as f64;
    (config.base_success_rate + config.success_rate_per_strength * combined)
        .clamp(config.min_success_rate, config.max_success_rate)
}

/// Probability that a successful offspring is bumped one rarity tier
///
/// Base chance plus a strength term plus flat bonuses for each parent
/// carrying shiny or mystical, capped at the configured maximum.
pub fn rarity_upgrade_probability(
    a: &Fish,
    b: &Fish,
    species: &SpeciesCatalog,
    config: &GeneticsConfig,
) -> f64 {
    let combined = (species.strength_of(&a.species) + species.strength_of(&b.species)) as f64;

    let mut trait_bonus = 0.0;
    for parent in [a, b] {
        if parent.has_trait("shiny") {
            trait_bonus += config.shiny_upgrade_bonus;
        }
        if parent.has_trait("mystical") {
            trait_bonus += config.mystical_upgrade_bonus;
        }
    }

    (config.base_upgrade_chance + config.upgrade_per_strength * combined + trait_bonus)
        .min(config.max_upgrade_chance)
}
