//! Offspring generation - the core breeding roll
//!
//! Resolves one breeding attempt into a new fish or a failure. Failure
//! is an expected outcome, carried as a result variant; it is never an
//! error.

use rand::Rng;

use crate::catalog::combinations::CombinationTable;
use crate::catalog::species::{SpeciesCatalog, SpeciesId};
use crate::catalog::traits::TraitCatalog;
use crate::core::config::GeneticsConfig;
use crate::entity::fish::Fish;
use crate::genetics::inheritance::{
    apply_synergy_rules, inherit_traits, roll_mutation, SynergyRule,
};

/// Result of one resolved breeding attempt
#[derive(Debug, Clone)]
pub enum BreedingOutcome {
    /// A new fish was produced
    Offspring(Fish),
    /// The pairing rolled failure; the attempt cost is not refunded
    Failed,
}

impl BreedingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BreedingOutcome::Offspring(_))
    }
}

/// Resolve one breeding attempt between two parents
///
/// Species selection: a combination rule wins deterministically;
/// otherwise a small chance injects an uncommon-tier draw, else the
/// offspring takes one parent's species uniformly. Traits come from
/// inheritance, then synergy rules, then a single mutation roll scaled
/// by the offspring species' rarity.
pub fn generate_offspring<R: Rng>(
    a: &Fish,
    b: &Fish,
    species: &SpeciesCatalog,
    traits: &TraitCatalog,
    combos: &CombinationTable,
    synergies: &[SynergyRule],
    config: &GeneticsConfig,
    rng: &mut R,
) -> BreedingOutcome {
    let success_p =
        crate::genetics::compatibility::breeding_success_probability(a, b, species, config);
    if rng.gen::<f64>() >= success_p {
        tracing::debug!("breeding failed: {} x {}", a.species, b.species);
        return BreedingOutcome::Failed;
    }

    let offspring_species = select_species(a, b, species, combos, config, rng);

    let mut trait_set = inherit_traits(
        &a.traits,
        &b.traits,
        config.trait_inheritance_chance,
        rng,
    );
    trait_set = apply_synergy_rules(trait_set, synergies, rng);

    let strength_mult = species.strength_of(&offspring_species);
    if let Some(mutated) = roll_mutation(
        config.mutation_chance,
        strength_mult,
        config.magical_unlock_strength,
        traits,
        rng,
    ) {
        tracing::debug!("mutation: offspring gained {}", mutated);
        trait_set.insert(mutated);
    }

    let generation = a.generation.max(b.generation) + 1;
    BreedingOutcome::Offspring(Fish::offspring(
        offspring_species,
        trait_set,
        (a.id, b.id),
        generation,
    ))
}

fn select_species<R: Rng>(
    a: &Fish,
    b: &Fish,
    species: &SpeciesCatalog,
    combos: &CombinationTable,
    config: &GeneticsConfig,
    rng: &mut R,
) -> SpeciesId {
    if let Some(child) = combos.lookup(&a.species, &b.species) {
        return child.clone();
    }

    if rng.gen::<f64>() < config.uncommon_injection_chance {
        // Deliberate rarity injection; an uncommon-less catalog falls
        // back to the designated default species.
        return species
            .draw_random(Some(crate::catalog::rarity::Rarity::Uncommon), rng)
            .unwrap_or_else(|_| species.fallback_species())
            .id
            .clone();
    }

    if rng.gen::<f64>() < 0.5 {
        a.species.clone()
    } else {
        b.species.clone()
    }
}
