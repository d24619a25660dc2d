//! Trait inheritance, mutation and synergy rules

use ahash::AHashSet;
use rand::Rng;

use crate::catalog::traits::{TraitCatalog, TraitCategory, TraitId};

/// Roll each parent trait into the offspring's candidate set
///
/// One independent Bernoulli trial per trait occurrence; a trait carried
/// by both parents gets two chances and collapses into one entry.
/// Parents' traits are visited in sorted order so seeded runs replay
/// identically.
pub fn inherit_traits<R: Rng>(
    parent_a: &AHashSet<TraitId>,
    parent_b: &AHashSet<TraitId>,
    inherit_chance: f64,
    rng: &mut R,
) -> AHashSet<TraitId> {
    let mut offspring = AHashSet::new();

    for parent in [parent_a, parent_b] {
        let mut ordered: Vec<&TraitId> = parent.iter().collect();
        ordered.sort();
        for trait_id in ordered {
            if rng.gen::<f64>() < inherit_chance {
                offspring.insert(trait_id.clone());
            }
        }
    }

    offspring
}

/// Single mutation trial scaled by the offspring species' rarity
///
/// Effective chance is `min(1, base_chance * strength_mult)`; a mythical
/// species (strength 100) always mutates. On success one trait is drawn
/// from the size/color/behavior pools by rarity weight, with the magical
/// pool joining once `strength_mult` reaches `magical_unlock_strength`.
pub fn roll_mutation<R: Rng>(
    base_chance: f64,
    strength_mult: u32,
    magical_unlock_strength: u32,
    traits: &TraitCatalog,
    rng: &mut R,
) -> Option<TraitId> {
    let effective_chance = (base_chance * strength_mult as f64).min(1.0);
    if rng.gen::<f64>() >= effective_chance {
        return None;
    }

    let mut categories = vec![
        TraitCategory::Size,
        TraitCategory::Color,
        TraitCategory::Behavior,
    ];
    if strength_mult >= magical_unlock_strength {
        categories.push(TraitCategory::Magical);
    }

    let pool = traits.pool(&categories);
    crate::genetics::sampling::weighted_pick(rng, &pool, |def| def.rarity_weight)
        .map(|def| def.id.clone())
}

/// A probabilistic bonus trait granted when two traits co-occur
#[derive(Debug, Clone)]
pub struct SynergyRule {
    pub required: (TraitId, TraitId),
    pub bonus: TraitId,
    pub chance: f64,
}

impl SynergyRule {
    /// The standard synergy table
    pub fn standard() -> Vec<SynergyRule> {
        vec![
            SynergyRule {
                required: (TraitId::new("shiny"), TraitId::new("large")),
                bonus: TraitId::new("majestic"),
                chance: 0.3,
            },
            SynergyRule {
                required: (TraitId::new("mystical"), TraitId::new("ancient")),
                bonus: TraitId::new("legendary_bloodline"),
                chance: 0.4,
            },
        ]
    }
}

/// Evaluate each synergy rule whose required pair is present
///
/// Rules are independent Bernoulli trials, evaluated in table order.
pub fn apply_synergy_rules<R: Rng>(
    mut traits: AHashSet<TraitId>,
    rules: &[SynergyRule],
    rng: &mut R,
) -> AHashSet<TraitId> {
    for rule in rules {
        if traits.contains(&rule.required.0) && traits.contains(&rule.required.1) {
            if rng.gen::<f64>() < rule.chance {
                tracing::debug!("synergy fired: {} from {:?}", rule.bonus, rule.required);
                traits.insert(rule.bonus.clone());
            }
        }
    }
    traits
}
