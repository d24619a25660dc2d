pub mod compatibility;
pub mod inheritance;
pub mod offspring;
pub mod sampling;

pub use compatibility::{
    breeding_success_probability, can_breed, rarity_upgrade_probability,
};
pub use inheritance::{apply_synergy_rules, inherit_traits, roll_mutation, SynergyRule};
pub use offspring::{generate_offspring, BreedingOutcome};
