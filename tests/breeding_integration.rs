//! Integration tests for the full breeding lifecycle
//!
//! These drive the engine facade the way a game loop would:
//! enqueue a pair, tick until resolution, inspect the outcome.

use reefkeeper::breeding::BreedingEngine;
use reefkeeper::catalog::species::SpeciesId;
use reefkeeper::catalog::Rarity;
use reefkeeper::core::config::GeneticsConfig;
use reefkeeper::core::error::ReefError;
use reefkeeper::entity::fish::Fish;
use reefkeeper::genetics::BreedingOutcome;

fn buy(engine: &BreedingEngine, id: &str) -> Fish {
    Fish::purchased(engine.species_catalog().get(&SpeciesId::new(id)).unwrap())
}

/// Tick in one-second steps until something resolves or patience runs out
fn breed_to_completion(
    engine: &mut BreedingEngine,
    a: &Fish,
    b: &Fish,
) -> BreedingOutcome {
    engine.enqueue(a, b, 1.0).expect("pair must be compatible");
    for _ in 0..100_000 {
        let mut resolved = engine.tick(1000);
        if let Some((_, outcome)) = resolved.pop() {
            return outcome;
        }
    }
    panic!("breeding never resolved");
}

#[test]
fn test_two_goldfish_deterministic_lineage() {
    // Same seed twice: identical outcome, species and trait set
    let run = |seed: u64| {
        let mut engine = BreedingEngine::standard(seed);
        let a = buy(&engine, "goldfish");
        let b = buy(&engine, "goldfish");
        let outcome = breed_to_completion(&mut engine, &a, &b);
        (a, b, outcome)
    };

    let (_, _, first) = run(77);
    let (_, _, second) = run(77);

    match (first, second) {
        (BreedingOutcome::Offspring(x), BreedingOutcome::Offspring(y)) => {
            assert_eq!(x.species, y.species);
            assert_eq!(x.traits, y.traits);
            assert_eq!(x.generation, y.generation);
        }
        (BreedingOutcome::Failed, BreedingOutcome::Failed) => {}
        _ => panic!("same seed produced diverging outcomes"),
    }
}

#[test]
fn test_offspring_invariants_across_seeds() {
    for seed in 0..30 {
        let mut engine = BreedingEngine::standard(seed);
        let mut a = buy(&engine, "goldfish");
        let mut b = buy(&engine, "clownfish");
        a.generation = 3;
        b.generation = 7;

        if let BreedingOutcome::Offspring(child) = breed_to_completion(&mut engine, &a, &b) {
            assert_eq!(
                child.generation, 8,
                "generation must be max(parents) + 1"
            );
            assert_eq!(child.parents, Some((a.id, b.id)));
            assert_eq!(child.happiness, 100.0);
            // Set semantics: sorted trait ids must be strictly increasing
            let ordered = child.ordered_traits();
            for pair in ordered.windows(2) {
                assert!(pair[0] < pair[1], "duplicate trait in offspring");
            }
        }
    }
}

#[test]
fn test_common_mythical_pair_rejected_without_rule() {
    let mut engine = BreedingEngine::standard(5);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "leviathan");

    assert!(!engine.can_breed(&a, &b), "rarity gap 99 must block breeding");
    match engine.enqueue(&a, &b, 1.0) {
        Err(ReefError::IncompatiblePair(x, y)) => {
            assert_eq!((x, y), (a.id, b.id));
        }
        other => panic!("expected IncompatiblePair, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_combination_rule_bridges_rarity_gap() {
    // koi_dragon (legendary, 50) x phoenix_fish (legendary, 50) is the
    // ladder pair for leviathan; check both argument orders resolve to it
    let engine = BreedingEngine::standard(5);
    let a = buy(&engine, "koi_dragon");
    let b = buy(&engine, "phoenix_fish");

    assert!(engine.can_breed(&a, &b));
    assert!(engine.can_breed(&b, &a));

    for seed in 0..40 {
        let mut engine = BreedingEngine::standard(seed);
        let outcome = breed_to_completion(&mut engine, &b, &a);
        if let BreedingOutcome::Offspring(child) = outcome {
            let rarity = engine
                .species_catalog()
                .get(&child.species)
                .unwrap()
                .rarity;
            // Combination child is mythical leviathan; upgrade is a no-op
            // at the top tier, so the species can only be the rule result
            assert_eq!(child.species.as_str(), "leviathan");
            assert_eq!(rarity, Rarity::Mythical);
            return;
        }
    }
    panic!("no successful combination breeding in 40 seeds");
}

#[test]
fn test_forced_rarity_upgrade_moves_one_tier_up() {
    // Force every roll: guaranteed success, guaranteed upgrade
    let mut config = GeneticsConfig::default();
    config.base_success_rate = 1.0;
    config.max_success_rate = 1.0;
    config.base_upgrade_chance = 1.0;
    config.max_upgrade_chance = 1.0;
    config.uncommon_injection_chance = 0.0;

    let mut engine = BreedingEngine::new(
        reefkeeper::catalog::SpeciesCatalog::standard(),
        reefkeeper::catalog::TraitCatalog::standard(),
        reefkeeper::catalog::CombinationTable::standard(),
        config,
        9,
    );
    let a = buy(&engine, "betta");
    let b = buy(&engine, "betta");

    match breed_to_completion(&mut engine, &a, &b) {
        BreedingOutcome::Offspring(child) => {
            let rarity = engine
                .species_catalog()
                .get(&child.species)
                .unwrap()
                .rarity;
            assert_eq!(
                rarity,
                Rarity::Uncommon,
                "common offspring must upgrade exactly one tier"
            );
        }
        BreedingOutcome::Failed => panic!("forced success cannot fail"),
    }
}

#[test]
fn test_success_preview_matches_canonical_formula() {
    let engine = BreedingEngine::standard(1);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "seahorse");
    // 0.7 + 0.01 * (1 + 8) = 0.79
    let p = engine.success_probability(&a, &b);
    assert!((p - 0.79).abs() < 1e-9, "preview must use the one formula");
}
