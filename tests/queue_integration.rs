//! Integration tests for the breeding queue lifecycle
//!
//! Timing semantics: processes resolve exactly when their remaining
//! time hits zero, in the same tick, and never twice.

use reefkeeper::breeding::BreedingEngine;
use reefkeeper::catalog::species::SpeciesId;
use reefkeeper::core::error::ReefError;
use reefkeeper::entity::fish::Fish;

fn buy(engine: &BreedingEngine, id: &str) -> Fish {
    Fish::purchased(engine.species_catalog().get(&SpeciesId::new(id)).unwrap())
}

#[test]
fn test_process_resolves_exactly_on_expiry_tick() {
    let mut engine = BreedingEngine::standard(3);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "goldfish");

    // goldfish x goldfish: 60000 * (1+1)/2 = 60000ms total
    let handle = engine.enqueue(&a, &b, 1.0).unwrap();
    assert_eq!(engine.process(handle).unwrap().total_ms, 60_000);

    // Two 20s ticks: still pending
    assert!(engine.tick(20_000).is_empty(), "resolved after 20s");
    assert!(engine.tick(20_000).is_empty(), "resolved after 40s");
    assert_eq!(engine.process(handle).unwrap().remaining_ms, 20_000);

    // Third 20s tick resolves it, synchronously
    let resolved = engine.tick(20_000);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].0, handle);
    assert!(engine.pending().is_empty());

    // And never again
    assert!(engine.tick(20_000).is_empty());
}

#[test]
fn test_zero_tick_changes_nothing() {
    let mut engine = BreedingEngine::standard(3);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "goldfish");
    let handle = engine.enqueue(&a, &b, 1.0).unwrap();

    engine.tick(30_000);
    let before = engine.process(handle).unwrap().remaining_ms;

    for _ in 0..10 {
        assert!(engine.tick(0).is_empty(), "tick(0) must resolve nothing");
    }
    assert_eq!(
        engine.process(handle).unwrap().remaining_ms,
        before,
        "tick(0) must not change remaining time"
    );
}

#[test]
fn test_duration_multiplier_scales_expiry() {
    let mut engine = BreedingEngine::standard(3);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "goldfish");

    // Purchased breeding boost: half duration
    let handle = engine.enqueue(&a, &b, 0.5).unwrap();
    assert_eq!(engine.process(handle).unwrap().total_ms, 30_000);

    assert!(engine.tick(29_999).is_empty());
    assert_eq!(engine.tick(1).len(), 1);
}

#[test]
fn test_cancel_discards_without_resolution() {
    let mut engine = BreedingEngine::standard(3);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "goldfish");
    let handle = engine.enqueue(&a, &b, 1.0).unwrap();

    engine.tick(10_000);
    engine.cancel(handle).unwrap();
    assert!(engine.pending().is_empty());

    // Running past the would-be expiry yields nothing
    assert!(engine.tick(120_000).is_empty());

    // Stale handle is a reportable error, not a panic
    assert!(matches!(
        engine.cancel(handle),
        Err(ReefError::ProcessNotFound(_))
    ));
}

#[test]
fn test_multiple_processes_in_flight() {
    let mut engine = BreedingEngine::standard(3);
    let a = buy(&engine, "goldfish");
    let b = buy(&engine, "goldfish");
    let c = buy(&engine, "seahorse");
    let d = buy(&engine, "seahorse");

    let quick = engine.enqueue(&a, &b, 1.0).unwrap(); // 60s
    let slow = engine.enqueue(&c, &d, 1.0).unwrap(); // 480s
    assert_eq!(engine.pending().len(), 2);

    let resolved = engine.tick(60_000);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].0, quick);
    assert_eq!(engine.pending().len(), 1);

    let resolved = engine.tick(420_000);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].0, slow);
    assert!(engine.pending().is_empty());
}
