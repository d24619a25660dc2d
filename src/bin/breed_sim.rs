//! Headless breeding session - run a seeded engine and print outcomes
//!
//! Useful for tuning the rarity curves: breeds random compatible pairs
//! from a starter tank and reports what the queue resolves.

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use reefkeeper::breeding::BreedingEngine;
use reefkeeper::catalog::traits::genetic_value;
use reefkeeper::entity::fish::Fish;
use reefkeeper::genetics::BreedingOutcome;

#[derive(Parser, Debug)]
#[command(name = "breed_sim", about = "Seeded aquarium breeding session")]
struct Args {
    /// RNG seed for deterministic replays
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Starter fish purchased per common species
    #[arg(long, default_value_t = 2)]
    starters: u32,

    /// Breeding boost multiplier applied to every enqueue
    #[arg(long, default_value_t = 1.0)]
    boost: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!("breed_sim starting with seed {}", args.seed);

    let mut engine = BreedingEngine::standard(args.seed);
    let mut pair_rng = ChaCha8Rng::seed_from_u64(args.seed ^ 0xA17E);

    // Starter tank: a few of each common species
    let mut tank: Vec<Fish> = Vec::new();
    let starters: Vec<Fish> = engine
        .species_catalog()
        .iter()
        .filter(|def| def.rarity == reefkeeper::catalog::Rarity::Common)
        .flat_map(|def| (0..args.starters).map(move |_| Fish::purchased(def)))
        .collect();
    tank.extend(starters);
    tracing::info!("tank stocked with {} starter fish", tank.len());

    let mut successes = 0u32;
    let mut failures = 0u32;

    for _ in 0..args.ticks {
        // Keep one attempt in flight whenever a compatible pair exists
        if engine.pending().is_empty() && tank.len() >= 2 {
            let i = pair_rng.gen_range(0..tank.len());
            let j = pair_rng.gen_range(0..tank.len());
            if i != j && engine.can_breed(&tank[i], &tank[j]) {
                let p = engine.success_probability(&tank[i], &tank[j]);
                tracing::info!(
                    "pairing {} x {} ({:.0}% success)",
                    tank[i].species,
                    tank[j].species,
                    p * 100.0
                );
                if let Err(err) = engine.enqueue(&tank[i], &tank[j], args.boost) {
                    tracing::warn!("enqueue rejected: {}", err);
                }
            }
        }

        for (handle, outcome) in engine.tick(args.tick_ms) {
            match outcome {
                BreedingOutcome::Offspring(fish) => {
                    successes += 1;
                    tracing::info!(
                        "{:?}: new {} (gen {}, {} traits, value {})",
                        handle,
                        fish.species,
                        fish.generation,
                        fish.traits.len(),
                        genetic_value(&fish, engine.species_catalog())
                    );
                    tank.push(fish);
                }
                BreedingOutcome::Failed => {
                    failures += 1;
                    tracing::info!("{:?}: breeding failed", handle);
                }
            }
        }
    }

    tracing::info!(
        "session over: {} fish in tank, {} successes, {} failures",
        tank.len(),
        successes,
        failures
    );
}
