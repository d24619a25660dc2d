//! Breeding engine - the facade callers talk to
//!
//! Owns the catalogs, the tuning config, a seeded random source and the
//! breeding queue. Single-threaded and tick-driven: the host loop calls
//! [`BreedingEngine::tick`] with elapsed wall time and receives every
//! outcome resolved in that tick. Currency is never touched here; the
//! caller deducts the attempt cost atomically with a successful enqueue.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::breeding::persistence::QueueSnapshot;
use crate::breeding::process::BreedingProcess;
use crate::breeding::queue::BreedingQueue;
use crate::catalog::combinations::CombinationTable;
use crate::catalog::species::SpeciesCatalog;
use crate::catalog::traits::TraitCatalog;
use crate::core::config::GeneticsConfig;
use crate::core::error::{ReefError, Result};
use crate::core::types::ProcessHandle;
use crate::entity::fish::Fish;
use crate::genetics::inheritance::SynergyRule;
use crate::genetics::offspring::BreedingOutcome;
use crate::genetics::{
    breeding_success_probability, can_breed, generate_offspring, rarity_upgrade_probability,
};

pub struct BreedingEngine {
    species: SpeciesCatalog,
    traits: TraitCatalog,
    combos: CombinationTable,
    synergies: Vec<SynergyRule>,
    config: GeneticsConfig,
    rng: ChaCha8Rng,
    queue: BreedingQueue,
    /// Accumulated tick time; the engine has no clock of its own
    now_ms: u64,
}

impl BreedingEngine {
    pub fn new(
        species: SpeciesCatalog,
        traits: TraitCatalog,
        combos: CombinationTable,
        config: GeneticsConfig,
        seed: u64,
    ) -> Self {
        Self {
            species,
            traits,
            combos,
            synergies: SynergyRule::standard(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            queue: BreedingQueue::new(),
            now_ms: 0,
        }
    }

    /// Engine over the standard catalogs and default tuning
    pub fn standard(seed: u64) -> Self {
        Self::new(
            SpeciesCatalog::standard(),
            TraitCatalog::standard(),
            CombinationTable::standard(),
            GeneticsConfig::default(),
            seed,
        )
    }

    pub fn species_catalog(&self) -> &SpeciesCatalog {
        &self.species
    }

    pub fn trait_catalog(&self) -> &TraitCatalog {
        &self.traits
    }

    pub fn config(&self) -> &GeneticsConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    // === Pure queries, usable for UI previews ===

    pub fn can_breed(&self, a: &Fish, b: &Fish) -> bool {
        can_breed(a, b, &self.species, &self.combos, &self.config)
    }

    /// Canonical success probability; the preview and the real roll use
    /// this one formula
    pub fn success_probability(&self, a: &Fish, b: &Fish) -> f64 {
        breeding_success_probability(a, b, &self.species, &self.config)
    }

    pub fn upgrade_probability(&self, a: &Fish, b: &Fish) -> f64 {
        rarity_upgrade_probability(a, b, &self.species, &self.config)
    }

    /// Total breeding duration: base scaled by mean parent strength and
    /// the caller-supplied boost multiplier
    pub fn breeding_duration_ms(&self, a: &Fish, b: &Fish, duration_multiplier: f64) -> u64 {
        let combined = (self.species.strength_of(&a.species)
            + self.species.strength_of(&b.species)) as f64;
        let unboosted = self.config.base_breeding_ms as f64 * combined / 2.0;
        (unboosted * duration_multiplier).round() as u64
    }

    // === Queue lifecycle ===

    /// Start a timed breeding attempt
    ///
    /// Validates compatibility before the caller commits any currency.
    /// The parents are snapshotted; later mutations to the live fish by
    /// the tank simulation do not affect the attempt.
    pub fn enqueue(
        &mut self,
        a: &Fish,
        b: &Fish,
        duration_multiplier: f64,
    ) -> Result<ProcessHandle> {
        if !self.can_breed(a, b) {
            return Err(ReefError::IncompatiblePair(a.id, b.id));
        }

        let total_ms = self.breeding_duration_ms(a, b, duration_multiplier);
        let handle = self
            .queue
            .enqueue(a.clone(), b.clone(), self.now_ms, total_ms);
        tracing::debug!(
            "breeding enqueued: {} x {} for {}ms (handle {:?})",
            a.species,
            b.species,
            total_ms,
            handle
        );
        Ok(handle)
    }

    /// Cancel a pending attempt; refund policy is the caller's
    pub fn cancel(&mut self, handle: ProcessHandle) -> Result<()> {
        let process = self.queue.cancel(handle)?;
        tracing::debug!(
            "breeding cancelled: {} x {} (handle {:?})",
            process.parent_a.species,
            process.parent_b.species,
            handle
        );
        Ok(())
    }

    pub fn pending(&self) -> &[BreedingProcess] {
        self.queue.pending()
    }

    pub fn process(&self, handle: ProcessHandle) -> Option<&BreedingProcess> {
        self.queue.get(handle)
    }

    /// Advance the engine by elapsed wall time
    ///
    /// Every process that expires in this tick is resolved exactly once
    /// and handed back with its outcome; no further polling is needed.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<(ProcessHandle, BreedingOutcome)> {
        self.now_ms += elapsed_ms;
        let expired = self.queue.advance(elapsed_ms);

        let mut results = Vec::with_capacity(expired.len());
        for process in expired {
            let outcome = self.resolve(&process);
            results.push((process.handle, outcome));
        }
        results
    }

    fn resolve(&mut self, process: &BreedingProcess) -> BreedingOutcome {
        let outcome = generate_offspring(
            &process.parent_a,
            &process.parent_b,
            &self.species,
            &self.traits,
            &self.combos,
            &self.synergies,
            &self.config,
            &mut self.rng,
        );

        match outcome {
            BreedingOutcome::Offspring(fish) => {
                let fish = self.maybe_upgrade_rarity(&process.parent_a, &process.parent_b, fish);
                tracing::info!(
                    "breeding resolved: {} x {} -> {} (gen {})",
                    process.parent_a.species,
                    process.parent_b.species,
                    fish.species,
                    fish.generation
                );
                BreedingOutcome::Offspring(fish)
            }
            BreedingOutcome::Failed => {
                tracing::info!(
                    "breeding resolved: {} x {} -> failure",
                    process.parent_a.species,
                    process.parent_b.species
                );
                BreedingOutcome::Failed
            }
        }
    }

    /// Post-generation rarity upgrade roll
    ///
    /// Traits were already generated against the pre-upgrade species;
    /// only the species is replaced. No-op at the top tier or when the
    /// next tier has no members.
    fn maybe_upgrade_rarity(&mut self, parent_a: &Fish, parent_b: &Fish, mut fish: Fish) -> Fish {
        let upgrade_p = rarity_upgrade_probability(parent_a, parent_b, &self.species, &self.config);
        if self.rng.gen::<f64>() >= upgrade_p {
            return fish;
        }

        let current = match self.species.get(&fish.species) {
            Ok(def) => def.rarity,
            Err(_) => return fish,
        };
        let Some(next_tier) = current.next_tier() else {
            return fish;
        };

        match self.species.draw_random(Some(next_tier), &mut self.rng) {
            Ok(upgraded) => {
                tracing::info!(
                    "rarity upgrade: {} -> {} ({:?})",
                    fish.species,
                    upgraded.id,
                    next_tier
                );
                fish.species = upgraded.id.clone();
                fish
            }
            // Empty next tier: keep the generated species
            Err(_) => fish,
        }
    }

    // === Persistence ===

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            now_ms: self.now_ms,
            next_handle: self.queue.next_handle(),
            pending: self.queue.pending().to_vec(),
        }
    }

    pub fn restore(&mut self, snapshot: QueueSnapshot) {
        self.now_ms = snapshot.now_ms;
        self.queue = BreedingQueue::restore(snapshot.pending, snapshot.next_handle);
    }
}
