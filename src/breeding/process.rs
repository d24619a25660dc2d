//! Breeding process - one timed breeding attempt
//!
//! A process is pending until its remaining time reaches zero, at which
//! point the queue resolves it exactly once and removes it. Remaining
//! time is monotonically non-increasing.

use serde::{Deserialize, Serialize};

use crate::core::types::ProcessHandle;
use crate::entity::fish::Fish;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingProcess {
    pub handle: ProcessHandle,
    /// Snapshot of the parents at enqueue time; the engine only reads
    /// them, the live fish stay owned by the tank caller
    pub parent_a: Fish,
    pub parent_b: Fish,
    /// Engine-clock time at enqueue, in milliseconds
    pub start_ms: u64,
    pub total_ms: u64,
    pub remaining_ms: u64,
}

impl BreedingProcess {
    pub fn new(
        handle: ProcessHandle,
        parent_a: Fish,
        parent_b: Fish,
        start_ms: u64,
        total_ms: u64,
    ) -> Self {
        Self {
            handle,
            parent_a,
            parent_b,
            start_ms,
            total_ms,
            remaining_ms: total_ms,
        }
    }

    /// Completion fraction in [0, 1], for progress bars
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 1.0;
        }
        (self.total_ms - self.remaining_ms) as f64 / self.total_ms as f64
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::species::{SpeciesCatalog, SpeciesId};

    fn process(total_ms: u64) -> BreedingProcess {
        let catalog = SpeciesCatalog::standard();
        let def = catalog.get(&SpeciesId::new("goldfish")).unwrap();
        BreedingProcess::new(
            ProcessHandle(1),
            Fish::purchased(def),
            Fish::purchased(def),
            0,
            total_ms,
        )
    }

    #[test]
    fn test_advance_is_monotone_and_saturating() {
        let mut p = process(60_000);
        p.advance(20_000);
        assert_eq!(p.remaining_ms, 40_000);
        p.advance(50_000);
        assert_eq!(p.remaining_ms, 0);
        p.advance(10_000);
        assert_eq!(p.remaining_ms, 0);
    }

    #[test]
    fn test_progress_fraction() {
        let mut p = process(60_000);
        assert_eq!(p.progress(), 0.0);
        p.advance(15_000);
        assert!((p.progress() - 0.25).abs() < 1e-9);
        p.advance(45_000);
        assert_eq!(p.progress(), 1.0);
        assert!(p.is_expired());
    }
}
