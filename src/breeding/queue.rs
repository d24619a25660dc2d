//! Breeding queue - pending breeding attempts advanced by an external tick
//!
//! The queue exclusively owns its pending list. Expired processes are
//! collected with a partition pass and removed before the caller sees
//! them; nothing is spliced out of the list mid-iteration, so a tick can
//! never skip or double-resolve a process.

use crate::breeding::process::BreedingProcess;
use crate::core::error::{ReefError, Result};
use crate::core::types::ProcessHandle;
use crate::entity::fish::Fish;

#[derive(Debug, Clone, Default)]
pub struct BreedingQueue {
    pending: Vec<BreedingProcess>,
    /// Next handle value; handles are never reused
    next_handle: u64,
}

impl BreedingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(
        &mut self,
        parent_a: Fish,
        parent_b: Fish,
        start_ms: u64,
        total_ms: u64,
    ) -> ProcessHandle {
        let handle = ProcessHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(BreedingProcess::new(
            handle, parent_a, parent_b, start_ms, total_ms,
        ));
        handle
    }

    /// Remove a pending process before it resolves
    ///
    /// Discards the process with no other side effects; refund policy
    /// belongs to the caller. Fails for handles that are unknown or
    /// already resolved.
    pub fn cancel(&mut self, handle: ProcessHandle) -> Result<BreedingProcess> {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(idx) => Ok(self.pending.remove(idx)),
            None => Err(ReefError::ProcessNotFound(handle)),
        }
    }

    /// Advance all pending processes and pull out the ones that expired
    ///
    /// A zero-length tick changes nothing and resolves nothing.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<BreedingProcess> {
        if elapsed_ms == 0 {
            return Vec::new();
        }

        for process in &mut self.pending {
            process.advance(elapsed_ms);
        }

        let (expired, still_pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| p.is_expired());
        self.pending = still_pending;
        expired
    }

    pub fn pending(&self) -> &[BreedingProcess] {
        &self.pending
    }

    pub fn get(&self, handle: ProcessHandle) -> Option<&BreedingProcess> {
        self.pending.iter().find(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn next_handle(&self) -> u64 {
        self.next_handle
    }

    pub(crate) fn restore(pending: Vec<BreedingProcess>, next_handle: u64) -> Self {
        Self {
            pending,
            next_handle,
        }
    }
}
