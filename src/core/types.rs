//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for fish entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FishId(pub Uuid);

impl FishId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FishId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an in-flight breeding process
///
/// Handles are assigned sequentially per queue and are never reused,
/// so a stale handle after cancellation is detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessHandle(pub u64);

/// Game tick counter (simulation time unit)
pub type Tick = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_id_uniqueness() {
        let a = FishId::new();
        let b = FishId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_process_handle_equality() {
        let a = ProcessHandle(1);
        let b = ProcessHandle(1);
        let c = ProcessHandle(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_process_handle_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<ProcessHandle, &str> = HashMap::new();
        map.insert(ProcessHandle(7), "pending");
        assert_eq!(map.get(&ProcessHandle(7)), Some(&"pending"));
    }
}
