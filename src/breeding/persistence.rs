//! Queue snapshot - the engine's contribution to a larger game save
//!
//! Round-trips the pending process list exactly, including partially
//! elapsed timers; deserializing must not drift any remaining time.

use serde::{Deserialize, Serialize};

use crate::breeding::process::BreedingProcess;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Engine clock at snapshot time, in milliseconds
    pub now_ms: u64,
    /// Handle counter, preserved so restored queues never reuse handles
    pub next_handle: u64,
    pub pending: Vec<BreedingProcess>,
}

impl QueueSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
