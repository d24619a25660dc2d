//! Reefkeeper - aquarium genetics and breeding simulation engine
//!
//! Pure, tick-driven core for an idle aquarium game: species and trait
//! catalogs, breeding compatibility rules, offspring generation, and a
//! timed breeding queue. Rendering, persistence beyond the queue
//! snapshot, and economy are caller concerns.

pub mod breeding;
pub mod catalog;
pub mod core;
pub mod entity;
pub mod genetics;
