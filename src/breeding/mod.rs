pub mod engine;
pub mod persistence;
pub mod process;
pub mod queue;

pub use engine::BreedingEngine;
pub use persistence::QueueSnapshot;
pub use process::BreedingProcess;
pub use queue::BreedingQueue;
