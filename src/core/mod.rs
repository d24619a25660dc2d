pub mod config;
pub mod error;
pub mod types;

pub use config::GeneticsConfig;
pub use error::{ReefError, Result};
