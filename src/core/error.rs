use thiserror::Error;

use crate::catalog::rarity::Rarity;
use crate::core::types::{FishId, ProcessHandle};

#[derive(Error, Debug)]
pub enum ReefError {
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    #[error("No species available for rarity filter: {0:?}")]
    EmptyCatalog(Option<Rarity>),

    #[error("Fish {0:?} and {1:?} cannot breed together")]
    IncompatiblePair(FishId, FishId),

    #[error("No pending breeding process with handle {0:?}")]
    ProcessNotFound(ProcessHandle),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReefError>;
