pub mod combinations;
pub mod rarity;
pub mod species;
pub mod traits;

pub use combinations::CombinationTable;
pub use rarity::Rarity;
pub use species::{SpeciesCatalog, SpeciesDef, SpeciesId};
pub use traits::{TraitCatalog, TraitCategory, TraitDef, TraitEffects, TraitId};
