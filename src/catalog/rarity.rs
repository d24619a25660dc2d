//! Rarity tiers - the total order underpinning the whole economy
//!
//! Strength values feed compatibility distance, success-rate scaling and
//! breeding durations. Population weights drive random species draws and
//! sum to 1 across all tiers.

use serde::{Deserialize, Serialize};

/// Rarity tier for species and draws
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythical = 5,
}

impl Rarity {
    /// All tiers in ascending order
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Numeric strength used in breeding arithmetic (not a probability)
    pub fn strength(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 3,
            Rarity::Rare => 8,
            Rarity::Epic => 20,
            Rarity::Legendary => 50,
            Rarity::Mythical => 100,
        }
    }

    /// Probability mass this tier gets in a population draw
    pub fn population_weight(self) -> f64 {
        match self {
            Rarity::Common => 0.6,
            Rarity::Uncommon => 0.25,
            Rarity::Rare => 0.1,
            Rarity::Epic => 0.04,
            Rarity::Legendary => 0.008,
            Rarity::Mythical => 0.002,
        }
    }

    /// The tier one step up, or `None` at the top
    pub fn next_tier(self) -> Option<Rarity> {
        match self {
            Rarity::Common => Some(Rarity::Uncommon),
            Rarity::Uncommon => Some(Rarity::Rare),
            Rarity::Rare => Some(Rarity::Epic),
            Rarity::Epic => Some(Rarity::Legendary),
            Rarity::Legendary => Some(Rarity::Mythical),
            Rarity::Mythical => None,
        }
    }
}
