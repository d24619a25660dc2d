//! Species catalog - the immutable registry of fish definitions
//!
//! Built once at startup and passed by reference into the engine
//! components; there is no global registry. Catalogs can also be loaded
//! from TOML files for modded species sets.

use rand::Rng;
use serde::{Deserialize, Serialize};

use ahash::AHashMap;

use crate::catalog::rarity::Rarity;
use crate::catalog::traits::TraitId;
use crate::core::error::{ReefError, Result};
use crate::genetics::sampling::weighted_pick;

/// Unique key of a species in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub String);

impl SpeciesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub id: SpeciesId,
    pub name: String,
    /// Iconographic glyph shown by presentation callers
    pub glyph: String,
    pub rarity: Rarity,
    /// Base economic value in coins
    pub base_value: u32,
    /// Species-specific breeding duration hint in milliseconds
    pub base_breeding_ms: u64,
    /// Traits every purchased member of the species carries
    #[serde(default)]
    pub innate_traits: Vec<TraitId>,
    #[serde(default)]
    pub description: String,
}

/// Shape of a TOML species file: a list of `[[species]]` tables
#[derive(Debug, Deserialize)]
struct SpeciesFile {
    species: Vec<SpeciesDef>,
}

/// Immutable species registry with rarity-aware random draws
///
/// Insertion order is preserved so weighted draws and the fallback
/// policy are deterministic under a fixed seed.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    by_id: AHashMap<SpeciesId, SpeciesDef>,
    order: Vec<SpeciesId>,
}

impl SpeciesCatalog {
    pub fn new(defs: Vec<SpeciesDef>) -> Self {
        let order: Vec<SpeciesId> = defs.iter().map(|d| d.id.clone()).collect();
        let by_id = defs.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self { by_id, order }
    }

    /// Parse a catalog from TOML (`[[species]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SpeciesFile = toml::from_str(content)?;
        Ok(Self::new(file.species))
    }

    /// Load a catalog from a TOML file on disk
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, id: &SpeciesId) -> Result<&SpeciesDef> {
        self.by_id
            .get(id)
            .ok_or_else(|| ReefError::SpeciesNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDef> {
        self.order.iter().map(|id| &self.by_id[id])
    }

    /// All species of one tier, in catalog order
    pub fn of_rarity(&self, rarity: Rarity) -> Vec<&SpeciesDef> {
        self.iter().filter(|d| d.rarity == rarity).collect()
    }

    /// Rarity strength of a species, degrading to common strength for
    /// ids missing from the catalog (retired species in old saves)
    pub fn strength_of(&self, id: &SpeciesId) -> u32 {
        match self.get(id) {
            Ok(def) => def.rarity.strength(),
            Err(_) => {
                tracing::warn!("unknown species {}, assuming common strength", id);
                Rarity::Common.strength()
            }
        }
    }

    /// Weighted random draw over population weights
    ///
    /// With a tier filter the draw is uniform within that tier (every
    /// member shares the tier's population mass). Fails with
    /// `EmptyCatalog` when the filtered set has no members; callers are
    /// expected to fall back to [`SpeciesCatalog::fallback_species`].
    pub fn draw_random<R: Rng>(
        &self,
        filter: Option<Rarity>,
        rng: &mut R,
    ) -> Result<&SpeciesDef> {
        let tier = match filter {
            Some(tier) => tier,
            None => *weighted_pick(rng, &Rarity::ALL, |r| r.population_weight())
                .ok_or(ReefError::EmptyCatalog(None))?,
        };

        let pool = self.of_rarity(tier);
        if pool.is_empty() {
            return Err(ReefError::EmptyCatalog(filter));
        }
        Ok(pool[rng.gen_range(0..pool.len())])
    }

    /// Designated default species: the first lowest-rarity entry
    ///
    /// This is the documented fallback policy for empty filtered draws,
    /// not an error path. Panics only on a completely empty catalog,
    /// which is a construction-time defect.
    pub fn fallback_species(&self) -> &SpeciesDef {
        self.iter()
            .min_by_key(|d| d.rarity)
            .expect("species catalog must not be empty")
    }

    /// The standard aquarium roster
    pub fn standard() -> Self {
        let def = |id: &str,
                   name: &str,
                   glyph: &str,
                   rarity: Rarity,
                   base_value: u32,
                   base_breeding_ms: u64,
                   traits: &[&str],
                   description: &str| SpeciesDef {
            id: SpeciesId::new(id),
            name: name.to_string(),
            glyph: glyph.to_string(),
            rarity,
            base_value,
            base_breeding_ms,
            innate_traits: traits.iter().map(|t| TraitId::new(*t)).collect(),
            description: description.to_string(),
        };

        Self::new(vec![
            // Common
            def(
                "goldfish",
                "Goldfish",
                "🐠",
                Rarity::Common,
                20,
                30_000,
                &["orange", "friendly", "hardy"],
                "A classic aquarium fish, perfect for beginners",
            ),
            def(
                "clownfish",
                "Clownfish",
                "🐡",
                Rarity::Common,
                25,
                30_000,
                &["orange", "striped", "playful"],
                "Colorful and energetic, loves anemones",
            ),
            def(
                "betta",
                "Betta Fish",
                "🐟",
                Rarity::Common,
                30,
                35_000,
                &["colorful", "aggressive", "beautiful"],
                "Beautiful flowing fins, needs space",
            ),
            // Uncommon
            def(
                "angelfish",
                "Angelfish",
                "🐠",
                Rarity::Uncommon,
                50,
                45_000,
                &["elegant", "silver", "graceful"],
                "Majestic and peaceful, swims gracefully",
            ),
            def(
                "neon_tetra",
                "Neon Tetra",
                "🐟",
                Rarity::Uncommon,
                40,
                40_000,
                &["blue", "schooling", "small"],
                "Bright blue stripe, loves groups",
            ),
            def(
                "guppy",
                "Fancy Guppy",
                "🐡",
                Rarity::Uncommon,
                45,
                25_000,
                &["colorful", "small", "prolific"],
                "Vibrant colors, breeds easily",
            ),
            // Rare
            def(
                "discus",
                "Discus Fish",
                "🐠",
                Rarity::Rare,
                100,
                60_000,
                &["round", "peaceful", "sensitive"],
                "King of the aquarium, needs pristine water",
            ),
            def(
                "mandarin",
                "Mandarin Fish",
                "🐟",
                Rarity::Rare,
                120,
                65_000,
                &["psychedelic", "small", "shy"],
                "Stunning patterns, very delicate",
            ),
            def(
                "seahorse",
                "Seahorse",
                "🐴",
                Rarity::Rare,
                150,
                70_000,
                &["unique", "gentle", "mystical"],
                "Magical creature of the sea",
            ),
            // Epic
            def(
                "arowana",
                "Dragon Fish",
                "🐉",
                Rarity::Epic,
                300,
                90_000,
                &["dragon", "large", "ancient"],
                "Ancient dragon spirit in fish form",
            ),
            def(
                "lionfish",
                "Lionfish",
                "🦁",
                Rarity::Epic,
                250,
                85_000,
                &["spiky", "venomous", "majestic"],
                "Beautiful but dangerous predator",
            ),
            // Legendary
            def(
                "koi_dragon",
                "Koi Dragon",
                "🐲",
                Rarity::Legendary,
                500,
                120_000,
                &["legendary", "wise", "powerful"],
                "Legendary fish that brings fortune",
            ),
            def(
                "phoenix_fish",
                "Phoenix Fish",
                "🔥",
                Rarity::Legendary,
                600,
                150_000,
                &["fire", "rebirth", "mystical"],
                "Rises from the ashes of the ocean",
            ),
            // Mythical
            def(
                "leviathan",
                "Baby Leviathan",
                "🐋",
                Rarity::Mythical,
                1000,
                200_000,
                &["colossal", "ancient", "oceanic"],
                "Infant form of the legendary sea monster",
            ),
            def(
                "unicorn_fish",
                "Unicorn Fish",
                "🦄",
                Rarity::Mythical,
                1200,
                250_000,
                &["magical", "rainbow", "pure"],
                "Mythical fish of legend and dreams",
            ),
            def(
                "cosmic_fish",
                "Cosmic Fish",
                "🌌",
                Rarity::Mythical,
                1500,
                300_000,
                &["cosmic", "radiant", "ancient"],
                "Born only from the rarest of pairings",
            ),
        ])
    }
}
