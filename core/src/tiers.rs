use serde::Serialize;

use crate::constants::{DAYS_PER_RANK, MATERIAL_TIERS};
use crate::labels::Locale;

/// A coarse progression band. Every military rank inside it costs
/// `days_per_rank` activity-days to clear.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialTier {
    pub ordinal: u8,
    pub label_en: &'static str,
    pub label_es: &'static str,
    pub token: &'static str,
    pub days_per_rank: u32,
}

impl MaterialTier {
    pub const fn new(
        ordinal: u8,
        label_en: &'static str,
        label_es: &'static str,
        token: &'static str,
        days_per_rank: u32,
    ) -> Self {
        MaterialTier {
            ordinal,
            label_en,
            label_es,
            token,
            days_per_rank,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.label_en,
            Locale::Spanish => self.label_es,
        }
    }
}

/// Material tiers from easiest to hardest.
pub const MATERIAL_TIER_CATALOGUE: [MaterialTier; MATERIAL_TIERS] = [
    MaterialTier::new(0, "Wood", "Madera", "🪵", DAYS_PER_RANK[0]),
    MaterialTier::new(1, "Stone", "Piedra", "🪨", DAYS_PER_RANK[1]),
    MaterialTier::new(2, "Iron", "Hierro", "⚙️", DAYS_PER_RANK[2]),
    MaterialTier::new(3, "Bronze", "Bronce", "🥉", DAYS_PER_RANK[3]),
    MaterialTier::new(4, "Silver", "Plata", "🥈", DAYS_PER_RANK[4]),
    MaterialTier::new(5, "Gold", "Oro", "🥇", DAYS_PER_RANK[5]),
    MaterialTier::new(6, "Platinum", "Platino", "💠", DAYS_PER_RANK[6]),
    MaterialTier::new(7, "Diamond", "Diamante", "💎", DAYS_PER_RANK[7]),
    MaterialTier::new(8, "Master", "Maestro", "👑", DAYS_PER_RANK[8]),
    MaterialTier::new(9, "Legendary", "Legendario", "🔥", DAYS_PER_RANK[9]),
];
