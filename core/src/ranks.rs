use serde::Serialize;

use crate::constants::MILITARY_RANKS;
use crate::labels::Locale;

/// A position inside a material tier.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilitaryRank {
    pub ordinal: u8,
    pub label_en: &'static str,
    pub label_es: &'static str,
    pub stars: &'static str,
}

impl MilitaryRank {
    pub const fn new(
        ordinal: u8,
        label_en: &'static str,
        label_es: &'static str,
        stars: &'static str,
    ) -> Self {
        MilitaryRank {
            ordinal,
            label_en,
            label_es,
            stars,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.label_en,
            Locale::Spanish => self.label_es,
        }
    }
}

/// Military ranks in promotion order. The same set repeats inside every tier.
pub const MILITARY_RANK_CATALOGUE: [MilitaryRank; MILITARY_RANKS] = [
    MilitaryRank::new(0, "Recruit", "Recluta", "☆"),
    MilitaryRank::new(1, "Private", "Soldado", "☆☆"),
    MilitaryRank::new(2, "Corporal", "Cabo", "☆☆☆"),
    MilitaryRank::new(3, "Sergeant", "Sargento", "★"),
    MilitaryRank::new(4, "Lieutenant", "Teniente", "★★"),
    MilitaryRank::new(5, "Captain", "Capitán", "★★★"),
    MilitaryRank::new(6, "Major", "Mayor", "✪"),
    MilitaryRank::new(7, "Colonel", "Coronel", "✪✪"),
    MilitaryRank::new(8, "General", "General", "✪✪✪"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_positions() {
        for (idx, rank) in MILITARY_RANK_CATALOGUE.iter().enumerate() {
            assert_eq!(rank.ordinal as usize, idx);
        }
    }

    #[test]
    fn label_follows_locale() {
        let captain = MILITARY_RANK_CATALOGUE[5];
        assert_eq!(captain.label(Locale::English), "Captain");
        assert_eq!(captain.label(Locale::Spanish), "Capitán");
    }
}
