//! Locale-keyed composition of display titles.
//!
//! The resolver never sees a locale; callers pick one when they render a
//! `CommanderRank`.

use serde::Serialize;

use crate::ranks::MilitaryRank;
use crate::tiers::MaterialTier;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Parses a language code such as `en`, `es` or `es-MX`.
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match lang.as_str() {
            "es" => Locale::Spanish,
            _ => Locale::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    /// Combines a military and a material label in this locale's word order.
    pub fn compose(&self, military: &str, material: &str) -> String {
        match self {
            Locale::English => format!("{} {}", material, military),
            Locale::Spanish => format!("{} de {}", military, material),
        }
    }
}

/// Full display title of a lattice cell, e.g. "Gold Captain" / "Capitán de Oro".
pub fn title(tier: &MaterialTier, rank: &MilitaryRank, locale: Locale) -> String {
    locale.compose(rank.label(locale), tier.label(locale))
}
