//! The rank lattice: material tiers × military ranks, flattened into a
//! threshold list that is built once and read many times.

use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;

use crate::ranks::{MilitaryRank, MILITARY_RANK_CATALOGUE};
use crate::tiers::{MaterialTier, MATERIAL_TIER_CATALOGUE};

/// Accumulated score required to have reached one lattice cell.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankThreshold {
    pub tier_ordinal: u8,
    pub rank_ordinal: u8,
    pub cumulative_days: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierTableError {
    #[error("tier table needs at least one material tier")]
    NoTiers,
    #[error("tier table needs at least one military rank")]
    NoRanks,
    #[error("material tier at position {position} has ordinal {ordinal}")]
    TierOrdinalMismatch { position: usize, ordinal: u8 },
    #[error("military rank at position {position} has ordinal {ordinal}")]
    RankOrdinalMismatch { position: usize, ordinal: u8 },
    #[error("material tier '{label}' costs {days} days per rank; must be positive")]
    NonPositiveDays { label: &'static str, days: u32 },
    #[error("material tier '{label}' costs {days} days per rank, not more than the tier before it ({previous})")]
    NonIncreasingDays {
        label: &'static str,
        days: u32,
        previous: u32,
    },
    #[error("tier table score overflows u32")]
    ScoreOverflow,
}

#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: Vec<MaterialTier>,
    ranks: Vec<MilitaryRank>,
    thresholds: Vec<RankThreshold>,
    max_score: u32,
}

lazy_static! {
    static ref TIER_TABLE: TierTable =
        TierTable::standard().expect("built-in tier catalogue is valid");
}

/// The process-wide lattice, built on first use.
pub fn tier_table() -> &'static TierTable {
    &TIER_TABLE
}

impl TierTable {
    /// Builds the lattice from the built-in catalogue.
    pub fn standard() -> Result<Self, TierTableError> {
        Self::new(
            MATERIAL_TIER_CATALOGUE.to_vec(),
            MILITARY_RANK_CATALOGUE.to_vec(),
        )
    }

    /// Validates a catalogue and precomputes its thresholds.
    ///
    /// # Arguments
    /// * `tiers` - Material tiers in progression order.
    /// * `ranks` - Military ranks in promotion order, repeated in every tier.
    pub fn new(
        tiers: Vec<MaterialTier>,
        ranks: Vec<MilitaryRank>,
    ) -> Result<Self, TierTableError> {
        if tiers.is_empty() {
            return Err(TierTableError::NoTiers);
        }
        if ranks.is_empty() {
            return Err(TierTableError::NoRanks);
        }

        for (position, rank) in ranks.iter().enumerate() {
            if rank.ordinal as usize != position {
                return Err(TierTableError::RankOrdinalMismatch {
                    position,
                    ordinal: rank.ordinal,
                });
            }
        }

        let mut previous: Option<u32> = None;
        for (position, tier) in tiers.iter().enumerate() {
            if tier.ordinal as usize != position {
                return Err(TierTableError::TierOrdinalMismatch {
                    position,
                    ordinal: tier.ordinal,
                });
            }
            if tier.days_per_rank == 0 {
                return Err(TierTableError::NonPositiveDays {
                    label: tier.label_en,
                    days: tier.days_per_rank,
                });
            }
            if let Some(previous) = previous {
                if tier.days_per_rank <= previous {
                    return Err(TierTableError::NonIncreasingDays {
                        label: tier.label_en,
                        days: tier.days_per_rank,
                        previous,
                    });
                }
            }
            previous = Some(tier.days_per_rank);
        }

        let (thresholds, max_score) = Self::build_thresholds(&tiers, ranks.len())?;

        log::debug!(
            "Built tier table: {} tiers x {} ranks, {} thresholds, max score {}",
            tiers.len(),
            ranks.len(),
            thresholds.len(),
            max_score
        );

        Ok(TierTable {
            tiers,
            ranks,
            thresholds,
            max_score,
        })
    }

    /// Walks tiers in order and ranks in order, recording the score needed to
    /// reach each cell before adding the current tier's cost.
    ///
    /// # Returns
    /// * The flat threshold list and the score that fully clears the last cell.
    fn build_thresholds(
        tiers: &[MaterialTier],
        rank_count: usize,
    ) -> Result<(Vec<RankThreshold>, u32), TierTableError> {
        let mut thresholds = Vec::with_capacity(tiers.len() * rank_count);
        let mut cumulative: u32 = 0;

        for tier in tiers {
            for rank_ordinal in 0..rank_count {
                thresholds.push(RankThreshold {
                    tier_ordinal: tier.ordinal,
                    rank_ordinal: rank_ordinal as u8,
                    cumulative_days: cumulative,
                });
                cumulative = cumulative
                    .checked_add(tier.days_per_rank)
                    .ok_or(TierTableError::ScoreOverflow)?;
            }
        }

        Ok((thresholds, cumulative))
    }

    pub fn thresholds(&self) -> &[RankThreshold] {
        &self.thresholds
    }

    /// Score needed to fully clear the top rank.
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn tiers(&self) -> &[MaterialTier] {
        &self.tiers
    }

    pub fn ranks(&self) -> &[MilitaryRank] {
        &self.ranks
    }

    /// Number of lattice cells.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Score needed to reach `(tier, rank)`, if that cell exists.
    pub fn threshold_for(&self, tier: usize, rank: usize) -> Option<u32> {
        if tier >= self.tiers.len() || rank >= self.ranks.len() {
            return None;
        }
        self.thresholds
            .get(tier * self.ranks.len() + rank)
            .map(|t| t.cumulative_days)
    }

    /// Tier and rank records of the cell at a flattened index.
    pub fn cell(&self, index: usize) -> Option<(MaterialTier, MilitaryRank)> {
        let threshold = self.thresholds.get(index)?;
        let tier = self.tiers.get(threshold.tier_ordinal as usize)?;
        let rank = self.ranks.get(threshold.rank_ordinal as usize)?;
        Some((*tier, *rank))
    }
}
