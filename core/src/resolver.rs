//! Maps an accumulated activity score to a position in the rank lattice.

use serde::Serialize;

use crate::constants::MAX_PROGRESS_PERCENT;
use crate::labels::{self, Locale};
use crate::ranks::MilitaryRank;
use crate::tier_table::{tier_table, TierTable};
use crate::tiers::MaterialTier;

/// A resolved lattice position. Recomputed on demand, never persisted here.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CommanderRank {
    /// 1-based flattened lattice position.
    pub level: u32,
    pub tier: MaterialTier,
    pub rank: MilitaryRank,
    /// The input score after clamping: NaN and negatives become 0, `+inf`
    /// becomes the max score. Always finite.
    pub score: f64,
    pub current_threshold: u32,
    /// Threshold of the next cell, or the max score on the last cell.
    pub next_threshold: u32,
    pub progress_percent: u8,
    pub is_max_rank: bool,
    pub next: Option<(MaterialTier, MilitaryRank)>,
}

impl CommanderRank {
    /// Whole activity-days still missing before `next_threshold`.
    pub fn days_to_next(&self) -> u32 {
        let floored = self.score.floor();
        let next = self.next_threshold as f64;
        if floored >= next {
            0
        } else {
            (next - floored) as u32
        }
    }

    pub fn title(&self, locale: Locale) -> String {
        labels::title(&self.tier, &self.rank, locale)
    }

    /// Title of the next cell, absent on the max rank.
    pub fn next_title(&self, locale: Locale) -> Option<String> {
        self.next
            .as_ref()
            .map(|(tier, rank)| labels::title(tier, rank, locale))
    }
}

/// Resolves a score against the process-wide lattice.
pub fn resolve(score: f64) -> CommanderRank {
    tier_table().resolve(score)
}

/// NaN and anything below zero count as zero; `+inf` counts as `max_score`.
fn clamp_score(score: f64, max_score: u32) -> f64 {
    if score.is_nan() || score < 0.0 {
        0.0
    } else if score == f64::INFINITY {
        max_score as f64
    } else {
        score
    }
}

/// Percentage of `[current, next)` covered by `score`, rounded and capped
/// to `0..=100`. An empty span counts as complete.
fn progress_percent(score: f64, current: u32, next: u32) -> u8 {
    let span = next.saturating_sub(current);
    if span == 0 {
        return MAX_PROGRESS_PERCENT;
    }

    let ratio = (score - current as f64) / span as f64 * 100.0;
    let pct = ratio.max(0.0).min(MAX_PROGRESS_PERCENT as f64).round();
    if pct.is_nan() {
        0
    } else {
        pct as u8
    }
}

impl TierTable {
    /// Maps an arbitrary score to a `CommanderRank`. Never fails.
    ///
    /// Placement uses the floored score with an inclusive lower bound:
    /// reaching a threshold exactly means holding that rank. Progress uses
    /// the unfloored score so partial days stay visible.
    pub fn resolve(&self, score: f64) -> CommanderRank {
        if !score.is_finite() || score < 0.0 {
            log::trace!("Resolving degenerate score {}", score);
        }

        let score = clamp_score(score, self.max_score());
        let floored = score.floor();

        let thresholds = self.thresholds();
        // thresholds[0] is always 0, so at least one entry qualifies.
        let index = thresholds
            .partition_point(|t| (t.cumulative_days as f64) <= floored)
            .saturating_sub(1);
        let last = thresholds.len() - 1;
        let is_max_rank = index == last;

        let current_threshold = thresholds[index].cumulative_days;
        let next_threshold = if is_max_rank {
            self.max_score()
        } else {
            thresholds[index + 1].cumulative_days
        };

        let (tier, rank) = self.cell_unchecked(index);
        let next = if is_max_rank {
            None
        } else {
            Some(self.cell_unchecked(index + 1))
        };

        CommanderRank {
            level: index as u32 + 1,
            tier,
            rank,
            score,
            current_threshold,
            next_threshold,
            progress_percent: progress_percent(score, current_threshold, next_threshold),
            is_max_rank,
            next,
        }
    }

    fn cell_unchecked(&self, index: usize) -> (MaterialTier, MilitaryRank) {
        let threshold = self.thresholds()[index];
        (
            self.tiers()[threshold.tier_ordinal as usize],
            self.ranks()[threshold.rank_ordinal as usize],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_is_first_cell() {
        let r = resolve(0.0);
        assert_eq!(r.level, 1);
        assert_eq!(r.tier.ordinal, 0);
        assert_eq!(r.tier.label_en, "Wood");
        assert_eq!(r.rank.ordinal, 0);
        assert_eq!(r.progress_percent, 0);
        assert!(!r.is_max_rank);
        assert_eq!(r.current_threshold, 0);
        assert_eq!(r.next_threshold, 2);
    }

    #[test]
    fn seventeen_is_last_wood_rank_half_way() {
        let r = resolve(17.0);
        assert_eq!(r.tier.ordinal, 0);
        assert_eq!(r.rank.ordinal, 8);
        assert_eq!(r.level, 9);
        assert_eq!(r.current_threshold, 16);
        assert_eq!(r.next_threshold, 18);
        assert_eq!(r.progress_percent, 50);

        let (next_tier, next_rank) = r.next.unwrap();
        assert_eq!(next_tier.label_en, "Stone");
        assert_eq!(next_rank.ordinal, 0);
    }

    #[test]
    fn max_score_is_final_cell() {
        let r = resolve(2232.0);
        assert_eq!(r.level, 90);
        assert!(r.is_max_rank);
        assert_eq!(r.progress_percent, 100);
        assert_eq!(r.next, None);
        assert_eq!(r.next_title(Locale::English), None);
        assert_eq!(r.next_threshold, 2232);
    }

    #[test]
    fn exact_threshold_reaches_that_rank() {
        let r = resolve(18.0);
        assert_eq!(r.tier.ordinal, 1);
        assert_eq!(r.rank.ordinal, 0);
        assert_eq!(r.level, 10);
        assert_eq!(r.progress_percent, 0);
    }

    #[test]
    fn fractional_score_floors_for_placement_only() {
        // 17.9 floors to 17: still tier 0 rank 8, but progress uses 1.9 of 2.
        let r = resolve(17.9);
        assert_eq!(r.level, 9);
        assert_eq!(r.progress_percent, 95);
        assert_eq!(r.score, 17.9);
    }

    #[test]
    fn negative_and_nan_clamp_to_zero() {
        assert_eq!(resolve(-5.0), resolve(0.0));
        assert_eq!(resolve(f64::NEG_INFINITY), resolve(0.0));
        // NaN handling is a chosen convention rather than an inherited contract.
        assert_eq!(resolve(f64::NAN), resolve(0.0));
    }

    #[test]
    fn infinity_is_max_rank() {
        // +inf pinned to the max rank is a chosen convention.
        let r = resolve(f64::INFINITY);
        assert!(r.is_max_rank);
        assert_eq!(r.progress_percent, 100);
        assert_eq!(r.days_to_next(), 0);
        assert_eq!(r.score, 2232.0);
    }

    #[test]
    fn infinite_score_serializes_as_max_score() {
        let json = serde_json::to_value(resolve(f64::INFINITY)).unwrap();
        assert_eq!(json["score"], 2232.0);
        assert_eq!(json["is_max_rank"], true);
    }

    #[test]
    fn excess_score_saturates() {
        let r = resolve(2232.0 + 1000.0);
        assert!(r.is_max_rank);
        assert_eq!(r.progress_percent, 100);
        assert_eq!(r.level, 90);
    }

    #[test]
    fn final_cell_measures_progress_toward_max_score() {
        // last threshold is 2178, final tier costs 54
        let r = resolve(2205.0);
        assert!(r.is_max_rank);
        assert_eq!(r.current_threshold, 2178);
        assert_eq!(r.progress_percent, 50);
    }

    #[test]
    fn astronomically_large_score_is_well_formed() {
        let r = resolve(1e300);
        assert!(r.is_max_rank);
        assert_eq!(r.progress_percent, 100);
    }

    #[test]
    fn zero_span_short_circuits_to_full_progress() {
        assert_eq!(progress_percent(5.0, 5, 5), 100);
        assert_eq!(progress_percent(0.0, 7, 3), 100);
    }

    #[test]
    fn progress_rounds_half_up() {
        // 1 of 8 = 12.5%
        assert_eq!(progress_percent(25.0, 24, 32), 13);
        assert_eq!(progress_percent(24.0, 24, 32), 0);
    }

    #[test]
    fn days_to_next_counts_whole_days() {
        assert_eq!(resolve(0.0).days_to_next(), 2);
        assert_eq!(resolve(17.5).days_to_next(), 1);
        assert_eq!(resolve(2200.0).days_to_next(), 32);
    }

    #[test]
    fn titles_follow_locale() {
        let r = resolve(0.0);
        assert_eq!(r.title(Locale::English), "Wood Recruit");
        assert_eq!(r.title(Locale::Spanish), "Recluta de Madera");
        assert_eq!(r.next_title(Locale::English).as_deref(), Some("Wood Private"));
    }

    #[test]
    fn descriptor_serializes_for_presentation() {
        let json = serde_json::to_value(resolve(17.0)).unwrap();
        assert_eq!(json["level"], 9);
        assert_eq!(json["progress_percent"], 50);
        assert_eq!(json["tier"]["label_en"], "Wood");
        assert_eq!(json["is_max_rank"], false);
    }
}
