//! Converts raw activity into the accumulated score consumed by the resolver.

use serde::Serialize;

use crate::constants::BOOST_MULTIPLIER;

/// Applies the boost multiplier to a raw streak value.
///
/// The caller (the activity tracker) owns accumulation and guarantees the
/// value is non-negative. Nothing is clamped here.
///
/// # Arguments
/// * `raw_streak_days` - Accumulated activity-days after missed-day penalties.
/// * `is_boosted` - Whether the account is eligible for the boost.
pub fn effective_score(raw_streak_days: f64, is_boosted: bool) -> f64 {
    if is_boosted {
        raw_streak_days * BOOST_MULTIPLIER
    } else {
        raw_streak_days
    }
}

/// Subscription plan of an account. Only the top plan is boosted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Plan {
    #[default]
    Starter,
    Velocity,
    Accelerator,
    Freedom,
}

impl Plan {
    /// Parses a plan name. Unknown names fall back to `Starter`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "velocity" => Plan::Velocity,
            "accelerator" => Plan::Accelerator,
            "freedom" => Plan::Freedom,
            _ => Plan::Starter,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plan::Starter => "starter",
            Plan::Velocity => "velocity",
            Plan::Accelerator => "accelerator",
            Plan::Freedom => "freedom",
        }
    }

    pub fn is_boosted(&self) -> bool {
        matches!(self, Plan::Freedom)
    }
}

pub fn effective_score_for_plan(raw_streak_days: f64, plan: Plan) -> f64 {
    effective_score(raw_streak_days, plan.is_boosted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unboosted_passes_through() {
        assert_eq!(effective_score(0.0, false), 0.0);
        assert_eq!(effective_score(17.5, false), 17.5);
    }

    #[test]
    fn boosted_doubles() {
        assert_eq!(effective_score(9.0, true), 18.0);
        assert_eq!(effective_score(1116.0, true), 2232.0);
    }

    #[test]
    fn negative_input_is_not_clamped() {
        assert_eq!(effective_score(-3.0, true), -6.0);
    }

    #[test]
    fn plan_names_parse_case_insensitively() {
        assert_eq!(Plan::from_name("Freedom"), Plan::Freedom);
        assert_eq!(Plan::from_name(" velocity "), Plan::Velocity);
        assert_eq!(Plan::from_name("ACCELERATOR"), Plan::Accelerator);
        assert_eq!(Plan::from_name("starter"), Plan::Starter);
        assert_eq!(Plan::from_name("enterprise"), Plan::Starter);
        assert_eq!(Plan::from_name(""), Plan::Starter);
    }

    #[test]
    fn only_freedom_is_boosted() {
        assert!(!Plan::Starter.is_boosted());
        assert!(!Plan::Velocity.is_boosted());
        assert!(!Plan::Accelerator.is_boosted());
        assert!(Plan::Freedom.is_boosted());
        assert_eq!(effective_score_for_plan(10.0, Plan::Freedom), 20.0);
        assert_eq!(effective_score_for_plan(10.0, Plan::Velocity), 10.0);
    }

    #[test]
    fn plan_name_roundtrips() {
        for plan in [Plan::Starter, Plan::Velocity, Plan::Accelerator, Plan::Freedom] {
            assert_eq!(Plan::from_name(plan.name()), plan);
        }
    }
}
