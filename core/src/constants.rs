//! Constants module - fixed dimensions and costs of the commander rank lattice

// =============================================================================
// Lattice Dimensions
// =============================================================================

/// Number of material tiers (Wood .. Legendary).
pub const MATERIAL_TIERS: usize = 10;
/// Number of military ranks repeated inside every tier.
pub const MILITARY_RANKS: usize = 9;
/// Total number of lattice cells (levels).
pub const LATTICE_CELLS: usize = MATERIAL_TIERS * MILITARY_RANKS;

// =============================================================================
// Progression Costs
// =============================================================================

/// Activity-days needed to clear one military rank inside each tier.
///
/// Stored user scores were accumulated against this exact sequence, so it
/// must never be reordered or rescaled.
pub const DAYS_PER_RANK: [u32; MATERIAL_TIERS] = [2, 4, 8, 12, 18, 24, 32, 42, 52, 54];

/// Score multiplier granted to boosted accounts.
pub const BOOST_MULTIPLIER: f64 = 2.0;

/// Upper bound of `CommanderRank::progress_percent`.
pub const MAX_PROGRESS_PERCENT: u8 = 100;
