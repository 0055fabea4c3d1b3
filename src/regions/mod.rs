//! Region system.
//!
//! Regions are themed areas with their own encounter distributions, gated
//! behind collection-set completion and cumulative item counts.

pub mod data;
pub mod manager;

pub use data::{
    get_region, EncounterWeights, Region, StartingBonus, UnlockRequirements, ALL_REGIONS,
    DEFAULT_REGION_ID,
};
pub use manager::{RegionManager, RegionUnlockProgress};
