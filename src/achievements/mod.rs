//! Achievement system.
//!
//! Gameplay events flow into [`AchievementManager::process_event`], which
//! routes them to per-achievement models. Unlocks are one-way transitions;
//! the persisted event log is the source of truth for restores.

pub mod data;
pub mod manager;
pub mod model;
pub mod rewards;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use manager::{AchievementManager, AchievementStatistics, BucketCount};
pub use model::AchievementModel;
pub use rewards::{GrantResult, RewardLedger, RewardTotals};
pub use types::{
    AchievementCategory, AchievementDef, AchievementEvent, EventKind, Progress, ProgressUpdate,
    Rarity, Requirement, RequirementCheck, Reward,
};
