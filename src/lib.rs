//! Delver's Descent progression engine.
//!
//! The rule-driven layer that sits between the step-count data and the
//! dungeon mini-game: achievements, collection sets, region unlocks,
//! avatar cosmetics, and the bonus composition that feeds new runs.
//!
//! Gameplay reports events into [`AchievementManager`] and item pickups
//! into [`CollectionManager`]; [`RegionManager`] and [`AvatarManager`]
//! poll the collection's completion state to unlock content; and
//! [`run_init::initialize_run`] folds everything into a new run's
//! starting envelope.
//!
//! Managers hydrate their state from a [`storage::KeyValueStore`] at
//! construction time and persist on every mutation; storage failures
//! degrade to defaults instead of propagating.

pub mod achievements;
pub mod avatar;
pub mod bonuses;
pub mod collection;
pub mod error;
pub mod regions;
pub mod run_init;
pub mod storage;

pub use achievements::{
    AchievementCategory, AchievementEvent, AchievementManager, EventKind, ProgressUpdate, Rarity,
    RewardLedger,
};
pub use avatar::{AvatarManager, PartCategory};
pub use bonuses::{bonus_summary, ActiveBonus, BonusSummary};
pub use collection::{CollectedItem, CollectionManager, CollectionProgress, SetCategory};
pub use error::ProgressionError;
pub use regions::{RegionManager, DEFAULT_REGION_ID};
pub use run_init::{initialize_run, initialize_run_generated, DelvingRun, RunParams, RunStatus};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
