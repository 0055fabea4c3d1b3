//! Item collection system.
//!
//! Items are grouped into fixed sets; a set is complete once every item id
//! in its definition has been collected at least once. Completed sets feed
//! region unlocks, gameplay bonuses, and avatar part unlocks.

pub mod data;
pub mod manager;
pub mod types;

pub use data::{get_set, get_sets_by_category, ALL_SETS};
pub use manager::CollectionManager;
pub use types::{
    BonusType, CategoryProgress, CollectedItem, CollectionProgress, CollectionSet, ItemDef,
    SetBonus, SetCategory, SetProgress, StackingType,
};
