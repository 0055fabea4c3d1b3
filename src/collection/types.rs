//! Collection system types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::achievements::Rarity;

/// Collection set categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetCategory {
    TradeGoods,
    Discoveries,
    Legendaries,
}

impl SetCategory {
    pub const ALL: [SetCategory; 3] = [
        SetCategory::TradeGoods,
        SetCategory::Discoveries,
        SetCategory::Legendaries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SetCategory::TradeGoods => "Trade Goods",
            SetCategory::Discoveries => "Discoveries",
            SetCategory::Legendaries => "Legendaries",
        }
    }
}

/// A collectible item within a set.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    /// Cash-out value in currency units.
    pub value: u32,
}

/// Gameplay bonus granted by a completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusType {
    EnergyEfficiency,
    StartingEnergy,
    StartingItems,
    EncounterOdds,
    ShortcutChance,
}

/// How a bonus combines with others of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackingType {
    Additive,
    Multiplicative,
}

/// A bonus attached to a collection set definition.
// TODO: stacking is declared here but the bonus summary always stacks
// additively; multiplicative stacking has never been implemented.
#[derive(Debug, Clone)]
pub struct SetBonus {
    pub bonus_type: BonusType,
    pub value: u32,
    pub description: &'static str,
    pub stacking: StackingType,
}

/// Static definition of a collection set: complete once every item id has
/// been collected at least once.
#[derive(Debug, Clone)]
pub struct CollectionSet {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SetCategory,
    pub items: &'static [ItemDef],
    pub bonuses: &'static [SetBonus],
    /// Cosmetic avatar part unlocked when this set completes.
    pub avatar_part_id: Option<&'static str>,
}

/// A persisted record of one collected item. A later record for the same
/// `(item_id, set_id)` pair replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedItem {
    pub item_id: String,
    pub set_id: String,
    /// Unix seconds.
    pub collected_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CollectedItem {
    /// Convenience constructor stamping the current time.
    pub fn now(item_id: impl Into<String>, set_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            set_id: set_id.into(),
            collected_at: chrono::Utc::now().timestamp(),
            run_id: None,
            source: None,
        }
    }
}

/// Progress within one incomplete set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetProgress {
    pub set_id: String,
    pub collected: usize,
    pub total: usize,
    /// Item ids still missing from the set.
    pub missing: Vec<&'static str>,
}

/// Per-category rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryProgress {
    pub collected_items: usize,
    pub total_items: usize,
    pub completed_sets: usize,
    pub total_sets: usize,
}

/// Derived snapshot of the whole collection. Never stored; recomputed on
/// demand from the collected records and the static set definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionProgress {
    /// Distinct items collected across all sets.
    pub total_items: usize,
    pub total_sets: usize,
    pub completed_sets: Vec<String>,
    pub partial_sets: Vec<SetProgress>,
    pub by_category: HashMap<SetCategory, CategoryProgress>,
}
