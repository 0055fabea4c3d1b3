//! Active gameplay bonuses derived from completed collection sets.
//!
//! Bonuses are never persisted; they are recomputed from the completed-set
//! list whenever a run starts or the UI asks.

use crate::collection::{get_set, BonusType};

/// One bonus currently in effect, tagged with the set that grants it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBonus {
    pub bonus_type: BonusType,
    pub value: u32,
    /// Id of the completed set granting this bonus.
    pub source_set: &'static str,
    pub is_active: bool,
    pub description: &'static str,
}

/// Additive totals per bonus type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusSummary {
    /// Percentage multiplier applied to base run energy.
    pub energy_efficiency: u32,
    /// Starting energy granted per 1,000 steps walked.
    pub starting_energy_bonus: u32,
    pub starting_items_bonus: u32,
    pub encounter_odds_bonus: u32,
    pub shortcut_chance_bonus: u32,
}

/// Flatten every completed set's bonus list into active bonuses.
/// Unknown set ids are skipped.
pub fn active_bonuses(completed_sets: &[String]) -> Vec<ActiveBonus> {
    completed_sets
        .iter()
        .filter_map(|set_id| get_set(set_id))
        .flat_map(|set| {
            set.bonuses.iter().map(|bonus| ActiveBonus {
                bonus_type: bonus.bonus_type,
                value: bonus.value,
                source_set: set.id,
                is_active: true,
                description: bonus.description,
            })
        })
        .collect()
}

/// Bucket active bonuses by type and sum additively within each bucket.
pub fn bonus_summary(completed_sets: &[String]) -> BonusSummary {
    let mut summary = BonusSummary::default();
    for bonus in active_bonuses(completed_sets) {
        match bonus.bonus_type {
            BonusType::EnergyEfficiency => summary.energy_efficiency += bonus.value,
            BonusType::StartingEnergy => summary.starting_energy_bonus += bonus.value,
            BonusType::StartingItems => summary.starting_items_bonus += bonus.value,
            BonusType::EncounterOdds => summary.encounter_odds_bonus += bonus.value,
            BonusType::ShortcutChance => summary.shortcut_chance_bonus += bonus.value,
        }
    }
    summary
}
