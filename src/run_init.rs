//! Run initialization: composes collection bonuses, region starting
//! bonuses, and base parameters into a fully-specified new run.

use serde::{Deserialize, Serialize};

use crate::bonuses::{bonus_summary, BonusSummary};
use crate::collection::CollectionManager;
use crate::error::ProgressionError;
use crate::regions::get_region;

/// Caller-supplied inputs for a new run.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// Energy envelope before any bonuses.
    pub base_energy: u32,
    /// Steps walked today, which scale the starting-energy bonus.
    pub steps: u32,
    pub selected_region_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    Active,
    Completed,
}

/// One playthrough of the dungeon mini-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelvingRun {
    pub id: String,
    pub region_id: String,
    pub status: RunStatus,
    pub starting_energy: u32,
    pub starting_items: u32,
    /// Unix seconds.
    pub created_at: i64,
}

/// The composed run plus the intermediate numbers, so the UI can show
/// where the energy came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RunInitialization {
    pub run: DelvingRun,
    pub summary: BonusSummary,
    pub base_energy: u32,
    /// Base energy after the efficiency multiplier, rounded to nearest.
    pub efficiency_adjusted_energy: u32,
    /// Steps-scaled starting-energy bonus, rounded to nearest.
    pub steps_bonus_energy: u32,
    pub region_energy_bonus: u32,
    pub region_items_bonus: u32,
    pub total_energy: u32,
    pub total_items_bonus: u32,
}

/// Compose a new run. Pure: reads the collaborators, holds no state, and
/// produces a fresh run object on every call.
///
/// Energy math: `base * (1 + efficiency/100)` rounded to nearest, plus
/// `starting_energy_bonus * steps/1000` rounded to nearest, plus the
/// region's flat energy bonus.
pub fn initialize_run(
    run_id: &str,
    params: &RunParams,
    collection: &CollectionManager,
) -> Result<RunInitialization, ProgressionError> {
    let region = get_region(&params.selected_region_id).ok_or_else(|| {
        ProgressionError::UnknownRegion(params.selected_region_id.clone())
    })?;

    let summary = bonus_summary(collection.completed_sets());

    let efficiency_adjusted_energy = (f64::from(params.base_energy)
        * (1.0 + f64::from(summary.energy_efficiency) / 100.0))
        .round() as u32;
    let steps_bonus_energy = (f64::from(summary.starting_energy_bonus)
        * f64::from(params.steps)
        / 1000.0)
        .round() as u32;

    let total_energy =
        efficiency_adjusted_energy + steps_bonus_energy + region.starting_bonus.energy;
    let total_items_bonus = summary.starting_items_bonus + region.starting_bonus.items;

    Ok(RunInitialization {
        run: DelvingRun {
            id: run_id.to_string(),
            region_id: region.id.to_string(),
            status: RunStatus::Queued,
            starting_energy: total_energy,
            starting_items: total_items_bonus,
            created_at: chrono::Utc::now().timestamp(),
        },
        summary,
        base_energy: params.base_energy,
        efficiency_adjusted_energy,
        steps_bonus_energy,
        region_energy_bonus: region.starting_bonus.energy,
        region_items_bonus: region.starting_bonus.items,
        total_energy,
        total_items_bonus,
    })
}

/// Same composition with a freshly minted v4 run id.
pub fn initialize_run_generated(
    params: &RunParams,
    collection: &CollectionManager,
) -> Result<RunInitialization, ProgressionError> {
    initialize_run(&uuid::Uuid::new_v4().to_string(), params, collection)
}
