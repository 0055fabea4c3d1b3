//! Region manager: unlock gating and current region selection.

use super::data::{get_region, DEFAULT_REGION_ID};
use crate::collection::CollectionProgress;
use crate::error::ProgressionError;
use crate::storage::{self, keys, KeyValueStore};

/// How close a region is to unlocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUnlockProgress {
    pub region_id: String,
    /// Required sets not yet completed.
    pub missing_sets: Vec<&'static str>,
    pub items_collected: usize,
    pub items_required: usize,
    pub unlockable: bool,
}

/// Gates region availability behind collection progress and tracks the
/// player's current region selection.
pub struct RegionManager {
    store: Box<dyn KeyValueStore>,
    unlocked: Vec<String>,
    selected: String,
}

impl RegionManager {
    /// Build the manager with state hydrated from storage. The default
    /// region is seeded here: a fresh profile starts with `forest_depths`
    /// unlocked and selected.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut unlocked: Vec<String> = storage::load_or_default(&*store, keys::UNLOCKED_REGIONS);
        let selected: Option<String> = storage::load_or_default(&*store, keys::SELECTED_REGION);

        let mut manager = Self {
            store,
            unlocked: Vec::new(),
            selected: String::new(),
        };

        let mut seeded = false;
        if unlocked.is_empty() {
            unlocked.push(DEFAULT_REGION_ID.to_string());
            seeded = true;
        }
        // A selection that is missing (or points at a locked region) falls
        // back to the default region rather than erroring.
        let selected = match selected {
            Some(id) if unlocked.contains(&id) => id,
            _ => {
                seeded = true;
                DEFAULT_REGION_ID.to_string()
            }
        };

        manager.unlocked = unlocked;
        manager.selected = selected;
        if seeded {
            manager.persist();
        }
        manager
    }

    /// Ids of unlocked regions, in unlock order.
    pub fn unlocked_regions(&self) -> &[String] {
        &self.unlocked
    }

    pub fn is_unlocked(&self, region_id: &str) -> bool {
        self.unlocked.iter().any(|r| r == region_id)
    }

    /// The region new runs will start in.
    pub fn selected_region(&self) -> &str {
        &self.selected
    }

    /// True when the region's unlock requirements are met: every required
    /// set completed AND the total-items threshold reached. A region with
    /// no requirements is always unlockable; an unknown region never is.
    pub fn can_unlock_region(&self, region_id: &str, progress: &CollectionProgress) -> bool {
        let Some(region) = get_region(region_id) else {
            return false;
        };
        let Some(reqs) = &region.unlock_requirements else {
            return true;
        };

        let sets_met = reqs
            .completed_sets
            .iter()
            .all(|set_id| progress.completed_sets.iter().any(|s| s == set_id));
        let items_met = reqs
            .total_items_collected
            .map_or(true, |required| progress.total_items >= required);
        sets_met && items_met
    }

    /// Unlock a region. Idempotent no-op when already unlocked; otherwise
    /// requirements are re-validated here so a stale caller cannot unlock
    /// a region whose requirements no longer hold.
    pub fn unlock_region(
        &mut self,
        region_id: &str,
        progress: &CollectionProgress,
    ) -> Result<(), ProgressionError> {
        if self.is_unlocked(region_id) {
            return Ok(());
        }
        if get_region(region_id).is_none() {
            return Err(ProgressionError::UnknownRegion(region_id.to_string()));
        }
        if !self.can_unlock_region(region_id, progress) {
            return Err(ProgressionError::RequirementsNotMet(region_id.to_string()));
        }

        self.unlocked.push(region_id.to_string());
        self.persist();
        Ok(())
    }

    /// Select the region for new runs. The region must already be unlocked.
    pub fn select_region(&mut self, region_id: &str) -> Result<(), ProgressionError> {
        if get_region(region_id).is_none() {
            return Err(ProgressionError::UnknownRegion(region_id.to_string()));
        }
        if !self.is_unlocked(region_id) {
            return Err(ProgressionError::RegionLocked(region_id.to_string()));
        }

        self.selected = region_id.to_string();
        self.persist();
        Ok(())
    }

    /// Unlock progress breakdown for display. None for unknown regions.
    pub fn unlock_progress(
        &self,
        region_id: &str,
        progress: &CollectionProgress,
    ) -> Option<RegionUnlockProgress> {
        let region = get_region(region_id)?;

        let (missing_sets, items_required) = match &region.unlock_requirements {
            None => (Vec::new(), 0),
            Some(reqs) => (
                reqs.completed_sets
                    .iter()
                    .copied()
                    .filter(|set_id| !progress.completed_sets.iter().any(|s| s == set_id))
                    .collect(),
                reqs.total_items_collected.unwrap_or(0),
            ),
        };

        Some(RegionUnlockProgress {
            region_id: region_id.to_string(),
            unlockable: self.can_unlock_region(region_id, progress),
            missing_sets,
            items_collected: progress.total_items,
            items_required,
        })
    }

    fn persist(&mut self) {
        storage::persist(&mut *self.store, keys::UNLOCKED_REGIONS, &self.unlocked);
        storage::persist(&mut *self.store, keys::SELECTED_REGION, &self.selected);
    }
}
