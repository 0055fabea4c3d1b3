//! Static region definitions.

/// Relative odds of each encounter type in a region. Weights always sum
/// to 100.
#[derive(Debug, Clone, Copy)]
pub struct EncounterWeights {
    pub treasure: u32,
    pub hazard: u32,
    pub monster: u32,
    pub rest_site: u32,
    pub shortcut: u32,
}

impl EncounterWeights {
    pub fn total(&self) -> u32 {
        self.treasure + self.hazard + self.monster + self.rest_site + self.shortcut
    }
}

/// Flat bonuses applied to runs started in a region.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartingBonus {
    pub energy: u32,
    pub items: u32,
}

/// What it takes to unlock a region.
#[derive(Debug, Clone, Copy)]
pub struct UnlockRequirements {
    /// Collection sets that must all be complete.
    pub completed_sets: &'static [&'static str],
    /// Minimum distinct items collected across all sets.
    pub total_items_collected: Option<usize>,
}

/// A themed area with its own encounter distribution.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub encounter_weights: EncounterWeights,
    pub starting_bonus: StartingBonus,
    /// None means the region is available from the start.
    pub unlock_requirements: Option<UnlockRequirements>,
}

/// The region every player starts in.
pub const DEFAULT_REGION_ID: &str = "forest_depths";

/// All regions in display order.
pub const ALL_REGIONS: &[Region] = &[
    Region {
        id: "forest_depths",
        name: "Forest Depths",
        description: "Tangled roots and green light. Where every delver starts.",
        encounter_weights: EncounterWeights {
            treasure: 25,
            hazard: 20,
            monster: 30,
            rest_site: 15,
            shortcut: 10,
        },
        starting_bonus: StartingBonus { energy: 0, items: 0 },
        unlock_requirements: None,
    },
    Region {
        id: "desert_oasis",
        name: "Desert Oasis",
        description: "Sun-bleached ruins around a deep blue spring.",
        encounter_weights: EncounterWeights {
            treasure: 35,
            hazard: 25,
            monster: 20,
            rest_site: 10,
            shortcut: 10,
        },
        starting_bonus: StartingBonus {
            energy: 100,
            items: 1,
        },
        unlock_requirements: Some(UnlockRequirements {
            completed_sets: &["silk_road_set"],
            total_items_collected: Some(20),
        }),
    },
    Region {
        id: "sunken_crypts",
        name: "Sunken Crypts",
        description: "Drowned halls where the hoard-wyrms sleep.",
        encounter_weights: EncounterWeights {
            treasure: 30,
            hazard: 30,
            monster: 25,
            rest_site: 5,
            shortcut: 10,
        },
        starting_bonus: StartingBonus {
            energy: 200,
            items: 2,
        },
        unlock_requirements: Some(UnlockRequirements {
            completed_sets: &["cartographers_set", "dragon_hoard_set"],
            total_items_collected: None,
        }),
    },
];

/// Get a region definition by id.
pub fn get_region(id: &str) -> Option<&'static Region> {
    ALL_REGIONS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_ids_are_unique() {
        let mut ids = HashSet::new();
        for region in ALL_REGIONS {
            assert!(ids.insert(region.id), "Duplicate region ID: {}", region.id);
        }
    }

    #[test]
    fn test_encounter_weights_sum_to_100() {
        for region in ALL_REGIONS {
            assert_eq!(
                region.encounter_weights.total(),
                100,
                "Region {} weights do not sum to 100",
                region.id
            );
        }
    }

    #[test]
    fn test_default_region_has_no_requirements() {
        let region = get_region(DEFAULT_REGION_ID).unwrap();
        assert!(region.unlock_requirements.is_none());
    }

    #[test]
    fn test_required_sets_exist() {
        for region in ALL_REGIONS {
            if let Some(reqs) = &region.unlock_requirements {
                for set_id in reqs.completed_sets {
                    assert!(
                        crate::collection::get_set(set_id).is_some(),
                        "Region {} requires unknown set {}",
                        region.id,
                        set_id
                    );
                }
            }
        }
    }
}
