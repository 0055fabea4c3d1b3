//! Integration test: full progression flow.
//!
//! Drives the progression engine the way the dungeon game and UI would:
//! gameplay events feed the achievement and collection managers, region
//! and avatar unlocks poll collection completion, and run initialization
//! composes the resulting bonuses.

use delver::achievements::{AchievementEvent, AchievementManager, EventKind, RewardLedger};
use delver::avatar::{AvatarManager, PartCategory};
use delver::collection::{get_set, CollectedItem, CollectionManager};
use delver::regions::RegionManager;
use delver::run_init::{initialize_run, RunParams, RunStatus};
use delver::storage::MemoryStore;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn collect_set(collection: &mut CollectionManager, set_id: &str) {
    for item in get_set(set_id).unwrap().items {
        collection.add_collected_item(CollectedItem::now(item.id, set_id));
    }
}

// =============================================================================
// Depth milestones
// =============================================================================

#[test]
fn test_reaching_depth_25_unlocks_every_depth_milestone_at_once() {
    init_logging();
    let mut achievements = AchievementManager::load(Box::new(MemoryStore::new()));

    let updates = achievements.process_event(AchievementEvent::now(EventKind::DepthReached {
        depth: 25,
    }));
    let unlocked: Vec<_> = updates
        .iter()
        .filter(|u| u.newly_unlocked)
        .map(|u| u.achievement_id)
        .collect();

    for id in [
        "milestone-depth-5",
        "milestone-depth-10",
        "milestone-depth-15",
        "milestone-depth-20",
        "milestone-depth-25",
    ] {
        assert!(unlocked.contains(&id), "expected {id} in {unlocked:?}");
    }
}

// =============================================================================
// Collection -> region -> avatar chain
// =============================================================================

#[test]
fn test_silk_road_completion_gates_desert_oasis() {
    init_logging();
    let mut collection = CollectionManager::load(Box::new(MemoryStore::new()));
    let regions = RegionManager::load(Box::new(MemoryStore::new()));

    collect_set(&mut collection, "silk_road_set");
    let progress = collection.collection_progress();
    assert!(progress.completed_sets.contains(&"silk_road_set".to_string()));

    // Set requirement met, but only 5 of the required 20 items collected
    assert!(!regions.can_unlock_region("desert_oasis", &progress));

    collect_set(&mut collection, "forest_relics_set");
    collect_set(&mut collection, "cartographers_set");
    collect_set(&mut collection, "dragon_hoard_set");

    let progress = collection.collection_progress();
    assert_eq!(progress.total_items, 20);
    assert!(regions.can_unlock_region("desert_oasis", &progress));
}

#[test]
fn test_full_unlock_chain_from_item_pickups() {
    init_logging();
    let mut achievements = AchievementManager::load(Box::new(MemoryStore::new()));
    let mut collection = CollectionManager::load(Box::new(MemoryStore::new()));
    let mut regions = RegionManager::load(Box::new(MemoryStore::new()));
    let mut avatar = AvatarManager::load(Box::new(MemoryStore::new()));
    let mut ledger = RewardLedger::new();

    // The host reports each pickup and fans out completions, the way the
    // dungeon game's reward step does.
    for set_id in ["silk_road_set", "forest_relics_set", "cartographers_set", "dragon_hoard_set"] {
        for item in get_set(set_id).unwrap().items {
            if let Some(completed) =
                collection.add_collected_item(CollectedItem::now(item.id, set_id))
            {
                let updates = achievements.process_event(AchievementEvent::now(
                    EventKind::CollectionCompleted { set_id: completed },
                ));
                for update in updates.iter().filter(|u| u.newly_unlocked) {
                    let def = delver::achievements::get_achievement_def(update.achievement_id)
                        .unwrap();
                    ledger.grant_rewards_for_achievement(def);
                }
                avatar.check_for_avatar_unlocks(collection.completed_sets());
            }
        }
    }

    // First set completion unlocked the collection achievement, once
    assert!(achievements.get("collection-first-set").unwrap().is_unlocked());
    assert!(ledger.is_granted("collection-first-set"));

    // All four avatar parts unlocked on top of the three defaults
    assert_eq!(avatar.unlocked_parts().len(), 7);
    assert!(avatar.equip("head_silk_turban"));
    assert_eq!(avatar.equipped_part(PartCategory::Head), "head_silk_turban");

    // Both gated regions are now unlockable and selectable
    let progress = collection.collection_progress();
    regions.unlock_region("desert_oasis", &progress).unwrap();
    regions.unlock_region("sunken_crypts", &progress).unwrap();
    regions.select_region("desert_oasis").unwrap();
    assert_eq!(regions.selected_region(), "desert_oasis");
}

// =============================================================================
// Run initialization
// =============================================================================

#[test]
fn test_run_initialization_composes_bonuses() {
    init_logging();
    let mut collection = CollectionManager::load(Box::new(MemoryStore::new()));

    let params = RunParams {
        base_energy: 1000,
        steps: 8000,
        selected_region_id: "forest_depths".to_string(),
    };

    // Baseline: no bonuses, energy passes through
    let baseline = initialize_run("r1", &params, &collection).unwrap();
    assert_eq!(baseline.run.id, "r1");
    assert_eq!(baseline.total_energy, 1000);
    assert!(baseline.total_energy >= baseline.base_energy);

    // Completing sets only ever raises the envelope
    collect_set(&mut collection, "forest_relics_set");
    collect_set(&mut collection, "silk_road_set");
    let boosted = initialize_run("r2", &params, &collection).unwrap();
    assert_eq!(boosted.summary.energy_efficiency, 20);
    assert_eq!(boosted.total_energy, 1200 + 400);
    assert_eq!(boosted.run.status, RunStatus::Queued);
    assert!(boosted.total_energy > baseline.total_energy);
}

// =============================================================================
// Restart behavior
// =============================================================================

#[test]
fn test_whole_engine_state_survives_restart() {
    init_logging();
    let achievement_store = MemoryStore::new();
    let collection_store = MemoryStore::new();
    let region_store = MemoryStore::new();

    {
        let mut achievements = AchievementManager::load(Box::new(achievement_store.clone()));
        let mut collection = CollectionManager::load(Box::new(collection_store.clone()));
        let mut regions = RegionManager::load(Box::new(region_store.clone()));

        achievements.process_event(AchievementEvent::now(EventKind::DepthReached {
            depth: 15,
        }));
        collect_set(&mut collection, "cartographers_set");
        collect_set(&mut collection, "dragon_hoard_set");
        regions
            .unlock_region("sunken_crypts", &collection.collection_progress())
            .unwrap();
    }

    // "Relaunch" over the same storage
    let achievements = AchievementManager::load(Box::new(achievement_store));
    let collection = CollectionManager::load(Box::new(collection_store));
    let regions = RegionManager::load(Box::new(region_store));

    assert!(achievements.get("milestone-depth-15").unwrap().is_unlocked());
    assert!(!achievements.get("milestone-depth-20").unwrap().is_unlocked());
    assert!(collection.is_set_completed("dragon_hoard_set"));
    assert!(regions.is_unlocked("sunken_crypts"));

    // Restored state still composes into runs correctly
    let result = initialize_run(
        "r9",
        &RunParams {
            base_energy: 500,
            steps: 2000,
            selected_region_id: "sunken_crypts".to_string(),
        },
        &collection,
    )
    .unwrap();
    // 500 base + 100*2 steps bonus + 200 region bonus
    assert_eq!(result.total_energy, 900);
    assert_eq!(result.total_items_bonus, 4);
}
