//! Collection manager: item tracking and set completion.

use std::collections::{HashMap, HashSet};

use super::data::{get_set, ALL_SETS};
use super::types::{
    CategoryProgress, CollectedItem, CollectionProgress, SetProgress,
};
use crate::storage::{self, keys, KeyValueStore};

/// Tracks collected items, detects set completion, and persists both as
/// flat lists (overwritten wholesale on every mutation).
pub struct CollectionManager {
    store: Box<dyn KeyValueStore>,
    items: Vec<CollectedItem>,
    completed_sets: Vec<String>,
}

impl CollectionManager {
    /// Build the manager with state hydrated from storage. Returns only
    /// after hydration is complete.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let items = storage::load_or_default(&*store, keys::COLLECTED_ITEMS);
        let completed_sets = storage::load_or_default(&*store, keys::SET_COMPLETIONS);
        Self {
            store,
            items,
            completed_sets,
        }
    }

    /// Record a collected item. A record with the same `(item_id, set_id)`
    /// pair replaces the existing one, so duplicate pickups never inflate
    /// counts. Returns the set id if this pickup completed its set.
    pub fn add_collected_item(&mut self, item: CollectedItem) -> Option<String> {
        let existing = self
            .items
            .iter_mut()
            .find(|i| i.item_id == item.item_id && i.set_id == item.set_id);
        match existing {
            Some(slot) => *slot = item.clone(),
            None => self.items.push(item.clone()),
        }

        let newly_completed = self.check_set_completion(&item.set_id);
        self.persist();
        newly_completed.then(|| item.set_id)
    }

    /// Mark the set completed if every item id in its definition now has a
    /// collected record. One-time transition: an already-completed set is
    /// never re-appended and never removed.
    fn check_set_completion(&mut self, set_id: &str) -> bool {
        let Some(set) = get_set(set_id) else {
            return false;
        };
        if self.completed_sets.iter().any(|s| s == set_id) {
            return false;
        }

        let collected: HashSet<&str> = self
            .items
            .iter()
            .filter(|i| i.set_id == set_id)
            .map(|i| i.item_id.as_str())
            .collect();
        let complete = set.items.iter().all(|item| collected.contains(item.id));
        if complete {
            self.completed_sets.push(set_id.to_string());
        }
        complete
    }

    /// All collected item records.
    pub fn items(&self) -> &[CollectedItem] {
        &self.items
    }

    /// Ids of completed sets, in completion order.
    pub fn completed_sets(&self) -> &[String] {
        &self.completed_sets
    }

    pub fn is_set_completed(&self, set_id: &str) -> bool {
        self.completed_sets.iter().any(|s| s == set_id)
    }

    /// Derive the full collection snapshot from stored records and static
    /// definitions. Pure recomputation; nothing cached.
    pub fn collection_progress(&self) -> CollectionProgress {
        let mut completed_sets = Vec::new();
        let mut partial_sets = Vec::new();
        let mut by_category: HashMap<_, CategoryProgress> = HashMap::new();

        for set in ALL_SETS {
            let collected: HashSet<&str> = self
                .items
                .iter()
                .filter(|i| i.set_id == set.id)
                .map(|i| i.item_id.as_str())
                .collect();
            // Records for item ids not in the set definition don't count
            let collected_count = set
                .items
                .iter()
                .filter(|item| collected.contains(item.id))
                .count();

            let category = by_category.entry(set.category).or_default();
            category.collected_items += collected_count;
            category.total_items += set.items.len();
            category.total_sets += 1;

            if self.is_set_completed(set.id) {
                completed_sets.push(set.id.to_string());
                category.completed_sets += 1;
            } else if collected_count > 0 {
                partial_sets.push(SetProgress {
                    set_id: set.id.to_string(),
                    collected: collected_count,
                    total: set.items.len(),
                    missing: set
                        .items
                        .iter()
                        .filter(|item| !collected.contains(item.id))
                        .map(|item| item.id)
                        .collect(),
                });
            }
        }

        CollectionProgress {
            total_items: self.items.len(),
            total_sets: ALL_SETS.len(),
            completed_sets,
            partial_sets,
            by_category,
        }
    }

    fn persist(&mut self) {
        storage::persist(&mut *self.store, keys::COLLECTED_ITEMS, &self.items);
        storage::persist(&mut *self.store, keys::SET_COMPLETIONS, &self.completed_sets);
    }
}
