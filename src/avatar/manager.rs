//! Avatar collection manager: cosmetic part unlocks and equipment.

use std::collections::HashMap;

use super::data::{default_part, get_part, PartCategory};
use crate::collection::get_set;
use crate::storage::{self, keys, KeyValueStore};

/// Tracks unlocked and equipped avatar parts. Default parts are seeded
/// into the unlocked set on load and can never leave it.
pub struct AvatarManager {
    store: Box<dyn KeyValueStore>,
    unlocked: Vec<String>,
    equipped: HashMap<PartCategory, String>,
}

impl AvatarManager {
    /// Build the manager with state hydrated from storage. Seeds the
    /// per-category default parts into both the unlocked set and any
    /// category with no (or an invalid) equipped part.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let unlocked: Vec<String> =
            storage::load_or_default(&*store, keys::UNLOCKED_AVATAR_PARTS);
        let equipped: HashMap<PartCategory, String> =
            storage::load_or_default(&*store, keys::EQUIPPED_AVATAR_PARTS);

        let mut manager = Self {
            store,
            unlocked,
            equipped,
        };

        let mut seeded = false;
        for category in PartCategory::ALL {
            let default = default_part(category);
            if !manager.is_unlocked(default.id) {
                manager.unlocked.push(default.id.to_string());
                seeded = true;
            }
            let valid = manager
                .equipped
                .get(&category)
                .is_some_and(|id| manager.is_unlocked(id));
            if !valid {
                manager.equipped.insert(category, default.id.to_string());
                seeded = true;
            }
        }
        if seeded {
            manager.persist();
        }
        manager
    }

    /// Ids of unlocked parts, defaults included.
    pub fn unlocked_parts(&self) -> &[String] {
        &self.unlocked
    }

    pub fn is_unlocked(&self, part_id: &str) -> bool {
        self.unlocked.iter().any(|p| p == part_id)
    }

    /// The part currently equipped in a category.
    pub fn equipped_part(&self, category: PartCategory) -> &str {
        self.equipped
            .get(&category)
            .map(String::as_str)
            .unwrap_or(default_part(category).id)
    }

    /// Equip an unlocked part in its category. Equipping a locked or
    /// unknown part is a silent no-op; returns whether anything changed.
    pub fn equip(&mut self, part_id: &str) -> bool {
        let Some(part) = get_part(part_id) else {
            return false;
        };
        if !self.is_unlocked(part_id) {
            return false;
        }

        self.equipped.insert(part.category, part_id.to_string());
        self.persist();
        true
    }

    /// Scan completed sets and unlock the avatar parts they grant.
    /// Duplicate-safe; returns only the newly unlocked part ids.
    pub fn check_for_avatar_unlocks(&mut self, completed_sets: &[String]) -> Vec<&'static str> {
        let mut newly_unlocked = Vec::new();
        for set_id in completed_sets {
            let Some(part_id) = get_set(set_id).and_then(|set| set.avatar_part_id) else {
                continue;
            };
            if !self.is_unlocked(part_id) {
                self.unlocked.push(part_id.to_string());
                newly_unlocked.push(part_id);
            }
        }

        if !newly_unlocked.is_empty() {
            self.persist();
        }
        newly_unlocked
    }

    fn persist(&mut self) {
        storage::persist(
            &mut *self.store,
            keys::UNLOCKED_AVATAR_PARTS,
            &self.unlocked,
        );
        storage::persist(
            &mut *self.store,
            keys::EQUIPPED_AVATAR_PARTS,
            &self.equipped,
        );
    }
}
