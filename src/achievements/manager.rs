//! Achievement manager: event routing, statistics, persistence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::data::ALL_ACHIEVEMENTS;
use super::model::AchievementModel;
use super::types::{
    AchievementCategory, AchievementEvent, EventKind, Progress, ProgressUpdate, Rarity,
};
use crate::storage::{self, keys, KeyValueStore};

/// Persisted per-achievement state. Written as a display snapshot; the
/// event log is what restores actually replay from.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AchievementRecord {
    id: String,
    unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unlocked_at: Option<i64>,
    progress: Progress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AchievementSnapshot {
    achievements: Vec<AchievementRecord>,
    last_saved: i64,
}

/// Unlocked/total pair for one statistics bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketCount {
    pub unlocked: usize,
    pub total: usize,
}

/// Aggregate view over all achievements. Pure read, recomputed per call.
#[derive(Debug, Clone)]
pub struct AchievementStatistics {
    pub total: usize,
    pub unlocked: usize,
    pub locked: usize,
    /// Overall completion in `[0, 100]`.
    pub completion_rate: f64,
    pub by_category: HashMap<AchievementCategory, BucketCount>,
    pub by_rarity: HashMap<Rarity, BucketCount>,
}

/// Owns every achievement model and routes gameplay events to them.
pub struct AchievementManager {
    models: HashMap<&'static str, AchievementModel>,
    event_log: Vec<AchievementEvent>,
    store: Box<dyn KeyValueStore>,
}

impl AchievementManager {
    /// Build the manager and hydrate state by replaying the persisted event
    /// log. Replaying (rather than restoring the derived snapshot) keeps the
    /// single unlock-transition invariant and reconstructs collection-type
    /// progress faithfully. Returns only after hydration is complete.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let events: Vec<AchievementEvent> =
            storage::load_or_default(&*store, keys::ACHIEVEMENT_EVENTS);

        let mut manager = Self {
            models: ALL_ACHIEVEMENTS
                .iter()
                .map(|def| (def.id, AchievementModel::new(def)))
                .collect(),
            event_log: Vec::new(),
            store,
        };

        for event in &events {
            manager.apply_event(event);
        }
        manager.event_log = events;
        manager
    }

    /// Route one gameplay event through every achievement, append it to the
    /// persisted log, and return the updates that actually changed state.
    /// Re-processing an already-consumed event is safe: unlocked
    /// achievements are skipped.
    pub fn process_event(&mut self, event: AchievementEvent) -> Vec<ProgressUpdate> {
        let updates = self.apply_event(&event);
        self.event_log.push(event);

        storage::persist(&mut *self.store, keys::ACHIEVEMENT_EVENTS, &self.event_log);
        self.persist_snapshot();

        updates
    }

    /// Advance every matching, still-locked achievement. Collection
    /// completions count one set per event; every other kind jumps straight
    /// to the target on a single qualifying event.
    fn apply_event(&mut self, event: &AchievementEvent) -> Vec<ProgressUpdate> {
        let mut updates = Vec::new();

        // Definition order keeps the returned updates deterministic.
        for def in ALL_ACHIEVEMENTS {
            let model = self
                .models
                .get_mut(def.id)
                .expect("model exists for every definition");

            let check = model.check_requirement(event);
            if !check.matched || check.already_unlocked {
                continue;
            }

            let next = match event.kind {
                EventKind::CollectionCompleted { .. } => model.progress().current + 1,
                _ => model.progress().target,
            };
            let update = model.update_progress_at(next, event.timestamp);
            if update.changed() {
                updates.push(update);
            }
        }

        updates
    }

    fn persist_snapshot(&mut self) {
        let snapshot = AchievementSnapshot {
            achievements: self
                .models()
                .map(|m| AchievementRecord {
                    id: m.def().id.to_string(),
                    unlocked: m.is_unlocked(),
                    unlocked_at: m.unlocked_at(),
                    progress: m.progress(),
                })
                .collect(),
            last_saved: chrono::Utc::now().timestamp(),
        };
        storage::persist(&mut *self.store, keys::ACHIEVEMENTS, &snapshot);
    }

    /// Look up a single achievement's model.
    pub fn get(&self, id: &str) -> Option<&AchievementModel> {
        self.models.get(id)
    }

    /// All models in definition order.
    pub fn models(&self) -> impl Iterator<Item = &AchievementModel> {
        ALL_ACHIEVEMENTS.iter().map(|def| &self.models[def.id])
    }

    /// Events processed so far, oldest first.
    pub fn event_log(&self) -> &[AchievementEvent] {
        &self.event_log
    }

    /// Aggregate unlocked/locked counts and per-bucket completion.
    pub fn statistics(&self) -> AchievementStatistics {
        let total = ALL_ACHIEVEMENTS.len();
        let unlocked = self.models().filter(|m| m.is_unlocked()).count();

        let mut by_category: HashMap<AchievementCategory, BucketCount> = HashMap::new();
        let mut by_rarity: HashMap<Rarity, BucketCount> = HashMap::new();
        for model in self.models() {
            let def = model.def();
            let cat = by_category.entry(def.category).or_default();
            cat.total += 1;
            let rar = by_rarity.entry(def.rarity).or_default();
            rar.total += 1;
            if model.is_unlocked() {
                cat.unlocked += 1;
                rar.unlocked += 1;
            }
        }

        AchievementStatistics {
            total,
            unlocked,
            locked: total - unlocked,
            completion_rate: if total == 0 {
                0.0
            } else {
                100.0 * unlocked as f64 / total as f64
            },
            by_category,
            by_rarity,
        }
    }
}
