//! Per-achievement progress and unlock state.

use super::types::{
    AchievementDef, AchievementEvent, Progress, ProgressUpdate, RequirementCheck,
};

/// Owns the mutable state of a single achievement. The manager holds the
/// authoritative map from id to model; nothing else mutates this state.
#[derive(Debug, Clone)]
pub struct AchievementModel {
    def: &'static AchievementDef,
    unlocked: bool,
    unlocked_at: Option<i64>,
    progress: Progress,
}

impl AchievementModel {
    pub fn new(def: &'static AchievementDef) -> Self {
        Self {
            def,
            unlocked: false,
            unlocked_at: None,
            progress: Progress::new(def.requirement.target()),
        }
    }

    pub fn def(&self) -> &'static AchievementDef {
        self.def
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Unix seconds of the unlock, once it has happened.
    pub fn unlocked_at(&self) -> Option<i64> {
        self.unlocked_at
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Evaluate an event against this achievement's requirement.
    /// No side effects; the manager decides whether to advance progress.
    pub fn check_requirement(&self, event: &AchievementEvent) -> RequirementCheck {
        RequirementCheck {
            matched: self.def.requirement.matches(&event.kind),
            already_unlocked: self.unlocked,
        }
    }

    /// Set progress to `new_progress` (clamped to `[0, target]`), unlocking
    /// the first time the target is reached. The unlock timestamp is now.
    pub fn update_progress(&mut self, new_progress: u32) -> ProgressUpdate {
        self.update_progress_at(new_progress, chrono::Utc::now().timestamp())
    }

    /// Same as [`update_progress`](Self::update_progress) but with an
    /// explicit timestamp, used when replaying the persisted event log so
    /// unlock times survive a restore.
    pub fn update_progress_at(&mut self, new_progress: u32, timestamp: i64) -> ProgressUpdate {
        let previous = self.progress.current;
        let current = new_progress.min(self.progress.target);
        self.progress.current = current;

        // Unlock transitions false -> true exactly once and never reverts.
        let newly_unlocked = !self.unlocked && current >= self.progress.target;
        if newly_unlocked {
            self.unlocked = true;
            self.unlocked_at = Some(timestamp);
        }

        ProgressUpdate {
            achievement_id: self.def.id,
            previous,
            current,
            target: self.progress.target,
            newly_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::data::get_achievement_def;
    use crate::achievements::types::EventKind;

    fn model(id: &str) -> AchievementModel {
        AchievementModel::new(get_achievement_def(id).unwrap())
    }

    #[test]
    fn test_progress_is_clamped_to_target() {
        let mut m = model("milestone-depth-5");

        let update = m.update_progress(99);
        assert_eq!(update.current, 5);
        assert_eq!(m.progress().current, 5);
    }

    #[test]
    fn test_unlock_happens_exactly_once() {
        let mut m = model("milestone-depth-5");

        let first = m.update_progress(5);
        assert!(first.newly_unlocked);
        assert!(m.is_unlocked());
        assert!(m.unlocked_at().is_some());

        // Reaching the target again is not a new unlock
        let second = m.update_progress(5);
        assert!(!second.newly_unlocked);
        assert!(!second.changed());
    }

    #[test]
    fn test_unlock_never_reverts() {
        let mut m = model("milestone-depth-5");
        m.update_progress(5);

        let stamp = m.unlocked_at();
        m.update_progress(0);
        assert!(m.is_unlocked());
        assert_eq!(m.unlocked_at(), stamp);
    }

    #[test]
    fn test_check_requirement_has_no_side_effects() {
        let m = model("milestone-depth-10");
        let event = AchievementEvent::now(EventKind::DepthReached { depth: 12 });

        let check = m.check_requirement(&event);
        assert!(check.matched);
        assert!(!check.already_unlocked);

        // State untouched
        assert!(!m.is_unlocked());
        assert_eq!(m.progress().current, 0);
    }

    #[test]
    fn test_replay_preserves_unlock_timestamp() {
        let mut m = model("streak-week");
        let update = m.update_progress_at(7, 1_600_000_000);

        assert!(update.newly_unlocked);
        assert_eq!(m.unlocked_at(), Some(1_600_000_000));
    }
}
