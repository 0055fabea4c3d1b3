//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Milestone,
    Risk,
    Efficiency,
    Exploration,
    Collection,
    Streak,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 6] = [
        AchievementCategory::Milestone,
        AchievementCategory::Risk,
        AchievementCategory::Efficiency,
        AchievementCategory::Exploration,
        AchievementCategory::Collection,
        AchievementCategory::Streak,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Milestone => "Milestone",
            AchievementCategory::Risk => "Risk",
            AchievementCategory::Efficiency => "Efficiency",
            AchievementCategory::Exploration => "Exploration",
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Streak => "Streak",
        }
    }
}

/// Rarity tier, shared by achievements and collectible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// A gameplay moment reported by the dungeon game.
///
/// Serialized into the persisted event log, which is the source of truth
/// for rebuilding achievement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    DepthReached {
        depth: u32,
    },
    CollectionCompleted {
        set_id: String,
    },
    StreakMilestone {
        days: u32,
    },
    RiskTaken {
        energy_remaining: u32,
        depth: u32,
        cashed_out: bool,
    },
    EfficiencyAchieved {
        energy_per_depth: f64,
    },
    Exploration {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shortcut_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region_id: Option<String>,
    },
}

/// An event plus the moment it happened (Unix seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementEvent {
    #[serde(flatten)]
    pub kind: EventKind,
    pub timestamp: i64,
}

impl AchievementEvent {
    /// Wrap an event kind with the current time.
    pub fn now(kind: EventKind) -> Self {
        Self {
            kind,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// What it takes to unlock an achievement. One variant per requirement
/// kind, each with a pure matcher, so a new kind cannot be added without
/// the compiler pointing at every match that needs updating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    /// Reach at least this depth in a single run.
    Depth { threshold: u32 },
    /// Complete a collection set. Only binary (`sets_required == 1`)
    /// requirements ever match; progress still counts one per completion.
    Collection { sets_required: u32 },
    /// Maintain a daily step streak of at least this many days.
    Streak { days: u32 },
    /// Survive an encounter with strictly less energy than this.
    Risk { energy_below: u32 },
    /// Finish a run spending at most this much energy per depth level.
    Efficiency { max_energy_per_depth: f64 },
    /// Discover a shortcut or a new region.
    Exploration,
    /// Cash out from at least this depth.
    CashOutAtDepth { depth: u32 },
}

impl Requirement {
    /// Progress target for this requirement. Binary requirements target 1;
    /// threshold requirements target the threshold itself so the progress
    /// bar reads naturally (e.g. 18/25 for a depth-25 milestone).
    pub fn target(&self) -> u32 {
        match self {
            Requirement::Depth { threshold } => *threshold,
            Requirement::Collection { sets_required } => *sets_required,
            Requirement::Streak { days } => *days,
            Requirement::Risk { .. } => 1,
            Requirement::Efficiency { .. } => 1,
            Requirement::Exploration => 1,
            Requirement::CashOutAtDepth { .. } => 1,
        }
    }

    /// Pure matcher: does this event satisfy the requirement?
    pub fn matches(&self, event: &EventKind) -> bool {
        match (self, event) {
            (Requirement::Depth { threshold }, EventKind::DepthReached { depth }) => {
                depth >= threshold
            }
            (
                Requirement::Collection { sets_required },
                EventKind::CollectionCompleted { .. },
            ) => *sets_required == 1,
            (Requirement::Streak { days }, EventKind::StreakMilestone { days: reached }) => {
                reached >= days
            }
            // Survival below the threshold is strict: exactly `energy_below`
            // remaining does not count.
            (
                Requirement::Risk { energy_below },
                EventKind::RiskTaken {
                    energy_remaining, ..
                },
            ) => energy_remaining < energy_below,
            (
                Requirement::Efficiency {
                    max_energy_per_depth,
                },
                EventKind::EfficiencyAchieved { energy_per_depth },
            ) => energy_per_depth <= max_energy_per_depth,
            (Requirement::Exploration, EventKind::Exploration { .. }) => true,
            (
                Requirement::CashOutAtDepth { depth: required },
                EventKind::RiskTaken {
                    depth, cashed_out, ..
                },
            ) => *cashed_out && depth >= required,
            _ => false,
        }
    }
}

/// A reward attached to an achievement definition. Rewards are bookkeeping
/// only; applying them to the game economy is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reward {
    Energy { amount: u32 },
    Items { amount: u32, description: &'static str },
    Bonus { description: &'static str },
    Title { title: &'static str },
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub requirement: Requirement,
    pub rewards: &'static [Reward],
}

/// Progress toward an achievement's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub target: u32,
}

impl Progress {
    pub fn new(target: u32) -> Self {
        Self { current: 0, target }
    }

    /// Completion percentage in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        100.0 * f64::from(self.current) / f64::from(self.target)
    }
}

/// Result of advancing an achievement's progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub achievement_id: &'static str,
    pub previous: u32,
    pub current: u32,
    pub target: u32,
    /// True only when this update caused the unlock, never when it merely
    /// re-confirmed an already-unlocked achievement.
    pub newly_unlocked: bool,
}

impl ProgressUpdate {
    /// Did this call change anything at all?
    pub fn changed(&self) -> bool {
        self.newly_unlocked || self.current != self.previous
    }
}

/// Side-effect-free requirement check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementCheck {
    pub matched: bool,
    pub already_unlocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_requirement_matching() {
        let req = Requirement::Depth { threshold: 10 };

        assert!(req.matches(&EventKind::DepthReached { depth: 10 }));
        assert!(req.matches(&EventKind::DepthReached { depth: 25 }));
        assert!(!req.matches(&EventKind::DepthReached { depth: 9 }));
        assert!(!req.matches(&EventKind::StreakMilestone { days: 10 }));
    }

    #[test]
    fn test_risk_requirement_is_strict() {
        let req = Requirement::Risk { energy_below: 10 };
        let event = |energy_remaining| EventKind::RiskTaken {
            energy_remaining,
            depth: 5,
            cashed_out: false,
        };

        assert!(req.matches(&event(9)));
        // Exactly at the threshold does not count
        assert!(!req.matches(&event(10)));
    }

    #[test]
    fn test_efficiency_requirement_lower_is_better() {
        let req = Requirement::Efficiency {
            max_energy_per_depth: 50.0,
        };

        assert!(req.matches(&EventKind::EfficiencyAchieved {
            energy_per_depth: 50.0
        }));
        assert!(req.matches(&EventKind::EfficiencyAchieved {
            energy_per_depth: 32.5
        }));
        assert!(!req.matches(&EventKind::EfficiencyAchieved {
            energy_per_depth: 50.1
        }));
    }

    #[test]
    fn test_collection_requirement_is_binary() {
        let single = Requirement::Collection { sets_required: 1 };
        let multi = Requirement::Collection { sets_required: 3 };
        let event = EventKind::CollectionCompleted {
            set_id: "silk_road_set".to_string(),
        };

        assert!(single.matches(&event));
        assert!(!multi.matches(&event));
    }

    #[test]
    fn test_cash_out_requirement_needs_both_criteria() {
        let req = Requirement::CashOutAtDepth { depth: 15 };

        assert!(req.matches(&EventKind::RiskTaken {
            energy_remaining: 40,
            depth: 15,
            cashed_out: true,
        }));
        // Deep enough but did not cash out
        assert!(!req.matches(&EventKind::RiskTaken {
            energy_remaining: 40,
            depth: 20,
            cashed_out: false,
        }));
        // Cashed out but too shallow
        assert!(!req.matches(&EventKind::RiskTaken {
            energy_remaining: 40,
            depth: 14,
            cashed_out: true,
        }));
    }

    #[test]
    fn test_progress_percentage() {
        let progress = Progress {
            current: 18,
            target: 25,
        };
        assert!((progress.percentage() - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_event_serialization_tags() {
        let event = AchievementEvent {
            kind: EventKind::DepthReached { depth: 12 },
            timestamp: 1_700_000_000,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"depth_reached\""));

        let back: AchievementEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
