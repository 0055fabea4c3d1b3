//! Static achievement definitions.

use super::types::{
    AchievementCategory, AchievementDef, Rarity, Requirement, Reward,
};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // DEPTH MILESTONES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "milestone-depth-5",
        title: "First Steps Down",
        description: "Reach depth 5 in a single run",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Common,
        requirement: Requirement::Depth { threshold: 5 },
        rewards: &[Reward::Energy { amount: 25 }],
    },
    AchievementDef {
        id: "milestone-depth-10",
        title: "Into the Dark",
        description: "Reach depth 10 in a single run",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Common,
        requirement: Requirement::Depth { threshold: 10 },
        rewards: &[Reward::Energy { amount: 50 }],
    },
    AchievementDef {
        id: "milestone-depth-15",
        title: "Seasoned Delver",
        description: "Reach depth 15 in a single run",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Uncommon,
        requirement: Requirement::Depth { threshold: 15 },
        rewards: &[Reward::Energy { amount: 100 }],
    },
    AchievementDef {
        id: "milestone-depth-20",
        title: "The Long Descent",
        description: "Reach depth 20 in a single run",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Rare,
        requirement: Requirement::Depth { threshold: 20 },
        rewards: &[
            Reward::Energy { amount: 200 },
            Reward::Items {
                amount: 1,
                description: "Depthstone charm",
            },
        ],
    },
    AchievementDef {
        id: "milestone-depth-25",
        title: "Abyss Walker",
        description: "Reach depth 25 in a single run",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Epic,
        requirement: Requirement::Depth { threshold: 25 },
        rewards: &[
            Reward::Energy { amount: 500 },
            Reward::Title {
                title: "Abyss Walker",
            },
        ],
    },
    // ═══════════════════════════════════════════════════════════════
    // RISK
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "risk-narrow-escape",
        title: "Narrow Escape",
        description: "Survive an encounter with less than 10 energy remaining",
        category: AchievementCategory::Risk,
        rarity: Rarity::Uncommon,
        requirement: Requirement::Risk { energy_below: 10 },
        rewards: &[Reward::Energy { amount: 75 }],
    },
    AchievementDef {
        id: "risk-deaths-door",
        title: "Death's Door",
        description: "Survive an encounter with less than 3 energy remaining",
        category: AchievementCategory::Risk,
        rarity: Rarity::Epic,
        requirement: Requirement::Risk { energy_below: 3 },
        rewards: &[Reward::Title {
            title: "the Unkillable",
        }],
    },
    AchievementDef {
        id: "risk-deep-pockets",
        title: "Deep Pockets",
        description: "Cash out from depth 15 or deeper",
        category: AchievementCategory::Risk,
        rarity: Rarity::Rare,
        requirement: Requirement::CashOutAtDepth { depth: 15 },
        rewards: &[Reward::Items {
            amount: 2,
            description: "Delver's strongbox",
        }],
    },
    // ═══════════════════════════════════════════════════════════════
    // EFFICIENCY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "efficiency-lean-delver",
        title: "Lean Delver",
        description: "Finish a run spending at most 50 energy per depth level",
        category: AchievementCategory::Efficiency,
        rarity: Rarity::Rare,
        requirement: Requirement::Efficiency {
            max_energy_per_depth: 50.0,
        },
        rewards: &[Reward::Bonus {
            description: "Efficient footing",
        }],
    },
    // ═══════════════════════════════════════════════════════════════
    // EXPLORATION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "exploration-pathfinder",
        title: "Pathfinder",
        description: "Discover your first shortcut",
        category: AchievementCategory::Exploration,
        rarity: Rarity::Common,
        requirement: Requirement::Exploration,
        rewards: &[Reward::Energy { amount: 25 }],
    },
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "collection-first-set",
        title: "Curator",
        description: "Complete your first collection set",
        category: AchievementCategory::Collection,
        rarity: Rarity::Uncommon,
        requirement: Requirement::Collection { sets_required: 1 },
        rewards: &[Reward::Bonus {
            description: "Collector's eye",
        }],
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAKS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "streak-week",
        title: "Creature of Habit",
        description: "Keep a 7-day step streak",
        category: AchievementCategory::Streak,
        rarity: Rarity::Uncommon,
        requirement: Requirement::Streak { days: 7 },
        rewards: &[Reward::Energy { amount: 100 }],
    },
    AchievementDef {
        id: "streak-month",
        title: "Relentless",
        description: "Keep a 30-day step streak",
        category: AchievementCategory::Streak,
        rarity: Rarity::Epic,
        requirement: Requirement::Streak { days: 30 },
        rewards: &[
            Reward::Energy { amount: 500 },
            Reward::Title { title: "Relentless" },
        ],
    },
];

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get achievements filtered by category.
pub fn get_achievements_by_category(
    category: AchievementCategory,
) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_every_category_is_represented() {
        for category in AchievementCategory::ALL {
            assert!(
                !get_achievements_by_category(category).is_empty(),
                "No achievements in category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def("milestone-depth-25").unwrap();
        assert_eq!(def.title, "Abyss Walker");
        assert_eq!(def.category, AchievementCategory::Milestone);
        assert_eq!(def.requirement, Requirement::Depth { threshold: 25 });

        assert!(get_achievement_def("no-such-achievement").is_none());
    }

    #[test]
    fn test_binary_requirements_target_one() {
        for def in ALL_ACHIEVEMENTS {
            match def.requirement {
                Requirement::Risk { .. }
                | Requirement::Efficiency { .. }
                | Requirement::Exploration
                | Requirement::CashOutAtDepth { .. } => {
                    assert_eq!(def.requirement.target(), 1, "{}", def.id)
                }
                _ => {}
            }
        }
    }
}
