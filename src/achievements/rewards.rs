//! Achievement reward ledger.
//!
//! Pure bookkeeping: records which achievements have had their rewards
//! granted and returns the same recorded result on every repeat call.
//! Actually applying rewards to the game economy is the host's job.

use std::collections::HashMap;

use super::types::{AchievementDef, Reward};

/// Result of a grant request.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantResult {
    /// False when the achievement carries no rewards.
    pub granted: bool,
    pub rewards: Vec<Reward>,
}

/// Sum of everything granted so far. Energy adds up numerically; the other
/// reward kinds accumulate as lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RewardTotals {
    pub energy: u32,
    pub items: Vec<&'static str>,
    pub bonuses: Vec<&'static str>,
    pub titles: Vec<&'static str>,
}

/// Grants rewards exactly once per achievement id.
#[derive(Debug, Default)]
pub struct RewardLedger {
    granted: HashMap<&'static str, GrantResult>,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant the rewards for an unlocked achievement. The first call
    /// records the result; every later call for the same id returns the
    /// recorded result unchanged, so double-granting is impossible.
    pub fn grant_rewards_for_achievement(&mut self, def: &'static AchievementDef) -> GrantResult {
        self.granted
            .entry(def.id)
            .or_insert_with(|| GrantResult {
                granted: !def.rewards.is_empty(),
                rewards: def.rewards.to_vec(),
            })
            .clone()
    }

    /// Has this achievement's grant already been recorded?
    pub fn is_granted(&self, achievement_id: &str) -> bool {
        self.granted.contains_key(achievement_id)
    }

    /// Sum all granted rewards by kind.
    pub fn total_rewards(&self) -> RewardTotals {
        let mut totals = RewardTotals::default();
        for result in self.granted.values() {
            for reward in &result.rewards {
                match reward {
                    Reward::Energy { amount } => totals.energy += amount,
                    Reward::Items { description, .. } => totals.items.push(description),
                    Reward::Bonus { description } => totals.bonuses.push(description),
                    Reward::Title { title } => totals.titles.push(title),
                }
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::data::get_achievement_def;

    #[test]
    fn test_first_grant_returns_rewards() {
        let mut ledger = RewardLedger::new();
        let def = get_achievement_def("milestone-depth-5").unwrap();

        let result = ledger.grant_rewards_for_achievement(def);
        assert!(result.granted);
        assert_eq!(result.rewards, def.rewards.to_vec());
        assert!(ledger.is_granted("milestone-depth-5"));
    }

    #[test]
    fn test_repeat_grant_returns_identical_result() {
        let mut ledger = RewardLedger::new();
        let def = get_achievement_def("milestone-depth-25").unwrap();

        let first = ledger.grant_rewards_for_achievement(def);
        let second = ledger.grant_rewards_for_achievement(def);
        assert_eq!(first, second);

        // Energy was not double-counted
        assert_eq!(ledger.total_rewards().energy, 500);
    }

    #[test]
    fn test_totals_sum_energy_and_collect_lists() {
        let mut ledger = RewardLedger::new();
        ledger.grant_rewards_for_achievement(get_achievement_def("milestone-depth-5").unwrap());
        ledger.grant_rewards_for_achievement(get_achievement_def("milestone-depth-20").unwrap());
        ledger.grant_rewards_for_achievement(get_achievement_def("milestone-depth-25").unwrap());
        ledger.grant_rewards_for_achievement(get_achievement_def("risk-deaths-door").unwrap());

        let totals = ledger.total_rewards();
        assert_eq!(totals.energy, 25 + 200 + 500);
        assert_eq!(totals.items, vec!["Depthstone charm"]);
        let mut titles = totals.titles.clone();
        titles.sort_unstable();
        assert_eq!(titles, vec!["Abyss Walker", "the Unkillable"]);
    }
}
