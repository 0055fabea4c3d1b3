//! Static collection set definitions.

use super::types::{BonusType, CollectionSet, ItemDef, SetBonus, SetCategory, StackingType};
use crate::achievements::Rarity;

/// All collection sets. 20 collectible items total across four sets.
pub const ALL_SETS: &[CollectionSet] = &[
    // ═══════════════════════════════════════════════════════════════
    // DISCOVERIES
    // ═══════════════════════════════════════════════════════════════
    CollectionSet {
        id: "forest_relics_set",
        name: "Forest Relics",
        category: SetCategory::Discoveries,
        items: &[
            ItemDef {
                id: "mossy_idol",
                name: "Mossy Idol",
                rarity: Rarity::Common,
                value: 10,
            },
            ItemDef {
                id: "carved_acorn",
                name: "Carved Acorn",
                rarity: Rarity::Common,
                value: 10,
            },
            ItemDef {
                id: "amber_shard",
                name: "Amber Shard",
                rarity: Rarity::Uncommon,
                value: 25,
            },
            ItemDef {
                id: "rootbound_crown",
                name: "Rootbound Crown",
                rarity: Rarity::Rare,
                value: 60,
            },
        ],
        bonuses: &[SetBonus {
            bonus_type: BonusType::EnergyEfficiency,
            value: 10,
            description: "+10% energy efficiency",
            stacking: StackingType::Additive,
        }],
        avatar_part_id: Some("head_fern_crown"),
    },
    CollectionSet {
        id: "cartographers_set",
        name: "Cartographer's Satchel",
        category: SetCategory::Discoveries,
        items: &[
            ItemDef {
                id: "torn_map_corner",
                name: "Torn Map Corner",
                rarity: Rarity::Common,
                value: 8,
            },
            ItemDef {
                id: "brass_compass",
                name: "Brass Compass",
                rarity: Rarity::Uncommon,
                value: 30,
            },
            ItemDef {
                id: "surveyors_sextant",
                name: "Surveyor's Sextant",
                rarity: Rarity::Uncommon,
                value: 35,
            },
            ItemDef {
                id: "inked_quill",
                name: "Inked Quill",
                rarity: Rarity::Common,
                value: 12,
            },
            ItemDef {
                id: "wayfinders_lens",
                name: "Wayfinder's Lens",
                rarity: Rarity::Rare,
                value: 70,
            },
        ],
        bonuses: &[
            SetBonus {
                bonus_type: BonusType::ShortcutChance,
                value: 5,
                description: "+5% shortcut discovery chance",
                stacking: StackingType::Additive,
            },
            SetBonus {
                bonus_type: BonusType::EncounterOdds,
                value: 5,
                description: "+5% favorable encounter odds",
                stacking: StackingType::Additive,
            },
        ],
        avatar_part_id: Some("torso_cartographer_coat"),
    },
    // ═══════════════════════════════════════════════════════════════
    // TRADE GOODS
    // ═══════════════════════════════════════════════════════════════
    CollectionSet {
        id: "silk_road_set",
        name: "Silk Road Cargo",
        category: SetCategory::TradeGoods,
        items: &[
            ItemDef {
                id: "bolt_of_silk",
                name: "Bolt of Silk",
                rarity: Rarity::Common,
                value: 15,
            },
            ItemDef {
                id: "saffron_pouch",
                name: "Saffron Pouch",
                rarity: Rarity::Uncommon,
                value: 40,
            },
            ItemDef {
                id: "jade_figurine",
                name: "Jade Figurine",
                rarity: Rarity::Uncommon,
                value: 45,
            },
            ItemDef {
                id: "caravan_ledger",
                name: "Caravan Ledger",
                rarity: Rarity::Common,
                value: 12,
            },
            ItemDef {
                id: "merchants_seal",
                name: "Merchant's Seal",
                rarity: Rarity::Rare,
                value: 80,
            },
        ],
        bonuses: &[
            SetBonus {
                bonus_type: BonusType::EnergyEfficiency,
                value: 10,
                description: "+10% energy efficiency",
                stacking: StackingType::Additive,
            },
            SetBonus {
                bonus_type: BonusType::StartingEnergy,
                value: 50,
                description: "+50 starting energy per 1,000 steps",
                stacking: StackingType::Additive,
            },
        ],
        avatar_part_id: Some("head_silk_turban"),
    },
    // ═══════════════════════════════════════════════════════════════
    // LEGENDARIES
    // ═══════════════════════════════════════════════════════════════
    CollectionSet {
        id: "dragon_hoard_set",
        name: "Dragon's Hoard",
        category: SetCategory::Legendaries,
        items: &[
            ItemDef {
                id: "drake_scale",
                name: "Drake Scale",
                rarity: Rarity::Uncommon,
                value: 50,
            },
            ItemDef {
                id: "molten_coin",
                name: "Molten Coin",
                rarity: Rarity::Rare,
                value: 90,
            },
            ItemDef {
                id: "wyrm_fang",
                name: "Wyrm Fang",
                rarity: Rarity::Rare,
                value: 100,
            },
            ItemDef {
                id: "ember_crown",
                name: "Ember Crown",
                rarity: Rarity::Epic,
                value: 200,
            },
            ItemDef {
                id: "heartfire_ruby",
                name: "Heartfire Ruby",
                rarity: Rarity::Epic,
                value: 250,
            },
            ItemDef {
                id: "dragons_eye",
                name: "Dragon's Eye",
                rarity: Rarity::Legendary,
                value: 500,
            },
        ],
        bonuses: &[
            SetBonus {
                bonus_type: BonusType::StartingItems,
                value: 2,
                description: "+2 starting items",
                stacking: StackingType::Additive,
            },
            SetBonus {
                bonus_type: BonusType::StartingEnergy,
                value: 100,
                description: "+100 starting energy per 1,000 steps",
                stacking: StackingType::Additive,
            },
        ],
        avatar_part_id: Some("legs_drake_greaves"),
    },
];

/// Get a set definition by id.
pub fn get_set(id: &str) -> Option<&'static CollectionSet> {
    ALL_SETS.iter().find(|s| s.id == id)
}

/// Get all sets in a category.
pub fn get_sets_by_category(category: SetCategory) -> Vec<&'static CollectionSet> {
    ALL_SETS.iter().filter(|s| s.category == category).collect()
}
