//! Static avatar part definitions.

use serde::{Deserialize, Serialize};

/// Slot a part occupies on the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    Head,
    Torso,
    Legs,
}

impl PartCategory {
    pub const ALL: [PartCategory; 3] = [
        PartCategory::Head,
        PartCategory::Torso,
        PartCategory::Legs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PartCategory::Head => "Head",
            PartCategory::Torso => "Torso",
            PartCategory::Legs => "Legs",
        }
    }
}

/// A cosmetic avatar part.
#[derive(Debug, Clone)]
pub struct AvatarPart {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PartCategory,
    /// Default parts are implicitly unlocked and can never be removed
    /// from the unlocked set.
    pub is_default: bool,
}

/// All avatar parts. One default per category plus the set-unlocked parts
/// referenced by `CollectionSet::avatar_part_id`.
pub const ALL_PARTS: &[AvatarPart] = &[
    AvatarPart {
        id: "head_bare",
        name: "Bare Head",
        category: PartCategory::Head,
        is_default: true,
    },
    AvatarPart {
        id: "torso_tunic",
        name: "Plain Tunic",
        category: PartCategory::Torso,
        is_default: true,
    },
    AvatarPart {
        id: "legs_breeches",
        name: "Worn Breeches",
        category: PartCategory::Legs,
        is_default: true,
    },
    AvatarPart {
        id: "head_fern_crown",
        name: "Fern Crown",
        category: PartCategory::Head,
        is_default: false,
    },
    AvatarPart {
        id: "head_silk_turban",
        name: "Silk Turban",
        category: PartCategory::Head,
        is_default: false,
    },
    AvatarPart {
        id: "torso_cartographer_coat",
        name: "Cartographer's Coat",
        category: PartCategory::Torso,
        is_default: false,
    },
    AvatarPart {
        id: "legs_drake_greaves",
        name: "Drake Greaves",
        category: PartCategory::Legs,
        is_default: false,
    },
];

/// Get a part definition by id.
pub fn get_part(id: &str) -> Option<&'static AvatarPart> {
    ALL_PARTS.iter().find(|p| p.id == id)
}

/// The permanent default part for a category.
pub fn default_part(category: PartCategory) -> &'static AvatarPart {
    ALL_PARTS
        .iter()
        .find(|p| p.category == category && p.is_default)
        .expect("every category has a default part")
}
