//! The shipped catalog: three locations, three rods, four baits, and a
//! twelve-entry loot table.
//!
//! Every id is unique across
//! the whole catalog; `tests` below pin that invariant along with the
//! fallback-pool guarantee the loot resolver relies on.

use super::types::{
    Bait, BaitPerks, Environment, Habitat, Location, LootEntry, LootKind, Rarity, Rod, RodPerks,
};

/// The rod every new account owns.
pub const STARTER_ROD_ID: &str = "bamboo";
/// The bait every new account starts with.
pub const STARTER_BAIT_ID: &str = "worm";

pub static LOCATIONS: [Location; 3] = [
    Location {
        id: "willow_creek",
        name: "Willow Creek",
        description: "A calm forest river, kind to beginners.",
        environment: Environment::Freshwater,
    },
    Location {
        id: "saltcrag_cape",
        name: "Saltcrag Cape",
        description: "A tropical coast of danger and opportunity.",
        environment: Environment::Saltwater,
    },
    Location {
        id: "cinder_pools",
        name: "Cinder Pools",
        description: "Searing magma pools. Masters only.",
        environment: Environment::Lava,
    },
];

pub static RODS: [Rod; 3] = [
    Rod {
        id: "bamboo",
        name: "Bamboo Rod",
        description: "A simple cane. It just about works.",
        price: 0,
        perks: RodPerks {
            trash_reduction: 0.0,
            rare_bonus: 0.0,
            time_reduction: 0.0,
        },
    },
    Rod {
        id: "carbon",
        name: "Reinforced Carbon Rod",
        description: "Sturdy and precise; junk rarely takes the hook.",
        price: 500,
        perks: RodPerks {
            trash_reduction: 0.10,
            rare_bonus: 0.0,
            time_reduction: 0.0,
        },
    },
    Rod {
        id: "mithril",
        name: "Enchanted Mithril Rod",
        description: "Shimmers with magic the fish cannot resist.",
        price: 2000,
        perks: RodPerks {
            trash_reduction: 0.0,
            rare_bonus: 0.15,
            time_reduction: 1.0,
        },
    },
];

pub static BAITS: [Bait; 4] = [
    Bait {
        id: "worm",
        name: "Common Worm",
        description: "An ordinary earthworm.",
        price: 5,
        perks: BaitPerks {
            saltwater_bonus: 0.0,
            rare_bonus: 0.0,
            trash_bonus: 0.0,
        },
    },
    Bait {
        id: "shrimp",
        name: "Brightscale Shrimp",
        description: "A delicacy beloved by saltwater fish.",
        price: 20,
        perks: BaitPerks {
            saltwater_bonus: 0.15,
            rare_bonus: 0.0,
            trash_bonus: 0.0,
        },
    },
    Bait {
        id: "glowworm",
        name: "Glowworm",
        description: "Shines in the dark, drawing rare creatures.",
        price: 50,
        perks: BaitPerks {
            saltwater_bonus: 0.0,
            rare_bonus: 0.10,
            trash_bonus: 0.0,
        },
    },
    Bait {
        id: "meat",
        name: "Rancid Meat",
        description: "Smells awful. Might attract strange things.",
        price: 15,
        perks: BaitPerks {
            saltwater_bonus: 0.0,
            rare_bonus: 0.0,
            trash_bonus: 0.20,
        },
    },
];

pub static LOOT_TABLE: [LootEntry; 12] = [
    // Common
    LootEntry {
        id: "catfish",
        name: "Slickskin Catfish",
        description: "Ugly, but the meat is delicious.",
        rarity: Rarity::Common,
        value: 5,
        icon: "🐟",
        kind: LootKind::Fish {
            habitat: Habitat::Freshwater,
        },
    },
    LootEntry {
        id: "cod",
        name: "Spotted Cod",
        description: "A common sea fish.",
        rarity: Rarity::Common,
        value: 6,
        icon: "🐟",
        kind: LootKind::Fish {
            habitat: Habitat::Saltwater,
        },
    },
    LootEntry {
        id: "sunfish",
        name: "Sunfish",
        description: "Scales that gleam like daylight.",
        rarity: Rarity::Common,
        value: 8,
        icon: "🐠",
        kind: LootKind::Fish {
            habitat: Habitat::All,
        },
    },
    // Rare
    LootEntry {
        id: "goldscale",
        name: "Goldscale Carp",
        description: "Prized by cooks for fine dishes.",
        rarity: Rarity::Rare,
        value: 25,
        icon: "🐡",
        kind: LootKind::Fish {
            habitat: Habitat::Freshwater,
        },
    },
    LootEntry {
        id: "spinefish",
        name: "Spinegill Salmon",
        description: "Mind the spines; they are razor sharp.",
        rarity: Rarity::Rare,
        value: 30,
        icon: "🐡",
        kind: LootKind::Fish {
            habitat: Habitat::Saltwater,
        },
    },
    LootEntry {
        id: "firefin",
        name: "Firefin Snapper",
        description: "Warm to the touch.",
        rarity: Rarity::Rare,
        value: 35,
        icon: "🔥",
        kind: LootKind::Fish {
            habitat: Habitat::Lava,
        },
    },
    // Epic
    LootEntry {
        id: "blackmouth",
        name: "Mutant Blackmouth",
        description: "An alchemist's favorite.",
        rarity: Rarity::Epic,
        value: 100,
        icon: "🦈",
        kind: LootKind::Fish {
            habitat: Habitat::Saltwater,
        },
    },
    LootEntry {
        id: "stonescale",
        name: "Stonescale Eel",
        description: "Its scales are hard as rock.",
        rarity: Rarity::Epic,
        value: 120,
        icon: "🐉",
        kind: LootKind::Fish {
            habitat: Habitat::All,
        },
    },
    // Trash
    LootEntry {
        id: "boot",
        name: "Ruined Boot",
        description: "Who threw this in the water?",
        rarity: Rarity::Trash,
        value: 1,
        icon: "👢",
        kind: LootKind::Item,
    },
    LootEntry {
        id: "weeds",
        name: "Tangled Weeds",
        description: "A slimy clump of green.",
        rarity: Rarity::Trash,
        value: 0,
        icon: "🌿",
        kind: LootKind::Item,
    },
    LootEntry {
        id: "driftwood",
        name: "Driftwood",
        description: "A carpenter might pay for this.",
        rarity: Rarity::Trash,
        value: 2,
        icon: "🪵",
        kind: LootKind::Item,
    },
    // Treasure
    LootEntry {
        id: "chest",
        name: "Waterlogged Chest",
        description: "What could be inside?",
        rarity: Rarity::Treasure,
        value: 500,
        icon: "💎",
        kind: LootKind::Item,
    },
];

pub fn location_by_id(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

pub fn rod_by_id(id: &str) -> Option<&'static Rod> {
    RODS.iter().find(|r| r.id == id)
}

pub fn bait_by_id(id: &str) -> Option<&'static Bait> {
    BAITS.iter().find(|b| b.id == id)
}

pub fn loot_by_id(id: &str) -> Option<&'static LootEntry> {
    LOOT_TABLE.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn loot_ids_are_unique_across_catalog() {
        let mut seen = HashSet::new();
        for id in LOOT_TABLE
            .iter()
            .map(|e| e.id)
            .chain(RODS.iter().map(|r| r.id))
            .chain(BAITS.iter().map(|b| b.id))
            .chain(LOCATIONS.iter().map(|l| l.id))
        {
            assert!(seen.insert(id), "duplicate catalog id: {id}");
        }
    }

    #[test]
    fn starter_gear_exists_and_is_free_enough_to_begin() {
        let rod = rod_by_id(STARTER_ROD_ID).expect("starter rod in catalog");
        assert_eq!(rod.price, 0);
        assert!(bait_by_id(STARTER_BAIT_ID).is_some());
    }

    #[test]
    fn common_fallback_pool_is_never_empty() {
        // Loot resolution falls back to the full common pool; the catalog
        // must guarantee it is populated.
        assert!(LOOT_TABLE.iter().any(|e| e.rarity == Rarity::Common));
    }

    #[test]
    fn every_location_has_a_common_catch() {
        for location in &LOCATIONS {
            assert!(
                LOOT_TABLE
                    .iter()
                    .any(|e| e.rarity == Rarity::Common && e.available_in(location.environment)),
                "no common catch at {}",
                location.id
            );
        }
    }

    #[test]
    fn lookups_find_known_ids() {
        assert_eq!(rod_by_id("mithril").unwrap().perks.rare_bonus, 0.15);
        assert_eq!(bait_by_id("meat").unwrap().perks.trash_bonus, 0.20);
        assert_eq!(
            location_by_id("cinder_pools").unwrap().environment,
            Environment::Lava
        );
        assert_eq!(loot_by_id("chest").unwrap().value, 500);
        assert!(rod_by_id("titanium").is_none());
    }
}
