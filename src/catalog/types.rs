//! Catalog data structures.

use serde::{Deserialize, Serialize};

/// Loot tier, controlling selection odds and pool filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Trash,
    Treasure,
}

/// Water type of a fishing location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Freshwater,
    Saltwater,
    Lava,
}

/// Where a fish can be caught. `All` matches every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Habitat {
    Freshwater,
    Saltwater,
    Lava,
    All,
}

impl Habitat {
    /// Whether a fish with this habitat can appear at a location.
    pub fn matches(self, environment: Environment) -> bool {
        match self {
            Habitat::All => true,
            Habitat::Freshwater => environment == Environment::Freshwater,
            Habitat::Saltwater => environment == Environment::Saltwater,
            Habitat::Lava => environment == Environment::Lava,
        }
    }
}

/// Discriminant for loot table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootKind {
    /// A fish, restricted to locations its habitat matches.
    Fish { habitat: Habitat },
    /// A non-fish item (junk, treasure); catchable anywhere.
    Item,
}

/// One entry of the loot table. Ids are unique across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    /// Gold value when sold or appraised.
    pub value: u32,
    pub icon: &'static str,
    pub kind: LootKind,
}

impl LootEntry {
    pub fn is_fish(&self) -> bool {
        matches!(self.kind, LootKind::Fish { .. })
    }

    /// Whether this entry can turn up at a location with the given water type.
    /// Non-fish items are never environment-restricted.
    pub fn available_in(&self, environment: Environment) -> bool {
        match self.kind {
            LootKind::Fish { habitat } => habitat.matches(environment),
            LootKind::Item => true,
        }
    }
}

/// Rod perks. 0.0 means the perk is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RodPerks {
    /// Subtracted from the trash chance.
    pub trash_reduction: f64,
    /// Added to the rare chance.
    pub rare_bonus: f64,
    /// Seconds shaved off the bite wait.
    pub time_reduction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rod {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub perks: RodPerks,
}

/// Bait perks. 0.0 means the perk is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaitPerks {
    /// Carried in the catalog but never consulted by loot resolution.
    pub saltwater_bonus: f64,
    /// Added to the rare chance.
    pub rare_bonus: f64,
    /// Added to the trash chance.
    pub trash_bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bait {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Price per unit; owned quantity lives in the player inventory.
    pub price: u32,
    pub perks: BaitPerks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub environment: Environment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_habitat_matches_every_environment() {
        for env in [
            Environment::Freshwater,
            Environment::Saltwater,
            Environment::Lava,
        ] {
            assert!(Habitat::All.matches(env));
        }
    }

    #[test]
    fn specific_habitat_matches_only_its_environment() {
        assert!(Habitat::Freshwater.matches(Environment::Freshwater));
        assert!(!Habitat::Freshwater.matches(Environment::Saltwater));
        assert!(!Habitat::Lava.matches(Environment::Freshwater));
        assert!(Habitat::Lava.matches(Environment::Lava));
    }

    #[test]
    fn items_are_never_environment_restricted() {
        let boot = LootEntry {
            id: "boot",
            name: "Boot",
            description: "",
            rarity: Rarity::Trash,
            value: 1,
            icon: "b",
            kind: LootKind::Item,
        };
        assert!(boot.available_in(Environment::Lava));
        assert!(!boot.is_fish());
    }
}
