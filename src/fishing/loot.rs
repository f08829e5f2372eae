//! Loot resolution: timing quality + equipped gear -> a concrete catch.
//!
//! The model is split so each stage is testable on its own: modifier
//! application ([`rarity_chances`]), band selection from an explicit roll
//! ([`pick_rarity`]), pool filtering with its fallback ([`loot_pool`]), and
//! the composed [`resolve`] that draws from an injected random source.

use crate::catalog::{Bait, Environment, Location, LootEntry, Rarity, Rod, LOOT_TABLE};
use crate::constants::{
    BASE_EPIC_CHANCE, BASE_RARE_CHANCE, BASE_TRASH_CHANCE, BASE_TREASURE_CHANCE,
    PERFECT_RARE_BONUS,
};
use super::types::TimingClass;
use rand::Rng;

/// Per-rarity selection chances after modifiers. Common is the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityChances {
    pub trash: f64,
    pub rare: f64,
    pub epic: f64,
    pub treasure: f64,
}

/// Applies gear and timing modifiers to the base rarity chances.
pub fn rarity_chances(timing: TimingClass, rod: &Rod, bait: &Bait) -> RarityChances {
    let mut chances = RarityChances {
        trash: BASE_TRASH_CHANCE,
        rare: BASE_RARE_CHANCE,
        epic: BASE_EPIC_CHANCE,
        treasure: BASE_TREASURE_CHANCE,
    };

    chances.trash -= rod.perks.trash_reduction;
    chances.rare += rod.perks.rare_bonus;
    chances.rare += bait.perks.rare_bonus;
    chances.trash += bait.perks.trash_bonus;
    if timing == TimingClass::Perfect {
        chances.rare += PERFECT_RARE_BONUS;
    }

    chances
}

/// Maps a uniform roll in [0,1) to a rarity band.
///
/// Treasure, epic, and rare stack cumulatively from the bottom of the
/// range; trash is tested against the upper tail (`roll > 1 - trash`)
/// rather than cumulatively. The asymmetry is deliberate: pathological
/// perk values could make the bands overlap, and that quirk is accepted
/// rather than corrected.
pub fn pick_rarity(roll: f64, chances: &RarityChances) -> Rarity {
    if roll < chances.treasure {
        Rarity::Treasure
    } else if roll < chances.treasure + chances.epic {
        Rarity::Epic
    } else if roll < chances.treasure + chances.epic + chances.rare {
        Rarity::Rare
    } else if roll > 1.0 - chances.trash {
        Rarity::Trash
    } else {
        Rarity::Common
    }
}

/// All loot entries of `rarity` catchable in `environment`.
///
/// An empty pool (e.g. a rarity with no fish defined for this water) falls
/// back to the full common pool, which the catalog guarantees is non-empty.
pub fn loot_pool(rarity: Rarity, environment: Environment) -> Vec<&'static LootEntry> {
    pool_from_table(&LOOT_TABLE, rarity, environment)
}

fn pool_from_table(
    table: &'static [LootEntry],
    rarity: Rarity,
    environment: Environment,
) -> Vec<&'static LootEntry> {
    let pool: Vec<&'static LootEntry> = table
        .iter()
        .filter(|e| e.rarity == rarity && e.available_in(environment))
        .collect();

    if !pool.is_empty() {
        return pool;
    }
    table.iter().filter(|e| e.rarity == Rarity::Common).collect()
}

/// Resolves one catch. Pure given the random source: the same inputs and
/// the same draws always produce the same entry.
pub fn resolve(
    timing: TimingClass,
    rod: &Rod,
    bait: &Bait,
    location: &Location,
    rng: &mut impl Rng,
) -> &'static LootEntry {
    let chances = rarity_chances(timing, rod, bait);
    let rarity = pick_rarity(rng.gen::<f64>(), &chances);
    let pool = loot_pool(rarity, location.environment);
    pool[rng.gen_range(0..pool.len())]
}
