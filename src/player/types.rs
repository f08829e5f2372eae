//! Player account data.

use crate::catalog::{STARTER_BAIT_ID, STARTER_ROD_ID};
use crate::constants::{STARTING_BAIT_COUNT, STARTING_GOLD};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything one player owns. Lives for the whole play session; nothing
/// here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAccount {
    pub gold: u32,
    /// Owned count per loot or bait id.
    pub inventory: HashMap<String, u32>,
    /// Fish species ever caught, in discovery order. Grows monotonically.
    pub collection: Vec<String>,
    pub equipped_rod_id: String,
    pub equipped_bait_id: String,
    /// Always contains the starter rod; append-only.
    pub owned_rods: Vec<String>,
}

impl PlayerAccount {
    /// A fresh account: starting gold, a handful of worms, the bamboo rod.
    pub fn new() -> Self {
        let mut inventory = HashMap::new();
        inventory.insert(STARTER_BAIT_ID.to_string(), STARTING_BAIT_COUNT);
        Self {
            gold: STARTING_GOLD,
            inventory,
            collection: Vec::new(),
            equipped_rod_id: STARTER_ROD_ID.to_string(),
            equipped_bait_id: STARTER_BAIT_ID.to_string(),
            owned_rods: vec![STARTER_ROD_ID.to_string()],
        }
    }

    pub fn bait_count(&self, bait_id: &str) -> u32 {
        self.inventory.get(bait_id).copied().unwrap_or(0)
    }

    /// Removes one unit of the equipped bait. Callers check the count
    /// first; an empty slot stays at zero.
    pub(crate) fn consume_bait(&mut self) {
        if let Some(count) = self.inventory.get_mut(&self.equipped_bait_id) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn owns_rod(&self, rod_id: &str) -> bool {
        self.owned_rods.iter().any(|r| r == rod_id)
    }

    /// Whether this fish species has ever been caught.
    pub fn has_discovered(&self, fish_id: &str) -> bool {
        self.collection.iter().any(|c| c == fish_id)
    }
}

impl Default for PlayerAccount {
    fn default() -> Self {
        Self::new()
    }
}
