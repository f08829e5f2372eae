//! Account mutations: shop purchases, gear swaps, and catch bookkeeping.

use crate::catalog::{bait_by_id, rod_by_id, LootEntry};
use crate::errors::GameError;
use super::types::PlayerAccount;

/// Which kind of gear a shop or equip action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearKind {
    Rod,
    Bait,
}

/// Buys one rod or one unit of bait.
///
/// Fails with [`GameError::InsufficientFunds`] and no state change when
/// gold is short. An id missing from the catalog is a configuration bug:
/// logged, nothing charged. Owned-rod appends are idempotent (the UI does
/// not offer re-purchase, but a duplicate buy cannot corrupt the list).
pub fn buy(player: &mut PlayerAccount, kind: GearKind, id: &str) -> Result<(), GameError> {
    let price = match kind {
        GearKind::Rod => rod_by_id(id).map(|r| r.price),
        GearKind::Bait => bait_by_id(id).map(|b| b.price),
    };
    let price = match price {
        Some(p) => p,
        None => {
            log::warn!("purchase of unknown {kind:?} id {id:?} ignored");
            return Ok(());
        }
    };

    if player.gold < price {
        return Err(GameError::InsufficientFunds {
            price,
            gold: player.gold,
        });
    }
    player.gold -= price;

    match kind {
        GearKind::Rod => {
            if !player.owns_rod(id) {
                player.owned_rods.push(id.to_string());
            }
        }
        GearKind::Bait => {
            *player.inventory.entry(id.to_string()).or_insert(0) += 1;
        }
    }
    Ok(())
}

/// Equips a rod or bait by id.
///
/// No ownership validation happens here: callers only offer owned gear,
/// and equipping an unowned id is their contract violation, not an error
/// this layer reports.
pub fn equip(player: &mut PlayerAccount, kind: GearKind, id: &str) {
    match kind {
        GearKind::Rod => player.equipped_rod_id = id.to_string(),
        GearKind::Bait => player.equipped_bait_id = id.to_string(),
    }
}

/// Applies a resolved catch: bumps the inventory count and, for a fish
/// species not yet in the journal, records the discovery. Re-catching a
/// known species leaves the collection untouched.
pub fn record_catch(player: &mut PlayerAccount, entry: &LootEntry) {
    *player.inventory.entry(entry.id.to_string()).or_insert(0) += 1;

    if entry.is_fish() && !player.has_discovered(entry.id) {
        player.collection.push(entry.id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loot_by_id;

    #[test]
    fn buying_bait_deducts_gold_and_adds_one_unit() {
        let mut player = PlayerAccount::new();
        buy(&mut player, GearKind::Bait, "shrimp").unwrap();
        assert_eq!(player.gold, 80);
        assert_eq!(player.bait_count("shrimp"), 1);

        buy(&mut player, GearKind::Bait, "shrimp").unwrap();
        assert_eq!(player.bait_count("shrimp"), 2);
    }

    #[test]
    fn purchase_without_funds_fails_unchanged() {
        let mut player = PlayerAccount::new();
        let err = buy(&mut player, GearKind::Rod, "carbon").unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                price: 500,
                gold: 100
            }
        );
        assert_eq!(player.gold, 100);
        assert!(!player.owns_rod("carbon"));
    }

    #[test]
    fn buying_a_rod_appends_once() {
        let mut player = PlayerAccount::new();
        player.gold = 1200;
        buy(&mut player, GearKind::Rod, "carbon").unwrap();
        assert_eq!(player.gold, 700);
        assert!(player.owns_rod("carbon"));

        // A duplicate purchase still charges but cannot double-list.
        buy(&mut player, GearKind::Rod, "carbon").unwrap();
        assert_eq!(
            player.owned_rods.iter().filter(|r| *r == "carbon").count(),
            1
        );
    }

    #[test]
    fn unknown_catalog_id_is_a_no_op() {
        let mut player = PlayerAccount::new();
        buy(&mut player, GearKind::Rod, "titanium").unwrap();
        assert_eq!(player.gold, 100);
        assert_eq!(player.owned_rods.len(), 1);
    }

    #[test]
    fn equip_swaps_ids_without_validation() {
        let mut player = PlayerAccount::new();
        equip(&mut player, GearKind::Rod, "mithril");
        equip(&mut player, GearKind::Bait, "glowworm");
        assert_eq!(player.equipped_rod_id, "mithril");
        assert_eq!(player.equipped_bait_id, "glowworm");
    }

    #[test]
    fn first_catch_of_a_species_enters_the_journal_once() {
        let mut player = PlayerAccount::new();
        let catfish = loot_by_id("catfish").unwrap();

        record_catch(&mut player, catfish);
        record_catch(&mut player, catfish);

        assert_eq!(*player.inventory.get("catfish").unwrap(), 2);
        assert_eq!(player.collection, vec!["catfish".to_string()]);
    }

    #[test]
    fn junk_catches_never_touch_the_journal() {
        let mut player = PlayerAccount::new();
        let boot = loot_by_id("boot").unwrap();
        record_catch(&mut player, boot);
        assert_eq!(*player.inventory.get("boot").unwrap(), 1);
        assert!(player.collection.is_empty());
    }
}
