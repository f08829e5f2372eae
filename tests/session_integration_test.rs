//! End-to-end tests for the fishing loop: cast through resolution against
//! a live player account, driven entirely by synthetic time.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tideline::catalog::{loot_by_id, Rarity, STARTER_BAIT_ID};
use tideline::constants::{CAST_DELAY_MS, HOOK_WINDOW_MS, WAIT_MAX_MS};
use tideline::errors::GameError;
use tideline::fishing::{
    cast, close_result, reel_in, select_location, tick, FishingSession, GamePhase, TimingClass,
};
use tideline::player::{buy, equip, record_catch, GearKind, PlayerAccount};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Runs one cast up to the hook event, returning the hook instant.
fn run_to_hooked(
    session: &mut FishingSession,
    player: &mut PlayerAccount,
    rng: &mut ChaCha8Rng,
    t0: Instant,
) -> Instant {
    cast(session, player, t0).expect("cast from idle with bait");
    let t1 = t0 + ms(CAST_DELAY_MS);
    tick(session, player, rng, t1);
    assert_eq!(session.phase, GamePhase::Waiting);
    let t2 = t1 + ms(WAIT_MAX_MS);
    tick(session, player, rng, t2);
    assert_eq!(session.phase, GamePhase::Hooked);
    t2
}

#[test]
fn perfect_catch_from_a_fresh_account() {
    // Starting gold 100, 10 worms; one cast consumes a worm, a 300ms
    // reel-in resolves Perfect, and the catch lands in the inventory.
    let mut session = FishingSession::new("willow_creek");
    let mut player = PlayerAccount::new();
    let mut rng = test_rng();
    let t0 = Instant::now();

    assert_eq!(player.gold, 100);
    assert_eq!(player.bait_count(STARTER_BAIT_ID), 10);

    let hook_at = run_to_hooked(&mut session, &mut player, &mut rng, t0);
    assert_eq!(player.bait_count(STARTER_BAIT_ID), 9);

    reel_in(&mut session, &mut player, &mut rng, hook_at + ms(300)).unwrap();
    assert_eq!(session.phase, GamePhase::Result);

    let report = session.last_catch.expect("perfect timing always lands");
    assert_eq!(report.timing, TimingClass::Perfect);
    assert!(
        report.entry.available_in(tideline::catalog::Environment::Freshwater),
        "{} does not belong in freshwater",
        report.entry.id
    );
    assert_eq!(*player.inventory.get(report.entry.id).unwrap(), 1);
    if report.entry.is_fish() {
        assert_eq!(player.collection, vec![report.entry.id.to_string()]);
    } else {
        assert!(player.collection.is_empty());
    }

    close_result(&mut session).unwrap();
    assert_eq!(session.phase, GamePhase::Idle);
}

#[test]
fn ignoring_the_hook_misses_and_keeps_inventory_unchanged() {
    let mut session = FishingSession::new("willow_creek");
    let mut player = PlayerAccount::new();
    let mut rng = test_rng();
    let hook_at = run_to_hooked(&mut session, &mut player, &mut rng, Instant::now());

    let inventory = player.inventory.clone();
    tick(&mut session, &player, &mut rng, hook_at + ms(HOOK_WINDOW_MS));

    assert_eq!(session.phase, GamePhase::Result);
    assert!(session.last_catch.is_none());
    assert_eq!(player.inventory, inventory);
    assert!(player.collection.is_empty());
}

#[test]
fn a_session_survives_many_full_cycles() {
    let mut session = FishingSession::new("saltcrag_cape");
    let mut player = PlayerAccount::new();
    let mut rng = test_rng();
    let mut t = Instant::now();

    for round in 0..10 {
        let hook_at = run_to_hooked(&mut session, &mut player, &mut rng, t);
        reel_in(&mut session, &mut player, &mut rng, hook_at + ms(100)).unwrap();
        assert!(session.last_catch.is_some(), "round {round} missed");
        close_result(&mut session).unwrap();
        t = hook_at + ms(1000);
    }

    assert_eq!(player.bait_count(STARTER_BAIT_ID), 0);
    let caught: u32 = player
        .inventory
        .values()
        .sum();
    assert_eq!(caught, 10);

    // The eleventh cast runs dry.
    let err = cast(&mut session, &mut player, t).unwrap_err();
    assert!(matches!(err, GameError::InsufficientBait { .. }));
    assert_eq!(session.phase, GamePhase::Idle);
}

#[test]
fn shop_and_equip_flow_feeds_the_next_cast() {
    let mut session = FishingSession::new("willow_creek");
    let mut player = PlayerAccount::new();
    player.inventory.clear(); // no bait at all

    let err = cast(&mut session, &mut player, Instant::now()).unwrap_err();
    assert!(matches!(err, GameError::InsufficientBait { .. }));

    buy(&mut player, GearKind::Bait, "meat").unwrap();
    equip(&mut player, GearKind::Bait, "meat");
    assert_eq!(player.gold, 85);

    cast(&mut session, &mut player, Instant::now()).unwrap();
    assert_eq!(player.bait_count("meat"), 0);
    assert_eq!(session.phase, GamePhase::Casting);
}

#[test]
fn location_switching_respects_the_idle_rule_end_to_end() {
    let mut session = FishingSession::new("willow_creek");
    let mut player = PlayerAccount::new();
    let mut rng = test_rng();

    select_location(&mut session, "cinder_pools").unwrap();
    let hook_at = run_to_hooked(&mut session, &mut player, &mut rng, Instant::now());

    // Mid-session switches are rejected in every non-idle phase.
    assert!(select_location(&mut session, "willow_creek").is_err());

    reel_in(&mut session, &mut player, &mut rng, hook_at + ms(100)).unwrap();
    assert!(select_location(&mut session, "willow_creek").is_err());
    close_result(&mut session).unwrap();
    select_location(&mut session, "willow_creek").unwrap();
    assert_eq!(session.location_id, "willow_creek");
}

#[test]
fn lava_catches_never_include_foreign_fish() {
    for seed in 0..40u64 {
        let mut session = FishingSession::new("cinder_pools");
        let mut player = PlayerAccount::new();
        let mut seeded = ChaCha8Rng::seed_from_u64(seed);
        let hook_at = run_to_hooked(&mut session, &mut player, &mut seeded, Instant::now());
        reel_in(&mut session, &mut player, &mut seeded, hook_at + ms(200)).unwrap();
        let report = session.last_catch.unwrap();
        assert!(
            report
                .entry
                .available_in(tideline::catalog::Environment::Lava),
            "{} surfaced in lava",
            report.entry.id
        );
    }
}

#[test]
fn collection_growth_is_monotonic_and_duplicate_free() {
    let mut player = PlayerAccount::new();
    let sunfish = loot_by_id("sunfish").unwrap();
    let chest = loot_by_id("chest").unwrap();
    assert_eq!(chest.rarity, Rarity::Treasure);

    record_catch(&mut player, sunfish);
    record_catch(&mut player, chest);
    record_catch(&mut player, sunfish);

    assert_eq!(player.collection, vec!["sunfish".to_string()]);
    assert_eq!(*player.inventory.get("sunfish").unwrap(), 2);
    assert_eq!(*player.inventory.get("chest").unwrap(), 1);
}
