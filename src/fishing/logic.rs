//! Session state machine: cast, tick, reel-in, and phase bookkeeping.
//!
//! All transitions take the session and player explicitly; the caller owns
//! both and drives timers by calling [`tick`] with the current time. The
//! core never reads the clock itself, which is what makes the whole loop
//! runnable against synthetic time in tests.

use crate::catalog::{bait_by_id, location_by_id, rod_by_id, Bait, Rod, LOCATIONS, STARTER_BAIT_ID, STARTER_ROD_ID};
use crate::constants::{
    CAST_DELAY_MS, GOOD_WINDOW_MS, HOOK_WINDOW_MS, LATE_ESCAPE_CHANCE, PERFECT_WINDOW_MS,
    WAIT_FLOOR_MS, WAIT_MAX_MS, WAIT_MIN_MS,
};
use crate::errors::GameError;
use crate::player::{record_catch, PlayerAccount};
use super::loot;
use super::types::{CatchReport, FishingSession, GamePhase, TimerKind, TimingClass};
use crate::audio::SoundCue;
use rand::Rng;
use std::time::{Duration, Instant};

/// Classifies reaction latency. Boundaries are half-open: exactly 600ms is
/// `Good`, exactly 2000ms is `Late`.
pub fn classify_timing(latency_ms: u64) -> TimingClass {
    if latency_ms < PERFECT_WINDOW_MS {
        TimingClass::Perfect
    } else if latency_ms < GOOD_WINDOW_MS {
        TimingClass::Good
    } else {
        TimingClass::Late
    }
}

/// Casts the line.
///
/// Requires an idle session and at least one unit of the equipped bait.
/// Bait is consumed here, at cast time, regardless of the eventual
/// outcome. Clears the previous catch and schedules the cast-delay timer.
pub fn cast(
    session: &mut FishingSession,
    player: &mut PlayerAccount,
    now: Instant,
) -> Result<(), GameError> {
    if session.phase != GamePhase::Idle {
        return Err(GameError::InvalidTransition {
            action: "cast",
            phase: session.phase,
        });
    }
    if player.bait_count(&player.equipped_bait_id) == 0 {
        return Err(GameError::InsufficientBait {
            bait_id: player.equipped_bait_id.clone(),
        });
    }

    player.consume_bait();
    session.last_catch = None;
    session.phase = GamePhase::Casting;
    session.schedule(TimerKind::CastDelay, now + Duration::from_millis(CAST_DELAY_MS));
    Ok(())
}

/// Fires at most one due timer. Call this every frame with the current
/// time; returns a cue for the presentation layer's audio stub when
/// something audible happened.
pub fn tick(
    session: &mut FishingSession,
    player: &PlayerAccount,
    rng: &mut impl Rng,
    now: Instant,
) -> Option<SoundCue> {
    let timer = session.take_due_timer(now)?;

    match timer.kind {
        TimerKind::CastDelay => {
            session.phase = GamePhase::Waiting;
            let wait = roll_wait_duration(equipped_rod(player), rng);
            session.schedule(TimerKind::Bite, now + wait);
            None
        }
        TimerKind::Bite => {
            session.phase = GamePhase::Hooked;
            session.hook_time = Some(now);
            session.schedule(TimerKind::HookWindow, now + Duration::from_millis(HOOK_WINDOW_MS));
            Some(SoundCue::Splash)
        }
        TimerKind::HookWindow => {
            // Window expired without a reel-in: always a miss.
            finish_miss(session);
            Some(SoundCue::Fail)
        }
    }
}

/// Player reels in. Valid only while hooked; cancels the auto-fail timer,
/// measures reaction latency, and resolves the catch.
pub fn reel_in(
    session: &mut FishingSession,
    player: &mut PlayerAccount,
    rng: &mut impl Rng,
    now: Instant,
) -> Result<(), GameError> {
    if session.phase != GamePhase::Hooked {
        return Err(GameError::InvalidTransition {
            action: "reel in",
            phase: session.phase,
        });
    }
    session.cancel_timer();

    let hook_time = match session.hook_time {
        Some(t) => t,
        None => {
            // Hooked without a hook timestamp never happens through the
            // public transitions; treat it as a miss rather than panic.
            log::warn!("hooked phase with no hook timestamp");
            finish_miss(session);
            return Ok(());
        }
    };

    let latency_ms = now.saturating_duration_since(hook_time).as_millis() as u64;
    let mut timing = classify_timing(latency_ms);

    // A slow hookset gives the fish an even chance to throw the hook.
    if timing == TimingClass::Late && rng.gen_bool(LATE_ESCAPE_CHANCE) {
        timing = TimingClass::Miss;
    }

    if timing == TimingClass::Miss {
        finish_miss(session);
        return Ok(());
    }

    let location = active_location(session);
    let entry = loot::resolve(timing, equipped_rod(player), equipped_bait(player), location, rng);
    record_catch(player, entry);

    session.last_catch = Some(CatchReport { entry, timing });
    session.hook_time = None;
    session.phase = GamePhase::Result;
    Ok(())
}

/// Dismisses the result screen. Pure phase reset; the report itself stays
/// readable until the next cast clears it.
pub fn close_result(session: &mut FishingSession) -> Result<(), GameError> {
    if session.phase != GamePhase::Result {
        return Err(GameError::InvalidTransition {
            action: "close result",
            phase: session.phase,
        });
    }
    session.phase = GamePhase::Idle;
    Ok(())
}

/// Switches the active location. Only permitted while idle; an unknown id
/// is a catalog bug and leaves the session unchanged.
pub fn select_location(session: &mut FishingSession, location_id: &str) -> Result<(), GameError> {
    if session.phase != GamePhase::Idle {
        return Err(GameError::InvalidTransition {
            action: "switch location",
            phase: session.phase,
        });
    }
    if location_by_id(location_id).is_none() {
        log::warn!("unknown location id {location_id:?}");
        return Ok(());
    }
    session.location_id = location_id.to_string();
    Ok(())
}

fn finish_miss(session: &mut FishingSession) {
    session.cancel_timer();
    session.last_catch = None;
    session.hook_time = None;
    session.phase = GamePhase::Result;
}

/// Bite delay: uniform in [3s, 10s), less the rod's time reduction,
/// floored at 2s.
fn roll_wait_duration(rod: &Rod, rng: &mut impl Rng) -> Duration {
    let base_ms = rng.gen_range(WAIT_MIN_MS..WAIT_MAX_MS) as f64;
    let reduced = base_ms - rod.perks.time_reduction * 1000.0;
    Duration::from_millis(reduced.max(WAIT_FLOOR_MS as f64) as u64)
}

/// The equipped rod, falling back to the starter if the equipped id is not
/// in the catalog. That only happens on a configuration bug, so it is
/// logged rather than surfaced.
fn equipped_rod(player: &PlayerAccount) -> &'static Rod {
    rod_by_id(&player.equipped_rod_id).unwrap_or_else(|| {
        log::warn!("equipped rod {:?} not in catalog", player.equipped_rod_id);
        rod_by_id(STARTER_ROD_ID).expect("starter rod in catalog")
    })
}

fn equipped_bait(player: &PlayerAccount) -> &'static Bait {
    bait_by_id(&player.equipped_bait_id).unwrap_or_else(|| {
        log::warn!("equipped bait {:?} not in catalog", player.equipped_bait_id);
        bait_by_id(STARTER_BAIT_ID).expect("starter bait in catalog")
    })
}

fn active_location(session: &FishingSession) -> &'static crate::catalog::Location {
    location_by_id(&session.location_id).unwrap_or_else(|| {
        log::warn!("unknown session location {:?}", session.location_id);
        &LOCATIONS[0]
    })
}
