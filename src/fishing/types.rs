//! Fishing session data structures.
//!
//! A [`FishingSession`] owns the current phase, the hook timestamp used to
//! measure reaction time, and at most one pending timer. Timers are plain
//! deadlines checked by [`logic::tick`](super::logic::tick); each carries a
//! generation number issued at scheduling time, and only a timer whose
//! generation matches the session's counter may fire. Any competing
//! transition bumps the counter, so a stale timer can never act on newer
//! state.

use crate::catalog::LootEntry;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Phase of the cast/wait/hook/resolve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing in the water; casting and location switching are allowed.
    Idle,
    /// Cast animation delay before the line settles.
    Casting,
    /// Line in the water, waiting for a bite.
    Waiting,
    /// A fish is on the hook; the reel-in window is open.
    Hooked,
    /// Catch (or miss) is on display, awaiting dismissal.
    Result,
}

/// How quickly the player reacted to the hook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingClass {
    /// Reacted within 600ms.
    Perfect,
    /// Reacted within 2000ms.
    Good,
    /// Slower than 2000ms but the fish stayed on.
    Late,
    /// Too slow, or the window expired; nothing caught.
    Miss,
}

/// A successful catch: what was hooked and how cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchReport {
    pub entry: &'static LootEntry,
    pub timing: TimingClass,
}

/// What a pending timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerKind {
    /// Cast animation finished; start waiting for a bite.
    CastDelay,
    /// A fish strikes the hook.
    Bite,
    /// Reel-in window expired; force a miss.
    HookWindow,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingTimer {
    pub(crate) kind: TimerKind,
    pub(crate) deadline: Instant,
    pub(crate) generation: u64,
}

/// One player's active fishing session.
#[derive(Debug)]
pub struct FishingSession {
    pub phase: GamePhase,
    /// Active location id; switchable only while [`GamePhase::Idle`].
    pub location_id: String,
    /// Outcome shown in the result phase. `None` while in `Result` means
    /// the fish got away.
    pub last_catch: Option<CatchReport>,
    /// When the hook event fired; set on entering `Hooked`.
    pub(crate) hook_time: Option<Instant>,
    pub(crate) timer: Option<PendingTimer>,
    pub(crate) timer_generation: u64,
}

impl FishingSession {
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            phase: GamePhase::Idle,
            location_id: location_id.into(),
            last_catch: None,
            hook_time: None,
            timer: None,
            timer_generation: 0,
        }
    }

    /// Milliseconds since the hook event, or `None` outside `Hooked`.
    /// The UI uses this to animate the reel-in prompt.
    pub fn hooked_elapsed_ms(&self, now: Instant) -> Option<u64> {
        match (self.phase, self.hook_time) {
            (GamePhase::Hooked, Some(t)) => {
                Some(now.saturating_duration_since(t).as_millis() as u64)
            }
            _ => None,
        }
    }

    /// Installs a timer, invalidating whatever was pending before.
    pub(crate) fn schedule(&mut self, kind: TimerKind, deadline: Instant) {
        self.timer_generation += 1;
        self.timer = Some(PendingTimer {
            kind,
            deadline,
            generation: self.timer_generation,
        });
    }

    /// Drops any pending timer. A cancelled timer is guaranteed never to
    /// fire: the slot is cleared and the generation advances.
    pub(crate) fn cancel_timer(&mut self) {
        self.timer_generation += 1;
        self.timer = None;
    }

    /// Takes the pending timer if it is due at `now` and still current.
    pub(crate) fn take_due_timer(&mut self, now: Instant) -> Option<PendingTimer> {
        let timer = self.timer?;
        if timer.generation != self.timer_generation || now < timer.deadline {
            return None;
        }
        self.timer = None;
        Some(timer)
    }
}
