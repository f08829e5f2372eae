//! Recoverable, caller-facing game errors.
//!
//! None of these abort the session; the UI surfaces them as feedback
//! (an out-of-bait cast opens the gear menu, a short purchase shakes the
//! shop row) and game state is left untouched.

use crate::fishing::GamePhase;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Cast attempted with zero units of the equipped bait.
    #[error("no {bait_id} left in the tackle box")]
    InsufficientBait { bait_id: String },

    /// Purchase attempted without enough gold.
    #[error("not enough gold ({gold}/{price})")]
    InsufficientFunds { price: u32, gold: u32 },

    /// Action attempted in a phase that does not permit it.
    #[error("{action} is not valid while {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: GamePhase,
    },
}
