//! The fishing loop: session state machine and loot resolution.

pub mod logic;
pub mod loot;
pub mod types;

pub use logic::*;
pub use loot::*;
pub use types::*;
