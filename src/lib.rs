//! Tideline - a terminal fishing mini-game.
//!
//! The library exposes the game core (catalog, session state machine,
//! loot resolution, player account) for the binary and for tests.

pub mod audio;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod fishing;
pub mod player;

// UI module stays private: it is tightly coupled to the terminal.
mod ui;

pub use errors::GameError;

// Re-exported for the binary's event loop.
#[doc(hidden)]
pub use ui::app::run;
