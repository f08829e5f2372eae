//! Static reference data: locations, rods, baits, and the loot table.
//!
//! Everything in here is immutable and loaded once; the rest of the game
//! reads it through id lookups.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
