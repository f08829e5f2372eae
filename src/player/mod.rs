//! Player-owned mutable state: gold, inventory, the species journal, and
//! gear. Mutated only through cast, catch resolution, and the shop.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
