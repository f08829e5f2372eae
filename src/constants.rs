// Session timing constants (milliseconds)
pub const CAST_DELAY_MS: u64 = 1000;
pub const WAIT_MIN_MS: u64 = 3000;
pub const WAIT_MAX_MS: u64 = 10000;
pub const WAIT_FLOOR_MS: u64 = 2000;
pub const HOOK_WINDOW_MS: u64 = 3000;

// Reaction-time classification boundaries (half-open intervals)
pub const PERFECT_WINDOW_MS: u64 = 600;
pub const GOOD_WINDOW_MS: u64 = 2000;

// Chance that a Late reel-in lets the fish escape entirely
pub const LATE_ESCAPE_CHANCE: f64 = 0.5;

// Base rarity chances; common is the implicit remainder
pub const BASE_TRASH_CHANCE: f64 = 0.20;
pub const BASE_RARE_CHANCE: f64 = 0.25;
pub const BASE_EPIC_CHANCE: f64 = 0.10;
pub const BASE_TREASURE_CHANCE: f64 = 0.05;

// Flat rare bonus for a Perfect hook
pub const PERFECT_RARE_BONUS: f64 = 0.05;

// New account resources
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_BAIT_COUNT: u32 = 10;

// UI event loop poll interval
pub const POLL_INTERVAL_MS: u64 = 50;
