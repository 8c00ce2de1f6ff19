// Event loop timing
pub const POLL_INTERVAL_MS: u64 = 50;

// XP rewards per progress event
pub const XP_EXERCISE_COMPLETE: u64 = 10;
pub const XP_WORKOUT_COMPLETE: u64 = 50;
pub const XP_PLAN_GENERATED: u64 = 15;
// Granted once per day completion when the resulting streak exceeds one day
pub const XP_STREAK_BONUS: u64 = 25;

// Transient signal display windows
pub const LEVEL_UP_FLASH_SECONDS: f64 = 3.0;
pub const ACHIEVEMENT_TOAST_SECONDS: f64 = 4.0;

// Save system constants
pub const STATS_FILE: &str = "player_stats.json";

// Plan shape
pub const DAYS_IN_WEEK: usize = 7;
pub const MIN_TRAINING_DAYS: u8 = 2;
pub const MAX_TRAINING_DAYS: u8 = 6;
