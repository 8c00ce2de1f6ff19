//! IronPlan - Terminal Workout Planner Library
//!
//! Generates weekly workout plans and tracks gamified progress (XP,
//! levels, streaks, achievements). This module exposes the progress
//! engine and catalog for testing and external use.

pub mod achievements;
pub mod build_info;
pub mod constants;
pub mod engine;
pub mod leveling;
pub mod persistence;
pub mod signals;
pub mod stats;
pub mod workouts;

pub use achievements::{AchievementId, ALL_ACHIEVEMENTS};
pub use engine::ProgressEngine;
pub use stats::PlayerStats;
pub use workouts::{generate_plan, FitnessLevel, Location, WorkoutDay};

// The UI lives in the binary (src/ui) as it's tightly coupled to the terminal
