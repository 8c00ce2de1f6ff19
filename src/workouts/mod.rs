//! The workout catalog: static exercise banks and deterministic weekly
//! plan generation. The progress engine only ever sees `(day, exercise)`
//! index pairs, never the plan contents.

pub mod data;
pub mod plan;
pub mod types;

pub use data::{bank_for, exercises_for, split_for_days, DAY_NAMES};
pub use plan::generate_plan;
pub use types::{Exercise, FitnessLevel, Location, WorkoutDay, REST_FOCUS};
