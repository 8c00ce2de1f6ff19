//! Weekly plan generation: deterministic table lookup, no state.

use super::data::{bank_for, exercises_for, split_for_days, DAY_NAMES};
use super::types::{FitnessLevel, Location, WorkoutDay, REST_FOCUS};
use crate::constants::DAYS_IN_WEEK;

/// Build a 7-day plan for the chosen level, location, and training-day
/// count. Training days fill the week front-to-back; the remainder are
/// rest days with no exercises.
pub fn generate_plan(
    level: FitnessLevel,
    location: Location,
    days_per_week: u8,
) -> Vec<WorkoutDay> {
    let bank = bank_for(level, location);
    let split = split_for_days(days_per_week, location);

    let mut plan = Vec::with_capacity(DAYS_IN_WEEK);
    for (i, day) in DAY_NAMES.iter().copied().enumerate() {
        if let Some(&focus) = split.get(i) {
            plan.push(WorkoutDay {
                day,
                focus,
                exercises: exercises_for(bank, focus),
            });
        } else {
            plan.push(WorkoutDay {
                day,
                focus: REST_FOCUS,
                exercises: &[],
            });
        }
    }
    plan
}
