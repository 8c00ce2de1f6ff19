//! The persistent player progress record.

use crate::achievements::AchievementId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One player's full progress state.
///
/// `level` is derived from `xp` through [`crate::leveling::level_for_xp`]
/// and recomputed after every XP change; it is stored only so the record
/// is self-describing on disk. Missing fields in an older save deserialize
/// to the zero-state defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub xp: u64,
    pub level: u32,
    pub total_workouts_completed: u32,
    pub total_exercises_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Civil date of the last claimed workout day.
    pub last_workout_date: Option<NaiveDate>,
    /// Append-only, in unlock order, no duplicates.
    pub unlocked_achievements: Vec<AchievementId>,
    /// Ticked `(day_index, exercise_index)` pairs for the current plan only.
    pub completed_exercises: BTreeSet<(u32, u32)>,
    pub plans_generated: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            total_workouts_completed: 0,
            total_exercises_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            last_workout_date: None,
            unlocked_achievements: Vec::new(),
            completed_exercises: BTreeSet::new(),
            plans_generated: 0,
        }
    }
}

impl PlayerStats {
    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.unlocked_achievements.contains(&id)
    }

    pub fn exercise_completed(&self, day_index: u32, exercise_index: u32) -> bool {
        self.completed_exercises
            .contains(&(day_index, exercise_index))
    }
}
