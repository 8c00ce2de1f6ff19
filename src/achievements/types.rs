//! Achievement identifiers, unlock conditions, and definitions.

use crate::stats::PlayerStats;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
///
/// Serialized as the snake_case ids used in the save file
/// (e.g. `"first_plan"`), so renames here would orphan old records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstPlan,
    FirstExercise,
    FirstWorkout,
    FiveWorkouts,
    TenWorkouts,
    #[serde(rename = "streak_3")]
    Streak3,
    #[serde(rename = "streak_7")]
    Streak7,
    #[serde(rename = "level_5")]
    Level5,
    #[serde(rename = "level_10")]
    Level10,
    #[serde(rename = "exercises_50")]
    Exercises50,
    #[serde(rename = "exercises_100")]
    Exercises100,
    #[serde(rename = "plans_5")]
    Plans5,
}

/// Unlock condition: a stats field compared against a threshold.
///
/// Kept as plain data rather than closures so the catalog can live in a
/// `const` table and conditions stay pure functions of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    PlansGenerated(u32),
    ExercisesCompleted(u32),
    WorkoutsCompleted(u32),
    LongestStreak(u32),
    LevelReached(u32),
}

impl Condition {
    /// Whether the condition holds for a stats snapshot. Pure.
    pub fn holds(&self, stats: &PlayerStats) -> bool {
        match *self {
            Condition::PlansGenerated(n) => stats.plans_generated >= n,
            Condition::ExercisesCompleted(n) => stats.total_exercises_completed >= n,
            Condition::WorkoutsCompleted(n) => stats.total_workouts_completed >= n,
            Condition::LongestStreak(n) => stats.longest_streak >= n,
            Condition::LevelReached(n) => stats.level >= n,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub xp_reward: u64,
    pub condition: Condition,
}
