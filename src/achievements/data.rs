//! Static achievement catalog and registry queries.

use super::types::{AchievementDef, AchievementId, Condition};
use crate::stats::PlayerStats;

/// All achievement definitions, in unlock-evaluation and display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstPlan,
        name: "Architect",
        description: "Generate your first workout plan",
        icon: "📐",
        xp_reward: 25,
        condition: Condition::PlansGenerated(1),
    },
    AchievementDef {
        id: AchievementId::FirstExercise,
        name: "First Rep",
        description: "Complete your first exercise",
        icon: "💪",
        xp_reward: 20,
        condition: Condition::ExercisesCompleted(1),
    },
    AchievementDef {
        id: AchievementId::FirstWorkout,
        name: "Day One",
        description: "Complete a full workout day",
        icon: "🏋️",
        xp_reward: 50,
        condition: Condition::WorkoutsCompleted(1),
    },
    AchievementDef {
        id: AchievementId::FiveWorkouts,
        name: "Dedicated",
        description: "Complete 5 full workout days",
        icon: "🔥",
        xp_reward: 100,
        condition: Condition::WorkoutsCompleted(5),
    },
    AchievementDef {
        id: AchievementId::TenWorkouts,
        name: "Unstoppable",
        description: "Complete 10 full workout days",
        icon: "⚡",
        xp_reward: 200,
        condition: Condition::WorkoutsCompleted(10),
    },
    AchievementDef {
        id: AchievementId::Streak3,
        name: "Hat Trick",
        description: "Achieve a 3-day workout streak",
        icon: "🎯",
        xp_reward: 75,
        condition: Condition::LongestStreak(3),
    },
    AchievementDef {
        id: AchievementId::Streak7,
        name: "Iron Week",
        description: "Achieve a 7-day workout streak",
        icon: "🏆",
        xp_reward: 200,
        condition: Condition::LongestStreak(7),
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Rising Star",
        description: "Reach level 5",
        icon: "⭐",
        xp_reward: 100,
        condition: Condition::LevelReached(5),
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Elite Status",
        description: "Reach level 10",
        icon: "👑",
        xp_reward: 250,
        condition: Condition::LevelReached(10),
    },
    AchievementDef {
        id: AchievementId::Exercises50,
        name: "Half Century",
        description: "Complete 50 exercises total",
        icon: "🎖️",
        xp_reward: 150,
        condition: Condition::ExercisesCompleted(50),
    },
    AchievementDef {
        id: AchievementId::Exercises100,
        name: "Centurion",
        description: "Complete 100 exercises total",
        icon: "🛡️",
        xp_reward: 300,
        condition: Condition::ExercisesCompleted(100),
    },
    AchievementDef {
        id: AchievementId::Plans5,
        name: "Strategist",
        description: "Generate 5 workout plans",
        icon: "🧠",
        xp_reward: 75,
        condition: Condition::PlansGenerated(5),
    },
];

/// Look up the definition for an achievement id.
pub fn def_for(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Catalog entries that are not yet unlocked but whose condition holds
/// for `stats`, in catalog order. Never mutates anything.
pub fn newly_qualifying(stats: &PlayerStats) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| !stats.has_achievement(def.id) && def.condition.holds(stats))
        .collect()
}
