//! The progress engine: applies XP-earning events to a [`PlayerStats`]
//! snapshot, keeps the derived level in sync, tracks streak continuity,
//! and evaluates the achievement catalog after qualifying events.
//!
//! Operations are synchronous read-modify-write steps over the owned
//! snapshot and have no failure modes; indices and amounts are a caller
//! contract. Persistence is the caller's job (save after every call).

use crate::achievements::{self, AchievementId};
use crate::constants::{
    XP_EXERCISE_COMPLETE, XP_PLAN_GENERATED, XP_STREAK_BONUS, XP_WORKOUT_COMPLETE,
};
use crate::leveling::level_for_xp;
use crate::signals::TransientSignals;
use crate::stats::PlayerStats;
use chrono::NaiveDate;
use std::time::Instant;

pub struct ProgressEngine {
    stats: PlayerStats,
    signals: TransientSignals,
}

impl ProgressEngine {
    /// Wrap a loaded (or fresh) stats record. The derived level is
    /// recomputed so a hand-edited record cannot drift from its XP.
    pub fn new(mut stats: PlayerStats) -> Self {
        stats.level = level_for_xp(stats.xp);
        Self {
            stats,
            signals: TransientSignals::new(),
        }
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn signals(&self) -> &TransientSignals {
        &self.signals
    }

    /// Drop expired signal windows. Call once per frame.
    pub fn expire_signals(&mut self, now: Instant) {
        self.signals.expire(now);
    }

    pub fn dismiss_level_up(&mut self) {
        self.signals.dismiss_level_up();
    }

    pub fn dismiss_achievements(&mut self) {
        self.signals.dismiss_achievements();
    }

    /// Add raw XP and recompute the level.
    pub fn grant_xp(&mut self, amount: u64) {
        let level_before = self.stats.level;
        self.stats.xp += amount;
        self.stats.level = level_for_xp(self.stats.xp);
        self.finish_mutation(level_before, false);
    }

    /// Tick an exercise. Idempotent: a key that is already marked earns
    /// nothing.
    pub fn complete_exercise(&mut self, day_index: u32, exercise_index: u32) {
        if !self.stats.completed_exercises.insert((day_index, exercise_index)) {
            return;
        }
        let level_before = self.stats.level;
        self.stats.total_exercises_completed += 1;
        self.stats.xp += XP_EXERCISE_COMPLETE;
        self.stats.level = level_for_xp(self.stats.xp);
        self.finish_mutation(level_before, true);
    }

    /// Untick an exercise, reversing its reward. XP and the counter
    /// saturate at zero. Achievements are never revoked, so no
    /// evaluation pass runs here.
    pub fn uncomplete_exercise(&mut self, day_index: u32, exercise_index: u32) {
        if !self.stats.completed_exercises.remove(&(day_index, exercise_index)) {
            return;
        }
        self.stats.total_exercises_completed =
            self.stats.total_exercises_completed.saturating_sub(1);
        self.stats.xp = self.stats.xp.saturating_sub(XP_EXERCISE_COMPLETE);
        self.stats.level = level_for_xp(self.stats.xp);
    }

    /// Claim a completed workout day for `today`. The caller calls this
    /// at most once per generated day.
    ///
    /// Streak continuity is a civil-date comparison: the streak extends
    /// only when the last claimed date is exactly yesterday.
    pub fn complete_workout_day(&mut self, today: NaiveDate) {
        let level_before = self.stats.level;

        let consecutive = match (self.stats.last_workout_date, today.pred_opt()) {
            (Some(last), Some(yesterday)) => last == yesterday,
            _ => false,
        };
        let streak = if consecutive {
            self.stats.current_streak + 1
        } else {
            1
        };

        self.stats.current_streak = streak;
        self.stats.longest_streak = self.stats.longest_streak.max(streak);
        self.stats.last_workout_date = Some(today);
        self.stats.total_workouts_completed += 1;

        let streak_bonus = if streak > 1 { XP_STREAK_BONUS } else { 0 };
        self.stats.xp += XP_WORKOUT_COMPLETE + streak_bonus;
        self.stats.level = level_for_xp(self.stats.xp);
        self.finish_mutation(level_before, true);
    }

    /// Record a freshly generated plan. Clears all exercise ticks:
    /// `(day, exercise)` keys are plan-relative, and stale entries must
    /// not block XP on the new plan's exercises.
    pub fn record_plan_generated(&mut self) {
        let level_before = self.stats.level;
        self.stats.plans_generated += 1;
        self.stats.completed_exercises.clear();
        self.stats.xp += XP_PLAN_GENERATED;
        self.stats.level = level_for_xp(self.stats.xp);
        self.finish_mutation(level_before, true);
    }

    /// Shared tail of every XP-granting operation: optionally run the
    /// achievement pass on the post-mutation snapshot (its bonus XP can
    /// cross further level thresholds), then raise the level-up flash if
    /// the level rose at all across the combined change.
    fn finish_mutation(&mut self, level_before: u32, evaluate_achievements: bool) {
        if evaluate_achievements {
            let newly = achievements::newly_qualifying(&self.stats);
            if !newly.is_empty() {
                let bonus: u64 = newly.iter().map(|def| def.xp_reward).sum();
                let ids: Vec<AchievementId> = newly.iter().map(|def| def.id).collect();
                self.stats.xp += bonus;
                self.stats.level = level_for_xp(self.stats.xp);
                self.stats.unlocked_achievements.extend(ids.iter().copied());
                self.signals.raise_achievements(ids, Instant::now());
            }
        }
        if self.stats.level > level_before {
            self.signals.raise_level_up(Instant::now());
        }
    }
}
