//! Transient UI signals: the level-up flash and the achievement toast.
//!
//! Both are explicit expiring values (payload + expiry instant) that the
//! presentation layer polls each frame. Expiry and dismissal only ever
//! clear; nothing here touches [`PlayerStats`](crate::stats::PlayerStats).

use crate::achievements::AchievementId;
use crate::constants::{ACHIEVEMENT_TOAST_SECONDS, LEVEL_UP_FLASH_SECONDS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Toast {
    ids: Vec<AchievementId>,
    until: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct TransientSignals {
    level_up_until: Option<Instant>,
    toast: Option<Toast>,
}

impl TransientSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the level-up flash window.
    pub fn raise_level_up(&mut self, now: Instant) {
        self.level_up_until = Some(now + Duration::from_secs_f64(LEVEL_UP_FLASH_SECONDS));
    }

    /// Show a toast for newly unlocked achievements, replacing any
    /// toast still on screen.
    pub fn raise_achievements(&mut self, ids: Vec<AchievementId>, now: Instant) {
        if ids.is_empty() {
            return;
        }
        self.toast = Some(Toast {
            ids,
            until: now + Duration::from_secs_f64(ACHIEVEMENT_TOAST_SECONDS),
        });
    }

    pub fn level_up_active(&self, now: Instant) -> bool {
        self.level_up_until.is_some_and(|until| now < until)
    }

    /// Achievements currently being toasted, empty once expired.
    pub fn toasted_achievements(&self, now: Instant) -> &[AchievementId] {
        match &self.toast {
            Some(toast) if now < toast.until => &toast.ids,
            _ => &[],
        }
    }

    /// Drop signals whose window has passed. Called once per frame so a
    /// stale flash cannot outlive its window even if never polled.
    pub fn expire(&mut self, now: Instant) {
        if self.level_up_until.is_some_and(|until| now >= until) {
            self.level_up_until = None;
        }
        if self.toast.as_ref().is_some_and(|t| now >= t.until) {
            self.toast = None;
        }
    }

    /// Force-clear the level-up flash ahead of its timer.
    pub fn dismiss_level_up(&mut self) {
        self.level_up_until = None;
    }

    /// Force-clear the achievement toast ahead of its timer.
    pub fn dismiss_achievements(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_level_up_flash_expires() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_level_up(now);

        assert!(signals.level_up_active(now));
        assert!(signals.level_up_active(now + secs(LEVEL_UP_FLASH_SECONDS - 0.1)));
        assert!(!signals.level_up_active(now + secs(LEVEL_UP_FLASH_SECONDS)));
    }

    #[test]
    fn test_toast_expires() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_achievements(vec![AchievementId::FirstPlan], now);

        assert_eq!(signals.toasted_achievements(now).len(), 1);
        assert!(signals
            .toasted_achievements(now + secs(ACHIEVEMENT_TOAST_SECONDS))
            .is_empty());
    }

    #[test]
    fn test_dismiss_clears_immediately() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_level_up(now);
        signals.raise_achievements(vec![AchievementId::FirstExercise], now);

        signals.dismiss_level_up();
        signals.dismiss_achievements();
        assert!(!signals.level_up_active(now));
        assert!(signals.toasted_achievements(now).is_empty());
    }

    #[test]
    fn test_expire_does_not_clear_live_signals() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_level_up(now);
        signals.expire(now + secs(1.0));
        assert!(signals.level_up_active(now + secs(1.0)));
    }

    #[test]
    fn test_stale_expiry_cannot_kill_a_newer_raise() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_achievements(vec![AchievementId::FirstPlan], now);

        // A second unlock lands late in the first window
        let later = now + secs(ACHIEVEMENT_TOAST_SECONDS - 0.5);
        signals.raise_achievements(vec![AchievementId::FirstExercise], later);

        // The first window's deadline passes; the new toast must survive
        let first_deadline = now + secs(ACHIEVEMENT_TOAST_SECONDS);
        signals.expire(first_deadline);
        assert_eq!(
            signals.toasted_achievements(first_deadline),
            &[AchievementId::FirstExercise]
        );
    }

    #[test]
    fn test_raising_empty_unlock_set_is_a_no_op() {
        let now = Instant::now();
        let mut signals = TransientSignals::new();
        signals.raise_achievements(Vec::new(), now);
        assert!(signals.toasted_achievements(now).is_empty());
    }
}
