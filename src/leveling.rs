//! Level and rank model: pure mappings between cumulative XP and level.

/// Cumulative XP required to have reached each level. Index 0 = level 1.
pub const LEVEL_XP_THRESHOLDS: [u64; 20] = [
    0, 100, 250, 500, 800, 1200, 1700, 2300, 3000, 3800, 4700, 5700, 6800, 8000, 9500, 11000,
    13000, 15000, 17500, 20000,
];

/// Flat XP cost per level beyond the tabulated range.
pub const EXTRA_LEVEL_XP: u64 = 500;

/// Rank titles, two levels per rank, clamped to the last entry.
pub const RANK_NAMES: [&str; 11] = [
    "Rookie", "Starter", "Trainee", "Athlete", "Fighter", "Warrior", "Champion", "Elite",
    "Legend", "Titan", "Iron God",
];

const MAX_TABLE_LEVEL: u32 = LEVEL_XP_THRESHOLDS.len() as u32;

/// Highest level whose cumulative threshold is at or below `xp`.
///
/// Total over all `xp`: beyond the table every [`EXTRA_LEVEL_XP`] grants
/// one more level.
pub fn level_for_xp(xp: u64) -> u32 {
    let top = LEVEL_XP_THRESHOLDS[LEVEL_XP_THRESHOLDS.len() - 1];
    if xp >= top {
        return MAX_TABLE_LEVEL + ((xp - top) / EXTRA_LEVEL_XP) as u32;
    }
    let mut level = 1;
    for (i, threshold) in LEVEL_XP_THRESHOLDS.iter().enumerate() {
        if xp >= *threshold {
            level = i as u32 + 1;
        } else {
            break;
        }
    }
    level
}

/// Cumulative XP required to have reached `level` (0 for level 1).
///
/// Levels below 1 clamp to level 1 rather than panic.
pub fn xp_floor(level: u32) -> u64 {
    let level = level.max(1);
    if level <= MAX_TABLE_LEVEL {
        LEVEL_XP_THRESHOLDS[(level - 1) as usize]
    } else {
        let top = LEVEL_XP_THRESHOLDS[LEVEL_XP_THRESHOLDS.len() - 1];
        top + (level - MAX_TABLE_LEVEL) as u64 * EXTRA_LEVEL_XP
    }
}

/// Cumulative XP required to reach `level + 1`. Drives the in-level
/// progress bar.
pub fn xp_ceiling(level: u32) -> u64 {
    xp_floor(level.max(1) + 1)
}

/// Rank title for a level.
pub fn rank_for_level(level: u32) -> &'static str {
    let index = ((level.max(1) - 1) / 2) as usize;
    RANK_NAMES[index.min(RANK_NAMES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_at_zero_xp() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(xp_floor(1), 0);
    }

    #[test]
    fn test_level_for_xp_matches_thresholds() {
        // Every tabulated threshold maps back to its own level
        for (i, threshold) in LEVEL_XP_THRESHOLDS.iter().enumerate() {
            assert_eq!(level_for_xp(*threshold), i as u32 + 1);
        }
        // One XP short of a threshold stays on the previous level
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(249), 2);
        assert_eq!(level_for_xp(250), 3);
    }

    #[test]
    fn test_level_for_xp_monotonic() {
        let mut last = 0;
        for xp in (0..30_000).step_by(37) {
            let level = level_for_xp(xp);
            assert!(level >= last, "level dropped at xp={}", xp);
            last = level;
        }
    }

    #[test]
    fn test_extrapolation_beyond_table() {
        // Level 20 starts at 20000; each further level costs 500
        assert_eq!(level_for_xp(20_000), 20);
        assert_eq!(level_for_xp(20_499), 20);
        assert_eq!(level_for_xp(20_500), 21);
        assert_eq!(level_for_xp(25_000), 30);
        assert_eq!(xp_floor(21), 20_500);
        assert_eq!(xp_floor(30), 25_000);
        assert_eq!(xp_ceiling(20), 20_500);
    }

    #[test]
    fn test_floor_ceiling_band() {
        for xp in (0..40_000).step_by(113) {
            let level = level_for_xp(xp);
            assert!(xp_floor(level) <= xp, "floor above xp at {}", xp);
            assert!(xp < xp_ceiling(level), "ceiling not above xp at {}", xp);
        }
    }

    #[test]
    fn test_floor_round_trips_through_level() {
        for level in 1..50 {
            assert_eq!(level_for_xp(xp_floor(level)), level);
        }
    }

    #[test]
    fn test_rank_progression() {
        assert_eq!(rank_for_level(1), "Rookie");
        assert_eq!(rank_for_level(2), "Rookie");
        assert_eq!(rank_for_level(3), "Starter");
        assert_eq!(rank_for_level(10), "Fighter");
        assert_eq!(rank_for_level(21), "Iron God");
        // Clamped past the table
        assert_eq!(rank_for_level(99), "Iron God");
    }

    #[test]
    fn test_clamps_bad_level_input() {
        assert_eq!(xp_floor(0), 0);
        assert_eq!(xp_ceiling(0), xp_ceiling(1));
        assert_eq!(rank_for_level(0), "Rookie");
    }
}
