//! Static exercise banks and weekly split tables.

use super::types::{Exercise, FitnessLevel, Location};

/// A bank maps focus labels to their exercise prescription.
pub type FocusBank = &'static [(&'static str, &'static [Exercise])];

const fn ex(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
) -> Exercise {
    Exercise {
        name,
        sets,
        reps,
        rest,
    }
}

pub const HOME_BEGINNER: FocusBank = &[
    (
        "Full Body",
        &[
            ex("Bodyweight Squats", 3, "12", "60s"),
            ex("Push-ups (Knee)", 3, "10", "60s"),
            ex("Glute Bridges", 3, "15", "45s"),
            ex("Plank Hold", 3, "30s", "45s"),
            ex("Jumping Jacks", 3, "20", "30s"),
        ],
    ),
    (
        "Upper Body",
        &[
            ex("Push-ups (Knee)", 3, "10", "60s"),
            ex("Tricep Dips (Chair)", 3, "10", "60s"),
            ex("Arm Circles", 3, "20", "30s"),
            ex("Superman Hold", 3, "20s", "45s"),
            ex("Plank Shoulder Taps", 3, "12", "45s"),
        ],
    ),
    (
        "Lower Body",
        &[
            ex("Bodyweight Squats", 3, "15", "60s"),
            ex("Lunges", 3, "10/leg", "60s"),
            ex("Calf Raises", 3, "20", "30s"),
            ex("Wall Sit", 3, "30s", "45s"),
            ex("Glute Bridges", 3, "15", "45s"),
        ],
    ),
    (
        "Core & Cardio",
        &[
            ex("Mountain Climbers", 3, "20", "45s"),
            ex("Bicycle Crunches", 3, "15/side", "45s"),
            ex("High Knees", 3, "30s", "30s"),
            ex("Plank Hold", 3, "45s", "45s"),
            ex("Burpees", 3, "8", "60s"),
        ],
    ),
    (
        "Active Recovery",
        &[
            ex("Walking", 1, "20 min", "—"),
            ex("Yoga Flow", 1, "15 min", "—"),
            ex("Foam Rolling", 1, "10 min", "—"),
        ],
    ),
];

pub const HOME_INTERMEDIATE: FocusBank = &[
    (
        "Full Body",
        &[
            ex("Jump Squats", 4, "15", "45s"),
            ex("Push-ups", 4, "15", "45s"),
            ex("Single-Leg Deadlift", 3, "12/leg", "60s"),
            ex("Burpees", 4, "12", "45s"),
            ex("Plank to Push-up", 3, "10", "60s"),
        ],
    ),
    (
        "Upper Body",
        &[
            ex("Diamond Push-ups", 4, "12", "45s"),
            ex("Pike Push-ups", 4, "10", "60s"),
            ex("Tricep Dips (Chair)", 4, "15", "45s"),
            ex("Superman Pulls", 3, "15", "45s"),
            ex("Decline Push-ups", 3, "12", "60s"),
        ],
    ),
    (
        "Lower Body",
        &[
            ex("Bulgarian Split Squats", 4, "12/leg", "60s"),
            ex("Pistol Squat Progressions", 3, "8/leg", "60s"),
            ex("Jump Lunges", 4, "10/leg", "45s"),
            ex("Single-Leg Calf Raises", 4, "15/leg", "30s"),
            ex("Wall Sit", 3, "60s", "45s"),
        ],
    ),
    (
        "Core & HIIT",
        &[
            ex("Burpees", 4, "15", "30s"),
            ex("V-ups", 4, "15", "45s"),
            ex("Mountain Climbers", 4, "30", "30s"),
            ex("Plank Hold", 3, "60s", "30s"),
            ex("Tuck Jumps", 3, "10", "45s"),
        ],
    ),
    (
        "Active Recovery",
        &[
            ex("Light Jog", 1, "25 min", "—"),
            ex("Yoga Flow", 1, "20 min", "—"),
            ex("Stretching Routine", 1, "15 min", "—"),
        ],
    ),
];

pub const GYM_BEGINNER: FocusBank = &[
    (
        "Full Body",
        &[
            ex("Goblet Squats", 3, "12", "60s"),
            ex("Lat Pulldown", 3, "12", "60s"),
            ex("Dumbbell Bench Press", 3, "10", "60s"),
            ex("Leg Press", 3, "12", "60s"),
            ex("Cable Face Pulls", 3, "15", "45s"),
        ],
    ),
    (
        "Push",
        &[
            ex("Barbell Bench Press", 3, "10", "90s"),
            ex("Dumbbell Shoulder Press", 3, "10", "60s"),
            ex("Incline Dumbbell Press", 3, "10", "60s"),
            ex("Tricep Pushdown", 3, "12", "45s"),
            ex("Lateral Raises", 3, "12", "45s"),
        ],
    ),
    (
        "Pull",
        &[
            ex("Lat Pulldown", 3, "10", "60s"),
            ex("Seated Cable Row", 3, "12", "60s"),
            ex("Dumbbell Bicep Curls", 3, "12", "45s"),
            ex("Face Pulls", 3, "15", "45s"),
            ex("Hammer Curls", 3, "10", "45s"),
        ],
    ),
    (
        "Legs",
        &[
            ex("Barbell Squats", 3, "10", "90s"),
            ex("Leg Press", 3, "12", "60s"),
            ex("Romanian Deadlift", 3, "10", "60s"),
            ex("Leg Curls", 3, "12", "45s"),
            ex("Calf Raises (Machine)", 3, "15", "45s"),
        ],
    ),
    (
        "Active Recovery",
        &[
            ex("Treadmill Walk", 1, "20 min", "—"),
            ex("Stretching", 1, "15 min", "—"),
            ex("Foam Rolling", 1, "10 min", "—"),
        ],
    ),
];

pub const GYM_INTERMEDIATE: FocusBank = &[
    (
        "Full Body",
        &[
            ex("Barbell Squats", 4, "10", "90s"),
            ex("Barbell Bench Press", 4, "8", "90s"),
            ex("Barbell Rows", 4, "10", "60s"),
            ex("Overhead Press", 3, "10", "60s"),
            ex("Plank Hold", 3, "60s", "45s"),
        ],
    ),
    (
        "Push",
        &[
            ex("Barbell Bench Press", 4, "8", "90s"),
            ex("Incline Dumbbell Press", 4, "10", "60s"),
            ex("Overhead Press", 4, "8", "90s"),
            ex("Cable Flyes", 3, "12", "45s"),
            ex("Tricep Dips (Weighted)", 3, "10", "60s"),
            ex("Lateral Raises", 4, "15", "30s"),
        ],
    ),
    (
        "Pull",
        &[
            ex("Deadlift", 4, "6", "120s"),
            ex("Pull-ups (Weighted)", 4, "8", "90s"),
            ex("Barbell Rows", 4, "10", "60s"),
            ex("Face Pulls", 3, "15", "45s"),
            ex("Barbell Curls", 3, "10", "45s"),
            ex("Hammer Curls", 3, "12", "45s"),
        ],
    ),
    (
        "Legs",
        &[
            ex("Barbell Squats", 4, "8", "120s"),
            ex("Romanian Deadlift", 4, "10", "90s"),
            ex("Leg Press", 4, "12", "60s"),
            ex("Walking Lunges", 3, "12/leg", "60s"),
            ex("Leg Curls", 3, "12", "45s"),
            ex("Calf Raises", 4, "15", "30s"),
        ],
    ),
    (
        "Active Recovery",
        &[
            ex("Light Cardio", 1, "25 min", "—"),
            ex("Mobility Work", 1, "20 min", "—"),
            ex("Foam Rolling", 1, "10 min", "—"),
        ],
    ),
];

pub const DAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// The exercise bank for a level/location pair.
pub fn bank_for(level: FitnessLevel, location: Location) -> FocusBank {
    match (location, level) {
        (Location::Home, FitnessLevel::Beginner) => HOME_BEGINNER,
        (Location::Home, FitnessLevel::Intermediate) => HOME_INTERMEDIATE,
        (Location::Gym, FitnessLevel::Beginner) => GYM_BEGINNER,
        (Location::Gym, FitnessLevel::Intermediate) => GYM_INTERMEDIATE,
    }
}

/// Exercises for a focus label; a label missing from the bank yields an
/// empty prescription.
pub fn exercises_for(bank: FocusBank, focus: &str) -> &'static [Exercise] {
    bank.iter()
        .find(|(label, _)| *label == focus)
        .map(|(_, exercises)| *exercises)
        .unwrap_or(&[])
}

/// Focus labels for each training day of the week, by location and
/// requested day count. Unknown day counts fall back to the 3-day split.
pub fn split_for_days(days_per_week: u8, location: Location) -> &'static [&'static str] {
    match location {
        Location::Home => match days_per_week {
            2 => &["Full Body", "Core & Cardio"],
            4 => &["Upper Body", "Lower Body", "Core & Cardio", "Full Body"],
            5 => &[
                "Upper Body",
                "Lower Body",
                "Core & Cardio",
                "Full Body",
                "Active Recovery",
            ],
            6 => &[
                "Upper Body",
                "Lower Body",
                "Core & Cardio",
                "Full Body",
                "Upper Body",
                "Active Recovery",
            ],
            _ => &["Full Body", "Upper Body", "Lower Body"],
        },
        Location::Gym => match days_per_week {
            2 => &["Full Body", "Full Body"],
            4 => &["Push", "Pull", "Legs", "Full Body"],
            5 => &["Push", "Pull", "Legs", "Push", "Pull"],
            6 => &["Push", "Pull", "Legs", "Push", "Pull", "Legs"],
            _ => &["Push", "Pull", "Legs"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bank_has_five_focuses() {
        for level in FitnessLevel::ALL {
            for location in Location::ALL {
                assert_eq!(bank_for(level, location).len(), 5);
            }
        }
    }

    #[test]
    fn test_exercises_for_known_focus() {
        let exercises = exercises_for(HOME_BEGINNER, "Full Body");
        assert_eq!(exercises.len(), 5);
        assert_eq!(exercises[0].name, "Bodyweight Squats");
    }

    #[test]
    fn test_exercises_for_missing_focus_is_empty() {
        assert!(exercises_for(HOME_INTERMEDIATE, "Core & Cardio").is_empty());
        assert!(exercises_for(GYM_BEGINNER, "Rest").is_empty());
    }

    #[test]
    fn test_split_lengths_match_day_count() {
        for location in Location::ALL {
            for days in 2..=6u8 {
                assert_eq!(split_for_days(days, location).len(), days as usize);
            }
        }
    }

    #[test]
    fn test_unknown_day_count_falls_back_to_three_day_split() {
        assert_eq!(split_for_days(0, Location::Home).len(), 3);
        assert_eq!(split_for_days(9, Location::Gym).len(), 3);
    }
}
