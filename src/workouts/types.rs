//! Workout plan types and the user-facing plan parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Training experience tier selected in the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 2] = [FitnessLevel::Beginner, FitnessLevel::Intermediate];
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessLevel::Beginner => write!(f, "Beginner"),
            FitnessLevel::Intermediate => write!(f, "Intermediate"),
        }
    }
}

/// Where the plan will be trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Gym,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Home, Location::Gym];
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Home => write!(f, "Home"),
            Location::Gym => write!(f, "Gym"),
        }
    }
}

/// A single prescribed exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

/// One calendar day of the weekly plan. Rest days carry an empty
/// exercise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutDay {
    pub day: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [Exercise],
}

pub const REST_FOCUS: &str = "Rest";

impl WorkoutDay {
    pub fn is_rest(&self) -> bool {
        self.focus == REST_FOCUS
    }
}
