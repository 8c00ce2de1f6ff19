//! Achievement catalog and evaluation.
//!
//! Definitions are static data; unlock state lives on
//! [`PlayerStats`](crate::stats::PlayerStats) as an append-only id list.

pub mod data;
pub mod types;

pub use data::{def_for, newly_qualifying, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, Condition};
