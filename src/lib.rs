//! Habit Progress - XP levels for a habit tracker
//!
//! Turns a user's cumulative XP into a level, a title and progress through
//! the current level. All lookups are pure and run against a table built
//! once per process.

pub mod error;
pub mod progression;
pub mod data;

// Re-export commonly used types
pub use error::ProgressionError;
pub use progression::{
    LevelCurve, LevelDefinition, LevelTable, LevelUp, TotalXp, UserLevel,
    calculate_user_level, check_level_up, level_definition, level_xp_multiplier,
};
