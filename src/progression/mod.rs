//! Progression systems

pub mod levels;
pub mod resolver;
pub mod xp;

pub use levels::{LevelCurve, LevelDefinition, LevelTable, LEVEL_TABLE, level_definition};
pub use resolver::{LevelUp, UserLevel, calculate_user_level, check_level_up};
pub use xp::{TotalXp, level_xp_multiplier};
