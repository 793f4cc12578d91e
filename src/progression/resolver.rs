//! Level resolution
//!
//! Maps cumulative XP onto the level table. Each level owns the half-open
//! bracket `[xp_required, next.xp_required)`; the last level owns everything
//! from its threshold upward.

use serde::Serialize;

use super::levels::{LevelTable, LEVEL_TABLE};

/// Snapshot of where a cumulative XP value sits in the level table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLevel {
    pub level: u32,
    pub title: String,
    pub current_xp: u64,
    /// Threshold of the current level
    pub xp_for_current_level: u64,
    /// Threshold of the next level (equal to the current one at max level)
    pub xp_for_next_level: u64,
    /// Progress through the current bracket, in `[0, 1]`
    pub progress_to_next_level: f64,
    /// Width of the current bracket, 0 at max level
    pub total_xp_needed: u64,
}

impl UserLevel {
    /// XP earned since entering the current level
    pub fn xp_into_level(&self) -> u64 {
        self.current_xp - self.xp_for_current_level
    }

    /// XP still missing for the next level
    pub fn xp_to_next_level(&self) -> u64 {
        self.xp_for_next_level.saturating_sub(self.current_xp)
    }

    pub fn is_max_level(&self) -> bool {
        self.total_xp_needed == 0
    }
}

/// A level increase between two XP values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelUp {
    pub old_level: UserLevel,
    pub new_level: UserLevel,
}

impl LevelUp {
    pub fn levels_gained(&self) -> u32 {
        self.new_level.level - self.old_level.level
    }
}

impl LevelTable {
    /// Resolve cumulative XP to a level snapshot
    pub fn resolve(&self, total_xp: u64) -> UserLevel {
        let levels = self.levels();

        // First level whose threshold is above the XP; level 1 starts at 0 so
        // the bracket owner is always the entry before it.
        let next_index = levels.partition_point(|def| def.xp_required <= total_xp);
        let current = &levels[next_index.saturating_sub(1)];

        match levels.get(next_index) {
            Some(next) => {
                let total_xp_needed = next.xp_required - current.xp_required;
                let progress = (total_xp - current.xp_required) as f64 / total_xp_needed as f64;

                UserLevel {
                    level: current.level,
                    title: current.title.to_string(),
                    current_xp: total_xp,
                    xp_for_current_level: current.xp_required,
                    xp_for_next_level: next.xp_required,
                    progress_to_next_level: progress.clamp(0.0, 1.0),
                    total_xp_needed,
                }
            }
            None => UserLevel {
                level: current.level,
                title: current.title.to_string(),
                current_xp: total_xp,
                xp_for_current_level: current.xp_required,
                xp_for_next_level: current.xp_required,
                progress_to_next_level: 1.0,
                total_xp_needed: 0,
            },
        }
    }

    /// Compare two XP values and report a level increase, if any
    pub fn check_level_up(&self, old_xp: u64, new_xp: u64) -> Option<LevelUp> {
        let old_level = self.resolve(old_xp);
        let new_level = self.resolve(new_xp);

        if new_level.level > old_level.level {
            log::debug!(
                "Level up: {} -> {} ({} XP -> {} XP)",
                old_level.level, new_level.level, old_xp, new_xp
            );
            Some(LevelUp { old_level, new_level })
        } else {
            None
        }
    }
}

/// Resolve cumulative XP against the standard table
pub fn calculate_user_level(total_xp: u64) -> UserLevel {
    LEVEL_TABLE.resolve(total_xp)
}

/// Check for a level increase against the standard table
pub fn check_level_up(old_xp: u64, new_xp: u64) -> Option<LevelUp> {
    LEVEL_TABLE.check_level_up(old_xp, new_xp)
}
