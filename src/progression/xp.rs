//! Experience values and XP helpers
//!
//! Cumulative XP is owned by the data layer and handed to us as a plain
//! integer. This module guards that boundary and holds level-based XP helpers.

use serde::Serialize;

use crate::error::{ProgressionError, Result};

/// Cumulative, all-time XP for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct TotalXp(u64);

impl TotalXp {
    pub fn new(xp: u64) -> Self {
        Self(xp)
    }

    /// Accept XP from a signed source, rejecting negative values
    pub fn from_signed(xp: i64) -> Result<Self> {
        u64::try_from(xp)
            .map(Self)
            .map_err(|_| ProgressionError::NegativeXp(xp))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TotalXp {
    fn from(xp: u64) -> Self {
        Self(xp)
    }
}

impl TryFrom<i64> for TotalXp {
    type Error = ProgressionError;

    fn try_from(xp: i64) -> Result<Self> {
        Self::from_signed(xp)
    }
}

impl std::fmt::Display for TotalXp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} XP", self.0)
    }
}

/// Bonus multiplier for XP earned at a given level
///
/// Not applied by any award logic yet.
pub fn level_xp_multiplier(level: u32) -> f64 {
    match level {
        0..=9 => 1.0,
        10..=19 => 1.05,
        20..=29 => 1.1,
        30..=39 => 1.15,
        _ => 1.2,
    }
}
