//! Level table
//!
//! Levels 1-12 are hand-tuned and shipped with existing save data, so their
//! thresholds and titles are fixed. Everything after level 12 is generated
//! from a [`LevelCurve`].

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{ProgressionError, Result};

/// Number of hand-tuned levels at the start of every table
pub const HAND_TUNED_LEVEL_COUNT: u32 = 12;

/// Highest level a custom curve may generate
pub const MAX_CONFIGURABLE_LEVEL: u32 = 1000;

/// A single level in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelDefinition {
    pub level: u32,
    pub title: Cow<'static, str>,
    /// Cumulative XP needed to enter this level
    pub xp_required: u64,
    /// Display color (hex)
    pub color: Cow<'static, str>,
    /// Display glyph
    pub emoji: Cow<'static, str>,
}

const fn fixed(
    level: u32,
    title: &'static str,
    xp_required: u64,
    color: &'static str,
    emoji: &'static str,
) -> LevelDefinition {
    LevelDefinition {
        level,
        title: Cow::Borrowed(title),
        xp_required,
        color: Cow::Borrowed(color),
        emoji: Cow::Borrowed(emoji),
    }
}

/// The hand-tuned start of the table. Do not edit thresholds.
pub static HAND_TUNED_LEVELS: [LevelDefinition; HAND_TUNED_LEVEL_COUNT as usize] = [
    fixed(1, "Spark Starter", 0, "#FFB74D", "✨"),
    fixed(2, "Habit Seedling", 100, "#AED581", "🌱"),
    fixed(3, "Momentum Builder", 300, "#81C784", "🚀"),
    fixed(4, "Routine Runner", 600, "#4FC3F7", "🏃"),
    fixed(5, "Consistency Crafter", 1000, "#4DB6AC", "🛠️"),
    fixed(6, "Streak Keeper", 1500, "#7986CB", "🔥"),
    fixed(7, "Discipline Adept", 2200, "#9575CD", "🧘"),
    fixed(8, "Focus Forger", 3000, "#BA68C8", "⚒️"),
    fixed(9, "Rhythm Master", 4000, "#F06292", "🥁"),
    fixed(10, "Habit Hero", 5500, "#E57373", "🦸"),
    fixed(11, "Legend in Progress", 7500, "#FF8A65", "🌟"),
    fixed(12, "Habit Legend", 10000, "#FFD54F", "🏆"),
];

// =============================================================================
// Level Curve
// =============================================================================

/// Shape of the generated tail of the table (levels 13 and up)
///
/// Each generated threshold is `floor(previous * growth_factor)`, starting
/// from the level-12 threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelCurve {
    /// Multiplier applied to the previous threshold
    pub growth_factor: f64,
    /// Last level in the table
    pub max_level: u32,
    /// Title prefix, rendered as "{prefix} {level}"
    pub title_prefix: String,
    pub color: String,
    pub emoji: String,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            growth_factor: 1.3,
            max_level: 50,
            title_prefix: "Master Level".to_string(),
            color: "#FFD700".to_string(),
            emoji: "👑".to_string(),
        }
    }
}

impl LevelCurve {
    /// Check the curve parameters before generating anything
    fn validate(&self) -> Result<()> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(ProgressionError::InvalidCurve(format!(
                "growth factor must be a finite number above 1.0 (got {})",
                self.growth_factor
            )));
        }
        if self.max_level < HAND_TUNED_LEVEL_COUNT {
            return Err(ProgressionError::InvalidCurve(format!(
                "max level must be at least {} (got {})",
                HAND_TUNED_LEVEL_COUNT, self.max_level
            )));
        }
        if self.max_level > MAX_CONFIGURABLE_LEVEL {
            return Err(ProgressionError::InvalidCurve(format!(
                "max level must be at most {} (got {})",
                MAX_CONFIGURABLE_LEVEL, self.max_level
            )));
        }
        Ok(())
    }

    /// Generate levels 13..=max_level
    fn generate_tail(&self) -> Vec<LevelDefinition> {
        let base = &HAND_TUNED_LEVELS[HAND_TUNED_LEVEL_COUNT as usize - 1];
        let mut previous = base.xp_required;

        ((HAND_TUNED_LEVEL_COUNT + 1)..=self.max_level)
            .map(|level| {
                // f64 -> u64 casts saturate, overflow is caught by validation
                previous = (previous as f64 * self.growth_factor).floor() as u64;
                LevelDefinition {
                    level,
                    title: Cow::Owned(format!("{} {}", self.title_prefix, level)),
                    xp_required: previous,
                    color: Cow::Owned(self.color.clone()),
                    emoji: Cow::Owned(self.emoji.clone()),
                }
            })
            .collect()
    }
}

// =============================================================================
// Level Table
// =============================================================================

/// Ordered level definitions, ascending by level and by XP threshold
///
/// Levels are contiguous starting at 1, and level 1 always requires 0 XP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelTable {
    levels: Vec<LevelDefinition>,
}

impl LevelTable {
    /// The standard 50-level table
    pub fn builtin() -> Self {
        Self::assemble(&LevelCurve::default())
    }

    /// Build a table with a custom generated tail
    pub fn from_curve(curve: &LevelCurve) -> Result<Self> {
        curve.validate()?;
        let table = Self::assemble(curve);

        for pair in table.levels.windows(2) {
            if pair[1].xp_required <= pair[0].xp_required || pair[1].xp_required == u64::MAX {
                return Err(ProgressionError::InvalidCurve(format!(
                    "threshold for level {} ({}) does not grow past level {} ({})",
                    pair[1].level, pair[1].xp_required, pair[0].level, pair[0].xp_required
                )));
            }
        }

        Ok(table)
    }

    fn assemble(curve: &LevelCurve) -> Self {
        let mut levels = HAND_TUNED_LEVELS.to_vec();
        levels.extend(curve.generate_tail());
        Self { levels }
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false, a table holds at least the hand-tuned levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The first (level 1) definition
    pub fn first(&self) -> &LevelDefinition {
        &self.levels[0]
    }

    /// The highest level in the table
    pub fn max(&self) -> &LevelDefinition {
        &self.levels[self.levels.len() - 1]
    }

    /// Strict lookup by level number
    pub fn get(&self, level: u32) -> Option<&LevelDefinition> {
        let index = level.checked_sub(1)? as usize;
        self.levels.get(index)
    }

    /// Lookup by level number, falling back to level 1 when out of range
    pub fn definition(&self, level: u32) -> &LevelDefinition {
        self.get(level).unwrap_or_else(|| {
            log::debug!("No level {} in table, falling back to level 1", level);
            self.first()
        })
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Process-wide standard table, built on first use
pub static LEVEL_TABLE: LazyLock<LevelTable> = LazyLock::new(LevelTable::builtin);

/// Look up a level in the standard table (level 1 for unknown levels)
pub fn level_definition(level: u32) -> &'static LevelDefinition {
    LEVEL_TABLE.definition(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let table = LevelTable::builtin();
        assert_eq!(table.len(), 50);
        assert_eq!(table.first().xp_required, 0);
        assert_eq!(table.max().level, 50);

        for (i, def) in table.levels().iter().enumerate() {
            assert_eq!(def.level as usize, i + 1);
        }
        for pair in table.levels().windows(2) {
            assert!(pair[1].xp_required > pair[0].xp_required);
        }
    }

    #[test]
    fn test_hand_tuned_levels_are_untouched() {
        let table = LevelTable::builtin();
        assert_eq!(&table.levels()[..12], &HAND_TUNED_LEVELS[..]);
        assert_eq!(table.levels()[0].title, "Spark Starter");
        assert_eq!(table.levels()[1].xp_required, 100);
        assert_eq!(table.levels()[2].title, "Momentum Builder");
        assert_eq!(table.levels()[2].xp_required, 300);
        assert_eq!(table.levels()[11].xp_required, 10000);
    }

    #[test]
    fn test_generated_levels_follow_growth() {
        let table = LevelTable::builtin();
        let levels = table.levels();

        assert_eq!(levels[12].xp_required, 13000); // level 13
        assert_eq!(levels[13].xp_required, 16900);
        assert_eq!(levels[14].xp_required, 21970);
        assert_eq!(levels[49].xp_required, 213_712_232); // level 50

        for pair in levels[11..].windows(2) {
            let expected = (pair[0].xp_required as f64 * 1.3).floor() as u64;
            assert_eq!(pair[1].xp_required, expected);
            assert_eq!(pair[1].title, format!("Master Level {}", pair[1].level));
            assert_eq!(pair[1].emoji, "👑");
        }
    }

    #[test]
    fn test_level_definition_lookup() {
        assert_eq!(level_definition(3).title, "Momentum Builder");
        assert_eq!(level_definition(50).title, "Master Level 50");
        // Out of range falls back to level 1
        assert_eq!(level_definition(0).level, 1);
        assert_eq!(level_definition(51).level, 1);
        assert_eq!(level_definition(u32::MAX).title, "Spark Starter");
    }

    #[test]
    fn test_strict_get() {
        let table = LevelTable::builtin();
        assert!(table.get(0).is_none());
        assert!(table.get(51).is_none());
        assert_eq!(table.get(12).map(|d| d.xp_required), Some(10000));
    }

    #[test]
    fn test_default_curve_matches_builtin() {
        let table = LevelTable::from_curve(&LevelCurve::default()).unwrap();
        assert_eq!(table, LevelTable::builtin());
    }

    #[test]
    fn test_custom_curve() {
        let curve = LevelCurve {
            growth_factor: 2.0,
            max_level: 15,
            title_prefix: "Grand".to_string(),
            ..LevelCurve::default()
        };
        let table = LevelTable::from_curve(&curve).unwrap();
        assert_eq!(table.len(), 15);
        assert_eq!(table.max().xp_required, 80000);
        assert_eq!(table.max().title, "Grand 15");
    }

    #[test]
    fn test_curve_with_only_hand_tuned_levels() {
        let curve = LevelCurve { max_level: 12, ..LevelCurve::default() };
        let table = LevelTable::from_curve(&curve).unwrap();
        assert_eq!(table.len(), 12);
        assert_eq!(table.max().title, "Habit Legend");
    }

    #[test]
    fn test_invalid_curves_rejected() {
        let flat = LevelCurve { growth_factor: 1.0, ..LevelCurve::default() };
        assert!(matches!(LevelTable::from_curve(&flat), Err(ProgressionError::InvalidCurve(_))));

        let nan = LevelCurve { growth_factor: f64::NAN, ..LevelCurve::default() };
        assert!(LevelTable::from_curve(&nan).is_err());

        let short = LevelCurve { max_level: 5, ..LevelCurve::default() };
        assert!(LevelTable::from_curve(&short).is_err());

        let huge = LevelCurve { max_level: MAX_CONFIGURABLE_LEVEL + 1, ..LevelCurve::default() };
        assert!(LevelTable::from_curve(&huge).is_err());

        // floor() swallows a tiny factor, thresholds stall
        let stalled = LevelCurve { growth_factor: 1.000_01, ..LevelCurve::default() };
        assert!(LevelTable::from_curve(&stalled).is_err());

        // thresholds saturate at u64::MAX
        let overflow = LevelCurve { growth_factor: 1e6, max_level: 20, ..LevelCurve::default() };
        assert!(LevelTable::from_curve(&overflow).is_err());
    }
}
