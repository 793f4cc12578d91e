//! RON level curve loader
//!
//! Loads a custom level curve from a RON file, with fallback to the built-in
//! table when the configured file is missing or broken.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProgressionError, Result};
use crate::progression::{LevelCurve, LevelTable};

/// File name of the curve inside the config directory
pub const CURVE_FILE_NAME: &str = "curve.ron";

/// Location of the user's curve file, if a config directory is available
pub fn default_curve_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "habitprogress", "HabitProgress")
        .map(|dirs| dirs.config_dir().join(CURVE_FILE_NAME))
}

/// Read and parse a curve file
pub fn load_curve(path: &Path) -> Result<LevelCurve> {
    let content = fs::read_to_string(path).map_err(|source| ProgressionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let curve: LevelCurve =
        ron::from_str(&content).map_err(|e| ProgressionError::Parse(e.to_string()))?;

    log::info!("Loaded level curve from {:?}", path);
    Ok(curve)
}

/// A curve together with the table built from it
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCurve {
    pub curve: LevelCurve,
    pub table: LevelTable,
}

impl LoadedCurve {
    pub fn builtin() -> Self {
        Self { curve: LevelCurve::default(), table: LevelTable::builtin() }
    }
}

/// Read a curve file and build a validated table from it
pub fn load_table(path: &Path) -> Result<LoadedCurve> {
    let curve = load_curve(path)?;
    let table = LevelTable::from_curve(&curve)?;
    Ok(LoadedCurve { curve, table })
}

/// Load the curve from the config directory, or fall back to the built-in one
pub fn load_configured() -> LoadedCurve {
    match default_curve_path() {
        Some(path) => load_or_builtin(&path),
        None => LoadedCurve::builtin(),
    }
}

/// Load the curve from `path`; a missing file is not an error
pub fn load_or_builtin(path: &Path) -> LoadedCurve {
    if !path.exists() {
        return LoadedCurve::builtin();
    }

    load_table(path).unwrap_or_else(|e| {
        log::warn!("Failed to load level curve {:?}: {}. Using defaults.", path, e);
        LoadedCurve::builtin()
    })
}

/// Write a curve to a RON file, creating parent directories
pub fn export_curve(curve: &LevelCurve, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ProgressionError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = ron::ser::to_string_pretty(curve, ron::ser::PrettyConfig::default())
        .map_err(|e| ProgressionError::Parse(format!("failed to serialize curve: {}", e)))?;

    fs::write(path, content).map_err(|source| ProgressionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Level curve written to {:?}", path);
    Ok(())
}
