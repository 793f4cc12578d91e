//! Data loading
//!
//! Level curves can be supplied as RON files so the generated part of the
//! table can be tuned without a rebuild.

pub mod loader;

pub use loader::{
    LoadedCurve, default_curve_path, export_curve, load_configured, load_curve, load_or_builtin,
    load_table,
};
