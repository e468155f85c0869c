//! Error types surfaced by the simulation core.

use thiserror::Error;

/// Errors reported to the presentation layer.
///
/// None of these are fatal: every operation that returns one leaves the
/// simulation exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rule string contained a non-digit or a digit outside 0..=8.
    #[error("invalid rule input {input:?}: expected digits 0-8")]
    InvalidRuleInput { input: String },

    /// Rules are frozen for the whole duration of a run.
    #[error("rules cannot be changed while the simulation is running")]
    RuleLockedWhileRunning,

    /// No preset is registered at this index.
    #[error("preset index {index} out of range ({len} registered)")]
    PresetIndexOutOfRange { index: usize, len: usize },

    /// A preset cell lands outside the grid after translation.
    #[error("preset {preset:?} places a cell at ({x}, {y}), outside the {cols}x{rows} grid")]
    PresetCoordinateOutOfBounds {
        preset: String,
        x: isize,
        y: isize,
        cols: usize,
        rows: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
