//! Error taxonomy for construction and board commits
//!
//! Illegal moves are not errors (they return `false`); only malformed
//! configuration and board invariant violations are represented here.

use thiserror::Error;

use crate::types::Cell;

/// Rejected game configuration. Construction fails without partial state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have at least 4 columns and 4 rows, got {columns}x{rows}")]
    InvalidDimensions { columns: i32, rows: i32 },

    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    #[error("board of {columns}x{rows} cells of size {cell_size} overflows pixel bounds")]
    BoardTooLarge {
        columns: i32,
        rows: i32,
        cell_size: i32,
    },

    #[error("difficulty bounds are invalid: min {min} max {max}")]
    InvalidDifficultyBounds { min: f32, max: f32 },

    #[error("difficulty must be between {min} and {max}, got {value}")]
    DifficultyOutOfRange { value: f32, min: f32, max: f32 },

    #[error("difficulty increase rate must be finite and non-negative, got {0}")]
    InvalidIncreaseRate(f32),

    #[error("limited attempts budget must be at least 1")]
    ZeroAttempts,

    #[error("invalid preset row {row}, row has to be between 0 and {rows}")]
    PresetRowOutOfRange { row: i32, rows: i32 },

    #[error("invalid preset column {col} in row {row}, column has to be between 0 and {columns}")]
    PresetColumnOutOfRange { row: i32, col: i32, columns: i32 },

    #[error("preset row {0} is listed more than once")]
    DuplicatePresetRow(i32),

    #[error("preset row {0} has no blocks")]
    EmptyPresetRow(i32),

    #[error("preset row {0} is already complete")]
    FullPresetRow(i32),

    #[error("preset-clear win policy needs at least one preset row")]
    MissingPresets,

    #[error("fixed piece sequence is empty")]
    EmptySequence,

    #[error("preset rows could not be placed: {0}")]
    PresetPlacement(#[from] BoardError),
}

/// Board invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({}, {}) is already occupied", .0.col, .0.row)]
    Occupied(Cell),

    #[error("cell ({}, {}) is committed twice in one batch", .0.col, .0.row)]
    Duplicate(Cell),
}
