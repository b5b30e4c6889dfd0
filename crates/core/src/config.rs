//! Construction-time configuration
//!
//! A `GameConfig` is plain data handed over by a config/persistence
//! collaborator. [`GameConfig::validate`] rejects malformed values before any
//! game state is built.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Cell, PieceKind, DEFAULT_CELL_SIZE, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, MAX_DIFFICULTY,
    MIN_DIFFICULTY,
};

/// Smallest board edge that still fits every piece and its kicks
const MIN_BOARD_EDGE: i32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub initial: f32,
    /// Level gained per simulated second; 0 keeps difficulty fixed
    pub increase_per_second: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            initial: MIN_DIFFICULTY,
            increase_per_second: 0.0,
            min: MIN_DIFFICULTY,
            max: MAX_DIFFICULTY,
        }
    }
}

/// Which lose condition the rules run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LosePolicy {
    /// Game over once the stack reaches the top row
    #[default]
    Endless,
    /// Game over after `attempts` locks, or when the stack reaches the top row
    LimitedAttempts { attempts: u32 },
}

/// Which win condition the rules run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinPolicy {
    #[default]
    None,
    /// Win once every preset row has been cleared
    PresetClear,
}

/// A row pre-filled with preset blocks at construction
///
/// `row` counts from 1 at the top of the board, so `row == rows` is the
/// bottom row and row 0 sits just above the board. Only placed under
/// [`WinPolicy::PresetClear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetRow {
    pub row: i32,
    pub columns: Vec<i32>,
}

impl PresetRow {
    pub fn new(row: i32, columns: impl Into<Vec<i32>>) -> Self {
        Self {
            row,
            columns: columns.into(),
        }
    }

    /// Board row this preset lands on
    pub fn board_row(&self) -> i32 {
        self.row - 1
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let row = self.board_row();
        self.columns.iter().map(move |&col| Cell::new(col, row))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: i32,
    pub rows: i32,
    pub cell_size: i32,
    pub difficulty: DifficultyConfig,
    pub lose: LosePolicy,
    pub win: WinPolicy,
    pub presets: Vec<PresetRow>,
    /// Best score held by the persistence collaborator, if any
    pub best_score: Option<u32>,
    pub seed: u64,
    /// Fixed piece order, cycled; uniform random draws when `None`
    pub sequence: Option<Vec<PieceKind>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMN_COUNT,
            rows: DEFAULT_ROW_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
            difficulty: DifficultyConfig::default(),
            lose: LosePolicy::default(),
            win: WinPolicy::default(),
            presets: Vec::new(),
            best_score: None,
            seed: 1,
            sequence: None,
        }
    }
}

impl GameConfig {
    /// Endless mode on a default board
    pub fn endless(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Limited-attempts mode on a default board
    pub fn limited_attempts(seed: u64, attempts: u32) -> Self {
        Self {
            seed,
            lose: LosePolicy::LimitedAttempts { attempts },
            ..Self::default()
        }
    }

    /// Preset-clear puzzle on a default board
    pub fn preset_clear(seed: u64, presets: Vec<PresetRow>) -> Self {
        Self {
            seed,
            win: WinPolicy::PresetClear,
            presets,
            ..Self::default()
        }
    }

    /// Pivot cell new pieces spawn at
    pub fn spawn_cell(&self) -> Cell {
        Cell::new((self.columns + 1) / 2 - 1, 0)
    }

    /// Board size in collaborator pixel units, `None` if it overflows
    pub fn pixel_bounds(&self) -> Option<(i32, i32)> {
        Some((
            self.columns.checked_mul(self.cell_size)?,
            self.rows.checked_mul(self.cell_size)?,
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_EDGE || self.rows < MIN_BOARD_EDGE {
            return Err(ConfigError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.pixel_bounds().is_none() {
            return Err(ConfigError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
                cell_size: self.cell_size,
            });
        }

        let d = &self.difficulty;
        if !(d.min.is_finite() && d.max.is_finite()) || d.min <= 0.0 || d.min > d.max {
            return Err(ConfigError::InvalidDifficultyBounds {
                min: d.min,
                max: d.max,
            });
        }
        if !d.initial.is_finite() || d.initial < d.min || d.initial > d.max {
            return Err(ConfigError::DifficultyOutOfRange {
                value: d.initial,
                min: d.min,
                max: d.max,
            });
        }
        if !d.increase_per_second.is_finite() || d.increase_per_second < 0.0 {
            return Err(ConfigError::InvalidIncreaseRate(d.increase_per_second));
        }

        if let LosePolicy::LimitedAttempts { attempts: 0 } = self.lose {
            return Err(ConfigError::ZeroAttempts);
        }

        self.validate_presets()?;

        if matches!(&self.sequence, Some(seq) if seq.is_empty()) {
            return Err(ConfigError::EmptySequence);
        }

        Ok(())
    }

    fn validate_presets(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for preset in &self.presets {
            if preset.row < 0 || preset.row > self.rows {
                return Err(ConfigError::PresetRowOutOfRange {
                    row: preset.row,
                    rows: self.rows,
                });
            }
            if !seen.insert(preset.row) {
                return Err(ConfigError::DuplicatePresetRow(preset.row));
            }
            if let Some(&col) = preset
                .columns
                .iter()
                .find(|&&col| col < 0 || col >= self.columns)
            {
                return Err(ConfigError::PresetColumnOutOfRange {
                    row: preset.row,
                    col,
                    columns: self.columns,
                });
            }
            let distinct: BTreeSet<i32> = preset.columns.iter().copied().collect();
            if distinct.is_empty() {
                return Err(ConfigError::EmptyPresetRow(preset.row));
            }
            if distinct.len() as i32 >= self.columns {
                return Err(ConfigError::FullPresetRow(preset.row));
            }
        }

        if self.win == WinPolicy::PresetClear && self.presets.is_empty() {
            return Err(ConfigError::MissingPresets);
        }
        Ok(())
    }
}
