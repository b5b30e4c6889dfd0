//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulation.
//! All types are plain data with no behaviour beyond parsing/formatting, making
//! them usable in any context (core logic, session driver, rendering or
//! persistence collaborators).
//!
//! # Coordinates
//!
//! Cells are addressed as `(col, row)` in cell units:
//!
//! - **col** grows to the right, `0..columns`
//! - **row** grows downward, row 0 is the top of the board
//! - rows above the top (negative) are legal for a falling piece but never
//!   part of the visible board
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMN_COUNT` | 11 | Board width in cells |
//! | `DEFAULT_ROW_COUNT` | 20 | Board height in cells |
//! | `DEFAULT_CELL_SIZE` | 48 | Pixel size of one cell (collaborator units) |
//! | `MIN_DIFFICULTY` | 1.0 | Lowest difficulty level |
//! | `MAX_DIFFICULTY` | 10.0 | Highest difficulty level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Direction, Intent, PieceKind};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let intent = Intent::from_str("hardDrop").unwrap();
//! assert_eq!(intent, Intent::HardDrop);
//!
//! let cell = Cell::new(4, 0).offset(Direction::Down.delta());
//! assert_eq!(cell, Cell::new(4, 1));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells
pub const DEFAULT_COLUMN_COUNT: i32 = 11;

/// Board height in cells
pub const DEFAULT_ROW_COUNT: i32 = 20;

/// Pixel size of a single cell, only used for bounds conversion
pub const DEFAULT_CELL_SIZE: i32 = 48;

/// Lowest difficulty level (one gravity step per second)
pub const MIN_DIFFICULTY: f32 = 1.0;

/// Highest difficulty level
pub const MAX_DIFFICULTY: f32 = 10.0;

/// Number of cells in every tetromino
pub const PIECE_CELLS: usize = 4;

/// Line clear scoring table
///
/// Base points for clearing N lines in one lock:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current difficulty level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Whether rotation applies to this kind (everything except O)
    pub fn rotates(&self) -> bool {
        *self != PieceKind::O
    }
}

/// A board cell in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Translate by `(dcol, drow)`
    pub fn offset(self, (dcol, drow): (i32, i32)) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// Translation directions available to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Unit translation in cell units (rows grow downward)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Discrete intents fed into the simulation by an input collaborator
///
/// Each intent is applied once per discrete press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down and restart the gravity countdown
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl Intent {
    /// Parse intent from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::Rotate => "rotate",
        }
    }
}

/// Content of a committed board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Left behind by a locked piece
    Piece(PieceKind),
    /// Part of a preset row placed at construction
    Preset,
}

/// Stable identity of a board line, unaffected by gravity shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub u32);

/// Notifications produced by the simulation, drained by the game loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PieceLocked {
        kind: PieceKind,
        cells: [Cell; PIECE_CELLS],
    },
    /// Row keys are reported as they were before the clear, bottom first
    LinesCleared { rows: Vec<i32>, count: u32 },
    ScoreChanged { score: u32 },
    GameOver,
    GameWon,
    BestScoreUpdated { best_score: u32 },
    NextPieceChanged { kind: PieceKind },
}

impl GameEvent {
    /// Short name, used by logs and the headless runner
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PieceLocked { .. } => "piece_locked",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::ScoreChanged { .. } => "score_changed",
            GameEvent::GameOver => "game_over",
            GameEvent::GameWon => "game_won",
            GameEvent::BestScoreUpdated { .. } => "best_score_updated",
            GameEvent::NextPieceChanged { .. } => "next_piece_changed",
        }
    }

    /// Whether this event ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameOver | GameEvent::GameWon)
    }
}
