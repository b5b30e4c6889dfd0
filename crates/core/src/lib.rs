//! Core simulation - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: board, active piece,
//! spawning, difficulty and scoring. It has **no dependencies** on rendering,
//! input decoding or persistence; those collaborators feed [`Intent`]s in and
//! receive [`GameEvent`]s out.
//!
//! # Module Structure
//!
//! - [`shapes`]: spawn offsets, rotation matrices and wall-kick tables
//! - [`board`]: sparse rows with line identity, collision queries and line clearing
//! - [`piece`]: active piece state machine (move, rotate with kicks, drop, lock)
//! - [`spawner`]: seeded uniform piece draws with current/next lookahead
//! - [`difficulty`]: difficulty level and the gravity countdown
//! - [`rules`]: score table, lose/win policies and best-score ordering
//! - [`config`]: construction-time configuration and validation
//! - [`game`]: the aggregate driving all of the above and queuing events
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameConfig};
//! use blockfall_types::{GameEvent, Intent};
//!
//! let mut game = Game::new(GameConfig::endless(12345)).unwrap();
//! game.start();
//!
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::Rotate);
//! assert!(game.apply_intent(Intent::HardDrop));
//!
//! let events: Vec<GameEvent> = game.drain_events().collect();
//! assert!(events
//!     .iter()
//!     .any(|event| matches!(event, GameEvent::PieceLocked { .. })));
//! ```
//!
//! # Timing
//!
//! Gravity is a countdown of `1 / difficulty` seconds, re-armed after every
//! step down. Call [`Game::tick`] every frame with the elapsed time and
//! [`Game::recompute_ghost`] before rendering.
//!
//! [`Intent`]: blockfall_types::Intent
//! [`GameEvent`]: blockfall_types::GameEvent

pub mod board;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod piece;
pub mod rules;
pub mod shapes;
pub mod spawner;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows, Line};
pub use config::{DifficultyConfig, GameConfig, LosePolicy, PresetRow, WinPolicy};
pub use difficulty::{Difficulty, GravityTimer};
pub use error::{BoardError, ConfigError};
pub use game::Game;
pub use piece::{ActivePiece, Ghost, PieceState};
pub use rules::{line_clear_score, GameRules, LoseCondition, RulesStatus, ScoreOrder, WinCondition};
pub use shapes::Spin;
pub use spawner::Spawner;
