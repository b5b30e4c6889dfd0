//! Game module - wires board, piece, spawner, difficulty and rules together
//!
//! Data flow per lock: the active piece's cells are committed to the board,
//! full rows are cleared, the rules score the clear and evaluate win/lose,
//! and if the game goes on the spawner hands over the next piece.
//!
//! Every notification is pushed onto an event queue that the caller drains
//! after each step. The ghost projection is not recomputed eagerly; mutating
//! operations only mark it stale and [`Game::recompute_ghost`] refreshes it
//! before the next render.

use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::board::Board;
use crate::config::{GameConfig, WinPolicy};
use crate::difficulty::{Difficulty, GravityTimer};
use crate::error::ConfigError;
use crate::piece::{ActivePiece, Ghost};
use crate::rules::{GameRules, LoseCondition, RulesStatus, WinCondition};
use crate::spawner::Spawner;
use crate::types::{Block, Cell, Direction, GameEvent, Intent, PieceKind};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    spawner: Spawner,
    rules: GameRules,
    difficulty: Difficulty,
    gravity: GravityTimer,
    spawn_cell: Cell,
    ghost: Option<Ghost>,
    ghost_stale: bool,
    events: Vec<GameEvent>,
    started: bool,
}

impl Game {
    /// Validate `config` and build a game with its preset rows in place
    ///
    /// Preset rows are only placed for a preset-clear puzzle; other win
    /// policies start from an empty board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut board = Board::new(config.columns, config.rows);
        let mut preset_lines = Vec::with_capacity(config.presets.len());
        if config.win == WinPolicy::PresetClear {
            for preset in &config.presets {
                let cells: Vec<Cell> =
                    preset.cells().collect::<BTreeSet<_>>().into_iter().collect();
                board.commit(&cells, Block::Preset)?;
                if let Some(line) = board.line(preset.board_row()) {
                    preset_lines.push(line.id());
                }
            }
        } else if !config.presets.is_empty() {
            debug!(
                "ignoring {} preset rows without a preset-clear win",
                config.presets.len()
            );
        }

        let spawner = match &config.sequence {
            Some(sequence) => Spawner::fixed(sequence)?,
            None => Spawner::new(config.seed),
        };

        let rules = GameRules::new(
            LoseCondition::new(config.lose),
            WinCondition::new(config.win, preset_lines),
            config.best_score,
        );

        Ok(Self {
            board,
            active: None,
            spawner,
            rules,
            difficulty: Difficulty::new(&config.difficulty),
            gravity: GravityTimer::new(),
            spawn_cell: config.spawn_cell(),
            ghost: None,
            ghost_stale: false,
            events: Vec::new(),
            started: false,
        })
    }

    /// Announce the preview and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.events.push(GameEvent::NextPieceChanged {
            kind: self.spawner.next(),
        });
        self.spawn(self.spawner.current());
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn score(&self) -> u32 {
        self.rules.score()
    }

    pub fn best_score(&self) -> Option<u32> {
        self.rules.best_score()
    }

    pub fn status(&self) -> RulesStatus {
        self.rules.status()
    }

    pub fn is_terminal(&self) -> bool {
        self.rules.is_terminal()
    }

    pub fn current_kind(&self) -> PieceKind {
        self.spawner.current()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.spawner.next()
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every queued event, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Last computed ghost; call [`Game::recompute_ghost`] first if stale
    pub fn ghost(&self) -> Option<&Ghost> {
        self.ghost.as_ref()
    }

    pub fn ghost_is_stale(&self) -> bool {
        self.ghost_stale
    }

    /// Post-step hook: refresh the ghost if anything invalidated it
    pub fn recompute_ghost(&mut self) -> Option<&Ghost> {
        if self.ghost_stale {
            self.ghost = self
                .active
                .as_ref()
                .and_then(|piece| piece.ghost(&self.board));
            self.ghost_stale = false;
        }
        self.ghost.as_ref()
    }

    /// Apply one discrete intent; returns `true` if the piece changed
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.rules.is_terminal() {
            warn!("ignoring {} after the game ended", intent.as_str());
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match intent {
            Intent::MoveLeft | Intent::MoveRight => {
                let direction = if intent == Intent::MoveLeft {
                    Direction::Left
                } else {
                    Direction::Right
                };
                let moved = piece.try_move(direction, &self.board);
                if moved {
                    self.ghost_stale = true;
                }
                moved
            }
            Intent::SoftDrop => {
                let moved = piece.try_move(Direction::Down, &self.board);
                if moved {
                    self.gravity.start(self.difficulty.interval());
                }
                moved
            }
            Intent::HardDrop => {
                piece.drop(&self.board);
                self.lock_active();
                true
            }
            Intent::Rotate => {
                let rotated = piece.rotate(&self.board);
                if rotated {
                    self.ghost_stale = true;
                }
                rotated
            }
        }
    }

    /// Advance simulated time; returns `true` if gravity moved or locked
    /// the piece
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.started || self.rules.is_terminal() {
            return false;
        }
        self.difficulty.advance(elapsed);

        if !self.gravity.tick(elapsed) {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if piece.try_move(Direction::Down, &self.board) {
            trace!("gravity moved piece to {:?}", piece.position());
            self.gravity.start(self.difficulty.interval());
        } else {
            trace!("gravity found piece grounded, locking");
            self.lock_active();
        }
        true
    }

    fn spawn(&mut self, kind: PieceKind) {
        let piece = ActivePiece::new(kind, self.spawn_cell);
        self.ghost = None;
        self.ghost_stale = true;

        if !piece.fits_at(&self.board, self.spawn_cell) {
            debug!("spawn of {} blocked at {:?}", kind.as_str(), self.spawn_cell);
            self.active = None;
            self.rules.on_spawn_blocked(&mut self.events);
            return;
        }

        debug!("spawned {} at {:?}", kind.as_str(), self.spawn_cell);
        self.active = Some(piece);
        self.gravity.start(self.difficulty.interval());
    }

    fn lock_active(&mut self) {
        let Some(mut piece) = self.active.take() else {
            return;
        };
        self.gravity.stop();
        let Some(cells) = piece.lock() else {
            return;
        };

        let kind = piece.kind();
        if let Err(err) = self.board.commit(&cells, Block::Piece(kind)) {
            panic!("locked piece overlaps the board: {err}");
        }
        debug!("locked {} at {:?}", kind.as_str(), cells);
        self.events.push(GameEvent::PieceLocked { kind, cells });
        self.ghost = None;
        self.ghost_stale = false;

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.rows);
            self.events.push(GameEvent::LinesCleared {
                rows: cleared.rows.clone(),
                count: cleared.count() as u32,
            });
            self.rules
                .on_lines_cleared(&cleared, self.difficulty.level(), &mut self.events);
        }

        self.rules.on_piece_locked(&self.board, &mut self.events);

        if !self.rules.is_terminal() {
            let (current, next) = self.spawner.advance();
            self.events.push(GameEvent::NextPieceChanged { kind: next });
            self.spawn(current);
        }
    }
}
