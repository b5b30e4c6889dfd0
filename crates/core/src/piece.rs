//! Active piece - the falling tetromino and its state machine
//!
//! A piece is `Falling` from spawn until [`ActivePiece::lock`], which hands its
//! cells over to the caller exactly once and leaves it `Locked`. Every
//! movement is checked against the [`Board`] before it is applied.

use crate::board::Board;
use crate::shapes::{
    kick_row, kick_table, rotate_shape, spawn_shape, PieceShape, Spin, ROTATION_STATES,
};
use crate::types::{Cell, Direction, PieceKind, PIECE_CELLS};

/// Lifecycle of an active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    Falling,
    Locked,
}

/// Landing projection of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ghost {
    pub position: Cell,
    pub cells: [Cell; PIECE_CELLS],
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    offsets: PieceShape,
    position: Cell,
    rotation: u8,
    state: PieceState,
}

impl ActivePiece {
    /// Create a new piece in spawn orientation with its pivot at `position`
    pub fn new(kind: PieceKind, position: Cell) -> Self {
        Self {
            kind,
            offsets: spawn_shape(kind),
            position,
            rotation: 0,
            state: PieceState::Falling,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Rotation index in `0..4`
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == PieceState::Locked
    }

    /// Board cells covered by the piece
    pub fn cells(&self) -> [Cell; PIECE_CELLS] {
        self.cells_at(self.position)
    }

    fn cells_at(&self, position: Cell) -> [Cell; PIECE_CELLS] {
        self.offsets.map(|offset| position.offset(offset))
    }

    /// Check if the piece fits with its pivot at `position`
    pub fn fits_at(&self, board: &Board, position: Cell) -> bool {
        board.fits(&self.cells_at(position))
    }

    /// Translate by one cell in `direction`
    pub fn try_move(&mut self, direction: Direction, board: &Board) -> bool {
        self.try_shift(direction.delta(), board)
    }

    /// Translate by an arbitrary `(dcol, drow)` if the target is legal
    pub fn try_shift(&mut self, delta: (i32, i32), board: &Board) -> bool {
        if self.is_locked() {
            return false;
        }
        let candidate = self.position.offset(delta);
        if !self.fits_at(board, candidate) {
            return false;
        }
        self.position = candidate;
        true
    }

    /// Rotate clockwise with wall kicks
    ///
    /// Returns `false` for O, for a locked piece, and when no kick candidate
    /// fits; the piece is then exactly as before.
    pub fn rotate(&mut self, board: &Board) -> bool {
        self.rotate_toward(Spin::Clockwise, board)
    }

    /// Rotate in either direction with wall kicks
    pub fn rotate_toward(&mut self, spin: Spin, board: &Board) -> bool {
        if self.is_locked() {
            return false;
        }
        let Some(kicks) = kick_table(self.kind) else {
            return false;
        };

        let original_rotation = self.rotation;
        rotate_shape(&mut self.offsets, spin);
        self.rotation =
            (i32::from(self.rotation) + spin.sign()).rem_euclid(i32::from(ROTATION_STATES)) as u8;

        let row = kick_row(self.rotation, spin, kicks.len());
        for &kick in kicks[row].iter() {
            if self.try_shift(kick, board) {
                return true;
            }
        }

        self.rotation = original_rotation;
        rotate_shape(&mut self.offsets, spin.inverse());
        false
    }

    /// Move down until blocked; returns the number of rows fallen
    ///
    /// The caller locks the piece afterwards.
    pub fn drop(&mut self, board: &Board) -> u32 {
        let mut fallen = 0;
        while self.try_move(Direction::Down, board) {
            fallen += 1;
        }
        fallen
    }

    /// Transition to `Locked`, yielding the cells to commit
    ///
    /// Only the first call yields cells.
    pub fn lock(&mut self) -> Option<[Cell; PIECE_CELLS]> {
        if self.is_locked() {
            return None;
        }
        self.state = PieceState::Locked;
        Some(self.cells())
    }

    /// Where the piece would land if dropped now
    ///
    /// `None` when it cannot move down at all.
    pub fn ghost(&self, board: &Board) -> Option<Ghost> {
        let mut landing = None;
        let mut candidate = self.position.offset(Direction::Down.delta());
        while self.fits_at(board, candidate) {
            landing = Some(candidate);
            candidate = candidate.offset(Direction::Down.delta());
        }
        landing.map(|position| Ghost {
            position,
            cells: self.cells_at(position),
        })
    }
}
