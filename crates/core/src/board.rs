//! Board module - sparse grid of committed lines
//!
//! The board only stores rows that hold at least one block. Each stored row
//! ("line") carries a stable [`LineId`], so callers can follow a particular
//! row while gravity shifts it down after clears beneath it.
//!
//! Coordinates: `(col, row)` where col ranges `0..columns` (left to right) and
//! row grows downward with `rows - 1` as the floor. There is no ceiling; a
//! piece may hang above row 0.

use std::collections::BTreeMap;

use crate::error::BoardError;
use crate::types::{Block, Cell, LineId};

/// One stored row: its identity and occupants keyed by column
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    blocks: BTreeMap<i32, Block>,
}

impl Line {
    fn new(id: LineId) -> Self {
        Self {
            id,
            blocks: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, col: i32) -> Option<Block> {
        self.blocks.get(&col).copied()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (i32, Block)> + '_ {
        self.blocks.iter().map(|(&col, &block)| (col, block))
    }
}

/// Result of [`Board::clear_full_rows`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedRows {
    /// Row keys before the clear, bottom first
    pub rows: Vec<i32>,
    /// Identities of the removed lines, same order as `rows`
    pub ids: Vec<LineId>,
}

impl ClearedRows {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The game board - lines keyed by row
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: i32,
    rows: i32,
    lines: BTreeMap<i32, Line>,
    next_line_id: u32,
    /// Total committed blocks
    len: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            lines: BTreeMap::new(),
            next_line_id: 0,
            len: 0,
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of committed blocks
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if a cell is inside the side walls and above the floor
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.columns && cell.row < self.rows
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.lines
            .get(&cell.row)
            .is_some_and(|line| line.blocks.contains_key(&cell.col))
    }

    /// Check if a cell is in bounds and empty
    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_occupied(cell)
    }

    /// Collision test: every cell in bounds and none committed
    pub fn fits(&self, cells: &[Cell]) -> bool {
        cells.iter().all(|&cell| self.is_free(cell))
    }

    pub fn block_at(&self, cell: Cell) -> Option<Block> {
        self.lines.get(&cell.row).and_then(|line| line.block(cell.col))
    }

    pub fn line(&self, row: i32) -> Option<&Line> {
        self.lines.get(&row)
    }

    /// Stored lines, top first
    pub fn lines(&self) -> impl Iterator<Item = (i32, &Line)> + '_ {
        self.lines.iter().map(|(&row, line)| (row, line))
    }

    /// Check if a line exists at `row`
    pub fn has_row_at(&self, row: i32) -> bool {
        self.lines.contains_key(&row)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i32) -> bool {
        self.lines
            .get(&row)
            .is_some_and(|line| line.len() as i32 == self.columns)
    }

    /// Commit cells into their lines, creating lines as needed
    ///
    /// All cells are checked before any is inserted; on error the board is
    /// unchanged.
    pub fn commit(&mut self, cells: &[Cell], block: Block) -> Result<(), BoardError> {
        for (i, &cell) in cells.iter().enumerate() {
            if self.is_occupied(cell) {
                return Err(BoardError::Occupied(cell));
            }
            if cells[..i].contains(&cell) {
                return Err(BoardError::Duplicate(cell));
            }
        }

        for &cell in cells {
            let next_id = &mut self.next_line_id;
            let line = self.lines.entry(cell.row).or_insert_with(|| {
                let id = LineId(*next_id);
                *next_id += 1;
                Line::new(id)
            });
            line.blocks.insert(cell.col, block);
        }
        self.len += cells.len();
        Ok(())
    }

    /// Clear all full rows and shift the remaining rows down
    ///
    /// Full rows are found in one pass before anything moves. Every remaining
    /// row drops by the number of cleared rows strictly below it.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let full: Vec<i32> = self
            .lines
            .iter()
            .rev()
            .filter(|(_, line)| line.len() as i32 == self.columns)
            .map(|(&row, _)| row)
            .collect();

        if full.is_empty() {
            return ClearedRows::default();
        }

        let mut cleared = ClearedRows::default();
        let old = std::mem::take(&mut self.lines);

        // Bottom to top so cleared rows come out bottom first.
        for (row, line) in old.into_iter().rev() {
            if full.contains(&row) {
                self.len -= line.len();
                cleared.rows.push(row);
                cleared.ids.push(line.id);
                continue;
            }
            let shift = full.iter().filter(|&&cleared_row| cleared_row > row).count() as i32;
            self.lines.insert(row + shift, line);
        }

        cleared
    }

    /// Row currently holding the line with `id`
    pub fn row_of(&self, id: LineId) -> Option<i32> {
        self.lines
            .iter()
            .find(|(_, line)| line.id == id)
            .map(|(&row, _)| row)
    }

    /// Every committed cell, top row first
    pub fn all_committed_cells(&self) -> Vec<Cell> {
        self.iter().map(|(cell, _)| cell).collect()
    }

    /// Every committed cell with its block, top row first
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Block)> + '_ {
        self.lines.iter().flat_map(|(&row, line)| {
            line.blocks
                .iter()
                .map(move |(&col, &block)| (Cell::new(col, row), block))
        })
    }
}
