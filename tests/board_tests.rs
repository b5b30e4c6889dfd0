//! Board tests - commits, full rows and gravity shift

use blockfall::core::{Board, BoardError};
use blockfall::types::{Block, Cell, PieceKind};

const COLUMNS: i32 = 10;
const ROWS: i32 = 20;

fn fill_row(board: &mut Board, row: i32) {
    let cells: Vec<Cell> = (0..COLUMNS).map(|col| Cell::new(col, row)).collect();
    board.commit(&cells, Block::Piece(PieceKind::I)).unwrap();
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(COLUMNS, ROWS);
    assert_eq!(board.columns(), COLUMNS);
    assert_eq!(board.rows(), ROWS);
    assert!(board.is_empty());
    assert!(board.all_committed_cells().is_empty());

    for row in 0..ROWS {
        for col in 0..COLUMNS {
            assert!(board.is_free(Cell::new(col, row)), "({col}, {row}) should be free");
        }
    }
}

#[test]
fn test_board_fits_checks_walls_floor_and_blocks() {
    let mut board = Board::new(COLUMNS, ROWS);
    board.commit(&[Cell::new(5, 10)], Block::Preset).unwrap();

    assert!(board.fits(&[Cell::new(0, 0), Cell::new(9, 19)]));
    assert!(!board.fits(&[Cell::new(-1, 0)]));
    assert!(!board.fits(&[Cell::new(10, 0)]));
    assert!(!board.fits(&[Cell::new(0, 20)]));
    assert!(!board.fits(&[Cell::new(4, 10), Cell::new(5, 10)]));
    // Above the visible area is open.
    assert!(board.fits(&[Cell::new(3, -2)]));
}

#[test]
fn test_board_commit_onto_occupied_fails() {
    let mut board = Board::new(COLUMNS, ROWS);
    board.commit(&[Cell::new(2, 19)], Block::Preset).unwrap();
    assert_eq!(
        board.commit(&[Cell::new(2, 19)], Block::Piece(PieceKind::T)),
        Err(BoardError::Occupied(Cell::new(2, 19)))
    );
    assert_eq!(board.len(), 1);
}

#[test]
fn test_row_full() {
    let mut board = Board::new(COLUMNS, ROWS);
    let partial: Vec<Cell> = (0..COLUMNS - 1).map(|col| Cell::new(col, 19)).collect();
    board.commit(&partial, Block::Preset).unwrap();
    assert!(!board.is_row_full(19));

    board.commit(&[Cell::new(COLUMNS - 1, 19)], Block::Preset).unwrap();
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::new(COLUMNS, ROWS);
    fill_row(&mut board, 19);
    board.commit(&[Cell::new(3, 18), Cell::new(7, 15)], Block::Preset).unwrap();
    let before = board.all_committed_cells().len();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.rows, vec![19]);
    assert_eq!(cleared.count(), 1);
    assert_eq!(board.all_committed_cells().len(), before - COLUMNS as usize);

    assert!(board.is_occupied(Cell::new(3, 19)));
    assert!(board.is_occupied(Cell::new(7, 16)));
    assert!(!board.is_occupied(Cell::new(3, 18)));
    assert!(!board.is_occupied(Cell::new(7, 15)));
}

#[test]
fn test_clear_rows_below_only_do_not_shift() {
    let mut board = Board::new(COLUMNS, ROWS);
    fill_row(&mut board, 10);
    board.commit(&[Cell::new(0, 15)], Block::Preset).unwrap();

    board.clear_full_rows();
    // Row 15 is below the cleared row and stays put.
    assert!(board.is_occupied(Cell::new(0, 15)));
}

#[test]
fn test_clear_non_adjacent_rows_cascades() {
    let mut board = Board::new(COLUMNS, ROWS);
    fill_row(&mut board, 19);
    fill_row(&mut board, 17);
    board.commit(&[Cell::new(1, 18)], Block::Preset).unwrap();
    board.commit(&[Cell::new(2, 16)], Block::Preset).unwrap();
    board.commit(&[Cell::new(4, 12)], Block::Preset).unwrap();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.rows, vec![19, 17]);

    // One cleared row below 18, two below 16 and 12.
    assert!(board.is_occupied(Cell::new(1, 19)));
    assert!(board.is_occupied(Cell::new(2, 18)));
    assert!(board.is_occupied(Cell::new(4, 14)));
    assert_eq!(board.len(), 3);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new(COLUMNS, ROWS);
    for row in 16..20 {
        fill_row(&mut board, row);
    }
    board.commit(&[Cell::new(9, 15)], Block::Preset).unwrap();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.rows, vec![19, 18, 17, 16]);
    assert_eq!(board.all_committed_cells(), vec![Cell::new(9, 19)]);
}

#[test]
fn test_has_row_at_top() {
    let mut board = Board::new(COLUMNS, ROWS);
    board.commit(&[Cell::new(4, 1)], Block::Preset).unwrap();
    assert!(!board.has_row_at(0));
    board.commit(&[Cell::new(4, 0)], Block::Preset).unwrap();
    assert!(board.has_row_at(0));
}

#[test]
fn test_line_identity_survives_shift() {
    let mut board = Board::new(COLUMNS, ROWS);
    board.commit(&[Cell::new(0, 14)], Block::Preset).unwrap();
    let id = board.line(14).unwrap().id();

    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    let cleared = board.clear_full_rows();
    assert!(!cleared.ids.contains(&id));
    assert_eq!(board.row_of(id), Some(16));
}

#[test]
fn test_block_provenance_kept() {
    let mut board = Board::new(COLUMNS, ROWS);
    board.commit(&[Cell::new(0, 19)], Block::Preset).unwrap();
    board
        .commit(&[Cell::new(1, 19)], Block::Piece(PieceKind::Z))
        .unwrap();

    let blocks: Vec<(Cell, Block)> = board.iter().collect();
    assert_eq!(
        blocks,
        vec![
            (Cell::new(0, 19), Block::Preset),
            (Cell::new(1, 19), Block::Piece(PieceKind::Z)),
        ]
    );
}
