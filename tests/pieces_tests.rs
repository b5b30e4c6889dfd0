//! Piece tests - movement, rotation with wall kicks, drop and lock

use blockfall::core::shapes::{kick_table, spawn_shape};
use blockfall::core::{ActivePiece, Board, PieceState, Spin};
use blockfall::types::{Block, Cell, Direction, PieceKind};

fn empty_board() -> Board {
    Board::new(10, 20)
}

#[test]
fn test_spawn_shapes_have_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::new(kind, Cell::new(4, 0));
        let mut cells = piece.cells().to_vec();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 4, "{kind:?} has overlapping cells");
        assert!(cells.iter().all(|cell| cell.row == 0 || cell.row == 1));
    }
}

#[test]
fn test_rotate_four_times_is_identity() {
    let board = empty_board();
    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::new(kind, Cell::new(4, 10));
        let original = piece.clone();
        for _ in 0..4 {
            piece.rotate(&board);
        }
        assert_eq!(piece.offsets(), original.offsets(), "{kind:?}");
        assert_eq!(piece.rotation(), 0, "{kind:?}");
        assert_eq!(piece.position(), original.position(), "{kind:?}");
    }
}

#[test]
fn test_o_never_rotates() {
    let board = empty_board();
    let mut piece = ActivePiece::new(PieceKind::O, Cell::new(4, 10));
    for _ in 0..3 {
        assert!(!piece.rotate(&board));
        assert_eq!(piece.offsets(), &spawn_shape(PieceKind::O));
        assert_eq!(piece.rotation(), 0);
    }
    assert!(kick_table(PieceKind::O).is_none());
}

#[test]
fn test_kick_tables_have_five_candidates_per_row() {
    for kind in [PieceKind::I, PieceKind::T] {
        let table = kick_table(kind).unwrap();
        assert_eq!(table.len(), 8);
        for row in table.iter() {
            assert_eq!(row.len(), 5);
            assert_eq!(row[0], (0, 0));
        }
    }
}

#[test]
fn test_i_rotation_uses_third_kick_candidate() {
    // Vertical I candidates: pivot column 1, then column 0, then column 3.
    let mut board = empty_board();
    board
        .commit(&[Cell::new(1, 16), Cell::new(0, 16)], Block::Preset)
        .unwrap();

    let mut piece = ActivePiece::new(PieceKind::I, Cell::new(1, 17));
    assert!(piece.rotate(&board));
    assert_eq!(piece.rotation(), 1);
    assert_eq!(piece.position(), Cell::new(3, 17));
    assert_eq!(
        piece.cells(),
        [
            Cell::new(3, 16),
            Cell::new(3, 17),
            Cell::new(3, 18),
            Cell::new(3, 19)
        ]
    );
}

#[test]
fn test_l_rotation_uses_third_kick_candidate() {
    let mut board = empty_board();
    board
        .commit(&[Cell::new(0, 19), Cell::new(1, 19)], Block::Preset)
        .unwrap();

    let mut piece = ActivePiece::new(PieceKind::L, Cell::new(1, 18));
    assert!(piece.rotate(&board));
    // Third candidate of the shared table for rotation 0 -> 1 is (1, -1).
    assert_eq!(piece.position(), Cell::new(2, 17));
}

#[test]
fn test_first_fitting_candidate_wins() {
    let board = empty_board();
    let mut piece = ActivePiece::new(PieceKind::T, Cell::new(4, 10));
    assert!(piece.rotate(&board));
    assert_eq!(piece.position(), Cell::new(4, 10));
}

#[test]
fn test_rotation_against_left_wall_kicks_right() {
    let board = empty_board();
    // Vertical I hugging the left wall.
    let mut piece = ActivePiece::new(PieceKind::I, Cell::new(1, 10));
    assert!(piece.rotate(&board));
    assert!(piece.cells().iter().all(|cell| cell.col == 1));

    while piece.try_move(Direction::Left, &board) {}
    assert_eq!(piece.position().col, 0);
    assert!(piece.rotate(&board));
    assert!(piece.cells().iter().all(|cell| cell.col >= 0 && cell.col < 10));
}

#[test]
fn test_counter_clockwise_reverts_clockwise() {
    let board = empty_board();
    for kind in [PieceKind::J, PieceKind::S, PieceKind::Z] {
        let mut piece = ActivePiece::new(kind, Cell::new(4, 10));
        let original = piece.clone();
        assert!(piece.rotate_toward(Spin::Clockwise, &board));
        assert!(piece.rotate_toward(Spin::CounterClockwise, &board));
        assert_eq!(piece, original);
    }
}

#[test]
fn test_drop_terminates_and_grounds() {
    let mut board = empty_board();
    board.commit(&[Cell::new(4, 12)], Block::Preset).unwrap();

    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::new(kind, Cell::new(4, 0));
        piece.drop(&board);
        assert!(!piece.try_move(Direction::Down, &board), "{kind:?}");
        assert_eq!(piece.state(), PieceState::Falling);
    }
}

#[test]
fn test_lock_is_one_shot() {
    let board = empty_board();
    let mut piece = ActivePiece::new(PieceKind::S, Cell::new(4, 0));
    piece.drop(&board);
    let cells = piece.lock().unwrap();
    assert!(cells.iter().all(|cell| cell.row >= 18));
    assert_eq!(piece.state(), PieceState::Locked);
    assert_eq!(piece.lock(), None);
    assert!(!piece.try_move(Direction::Right, &board));
}

#[test]
fn test_ghost_matches_drop() {
    let mut board = empty_board();
    board.commit(&[Cell::new(5, 15)], Block::Preset).unwrap();

    let piece = ActivePiece::new(PieceKind::T, Cell::new(4, 0));
    let ghost = piece.ghost(&board).unwrap();

    let mut dropped = piece.clone();
    dropped.drop(&board);
    assert_eq!(ghost.position, dropped.position());
    assert_eq!(ghost.cells, dropped.cells());
}
