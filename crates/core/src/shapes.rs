//! Shapes module - tetromino cell offsets, rotation matrices and wall kicks
//!
//! Offsets are `(dx, dy)` in cell units relative to the piece pivot, with `dy`
//! growing downward like board rows. Rotation is done by multiplying every
//! offset with a 2x2 matrix rather than by looking up per-orientation shapes.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece pivot
pub type Offset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [Offset; 4];

/// Wall kick data: 8 rotation transitions × 5 candidate translations
pub type KickTable = [[Offset; 5]; 8];

/// Row-major 2x2 rotation matrix
pub type RotationMatrix = [[i32; 2]; 2];

/// Number of rotation states
pub const ROTATION_STATES: u8 = 4;

/// Clockwise rotation: x' = -y, y' = x
pub const CLOCKWISE: RotationMatrix = [[0, -1], [1, 0]];

/// Counter-clockwise rotation, the inverse of [`CLOCKWISE`]: x' = y, y' = -x
pub const COUNTER_CLOCKWISE: RotationMatrix = [[0, 1], [-1, 0]];

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// Signed direction, +1 for clockwise
    pub fn sign(self) -> i32 {
        match self {
            Spin::Clockwise => 1,
            Spin::CounterClockwise => -1,
        }
    }

    pub fn matrix(self) -> &'static RotationMatrix {
        match self {
            Spin::Clockwise => &CLOCKWISE,
            Spin::CounterClockwise => &COUNTER_CLOCKWISE,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// Get the spawn shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// Multiply an offset by a rotation matrix
#[inline]
pub fn rotate_offset((x, y): Offset, m: &RotationMatrix) -> Offset {
    (m[0][0] * x + m[0][1] * y, m[1][0] * x + m[1][1] * y)
}

/// Rotate all offsets of a shape in place
pub fn rotate_shape(shape: &mut PieceShape, spin: Spin) {
    let m = spin.matrix();
    for offset in shape.iter_mut() {
        *offset = rotate_offset(*offset, m);
    }
}

/// Get kick table for a piece kind; O has none
pub fn kick_table(kind: PieceKind) -> Option<&'static KickTable> {
    match kind {
        PieceKind::O => None,
        PieceKind::I => Some(&I_KICKS),
        _ => Some(&OTHER_KICKS),
    }
}

/// Kick row for a rotation that lands on `target_rotation`
///
/// `wrap(target * 2 - (spin < 0 ? 1 : 0), len)`, with negative remainders
/// wrapped into `[0, len)`.
pub fn kick_row(target_rotation: u8, spin: Spin, len: usize) -> usize {
    let mut index = i32::from(target_rotation) * 2;
    if spin.sign() < 0 {
        index -= 1;
    }
    index.rem_euclid(len as i32) as usize
}

/// I piece kick table
const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Kick table shared by J, L, S, T, Z
const OTHER_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];
