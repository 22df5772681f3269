//! Pieces module - shape table for the seven families
//!
//! Every family owns a fixed list of rotation variants (1, 2 or 4 of them).
//! A variant is 4 cell offsets `(x, y)` inside a 4x4 box, x = column and
//! y = row, both in `0..=3`. Rotating a piece means stepping to the next
//! variant, wrapping at the family's symmetry count. There are no wall kicks.

use crate::types::Family;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// One rotation variant - 4 cell offsets from the piece anchor
pub type Variant = [CellOffset; 4];

const SQUARE: [Variant; 1] = [[(2, 1), (1, 1), (2, 0), (1, 0)]];

const LINE: [Variant; 2] = [
    // vertical
    [(1, 3), (1, 2), (1, 1), (1, 0)],
    // horizontal
    [(3, 1), (2, 1), (1, 1), (0, 1)],
];

const S: [Variant; 2] = [
    [(2, 0), (1, 0), (1, 1), (0, 1)],
    [(1, 2), (1, 1), (0, 1), (0, 0)],
];

const Z: [Variant; 2] = [
    [(2, 1), (1, 1), (1, 0), (0, 0)],
    [(0, 2), (0, 1), (1, 1), (1, 0)],
];

const L: [Variant; 4] = [
    [(2, 2), (1, 2), (1, 1), (1, 0)],
    [(2, 1), (1, 1), (0, 1), (0, 2)],
    [(1, 2), (1, 1), (1, 0), (0, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
];

const J: [Variant; 4] = [
    [(0, 2), (1, 2), (1, 1), (1, 0)],
    [(2, 1), (1, 1), (0, 1), (0, 0)],
    [(1, 2), (1, 1), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];

const T: [Variant; 4] = [
    [(2, 1), (1, 1), (0, 1), (1, 0)],
    [(2, 1), (1, 2), (1, 1), (1, 0)],
    [(1, 2), (2, 1), (1, 1), (0, 1)],
    [(1, 2), (1, 1), (1, 0), (0, 1)],
];

/// All rotation variants of a family, in rotation order.
pub fn variants(family: Family) -> &'static [Variant] {
    match family {
        Family::Square => &SQUARE,
        Family::Line => &LINE,
        Family::S => &S,
        Family::Z => &Z,
        Family::L => &L,
        Family::J => &J,
        Family::T => &T,
    }
}

/// Number of rotationally distinct variants (1, 2 or 4).
pub fn symmetry(family: Family) -> u8 {
    variants(family).len() as u8
}

/// Get the cell offsets for a family and rotation index.
///
/// The index wraps modulo the family's symmetry count.
pub fn get_shape(family: Family, rotation: u8) -> Variant {
    let table = variants(family);
    table[rotation as usize % table.len()]
}
