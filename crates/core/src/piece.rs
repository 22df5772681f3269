//! Piece module - the live falling piece
//!
//! A piece is a family, a colour, an anchor and a rotation index. Occupied
//! cells are always derived from those on demand; they are never stored.

use crate::pieces::{get_shape, symmetry};
use crate::rng::SimpleRng;
use crate::types::{Color, Family};

/// Absolute board coordinates of a piece's 4 cells
pub type PieceCells = [(i8, i8); 4];

/// Anchor and rotation index of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i8,
    pub y: i8,
    /// Rotation index, always in `0..symmetry`
    pub rotation: u8,
}

/// A piece instance (current or next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    family: Family,
    color: Color,
    placement: Placement,
}

impl Piece {
    /// Create a piece anchored at (0, 0).
    pub fn new(family: Family, color: Color, rotation: u8) -> Self {
        Self {
            family,
            color,
            placement: Placement {
                x: 0,
                y: 0,
                rotation: rotation % symmetry(family),
            },
        }
    }

    /// Uniformly random family, initial rotation and colour.
    pub fn random(rng: &mut SimpleRng) -> Self {
        let family = rng.choose(&Family::ALL);
        let rotation = rng.next_range(symmetry(family) as u32) as u8;
        let color = rng.choose(&Color::ALL);
        Self::new(family, color, rotation)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn rotation(&self) -> u8 {
        self.placement.rotation
    }

    pub fn symmetry(&self) -> u8 {
        symmetry(self.family)
    }

    /// Cells for the piece's current placement.
    pub fn occupied_cells(&self) -> PieceCells {
        self.occupied_cells_at(self.placement)
    }

    /// Cells the piece would occupy at `placement`, without moving it.
    pub fn occupied_cells_at(&self, placement: Placement) -> PieceCells {
        let shape = get_shape(self.family, placement.rotation);
        shape.map(|(dx, dy)| (placement.x + dx, placement.y + dy))
    }

    /// Placement shifted by `(dx, dy)` with the rotation advanced by `dz`.
    ///
    /// The rotation index wraps modulo the symmetry count. Pure: the piece is
    /// not modified.
    pub fn candidate(&self, dx: i8, dy: i8, dz: i8) -> Placement {
        let sym = self.symmetry() as i8;
        let rotation = (self.placement.rotation as i8 + dz).rem_euclid(sym) as u8;
        Placement {
            x: self.placement.x + dx,
            y: self.placement.y + dy,
            rotation,
        }
    }

    /// Store a placement. Callers validate it against the board first.
    pub fn commit(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Move the anchor, keeping the rotation.
    pub fn set_anchor(&mut self, x: i8, y: i8) {
        self.placement.x = x;
        self.placement.y = y;
    }
}
