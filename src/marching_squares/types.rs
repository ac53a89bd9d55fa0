use crate::coord::Coord;

// =====================
// ===== Constants =====
// =====================

/// Cell centres sit half a cell in from the contour lattice.
pub(super) const HALF_CELL: f32 = 0.5;

// =====================
// ===== Types  ========
// =====================

/// Three mesh-space corners, before vertex welding.
pub type RawTriangle = [Coord; 3];

/// 4-bit summary of which corners of a marching cell are wall.
///
/// Bit 0 is corner 1 at `(x+1, y)`, bit 1 corner 2 at `(x+1, y+1)`,
/// bit 2 corner 3 at `(x, y+1)` and bit 3 corner 4 at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellConfiguration(pub u8); // 0-15

impl CellConfiguration {
    pub const EMPTY: CellConfiguration = CellConfiguration(0);
    pub const FULL: CellConfiguration = CellConfiguration(15);

    #[must_use]
    pub fn from_corners(corners: [bool; 4]) -> Self {
        let [c1, c2, c3, c4] = corners.map(u8::from);
        Self((c4 << 3) | (c3 << 2) | (c2 << 1) | c1)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 & 0b1111)
    }
}
