use crate::coord::Coord;

use super::types::HALF_CELL;

/// Offsets of vertex ids 1-8 inside the unit cell (index 0 is unused).
///
/// 1-4 are the corners (1,0) (1,1) (0,1) (0,0); 5-8 the midpoints of the
/// edges 4-1, 1-2, 2-3 and 3-4.
pub const VERTEX_OFFSETS: [Coord; 9] = [
    Coord::new(0.0, 0.0),
    Coord::new(1.0, 0.0),
    Coord::new(1.0, 1.0),
    Coord::new(0.0, 1.0),
    Coord::new(0.0, 0.0),
    Coord::new(0.5, 0.0),
    Coord::new(1.0, 0.5),
    Coord::new(0.5, 1.0),
    Coord::new(0.0, 0.5),
];

/// Mesh-space position of vertex `id` in the marching cell at `(x, y)`.
#[inline]
pub fn vertex_position(id: u8, x: isize, y: isize) -> Coord {
    debug_assert!((1..=8).contains(&id), "vertex id {id} out of range");
    let origin = Coord::new(x as f32 + HALF_CELL, y as f32 + HALF_CELL);
    VERTEX_OFFSETS[usize::from(id)] + origin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoints_lie_between_corners() {
        let pairs = [(5, 4, 1), (6, 1, 2), (7, 2, 3), (8, 3, 4)];
        for (mid, a, b) in pairs {
            let (a, b) = (VERTEX_OFFSETS[a], VERTEX_OFFSETS[b]);
            assert_eq!(VERTEX_OFFSETS[mid], (a + b) * 0.5, "midpoint {mid}");
        }
    }

    #[test]
    fn test_margin_cell_origin() {
        // Corner 4 of cell (-1, -1) sits half a cell outside the grid.
        assert_eq!(vertex_position(4, -1, -1), Coord::new(-0.5, -0.5));
        assert_eq!(vertex_position(2, -1, -1), Coord::new(0.5, 0.5));
        assert_eq!(vertex_position(6, 3, 2), Coord::new(4.5, 3.0));
    }
}
