use crate::cave_grid::CaveGrid;

use super::types::CellConfiguration;

/// Corner offsets from the cell origin, in configuration bit order.
const CORNERS: [(isize, isize); 4] = [(1, 0), (1, 1), (0, 1), (0, 0)];

/// Wall flags for the four corners of the marching cell at `(x, y)`.
/// Corners outside the grid are open, so the contour closes around the map.
#[inline]
pub fn sample_corners(grid: &CaveGrid, x: isize, y: isize) -> [bool; 4] {
    CORNERS.map(|(dx, dy)| grid.get_signed(x + dx, y + dy).unwrap_or(false))
}

#[inline]
pub fn cell_configuration(grid: &CaveGrid, x: isize, y: isize) -> CellConfiguration {
    CellConfiguration::from_corners(sample_corners(grid, x, y))
}
