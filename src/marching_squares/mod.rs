// Marching squares contouring of wall cells into raw triangles
mod cases;
mod cell_context;
mod types;
mod vertex;

pub use cases::*;
pub use cell_context::*;
pub use types::*;
pub use vertex::*;

use rayon::prelude::*;

use crate::cave_grid::CaveGrid;

/// Generate geometry for a single marching cell.
pub fn generate_cell(grid: &CaveGrid, x: isize, y: isize, out: &mut Vec<RawTriangle>) {
    let config = cell_configuration(grid, x, y);
    for [a, b, c] in triangles_for(config) {
        out.push([
            vertex_position(a, x, y),
            vertex_position(b, x, y),
            vertex_position(c, x, y),
        ]);
    }
}

/// Triangulate every wall region of `grid`.
///
/// Cells span `[-1, width-1] x [-1, height-1]` so the one-cell open margin
/// closes the contour at the map border. Output order is x-outer, y-inner;
/// columns run in parallel and are concatenated in order.
pub fn triangulate(grid: &CaveGrid) -> Vec<RawTriangle> {
    let width = grid.width() as isize;
    let height = grid.height() as isize;

    let columns: Vec<Vec<RawTriangle>> = (-1..width)
        .into_par_iter()
        .map(|x| {
            let mut column = Vec::new();
            for y in -1..height {
                generate_cell(grid, x, y, &mut column);
            }
            column
        })
        .collect();

    columns.concat()
}
