//! Cellular-automaton smoothing of cave grids.
//!
//! Every pass reads the previous grid and writes a fresh one, so rows can be
//! computed in parallel without changing the result.

use rayon::prelude::*;

use crate::cave_grid::CaveGrid;
use crate::cave_params::{NeighbourRadius, SmoothingParams};
use crate::debug_log::debug_log;
use crate::history::MapHistory;

/// Count walls in the window around `(x, y)`, excluding the centre cell.
/// Positions outside the grid count as wall, which seals the map border.
pub fn neighbour_wall_count(
    grid: &CaveGrid,
    x: usize,
    y: usize,
    radius: NeighbourRadius,
) -> u32 {
    let (cx, cy) = (x as isize, y as isize);
    let (rx, ry) = (radius.x as isize, radius.y as isize);
    let mut count = 0;
    for nx in (cx - rx)..=(cx + rx) {
        for ny in (cy - ry)..=(cy + ry) {
            if nx == cx && ny == cy {
                continue;
            }
            if grid.get_signed(nx, ny).unwrap_or(true) {
                count += 1;
            }
        }
    }
    count
}

/// One smoothing pass into a new grid.
pub fn smooth_step(grid: &CaveGrid, params: &SmoothingParams) -> CaveGrid {
    let width = grid.width();
    let mut next = CaveGrid::filled(width, grid.height(), true);
    if width == 0 {
        return next;
    }

    next.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = params.next_state(neighbour_wall_count(grid, x, y, params.radius));
            }
        });

    next
}

/// Run `iterations` passes, recording each pass's input grid in `history`.
pub fn smooth(
    grid: CaveGrid,
    iterations: usize,
    params: &SmoothingParams,
    history: &mut MapHistory,
) -> CaveGrid {
    let mut current = grid;
    for _ in 0..iterations {
        let next = smooth_step(&current, params);
        history.record(current);
        current = next;
    }

    if cfg!(debug_assertions) && iterations > 0 {
        debug_log(&format!(
            "[smooth] {} passes on {}x{}: {} walls, history {}",
            iterations,
            current.width(),
            current.height(),
            current.wall_count(),
            history.len()
        ));
    }

    current
}
