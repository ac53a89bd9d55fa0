//! Debug logging for cave generation.
//!
//! Writes to `debug_cave.log` in the working directory once `init_debug_log()`
//! has been called; before that, messages are dropped.
//! The log file is recreated on each `init_debug_log()` call.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::sync::Mutex;

use crate::cave_grid::CaveGrid;
use crate::coord::Coord;

lazy_static::lazy_static! {
    static ref DEBUG_LOG: Mutex<Option<File>> = Mutex::new(None);
}

/// Log a debug message to the cave debug log file
pub fn debug_log(msg: &str) {
    if let Ok(mut guard) = DEBUG_LOG.lock() {
        if let Some(ref mut file) = *guard {
            let _ = writeln!(file, "{}", msg);
            let _ = file.flush();
        }
    }
}

/// Initialize the debug log file (overwrites any existing log)
pub fn init_debug_log() {
    if let Ok(mut guard) = DEBUG_LOG.lock() {
        *guard = File::create("debug_cave.log").ok();
        if let Some(ref mut file) = *guard {
            let _ = writeln!(file, "=== CAVE MARCHING DEBUG LOG ===");
            let _ = writeln!(file, "Timestamp: {:?}", std::time::SystemTime::now());
            let _ = writeln!(file);
        }
    }
}

/// Render a grid as rows of `#` (wall) and `.` (open)
pub fn grid_to_ascii(grid: &CaveGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.cells().chunks(grid.width().max(1)) {
        out.extend(row.iter().map(|&wall| if wall { '#' } else { '.' }));
        out.push('\n');
    }
    out
}

/// Count vertex positions shared by more than one entry (bit-exact).
/// A welded mesh should report zero.
pub fn count_duplicate_positions(vertices: &[Coord]) -> usize {
    let mut position_counts: HashMap<[u32; 2], usize> = HashMap::new();
    for v in vertices {
        *position_counts.entry(v.to_bits()).or_insert(0) += 1;
    }
    position_counts.values().filter(|&&count| count > 1).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_ascii_round_trips_fixture() {
        let rows = ["#..#", ".##.", "...."];
        let grid = CaveGrid::from_rows(&rows);
        assert_eq!(grid_to_ascii(&grid), "#..#\n.##.\n....\n");
    }

    #[test]
    fn test_count_duplicate_positions() {
        let vertices = [
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(-0.0, 0.0),
            Coord::new(1.0, 0.5),
        ];
        assert_eq!(count_duplicate_positions(&vertices), 1);
        assert_eq!(count_duplicate_positions(&vertices[1..]), 0);
    }

    #[test]
    fn test_debug_log_without_init_is_silent() {
        debug_log("dropped");
    }
}
