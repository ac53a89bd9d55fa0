use godot::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cave_generator::CaveGenerator;
use crate::cave_params::{CaveParams, ExportedSettings};
use crate::coord::Coord;
use crate::debug_log::{debug_log, init_debug_log};
use crate::error::CaveResult;
use crate::history::HistoryDirection;

/// Cave map node - generates a cellular-automaton cave and its marching-squares mesh.
/// Drawing is left to scripts: read `get_vertices()`, `get_triangle_indices()` and
/// `get_outline_indices()` from `_draw()`; every change queues a redraw.
#[derive(GodotClass)]
#[class(base=Node2D, init, tool)]
pub struct CaveMap {
    base: Base<Node2D>,

    /// Map size in cells
    #[export]
    #[init(val = Vector2i::new(64, 64))]
    map_size: Vector2i,

    /// Chance (0-100) that a cell starts as wall
    #[export]
    #[init(val = 35)]
    fill_percent: i32,

    /// Seal the first interior ring before the random fill
    #[export]
    #[init(val = true)]
    fill_edges: bool,

    /// Neighbour wall count above which a cell becomes wall
    #[export]
    #[init(val = 4)]
    neighbour_threshold: i32,

    /// Neighbour sampling half-extent per axis
    #[export]
    #[init(val = Vector2i::new(1, 1))]
    neighbour_radius: Vector2i,

    /// Cells exactly at the threshold become open instead of wall
    #[export]
    #[init(val = false)]
    tie_break_open: bool,

    /// Smoothing passes run by `generate()`
    #[export]
    #[init(val = 12)]
    smoothing_iterations: i32,

    /// Most grids kept for history stepping; 0 keeps every pass
    #[export]
    #[init(val = 0)]
    max_history: i32,

    /// RNG seed; 0 draws a fresh seed from the OS
    #[export]
    #[init(val = 0)]
    seed: i64,

    /// Size of one cell in canvas units
    #[export]
    #[init(val = Vector2::new(32.0, 32.0))]
    tile_size: Vector2,

    /// Write `debug_cave.log` in the working directory
    #[export]
    #[init(val = false)]
    debug_logging: bool,

    generator: Option<CaveGenerator>,
}

#[godot_api]
impl INode2D for CaveMap {
    fn ready(&mut self) {
        if self.debug_logging {
            init_debug_log();
            debug_log(&format!(
                "[CaveMap::ready] map_size={} fill={}% seed={}",
                self.map_size, self.fill_percent, self.seed
            ));
        }
        self.generate();
    }
}

#[godot_api]
impl CaveMap {
    /// New random map, smoothed and triangulated with the exported settings
    #[func]
    fn generate(&mut self) {
        if !self.regenerate_map() {
            return;
        }
        let iterations = self.smoothing_iterations;
        self.smooth(iterations);
        self.triangulate();
    }

    /// Fill a new random map and clear the history. Returns false on bad settings.
    #[func]
    fn regenerate_map(&mut self) -> bool {
        match self.apply_settings() {
            Ok(()) => {
                godot_print!("CaveMap regenerated: {}", self.map_size);
                debug_log(&format!("[CaveMap::regenerate_map] {}", self.map_size));
                self.notify_changed();
                true
            }
            Err(err) => {
                godot_warn!("CaveMap settings rejected: {}", err);
                debug_log(&format!("[CaveMap::regenerate_map] rejected: {}", err));
                false
            }
        }
    }

    /// Run smoothing passes on the current grid
    #[func]
    fn smooth(&mut self, iterations: i32) {
        let Some(generator) = self.generator.as_mut() else {
            godot_warn!("CaveMap.smooth called before a map was generated");
            return;
        };
        generator.smooth(usize::try_from(iterations).unwrap_or(0));
        self.notify_changed();
    }

    /// Build the mesh and outline; returns the triangle count
    #[func]
    fn triangulate(&mut self) -> i32 {
        let Some(generator) = self.generator.as_mut() else {
            return 0;
        };
        let count = generator.triangulate().mesh.triangle_count();
        self.notify_changed();
        count as i32
    }

    /// Step through recorded grids. Returns false when there is no history.
    #[func]
    fn step_history(&mut self, forward: bool) -> bool {
        let Some(generator) = self.generator.as_mut() else {
            return false;
        };
        if generator.history().is_empty() {
            return false;
        }
        let direction = if forward {
            HistoryDirection::Forward
        } else {
            HistoryDirection::Backward
        };
        generator.navigate_history(direction);
        self.notify_changed();
        true
    }

    #[func]
    fn history_length(&self) -> i32 {
        self.generator
            .as_ref()
            .map_or(0, |g| g.history().len() as i32)
    }

    /// Size of the current grid in cells
    #[func]
    fn get_map_size(&self) -> Vector2i {
        self.generator.as_ref().map_or(Vector2i::ZERO, |g| {
            Vector2i::new(g.grid().width() as i32, g.grid().height() as i32)
        })
    }

    /// Cells outside the map read as open
    #[func]
    fn is_wall(&self, x: i32, y: i32) -> bool {
        self.generator
            .as_ref()
            .and_then(|g| g.grid().get_signed(x as isize, y as isize))
            .unwrap_or(false)
    }

    /// Mesh vertices in canvas units
    #[func]
    fn get_vertices(&self) -> PackedVector2Array {
        let mut out = PackedVector2Array::new();
        if let Some(surface) = self.generator.as_ref().and_then(|g| g.surface()) {
            let scale = Coord::new(self.tile_size.x, self.tile_size.y);
            for v in surface.mesh.scaled_vertices(scale) {
                out.push(Vector2::new(v.x, v.y));
            }
        }
        out
    }

    /// Flat triangle list, three indices per triangle
    #[func]
    fn get_triangle_indices(&self) -> PackedInt32Array {
        let mut out = PackedInt32Array::new();
        if let Some(surface) = self.generator.as_ref().and_then(|g| g.surface()) {
            for i in surface.mesh.indices() {
                out.push(i as i32);
            }
        }
        out
    }

    /// Flat outline edge list, two indices per edge
    #[func]
    fn get_outline_indices(&self, unique: bool) -> PackedInt32Array {
        let mut out = PackedInt32Array::new();
        if let Some(surface) = self.generator.as_ref().and_then(|g| g.surface()) {
            if unique {
                for [a, b] in surface.outline.unique_edges() {
                    out.push(a as i32);
                    out.push(b as i32);
                }
            } else {
                for i in surface.outline.indices() {
                    out.push(i as i32);
                }
            }
        }
        out
    }

    fn notify_changed(&mut self) {
        self.base_mut().queue_redraw();
    }

    fn apply_settings(&mut self) -> CaveResult<()> {
        let params = CaveParams::from_exported(&self.exported_settings())?;
        let mut rng = self.build_rng();
        match self.generator {
            Some(ref mut generator) => generator.regenerate_map(params, &mut rng),
            None => {
                self.generator = Some(CaveGenerator::new(params, &mut rng)?);
                Ok(())
            }
        }
    }

    fn exported_settings(&self) -> ExportedSettings {
        ExportedSettings {
            map_size: [self.map_size.x, self.map_size.y],
            fill_edges: self.fill_edges,
            fill_percent: self.fill_percent,
            neighbour_threshold: self.neighbour_threshold,
            neighbour_radius: [self.neighbour_radius.x, self.neighbour_radius.y],
            tie_break_open: self.tie_break_open,
            smoothing_iterations: self.smoothing_iterations,
            max_history: self.max_history,
        }
    }

    fn build_rng(&self) -> StdRng {
        if self.seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(self.seed as u64)
        }
    }
}
