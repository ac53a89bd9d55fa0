//! Cave generation pipeline: fill, smooth, navigate history, triangulate.
//!
//! `CaveGenerator` owns the current grid, its history and, once a surface has
//! been requested, the mesh built from the current grid. Any later change to
//! the current grid rebuilds that surface.

use rand::Rng;

use crate::automaton;
use crate::cave_grid::CaveGrid;
use crate::cave_params::CaveParams;
use crate::debug_log::{count_duplicate_positions, debug_log, grid_to_ascii};
use crate::error::CaveResult;
use crate::history::{HistoryDirection, MapHistory};
use crate::marching_squares;
use crate::mesh_postprocess::{weld_triangles, CaveMesh, VertexAdjacency};
use crate::outline::{extract_outline, Outline};
use crate::validator::validate_surface;

/// Mesh, adjacency and outline built from one grid.
#[derive(Clone, Debug, Default)]
pub struct CaveSurface {
    pub mesh: CaveMesh,
    pub adjacency: VertexAdjacency,
    pub outline: Outline,
}

impl CaveSurface {
    pub fn build(grid: &CaveGrid) -> Self {
        let raw = marching_squares::triangulate(grid);
        let mesh = weld_triangles(&raw);
        let adjacency = VertexAdjacency::build(&mesh);
        let outline = extract_outline(&mesh, &adjacency);

        if cfg!(debug_assertions) {
            let validation = validate_surface(&mesh, &adjacency);
            for issue in &validation.issues {
                debug_log(&format!("[CaveSurface::build] {}", issue));
            }
            let duplicates = count_duplicate_positions(&mesh.vertices);
            if duplicates > 0 {
                debug_log(&format!(
                    "[CaveSurface::build] {} duplicate vertex positions",
                    duplicates
                ));
            }
            debug_log(&format!(
                "[CaveSurface::build] {} raw tris -> {} verts, {} tris, {} outline edges",
                raw.len(),
                mesh.vertex_count(),
                mesh.triangle_count(),
                outline.len()
            ));
        }

        Self {
            mesh,
            adjacency,
            outline,
        }
    }
}

pub struct CaveGenerator {
    params: CaveParams,
    grid: CaveGrid,
    history: MapHistory,
    surface: Option<CaveSurface>,
}

impl CaveGenerator {
    /// Validate `params` and generate a fresh random map.
    pub fn new<R: Rng + ?Sized>(params: CaveParams, rng: &mut R) -> CaveResult<Self> {
        params.validate()?;
        let grid = Self::fill_grid(&params, rng);
        Ok(Self {
            history: Self::empty_history(&params),
            params,
            grid,
            surface: None,
        })
    }

    fn empty_history(params: &CaveParams) -> MapHistory {
        match params.max_history {
            Some(max) => MapHistory::with_max_entries(max),
            None => MapHistory::new(),
        }
    }

    fn fill_grid<R: Rng + ?Sized>(params: &CaveParams, rng: &mut R) -> CaveGrid {
        let mut grid = CaveGrid::new(params.grid.width, params.grid.height);
        grid.generate(&params.grid, rng);
        grid
    }

    /// Replace the map with a new random one and clear the history.
    /// On invalid `params` nothing changes.
    pub fn regenerate_map<R: Rng + ?Sized>(
        &mut self,
        params: CaveParams,
        rng: &mut R,
    ) -> CaveResult<()> {
        params.validate()?;
        self.grid = Self::fill_grid(&params, rng);
        self.history = Self::empty_history(&params);
        self.params = params;
        self.surface = None;

        debug_log(&format!(
            "[regenerate_map] {}x{} at {}% fill: {} walls",
            self.grid.width(),
            self.grid.height(),
            self.params.grid.fill_percent,
            self.grid.wall_count()
        ));
        Ok(())
    }

    /// Run `iterations` smoothing passes on the current grid.
    pub fn smooth(&mut self, iterations: usize) {
        if iterations == 0 {
            return;
        }
        let grid = std::mem::replace(&mut self.grid, CaveGrid::new(0, 0));
        self.grid = automaton::smooth(
            grid,
            iterations,
            &self.params.smoothing,
            &mut self.history,
        );
        self.refresh_surface();
    }

    /// Run the configured number of smoothing passes.
    pub fn smooth_default(&mut self) {
        self.smooth(self.params.smoothing.iterations);
    }

    /// Build the surface of the current grid; later grid changes keep it current.
    pub fn triangulate(&mut self) -> &CaveSurface {
        let surface = CaveSurface::build(&self.grid);
        self.surface.insert(surface)
    }

    /// Step through the history. Empty history leaves the grid unchanged.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> &CaveGrid {
        if self.history.navigate(direction, &mut self.grid) {
            self.refresh_surface();
        }
        &self.grid
    }

    fn refresh_surface(&mut self) {
        if self.surface.is_some() {
            self.surface = Some(CaveSurface::build(&self.grid));
        }
    }

    pub fn grid(&self) -> &CaveGrid {
        &self.grid
    }

    pub fn history(&self) -> &MapHistory {
        &self.history
    }

    pub fn params(&self) -> &CaveParams {
        &self.params
    }

    /// `None` until `triangulate` has been called for the current map.
    pub fn surface(&self) -> Option<&CaveSurface> {
        self.surface.as_ref()
    }

    /// Current grid as `#`/`.` rows.
    pub fn grid_ascii(&self) -> String {
        grid_to_ascii(&self.grid)
    }
}
