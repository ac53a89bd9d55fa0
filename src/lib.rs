use godot::prelude::*;

pub mod automaton;
pub mod cave_generator;
pub mod cave_grid;
mod cave_map;
pub mod cave_params;
pub mod coord;
pub mod debug_log;
pub mod error;
pub mod history;
pub mod marching_squares;
pub mod mesh_postprocess;
pub mod outline;
pub mod validator;

pub use cave_generator::{CaveGenerator, CaveSurface};
pub use cave_grid::CaveGrid;
pub use cave_params::{CaveParams, GridParams, NeighbourRadius, SmoothingParams, TieBreak};
pub use coord::Coord;
pub use error::{CaveError, CaveResult};
pub use history::{HistoryDirection, MapHistory};
pub use mesh_postprocess::{CaveMesh, VertexAdjacency};
pub use outline::Outline;

struct CaveMarchingExtension;

#[gdextension]
unsafe impl ExtensionLibrary for CaveMarchingExtension {}
