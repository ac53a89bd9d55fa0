//! Generation and smoothing parameters shared by the generator and the Godot node.
//! Defaults reproduce the classic 64x64 cave: 35% fill, sealed edges, threshold 4.

use crate::error::{CaveError, CaveResult};

pub const DEFAULT_MAP_SIZE: usize = 64;
pub const DEFAULT_FILL_PERCENT: u32 = 35;
pub const DEFAULT_NEIGHBOUR_THRESHOLD: u32 = 4;
pub const DEFAULT_SMOOTHING_ITERATIONS: usize = 12;

/// How a cell resolves when its neighbour wall count equals the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    Wall,
    Open,
}

impl TieBreak {
    pub fn resolves_to_wall(self) -> bool {
        matches!(self, TieBreak::Wall)
    }
}

/// Half-extent of the neighbour sampling window on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighbourRadius {
    pub x: usize,
    pub y: usize,
}

impl NeighbourRadius {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Default for NeighbourRadius {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridParams {
    pub width: usize,
    pub height: usize,
    /// Force the first interior ring to wall before the random fill.
    pub fill_edges: bool,
    /// Chance (0-100) that a cell starts as wall.
    pub fill_percent: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_SIZE,
            height: DEFAULT_MAP_SIZE,
            fill_edges: true,
            fill_percent: DEFAULT_FILL_PERCENT,
        }
    }
}

impl GridParams {
    pub fn validate(&self) -> CaveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CaveError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.fill_percent > 100 {
            return Err(CaveError::FillPercentOutOfRange(self.fill_percent));
        }
        Ok(())
    }

    /// Wall probability in `[0, 1]`.
    pub fn fill_probability(&self) -> f64 {
        f64::from(self.fill_percent.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothingParams {
    pub threshold: u32,
    pub radius: NeighbourRadius,
    pub tie_break: TieBreak,
    /// Passes run by `CaveGenerator::smooth_default`.
    pub iterations: usize,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NEIGHBOUR_THRESHOLD,
            radius: NeighbourRadius::default(),
            tie_break: TieBreak::Wall,
            iterations: DEFAULT_SMOOTHING_ITERATIONS,
        }
    }
}

impl SmoothingParams {
    pub fn validate(&self) -> CaveResult<()> {
        if self.radius.is_zero() {
            return Err(CaveError::ZeroNeighbourRadius {
                x: self.radius.x,
                y: self.radius.y,
            });
        }
        Ok(())
    }

    /// Next state of a cell given its neighbour wall count.
    pub fn next_state(&self, wall_count: u32) -> bool {
        match wall_count.cmp(&self.threshold) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.tie_break.resolves_to_wall(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaveParams {
    pub grid: GridParams,
    pub smoothing: SmoothingParams,
    /// Cap on recorded history states. `None` keeps every pass.
    pub max_history: Option<usize>,
}

impl CaveParams {
    pub fn validate(&self) -> CaveResult<()> {
        self.grid.validate()?;
        self.smoothing.validate()
    }

    /// Convert engine-side integer settings, rejecting any negative value.
    /// The result still needs `validate()`.
    pub fn from_exported(settings: &ExportedSettings) -> CaveResult<Self> {
        let max_history = match non_negative("max_history", settings.max_history)? {
            0 => None,
            n => Some(n),
        };
        Ok(Self {
            grid: GridParams {
                width: non_negative("map_size.x", settings.map_size[0])?,
                height: non_negative("map_size.y", settings.map_size[1])?,
                fill_edges: settings.fill_edges,
                fill_percent: non_negative("fill_percent", settings.fill_percent)?,
            },
            smoothing: SmoothingParams {
                threshold: non_negative("neighbour_threshold", settings.neighbour_threshold)?,
                radius: NeighbourRadius::new(
                    non_negative("neighbour_radius.x", settings.neighbour_radius[0])?,
                    non_negative("neighbour_radius.y", settings.neighbour_radius[1])?,
                ),
                tie_break: if settings.tie_break_open {
                    TieBreak::Open
                } else {
                    TieBreak::Wall
                },
                iterations: non_negative("smoothing_iterations", settings.smoothing_iterations)?,
            },
            max_history,
        })
    }
}

/// Settings as the Godot node exports them: signed integers, `max_history == 0`
/// meaning unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportedSettings {
    pub map_size: [i32; 2],
    pub fill_edges: bool,
    pub fill_percent: i32,
    pub neighbour_threshold: i32,
    pub neighbour_radius: [i32; 2],
    pub tie_break_open: bool,
    pub smoothing_iterations: i32,
    pub max_history: i32,
}

fn non_negative<T: TryFrom<i32>>(name: &'static str, value: i32) -> CaveResult<T> {
    T::try_from(value).map_err(|_| CaveError::NegativeSetting { name, value })
}
