//! Boolean occupancy grid for cave maps.
//!
//! `true` is wall (solid rock), `false` is open floor. Cells are stored flat,
//! row-major: `y * width + x`.

use rand::Rng;

use crate::cave_params::GridParams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CaveGrid {
    /// A grid with every cell set to wall.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, true)
    }

    pub fn filled(width: usize, height: usize, wall: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![wall; width * height],
        }
    }

    /// Build a grid from rows of `'#'` (wall) and `'.'` (open); handy for fixtures.
    ///
    /// Panics if rows have different lengths.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.chars().count(), width, "ragged grid row: {row:?}");
            cells.extend(row.chars().map(|c| c == '#'));
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Randomly fill the grid from `rng`.
    ///
    /// Cells are visited x-outer, y-inner. With `fill_edges`, cells on the first
    /// interior ring are forced to wall and do not consume a random draw.
    pub fn generate<R: Rng + ?Sized>(&mut self, params: &GridParams, rng: &mut R) {
        let probability = params.fill_probability();
        for x in 0..self.width {
            for y in 0..self.height {
                let wall = if params.fill_edges && self.is_inner_ring(x, y) {
                    true
                } else {
                    rng.gen_bool(probability)
                };
                self.set(x, y, wall);
            }
        }
    }

    fn is_inner_ring(&self, x: usize, y: usize) -> bool {
        x == 1 || y == 1 || x + 2 == self.width || y + 2 == self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Panics when `(x, y)` is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Panics when `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, wall: bool) {
        let i = self.index(x, y);
        self.cells[i] = wall;
    }

    /// `None` when `(x, y)` falls outside the grid.
    #[inline]
    pub fn get_signed(&self, x: isize, y: isize) -> Option<bool> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(width: usize, height: usize, fill_percent: u32, fill_edges: bool) -> GridParams {
        GridParams {
            width,
            height,
            fill_edges,
            fill_percent,
        }
    }

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = CaveGrid::new(5, 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.wall_count(), 15);
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let p = params(24, 16, 45, true);
        let mut a = CaveGrid::new(24, 16);
        let mut b = CaveGrid::new(24, 16);
        a.generate(&p, &mut StdRng::seed_from_u64(7));
        b.generate(&p, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let mut c = CaveGrid::new(24, 16);
        c.generate(&p, &mut StdRng::seed_from_u64(8));
        assert_ne!(a, c, "Different seeds should give different maps");
    }

    #[test]
    fn test_generate_fill_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = CaveGrid::new(10, 10);

        grid.generate(&params(10, 10, 0, false), &mut rng);
        assert_eq!(grid.wall_count(), 0);

        grid.generate(&params(10, 10, 100, false), &mut rng);
        assert_eq!(grid.wall_count(), 100);
    }

    #[test]
    fn test_fill_edges_forces_inner_ring() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = CaveGrid::new(8, 6);
        grid.generate(&params(8, 6, 0, true), &mut rng);

        for x in 0..8 {
            for y in 0..6 {
                let ring = x == 1 || x == 6 || y == 1 || y == 4;
                assert_eq!(grid.get(x, y), ring, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_from_rows() {
        let grid = CaveGrid::from_rows(&["#..", "..#"]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 0));
        assert!(grid.get(2, 1));
    }

    #[test]
    fn test_get_signed_outside_is_none() {
        let grid = CaveGrid::new(2, 2);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, 2), None);
        assert_eq!(grid.get_signed(1, 1), Some(true));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_range_panics() {
        let grid = CaveGrid::new(2, 2);
        grid.get(2, 0);
    }
}
