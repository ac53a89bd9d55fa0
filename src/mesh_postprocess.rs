//! Turns raw marching-squares triangles into an indexed mesh.
//!
//! Vertices are welded only when their coordinates are identical. Welding uses
//! meshopt's vertex remap, which hashes the raw bytes of each vertex and hands
//! out new indices in order of first appearance.

use crate::coord::Coord;
use crate::debug_log::debug_log;
use crate::marching_squares::RawTriangle;

/// Deduplicated vertices plus triangles indexing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaveMesh {
    /// First-seen order.
    pub vertices: Vec<Coord>,
    pub triangles: Vec<[u32; 3]>,
}

impl CaveMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertices mapped into display space, e.g. multiplied by the tile size.
    pub fn scaled_vertices(&self, scale: Coord) -> Vec<Coord> {
        self.vertices.iter().map(|&v| v * scale).collect()
    }

    /// Flat triangle index buffer.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.triangles.iter().flatten().copied()
    }
}

/// Weld identical corners and remap triangles onto the unique vertex list.
pub fn weld_triangles(raw: &[RawTriangle]) -> CaveMesh {
    if raw.is_empty() {
        return CaveMesh::new();
    }

    let corner_count = raw.len() * 3;

    // Canonical zeros so byte equality is numeric equality.
    let vertex_data: Vec<f32> = raw
        .iter()
        .flatten()
        .flat_map(|c| c.canonical().to_array())
        .collect();

    let mut remap: Vec<u32> = vec![0; corner_count];

    // SAFETY: `remap` holds one slot per corner, `vertex_data` holds
    // `corner_count` vertices of two f32 each, and a null index buffer makes
    // meshopt treat corners as an unindexed stream of `corner_count` entries.
    let unique_count = unsafe {
        meshopt::ffi::meshopt_generateVertexRemap(
            remap.as_mut_ptr(),
            std::ptr::null(),
            corner_count,
            vertex_data.as_ptr() as *const std::ffi::c_void,
            corner_count,
            std::mem::size_of::<[f32; 2]>(),
        )
    };

    let mut vertices = vec![Coord::ZERO; unique_count];
    let mut seen = vec![false; unique_count];
    for (corner, &new_idx) in raw.iter().flatten().zip(&remap) {
        let idx = new_idx as usize;
        if !seen[idx] {
            seen[idx] = true;
            vertices[idx] = corner.canonical();
        }
    }

    let triangles: Vec<[u32; 3]> = remap
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();

    if cfg!(debug_assertions) {
        debug_log(&format!(
            "[weld_triangles] {} corners -> {} vertices, {} tris",
            corner_count,
            vertices.len(),
            triangles.len()
        ));
    }

    CaveMesh {
        vertices,
        triangles,
    }
}

/// For each vertex, the ascending indices of the triangles that use it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexAdjacency {
    triangles_by_vertex: Vec<Vec<u32>>,
}

impl VertexAdjacency {
    /// Triangle lists in ascending order. A degenerate triangle naming one vertex
    /// more than once is listed once for that vertex, not once per corner.
    pub fn build(mesh: &CaveMesh) -> Self {
        let mut triangles_by_vertex: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertices.len()];
        for (tri_idx, tri) in mesh.triangles.iter().enumerate() {
            let tri_idx = tri_idx as u32;
            for &v in tri {
                let list = &mut triangles_by_vertex[v as usize];
                if list.last() != Some(&tri_idx) {
                    list.push(tri_idx);
                }
            }
        }
        Self {
            triangles_by_vertex,
        }
    }

    /// Panics when `vertex` is not in the mesh.
    pub fn triangles_of(&self, vertex: u32) -> &[u32] {
        &self.triangles_by_vertex[vertex as usize]
    }

    /// Number of triangles using both `a` and `b`.
    pub fn shared_triangle_count(&self, a: u32, b: u32) -> usize {
        let (lhs, rhs) = (self.triangles_of(a), self.triangles_of(b));
        let (mut i, mut j, mut count) = (0, 0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        count
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles_by_vertex.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.triangles_by_vertex.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave_grid::CaveGrid;
    use crate::marching_squares::triangulate;

    /// Linear scan-and-compare welding, the reference for the hashed path.
    fn weld_by_scan(raw: &[RawTriangle]) -> CaveMesh {
        let mut vertices: Vec<Coord> = Vec::new();
        for tri in raw {
            for corner in tri {
                if !vertices.contains(corner) {
                    vertices.push(*corner);
                }
            }
        }
        let find = |c: &Coord| vertices.iter().position(|v| v == c).unwrap() as u32;
        let triangles = raw
            .iter()
            .map(|t| [find(&t[0]), find(&t[1]), find(&t[2])])
            .collect();
        CaveMesh {
            vertices,
            triangles,
        }
    }

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> RawTriangle {
        [
            Coord::new(a.0, a.1),
            Coord::new(b.0, b.1),
            Coord::new(c.0, c.1),
        ]
    }

    #[test]
    fn test_empty_input() {
        let mesh = weld_triangles(&[]);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(VertexAdjacency::build(&mesh).vertex_count(), 0);
    }

    #[test]
    fn test_single_triangle() {
        let mesh = weld_triangles(&[tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0))]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);

        let adjacency = VertexAdjacency::build(&mesh);
        for v in 0..3 {
            assert_eq!(adjacency.triangles_of(v), &[0]);
        }
    }

    #[test]
    fn test_shared_edge_welds_two_vertices() {
        let raw = [
            tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
            tri((1.0, 0.0), (1.0, 1.0), (0.0, 1.0)),
        ];
        let mesh = weld_triangles(&raw);
        assert_eq!(
            mesh.vertices,
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(1.0, 0.0),
                Coord::new(0.0, 1.0),
                Coord::new(1.0, 1.0),
            ]
        );
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [1, 3, 2]]);

        let adjacency = VertexAdjacency::build(&mesh);
        assert_eq!(adjacency.triangles_of(1), &[0, 1]);
        assert_eq!(adjacency.triangles_of(3), &[1]);
        assert_eq!(adjacency.shared_triangle_count(1, 2), 2);
        assert_eq!(adjacency.shared_triangle_count(0, 1), 1);
        assert_eq!(adjacency.shared_triangle_count(0, 3), 0);
    }

    #[test]
    fn test_negative_zero_welds_with_zero() {
        let raw = [
            tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
            tri((-0.0, 0.0), (0.0, 1.0), (-1.0, 0.0)),
        ];
        let mesh = weld_triangles(&raw);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles[1], [0, 2, 3]);
    }

    #[test]
    fn test_matches_linear_scan_on_cave() {
        let grid = CaveGrid::from_rows(&[
            "##..#..#", //
            "#...##.#",
            "..#.....",
            "#..###.#",
            "##.#...#",
        ]);
        let raw = triangulate(&grid);
        assert_eq!(weld_triangles(&raw), weld_by_scan(&raw));
    }

    #[test]
    fn test_weld_is_idempotent() {
        let raw = triangulate(&CaveGrid::from_rows(&["#.#", "###", ".#."]));
        let first = weld_triangles(&raw);
        let second = weld_triangles(&raw);
        assert_eq!(first, second);
        assert_eq!(
            VertexAdjacency::build(&first),
            VertexAdjacency::build(&second)
        );
    }

    #[test]
    fn test_degenerate_triangle_listed_once() {
        let mesh = CaveMesh {
            vertices: vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)],
            triangles: vec![[0, 0, 1]],
        };
        let adjacency = VertexAdjacency::build(&mesh);
        assert_eq!(adjacency.triangles_of(0), &[0]);
    }

    #[test]
    fn test_scaled_vertices() {
        let mesh = weld_triangles(&[tri((0.5, 0.0), (1.0, 0.5), (0.0, 1.0))]);
        let scaled = mesh.scaled_vertices(Coord::new(32.0, 16.0));
        assert_eq!(
            scaled,
            vec![
                Coord::new(16.0, 0.0),
                Coord::new(32.0, 8.0),
                Coord::new(0.0, 16.0)
            ]
        );
        assert_eq!(mesh.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
