use std::collections::HashMap;

use crate::mesh_postprocess::{CaveMesh, VertexAdjacency};

/// Result of checking a welded mesh and its adjacency index.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub issues: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check the welding and adjacency invariants:
/// indices in range, no two vertices bit-identical, and every adjacency list
/// naming exactly the triangles that use its vertex.
pub fn validate_surface(mesh: &CaveMesh, adjacency: &VertexAdjacency) -> ValidationResult {
    let mut result = ValidationResult::default();
    let vertex_count = mesh.vertices.len();

    for (t, tri) in mesh.triangles.iter().enumerate() {
        for &v in tri {
            if v as usize >= vertex_count {
                result.issues.push(format!(
                    "triangle {t} references vertex {v} (only {vertex_count} vertices)"
                ));
            }
        }
    }

    let mut first_seen: HashMap<[u32; 2], usize> = HashMap::with_capacity(vertex_count);
    for (i, v) in mesh.vertices.iter().enumerate() {
        if let Some(&j) = first_seen.get(&v.to_bits()) {
            result.issues.push(format!(
                "vertex {i} duplicates vertex {j} at ({}, {})",
                v.x, v.y
            ));
        } else {
            first_seen.insert(v.to_bits(), i);
        }
    }

    if !result.is_valid() {
        return result;
    }

    if adjacency.vertex_count() != vertex_count {
        result.issues.push(format!(
            "adjacency covers {} vertices, mesh has {vertex_count}",
            adjacency.vertex_count()
        ));
        return result;
    }

    for (v, tris) in adjacency.iter().enumerate() {
        for &t in tris {
            let uses_vertex = mesh
                .triangles
                .get(t as usize)
                .is_some_and(|tri| tri.contains(&(v as u32)));
            if !uses_vertex {
                result.issues.push(format!(
                    "adjacency of vertex {v} lists triangle {t} which does not use it"
                ));
            }
        }
    }

    for (t, tri) in mesh.triangles.iter().enumerate() {
        for &v in tri {
            if !adjacency.triangles_of(v).contains(&(t as u32)) {
                result
                    .issues
                    .push(format!("triangle {t} missing from adjacency of vertex {v}"));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave_grid::CaveGrid;
    use crate::coord::Coord;
    use crate::marching_squares::triangulate;
    use crate::mesh_postprocess::weld_triangles;

    #[test]
    fn test_generated_mesh_is_valid() {
        let grid = CaveGrid::from_rows(&["#.##", "#..#", "##.#"]);
        let mesh = weld_triangles(&triangulate(&grid));
        let adjacency = VertexAdjacency::build(&mesh);
        let result = validate_surface(&mesh, &adjacency);
        assert!(result.is_valid(), "{:?}", result.issues);
    }

    #[test]
    fn test_detects_duplicate_vertex() {
        let mesh = CaveMesh {
            vertices: vec![
                Coord::new(0.0, 0.0),
                Coord::new(1.0, 0.0),
                Coord::new(0.0, 0.0),
            ],
            triangles: vec![[0, 1, 2]],
        };
        let result = validate_surface(&mesh, &VertexAdjacency::build(&mesh));
        assert!(!result.is_valid());
        assert!(result.issues[0].contains("duplicates vertex 0"));
    }

    #[test]
    fn test_detects_out_of_range_index() {
        let mesh = CaveMesh {
            vertices: vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)],
            triangles: vec![[0, 1, 5]],
        };
        let result = validate_surface(&mesh, &VertexAdjacency::default());
        assert!(!result.is_valid());
        assert!(result.issues[0].contains("vertex 5"));
    }

    #[test]
    fn test_detects_stale_adjacency() {
        let mesh = weld_triangles(&triangulate(&CaveGrid::new(1, 1)));
        let wider = weld_triangles(&triangulate(&CaveGrid::new(2, 1)));
        let stale = VertexAdjacency::build(&wider);
        assert!(!validate_surface(&mesh, &stale).is_valid());
    }
}
