//! Silhouette edges of a welded cave mesh.

use std::collections::HashSet;

use crate::mesh_postprocess::{CaveMesh, VertexAdjacency};

/// Edges bordering exactly one triangle.
///
/// Edges are gathered per vertex, so a boundary edge is listed once from each
/// of its endpoints. Use [`Outline::unique_edges`] for one entry per edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    pub edges: Vec<[u32; 2]>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Each undirected edge once, in first-seen order and orientation.
    pub fn unique_edges(&self) -> Vec<[u32; 2]> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges
            .iter()
            .copied()
            .filter(|&[a, b]| seen.insert((a.min(b), a.max(b))))
            .collect()
    }

    /// Flat index pairs for line-list rendering.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.edges.iter().flatten().copied()
    }
}

pub fn extract_outline(mesh: &CaveMesh, adjacency: &VertexAdjacency) -> Outline {
    let mut edges = Vec::new();

    for v in 0..mesh.vertices.len() as u32 {
        for &tri_idx in adjacency.triangles_of(v) {
            let [t0, t1, t2] = mesh.triangles[tri_idx as usize];
            for edge in [[t0, t1], [t1, t2], [t2, t0]] {
                if !edge.contains(&v) {
                    continue;
                }
                if adjacency.shared_triangle_count(edge[0], edge[1]) == 1 {
                    edges.push(edge);
                }
            }
        }
    }

    Outline { edges }
}
