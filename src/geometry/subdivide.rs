// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! 4-to-1 midpoint subdivision

use super::{normals, Mesh, Vertex};
use ahash::AHashMap;
use nalgebra::Point3;

/// Canonical undirected-edge key: the endpoint indices in sorted order, so
/// both triangles adjacent to an edge look up the same entry.
fn edge_key(a: i32, b: i32) -> (i32, i32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Split every triangle into four at its edge midpoints, in place.
///
/// Midpoint vertices on shared edges are created once and reused by both
/// adjacent triangles, so the refined surface stays crack-free. The index
/// buffer is replaced wholesale with exactly four times as many entries,
/// winding is preserved, and smooth normals are recomputed over the whole
/// record. Repeated calls keep refining.
pub fn subdivide(mesh: &mut Mesh) {
    let mut midpoints: AHashMap<(i32, i32), i32> = AHashMap::with_capacity(mesh.indices.len());
    let mut refined: Vec<i32> = Vec::with_capacity(mesh.indices.len() * 4);

    for offset in (0..mesh.indices.len()).step_by(3) {
        let a = mesh.indices[offset];
        let b = mesh.indices[offset + 1];
        let c = mesh.indices[offset + 2];

        let mid_ac = midpoint_vertex(mesh, &mut midpoints, a, c);
        let mid_ab = midpoint_vertex(mesh, &mut midpoints, a, b);
        let mid_bc = midpoint_vertex(mesh, &mut midpoints, b, c);

        refined.extend_from_slice(&[
            a, mid_ab, mid_ac,
            mid_ac, mid_ab, mid_bc,
            mid_ac, mid_bc, c,
            mid_ab, b, mid_bc,
        ]);
    }

    mesh.indices = refined;
    normals::recalculate_normals(mesh);
}

/// Index of the midpoint vertex of edge `(a, b)`, appending a new vertex
/// with a zeroed normal accumulator on first encounter of the edge.
fn midpoint_vertex(mesh: &mut Mesh, cache: &mut AHashMap<(i32, i32), i32>, a: i32, b: i32) -> i32 {
    if let Some(&index) = cache.get(&edge_key(a, b)) {
        return index;
    }

    let pa = mesh.vertices[a as usize].position;
    let pb = mesh.vertices[b as usize].position;
    let midpoint = Point3::from((pa.coords + pb.coords) * 0.5);

    let index = mesh.add_vertex(Vertex::from_position(midpoint)) as i32;
    cache.insert(edge_key(a, b), index);
    index
}
