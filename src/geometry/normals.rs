// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Smooth vertex normal computation

use super::Mesh;
use nalgebra::Vector3;

/// Recompute every vertex's smooth normal from the current positions and
/// topology.
///
/// Zeroes every accumulator, then adds each triangle's face normal to its
/// three corner vertices, so a vertex's normal ends up as the sum of the
/// face normals of all incident triangles. Accumulators stay unnormalized.
/// Runs in O(triangle count) and is re-run wholesale after loading and
/// after every subdivision; there is no incremental path.
pub fn recalculate_normals(mesh: &mut Mesh) {
    for vertex in &mut mesh.vertices {
        vertex.normal = Vector3::zeros();
    }

    for i in 0..mesh.triangle_count() {
        let triangle = mesh.triangle(i);
        let normal = triangle.face_normal(&mesh.vertices);

        for &index in &triangle.indices {
            mesh.vertices[index].normal += normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    /// Two triangles in the XY plane sharing the edge (1, 2)
    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::from_position(Point3::new(0.0, 0.0, 0.0)));
        mesh.add_vertex(Vertex::from_position(Point3::new(1.0, 0.0, 0.0)));
        mesh.add_vertex(Vertex::from_position(Point3::new(0.0, 1.0, 0.0)));
        mesh.add_vertex(Vertex::from_position(Point3::new(1.0, 1.0, 0.0)));
        mesh.indices = vec![0, 1, 2, 1, 3, 2];
        mesh
    }

    #[test]
    fn test_shared_vertices_accumulate_both_faces() {
        let mut mesh = quad();
        recalculate_normals(&mut mesh);

        // Both faces are coplanar with face normal (0, 0, -1), so corners
        // on the shared edge accumulate twice the length.
        assert_relative_eq!(mesh.vertices[0].normal.z, -1.0);
        assert_relative_eq!(mesh.vertices[1].normal.z, -2.0);
        assert_relative_eq!(mesh.vertices[2].normal.z, -2.0);
        assert_relative_eq!(mesh.vertices[3].normal.z, -1.0);
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let mut mesh = quad();
        recalculate_normals(&mut mesh);
        let first: Vec<_> = mesh.vertices.iter().map(|v| v.normal).collect();

        recalculate_normals(&mut mesh);
        for (vertex, normal) in mesh.vertices.iter().zip(&first) {
            assert_eq!(vertex.normal, *normal);
        }
    }

    #[test]
    fn test_unreferenced_vertex_keeps_zero_normal() {
        let mut mesh = quad();
        mesh.add_vertex(Vertex::new(
            Point3::new(5.0, 5.0, 5.0),
            Vector3::new(1.0, 1.0, 1.0),
        ));
        recalculate_normals(&mut mesh);
        assert_eq!(mesh.vertices[4].normal, Vector3::zeros());
    }
}
