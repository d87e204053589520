// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Point containment via ray-casting parity

use super::Mesh;
use nalgebra::{Point3, Vector3};

/// Fixed direction for containment rays.
///
/// Diagonal so axis-aligned faces (the common case for CAD input) are
/// crossed through their interior instead of grazed along an edge. A ray
/// that passes exactly through a mesh vertex or edge can still miscount;
/// that fragility is inherent to single-ray parity testing and is not
/// mitigated here.
const RAY_DIRECTION: Vector3<f64> = Vector3::new(1.0, 0.5, 0.25);

/// Whether `point` is enclosed by the mesh surface.
///
/// Casts a single ray from the point along [`RAY_DIRECTION`] and counts
/// triangle crossings; an odd count means inside. Assumes a closed
/// (watertight) surface. O(triangle count) per query, sequential.
pub fn is_point_inside(mesh: &Mesh, point: &Point3<f64>) -> bool {
    let mut crossings = 0usize;

    for triangle in mesh.triangles() {
        let [a, b, c] = triangle.positions(&mesh.vertices);
        if ray_intersects_triangle(point, &RAY_DIRECTION, a, b, c) {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

/// Moller-Trumbore ray-triangle intersection with machine-epsilon
/// tolerances. Accepts only hits strictly ahead of the origin.
fn ray_intersects_triangle(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = direction.cross(&edge2);
    let det = edge1.dot(&h);

    if det.abs() < f64::EPSILON {
        return false; // Ray parallel to triangle plane
    }

    let inv_det = 1.0 / det;
    let s = origin - v0;
    let u = inv_det * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    let q = s.cross(&edge1);
    let v = inv_det * direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return false;
    }

    let t = inv_det * edge2.dot(&q);
    t > f64::EPSILON
}
