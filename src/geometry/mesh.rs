// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Mesh representation and the transient triangle view

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Vertex with position and accumulated smooth normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    /// Sum of the face normals of every incident triangle. Not unit length;
    /// only the direction is meaningful, consumers normalize before use.
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    /// Vertex with a zeroed normal accumulator
    pub fn from_position(position: Point3<f64>) -> Self {
        Self::new(position, Vector3::zeros())
    }
}

/// Triangle view: three indices into a mesh's vertex buffer.
///
/// Built on demand from three consecutive index-buffer entries and never
/// stored, so it holds no references and stays valid when the vertex buffer
/// reallocates between constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// Triangle spanning the three index-buffer entries starting at `offset`
    /// (a multiple of 3).
    pub fn at(indices: &[i32], offset: usize) -> Self {
        Self::new([
            indices[offset] as usize,
            indices[offset + 1] as usize,
            indices[offset + 2] as usize,
        ])
    }

    /// Borrow the three corner positions from `vertices`
    pub fn positions<'a>(&self, vertices: &'a [Vertex]) -> [&'a Point3<f64>; 3] {
        [
            &vertices[self.indices[0]].position,
            &vertices[self.indices[1]].position,
            &vertices[self.indices[2]].position,
        ]
    }

    /// Face normal `(a - b) x (c - b)`.
    ///
    /// Unnormalized: its length is twice the triangle area and its sign
    /// follows the winding of the corners.
    pub fn face_normal(&self, vertices: &[Vertex]) -> Vector3<f64> {
        let [a, b, c] = self.positions(vertices);
        let edge1 = a - b;
        let edge2 = c - b;
        edge1.cross(&edge2)
    }

    pub fn area(&self, vertices: &[Vertex]) -> f64 {
        self.face_normal(vertices).norm() * 0.5
    }
}

/// Triangular mesh: the unit of ownership for vertex and index buffers
#[derive(Debug, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    /// Flat triangle list, three consecutive entries per triangle with
    /// counter-clockwise winding. Invariant: the length is a multiple of 3
    /// and every entry is a valid position in `vertices`.
    pub indices: Vec<i32>,
    /// Set while an area-statistics computation over this record is in
    /// flight; see [`crate::geometry::begin_area_statistics`].
    #[serde(skip)]
    pub(crate) stats_in_flight: Arc<AtomicBool>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            stats_in_flight: Arc::default(),
        }
    }

    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
            stats_in_flight: Arc::default(),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// View of the `i`-th triangle
    pub fn triangle(&self, i: usize) -> Triangle {
        Triangle::at(&self.indices, i * 3)
    }

    /// Iterate over all triangle views
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(|i| self.triangle(i))
    }
}

impl Clone for Mesh {
    fn clone(&self) -> Self {
        // A clone is an independent record with no computation in flight.
        Self {
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
            stats_in_flight: Arc::default(),
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
