// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! JSON mesh document loader

use crate::geometry::{normals, Mesh, Vertex};
use nalgebra::Point3;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Mesh loading failures. Every variant aborts the load; a partially
/// populated record never escapes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mesh file: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("malformed mesh document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("mesh document root is not an object")]
    RootNotObject,

    #[error("missing `{0}` member")]
    MissingMember(&'static str),

    #[error("`geometry_object` is not an object")]
    GeometryNotObject,

    #[error("`{0}` is not an array")]
    NotAnArray(&'static str),

    #[error("vertex element {0} is not a number")]
    NonNumericVertex(usize),

    #[error("triangle element {0} is not an integer")]
    NonIntegerIndex(usize),

    #[error("triangle index list length {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    #[error("triangle element {element} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        element: usize,
        index: i64,
        vertex_count: usize,
    },
}

/// Parse a mesh from a JSON document.
///
/// Expected shape:
///
/// ```json
/// { "geometry_object": { "vertices": [x, y, z, ...], "triangles": [a, b, c, ...] } }
/// ```
///
/// `vertices` is a flat coordinate array read in groups of three; a
/// trailing partial group is silently dropped, matching the historical
/// loader behavior. `triangles` must reference existing vertices and hold
/// a whole number of triangles. The returned record has freshly computed
/// smooth normals.
pub fn parse_mesh(source: &str) -> Result<Mesh, LoadError> {
    let document: Value = serde_json::from_str(source)?;
    let root = document.as_object().ok_or(LoadError::RootNotObject)?;

    let geometry = root
        .get("geometry_object")
        .ok_or(LoadError::MissingMember("geometry_object"))?
        .as_object()
        .ok_or(LoadError::GeometryNotObject)?;

    let vertices = geometry
        .get("vertices")
        .ok_or(LoadError::MissingMember("vertices"))?
        .as_array()
        .ok_or(LoadError::NotAnArray("vertices"))?;

    let triangles = geometry
        .get("triangles")
        .ok_or(LoadError::MissingMember("triangles"))?
        .as_array()
        .ok_or(LoadError::NotAnArray("triangles"))?;

    if triangles.len() % 3 != 0 {
        return Err(LoadError::IndexCountNotMultipleOfThree(triangles.len()));
    }

    let mut mesh = Mesh::with_capacity(vertices.len() / 3, triangles.len());

    for (group, chunk) in vertices.chunks_exact(3).enumerate() {
        let mut coords = [0.0f64; 3];
        for (axis, value) in chunk.iter().enumerate() {
            coords[axis] = value
                .as_f64()
                .ok_or(LoadError::NonNumericVertex(group * 3 + axis))?;
        }
        mesh.add_vertex(Vertex::from_position(Point3::new(
            coords[0], coords[1], coords[2],
        )));
    }

    for (element, value) in triangles.iter().enumerate() {
        let index = value.as_i64().ok_or(LoadError::NonIntegerIndex(element))?;
        if index < 0 || index as usize >= mesh.vertex_count() {
            return Err(LoadError::IndexOutOfBounds {
                element,
                index,
                vertex_count: mesh.vertex_count(),
            });
        }
        mesh.indices.push(index as i32);
    }

    normals::recalculate_normals(&mut mesh);
    Ok(mesh)
}

/// Load a mesh document from disk
pub fn import_mesh_file<P: AsRef<Path>>(path: P) -> Result<Mesh, LoadError> {
    let source = std::fs::read_to_string(path)?;
    parse_mesh(&source)
}
