// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Meshkernel
//!
//! A triangle-mesh geometry engine: loads a vertex/index description from a
//! JSON document, derives smooth per-vertex normals, computes triangle-area
//! statistics with parallel batch reduction, refines topology by 4-to-1
//! midpoint subdivision, and answers point-containment queries by ray
//! casting. Rendering, windowing, and UI are left to consumers, which read
//! the mesh buffers directly after any mutating operation.

pub mod geometry;
pub mod io;

pub use geometry::{
    begin_area_statistics, compute_area_statistics, is_point_inside, recalculate_normals,
    subdivide, AreaStatistics, Mesh, StatisticsHandle, StatisticsStatus, Triangle, Vertex,
};
pub use io::{import_mesh_file, parse_mesh, LoadError};
