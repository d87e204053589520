// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Geometry module - mesh representation and engine operations

mod containment;
mod mesh;
pub(crate) mod normals;
mod statistics;
mod subdivide;

pub use containment::is_point_inside;
pub use mesh::{Mesh, Triangle, Vertex};
pub use normals::recalculate_normals;
pub use statistics::{
    begin_area_statistics, compute_area_statistics, compute_area_statistics_with_workers,
    AreaStatistics, StatisticsError, StatisticsHandle, StatisticsStatus,
};
pub use subdivide::subdivide;
