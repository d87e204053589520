// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Mesh document input

mod loader;

pub use loader::{import_mesh_file, parse_mesh, LoadError};
