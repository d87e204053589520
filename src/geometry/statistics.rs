// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Triangle area statistics with parallel batch reduction

use super::{Mesh, Triangle, Vertex};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use thiserror::Error;

/// Area statistics over a mesh's triangle set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStatistics {
    /// Smallest strictly positive triangle area. Stays at the
    /// `f64::INFINITY` sentinel when no triangle has positive area, so
    /// callers must not display it as a measurement in that case.
    pub min_area: f64,
    /// Largest triangle area, zero-area triangles included
    pub max_area: f64,
    /// Mean triangle area, zero-area triangles included
    pub avg_area: f64,
}

impl AreaStatistics {
    /// Statistics of an empty triangle set: the min sentinel, max 0, avg 0
    pub fn empty() -> Self {
        Self {
            min_area: f64::INFINITY,
            max_area: 0.0,
            avg_area: 0.0,
        }
    }

    /// Whether `min_area` holds a real measurement rather than the sentinel
    pub fn has_min(&self) -> bool {
        self.min_area.is_finite()
    }
}

/// Running reduction over one contiguous batch of triangles
#[derive(Debug, Clone, Copy)]
struct BatchPartial {
    min: f64,
    max: f64,
    area_sum: f64,
}

impl BatchPartial {
    fn identity() -> Self {
        Self {
            min: f64::INFINITY,
            max: 0.0,
            area_sum: 0.0,
        }
    }

    fn observe(&mut self, area: f64) {
        if area > 0.0 && area < self.min {
            self.min = area;
        }
        if area > self.max {
            self.max = area;
        }
        self.area_sum += area;
    }

    /// Commutative and associative, so batch completion order never
    /// affects the final result.
    fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            area_sum: self.area_sum + other.area_sum,
        }
    }
}

/// Outcome of polling a pending statistics computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticsStatus {
    Pending,
    Ready(AreaStatistics),
}

#[derive(Debug, Error)]
pub enum StatisticsError {
    /// A second computation was requested for a record whose previous
    /// computation has not finished. Requests are rejected rather than
    /// queued; retry after the pending handle reports ready.
    #[error("an area-statistics computation is already in flight for this mesh")]
    ComputationPending,
}

/// Handle to an in-flight statistics computation.
///
/// Obtained from [`begin_area_statistics`]; the result arrives through a
/// channel once the aggregator has merged every batch.
pub struct StatisticsHandle {
    receiver: Receiver<AreaStatistics>,
    result: Option<AreaStatistics>,
}

impl StatisticsHandle {
    /// Check for completion without blocking. Once ready, every subsequent
    /// poll keeps returning the same result.
    pub fn poll(&mut self) -> StatisticsStatus {
        if let Some(stats) = self.result {
            return StatisticsStatus::Ready(stats);
        }

        match self.receiver.try_recv() {
            Ok(stats) => {
                self.result = Some(stats);
                StatisticsStatus::Ready(stats)
            }
            Err(TryRecvError::Empty) => StatisticsStatus::Pending,
            Err(TryRecvError::Disconnected) => {
                // The aggregator always publishes before dropping its sender.
                panic!("statistics aggregator terminated without publishing a result")
            }
        }
    }

    /// Block until the computation completes and return its result
    pub fn wait(self) -> AreaStatistics {
        match self.result {
            Some(stats) => stats,
            None => self
                .receiver
                .recv()
                .expect("statistics aggregator terminated without publishing a result"),
        }
    }
}

/// Launch an area-statistics computation without blocking the caller.
///
/// Snapshots the vertex and index buffers, partitions the triangle range
/// across the available worker threads, and returns a handle immediately;
/// the merged result becomes visible through [`StatisticsHandle::poll`]
/// once every batch has been reduced. Because the computation runs on a
/// snapshot, mutating the mesh afterwards cannot corrupt a pending result.
///
/// At most one computation may be in flight per record: a request made
/// while one is pending is rejected with
/// [`StatisticsError::ComputationPending`].
pub fn begin_area_statistics(mesh: &Mesh) -> Result<StatisticsHandle, StatisticsError> {
    if mesh.stats_in_flight.swap(true, Ordering::AcqRel) {
        return Err(StatisticsError::ComputationPending);
    }

    let vertices = mesh.vertices.clone();
    let indices = mesh.indices.clone();
    let in_flight = Arc::clone(&mesh.stats_in_flight);
    let (sender, receiver) = mpsc::channel();

    rayon::spawn(move || {
        let stats = compute_partitioned(&vertices, &indices, rayon::current_num_threads());
        in_flight.store(false, Ordering::Release);
        // The caller may have dropped the handle; the computation still ran
        // to completion, there is no cancellation path.
        let _ = sender.send(stats);
    });

    Ok(StatisticsHandle { receiver, result: None })
}

/// Compute area statistics synchronously with the default worker count
pub fn compute_area_statistics(mesh: &Mesh) -> AreaStatistics {
    compute_partitioned(&mesh.vertices, &mesh.indices, rayon::current_num_threads())
}

/// Compute area statistics synchronously over a fixed number of batches.
///
/// Min and max are identical for any worker count; the average can differ
/// only by floating-point rounding order.
pub fn compute_area_statistics_with_workers(mesh: &Mesh, workers: usize) -> AreaStatistics {
    compute_partitioned(&mesh.vertices, &mesh.indices, workers)
}

fn compute_partitioned(vertices: &[Vertex], indices: &[i32], workers: usize) -> AreaStatistics {
    let triangle_count = indices.len() / 3;
    if triangle_count == 0 {
        return AreaStatistics::empty();
    }

    // Balanced split: batch i spans [i*T/W, (i+1)*T/W), so batch sizes
    // differ by at most one triangle and no remainder is lost.
    let batch_count = workers.min(triangle_count).max(1);
    let merged = (0..batch_count)
        .into_par_iter()
        .map(|batch| {
            let start = batch * triangle_count / batch_count;
            let end = (batch + 1) * triangle_count / batch_count;
            reduce_batch(vertices, indices, start, end)
        })
        .reduce(BatchPartial::identity, BatchPartial::merge);

    AreaStatistics {
        min_area: merged.min,
        max_area: merged.max,
        avg_area: merged.area_sum / triangle_count as f64,
    }
}

fn reduce_batch(vertices: &[Vertex], indices: &[i32], start: usize, end: usize) -> BatchPartial {
    let mut partial = BatchPartial::identity();
    for i in start..end {
        // Area from the face normal, recomputed fresh per triangle and
        // independent of the accumulated vertex normals.
        partial.observe(Triangle::at(indices, i * 3).area(vertices));
    }
    partial
}
