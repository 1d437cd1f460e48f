// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Weighted sample elimination.
//!
//! Thins an oversampled point set down to a requested count by repeatedly removing the point
//! whose neighbourhood is most crowded.  What survives is evenly spread, close to a Poisson-disk
//! (blue noise) distribution, which plain random subsampling does not give.
//!
//! Every point starts with a weight equal to the sum of `(1 - d / 2r)^8` over its neighbours
//! closer than the influence radius `r`.  The heaviest point is removed, its contribution is taken
//! back out of each neighbour's weight, and the loop repeats until the requested count is left.

use crate::error::{ensure_positive, ModelError, Result};
use crate::geometry::PointCloud;
use crate::spatial::SpatialHashGrid;
use crate::util::timer::Timer;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Falloff exponent of the weight kernel.
pub const ELIMINATION_ALPHA: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EliminationParams {
    /// Edge length of the hash grid cells
    pub cell_size: f32,
    /// Neighbours closer than this contribute to a point's weight
    pub influence_radius: f32,
}

impl EliminationParams {
    pub fn new(cell_size: f32, influence_radius: f32) -> Self {
        Self {
            cell_size,
            influence_radius,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("cell_size", self.cell_size)?;
        ensure_positive("influence_radius", self.influence_radius)
    }
}

/// Weight one point at `distance` adds to another.  Zero at twice the influence radius and
/// beyond.
#[inline]
pub fn weight_contribution(distance: f32, influence_radius: f32) -> f32 {
    let base = (1.0 - distance / (2.0 * influence_radius)).max(0.0);
    base.powi(ELIMINATION_ALPHA)
}

const NOT_IN_HEAP: usize = usize::MAX;

/// Max-heap of point indices keyed by a weight table.
///
/// The heap stores indices only.  `slots` maps each point back to its place in the heap so a
/// weight change can be repaired in place.  Ties on weight go to the higher point index.
struct WeightHeap {
    weights: Vec<f32>,
    heap: Vec<usize>,
    slots: Vec<usize>,
}

impl WeightHeap {
    fn new(weights: Vec<f32>) -> Self {
        let count = weights.len();
        let mut heap = Self {
            weights,
            heap: (0..count).collect(),
            slots: (0..count).collect(),
        };
        for slot in (0..count / 2).rev() {
            heap.sift_down(slot);
        }
        heap
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, index: usize) -> bool {
        self.slots[index] != NOT_IN_HEAP
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        match self.weights[a].total_cmp(&self.weights[b]) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => a > b,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots[self.heap[i]] = i;
        self.slots[self.heap[j]] = j;
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < self.heap.len() && self.outranks(self.heap[right], self.heap[left]) {
                best = right;
            }
            if !self.outranks(self.heap[best], self.heap[slot]) {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let top = *self.heap.first()?;
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();
        self.slots[top] = NOT_IN_HEAP;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Lowers the weight of a point still in the heap.  Lowering can only push an entry down.
    fn decrease(&mut self, index: usize, amount: f32) {
        let slot = self.slots[index];
        if slot == NOT_IN_HEAP {
            return;
        }
        self.weights[index] -= amount;
        self.sift_down(slot);
    }
}

/// Initial weight of every point: the kernel summed over its neighbours within the influence
/// radius.
pub fn compute_weights(grid: &SpatialHashGrid<'_>, influence_radius: f32) -> Vec<f32> {
    let positions = grid.positions();
    let mut weights = Vec::with_capacity(positions.len());
    let mut neighbors = Vec::new();
    for (index, &position) in positions.iter().enumerate() {
        neighbors.clear();
        grid.neighbors(index, influence_radius, &mut neighbors);
        let weight = neighbors
            .iter()
            .map(|&n| weight_contribution(positions[n].distance(position), influence_radius))
            .sum();
        weights.push(weight);
    }
    weights
}

/// Indices of the `desired` points kept out of `positions`, in ascending index order.
///
/// Fails if `desired` exceeds the number of points; asking for exactly as many as there are
/// keeps everything.
pub fn eliminate_indices(
    positions: &[Vec3],
    desired: usize,
    params: &EliminationParams,
) -> Result<Vec<usize>> {
    params.validate()?;
    if desired > positions.len() {
        return Err(ModelError::NotEnoughSamples {
            desired,
            available: positions.len(),
        });
    }

    let _timer = Timer::new("sample elimination");
    let grid = SpatialHashGrid::build(positions, params.cell_size)?;
    let mut heap = WeightHeap::new(compute_weights(&grid, params.influence_radius));

    let to_remove = positions.len() - desired;
    let progress_step = (to_remove / 10).max(1);
    let mut neighbors = Vec::new();
    while heap.len() > desired {
        let Some(victim) = heap.pop() else {
            break;
        };
        let removed = positions.len() - heap.len();
        if removed % progress_step == 0 {
            log::debug!("eliminated {} / {} samples", removed, to_remove);
        }

        neighbors.clear();
        grid.neighbors(victim, params.influence_radius, &mut neighbors);
        for &neighbor in &neighbors {
            if heap.contains(neighbor) {
                let distance = positions[neighbor].distance(positions[victim]);
                heap.decrease(neighbor, weight_contribution(distance, params.influence_radius));
            }
        }
    }

    let kept: Vec<usize> = (0..positions.len()).filter(|&i| heap.contains(i)).collect();
    log::info!(
        "sample elimination kept {} of {} samples",
        kept.len(),
        positions.len()
    );
    Ok(kept)
}

/// Thins `cloud` down to `desired` samples, keeping each survivor's normal and texcoord with its
/// position.
pub fn sample_elimination(
    cloud: &PointCloud,
    desired: usize,
    params: &EliminationParams,
) -> Result<PointCloud> {
    if !cloud.is_aligned() {
        return Err(ModelError::invalid(
            "cloud",
            "positions, normals and texcoords differ in length",
        ));
    }
    let kept = eliminate_indices(&cloud.positions, desired, params)?;
    Ok(cloud.select(&kept))
}


// End of File
