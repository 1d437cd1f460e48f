// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::error::{ensure_positive, Result};
use glam::{IVec3, Vec3};
use rustc_hash::FxHashMap;

/// Buckets a fixed set of points into cubic cells for radius-neighbour queries.
///
/// The grid borrows the positions it was built from and is never updated afterwards.  Queries
/// accept any radius: they scan as many rings of cells as the radius needs.
pub struct SpatialHashGrid<'a> {
    positions: &'a [Vec3],
    /// Edge length of a cell
    cell_size: f32,
    /// Maps cell coordinates to the indices of the points inside, in ascending index order
    cells: FxHashMap<IVec3, Vec<usize>>,
    /// Occupied cells ordered by z, then y, then x, matching the scan order of a query
    occupied: Vec<IVec3>,
    /// Component-wise bounds of the occupied cells
    min_cell: IVec3,
    max_cell: IVec3,
}

impl<'a> SpatialHashGrid<'a> {
    pub fn build(positions: &'a [Vec3], cell_size: f32) -> Result<Self> {
        ensure_positive("cell_size", cell_size)?;
        let mut cells: FxHashMap<IVec3, Vec<usize>> = FxHashMap::default();
        for (index, &position) in positions.iter().enumerate() {
            cells
                .entry(Self::cell_of(position, cell_size))
                .or_default()
                .push(index);
        }
        let mut occupied: Vec<IVec3> = cells.keys().copied().collect();
        occupied.sort_unstable_by_key(|cell| (cell.z, cell.y, cell.x));
        let (min_cell, max_cell) = occupied.iter().fold(
            (IVec3::splat(i32::MAX), IVec3::splat(i32::MIN)),
            |(lo, hi), &cell| (lo.min(cell), hi.max(cell)),
        );
        Ok(Self {
            positions,
            cell_size,
            cells,
            occupied,
            min_cell,
            max_cell,
        })
    }

    fn cell_of(position: Vec3, cell_size: f32) -> IVec3 {
        (position / cell_size).floor().as_ivec3()
    }

    pub fn positions(&self) -> &'a [Vec3] {
        self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Indices of every point within `radius` of `point`, except `skip`.  Results are appended to
    /// `neighbors` in cell scan order.
    pub fn neighbors_of_point(
        &self,
        point: Vec3,
        radius: f32,
        skip: Option<usize>,
        neighbors: &mut Vec<usize>,
    ) {
        if !(radius >= 0.0) {
            return;
        }
        let center = Self::cell_of(point, self.cell_size);
        let rings = (radius / self.cell_size).ceil() as i32;
        let radius_squared = radius * radius;

        // Cells outside the occupied bounds hold nothing.
        let lo = offset_cell(center, -rings).max(self.min_cell);
        let hi = offset_cell(center, rings).min(self.max_cell);
        if lo.cmpgt(hi).any() {
            return;
        }

        let mut visit = |indices: &[usize]| {
            for &index in indices {
                if Some(index) == skip {
                    continue;
                }
                if self.positions[index].distance_squared(point) <= radius_squared {
                    neighbors.push(index);
                }
            }
        };

        let extent = hi.as_i64vec3() - lo.as_i64vec3() + 1;
        let scanned_cells = extent.x.saturating_mul(extent.y).saturating_mul(extent.z);
        if scanned_cells > self.occupied.len() as i64 {
            // Sparser to walk the occupied cells than the box around the query.
            for cell in &self.occupied {
                if cell.cmpge(lo).all() && cell.cmple(hi).all() {
                    if let Some(indices) = self.cells.get(cell) {
                        visit(indices.as_slice());
                    }
                }
            }
            return;
        }

        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    if let Some(indices) = self.cells.get(&IVec3::new(x, y, z)) {
                        visit(indices.as_slice());
                    }
                }
            }
        }
    }

    /// Indices of every other point within `radius` of the point at `center_index`.
    pub fn neighbors(&self, center_index: usize, radius: f32, neighbors: &mut Vec<usize>) {
        self.neighbors_of_point(self.positions[center_index], radius, Some(center_index), neighbors);
    }

    pub fn query(&self, center_index: usize, radius: f32) -> Vec<usize> {
        let mut neighbors = Vec::new();
        self.neighbors(center_index, radius, &mut neighbors);
        neighbors
    }
}

fn offset_cell(cell: IVec3, rings: i32) -> IVec3 {
    IVec3::new(
        cell.x.saturating_add(rings),
        cell.y.saturating_add(rings),
        cell.z.saturating_add(rings),
    )
}


// End of File
