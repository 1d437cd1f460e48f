// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::{Vec2, Vec3};

/// Surface samples stored as parallel arrays: `positions[i]`, `normals[i]` and `texcoords[i]`
/// describe sample `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
            texcoords: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn push(&mut self, position: Vec3, normal: Vec3, texcoord: Vec2) {
        self.positions.push(position);
        self.normals.push(normal);
        self.texcoords.push(texcoord);
    }

    pub fn is_aligned(&self) -> bool {
        self.normals.len() == self.positions.len() && self.texcoords.len() == self.positions.len()
    }

    /// Copies the samples at `indices`, in the given order, keeping each sample's normal and
    /// texcoord attached to its position.
    pub fn select(&self, indices: &[usize]) -> PointCloud {
        let mut out = PointCloud::with_capacity(indices.len());
        for &index in indices {
            out.push(
                self.positions[index],
                self.normals[index],
                self.texcoords[index],
            );
        }
        out
    }
}

// End of File
