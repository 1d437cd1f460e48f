// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::{Vec2, Vec3, Vec4};

/// Indexed surface, line or point geometry in CPU memory.
///
/// Per-vertex arrays (`positions`, `normals`, `texcoords`, `colors`, `radius`) are index-aligned
/// whenever they are non-empty.  Element arrays reference vertices by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub colors: Vec<Vec4>,
    pub radius: Vec<f32>,

    pub points: Vec<u32>,
    pub lines: Vec<[u32; 2]>,
    pub triangles: Vec<[u32; 3]>,
    pub quads: Vec<[u32; 4]>,
}

impl ShapeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All surface elements as triangles: the explicit triangles followed by the split quads.
    pub fn surface_triangles(&self) -> Vec<[u32; 3]> {
        let mut triangles = self.triangles.clone();
        triangles.extend(quads_to_triangles(&self.quads));
        triangles
    }

    /// Recomputes `normals` from the current positions and topology.
    ///
    /// Surfaces get area-weighted vertex normals, polylines get averaged segment tangents, and
    /// anything else points along +Z.  Every resulting normal is unit length: a vertex whose
    /// accumulated normal vanishes keeps its previous normal, or +Z if it had none.
    pub fn compute_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.positions.len()];

        if !self.triangles.is_empty() || !self.quads.is_empty() {
            for [a, b, c] in self.surface_triangles() {
                let (a, b, c) = (a as usize, b as usize, c as usize);
                let p0 = self.positions[a];
                let weighted = (self.positions[b] - p0).cross(self.positions[c] - p0);
                accumulated[a] += weighted;
                accumulated[b] += weighted;
                accumulated[c] += weighted;
            }
        } else if !self.lines.is_empty() {
            for &[a, b] in &self.lines {
                let (a, b) = (a as usize, b as usize);
                let tangent = (self.positions[b] - self.positions[a]).normalize_or_zero();
                accumulated[a] += tangent;
                accumulated[b] += tangent;
            }
        }

        let previous = std::mem::take(&mut self.normals);
        self.normals = accumulated
            .into_iter()
            .enumerate()
            .map(|(index, normal)| {
                normal
                    .try_normalize()
                    .or_else(|| previous.get(index).and_then(|n| n.try_normalize()))
                    .unwrap_or(Vec3::Z)
            })
            .collect();
    }

    /// Appends an open polyline through `positions` with per-vertex `colors` and a constant
    /// `thickness`.
    pub fn add_polyline(&mut self, positions: &[Vec3], colors: &[Vec4], thickness: f32) {
        debug_assert_eq!(positions.len(), colors.len());
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(positions);
        self.colors.extend_from_slice(colors);
        self.radius
            .extend(std::iter::repeat(thickness).take(positions.len()));
        for index in 0..positions.len().saturating_sub(1) as u32 {
            self.lines.push([offset + index, offset + index + 1]);
        }
    }
}

/// Splits quads into triangles.  Degenerate quads (third and fourth index equal) produce a single
/// triangle.
pub fn quads_to_triangles(quads: &[[u32; 4]]) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(quads.len() * 2);
    for &[x, y, z, w] in quads {
        triangles.push([x, y, w]);
        if z != w {
            triangles.push([z, w, y]);
        }
    }
    triangles
}

pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    (p1 - p0).cross(p2 - p0).length() * 0.5
}

/// Barycentric interpolation with `uv` weighting the second and third corner.
pub fn interpolate_triangle<T>(p0: T, p1: T, p2: T, uv: Vec2) -> T
where
    T: std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T>,
{
    p0 * (1.0 - uv.x - uv.y) + p1 * uv.x + p2 * uv.y
}


// End of File
