// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Area- and density-weighted random sampling of triangulated surfaces.

use super::point_cloud::PointCloud;
use super::shape::{interpolate_triangle, triangle_area, ShapeData};
use crate::error::{ModelError, Result};
use glam::{Vec2, Vec3};
use rand::Rng;

pub fn rand1(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>()
}

pub fn rand2(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.gen(), rng.gen())
}

pub fn rand3(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

/// Running sum of triangle areas.
pub fn sample_triangles_cdf(triangles: &[[u32; 3]], positions: &[Vec3]) -> Vec<f32> {
    let mut cdf = Vec::with_capacity(triangles.len());
    let mut sum = 0.0;
    for &[a, b, c] in triangles {
        sum += triangle_area(positions[a as usize], positions[b as usize], positions[c as usize]);
        cdf.push(sum);
    }
    cdf
}

/// Running sum of triangle areas, each scaled by the magnitude of the average per-vertex density
/// of its corners.
pub fn sample_triangles_density_cdf(
    triangles: &[[u32; 3]],
    positions: &[Vec3],
    density: &[f32],
) -> Vec<f32> {
    let mut cdf = Vec::with_capacity(triangles.len());
    let mut sum = 0.0;
    for &[a, b, c] in triangles {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let area = triangle_area(positions[a], positions[b], positions[c]);
        let weight = ((density[a] + density[b] + density[c]) / 3.0).abs();
        sum += area * weight;
        cdf.push(sum);
    }
    cdf
}

/// Picks an element from `cdf` by inverse transform and a uniformly distributed point inside it.
/// Returns the element index and the barycentric coordinates of the point.
pub fn sample_triangles(cdf: &[f32], re: f32, ruv: Vec2) -> (usize, Vec2) {
    let total = cdf.last().copied().unwrap_or(0.0);
    let target = re * total;
    let element = cdf.partition_point(|&c| c <= target).min(cdf.len().saturating_sub(1));
    let su = ruv.x.sqrt();
    (element, Vec2::new(1.0 - su, ruv.y * su))
}

/// Draws `num` samples from the surface of `shape`, area weighted.
pub fn sample_shape(shape: &ShapeData, num: usize, rng: &mut impl Rng) -> Result<PointCloud> {
    let triangles = shape.surface_triangles();
    let cdf = sample_triangles_cdf(&triangles, &shape.positions);
    sample_with_cdf(shape, &triangles, &cdf, num, rng)
}

/// Draws `num` samples from the surface of `shape`, weighted by area times the per-vertex
/// `density`.
pub fn sample_shape_with_density(
    shape: &ShapeData,
    density: &[f32],
    num: usize,
    rng: &mut impl Rng,
) -> Result<PointCloud> {
    if density.len() != shape.positions.len() {
        return Err(ModelError::invalid(
            "density",
            format!(
                "expected {} per-vertex values, got {}",
                shape.positions.len(),
                density.len()
            ),
        ));
    }
    let triangles = shape.surface_triangles();
    let cdf = sample_triangles_density_cdf(&triangles, &shape.positions, density);
    sample_with_cdf(shape, &triangles, &cdf, num, rng)
}

fn sample_with_cdf(
    shape: &ShapeData,
    triangles: &[[u32; 3]],
    cdf: &[f32],
    num: usize,
    rng: &mut impl Rng,
) -> Result<PointCloud> {
    let total = cdf.last().copied().unwrap_or(0.0);
    if !(total > 0.0) {
        return Err(ModelError::EmptySurface {
            triangles: triangles.len(),
        });
    }

    let has_normals = shape.normals.len() == shape.positions.len();
    let has_texcoords = shape.texcoords.len() == shape.positions.len();

    let mut samples = PointCloud::with_capacity(num);
    for _ in 0..num {
        let re = rand1(rng);
        let ruv = rand2(rng);
        let (element, uv) = sample_triangles(cdf, re, ruv);
        let [a, b, c] = triangles[element];
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let (p0, p1, p2) = (shape.positions[a], shape.positions[b], shape.positions[c]);

        let face_normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
        let normal = if has_normals {
            interpolate_triangle(shape.normals[a], shape.normals[b], shape.normals[c], uv)
                .try_normalize()
                .unwrap_or(face_normal)
        } else {
            face_normal
        };
        let texcoord = if has_texcoords {
            interpolate_triangle(shape.texcoords[a], shape.texcoords[b], shape.texcoords[c], uv)
        } else {
            uv
        };

        samples.push(interpolate_triangle(p0, p1, p2, uv), normal, texcoord);
    }
    Ok(samples)
}


// End of File
