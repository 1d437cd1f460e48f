// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Hair strands grown from surface samples.

use crate::error::{ensure_nonzero, ensure_positive, ModelError, Result};
use crate::geometry::sampling::{sample_shape, sample_shape_with_density};
use crate::geometry::{PointCloud, ShapeData};
use crate::noise::NoiseField;
use crate::sample_elimination::{sample_elimination, EliminationParams};
use crate::scene::TextureSampler;
use crate::util::color::srgb8;
use crate::util::timer::Timer;
use glam::Vec4;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Polyline radius of every strand.
pub const HAIR_THICKNESS: f32 = 0.0001;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HairParams {
    pub num: usize,
    /// Segments per strand
    pub steps: usize,
    pub length: f32,
    /// Frequency of the noise bending the strands
    pub scale: f32,
    pub strength: f32,
    pub gravity: f32,
    pub bottom: Vec4,
    pub top: Vec4,
    pub influence_radius: f32,
    pub cell_size: f32,
    /// Roots drawn per kept root before sample elimination
    pub oversampling: usize,
    pub seed: u64,
}

impl Default for HairParams {
    fn default() -> Self {
        Self {
            num: 100_000,
            steps: 1,
            length: 0.02,
            scale: 250.0,
            strength: 0.01,
            gravity: 0.0,
            bottom: srgb8(25, 25, 25),
            top: srgb8(244, 164, 96),
            influence_radius: 0.005,
            cell_size: 0.005,
            oversampling: 5,
            seed: 19_873_991,
        }
    }
}

impl HairParams {
    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("num", self.num)?;
        ensure_nonzero("steps", self.steps)?;
        ensure_nonzero("oversampling", self.oversampling)?;
        ensure_positive("length", self.length)?;
        ensure_positive("scale", self.scale)?;
        ensure_positive("influence_radius", self.influence_radius)?;
        ensure_positive("cell_size", self.cell_size)?;
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(ModelError::invalid(
                "strength",
                format!("must be non-negative, got {}", self.strength),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ModelError::invalid("gravity", "must be finite"));
        }
        Ok(())
    }
}

/// Appends one strand per root to `hair`.
///
/// A strand starts along the root normal.  Each step advances `length / steps`, is pushed around
/// by vector noise and pulled down by gravity, and the next step follows the resulting segment.
fn grow_strands(hair: &mut ShapeData, roots: &PointCloud, params: &HairParams, noise: &NoiseField) {
    let segment_length = params.length / params.steps as f32;
    let mut points = Vec::with_capacity(params.steps + 1);
    let mut colors = Vec::with_capacity(params.steps + 1);

    for (&root, &normal) in roots.positions.iter().zip(&roots.normals) {
        points.clear();
        colors.clear();
        let mut point = root;
        let mut direction = normal;
        for step in 0..=params.steps {
            points.push(point);
            let t = step as f32 / params.steps as f32;
            colors.push(params.bottom.lerp(params.top, t));

            let mut next = point + direction * segment_length;
            next += noise.noise3(point * params.scale) * params.strength;
            next.y -= params.gravity;
            direction = (next - point).try_normalize().unwrap_or(direction);
            point = next;
        }
        hair.add_polyline(&points, &colors, HAIR_THICKNESS);
    }
    hair.compute_normals();
    log::info!(
        "grew {} strands with {} vertices",
        roots.len(),
        hair.positions.len()
    );
}

/// Grows `params.num` strands from uniformly random points of `base`.
pub fn make_hair(
    hair: &mut ShapeData,
    base: &ShapeData,
    params: &HairParams,
    noise: &NoiseField,
) -> Result<()> {
    params.validate()?;
    let _timer = Timer::new("hair");
    let mut rng = StdRng::seed_from_u64(params.seed);
    let roots = sample_shape(base, params.num, &mut rng)?;
    grow_strands(hair, &roots, params, noise);
    Ok(())
}

/// Like [`make_hair`], but the roots are oversampled and thinned by sample elimination so they
/// are evenly spread.
pub fn make_hair_sample_elimination(
    hair: &mut ShapeData,
    base: &ShapeData,
    params: &HairParams,
    noise: &NoiseField,
) -> Result<()> {
    params.validate()?;
    let _timer = Timer::new("hair with sample elimination");
    let mut rng = StdRng::seed_from_u64(params.seed);
    let candidates = sample_shape(base, params.num * params.oversampling, &mut rng)?;
    let roots = sample_elimination(
        &candidates,
        params.num,
        &EliminationParams::new(params.cell_size, params.influence_radius),
    )?;
    grow_strands(hair, &roots, params, noise);
    Ok(())
}

/// Like [`make_hair`], but roots are denser where `texture` is brighter.  The brightness of a
/// vertex is the mean of the RGB channels of the texture at its texcoord.
pub fn make_dense_hair(
    hair: &mut ShapeData,
    base: &ShapeData,
    texture: &impl TextureSampler,
    params: &HairParams,
    noise: &NoiseField,
) -> Result<()> {
    params.validate()?;
    if base.texcoords.len() != base.positions.len() {
        return Err(ModelError::invalid(
            "base",
            "density mapped hair needs per-vertex texcoords",
        ));
    }
    let _timer = Timer::new("dense hair");
    let density: Vec<f32> = base
        .texcoords
        .iter()
        .map(|&uv| texture.sample(uv).truncate().element_sum() / 3.0)
        .collect();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let roots = sample_shape_with_density(base, &density, params.num, &mut rng)?;
    grow_strands(hair, &roots, params, noise);
    Ok(())
}


// End of File
