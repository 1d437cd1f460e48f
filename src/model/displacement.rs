// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Noise-driven vertex displacement along surface normals.
//!
//! Every vertex moves along its normal by `field(position * scale) * height` and gets a color
//! derived from how far it moved relative to `height`.  Normals are recomputed afterwards.

use crate::error::{ensure_nonzero, ensure_positive, ModelError, Result};
use crate::geometry::ShapeData;
use crate::noise::NoiseField;
use crate::util::color::srgb8;
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Normalized heights below this get the bottom terrain color.
pub const LOW_BAND: f32 = 0.3;
/// Normalized heights below this (and above [`LOW_BAND`]) get the middle terrain color.
pub const HIGH_BAND: f32 = 0.6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainMode {
    /// Ridged multifractal faded out with distance from `center`.
    #[default]
    Ridge,
    /// Cell-like voronoise with no falloff.
    Voronoise,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Radius of the raised region around `center`
    pub size: f32,
    pub center: Vec3,
    pub height: f32,
    pub scale: f32,
    pub octaves: u32,
    pub bottom: Vec4,
    pub middle: Vec4,
    pub top: Vec4,
    pub mode: TerrainMode,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: 0.1,
            center: Vec3::ZERO,
            height: 0.1,
            scale: 10.0,
            octaves: 8,
            bottom: srgb8(154, 205, 50),
            middle: srgb8(205, 133, 63),
            top: srgb8(240, 255, 255),
            mode: TerrainMode::Ridge,
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("size", self.size)?;
        ensure_positive("height", self.height)?;
        ensure_positive("scale", self.scale)?;
        ensure_nonzero("octaves", self.octaves as usize)
    }

    /// Color band for a displacement normalized by `height`.
    pub fn band(&self, normalized: f32) -> Vec4 {
        if normalized < LOW_BAND {
            self.bottom
        } else if normalized < HIGH_BAND {
            self.middle
        } else {
            self.top
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DisplacementMode {
    #[default]
    Turbulence,
    /// `u` and `v` are clamped to at most 1.
    Voronoise { u: f32, v: f32 },
    /// Cell borders, colored in grayscale.
    CellBorder,
    SmoothVoronoi,
    /// Voronoise, fbm and ridge added together.
    World,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplacementParams {
    pub height: f32,
    pub scale: f32,
    pub octaves: u32,
    pub bottom: Vec4,
    pub top: Vec4,
    pub mode: DisplacementMode,
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self {
            height: 0.02,
            scale: 50.0,
            octaves: 8,
            bottom: srgb8(64, 224, 208),
            top: srgb8(244, 164, 96),
            mode: DisplacementMode::Turbulence,
        }
    }
}

impl DisplacementParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("height", self.height)?;
        ensure_positive("scale", self.scale)?;
        ensure_nonzero("octaves", self.octaves as usize)?;
        if let DisplacementMode::Voronoise { u, v } = self.mode {
            if u < 0.0 || v < 0.0 {
                return Err(ModelError::invalid(
                    "mode",
                    format!("voronoise u and v must be non-negative, got {} and {}", u, v),
                ));
            }
        }
        Ok(())
    }

    fn field(&self, noise: &NoiseField, p: Vec3) -> f32 {
        match self.mode {
            DisplacementMode::Turbulence => noise.turbulence(p, self.octaves),
            DisplacementMode::Voronoise { u, v } => noise.voronoise(p, u.min(1.0), v.min(1.0)),
            DisplacementMode::CellBorder => noise.border(p),
            DisplacementMode::SmoothVoronoi => noise.smooth_voronoi(p),
            DisplacementMode::World => {
                noise.voronoise(p, 1.0, 1.0) + noise.fbm(p, 8) + noise.ridge(p, 8)
            }
        }
    }

    fn color(&self, normalized: f32) -> Vec4 {
        match self.mode {
            DisplacementMode::CellBorder => {
                let gray = normalized.clamp(0.0, 1.0);
                Vec4::new(gray, gray, gray, 1.0)
            }
            _ => self.bottom.lerp(self.top, normalized.clamp(0.0, 1.0)),
        }
    }
}

/// Moves every vertex along its normal by `amount(position)` and recolors it with
/// `color(offset)`.  Normals are recomputed afterwards.
fn displace(
    shape: &mut ShapeData,
    mut amount: impl FnMut(Vec3) -> f32,
    mut color: impl FnMut(f32) -> Vec4,
) {
    if shape.normals.len() != shape.positions.len() {
        log::debug!("shape has no vertex normals, computing them before displacement");
        shape.compute_normals();
    }

    let mut colors = Vec::with_capacity(shape.positions.len());
    for (position, normal) in shape.positions.iter_mut().zip(&shape.normals) {
        let offset = amount(*position);
        *position += *normal * offset;
        colors.push(color(offset));
    }
    shape.colors = colors;
    shape.compute_normals();
}

/// Raises terrain features on `shape` and colors them in three height bands.
pub fn make_terrain(shape: &mut ShapeData, params: &TerrainParams, noise: &NoiseField) -> Result<()> {
    params.validate()?;
    let height = params.height;
    match params.mode {
        TerrainMode::Ridge => displace(
            shape,
            |p| {
                let falloff = (1.0 - p.distance(params.center) / params.size).clamp(0.0, 1.0);
                noise.ridge(p * params.scale, params.octaves) * height * falloff
            },
            |offset| params.band(offset / height),
        ),
        TerrainMode::Voronoise => displace(
            shape,
            |p| noise.voronoise(p * params.scale, 1.0, 1.0) * height,
            |offset| params.band(offset / height),
        ),
    }
    log::info!(
        "displaced {} terrain vertices ({:?})",
        shape.positions.len(),
        params.mode
    );
    Ok(())
}

/// Displaces `shape` with the field selected by `params.mode` and colors it with a linear ramp.
pub fn make_displacement(
    shape: &mut ShapeData,
    params: &DisplacementParams,
    noise: &NoiseField,
) -> Result<()> {
    params.validate()?;
    let height = params.height;
    displace(
        shape,
        |p| params.field(noise, p * params.scale) * height,
        |offset| params.color(offset / height),
    );
    log::info!(
        "displaced {} vertices ({:?})",
        shape.positions.len(),
        params.mode
    );
    Ok(())
}


// End of File
