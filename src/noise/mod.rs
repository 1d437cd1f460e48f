// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Deterministic scalar and vector noise fields.
//!
//! A [`NoiseField`] is nothing but a seed: every method is a pure function of the seed and its
//! arguments, so evaluating the same point twice gives bit-identical results.

mod cellular;
mod gradient;
mod lattice;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Channel offsets used to decorrelate the components of vector noise.
const CHANNEL_OFFSETS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(3.0, 7.0, 11.0),
    Vec3::new(13.0, 17.0, 19.0),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseField {
    seed: u64,
}

impl NoiseField {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Gradient noise in approximately [-1, 1].
    #[inline]
    pub fn noise(&self, p: Vec3) -> f32 {
        gradient::perlin3(self.seed, p)
    }

    pub fn noise2(&self, p: Vec3) -> Vec2 {
        Vec2::new(
            self.noise(p + CHANNEL_OFFSETS[0]),
            self.noise(p + CHANNEL_OFFSETS[1]),
        )
    }

    pub fn noise3(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.noise(p + CHANNEL_OFFSETS[0]),
            self.noise(p + CHANNEL_OFFSETS[1]),
            self.noise(p + CHANNEL_OFFSETS[2]),
        )
    }

    /// Sum of `|noise(p * 2^k)|` with weight `2^-k`, for `k` in `0..octaves`.
    pub fn fbm(&self, p: Vec3, octaves: u32) -> f32 {
        let mut sum = 0.0;
        let mut weight = 1.0;
        let mut scale = 1.0;
        for _ in 0..octaves {
            sum += weight * self.noise(p * scale).abs();
            weight *= 0.5;
            scale *= 2.0;
        }
        sum
    }

    /// Same accumulation as [`fbm`](Self::fbm); call sites use the name that describes intent.
    pub fn turbulence(&self, p: Vec3, octaves: u32) -> f32 {
        self.fbm(p, octaves)
    }

    /// Sum of `(1 - |noise(p * 2^k)|)^2` with weight `2^-(k+1)`.  Sharp crests where the noise
    /// crosses zero.
    pub fn ridge(&self, p: Vec3, octaves: u32) -> f32 {
        let mut sum = 0.0;
        let mut weight = 0.5;
        let mut scale = 1.0;
        for _ in 0..octaves {
            let crest = 1.0 - self.noise(p * scale).abs();
            sum += weight * crest * crest;
            weight *= 0.5;
            scale *= 2.0;
        }
        sum
    }

    /// Blend of value noise (`u = 0`) and cell noise (`u = 1`) with kernel smoothness `v`.
    /// Result is in `[0, 1)`.
    pub fn voronoise(&self, p: Vec3, u: f32, v: f32) -> f32 {
        cellular::voronoise(self.seed, p, u, v)
    }

    /// Distance to the nearest cell border of a jittered lattice.
    pub fn cell_distance(&self, p: Vec3) -> f32 {
        cellular::cell_distance(self.seed, p)
    }

    /// [`cell_distance`](Self::cell_distance) pressed flat in a thin band around the borders.
    pub fn border(&self, p: Vec3) -> f32 {
        cellular::border(self.seed, p)
    }

    pub fn smooth_voronoi(&self, p: Vec3) -> f32 {
        cellular::smooth_voronoi(self.seed, p)
    }
}


// End of File
