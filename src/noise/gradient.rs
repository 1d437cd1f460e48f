// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::lattice::{gradient, split_cell};
use glam::{IVec3, Vec3};

/// Perlin-style gradient noise.  Returns values in approximately [-1, 1], zero on every lattice
/// point.
#[inline]
pub(crate) fn perlin3(seed: u64, p: Vec3) -> f32 {
    let (cell, frac) = split_cell(p);
    let blend = Vec3::new(fade(frac.x), fade(frac.y), fade(frac.z));

    // Corner bits: x in bit 0, y in bit 1, z in bit 2.
    (0..8)
        .map(|corner: i32| {
            let offset = IVec3::new(corner & 1, (corner >> 1) & 1, corner >> 2);
            let ramp = gradient(seed, cell + offset).dot(frac - offset.as_vec3());
            let weight = Vec3::select(offset.cmpeq(IVec3::ZERO), Vec3::ONE - blend, blend);
            ramp * weight.x * weight.y * weight.z
        })
        .sum()
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}


// End of File
