// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Fields built from distances to a jittered lattice: voronoise, cell border distance and smooth
//! voronoi.

use super::lattice::{hash4, smoothstep, split_cell};
use glam::{IVec3, Vec3};

/// Blend between value noise (`u = 0`) and cell noise (`u = 1`).  `v` controls how smoothly
/// neighbouring cells are weighted together: `v = 1` averages the 5x5x5 neighbourhood with a
/// broad kernel, `v = 0` approaches a hard nearest-cell pick.
pub(crate) fn voronoise(seed: u64, x: Vec3, u: f32, v: f32) -> f32 {
    let (cell, frac) = split_cell(x);

    // 31 rather than 63 keeps the kernel power within f32 range.
    let smoothness = 1.0 + 31.0 * (1.0 - v).powi(4);

    let mut va = 0.0f32;
    let mut wt = 0.0f32;
    for k in -2..=2 {
        for j in -2..=2 {
            for i in -2..=2 {
                let offset = IVec3::new(i, j, k);
                let hashed = hash4(seed, cell + offset);
                let jitter = hashed.truncate() * u;
                let r = offset.as_vec3() - frac + jitter;
                let w = (1.0 - smoothstep(0.0, 1.414, r.length())).powf(smoothness);
                va += w * hashed.w;
                wt += w;
            }
        }
    }

    if wt > 0.0 {
        va / wt
    } else {
        log::debug!("voronoise weight vanished at {}", x);
        0.0
    }
}

/// Distance from `x` to the nearest border between jittered lattice cells.
pub(crate) fn cell_distance(seed: u64, x: Vec3) -> f32 {
    let (cell, frac) = split_cell(x);

    // nearest feature point; a point two cells away can beat the own cell's point
    let mut nearest_offset = IVec3::ZERO;
    let mut nearest = Vec3::ZERO;
    let mut res = f32::MAX;
    for k in -2..=2 {
        for j in -2..=2 {
            for i in -2..=2 {
                let offset = IVec3::new(i, j, k);
                let r = offset.as_vec3() + hash4(seed, cell + offset).truncate() - frac;
                let d = r.length_squared();
                if d < res {
                    res = d;
                    nearest = r;
                    nearest_offset = offset;
                }
            }
        }
    }

    // distance to the bisector planes shared with every other feature point
    res = 8.0;
    for k in -2..=2 {
        for j in -2..=2 {
            for i in -2..=2 {
                let offset = nearest_offset + IVec3::new(i, j, k);
                let r = offset.as_vec3() + hash4(seed, cell + offset).truncate() - frac;
                let between = r - nearest;
                if between.length_squared() > 1e-5 {
                    res = res.min((0.5 * (nearest + r)).dot(between.normalize()));
                }
            }
        }
    }
    res
}

/// Cell border distance with the region right at the border flattened to zero.
pub(crate) fn border(seed: u64, x: Vec3) -> f32 {
    let d = cell_distance(seed, x);
    d * smoothstep(0.0, 0.05, d)
}

/// Soft minimum of the distances to the 3x3x3 jittered neighbourhood.  Unlike the plain nearest
/// distance it has no creases where the nearest point changes.
pub(crate) fn smooth_voronoi(seed: u64, x: Vec3) -> f32 {
    let (cell, frac) = split_cell(x);

    let mut res = 0.0f32;
    for k in -1..=1 {
        for j in -1..=1 {
            for i in -1..=1 {
                let offset = IVec3::new(i, j, k);
                let r = offset.as_vec3() - frac + hash4(seed, cell + offset).truncate();
                let d = r.length_squared();
                res += 1.0 / d.powi(8);
            }
        }
    }

    if res.is_finite() && res > 0.0 {
        (1.0 / res).powf(1.0 / 16.0)
    } else {
        0.0
    }
}


// End of File
