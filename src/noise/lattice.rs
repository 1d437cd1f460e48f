// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Seeded integer hashing of lattice cells.  Every noise primitive derives its per-cell randomness
//! from here, so identical seeds and cells always give identical values on every platform.

use glam::{IVec3, Vec3, Vec4};
use std::f32::consts::TAU;

const SEED_SALT: u64 = 0x5851_F42D_4C95_7F2D;
const COORD_MIX: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Folds the cell coordinates into the seed one axis at a time, then avalanches the result.
#[inline]
pub(crate) fn cell_hash(seed: u64, cell: IVec3) -> u64 {
    let folded = cell.to_array().into_iter().fold(seed ^ SEED_SALT, |h, c| {
        (h ^ c as i64 as u64).wrapping_mul(COORD_MIX).rotate_left(31)
    });
    finalize(folded)
}

/// Murmur3 64-bit finalizer.
#[inline]
fn finalize(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    k ^= k >> 33;
    k = k.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    k ^ (k >> 33)
}

/// Four independent values in `[0, 1)` for a lattice cell: a jitter offset in `xyz` and a cell
/// value in `w`.
#[inline]
pub(crate) fn hash4(seed: u64, cell: IVec3) -> Vec4 {
    let h = cell_hash(seed, cell);
    let channel = |shift: u32| ((h >> shift) & 0xffff) as f32 / 65536.0;
    Vec4::new(channel(0), channel(16), channel(32), channel(48))
}

/// Unit gradient for a lattice corner, uniformly distributed on the sphere.
#[inline]
pub(crate) fn gradient(seed: u64, cell: IVec3) -> Vec3 {
    let hash = cell_hash(seed, cell);
    let u = ((hash >> 32) as f32) / (u32::MAX as f32);
    let v = (hash & 0xffff_ffff) as f32 / (u32::MAX as f32);
    let theta = TAU * u;
    let z = 2.0 * v - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

#[inline]
pub(crate) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Splits `p` into its lattice cell and the offset inside that cell.
#[inline]
pub(crate) fn split_cell(p: Vec3) -> (IVec3, Vec3) {
    let floor = p.floor();
    (floor.as_ivec3(), p - floor)
}


// End of File
