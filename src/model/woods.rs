// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::tree::{generate_tree, TreeParams, TreeSkeleton};
use crate::error::{ensure_nonzero, ModelError, Result};
use crate::geometry::sampling::{rand1, sample_shape};
use crate::scene::SceneData;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WoodsParams {
    pub count: usize,
    /// Each tree is scaled by a factor drawn from `1 ± size_variation`
    pub size_variation: f32,
    pub seed: u64,
}

impl Default for WoodsParams {
    fn default() -> Self {
        Self {
            count: 10,
            size_variation: 0.2,
            seed: 42,
        }
    }
}

impl WoodsParams {
    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("count", self.count)?;
        // At 1 a tree could be scaled down to nothing.
        if !(0.0..1.0).contains(&self.size_variation) {
            return Err(ModelError::invalid(
                "size_variation",
                format!("must be within [0, 1), got {}", self.size_variation),
            ));
        }
        Ok(())
    }
}

/// Grows a tree at each of `params.count` random points on the instance `base`, along the surface
/// normal.  Tree `i` uses `tree.seed + i`.
pub fn make_woods(
    scene: &mut SceneData,
    base: usize,
    params: &WoodsParams,
    tree: &TreeParams,
) -> Result<Vec<TreeSkeleton>> {
    params.validate()?;
    tree.validate()?;
    let base = *scene.instance(base)?;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let sites = sample_shape(scene.shape(base.shape)?, params.count, &mut rng)?;

    let mut trees = Vec::with_capacity(sites.len());
    for (index, (&position, &normal)) in sites.positions.iter().zip(&sites.normals).enumerate() {
        let size = 1.0 + params.size_variation * (2.0 * rand1(&mut rng) - 1.0);
        let tree_params = TreeParams {
            seed: tree.seed.wrapping_add(index as u64),
            ..tree.scaled(size)
        };
        let start = base.frame.transform_point3(position);
        let up = base
            .frame
            .transform_vector3(normal)
            .try_normalize()
            .unwrap_or(Vec3::Y);
        log::debug!("tree {} at {:?}, size {:.2}", index, start, size);
        trees.push(generate_tree(scene, start, up, &tree_params)?);
    }
    log::info!("planted {} trees", trees.len());
    Ok(trees)
}


// End of File
