// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::error::{ensure_nonzero, ModelError, Result};
use crate::geometry::frame::surface_frame;
use crate::geometry::sampling::{rand1, sample_shape};
use crate::scene::{Instance, SceneData};
use glam::{Affine3A, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassParams {
    pub num: usize,
    pub seed: u64,
}

impl Default for GrassParams {
    fn default() -> Self {
        Self {
            num: 10_000,
            seed: 69_420,
        }
    }
}

impl GrassParams {
    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("num", self.num)
    }
}

/// Local placement of one blade: stand on the surface, shrink a little, spin freely about the
/// normal and lean slightly.
fn blade_frame(position: Vec3, normal: Vec3, rng: &mut StdRng) -> Affine3A {
    let scale = 0.9 + rand1(rng) * 0.1;
    let spin = rand1(rng) * 2.0 * PI;
    let tilt = 0.1 + rand1(rng) * 0.1;
    surface_frame(position, normal)
        * Affine3A::from_scale(Vec3::splat(scale))
        * Affine3A::from_rotation_y(spin)
        * Affine3A::from_rotation_z(tilt)
}

/// Scatters copies of `templates` over the surface of the instance `base`.
///
/// Each copy keeps its template's shape and material and gets a new frame.  Returns the number of
/// instances added.
pub fn make_grass(
    scene: &mut SceneData,
    base: usize,
    templates: &[Instance],
    params: &GrassParams,
) -> Result<usize> {
    params.validate()?;
    if templates.is_empty() {
        return Err(ModelError::invalid("templates", "no grass instances to copy"));
    }
    let base = *scene.instance(base)?;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let samples = sample_shape(scene.shape(base.shape)?, params.num, &mut rng)?;

    for (&position, &normal) in samples.positions.iter().zip(&samples.normals) {
        let template = templates[rng.gen_range(0..templates.len())];
        let frame = base.frame * blade_frame(position, normal, &mut rng);
        scene.add_instance(Instance::new(frame, template.shape, template.material));
    }
    log::info!(
        "scattered {} grass blades from {} templates",
        samples.len(),
        templates.len()
    );
    Ok(samples.len())
}


// End of File
