// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Runs a whole [`ModelConfig`] request against a scene.

use crate::config::{HairMethod, ModelConfig};
use crate::error::{ModelError, Result};
use crate::geometry::ShapeData;
use crate::model::{
    generate_tree, make_dense_hair, make_displacement, make_grass, make_hair,
    make_hair_sample_elimination, make_terrain, make_woods,
};
use crate::noise::NoiseField;
use crate::scene::{Instance, SceneData};
use crate::util::timer::Timer;
use glam::Vec3;

/// What a request added to the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub trees: usize,
    pub branches: usize,
    pub displaced_shapes: usize,
    pub hair_strands: usize,
    pub grass_blades: usize,
}

fn shape_of(scene: &SceneData, instance_name: &str) -> Result<usize> {
    let instance = scene.instance_by_name(instance_name)?;
    Ok(scene.instance(instance)?.shape)
}

/// Performs every generation step `config.request` asks for, in a fixed order: woods, tree,
/// terrain, displacement, hair, grass and finally density mapped hair.
///
/// Stops at the first failure; steps that already ran keep their output in `scene`.
pub fn apply_request(scene: &mut SceneData, config: &ModelConfig) -> Result<GenerationSummary> {
    config.validate()?;
    let _timer = Timer::new("generation request");
    let request = &config.request;
    let noise = config.noise();
    let mut summary = GenerationSummary::default();

    if request.woods {
        let base = scene.instance_by_name(grass_base(config)?)?;
        let trees = make_woods(scene, base, &config.woods, &config.tree)?;
        summary.trees += trees.len();
        summary.branches += trees.iter().map(|t| t.branches.len()).sum::<usize>();
    }

    if request.tree {
        let tree = generate_tree(scene, Vec3::ZERO, Vec3::Y, &config.tree)?;
        summary.trees += 1;
        summary.branches += tree.branches.len();
    }

    if let Some(name) = &request.terrain {
        let shape = shape_of(scene, name)?;
        make_terrain(scene.shape_mut(shape)?, &config.terrain, &noise)?;
        summary.displaced_shapes += 1;
    }

    if let Some(name) = &request.displacement {
        let shape = shape_of(scene, name)?;
        make_displacement(scene.shape_mut(shape)?, &config.displacement, &noise)?;
        summary.displaced_shapes += 1;
    }

    if request.hair.is_some() && request.hair_method != HairMethod::Dense {
        summary.hair_strands += grow_hair(scene, config, &noise)?;
    }

    if let Some(pattern) = &request.grass {
        let base = scene.instance_by_name(grass_base(config)?)?;
        let templates: Vec<Instance> = scene
            .instances
            .iter()
            .zip(&scene.instance_names)
            .filter(|(_, name)| !name.is_empty() && name.contains(pattern.as_str()))
            .map(|(instance, _)| *instance)
            .collect();
        summary.grass_blades += make_grass(scene, base, &templates, &config.grass)?;
    }

    if request.hair.is_some() && request.hair_method == HairMethod::Dense {
        summary.hair_strands += grow_hair(scene, config, &noise)?;
    }

    log::info!("generation finished: {:?}", summary);
    Ok(summary)
}

fn grass_base(config: &ModelConfig) -> Result<&str> {
    config
        .request
        .grass_base
        .as_deref()
        .ok_or_else(|| ModelError::invalid("grass_base", "required when grass or woods are requested"))
}

/// Replaces the shape of the hair instance with strands grown from the hair base, and renames it
/// "hair".  Returns the number of strands.
fn grow_hair(scene: &mut SceneData, config: &ModelConfig, noise: &NoiseField) -> Result<usize> {
    let request = &config.request;
    let (Some(hair_name), Some(base_name)) = (&request.hair, &request.hair_base) else {
        return Err(ModelError::invalid("hair_base", "required when hair is requested"));
    };

    let hair_shape = shape_of(scene, hair_name)?;
    let base_instance = *scene.instance(scene.instance_by_name(base_name)?)?;
    // Copied up front: the hair may be grown on its own shape.
    let base = scene.shape(base_instance.shape)?.clone();

    let mut hair = ShapeData::new();
    match request.hair_method {
        HairMethod::Random => make_hair(&mut hair, &base, &config.hair, noise)?,
        HairMethod::SampleElimination => {
            make_hair_sample_elimination(&mut hair, &base, &config.hair, noise)?
        }
        HairMethod::Dense => {
            let texture = scene.color_texture(base_instance.material)?;
            make_dense_hair(&mut hair, &base, &texture, &config.hair, noise)?
        }
    }

    *scene.shape_mut(hair_shape)? = hair;
    scene.shape_names[hair_shape] = "hair".to_string();
    Ok(config.hair.num)
}


// End of File
