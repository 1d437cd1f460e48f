// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! In-memory scene that generators read their inputs from and append their output to.
//!
//! Shapes, materials, instances and textures live in flat vectors and refer to each other by
//! index.  Generators only ever append; anything they did not create is left alone, with the one
//! exception of shapes they were explicitly asked to modify in place (terrain, displacement,
//! hair).

use crate::error::{ModelError, Result};
use crate::geometry::ShapeData;
use glam::{Affine3A, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterialKind {
    #[default]
    Matte,
    Transparent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Vec3,
    pub opacity: f32,
    /// Texture index modulating `color`.
    pub color_tex: Option<usize>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Matte,
            color: Vec3::ONE,
            opacity: 1.0,
            color_tex: None,
        }
    }
}

impl Material {
    pub fn matte(color: Vec3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn transparent(color: Vec3, opacity: f32) -> Self {
        Self {
            kind: MaterialKind::Transparent,
            color,
            opacity,
            color_tex: None,
        }
    }
}

/// A placement of a shape with a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub frame: Affine3A,
    pub shape: usize,
    pub material: usize,
}

impl Instance {
    pub fn new(frame: Affine3A, shape: usize, material: usize) -> Self {
        Self {
            frame,
            shape,
            material,
        }
    }
}

/// Evaluates a color at a surface coordinate.
pub trait TextureSampler {
    fn sample(&self, uv: Vec2) -> Vec4;
}

/// RGBA texture stored row by row, looked up with bilinear filtering and wrapping at the edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Vec4>,
}

impl Texture {
    pub fn new(width: usize, height: usize, pixels: Vec<Vec4>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return Err(ModelError::invalid(
                "pixels",
                format!(
                    "expected {}x{} pixels, got {}",
                    width,
                    height,
                    pixels.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn filled(width: usize, height: usize, color: Vec4) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn texel(&self, i: usize, j: usize) -> Vec4 {
        self.pixels[j * self.width + i]
    }
}

impl TextureSampler for Texture {
    fn sample(&self, uv: Vec2) -> Vec4 {
        if self.pixels.is_empty() {
            return Vec4::ONE;
        }
        let s = uv.x.rem_euclid(1.0) * self.width as f32;
        let t = uv.y.rem_euclid(1.0) * self.height as f32;
        let i = (s as usize).min(self.width - 1);
        let j = (t as usize).min(self.height - 1);
        let ii = (i + 1) % self.width;
        let jj = (j + 1) % self.height;
        let u = s - i as f32;
        let v = t - j as f32;

        self.texel(i, j) * (1.0 - u) * (1.0 - v)
            + self.texel(i, jj) * (1.0 - u) * v
            + self.texel(ii, j) * u * (1.0 - v)
            + self.texel(ii, jj) * u * v
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneData {
    pub shapes: Vec<ShapeData>,
    pub shape_names: Vec<String>,
    pub materials: Vec<Material>,
    pub instances: Vec<Instance>,
    pub instance_names: Vec<String>,
    pub textures: Vec<Texture>,
}

impl SceneData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, name: impl Into<String>, shape: ShapeData) -> usize {
        self.shapes.push(shape);
        self.shape_names.push(name.into());
        self.shapes.len() - 1
    }

    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    pub fn add_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Appends an unnamed instance.
    pub fn add_instance(&mut self, instance: Instance) -> usize {
        self.add_named_instance(String::new(), instance)
    }

    pub fn add_named_instance(&mut self, name: impl Into<String>, instance: Instance) -> usize {
        self.instances.push(instance);
        self.instance_names.push(name.into());
        self.instances.len() - 1
    }

    /// Index of the first instance called `name`.
    pub fn instance_by_name(&self, name: &str) -> Result<usize> {
        if name.is_empty() {
            return Err(ModelError::UnknownInstance(String::new()));
        }
        self.instance_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| ModelError::UnknownInstance(name.to_string()))
    }

    pub fn instance(&self, index: usize) -> Result<&Instance> {
        self.instances
            .get(index)
            .ok_or_else(|| ModelError::UnknownInstance(format!("#{}", index)))
    }

    pub fn shape(&self, index: usize) -> Result<&ShapeData> {
        self.shapes.get(index).ok_or(ModelError::UnknownShape(index))
    }

    pub fn shape_mut(&mut self, index: usize) -> Result<&mut ShapeData> {
        self.shapes
            .get_mut(index)
            .ok_or(ModelError::UnknownShape(index))
    }

    pub fn material(&self, index: usize) -> Result<&Material> {
        self.materials
            .get(index)
            .ok_or(ModelError::UnknownMaterial(index))
    }

    pub fn texture(&self, index: usize) -> Result<&Texture> {
        self.textures
            .get(index)
            .ok_or(ModelError::UnknownTexture(index))
    }

    /// The color texture of `material`, or a single white texel when it has none.
    pub fn color_texture(&self, material: usize) -> Result<Texture> {
        match self.material(material)?.color_tex {
            Some(index) => Ok(self.texture(index)?.clone()),
            None => Ok(Texture::filled(1, 1, Vec4::ONE)),
        }
    }
}


// End of File
