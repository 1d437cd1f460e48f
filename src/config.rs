// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Generation requests and their parameters, loadable from TOML.
//!
//! ```toml
//! seed = 7
//!
//! [request]
//! terrain = "ground"
//! hair = "fur"
//! hair_base = "body"
//! hair_method = "sample_elimination"
//!
//! [terrain]
//! height = 0.2
//! mode = "voronoise"
//! ```
//!
//! Every table and every field is optional and falls back to its default.

use crate::error::{ModelError, Result};
use crate::model::{
    DisplacementParams, GrassParams, HairParams, TerrainParams, TreeParams, WoodsParams,
};
use crate::noise::NoiseField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How hair roots are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairMethod {
    /// Area weighted random samples.
    #[default]
    Random,
    /// Oversampled random samples thinned to an even spread.
    SampleElimination,
    /// Random samples weighted by the brightness of the base material's color texture.
    Dense,
}

/// What to generate, and on which named instances.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelRequest {
    /// Instance whose shape is raised into terrain
    pub terrain: Option<String>,
    /// Instance whose shape is displaced
    pub displacement: Option<String>,
    /// Instance whose shape is replaced by hair strands
    pub hair: Option<String>,
    /// Instance the hair grows from
    pub hair_base: Option<String>,
    pub hair_method: HairMethod,
    /// Every instance whose name contains this is used as a grass template
    pub grass: Option<String>,
    /// Instance the grass and woods grow on
    pub grass_base: Option<String>,
    /// Grow a single tree at the origin, along +Y
    pub tree: bool,
    /// Plant trees over `grass_base`
    pub woods: bool,
}

impl ModelRequest {
    pub fn validate(&self) -> Result<()> {
        if self.hair.is_some() && self.hair_base.is_none() {
            return Err(ModelError::invalid("hair_base", "required when hair is requested"));
        }
        if (self.grass.is_some() || self.woods) && self.grass_base.is_none() {
            return Err(ModelError::invalid(
                "grass_base",
                "required when grass or woods are requested",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Seed of the noise field shared by terrain, displacement and hair
    pub seed: u64,
    pub request: ModelRequest,
    pub terrain: TerrainParams,
    pub displacement: DisplacementParams,
    pub hair: HairParams,
    pub grass: GrassParams,
    pub tree: TreeParams,
    pub woods: WoodsParams,
}

impl ModelConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ModelConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading model configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn noise(&self) -> NoiseField {
        NoiseField::new(self.seed)
    }

    pub fn validate(&self) -> Result<()> {
        self.request.validate()?;
        self.terrain.validate()?;
        self.displacement.validate()?;
        self.hair.validate()?;
        self.grass.validate()?;
        self.tree.validate()?;
        self.woods.validate()
    }
}


// End of File
