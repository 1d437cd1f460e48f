// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # procgeo
//!
//! Deterministic procedural detail for triangulated surfaces: terrain relief, noise displacement,
//! hair strands, scattered grass and trees grown by space colonization.
//!
//! Every generator takes its randomness from an explicit seed, so the same parameters always
//! produce bit-identical geometry.

pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod noise;
pub mod pipeline;
pub mod sample_elimination;
pub mod scene;
pub mod spatial;
pub mod util;

pub use config::{HairMethod, ModelConfig, ModelRequest};
pub use error::{ModelError, Result};
pub use noise::NoiseField;
pub use pipeline::{apply_request, GenerationSummary};
pub use scene::SceneData;

use logging::LoggingConfig;

/// Logging setup covering this crate and its logging crate.
pub fn logging_config() -> LoggingConfig {
    LoggingConfig::new(vec![env!("CARGO_PKG_NAME"), "procgeo_logging"])
}

// End of File
