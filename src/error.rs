// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown instance {0}")]
    UnknownInstance(String),

    #[error("unknown shape index {0}")]
    UnknownShape(usize),

    #[error("unknown material index {0}")]
    UnknownMaterial(usize),

    #[error("unknown texture index {0}")]
    UnknownTexture(usize),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("cannot keep {desired} samples out of {available}")]
    NotEnoughSamples { desired: usize, available: usize },

    #[error("cannot sample a surface with zero total weight ({triangles} triangles)")]
    EmptySurface { triangles: usize },

    #[error("I/O error while reading configuration: {0}")]
    ConfigIo(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails unless `value` is a finite number strictly greater than zero.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::invalid(name, format!("must be positive, got {}", value)))
    }
}

/// Fails unless `value` lies in `[0, 1]`.
pub(crate) fn ensure_unit_interval(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::invalid(name, format!("must be within [0, 1], got {}", value)))
    }
}

pub(crate) fn ensure_nonzero(name: &'static str, value: usize) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ModelError::invalid(name, "must be at least 1"))
    }
}

// End of File
