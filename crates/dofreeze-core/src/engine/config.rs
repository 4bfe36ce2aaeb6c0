use crate::core::coords::{ConversionError, CoordinateConverter};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ATOM_DIMENSION: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Both 'frozen_dof' and 'frozen_atoms' are set; choose one")]
    ConflictingSelection,

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid frozen selection: {0}")]
    Conversion(#[from] ConversionError),
}

/// Which degrees of freedom stay fixed at their reference values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrozenSelection {
    #[default]
    None,
    Dofs(Vec<usize>),
    Atoms { indices: Vec<usize>, dim: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreezeConfig {
    pub reference_coords: Vec<f64>,
    pub frozen: FrozenSelection,
}

impl FreezeConfig {
    pub fn converter(&self) -> Result<CoordinateConverter, ConversionError> {
        match &self.frozen {
            FrozenSelection::None => CoordinateConverter::new(&self.reference_coords, []),
            FrozenSelection::Dofs(dofs) => {
                CoordinateConverter::new(&self.reference_coords, dofs.iter().copied())
            }
            FrozenSelection::Atoms { indices, dim } => CoordinateConverter::from_frozen_atoms(
                &self.reference_coords,
                indices.iter().copied(),
                *dim,
            ),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FreezeFile = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<string>".to_string(),
            source: e,
        })?;
        file.into_config()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FreezeFile {
    reference_coords: Vec<f64>,
    frozen_dof: Option<Vec<usize>>,
    frozen_atoms: Option<Vec<usize>>,
    dim: Option<usize>,
}

impl FreezeFile {
    fn into_config(self) -> Result<FreezeConfig, ConfigError> {
        let frozen = match (self.frozen_dof, self.frozen_atoms) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSelection),
            (Some(dofs), None) => FrozenSelection::Dofs(dofs),
            (None, Some(indices)) => FrozenSelection::Atoms {
                indices,
                dim: self.dim.unwrap_or(DEFAULT_ATOM_DIMENSION),
            },
            (None, None) => FrozenSelection::None,
        };
        Ok(FreezeConfig {
            reference_coords: self.reference_coords,
            frozen,
        })
    }
}

#[derive(Default)]
pub struct FreezeConfigBuilder {
    reference_coords: Option<Vec<f64>>,
    frozen_dof: Option<Vec<usize>>,
    frozen_atoms: Option<(Vec<usize>, usize)>,
}

impl FreezeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_coords(mut self, coords: Vec<f64>) -> Self {
        self.reference_coords = Some(coords);
        self
    }
    pub fn frozen_dof(mut self, dofs: Vec<usize>) -> Self {
        self.frozen_dof = Some(dofs);
        self
    }
    pub fn frozen_atoms(mut self, atoms: Vec<usize>, dim: usize) -> Self {
        self.frozen_atoms = Some((atoms, dim));
        self
    }

    pub fn build(self) -> Result<FreezeConfig, ConfigError> {
        let reference_coords = self
            .reference_coords
            .ok_or(ConfigError::MissingParameter("reference_coords"))?;
        let frozen = match (self.frozen_dof, self.frozen_atoms) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSelection),
            (Some(dofs), None) => FrozenSelection::Dofs(dofs),
            (None, Some((indices, dim))) => FrozenSelection::Atoms { indices, dim },
            (None, None) => FrozenSelection::None,
        };
        Ok(FreezeConfig {
            reference_coords,
            frozen,
        })
    }
}
