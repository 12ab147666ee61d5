/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Model configuration
//!
//! Every knob of the Bond-Centric Model in one serde-loadable struct. All fields
//! have defaults, so a JSON file only needs the values it changes:
//!
//! ```json
//! {"scale_factor": 1.25, "cn_method": "int", "ce_bulk": {"Au": -3.81}}
//! ```

pub mod errors;

pub use errors::{ConfigError, Result};

use crate::bcm::reference;
use crate::bcm::{CnMethod, GammaTable};
use crate::utils::constants::FCC_BULK_CN;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Bond-Centric Model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Multiplier applied to every bond cutoff radius
    pub scale_factor: f64,
    /// Coordination number counting method
    pub cn_method: CnMethod,
    /// Bulk coordination number
    pub cn_bulk: f64,
    /// JSON gamma table merged over the defaults
    pub gamma_file: Option<PathBuf>,
    /// Inline gamma overrides, applied after `gamma_file`
    pub gammas: GammaTable,
    /// Bulk cohesive energy overrides in eV/atom
    pub ce_bulk: BTreeMap<String, f64>,
    /// Unscaled bond radius overrides in Angstrom
    pub custom_radii: BTreeMap<String, f64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.2,
            cn_method: CnMethod::Frac,
            cn_bulk: FCC_BULK_CN,
            gamma_file: None,
            gammas: GammaTable::default(),
            ce_bulk: BTreeMap::new(),
            custom_radii: BTreeMap::new(),
        }
    }
}

impl ModelConfig {
    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ModelConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded model configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Defaults for gamma calibration, which counts whole bonds
    pub fn calibration() -> Self {
        Self::default().with_cn_method(CnMethod::Int)
    }

    pub fn with_cn_method(mut self, method: CnMethod) -> Self {
        self.cn_method = method;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if !(self.cn_bulk > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cn_bulk must be positive, got {}",
                self.cn_bulk
            )));
        }
        if let Some((symbol, radius)) = self.custom_radii.iter().find(|(_, r)| !(**r > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "radius for {} must be positive, got {}",
                symbol, radius
            )));
        }
        Ok(())
    }

    /// Bulk cohesive energies: the PBE-D3 reference table with overrides applied
    pub fn bulk_energies(&self) -> BTreeMap<String, f64> {
        let mut energies: BTreeMap<String, f64> = reference::BULK_CE_PBE_D3
            .iter()
            .map(|(symbol, &ce)| (symbol.to_string(), ce))
            .collect();
        energies.extend(self.ce_bulk.iter().map(|(s, &ce)| (s.clone(), ce)));
        energies
    }
}
