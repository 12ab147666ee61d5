/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Gamma tables: pairwise weights of the Bond-Centric Model
//!
//! `gamma[A][B]` scales the share of an A-B bond's energy that is attributed to
//! the A atom. Homoatomic gammas are 1, and for a calibrated pair
//! `gamma[A][B] + gamma[B][A] = 2`. Tables are stored as nested JSON objects:
//!
//! ```json
//! {"Au": {"Pd": 1.12}, "Pd": {"Au": 0.88}}
//! ```

use super::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Nested `symbol -> symbol -> gamma` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GammaTable {
    values: BTreeMap<String, BTreeMap<String, f64>>,
}

impl GammaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicitly stored gamma for the ordered pair, if any
    pub fn get_explicit(&self, a: &str, b: &str) -> Option<f64> {
        self.values.get(a).and_then(|row| row.get(b)).copied()
    }

    /// Gamma for the ordered pair, defaulting to 1 when nothing is stored
    pub fn get(&self, a: &str, b: &str) -> f64 {
        self.get_explicit(a, b).unwrap_or(1.0)
    }

    pub fn set(&mut self, a: &str, b: &str, gamma: f64) {
        self.values
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), gamma);
    }

    /// Store a calibrated heteroatomic pair: `gamma[a][b] = g`, `gamma[b][a] = 2 - g`,
    /// together with the homoatomic entries of both elements
    pub fn set_pair(&mut self, a: &str, b: &str, gamma: f64) {
        self.set(a, a, 1.0);
        self.set(b, b, 1.0);
        self.set(a, b, gamma);
        self.set(b, a, 2.0 - gamma);
    }

    /// Recursively merge `other` into this table; values from `other` win
    pub fn merge(&mut self, other: &GammaTable) {
        for (a, row) in &other.values {
            let target = self.values.entry(a.clone()).or_default();
            for (b, &gamma) in row {
                target.insert(b.clone(), gamma);
            }
        }
    }

    /// Elements with at least one stored entry as the first index
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeMap::is_empty)
    }

    /// Load a table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let table: GammaTable = serde_json::from_str(&content)?;
        log::debug!("Loaded gamma table from {}", path.as_ref().display());
        Ok(table)
    }

    /// Save the table as pretty-printed JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
