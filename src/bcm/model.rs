/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Bond-Centric Model of nanoparticle cohesive energy
//!
//! Each directed bond `(i, j)` gives atom `i` a share of energy
//!
//! ```text
//! gamma[A_i][A_j] * (CE_bulk[A_i] / cn_i) * sqrt(cn_i / cn_bulk)
//! ```
//!
//! and the cohesive energy of the particle is the sum of the shares of both ends
//! of every bond, divided by twice the number of atoms (every bond is listed in
//! both directions). Energies are in eV/atom.

use super::bonds::BondList;
use super::coordination::{self, CnMethod};
use super::errors::{BcmError, Result};
use super::gammas::GammaTable;
use crate::atoms::Cluster;
use crate::config::ModelConfig;
use ndarray::Array2;
use std::collections::BTreeMap;

/// Gamma table named by a configuration: the gamma file, then inline overrides
pub fn configured_gammas(config: &ModelConfig) -> Result<GammaTable> {
    let mut gammas = GammaTable::new();
    if let Some(path) = &config.gamma_file {
        gammas.merge(&GammaTable::from_file(path)?);
    }
    gammas.merge(&config.gammas);
    Ok(gammas)
}

/// A Bond-Centric Model bound to one cluster geometry
///
/// The bond graph and coordination numbers are fixed at construction. The
/// chemical ordering can be varied through [`BondCentricModel::calc_ce_with`],
/// which is how an ordering search evaluates candidate structures.
#[derive(Debug, Clone)]
pub struct BondCentricModel {
    metal_types: Vec<&'static str>,
    ordering: Vec<usize>,
    bonds: BondList,
    cn: Vec<f64>,
    cn_method: CnMethod,
    cn_bulk: f64,
    /// gamma[[a, b]] over `metal_types`
    gamma: Array2<f64>,
    /// Bulk cohesive energy per metal type
    ce_bulk: Vec<f64>,
    gammas: GammaTable,
    shell_map: Vec<Vec<usize>>,
}

impl BondCentricModel {
    /// Build a model using the gamma and bulk-energy tables named by the configuration
    pub fn new(cluster: &Cluster, config: &ModelConfig) -> Result<Self> {
        Self::with_tables(cluster, config, &configured_gammas(config)?, &config.bulk_energies())
    }

    /// Build a model with explicit gamma and bulk cohesive energy tables
    pub fn with_tables(
        cluster: &Cluster,
        config: &ModelConfig,
        gammas: &GammaTable,
        ce_bulk: &BTreeMap<String, f64>,
    ) -> Result<Self> {
        config.validate()?;
        if cluster.is_empty() {
            return Err(BcmError::EmptyCluster);
        }

        let bonds = BondList::from_config(cluster, config)?;
        let model = Self::from_bonds(cluster, bonds, config, gammas, ce_bulk)?;
        log::info!(
            "Built {} model for {} ({} atoms, {} bonds)",
            model.cn_method,
            cluster.formula(),
            cluster.len(),
            model.bonds.len() / 2
        );
        Ok(model)
    }

    /// Build a model on a precomputed bond list
    pub fn from_bonds(
        cluster: &Cluster,
        bonds: BondList,
        config: &ModelConfig,
        gammas: &GammaTable,
        ce_bulk: &BTreeMap<String, f64>,
    ) -> Result<Self> {
        if cluster.is_empty() {
            return Err(BcmError::EmptyCluster);
        }
        if bonds.num_atoms() != cluster.len() {
            return Err(BcmError::OrderingLength {
                expected: cluster.len(),
                got: bonds.num_atoms(),
            });
        }

        let metal_types = cluster.metal_types();
        let ce_bulk = metal_types
            .iter()
            .map(|metal| {
                ce_bulk
                    .get(*metal)
                    .copied()
                    .ok_or_else(|| BcmError::MissingBulkEnergy(metal.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let n_types = metal_types.len();
        let mut resolved = GammaTable::new();
        let mut gamma = Array2::<f64>::ones((n_types, n_types));
        for (a, metal_a) in metal_types.iter().enumerate() {
            for (b, metal_b) in metal_types.iter().enumerate() {
                let value = match gammas.get_explicit(metal_a, metal_b) {
                    Some(value) => value,
                    None => {
                        if a != b {
                            log::warn!(
                                "No gamma for {}-{}, using 1.0",
                                metal_a,
                                metal_b
                            );
                        }
                        1.0
                    }
                };
                gamma[[a, b]] = value;
                resolved.set(metal_a, metal_b, value);
            }
        }

        let cn = coordination::coordination_numbers(&bonds, config.cn_method, config.cn_bulk);
        let shell_map = coordination::shell_map(&bonds, config.cn_bulk);

        Ok(Self {
            metal_types,
            ordering: cluster.ordering(),
            bonds,
            cn,
            cn_method: config.cn_method,
            cn_bulk: config.cn_bulk,
            gamma,
            ce_bulk,
            gammas: resolved,
            shell_map,
        })
    }

    /// Number of atoms in the model
    pub fn num_atoms(&self) -> usize {
        self.ordering.len()
    }

    /// Sorted element symbols; indices into this list form a chemical ordering
    pub fn metal_types(&self) -> &[&'static str] {
        &self.metal_types
    }

    /// Chemical ordering of the cluster the model was built from
    pub fn ordering(&self) -> &[usize] {
        &self.ordering
    }

    pub fn bonds(&self) -> &BondList {
        &self.bonds
    }

    /// Coordination number of every atom
    pub fn coordination_numbers(&self) -> &[f64] {
        &self.cn
    }

    pub fn cn_method(&self) -> CnMethod {
        self.cn_method
    }

    pub fn cn_bulk(&self) -> f64 {
        self.cn_bulk
    }

    /// Gamma values in effect for the metal types of this cluster
    pub fn gammas(&self) -> &GammaTable {
        &self.gammas
    }

    /// Bulk cohesive energy of each metal type, in `metal_types()` order
    pub fn bulk_energies(&self) -> &[f64] {
        &self.ce_bulk
    }

    /// Concentric shells of atom indices, innermost first
    pub fn shell_map(&self) -> &[Vec<usize>] {
        &self.shell_map
    }

    /// `sqrt(cn / cn_bulk) / cn`, the coordination part of an atom's bond share
    fn cn_weight(&self, atom: usize) -> f64 {
        let cn = self.cn[atom];
        if cn > 0.0 {
            (cn / self.cn_bulk).sqrt() / cn
        } else {
            0.0
        }
    }

    fn check_ordering(&self, ordering: &[usize]) -> Result<()> {
        if ordering.len() != self.num_atoms() {
            return Err(BcmError::OrderingLength {
                expected: self.num_atoms(),
                got: ordering.len(),
            });
        }
        if let Some(&index) = ordering.iter().find(|&&m| m >= self.metal_types.len()) {
            return Err(BcmError::UnknownMetalType {
                index,
                available: self.metal_types.len(),
            });
        }
        Ok(())
    }

    /// Cohesive energy of the cluster in eV/atom
    pub fn calc_ce(&self) -> f64 {
        self.ce_sum(&self.ordering)
    }

    /// Cohesive energy of an alternative chemical ordering on the same geometry
    pub fn calc_ce_with(&self, ordering: &[usize]) -> Result<f64> {
        self.check_ordering(ordering)?;
        Ok(self.ce_sum(ordering))
    }

    fn ce_sum(&self, ordering: &[usize]) -> f64 {
        let total: f64 = self
            .bonds
            .iter()
            .map(|&(i, j)| {
                let (a, b) = (ordering[i], ordering[j]);
                let part_i = self.gamma[[a, b]] * self.ce_bulk[a] * self.cn_weight(i);
                let part_j = self.gamma[[b, a]] * self.ce_bulk[b] * self.cn_weight(j);
                part_i + part_j
            })
            .sum();
        total / (2.0 * self.num_atoms() as f64)
    }

    /// Linear decomposition of the cohesive energy in the gamma values
    ///
    /// Returns `c` with `CE = sum_ab gamma[a][b] * c[[a, b]]` over `metal_types()`.
    /// Gamma calibration solves for gammas on these coefficients.
    pub fn pair_coefficients(&self) -> Array2<f64> {
        let n_types = self.metal_types.len();
        let mut coefficients = Array2::<f64>::zeros((n_types, n_types));
        let n = self.num_atoms() as f64;

        // Both directions of every bond are listed, so each atom's share is
        // counted once per directed bond it starts
        for &(i, j) in self.bonds.iter() {
            let (a, b) = (self.ordering[i], self.ordering[j]);
            coefficients[[a, b]] += self.ce_bulk[a] * self.cn_weight(i) / n;
        }
        coefficients
    }
}
