/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Bond enumeration by per-atom cutoff radii
//!
//! Two atoms are bonded when their distance is below the sum of their cutoff
//! radii. Bonds are stored both ways: every bonded pair appears as `(i, j)` and
//! as `(j, i)`, sorted by source then target atom.

use super::errors::{BcmError, Result};
use super::reference;
use crate::atoms::{database, Cluster};
use crate::config::ModelConfig;
use rayon::prelude::*;

/// Clusters larger than this are searched in parallel
const PARALLEL_THRESHOLD: usize = 500;

/// Scaled cutoff radius for every atom in the cluster
///
/// Radii come from the configuration overrides first, then the built-in custom
/// radii, then the element's covalent radius; all are multiplied by the scale
/// factor.
pub fn cutoff_radii(cluster: &Cluster, config: &ModelConfig) -> Result<Vec<f64>> {
    cluster
        .atoms()
        .iter()
        .map(|atom| {
            let symbol = atom.symbol();
            config
                .custom_radii
                .get(symbol)
                .copied()
                .or_else(|| reference::custom_radius(symbol))
                .or_else(|| database::covalent_radius(atom.atomic_number()))
                .map(|radius| radius * config.scale_factor)
                .ok_or_else(|| BcmError::MissingRadius(symbol.to_string()))
        })
        .collect()
}

/// Directed, both-ways bond list of a cluster
#[derive(Debug, Clone, PartialEq)]
pub struct BondList {
    num_atoms: usize,
    bonds: Vec<(usize, usize)>,
}

impl BondList {
    /// Build the bond list from per-atom cutoff radii
    pub fn build(cluster: &Cluster, radii: &[f64]) -> Result<Self> {
        let n = cluster.len();
        if radii.len() != n {
            return Err(BcmError::Atom(crate::atoms::AtomError::InvalidStructure(
                format!("{} cutoff radii for {} atoms", radii.len(), n),
            )));
        }

        let atoms = cluster.atoms();
        let bonded_to = |i: usize| -> Vec<(usize, usize)> {
            (0..n)
                .filter(|&j| j != i && atoms[i].distance_to(&atoms[j]) < radii[i] + radii[j])
                .map(|j| (i, j))
                .collect()
        };

        let bonds: Vec<(usize, usize)> = if n > PARALLEL_THRESHOLD {
            (0..n).into_par_iter().flat_map_iter(bonded_to).collect()
        } else {
            (0..n).flat_map(bonded_to).collect()
        };

        log::debug!("Found {} bonds among {} atoms", bonds.len() / 2, n);

        Ok(Self {
            num_atoms: n,
            bonds,
        })
    }

    /// Build the bond list with radii taken from the model configuration
    pub fn from_config(cluster: &Cluster, config: &ModelConfig) -> Result<Self> {
        let radii = cutoff_radii(cluster, config)?;
        Self::build(cluster, &radii)
    }

    /// Build directly from directed pairs; the caller guarantees both directions
    pub fn from_pairs(num_atoms: usize, mut bonds: Vec<(usize, usize)>) -> Result<Self> {
        if let Some(&(from, to)) = bonds.iter().find(|&&(i, j)| i >= num_atoms || j >= num_atoms) {
            return Err(BcmError::BondIndex { from, to, num_atoms });
        }
        bonds.sort_unstable();
        Ok(Self { num_atoms, bonds })
    }

    pub fn num_atoms(&self) -> usize {
        self.num_atoms
    }

    /// Number of directed bonds (twice the number of bonded pairs)
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.bonds
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.bonds.iter()
    }

    /// Neighbors of one atom, in ascending order
    pub fn neighbors(&self, atom: usize) -> Vec<usize> {
        let start = self.bonds.partition_point(|&(i, _)| i < atom);
        self.bonds[start..]
            .iter()
            .take_while(|&&(i, _)| i == atom)
            .map(|&(_, j)| j)
            .collect()
    }

    /// Neighbor lists for every atom
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.num_atoms];
        for &(i, j) in &self.bonds {
            adjacency[i].push(j);
        }
        adjacency
    }

    /// Number of bonds of each atom
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.num_atoms];
        for &(i, _) in &self.bonds {
            degrees[i] += 1;
        }
        degrees
    }
}
