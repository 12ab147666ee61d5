/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reference structures for gamma calibration
//!
//! A calibration needs two bimetallic particles whose compositions mirror each
//! other. They are built from a monometallic icosahedron by replacing every
//! second atom of each coordination environment with the second metal, then
//! exchanging the two metals.

use super::errors::{GenerateError, Result};
use super::icosahedron::icosahedron;
use crate::atoms::{write_xyz, Cluster};
use std::fs;
use std::path::{Path, PathBuf};

/// Default bond tolerance: atoms bond within 125% of their summed covalent radii
pub const DEFAULT_COVALENT_PERCENT: f64 = 1.25;

/// Coordination numbers and neighbour lists from covalent radii
///
/// Atoms `i` and `j` are bonded when `d_ij / covalent_percent <= r_i + r_j`.
pub fn coordination_numbers(
    cluster: &Cluster,
    covalent_percent: f64,
) -> Result<(Vec<usize>, Vec<Vec<usize>>)> {
    let radii = cluster
        .atoms()
        .iter()
        .map(|atom| {
            atom.covalent_radius()
                .ok_or_else(|| GenerateError::MissingRadius(atom.symbol().to_string()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let distances = cluster.distance_matrix();
    let n = cluster.len();
    let bonded: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i && distances[[i, j]] / covalent_percent <= radii[i] + radii[j])
                .collect()
        })
        .collect();
    let cns = bonded.iter().map(Vec::len).collect();

    Ok((cns, bonded))
}

/// Replace every second atom with coordination number `cn` by `symbol`
///
/// Atoms are taken in index order; the ones at odd positions in that list are
/// replaced.
pub fn evenly_distribute(cluster: &mut Cluster, cns: &[usize], cn: usize, symbol: &str) -> Result<()> {
    if cns.len() != cluster.len() {
        return Err(GenerateError::CnLength {
            expected: cluster.len(),
            got: cns.len(),
        });
    }

    let sites: Vec<usize> = (0..cns.len()).filter(|&i| cns[i] == cn).collect();
    for &site in sites.iter().skip(1).step_by(2) {
        cluster.set_symbol(site, symbol)?;
    }
    Ok(())
}

/// Paths of the two mirrored reference structures
#[derive(Debug, Clone, PartialEq)]
pub struct DftPair {
    pub first: PathBuf,
    pub second: PathBuf,
}

/// File name such as `Pd73Pt74.xyz`, with `first` listed first
fn pair_file_name(cluster: &Cluster, first: &str, second: &str) -> String {
    format!(
        "{}{}{}{}.xyz",
        first,
        cluster.indices_of(first).len(),
        second,
        cluster.indices_of(second).len()
    )
}

/// Build the mirrored pair of `metal_a`/`metal_b` icosahedra and write them
///
/// Files go to `out_dir/{metal_b}{metal_a}/`, each with the coordination number
/// of every atom as a fourth column.
pub fn setup_dft_pair<P: AsRef<Path>>(
    metal_a: &str,
    metal_b: &str,
    shells: usize,
    out_dir: P,
) -> Result<DftPair> {
    let folder = out_dir.as_ref().join(format!("{}{}", metal_b, metal_a));
    if !folder.is_dir() {
        fs::create_dir_all(&folder)?;
        log::info!("Created folder {}", folder.display());
    }

    let mut cluster = icosahedron(metal_a, shells, None)?;
    let (cns, _) = coordination_numbers(&cluster, DEFAULT_COVALENT_PERCENT)?;

    let mut unique_cns = cns.clone();
    unique_cns.sort_unstable();
    unique_cns.dedup();
    for &cn in &unique_cns {
        evenly_distribute(&mut cluster, &cns, cn, metal_b)?;
    }

    let first = folder.join(pair_file_name(&cluster, metal_a, metal_b));
    cluster.set_comment(&format!("{} reference structure", cluster.formula()));
    write_xyz(&cluster, &first, Some(&cns))?;

    let mut swapped = cluster.clone();
    swapped.swap_elements(metal_a, metal_b)?;
    swapped.set_comment(&format!("{} reference structure", swapped.formula()));
    let second = folder.join(pair_file_name(&swapped, metal_a, metal_b));
    write_xyz(&swapped, &second, Some(&cns))?;

    log::info!("Wrote {} and {}", first.display(), second.display());
    Ok(DftPair { first, second })
}
