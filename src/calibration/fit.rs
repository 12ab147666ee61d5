/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Gamma fitting against reference cohesive energies
//!
//! The model cohesive energy is linear in the gammas. With homoatomic gammas
//! fixed at 1 and `gamma[B][A] = 2 - gamma[A][B]` for every element pair
//! `A < B`, each reference structure contributes one linear equation in one
//! unknown per pair.
//!
//! A single pair is solved from the sum of all reference equations, which is the
//! usual two-structure calibration. Several pairs are fitted by least squares.

use super::energies::ReferenceEnergies;
use super::errors::{CalibrationError, Result};
use crate::atoms::{read_xyz, Cluster};
use crate::bcm::{BondCentricModel, GammaTable};
use crate::config::ModelConfig;
use crate::utils::least_squares;
use ndarray::{Array1, Array2};
use std::collections::BTreeSet;
use std::path::Path;

/// Smallest usable coefficient of the single-pair equation
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// A reference structure with its DFT cohesive energy in eV/atom
#[derive(Debug, Clone)]
pub struct Reference {
    pub cluster: Cluster,
    pub cohesive_energy: f64,
}

/// One linear equation `coefficients . g = rhs` from a reference structure
struct Equation {
    coefficients: Vec<f64>,
    rhs: f64,
}

/// Every heteroatomic pair `(A, B)` with `A < B` over the references' elements
fn element_pairs(references: &[Reference]) -> Vec<(&'static str, &'static str)> {
    let elements: BTreeSet<&'static str> = references
        .iter()
        .flat_map(|r| r.cluster.metal_types())
        .collect();
    let elements: Vec<_> = elements.into_iter().collect();

    let mut pairs = Vec::new();
    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            pairs.push((*a, *b));
        }
    }
    pairs
}

fn equation(
    reference: &Reference,
    pairs: &[(&'static str, &'static str)],
    config: &ModelConfig,
) -> Result<Equation> {
    // Gammas do not enter the pair coefficients; a flat table avoids fallbacks
    let mut flat = GammaTable::new();
    for &(a, b) in pairs {
        flat.set_pair(a, b, 1.0);
    }
    let model = BondCentricModel::with_tables(&reference.cluster, config, &flat, &config.bulk_energies())?;
    let c = model.pair_coefficients();
    let types = model.metal_types();
    let index = |symbol: &str| types.iter().position(|t| *t == symbol);

    let mut rhs = reference.cohesive_energy;
    for a in 0..types.len() {
        rhs -= c[[a, a]];
    }

    let coefficients = pairs
        .iter()
        .map(|&(a, b)| match (index(a), index(b)) {
            (Some(ia), Some(ib)) => {
                rhs -= 2.0 * c[[ib, ia]];
                c[[ia, ib]] - c[[ib, ia]]
            }
            _ => 0.0,
        })
        .collect();

    Ok(Equation { coefficients, rhs })
}

/// Fit heteroatomic gammas so the model reproduces the reference energies
///
/// The returned table holds `gamma[A][A] = 1` for every element and the fitted
/// `gamma[A][B]`, `gamma[B][A] = 2 - gamma[A][B]` for every pair.
pub fn calc_gammas(references: &[Reference], config: &ModelConfig) -> Result<GammaTable> {
    if references.is_empty() {
        return Err(CalibrationError::NoReferences);
    }
    let pairs = element_pairs(references);
    if pairs.is_empty() {
        return Err(CalibrationError::NoHeteroatomicPairs);
    }
    if references.len() < pairs.len() {
        return Err(CalibrationError::Degenerate(format!(
            "{} reference structures for {} unknown gammas",
            references.len(),
            pairs.len()
        )));
    }

    let equations = references
        .iter()
        .map(|r| equation(r, &pairs, config))
        .collect::<Result<Vec<_>>>()?;

    let solution: Vec<f64> = if pairs.len() == 1 {
        let coefficient: f64 = equations.iter().map(|e| e.coefficients[0]).sum();
        let rhs: f64 = equations.iter().map(|e| e.rhs).sum();
        if coefficient.abs() < DEGENERACY_TOLERANCE {
            return Err(CalibrationError::Degenerate(format!(
                "{}-{} bonds do not constrain the gamma",
                pairs[0].0, pairs[0].1
            )));
        }
        vec![rhs / coefficient]
    } else {
        let mut a = Array2::<f64>::zeros((equations.len(), pairs.len()));
        let mut b = Array1::<f64>::zeros(equations.len());
        for (row, eq) in equations.iter().enumerate() {
            for (col, &value) in eq.coefficients.iter().enumerate() {
                a[[row, col]] = value;
            }
            b[row] = eq.rhs;
        }
        least_squares(&a, &b)?.to_vec()
    };

    let mut gammas = GammaTable::new();
    for (&(a, b), &gamma) in pairs.iter().zip(&solution) {
        gammas.set_pair(a, b, gamma);
        log::info!("Fitted gamma {}-{} = {:.6} ({}-{} = {:.6})", a, b, gamma, b, a, 2.0 - gamma);
    }
    Ok(gammas)
}

/// Merge a fitted solution into a gamma file, creating it if needed
///
/// Values in `solution` replace stored ones; other stored pairs are kept.
pub fn update_gamma_file<P: AsRef<Path>>(path: P, solution: &GammaTable) -> Result<GammaTable> {
    let path = path.as_ref();
    let mut table = if path.exists() {
        GammaTable::from_file(path)?
    } else {
        GammaTable::new()
    };
    table.merge(solution);
    table.to_file(path)?;
    log::info!("Updated gamma file {}", path.display());
    Ok(table)
}

/// Run the full calibration from structure files and reference energy tables
///
/// Each structure is looked up in the nanoparticle energies by its file stem,
/// e.g. `Data/PtPd/Pd73Pt74.xyz` by `Pd73Pt74`.
pub fn calibrate_from_files<P: AsRef<Path>>(
    structures: &[P],
    energies: &ReferenceEnergies,
    config: &ModelConfig,
) -> Result<GammaTable> {
    let references = structures
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let cluster = read_xyz(path)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let cohesive_energy = energies.cohesive_energy(&name, &cluster)?;
            log::info!("Reference {}: CE = {:.6} eV/atom", name, cohesive_energy);
            Ok(Reference {
                cluster,
                cohesive_energy,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    calc_gammas(&references, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{Atom, Vector3D};
    use crate::bcm::CnMethod;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn triangle(symbols: [&str; 3]) -> Cluster {
        let positions = [
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(2.7, 0.0, 0.0),
            Vector3D::new(1.35, 2.338, 0.0),
        ];
        Cluster::from_atoms(
            symbols
                .iter()
                .zip(positions)
                .map(|(s, p)| Atom::new(s, p).unwrap())
                .collect(),
        )
    }

    fn model_ce(cluster: &Cluster, gammas: &GammaTable, config: &ModelConfig) -> f64 {
        BondCentricModel::with_tables(cluster, config, gammas, &config.bulk_energies())
            .unwrap()
            .calc_ce()
    }

    #[test]
    fn test_recovers_known_gamma() {
        let config = ModelConfig::default().with_cn_method(CnMethod::Int);
        let mut truth = GammaTable::new();
        truth.set_pair("Pd", "Pt", 1.3);

        let references: Vec<Reference> = [["Pd", "Pd", "Pt"], ["Pt", "Pt", "Pd"]]
            .into_iter()
            .map(|symbols| {
                let cluster = triangle(symbols);
                let cohesive_energy = model_ce(&cluster, &truth, &config);
                Reference {
                    cluster,
                    cohesive_energy,
                }
            })
            .collect();

        let fitted = calc_gammas(&references, &config).unwrap();
        assert_relative_eq!(fitted.get("Pd", "Pt"), 1.3, epsilon = 1e-9);
        assert_relative_eq!(fitted.get("Pt", "Pd"), 0.7, epsilon = 1e-9);
        assert_eq!(fitted.get_explicit("Pd", "Pd"), Some(1.0));
    }

    #[test]
    fn test_recovers_trimetallic_gammas() {
        let config = ModelConfig::default().with_cn_method(CnMethod::Int);
        let mut truth = GammaTable::new();
        truth.set_pair("Au", "Pd", 1.1);
        truth.set_pair("Au", "Pt", 0.8);
        truth.set_pair("Pd", "Pt", 1.25);

        let references: Vec<Reference> = [
            ["Au", "Au", "Pd"],
            ["Au", "Pt", "Pt"],
            ["Pd", "Pt", "Pt"],
            ["Au", "Pd", "Pt"],
        ]
        .into_iter()
        .map(|symbols| {
            let cluster = triangle(symbols);
            let cohesive_energy = model_ce(&cluster, &truth, &config);
            Reference {
                cluster,
                cohesive_energy,
            }
        })
        .collect();

        let fitted = calc_gammas(&references, &config).unwrap();
        assert_relative_eq!(fitted.get("Au", "Pd"), 1.1, epsilon = 1e-8);
        assert_relative_eq!(fitted.get("Au", "Pt"), 0.8, epsilon = 1e-8);
        assert_relative_eq!(fitted.get("Pd", "Pt"), 1.25, epsilon = 1e-8);
    }

    #[test]
    fn test_calibration_errors() {
        let config = ModelConfig::default();
        assert!(matches!(calc_gammas(&[], &config), Err(CalibrationError::NoReferences)));

        let mono = Reference {
            cluster: triangle(["Au", "Au", "Au"]),
            cohesive_energy: -1.0,
        };
        assert!(matches!(
            calc_gammas(&[mono], &config),
            Err(CalibrationError::NoHeteroatomicPairs)
        ));

        let trimetallic = Reference {
            cluster: triangle(["Au", "Pd", "Pt"]),
            cohesive_energy: -1.0,
        };
        assert!(matches!(
            calc_gammas(&[trimetallic], &config),
            Err(CalibrationError::Degenerate(_))
        ));

        // Two separated monometallic dimers have no Au-Pd bonds
        let apart = Cluster::from_atoms(vec![
            Atom::new("Au", Vector3D::new(0.0, 0.0, 0.0)).unwrap(),
            Atom::new("Au", Vector3D::new(2.7, 0.0, 0.0)).unwrap(),
            Atom::new("Pd", Vector3D::new(20.0, 0.0, 0.0)).unwrap(),
            Atom::new("Pd", Vector3D::new(22.7, 0.0, 0.0)).unwrap(),
        ]);
        let reference = Reference {
            cluster: apart,
            cohesive_energy: -1.0,
        };
        assert!(matches!(
            calc_gammas(&[reference], &config),
            Err(CalibrationError::Degenerate(_))
        ));
    }

    #[test]
    fn test_update_gamma_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("np_gammas.json");

        let mut existing = GammaTable::new();
        existing.set_pair("Au", "Pd", 1.5);
        existing.set_pair("Au", "Pt", 0.9);
        existing.to_file(&path).unwrap();

        let mut solution = GammaTable::new();
        solution.set_pair("Au", "Pd", 1.2);
        let merged = update_gamma_file(&path, &solution).unwrap();

        assert_relative_eq!(merged.get("Au", "Pd"), 1.2);
        assert_relative_eq!(merged.get("Au", "Pt"), 0.9);
        assert_eq!(GammaTable::from_file(&path).unwrap(), merged);

        let fresh = dir.path().join("new.json");
        update_gamma_file(&fresh, &solution).unwrap();
        assert!(fresh.exists());
    }
}
