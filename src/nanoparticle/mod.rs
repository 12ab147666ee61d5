/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Nanoparticle analysis
//!
//! [`Nanoparticle`] ties a cluster to its Bond-Centric Model: cohesive energy
//! with the configured coordination method, and a core/shell breakdown taken
//! from integer coordination numbers.

pub mod errors;
pub mod shells;

pub use errors::{NanoparticleError, Result};
pub use shells::{ShellInfo, ShellReport};

use crate::atoms::{read_xyz, write_xyz, Cluster};
use crate::bcm::{configured_gammas, BondCentricModel, BondList, CnMethod};
use crate::config::ModelConfig;
use std::path::Path;

/// A cluster together with its bond-centric models
#[derive(Debug, Clone)]
pub struct Nanoparticle {
    cluster: Cluster,
    config: ModelConfig,
    model: BondCentricModel,
    shell_model: BondCentricModel,
    shell_info: ShellInfo,
    description: String,
}

impl Nanoparticle {
    pub fn new(cluster: Cluster, config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        if cluster.is_empty() {
            return Err(NanoparticleError::Empty);
        }

        let bonds = BondList::from_config(&cluster, config)?;
        let gammas = configured_gammas(config)?;
        let ce_bulk = config.bulk_energies();
        let model = BondCentricModel::from_bonds(&cluster, bonds.clone(), config, &gammas, &ce_bulk)?;

        // Resolved gammas, so missing pairs are only reported once
        let int_config = config.clone().with_cn_method(CnMethod::Int);
        let shell_model =
            BondCentricModel::from_bonds(&cluster, bonds, &int_config, model.gammas(), &ce_bulk)?;
        let shell_info = ShellInfo::from_shell_map(&cluster, shell_model.shell_map());

        let description = format!(
            "{} nanoparticle: {} atoms, {} bonds, {} shells",
            cluster.formula(),
            cluster.len(),
            model.bonds().len() / 2,
            shell_info.len()
        );
        log::info!("{}", description);

        Ok(Self {
            cluster,
            config: config.clone(),
            model,
            shell_model,
            shell_info,
            description,
        })
    }

    /// Load a nanoparticle from an XYZ file
    pub fn from_xyz<P: AsRef<Path>>(path: P, config: &ModelConfig) -> Result<Self> {
        let cluster = read_xyz(path.as_ref())?;
        log::debug!("Read {} atoms from {}", cluster.len(), path.as_ref().display());
        Self::new(cluster, config)
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Model with the configured coordination method
    pub fn model(&self) -> &BondCentricModel {
        &self.model
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metal_types(&self) -> &[&'static str] {
        self.model.metal_types()
    }

    /// Atom count of each metal type
    pub fn composition(&self) -> Vec<usize> {
        self.cluster.composition()
    }

    pub fn len(&self) -> usize {
        self.cluster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cluster.is_empty()
    }

    /// Cohesive energy in eV/atom
    pub fn calc_ce(&self) -> f64 {
        self.model.calc_ce()
    }

    /// Concentric layers from integer coordination numbers, innermost first
    pub fn shell_map(&self) -> &[Vec<usize>] {
        self.shell_model.shell_map()
    }

    /// Composition of the core and of each outer shell
    pub fn core_shell_info(&self) -> &ShellInfo {
        &self.shell_info
    }

    pub fn shell_report(&self) -> ShellReport<'_> {
        self.shell_info.report(&self.description)
    }

    /// Half of the particle: atoms with x at most that of the central atom
    ///
    /// The central atom is the first atom of the innermost shell. The result is
    /// a new nanoparticle with the same configuration.
    pub fn x_cut(&self) -> Result<Self> {
        let core = self
            .shell_map()
            .first()
            .and_then(|shell| shell.first())
            .copied()
            .ok_or(NanoparticleError::NoShells)?;
        let x0 = self.cluster.atoms()[core].position().x;

        let keep: Vec<usize> = self
            .cluster
            .atoms()
            .iter()
            .enumerate()
            .filter(|(_, atom)| atom.position().x <= x0)
            .map(|(i, _)| i)
            .collect();
        log::info!(
            "x-cut at x = {:.4}: keeping {} of {} atoms",
            x0,
            keep.len(),
            self.cluster.len()
        );

        let mut sliced = self.cluster.subset(&keep)?;
        sliced.set_comment(&format!("{} x-cut", self.cluster.formula()));
        Self::new(sliced, &self.config)
    }

    /// Write the structure as XYZ
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_xyz(&self.cluster, path.as_ref(), None)?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::icosahedron;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn core_shell_55() -> Cluster {
        let mut cluster = icosahedron("Au", 3, None).unwrap();
        cluster.set_symbols(0..13, "Pd").unwrap();
        cluster
    }

    #[test]
    fn test_core_shell_info() {
        let np = Nanoparticle::new(core_shell_55(), &ModelConfig::default()).unwrap();
        assert_eq!(np.shell_map().len(), 3);
        assert_eq!(np.shell_map()[0], vec![0]);

        let info = np.core_shell_info();
        assert_eq!(info.shells, vec![1, 2]);
        assert_eq!(info.totals, vec![13, 42]);
        assert_eq!(info.fractions("Pd"), vec![1.0, 0.0]);
        assert_eq!(info.fractions("Au"), vec![0.0, 1.0]);
        assert_eq!(np.metal_types(), &["Au", "Pd"]);
        assert_eq!(np.composition(), vec![42, 13]);
    }

    #[test]
    fn test_ce_uses_configured_method() {
        let cluster = core_shell_55();
        let frac = Nanoparticle::new(cluster.clone(), &ModelConfig::default()).unwrap();
        let int_config = ModelConfig::default().with_cn_method(CnMethod::Int);
        let int = Nanoparticle::new(cluster.clone(), &int_config).unwrap();

        let direct = BondCentricModel::new(&cluster, &int_config).unwrap();
        assert_relative_eq!(int.calc_ce(), direct.calc_ce(), epsilon = 1e-12);
        assert!(frac.calc_ce() < 0.0);
        assert!((frac.calc_ce() - int.calc_ce()).abs() > 1e-6);
    }

    #[test]
    fn test_x_cut() {
        let np = Nanoparticle::new(core_shell_55(), &ModelConfig::default()).unwrap();
        let half = np.x_cut().unwrap();

        assert!(half.len() < np.len());
        assert!(half.len() > np.len() / 2);
        assert!(half.cluster().atoms().iter().all(|a| a.position().x <= 1e-9));
        assert!(half.cluster().comment().contains("x-cut"));
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("np.xyz");
        let np = Nanoparticle::new(core_shell_55(), &ModelConfig::default()).unwrap();
        np.write(&path).unwrap();

        let reloaded = Nanoparticle::from_xyz(&path, &ModelConfig::default()).unwrap();
        assert_eq!(reloaded.len(), 55);
        assert_relative_eq!(reloaded.calc_ce(), np.calc_ce(), epsilon = 1e-6);
    }

    #[test]
    fn test_empty_nanoparticle() {
        assert!(matches!(
            Nanoparticle::new(Cluster::new(), &ModelConfig::default()),
            Err(NanoparticleError::Empty)
        ));
    }
}
