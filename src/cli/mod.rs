/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command line interface
//!
//! Subcommands map one-to-one onto library operations; this module only parses
//! arguments, applies overrides to the model configuration and prints results.

use crate::bcm::CnMethod;
use crate::calibration::{calibrate_from_files, update_gamma_file, ReferenceEnergies};
use crate::config::ModelConfig;
use crate::generate::setup_dft_pair;
use crate::nanoparticle::Nanoparticle;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Bond-Centric Model cohesive energies for metal nanoparticles
#[derive(Parser, Debug)]
#[command(name = "bcm-rs", author, version, about, long_about = None)]
pub struct Cli {
    /// Print debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that builds a model
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// JSON model configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Coordination number method (int or frac)
    #[arg(long)]
    pub cn_method: Option<CnMethod>,

    /// Bond cutoff scale factor
    #[arg(long)]
    pub scale: Option<f64>,
}

impl ModelArgs {
    /// Configuration file (or defaults) with command line overrides applied
    pub fn load(&self) -> anyhow::Result<ModelConfig> {
        self.load_or(ModelConfig::default())
    }

    /// Like [`ModelArgs::load`], falling back to `defaults` without a file
    pub fn load_or(&self, defaults: ModelConfig) -> anyhow::Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => ModelConfig::from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => defaults,
        };
        if let Some(method) = self.cn_method {
            config = config.with_cn_method(method);
        }
        if let Some(scale) = self.scale {
            config = config.with_scale_factor(scale);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cohesive energy of a structure
    Ce {
        /// XYZ structure
        xyz: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Print the core/shell composition of a structure
    Shells {
        /// XYZ structure
        xyz: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Write the half of a structure on the negative-x side of its center
    Slice {
        /// XYZ structure
        xyz: PathBuf,

        /// Output XYZ file
        out: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Fit gamma values to reference DFT energies and update a gamma file
    ///
    /// Coordination numbers are counted as whole bonds unless `--cn-method` or
    /// the configuration file says otherwise.
    Calibrate {
        /// Reference structures, named by file stem in the energy table
        #[arg(long, num_args = 1.., required = true)]
        structures: Vec<PathBuf>,

        /// CSV of nanoparticle energies (Folder_Name, Energy (eV))
        #[arg(long)]
        np_energies: PathBuf,

        /// CSV of single-atom energies (NP, Energy (Ha))
        #[arg(long)]
        atom_energies: PathBuf,

        /// JSON gamma file to create or update
        #[arg(long, default_value = "np_gammas.json")]
        gamma_file: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Write the mirrored pair of bimetallic icosahedra for DFT calibration
    Generate {
        /// Host metal
        metal_a: String,

        /// Dopant metal, spread evenly over each coordination environment
        metal_b: String,

        /// Number of icosahedral shells
        #[arg(short = 'n', long, default_value_t = 4)]
        shells: usize,

        /// Output directory
        #[arg(long, default_value = "Data")]
        out: PathBuf,
    },
}

fn load_nanoparticle(xyz: &Path, model: &ModelArgs) -> anyhow::Result<Nanoparticle> {
    let config = model.load()?;
    Nanoparticle::from_xyz(xyz, &config).with_context(|| format!("failed to load {}", xyz.display()))
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Ce { xyz, model } => {
            let np = load_nanoparticle(&xyz, &model)?;
            println!("{}", np.description());
            println!("CE = {:.6} eV/atom", np.calc_ce());
        }
        Commands::Shells { xyz, model } => {
            let np = load_nanoparticle(&xyz, &model)?;
            print!("{}", np.shell_report());
        }
        Commands::Slice { xyz, out, model } => {
            let np = load_nanoparticle(&xyz, &model)?;
            let half = np.x_cut()?;
            half.write(&out)?;
            println!("Wrote {} of {} atoms to {}", half.len(), np.len(), out.display());
        }
        Commands::Calibrate {
            structures,
            np_energies,
            atom_energies,
            gamma_file,
            model,
        } => {
            let config = model.load_or(ModelConfig::calibration())?;
            let energies = ReferenceEnergies::load(&np_energies, &atom_energies)
                .context("failed to read reference energies")?;
            let solution = calibrate_from_files(&structures, &energies, &config)?;
            let table = update_gamma_file(&gamma_file, &solution)?;

            println!("Gamma values written to {}", gamma_file.display());
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Generate {
            metal_a,
            metal_b,
            shells,
            out,
        } => {
            let pair = setup_dft_pair(&metal_a, &metal_b, shells, &out)?;
            println!("{}", pair.first.display());
            println!("{}", pair.second.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ce_overrides() {
        let cli = Cli::parse_from(["bcm-rs", "ce", "np.xyz", "--cn-method", "int", "--scale", "1.3"]);
        match cli.command {
            Commands::Ce { xyz, model } => {
                assert_eq!(xyz, PathBuf::from("np.xyz"));
                let config = model.load().unwrap();
                assert_eq!(config.cn_method, CnMethod::Int);
                assert_eq!(config.scale_factor, 1.3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::parse_from(["bcm-rs", "-v", "generate", "Pt", "Pd"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate { shells, out, .. } => {
                assert_eq!(shells, 4);
                assert_eq!(out, PathBuf::from("Data"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_calibrate_counts_whole_bonds_by_default() {
        let cli = Cli::parse_from([
            "bcm-rs",
            "calibrate",
            "--structures",
            "a.xyz",
            "b.xyz",
            "--np-energies",
            "np.csv",
            "--atom-energies",
            "atoms.csv",
        ]);
        match cli.command {
            Commands::Calibrate { structures, model, .. } => {
                assert_eq!(structures.len(), 2);
                let config = model.load_or(ModelConfig::calibration()).unwrap();
                assert_eq!(config.cn_method, CnMethod::Int);

                let frac = ModelArgs {
                    cn_method: Some(CnMethod::Frac),
                    ..model
                };
                let config = frac.load_or(ModelConfig::calibration()).unwrap();
                assert_eq!(config.cn_method, CnMethod::Frac);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let args = ModelArgs {
            scale: Some(-1.0),
            ..Default::default()
        };
        assert!(args.load().is_err());
    }
}
