/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # bcm-rs
//!
//! Cohesive energies of bimetallic and trimetallic metal nanoparticles with the
//! Bond-Centric Model (BCM), and calibration of its heteroatomic gamma
//! parameters against DFT reference energies.
//!
//! ```no_run
//! use bcm_rs::{ModelConfig, Nanoparticle};
//!
//! let np = Nanoparticle::from_xyz("Au55.xyz", &ModelConfig::default())?;
//! println!("{:.4} eV/atom", np.calc_ce());
//! # Ok::<(), bcm_rs::nanoparticle::NanoparticleError>(())
//! ```

pub mod atoms;
pub mod bcm;
pub mod calibration;
pub mod cli;
pub mod config;
pub mod generate;
pub mod nanoparticle;
pub mod utils;

pub use atoms::{Atom, Cluster, Vector3D};
pub use bcm::{BondCentricModel, CnMethod, GammaTable};
pub use config::ModelConfig;
pub use nanoparticle::Nanoparticle;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
