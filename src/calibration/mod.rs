/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Gamma calibration
//!
//! Reads reference DFT energies, converts them to cohesive energies and fits
//! the heteroatomic gamma coefficients of the bond-centric model.

pub mod energies;
pub mod errors;
pub mod fit;

pub use energies::{cohesive_energy_from_total, folder_base_name, CsvTable, ReferenceEnergies};
pub use errors::{CalibrationError, Result};
pub use fit::{calc_gammas, calibrate_from_files, update_gamma_file, Reference};
