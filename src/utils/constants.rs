/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants and model defaults

/// Hartree energy in eV
pub const HARTREE_TO_EV: f64 = 27.2114;

/// Conversion from eV to Hartree
pub const EV_TO_HARTREE: f64 = 1.0 / HARTREE_TO_EV;

/// Bulk coordination number of an fcc metal
pub const FCC_BULK_CN: f64 = 12.0;
