/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared across the crate

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod linear_algebra;

pub use conversions::{ev_to_hartree, hartree_to_ev};
pub use errors::{Result, UtilsError};
pub use linear_algebra::{least_squares, solve_linear_system};
