/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure generation
//!
//! Icosahedral clusters and the mirrored bimetallic reference pairs that are
//! sent to DFT for gamma calibration.

pub mod errors;
pub mod icosahedron;
pub mod setup;

pub use errors::{GenerateError, Result};
pub use icosahedron::{icosahedron, icosahedron_size};
pub use setup::{coordination_numbers, evenly_distribute, setup_dft_pair, DftPair};
