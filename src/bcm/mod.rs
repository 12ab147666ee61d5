/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Bond-Centric Model (BCM)
//!
//! Cohesive energies of metal nanoparticles from a bond list, coordination
//! numbers, per-element bulk cohesive energies and pairwise gamma weights.

pub mod bonds;
pub mod coordination;
pub mod errors;
pub mod gammas;
pub mod model;
pub mod reference;

pub use bonds::{cutoff_radii, BondList};
pub use coordination::{coordination_numbers, shell_map, CnMethod};
pub use errors::{BcmError, Result};
pub use gammas::GammaTable;
pub use model::{configured_gammas, BondCentricModel};
