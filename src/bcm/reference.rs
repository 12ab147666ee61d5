/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reference parameters for the Bond-Centric Model
//!
//! Bulk cohesive energies are PBE-D3 values in eV/atom (Yan et al., J. Chem.
//! Phys. 144, 2016, supplementary material). Custom bond radii are tuned for the
//! noble metals; every other element falls back to its covalent radius.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// PBE-D3 bulk cohesive energies in eV/atom
pub static BULK_CE_PBE_D3: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
    BTreeMap::from([
        ("Ag", -2.96),
        ("Au", -3.64),
        ("Cu", -3.95),
        ("Ir", -7.95),
        ("Ni", -5.11),
        ("Pd", -4.20),
        ("Pt", -6.20),
    ])
});

/// Bond radii (Angstrom) that override the covalent radius, before scaling
pub static CUSTOM_RADII: Lazy<BTreeMap<&'static str, f64>> =
    Lazy::new(|| BTreeMap::from([("Au", 1.47), ("Pd", 1.38), ("Pt", 1.38)]));

/// Bulk cohesive energy of an element in eV/atom
pub fn bulk_cohesive_energy(symbol: &str) -> Option<f64> {
    BULK_CE_PBE_D3.get(symbol).copied()
}

/// Unscaled custom bond radius, if one is defined for the element
pub fn custom_radius(symbol: &str) -> Option<f64> {
    CUSTOM_RADII.get(symbol).copied()
}
