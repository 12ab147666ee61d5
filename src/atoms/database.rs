/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element reference data
//!
//! Element symbols, covalent radii (Angstrom) and fcc lattice constants for the
//! metals the nanoparticle tools know how to build.

/// (symbol, covalent radius in Angstrom), indexed by atomic number - 1
static ELEMENTS: [(&str, f64); 118] = [
    ("H", 0.31), ("He", 0.28), ("Li", 1.28), ("Be", 0.96), ("B", 0.84), ("C", 0.76),
    ("N", 0.71), ("O", 0.66), ("F", 0.57), ("Ne", 0.58), ("Na", 1.66), ("Mg", 1.41),
    ("Al", 1.21), ("Si", 1.11), ("P", 1.07), ("S", 1.05), ("Cl", 1.02), ("Ar", 1.06),
    ("K", 2.03), ("Ca", 1.76), ("Sc", 1.70), ("Ti", 1.60), ("V", 1.53), ("Cr", 1.39),
    ("Mn", 1.39), ("Fe", 1.32), ("Co", 1.26), ("Ni", 1.24), ("Cu", 1.32), ("Zn", 1.22),
    ("Ga", 1.22), ("Ge", 1.20), ("As", 1.19), ("Se", 1.20), ("Br", 1.20), ("Kr", 1.16),
    ("Rb", 2.20), ("Sr", 1.95), ("Y", 1.90), ("Zr", 1.75), ("Nb", 1.64), ("Mo", 1.54),
    ("Tc", 1.47), ("Ru", 1.46), ("Rh", 1.42), ("Pd", 1.39), ("Ag", 1.45), ("Cd", 1.44),
    ("In", 1.42), ("Sn", 1.39), ("Sb", 1.39), ("Te", 1.38), ("I", 1.39), ("Xe", 1.40),
    ("Cs", 2.44), ("Ba", 2.15), ("La", 2.07), ("Ce", 2.04), ("Pr", 2.03), ("Nd", 2.01),
    ("Pm", 1.99), ("Sm", 1.98), ("Eu", 1.98), ("Gd", 1.96), ("Tb", 1.94), ("Dy", 1.92),
    ("Ho", 1.92), ("Er", 1.89), ("Tm", 1.90), ("Yb", 1.87), ("Lu", 1.87), ("Hf", 1.75),
    ("Ta", 1.70), ("W", 1.62), ("Re", 1.51), ("Os", 1.44), ("Ir", 1.41), ("Pt", 1.36),
    ("Au", 1.36), ("Hg", 1.32), ("Tl", 1.45), ("Pb", 1.46), ("Bi", 1.48), ("Po", 1.40),
    ("At", 1.50), ("Rn", 1.50), ("Fr", 2.60), ("Ra", 2.21), ("Ac", 2.15), ("Th", 2.06),
    ("Pa", 2.00), ("U", 1.96), ("Np", 1.90), ("Pu", 1.87), ("Am", 1.80), ("Cm", 1.69),
    ("Bk", 1.65), ("Cf", 1.65), ("Es", 1.65), ("Fm", 1.65), ("Md", 1.65), ("No", 1.65),
    ("Lr", 1.65), ("Rf", 1.65), ("Db", 1.65), ("Sg", 1.65), ("Bh", 1.65), ("Hs", 1.65),
    ("Mt", 1.65), ("Ds", 1.65), ("Rg", 1.65), ("Cn", 1.65), ("Nh", 1.65), ("Fl", 1.65),
    ("Mc", 1.65), ("Lv", 1.65), ("Ts", 1.65), ("Og", 1.65),
];

/// Returns the element symbol for an atomic number
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    let idx = (atomic_number as usize).checked_sub(1)?;
    ELEMENTS.get(idx).map(|(symbol, _)| *symbol)
}

/// Returns the atomic number for an element symbol
///
/// Lookup is case-insensitive, so "Pd", "pd" and "PD" all resolve to 46
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.len() > 3 {
        return None;
    }
    ELEMENTS
        .iter()
        .position(|(s, _)| s.eq_ignore_ascii_case(symbol))
        .map(|idx| idx as u32 + 1)
}

/// Returns the canonical capitalization of an element symbol
pub fn canonical_symbol(symbol: &str) -> Option<&'static str> {
    atomic_number_from_symbol(symbol).and_then(element_symbol)
}

/// Returns the covalent radius in Angstroms
pub fn covalent_radius(atomic_number: u32) -> Option<f64> {
    let idx = (atomic_number as usize).checked_sub(1)?;
    ELEMENTS.get(idx).map(|(_, radius)| *radius)
}

/// Returns the experimental fcc lattice constant in Angstroms
pub fn fcc_lattice_constant(symbol: &str) -> Option<f64> {
    match canonical_symbol(symbol)? {
        "Ni" => Some(3.52),
        "Cu" => Some(3.61),
        "Pd" => Some(3.89),
        "Ag" => Some(4.09),
        "Ir" => Some(3.84),
        "Pt" => Some(3.92),
        "Au" => Some(4.08),
        "Al" => Some(4.05),
        "Rh" => Some(3.80),
        "Pb" => Some(4.95),
        _ => None,
    }
}
