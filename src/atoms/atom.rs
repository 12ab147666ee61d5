/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom representation for nanoparticle structures

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use std::fmt;

/// A single atom: its element and Cartesian position
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Canonical element symbol, e.g. "Pd"
    symbol: &'static str,
    /// Atomic number (Z)
    atomic_number: u32,
    /// Position in Angstrom
    position: Vector3D,
}

impl Atom {
    /// Create a new atom of the given element at a position
    pub fn new(symbol: &str, position: Vector3D) -> Result<Self> {
        let atomic_number = database::atomic_number_from_symbol(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;
        let symbol = database::element_symbol(atomic_number)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        Ok(Self {
            symbol,
            atomic_number,
            position,
        })
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Change the element of this atom, keeping its position
    pub fn set_symbol(&mut self, symbol: &str) -> Result<()> {
        let replacement = Self::new(symbol, self.position)?;
        self.symbol = replacement.symbol;
        self.atomic_number = replacement.atomic_number;
        Ok(())
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Covalent radius from the element database
    pub fn covalent_radius(&self) -> Option<f64> {
        database::covalent_radius(self.atomic_number)
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={}) at {}", self.symbol, self.atomic_number, self.position)
    }
}
