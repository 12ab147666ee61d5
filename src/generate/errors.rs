/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for structure generation

use crate::atoms::AtomError;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating nanoparticle structures
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("An icosahedron needs at least one shell")]
    NoShells,

    #[error("No fcc lattice constant known for {0}; pass one explicitly")]
    UnknownLatticeConstant(String),

    #[error("Lattice constant must be positive, got {0}")]
    InvalidLatticeConstant(f64),

    #[error("No covalent radius for element {0}")]
    MissingRadius(String),

    #[error("Coordination list has {got} entries for {expected} atoms")]
    CnLength { expected: usize, got: usize },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error(transparent)]
    Atom(#[from] AtomError),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;
