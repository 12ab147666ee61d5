/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the Bond-Centric Model

use crate::atoms::AtomError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised while building or evaluating a Bond-Centric Model
#[derive(Error, Debug)]
pub enum BcmError {
    #[error("No bulk cohesive energy for element {0}")]
    MissingBulkEnergy(String),

    #[error("No bond cutoff radius for element {0}")]
    MissingRadius(String),

    #[error("Cluster has no atoms")]
    EmptyCluster,

    #[error("Ordering has {got} entries, expected {expected}")]
    OrderingLength { expected: usize, got: usize },

    #[error("Ordering refers to metal type {index}, but only {available} are defined")]
    UnknownMetalType { index: usize, available: usize },

    #[error("Bond ({from}, {to}) is out of range for {num_atoms} atoms")]
    BondIndex { from: usize, to: usize, num_atoms: usize },

    #[error("Gamma file error: {0}")]
    GammaFile(#[from] std::io::Error),

    #[error("Gamma JSON error: {0}")]
    GammaJson(#[from] serde_json::Error),

    #[error(transparent)]
    Atom(#[from] AtomError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for Bond-Centric Model operations
pub type Result<T> = std::result::Result<T, BcmError>;
