/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for gamma calibration

use crate::atoms::AtomError;
use crate::bcm::BcmError;
use crate::utils::UtilsError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading reference energies or fitting gammas
#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("CSV error on line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("No reference energy for '{0}'")]
    MissingEntry(String),

    #[error("No single-atom energy for element {0}")]
    MissingAtomEnergy(String),

    #[error("No reference structures given")]
    NoReferences,

    #[error("Reference structures contain no heteroatomic element pairs")]
    NoHeteroatomicPairs,

    #[error("Calibration system is degenerate: {0}")]
    Degenerate(String),

    #[error(transparent)]
    Solver(#[from] UtilsError),

    #[error(transparent)]
    Bcm(#[from] BcmError),

    #[error(transparent)]
    Atom(#[from] AtomError),
}

/// Result type for calibration operations
pub type Result<T> = std::result::Result<T, CalibrationError>;
