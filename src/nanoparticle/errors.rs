/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the nanoparticle facade

use crate::atoms::AtomError;
use crate::bcm::BcmError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while analysing a nanoparticle
#[derive(Error, Debug)]
pub enum NanoparticleError {
    #[error("Nanoparticle has no atoms")]
    Empty,

    #[error("Shell map is empty")]
    NoShells,

    #[error(transparent)]
    Bcm(#[from] BcmError),

    #[error(transparent)]
    Atom(#[from] AtomError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for nanoparticle operations
pub type Result<T> = std::result::Result<T, NanoparticleError>;
