/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Matrix shapes do not agree
    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    /// Linear system has no unique solution
    #[error("Singular matrix: pivot {pivot} at column {column}")]
    Singular { column: usize, pivot: f64 },
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
