/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Atom index {index} out of range for cluster of {len} atoms")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
