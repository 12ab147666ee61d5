/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic structure module
//!
//! Elements, atoms and finite clusters, plus the element reference tables and
//! XYZ file support the rest of the crate builds on.

pub mod atom;
pub mod database;
pub mod errors;
pub mod structure;
pub mod vector;
pub mod xyz;

pub use atom::Atom;
pub use errors::{AtomError, Result};
pub use structure::Cluster;
pub use vector::Vector3D;
pub use xyz::{format_xyz, parse_xyz, read_xyz, write_xyz};
