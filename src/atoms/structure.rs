/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Finite atomic clusters (nanoparticles)

use super::atom::Atom;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use ndarray::Array2;
use std::ops::Range;

/// An ordered, non-periodic collection of atoms
///
/// Atom order is significant: bond lists, coordination numbers and chemical
/// orderings all refer to atoms by their index in the cluster.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cluster {
    atoms: Vec<Atom>,
    /// Free-text description, written to the XYZ comment line
    comment: String,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            comment: String::new(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.to_string();
    }

    /// Add an atom and return its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Element symbol of every atom, in cluster order
    pub fn symbols(&self) -> Vec<&'static str> {
        self.atoms.iter().map(Atom::symbol).collect()
    }

    /// Sorted unique element symbols
    pub fn metal_types(&self) -> Vec<&'static str> {
        let mut types = self.symbols();
        types.sort_unstable();
        types.dedup();
        types
    }

    /// Chemical ordering: the index of each atom's element in `metal_types()`
    pub fn ordering(&self) -> Vec<usize> {
        let types = self.metal_types();
        self.atoms
            .iter()
            .map(|atom| {
                // metal_types() holds every symbol, so the search always hits
                types
                    .binary_search(&atom.symbol())
                    .unwrap_or_else(|insert_at| insert_at)
            })
            .collect()
    }

    /// Number of atoms of each element, in `metal_types()` order
    pub fn composition(&self) -> Vec<usize> {
        self.metal_types()
            .iter()
            .map(|metal| self.count(metal))
            .collect()
    }

    /// Number of atoms of the given element
    pub fn count(&self, symbol: &str) -> usize {
        self.atoms.iter().filter(|a| a.symbol() == symbol).count()
    }

    /// Chemical formula such as "Au100Pd209", elements in alphabetical order
    pub fn formula(&self) -> String {
        self.metal_types()
            .iter()
            .map(|metal| format!("{}{}", metal, self.count(metal)))
            .collect()
    }

    pub fn set_symbol(&mut self, index: usize, symbol: &str) -> Result<()> {
        let len = self.atoms.len();
        self.atoms
            .get_mut(index)
            .ok_or(AtomError::IndexOutOfRange { index, len })?
            .set_symbol(symbol)
    }

    /// Set the element of every atom in an index range
    pub fn set_symbols(&mut self, range: Range<usize>, symbol: &str) -> Result<()> {
        if range.end > self.atoms.len() {
            return Err(AtomError::IndexOutOfRange {
                index: range.end,
                len: self.atoms.len(),
            });
        }
        for atom in &mut self.atoms[range] {
            atom.set_symbol(symbol)?;
        }
        Ok(())
    }

    /// Exchange two elements: every `a` becomes `b` and every `b` becomes `a`
    pub fn swap_elements(&mut self, a: &str, b: &str) -> Result<()> {
        let a_idx: Vec<usize> = self.indices_of(a);
        let b_idx: Vec<usize> = self.indices_of(b);
        for i in a_idx {
            self.atoms[i].set_symbol(b)?;
        }
        for i in b_idx {
            self.atoms[i].set_symbol(a)?;
        }
        Ok(())
    }

    /// Indices of the atoms of one element
    pub fn indices_of(&self, symbol: &str) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| a.symbol().eq_ignore_ascii_case(symbol))
            .map(|(i, _)| i)
            .collect()
    }

    /// New cluster made of the selected atoms, in the given order
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let atoms = indices
            .iter()
            .map(|&index| {
                self.atoms.get(index).cloned().ok_or(AtomError::IndexOutOfRange {
                    index,
                    len: self.atoms.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            atoms,
            comment: self.comment.clone(),
        })
    }

    pub fn position(&self, index: usize) -> Option<Vector3D> {
        self.atoms.get(index).map(|a| *a.position())
    }

    /// Positions as an N x 3 array
    pub fn positions(&self) -> Array2<f64> {
        let mut positions = Array2::<f64>::zeros((self.atoms.len(), 3));
        for (mut row, atom) in positions.rows_mut().into_iter().zip(&self.atoms) {
            let p = atom.position();
            row[0] = p.x;
            row[1] = p.y;
            row[2] = p.z;
        }
        positions
    }

    /// Geometric center of the cluster
    pub fn center(&self) -> Vector3D {
        if self.atoms.is_empty() {
            return Vector3D::origin();
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3D::origin(), |acc, a| acc + *a.position());
        sum * (1.0 / self.atoms.len() as f64)
    }

    /// All pairwise distances as a symmetric N x N array
    pub fn distance_matrix(&self) -> Array2<f64> {
        let n = self.atoms.len();
        let mut distances = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in (i + 1)..n {
                let dist = self.atoms[i].distance_to(&self.atoms[j]);
                distances[[i, j]] = dist;
                distances[[j, i]] = dist;
            }
        }

        distances
    }
}
