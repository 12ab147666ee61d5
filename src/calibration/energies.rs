/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reference DFT energies
//!
//! Two tables feed a calibration:
//!
//! * nanoparticle energies, with columns `Folder_Name` and `Energy (eV)`; the
//!   folder is reduced to its last path component with any `RESTART_` prefix
//!   removed, so `runs/RESTART_Pd73Pt74` is looked up as `Pd73Pt74`;
//! * single-atom energies, with columns `NP` (the element) and `Energy (Ha)`.

use super::errors::{CalibrationError, Result};
use crate::atoms::Cluster;
use crate::utils::hartree_to_ev;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const FOLDER_COLUMN: &str = "Folder_Name";
pub const NP_ENERGY_COLUMN: &str = "Energy (eV)";
pub const ELEMENT_COLUMN: &str = "NP";
pub const ATOM_ENERGY_COLUMN: &str = "Energy (Ha)";

const RESTART_PREFIX: &str = "RESTART_";

/// A parsed CSV file: header names and string cells
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<(usize, Vec<String>)>,
}

impl CsvTable {
    /// Parse comma-separated text with a header line
    ///
    /// Double-quoted fields may contain commas and `""` escapes. Blank lines are
    /// skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_line, header) = lines.next().ok_or(CalibrationError::Csv {
            line: 1,
            message: "missing header".to_string(),
        })?;
        let headers = split_record(header, header_line)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();

        let rows = lines
            .map(|(number, line)| split_record(line, number).map(|fields| (number, fields)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { headers, rows })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the named column
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CalibrationError::MissingColumn(name.to_string()))
    }

    /// Pairs of (key column, numeric value column) for every row
    pub fn key_values(&self, key: &str, value: &str) -> Result<Vec<(String, f64)>> {
        let key_idx = self.column(key)?;
        let value_idx = self.column(value)?;

        self.rows
            .iter()
            .map(|(line, fields)| {
                let cell = |idx: usize| {
                    fields.get(idx).map(|s| s.trim()).ok_or(CalibrationError::Csv {
                        line: *line,
                        message: format!("expected at least {} fields", idx + 1),
                    })
                };
                let key = cell(key_idx)?.to_string();
                let raw = cell(value_idx)?;
                let number = raw.parse::<f64>().map_err(|_| CalibrationError::Csv {
                    line: *line,
                    message: format!("invalid number '{}' in column '{}'", raw, value),
                })?;
                Ok((key, number))
            })
            .collect()
    }
}

/// Split one CSV record, honouring double quotes
fn split_record(line: &str, line_number: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CalibrationError::Csv {
            line: line_number,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(field);
    Ok(fields)
}

/// Reduce a run folder to the structure name it was computed for
pub fn folder_base_name(folder: &str) -> String {
    let trimmed = folder.trim().trim_end_matches(['/', '\\']);
    let base = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    base.replace(RESTART_PREFIX, "")
}

/// Nanoparticle and single-atom reference energies, all in eV
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceEnergies {
    /// Total energy per structure name
    pub nanoparticles: BTreeMap<String, f64>,
    /// Isolated-atom energy per element
    pub atoms: BTreeMap<String, f64>,
}

impl ReferenceEnergies {
    /// Read both reference tables
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(np_energies: P, atom_energies: Q) -> Result<Self> {
        let energies = Self {
            nanoparticles: Self::parse_nanoparticles(&CsvTable::from_file(np_energies)?)?,
            atoms: Self::parse_atoms(&CsvTable::from_file(atom_energies)?)?,
        };
        log::info!(
            "Loaded {} nanoparticle and {} single-atom reference energies",
            energies.nanoparticles.len(),
            energies.atoms.len()
        );
        Ok(energies)
    }

    /// Nanoparticle energies keyed by folder base name
    ///
    /// A later row for the same structure replaces an earlier one, so restarted
    /// runs listed after the original take precedence.
    pub fn parse_nanoparticles(table: &CsvTable) -> Result<BTreeMap<String, f64>> {
        let mut energies = BTreeMap::new();
        for (folder, energy) in table.key_values(FOLDER_COLUMN, NP_ENERGY_COLUMN)? {
            let name = folder_base_name(&folder);
            if energies.insert(name.clone(), energy).is_some() {
                log::warn!("Duplicate energy for {}; keeping {} from {}", name, energy, folder);
            }
        }
        Ok(energies)
    }

    /// Single-atom energies converted from Hartree to eV
    pub fn parse_atoms(table: &CsvTable) -> Result<BTreeMap<String, f64>> {
        Ok(table
            .key_values(ELEMENT_COLUMN, ATOM_ENERGY_COLUMN)?
            .into_iter()
            .map(|(element, hartree)| (element, hartree_to_ev(hartree)))
            .collect())
    }

    /// Cohesive energy of a named reference structure in eV/atom
    pub fn cohesive_energy(&self, name: &str, cluster: &Cluster) -> Result<f64> {
        let total = self
            .nanoparticles
            .get(name)
            .copied()
            .ok_or_else(|| CalibrationError::MissingEntry(name.to_string()))?;
        cohesive_energy_from_total(total, cluster, &self.atoms)
    }
}

/// Cohesive energy `(E_np - sum_X n_X E_X) / N` in eV/atom
pub fn cohesive_energy_from_total(
    total_energy: f64,
    cluster: &Cluster,
    atom_energies: &BTreeMap<String, f64>,
) -> Result<f64> {
    if cluster.is_empty() {
        return Err(CalibrationError::Atom(
            crate::atoms::AtomError::InvalidStructure("empty cluster".to_string()),
        ));
    }

    let mut isolated = 0.0;
    for (metal, count) in cluster.metal_types().iter().zip(cluster.composition()) {
        let energy = atom_energies
            .get(*metal)
            .ok_or_else(|| CalibrationError::MissingAtomEnergy(metal.to_string()))?;
        isolated += count as f64 * energy;
    }

    Ok((total_energy - isolated) / cluster.len() as f64)
}
