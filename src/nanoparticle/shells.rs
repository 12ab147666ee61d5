/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Core/shell composition of a nanoparticle

use crate::atoms::Cluster;
use std::collections::BTreeMap;
use std::fmt;

/// Per-shell composition, core first and surface last
///
/// The two innermost layers of the shell map form the core, numbered 1. Every
/// further layer keeps its own entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellInfo {
    /// Shell numbers, starting at 1 for the core
    pub shells: Vec<usize>,
    /// Fraction of each shell occupied by each metal
    pub comps: BTreeMap<String, Vec<f64>>,
    /// Number of atoms in each shell
    pub totals: Vec<usize>,
}

impl ShellInfo {
    /// Summarise `shell_map` (innermost layer first) for `cluster`
    pub fn from_shell_map(cluster: &Cluster, shell_map: &[Vec<usize>]) -> Self {
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(shell_map.len());
        let mut layers = shell_map.iter();
        if let Some(center) = layers.next() {
            let mut core = center.clone();
            if let Some(next) = layers.next() {
                core.extend_from_slice(next);
            }
            groups.push(core);
        }
        groups.extend(layers.cloned());

        let metals = cluster.metal_types();
        let mut comps: BTreeMap<String, Vec<f64>> = metals
            .iter()
            .map(|m| (m.to_string(), Vec::with_capacity(groups.len())))
            .collect();
        let mut totals = Vec::with_capacity(groups.len());

        for group in &groups {
            let total = group.len();
            for metal in &metals {
                let count = group
                    .iter()
                    .filter(|&&i| cluster.atom(i).map(|a| a.symbol()) == Some(*metal))
                    .count();
                let fraction = if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                };
                if let Some(column) = comps.get_mut(*metal) {
                    column.push(fraction);
                }
            }
            totals.push(total);
        }

        Self {
            shells: (1..=groups.len()).collect(),
            comps,
            totals,
        }
    }

    pub fn len(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// Fraction of `metal` in every shell; zeros for a metal not present
    pub fn fractions(&self, metal: &str) -> Vec<f64> {
        self.comps
            .get(metal)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.shells.len()])
    }

    /// Text table of the composition under a title line
    pub fn report<'a>(&'a self, title: &'a str) -> ShellReport<'a> {
        ShellReport { info: self, title }
    }
}

/// Plain-text table of a [`ShellInfo`]
pub struct ShellReport<'a> {
    info: &'a ShellInfo,
    title: &'a str,
}

impl fmt::Display for ShellReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{:<14}{:>7}", "Shell", "Atoms")?;
        for metal in self.info.comps.keys() {
            write!(f, "{:>9}", metal)?;
        }
        writeln!(f)?;

        let last = self.info.shells.len();
        for (row, (&shell, &total)) in self.info.shells.iter().zip(&self.info.totals).enumerate() {
            let label = match shell {
                1 => format!("{} (core)", shell),
                s if s == last => format!("{} (surface)", s),
                s => s.to_string(),
            };
            write!(f, "{:<14}{:>7}", label, total)?;
            for column in self.info.comps.values() {
                write!(f, "{:>9.4}", column[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
