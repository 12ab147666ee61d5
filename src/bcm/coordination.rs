/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordination numbers and core/shell layering

use super::bonds::BondList;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How coordination numbers are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CnMethod {
    /// Number of bonded neighbours
    Int,
    /// Generalized coordination number: sum of neighbour CNs over the bulk CN
    #[default]
    Frac,
}

impl FromStr for CnMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" => Ok(Self::Int),
            "frac" => Ok(Self::Frac),
            other => Err(format!("unknown CN method '{}' (expected int or frac)", other)),
        }
    }
}

impl fmt::Display for CnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Frac => write!(f, "frac"),
        }
    }
}

/// Coordination number of every atom
pub fn coordination_numbers(bonds: &BondList, method: CnMethod, cn_bulk: f64) -> Vec<f64> {
    let degrees = bonds.degrees();
    match method {
        CnMethod::Int => degrees.iter().map(|&d| d as f64).collect(),
        CnMethod::Frac => {
            let mut gcn = vec![0.0; bonds.num_atoms()];
            for &(i, j) in bonds.iter() {
                gcn[i] += degrees[j] as f64 / cn_bulk;
            }
            gcn
        }
    }
}

/// Group atoms into concentric shells, innermost first
///
/// Layers are peeled from the outside: among the atoms not yet assigned, those
/// with fewer than `cn_bulk` bonds to other unassigned atoms form the next shell
/// inwards. Each shell lists atom indices in ascending order.
pub fn shell_map(bonds: &BondList, cn_bulk: f64) -> Vec<Vec<usize>> {
    let n = bonds.num_atoms();
    let adjacency = bonds.adjacency();
    let mut remaining = vec![true; n];
    let mut left = n;
    let mut layers: Vec<Vec<usize>> = Vec::new();

    while left > 0 {
        let mut layer: Vec<usize> = (0..n)
            .filter(|&i| remaining[i])
            .filter(|&i| {
                let cn = adjacency[i].iter().filter(|&&j| remaining[j]).count();
                (cn as f64) < cn_bulk
            })
            .collect();

        // Nothing under-coordinated left: what remains is one shell
        if layer.is_empty() {
            layer = (0..n).filter(|&i| remaining[i]).collect();
        }

        for &i in &layer {
            remaining[i] = false;
        }
        left -= layer.len();
        layers.push(layer);
    }

    layers.reverse();
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Star: atom 0 bonded to atoms 1..=4
    fn star() -> BondList {
        let mut pairs = Vec::new();
        for j in 1..=4 {
            pairs.push((0, j));
            pairs.push((j, 0));
        }
        BondList::from_pairs(5, pairs).unwrap()
    }

    #[test]
    fn test_integer_cn() {
        let cn = coordination_numbers(&star(), CnMethod::Int, 12.0);
        assert_eq!(cn, vec![4.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_generalized_cn() {
        let cn = coordination_numbers(&star(), CnMethod::Frac, 12.0);
        assert_relative_eq!(cn[0], 4.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(cn[1], 4.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shell_map_star() {
        // With a bulk CN of 4 the hub is fully coordinated until its arms are gone
        let shells = shell_map(&star(), 4.0);
        assert_eq!(shells, vec![vec![0], vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_shell_map_empty() {
        assert!(shell_map(&BondList::from_pairs(0, Vec::new()).unwrap(), 12.0).is_empty());
    }

    #[test]
    fn test_cn_method_parsing() {
        assert_eq!("INT".parse::<CnMethod>().unwrap(), CnMethod::Int);
        assert_eq!("frac".parse::<CnMethod>().unwrap(), CnMethod::Frac);
        assert!("half".parse::<CnMethod>().is_err());
        assert_eq!(CnMethod::Frac.to_string(), "frac");
    }
}
