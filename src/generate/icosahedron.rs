/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mackay icosahedral clusters
//!
//! Shell `n` of a Mackay icosahedron holds `10 n^2 + 2` atoms on the surface of
//! an icosahedron whose vertices sit `n * d` from the center, where `d` is the
//! nearest-neighbour distance. Atoms within a shell touch at `1.05 d` along the
//! surface.
//!
//! Atoms are emitted in a fixed order: the center, then per shell the vertex
//! edges, the face interiors and the remaining face points. Site selection in
//! [`super::evenly_distribute`] depends on this order.

use super::errors::{GenerateError, Result};
use crate::atoms::{database, Atom, Cluster, Vector3D};

/// Golden ratio
const TAU: f64 = 1.618_033_988_749_895;

/// Icosahedron vertices, ordered in pairs that share an edge
const VERTICES: [[f64; 3]; 12] = [
    [TAU, 0.0, 1.0],
    [TAU, 0.0, -1.0],
    [-TAU, 0.0, 1.0],
    [-TAU, 0.0, -1.0],
    [1.0, TAU, 0.0],
    [-1.0, TAU, 0.0],
    [1.0, -TAU, 0.0],
    [-1.0, -TAU, 0.0],
    [0.0, 1.0, TAU],
    [0.0, -1.0, TAU],
    [0.0, 1.0, -TAU],
    [0.0, -1.0, -TAU],
];

/// For each vertex, the edge pair spanning one of its faces
const FACE_SPANS: [(usize, usize); 12] = [
    (8, 9),
    (10, 11),
    (8, 9),
    (10, 11),
    (0, 1),
    (2, 3),
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (4, 5),
    (6, 7),
];

/// Spans of the eight faces not reached through [`FACE_SPANS`]
const REMAINING_SPANS: [(usize, usize, usize, usize); 4] =
    [(9, 6, 8, 4), (11, 6, 10, 4), (9, 7, 8, 5), (11, 7, 10, 5)];

/// Number of atoms in a Mackay icosahedron with the given number of shells
pub fn icosahedron_size(shells: usize) -> usize {
    if shells == 0 {
        return 0;
    }
    1 + (1..shells).map(|n| 10 * n * n + 2).sum::<usize>()
}

fn vertex(k: usize) -> Vector3D {
    let [x, y, z] = VERTICES[k];
    Vector3D::new(x, y, z)
}

/// Lattice points of shell `n` in vertex units, in emission order
fn shell_points(n: usize) -> Vec<Vector3D> {
    let mut points = Vec::with_capacity(10 * n * n + 2);
    let nf = n as f64;

    for k in (0..12).step_by(2) {
        let (v1, v2) = (vertex(k), vertex(k + 1));
        for i in 0..=n {
            points.push(v1 * i as f64 + v2 * (n - i) as f64);
        }
    }

    if n > 1 {
        for (k, &(a, b)) in FACE_SPANS.iter().enumerate() {
            let v0 = vertex(k) * nf;
            let (v1, v2) = (vertex(a) - vertex(k), vertex(b) - vertex(k));
            for i in 0..n {
                for j in 0..(n - i) {
                    if i == 0 && j == 0 {
                        continue;
                    }
                    points.push(v0 + v1 * i as f64 + v2 * j as f64);
                }
            }
        }
    }

    if n > 2 {
        for (k, &(a, b, c, d)) in REMAINING_SPANS.iter().enumerate() {
            let v0 = vertex(k) * nf;
            let [v1, v2, v3, v4] = [a, b, c, d].map(|x| vertex(x) - vertex(k));
            for i in 1..n {
                for j in 1..(n - i) {
                    points.push(v0 + v1 * i as f64 + v2 * j as f64);
                    points.push(v0 + v3 * i as f64 + v4 * j as f64);
                }
            }
        }
    }
    points
}

/// Build a single-element Mackay icosahedron
///
/// The center atom comes first, followed by each shell from the inside out.
/// When `lattice_constant` is `None` the element's fcc lattice constant is used;
/// the nearest-neighbour distance is `a / sqrt(2)`.
pub fn icosahedron(symbol: &str, shells: usize, lattice_constant: Option<f64>) -> Result<Cluster> {
    if shells == 0 {
        return Err(GenerateError::NoShells);
    }
    let a = match lattice_constant {
        Some(a) => a,
        None => database::fcc_lattice_constant(symbol)
            .ok_or_else(|| GenerateError::UnknownLatticeConstant(symbol.to_string()))?,
    };
    if !(a > 0.0) {
        return Err(GenerateError::InvalidLatticeConstant(a));
    }
    // Vertices have length sqrt(1 + tau^2); scale them onto the nn distance
    let scale = a / (2.0 * (1.0 + TAU * TAU)).sqrt();

    let mut cluster = Cluster::new();
    cluster.add_atom(Atom::new(symbol, Vector3D::origin())?);
    for n in 1..shells {
        for point in shell_points(n) {
            cluster.add_atom(Atom::new(symbol, point * scale)?);
        }
    }

    cluster.set_comment(&format!("{} Mackay icosahedron, {} shells", symbol, shells));
    log::debug!("Built {}-shell {} icosahedron with {} atoms", shells, symbol, cluster.len());
    Ok(cluster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shell_points() {
        for n in 1..6 {
            let points = shell_points(n);
            assert_eq!(points.len(), 10 * n * n + 2, "shell {}", n);
            for (i, p) in points.iter().enumerate() {
                assert!(points[i + 1..].iter().all(|q| p.distance(q) > 0.5));
            }
        }
    }

    #[test]
    fn test_magic_numbers() {
        for (shells, expected) in [(1, 1), (2, 13), (3, 55), (4, 147), (5, 309)] {
            assert_eq!(icosahedron_size(shells), expected);
            let cluster = icosahedron("Au", shells, None).unwrap();
            assert_eq!(cluster.len(), expected, "{} shells", shells);
        }
    }

    #[test]
    fn test_nearest_neighbor_distance() {
        let cluster = icosahedron("Cu", 3, None).unwrap();
        let d = 3.61 / 2f64.sqrt();

        // Vertices sit exactly d from the center
        for atom in &cluster.atoms()[1..13] {
            assert_relative_eq!(atom.position().length(), d, epsilon = 1e-9);
        }
        // Second-shell vertices sit at 2d
        assert_relative_eq!(cluster.atoms()[13].position().length(), 2.0 * d, epsilon = 1e-9);

        // Atoms within a shell are about 5% further apart
        let shell: Vec<_> = cluster.atoms()[1..13].iter().collect();
        let min = shell
            .iter()
            .enumerate()
            .flat_map(|(i, a)| shell[i + 1..].iter().map(move |b| a.distance_to(b)))
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(min, 2.0 * d / (1.0 + TAU * TAU).sqrt(), epsilon = 1e-9);
        assert!(min > 1.05 * d && min < 1.06 * d);
    }

    #[test]
    fn test_atom_order() {
        let cluster = icosahedron("Pt", 3, None).unwrap();
        let d = 3.92 / 2f64.sqrt();
        let unit = |k: usize| vertex(k) * (d / vertex(k).length());

        // First shell is vertex 1, vertex 0, vertex 3, vertex 2, ...
        assert_relative_eq!(cluster.atoms()[1].position().distance(&unit(1)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(cluster.atoms()[2].position().distance(&unit(0)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(cluster.atoms()[3].position().distance(&unit(3)), 0.0, epsilon = 1e-9);

        // Second shell opens with vertex 1, the midpoint of edge 0-1, then vertex 0
        let midpoint = unit(0) + unit(1);
        assert_relative_eq!(cluster.atoms()[13].position().distance(&(unit(1) * 2.0)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(cluster.atoms()[14].position().distance(&midpoint), 0.0, epsilon = 1e-9);
        assert_relative_eq!(cluster.atoms()[15].position().distance(&(unit(0) * 2.0)), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(icosahedron("Au", 0, None), Err(GenerateError::NoShells)));
        assert!(matches!(
            icosahedron("Fe", 2, None),
            Err(GenerateError::UnknownLatticeConstant(_))
        ));
        assert!(icosahedron("Fe", 2, Some(2.87)).is_ok());
        assert!(icosahedron("Au", 2, Some(-1.0)).is_err());
    }
}
