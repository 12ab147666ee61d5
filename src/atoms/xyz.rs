/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reading and writing XYZ structure files
//!
//! The first line holds the atom count, the second a free-text comment, and each
//! following line `symbol x y z`. Extra columns after the coordinates are ignored
//! on read, so extended-XYZ files with per-atom properties load as plain clusters.

use super::atom::Atom;
use super::errors::{AtomError, Result};
use super::structure::Cluster;
use super::vector::Vector3D;
use std::fs;
use std::path::Path;

/// Read a cluster from an XYZ file
pub fn read_xyz<P: AsRef<Path>>(path: P) -> Result<Cluster> {
    let content = fs::read_to_string(path.as_ref())?;
    let cluster = parse_xyz(&content)?;
    log::debug!(
        "Read {} atoms ({}) from {}",
        cluster.len(),
        cluster.formula(),
        path.as_ref().display()
    );
    Ok(cluster)
}

/// Parse a cluster from XYZ text
pub fn parse_xyz(content: &str) -> Result<Cluster> {
    let mut lines = content.lines();

    let count_line = lines.next().ok_or_else(|| AtomError::ParseError {
        line: 1,
        message: "empty XYZ input".to_string(),
    })?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| AtomError::ParseError {
            line: 1,
            message: format!("invalid atom count '{}'", count_line.trim()),
        })?;

    let comment = lines.next().unwrap_or("").trim();

    let mut cluster = Cluster::new();
    cluster.set_comment(comment);

    for i in 0..count {
        let line_number = i + 3;
        let line = lines.next().ok_or_else(|| AtomError::ParseError {
            line: line_number,
            message: format!("expected {} atoms, found {}", count, i),
        })?;
        cluster.add_atom(parse_atom_line(line, line_number)?);
    }

    Ok(cluster)
}

fn parse_atom_line(line: &str, line_number: usize) -> Result<Atom> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(AtomError::ParseError {
            line: line_number,
            message: format!("expected 'symbol x y z', got '{}'", line.trim()),
        });
    }

    let mut coords = [0.0; 3];
    for (coord, field) in coords.iter_mut().zip(&fields[1..4]) {
        *coord = field.parse().map_err(|_| AtomError::ParseError {
            line: line_number,
            message: format!("invalid coordinate '{}'", field),
        })?;
    }

    Atom::new(fields[0], Vector3D::new(coords[0], coords[1], coords[2]))
}

/// Render a cluster as XYZ text
///
/// `extra` adds one integer column per atom; the DFT setup uses it to record
/// coordination numbers next to the coordinates.
pub fn format_xyz(cluster: &Cluster, extra: Option<&[usize]>) -> Result<String> {
    if let Some(values) = extra {
        if values.len() != cluster.len() {
            return Err(AtomError::InvalidStructure(format!(
                "extra column has {} values for {} atoms",
                values.len(),
                cluster.len()
            )));
        }
    }

    let mut out = format!("{}\n{}\n", cluster.len(), cluster.comment());
    for (i, atom) in cluster.atoms().iter().enumerate() {
        let p = atom.position();
        out.push_str(&format!(
            "{:<2} {:>15.8} {:>15.8} {:>15.8}",
            atom.symbol(),
            p.x,
            p.y,
            p.z
        ));
        if let Some(values) = extra {
            out.push_str(&format!(" {:>4}", values[i]));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Write a cluster to an XYZ file
pub fn write_xyz<P: AsRef<Path>>(cluster: &Cluster, path: P, extra: Option<&[usize]>) -> Result<()> {
    fs::write(path.as_ref(), format_xyz(cluster, extra)?)?;
    log::debug!("Wrote {} atoms to {}", cluster.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMER: &str = "2\nPtPd dimer\nPt 0.0 0.0 0.0\nPd 0.0 0.0 2.7 12\n";

    #[test]
    fn test_parse_xyz() {
        let cluster = parse_xyz(DIMER).unwrap();
        assert_eq!(cluster.len(), 2);
        assert_eq!(cluster.comment(), "PtPd dimer");
        assert_eq!(cluster.symbols(), vec!["Pt", "Pd"]);
        assert_eq!(cluster.position(1), Some(Vector3D::new(0.0, 0.0, 2.7)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_xyz(""), Err(AtomError::ParseError { line: 1, .. })));
        assert!(matches!(parse_xyz("two\n\n"), Err(AtomError::ParseError { line: 1, .. })));
        assert!(matches!(
            parse_xyz("3\nshort\nAu 0 0 0\n"),
            Err(AtomError::ParseError { line: 4, .. })
        ));
        assert!(matches!(
            parse_xyz("1\n\nAu 0 zero 0\n"),
            Err(AtomError::ParseError { line: 3, .. })
        ));
        assert!(matches!(
            parse_xyz("1\n\nQq 0 0 0\n"),
            Err(AtomError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_format_with_extra_column() {
        let cluster = parse_xyz(DIMER).unwrap();
        let text = format_xyz(&cluster, Some(&[1, 1])).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2");
        assert_eq!(lines[1], "PtPd dimer");
        assert!(lines[3].starts_with("Pd"));
        assert!(lines[3].ends_with(" 1"));

        assert!(format_xyz(&cluster, Some(&[1])).is_err());
    }

    #[test]
    fn test_format_plain_lines() {
        let cluster = parse_xyz(DIMER).unwrap();
        let text = format_xyz(&cluster, None).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().nth(2).unwrap().split_whitespace().count(), 4);
        assert_eq!(parse_xyz(&text).unwrap(), cluster);
    }
}
