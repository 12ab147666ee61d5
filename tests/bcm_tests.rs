/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use bcm_rs::bcm::{BcmError, BondCentricModel, BondList, CnMethod, GammaTable};
use bcm_rs::config::ModelConfig;
use bcm_rs::generate::icosahedron;
use rstest::rstest;
use std::collections::BTreeMap;
use tempfile::NamedTempFile;

#[rstest]
#[case(2, 13, 42)]
#[case(3, 55, 234)]
#[case(4, 147, 696)]
fn test_icosahedron_bond_counts(#[case] shells: usize, #[case] atoms: usize, #[case] bonds: usize) {
    let cluster = icosahedron("Au", shells, None).unwrap();
    let list = BondList::from_config(&cluster, &ModelConfig::default()).unwrap();
    assert_eq!(list.num_atoms(), atoms);
    assert_eq!(list.len(), 2 * bonds);
    assert_eq!(list.degrees()[0], 12);
}

#[test]
fn test_center_atom_is_bulk_coordinated() {
    let cluster = icosahedron("Pt", 4, None).unwrap();
    let model = BondCentricModel::new(&cluster, &ModelConfig::default().with_cn_method(CnMethod::Int)).unwrap();
    assert_eq!(model.coordination_numbers()[0], 12.0);
    assert_eq!(model.shell_map().len(), 4);
    assert_eq!(model.shell_map()[0], vec![0]);
    assert_eq!(model.shell_map()[3].len(), 92);
}

#[test]
fn test_monometallic_ce_tends_to_bulk() {
    // A fully coordinated atom contributes its bulk energy; surface atoms less
    let config = ModelConfig::default().with_cn_method(CnMethod::Int);
    let small = BondCentricModel::new(&icosahedron("Cu", 3, None).unwrap(), &config).unwrap();
    let large = BondCentricModel::new(&icosahedron("Cu", 6, None).unwrap(), &config).unwrap();

    assert!(small.calc_ce() > large.calc_ce());
    assert!(large.calc_ce() > -3.95);
}

#[test]
fn test_gamma_file_and_inline_overrides() {
    let mut file_table = GammaTable::new();
    file_table.set_pair("Au", "Pd", 1.4);
    let file = NamedTempFile::new().unwrap();
    file_table.to_file(file.path()).unwrap();

    let cluster = {
        let mut c = icosahedron("Au", 3, None).unwrap();
        c.set_symbols(0..13, "Pd").unwrap();
        c
    };

    let mut config = ModelConfig {
        gamma_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let from_file = BondCentricModel::new(&cluster, &config).unwrap();
    assert_eq!(from_file.gammas().get_explicit("Au", "Pd"), Some(1.4));

    config.gammas.set_pair("Au", "Pd", 0.9);
    let overridden = BondCentricModel::new(&cluster, &config).unwrap();
    assert_eq!(overridden.gammas().get_explicit("Au", "Pd"), Some(0.9));
    assert!((from_file.calc_ce() - overridden.calc_ce()).abs() > 1e-6);
}

#[test]
fn test_missing_gamma_file() {
    let config = ModelConfig {
        gamma_file: Some("does/not/exist.json".into()),
        ..Default::default()
    };
    let cluster = icosahedron("Au", 2, None).unwrap();
    assert!(matches!(
        BondCentricModel::new(&cluster, &config),
        Err(BcmError::GammaFile(_))
    ));
}

#[test]
fn test_explicit_tables() {
    let cluster = icosahedron("Ag", 2, None).unwrap();
    let config = ModelConfig::default().with_cn_method(CnMethod::Int);
    let ce_bulk = BTreeMap::from([("Ag".to_string(), -1.0)]);
    let model = BondCentricModel::with_tables(&cluster, &config, &GammaTable::new(), &ce_bulk).unwrap();

    // Center: 12 bonds at cn 12; shell atoms: 6 bonds at cn 6
    let center = 12.0 * -1.0 / 12.0;
    let shell = 12.0 * 6.0 * -1.0 * (6.0f64 / 12.0).sqrt() / 6.0;
    assert_relative_eq!(model.calc_ce(), (center + shell) / 13.0, epsilon = 1e-12);
}

#[test]
fn test_ordering_scan_matches_rebuilt_model() {
    let config = ModelConfig::default();
    let mut cluster = icosahedron("Pd", 3, None).unwrap();
    cluster.set_symbol(0, "Au").unwrap();
    let model = BondCentricModel::new(&cluster, &config).unwrap();

    // Same geometry with the Au moved to the surface
    let mut ordering = vec![1; cluster.len()];
    ordering[54] = 0;
    let scanned = model.calc_ce_with(&ordering).unwrap();

    let mut moved = icosahedron("Pd", 3, None).unwrap();
    moved.set_symbol(54, "Au").unwrap();
    let rebuilt = BondCentricModel::new(&moved, &config).unwrap();
    assert_relative_eq!(scanned, rebuilt.calc_ce(), epsilon = 1e-12);
}
