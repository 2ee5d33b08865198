//! Tests for the RHF energy evaluator

use super::HartreeFock;
use crate::eri_impl::{DenseEri, SparseIntegral, SparseIntegrals};
use crate::error::EnergyError;
use nalgebra::DMatrix;

fn integrals(records: &[(i32, i32, i32, i32, f64)]) -> SparseIntegrals {
    records
        .iter()
        .map(|&(i, j, k, l, v)| SparseIntegral::new(i, j, k, l, v))
        .collect()
}

#[test]
fn test_single_occupied_orbital() {
    // 2 h_00 + (2 <00|00> - <00|00>) = -2.0 + 0.5
    let h = DMatrix::from_row_slice(1, 1, &[-1.0]);
    let eri = DenseEri::expand(1, &integrals(&[(0, 0, 0, 0, 0.5)])).unwrap();

    let mut hf = HartreeFock::new(0.0, &h, &eri, 1).unwrap();
    let energy = hf.calculate_hf_energy();

    assert!((energy - (-1.5)).abs() < 1e-14, "E_HF = {}", energy);
    assert_eq!(hf.get_energy(), Some(energy));
}

#[test]
fn test_no_integrals_gives_nuclear_repulsion() {
    let h = DMatrix::zeros(2, 2);
    let eri = DenseEri::expand(2, &SparseIntegrals::default()).unwrap();

    let mut hf = HartreeFock::new(3.25, &h, &eri, 1).unwrap();
    assert_eq!(hf.calculate_hf_energy(), 3.25);
}

#[test]
fn test_no_occupied_orbitals() {
    let h = DMatrix::from_row_slice(2, 2, &[-1.0, 0.1, 0.1, -0.5]);
    let eri = DenseEri::expand(2, &integrals(&[(0, 0, 0, 0, 0.7), (1, 1, 1, 1, 0.6)])).unwrap();

    let mut hf = HartreeFock::new(0.875, &h, &eri, 0).unwrap();
    assert_eq!(hf.calculate_hf_energy(), 0.875);
}

#[test]
fn test_virtual_orbitals_do_not_contribute() {
    let records = [(0, 0, 0, 0, 0.6746), (0, 1, 0, 1, 0.6636), (0, 0, 1, 1, 0.1813)];
    let h_small = DMatrix::from_row_slice(1, 1, &[-1.2528]);
    let eri_small = DenseEri::expand(1, &integrals(&records[..1])).unwrap();
    let small = HartreeFock::new(0.7143, &h_small, &eri_small, 1)
        .unwrap()
        .calculate_hf_energy();

    let h_large = DMatrix::from_row_slice(2, 2, &[-1.2528, 0.0, 0.0, -0.4756]);
    let mut with_virtual = integrals(&records);
    with_virtual.push(SparseIntegral::new(1, 1, 1, 1, 0.6975));
    let eri_large = DenseEri::expand(2, &with_virtual).unwrap();
    let large = HartreeFock::new(0.7143, &h_large, &eri_large, 1)
        .unwrap()
        .calculate_hf_energy();

    assert_eq!(small, large);
}

#[test]
fn test_two_occupied_coulomb_and_exchange() {
    // <00|00>=a, <11|11>=b, <01|01>=J (Coulomb), <01|10>=<00|11>=K (exchange)
    let (a, b, j, k) = (0.8, 0.6, 0.5, 0.1);
    let h = DMatrix::from_row_slice(2, 2, &[-2.0, 0.0, 0.0, -1.5]);
    let eri = DenseEri::expand(
        2,
        &integrals(&[(0, 0, 0, 0, a), (1, 1, 1, 1, b), (0, 1, 0, 1, j), (0, 0, 1, 1, k)]),
    )
    .unwrap();

    let hf = HartreeFock::new(1.0, &h, &eri, 2).unwrap();
    let expected_one = 2.0 * (-2.0) + 2.0 * (-1.5);
    // diagonal pairs give a and b, off-diagonal pairs give 2J - K twice
    let expected_two = a + b + 2.0 * (2.0 * j - k);

    assert!((hf.one_electron_energy() - expected_one).abs() < 1e-14);
    assert!((hf.two_electron_energy() - expected_two).abs() < 1e-14);
}

#[test]
fn test_too_many_occupied_orbitals() {
    let h = DMatrix::zeros(2, 2);
    let eri = DenseEri::expand(2, &SparseIntegrals::default()).unwrap();
    assert!(matches!(
        HartreeFock::new(0.0, &h, &eri, 3),
        Err(EnergyError::InvalidDimensions { mo_num: 2, n_occ: 3, .. })
    ));
}

#[test]
fn test_core_hamiltonian_shape_mismatch() {
    let h = DMatrix::zeros(3, 3);
    let eri = DenseEri::expand(2, &SparseIntegrals::default()).unwrap();
    assert!(matches!(
        HartreeFock::new(0.0, &h, &eri, 1),
        Err(EnergyError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    let h = DMatrix::from_row_slice(2, 2, &[-1.1, 0.2, 0.2, -0.3]);
    let eri = DenseEri::expand(
        2,
        &integrals(&[(0, 0, 0, 0, 0.71), (1, 1, 1, 1, 0.33), (0, 1, 0, 1, 0.41), (0, 0, 1, 1, 0.09)]),
    )
    .unwrap();

    let first = HartreeFock::new(0.5, &h, &eri, 2).unwrap().calculate_hf_energy();
    for _ in 0..5 {
        let again = HartreeFock::new(0.5, &h, &eri, 2).unwrap().calculate_hf_energy();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}
