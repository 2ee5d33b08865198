//! Driver-facing energy functions
//!
//! `compute_hartree_fock` and `compute_mp2` each expand the sparse integrals
//! on their own. `compute_energies` expands once and evaluates both terms on
//! the same tensor, which is released before it returns.

use crate::eri_impl::{DenseEri, SparseIntegrals};
use crate::error::{EnergyError, Result};
use crate::hf_impl::HartreeFock;
use crate::io::MolecularIntegrals;
use crate::mp2_impl::{DenominatorPolicy, MP2};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use tracing::info;

/// Result of one HF (+ MP2) evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyComponents {
    pub nuclear_repulsion: f64,
    pub hartree_fock: f64,
    pub mp2_correlation: Option<f64>,
}

impl EnergyComponents {
    /// E_HF + E_MP2, or E_HF alone when MP2 was not evaluated
    pub fn total(&self) -> f64 {
        self.hartree_fock + self.mp2_correlation.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyOptions {
    pub mp2: bool,
    pub parallel: bool,
    pub denominator_policy: DenominatorPolicy,
    /// Reject symmetry-inconsistent duplicates beyond this tolerance
    pub consistency_tolerance: Option<f64>,
}

impl Default for EnergyOptions {
    fn default() -> Self {
        EnergyOptions {
            mp2: true,
            parallel: false,
            denominator_policy: DenominatorPolicy::Fail,
            consistency_tolerance: None,
        }
    }
}

fn check_dimensions(mo_num: usize, n_occ: usize) -> Result<()> {
    if mo_num == 0 {
        return Err(EnergyError::dimensions(mo_num, n_occ, "mo_num must be at least 1"));
    }
    if n_occ > mo_num {
        return Err(EnergyError::dimensions(
            mo_num,
            n_occ,
            "more occupied orbitals than molecular orbitals",
        ));
    }
    Ok(())
}

fn expand(mo_num: usize, integrals: &SparseIntegrals, tolerance: Option<f64>) -> Result<DenseEri> {
    match tolerance {
        Some(tol) => DenseEri::expand_strict(mo_num, integrals, tol),
        None => DenseEri::expand(mo_num, integrals),
    }
}

/// E_HF = E_nn + 2 Σ_i h_ii + Σ_ij [2 <ij|ij> - <ij|ji>]
pub fn compute_hartree_fock(
    nuclear_repulsion: f64,
    core_hamiltonian: &DMatrix<f64>,
    integrals: &SparseIntegrals,
    mo_num: usize,
    n_occ: usize,
) -> Result<f64> {
    check_dimensions(mo_num, n_occ)?;
    let eri = DenseEri::expand(mo_num, integrals)?;
    let mut hf = HartreeFock::new(nuclear_repulsion, core_hamiltonian, &eri, n_occ)?;
    Ok(hf.calculate_hf_energy())
}

/// MP2 correlation energy with the default denominator policy
pub fn compute_mp2(
    orbital_energies: &DVector<f64>,
    mo_num: usize,
    n_occ: usize,
    integrals: &SparseIntegrals,
) -> Result<f64> {
    check_dimensions(mo_num, n_occ)?;
    let eri = DenseEri::expand(mo_num, integrals)?;
    MP2::new(orbital_energies, &eri, n_occ)?.calculate_mp2_energy()
}

/// HF and, if requested, MP2 energies sharing a single tensor expansion
pub fn compute_energies(
    integrals: &MolecularIntegrals,
    options: &EnergyOptions,
) -> Result<EnergyComponents> {
    let mo_num = integrals.mo_num;
    let n_occ = integrals.num_occ;
    check_dimensions(mo_num, n_occ)?;

    let orbital_energies = match (options.mp2, integrals.orbital_energies.as_ref()) {
        (true, Some(e)) => Some(e),
        (true, None) => {
            return Err(EnergyError::read(
                "orbital energies",
                "required for MP2 but not loaded",
            ))
        }
        (false, _) => None,
    };

    let eri = expand(mo_num, &integrals.two_electron, options.consistency_tolerance)?;

    let hartree_fock = HartreeFock::new(
        integrals.nuclear_repulsion,
        &integrals.core_hamiltonian,
        &eri,
        n_occ,
    )?
    .calculate_hf_energy();

    let mp2_correlation = match orbital_energies {
        Some(e) => Some(
            MP2::new(e, &eri, n_occ)?
                .with_denominator_policy(options.denominator_policy)
                .with_parallel(options.parallel)
                .calculate_mp2_energy()?,
        ),
        None => None,
    };

    drop(eri);

    let energies = EnergyComponents {
        nuclear_repulsion: integrals.nuclear_repulsion,
        hartree_fock,
        mp2_correlation,
    };
    info!("Total energy: {:.12} Eh", energies.total());
    Ok(energies)
}
