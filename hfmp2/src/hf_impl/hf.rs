//! Core RHF energy evaluation

extern crate nalgebra as na;

use crate::eri_impl::DenseEri;
use crate::error::{EnergyError, Result};
use na::DMatrix;
use tracing::{debug, info};

/// RHF energy evaluator over a borrowed core Hamiltonian and dense tensor.
pub struct HartreeFock<'a> {
    /// Number of molecular orbitals
    pub num_orb: usize,

    /// Number of doubly occupied orbitals
    pub num_occ: usize,

    /// Nuclear repulsion energy, taken as given
    pub nuclear_repulsion: f64,

    core_hamiltonian: &'a DMatrix<f64>,
    eri: &'a DenseEri,

    /// HF total energy (calculated)
    pub energy: Option<f64>,
}

impl<'a> HartreeFock<'a> {
    /// Create an evaluator for `num_occ` doubly occupied orbitals.
    ///
    /// The core Hamiltonian must be square with the same dimension the tensor
    /// was expanded for, and `num_occ` may not exceed it.
    pub fn new(
        nuclear_repulsion: f64,
        core_hamiltonian: &'a DMatrix<f64>,
        eri: &'a DenseEri,
        num_occ: usize,
    ) -> Result<Self> {
        let num_orb = eri.mo_num();

        if num_occ > num_orb {
            return Err(EnergyError::dimensions(
                num_orb,
                num_occ,
                "more occupied orbitals than molecular orbitals",
            ));
        }
        if core_hamiltonian.shape() != (num_orb, num_orb) {
            return Err(EnergyError::dimensions(
                num_orb,
                num_occ,
                format!(
                    "core Hamiltonian is {}x{}",
                    core_hamiltonian.nrows(),
                    core_hamiltonian.ncols()
                ),
            ));
        }

        Ok(HartreeFock {
            num_orb,
            num_occ,
            nuclear_repulsion,
            core_hamiltonian,
            eri,
            energy: None,
        })
    }

    /// 2 Σ_i h_ii over occupied orbitals
    pub fn one_electron_energy(&self) -> f64 {
        (0..self.num_occ)
            .map(|i| 2.0 * self.core_hamiltonian[(i, i)])
            .sum()
    }

    /// Σ_ij [2 <ij|ij> - <ij|ji>] over occupied pairs, i = j included
    pub fn two_electron_energy(&self) -> f64 {
        let mut two_e_sum = 0.0;
        for i in 0..self.num_occ {
            for j in 0..self.num_occ {
                let coulomb = self.eri.get(i, j, i, j);
                let exchange = self.eri.get(i, j, j, i);
                two_e_sum += 2.0 * coulomb - exchange;
            }
        }
        two_e_sum
    }

    /// Calculate the HF total energy, nuclear repulsion included
    pub fn calculate_hf_energy(&mut self) -> f64 {
        let one_e = self.one_electron_energy();
        let two_e = self.two_electron_energy();
        debug!("One-electron energy:  {:.12} Eh", one_e);
        debug!("Two-electron energy:  {:.12} Eh", two_e);

        let energy = self.nuclear_repulsion + one_e + two_e;
        info!("Hartree-Fock energy: {:.12} Eh", energy);
        self.energy = Some(energy);
        energy
    }

    pub fn get_energy(&self) -> Option<f64> {
        self.energy
    }
}
