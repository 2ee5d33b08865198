//! Core MP2 implementation

extern crate nalgebra as na;

use crate::eri_impl::DenseEri;
use crate::error::{EnergyError, Result};
use na::DVector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What to do with an exactly zero energy denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DenominatorPolicy {
    /// Stop with `EnergyError::DegenerateOrbitals`
    #[default]
    Fail,
    /// Divide anyway and let Inf/NaN reach the caller
    Propagate,
}

/// MP2 calculation structure
///
/// Borrows the orbital energies and the expanded two-electron tensor for the
/// duration of one evaluation.
pub struct MP2<'a> {
    /// Number of molecular orbitals
    pub num_orb: usize,

    /// Number of occupied orbitals
    pub num_occ: usize,

    /// Number of virtual orbitals
    pub num_virt: usize,

    orbital_energies: &'a DVector<f64>,
    eri: &'a DenseEri,

    /// Handling of degenerate occupied/virtual pairs
    pub denominator_policy: DenominatorPolicy,

    /// Distribute the outer occupied index over the rayon thread pool
    pub parallel: bool,

    /// MP2 correlation energy (calculated)
    pub correlation_energy: Option<f64>,
}

impl<'a> MP2<'a> {
    /// Create a new MP2 calculator
    ///
    /// # Arguments
    ///
    /// * `orbital_energies` - One energy per molecular orbital, occupied first
    /// * `eri` - Dense two-electron tensor over all molecular orbitals
    /// * `num_occ` - Number of doubly occupied orbitals
    pub fn new(orbital_energies: &'a DVector<f64>, eri: &'a DenseEri, num_occ: usize) -> Result<Self> {
        let num_orb = eri.mo_num();

        if num_occ > num_orb {
            return Err(EnergyError::dimensions(
                num_orb,
                num_occ,
                "more occupied orbitals than molecular orbitals",
            ));
        }
        if orbital_energies.len() != num_orb {
            return Err(EnergyError::dimensions(
                num_orb,
                num_occ,
                format!("{} orbital energies supplied", orbital_energies.len()),
            ));
        }

        let num_virt = num_orb - num_occ;
        debug!(
            "MP2 setup: {} orbitals, {} occupied, {} virtual",
            num_orb, num_occ, num_virt
        );

        Ok(MP2 {
            num_orb,
            num_occ,
            num_virt,
            orbital_energies,
            eri,
            denominator_policy: DenominatorPolicy::default(),
            parallel: false,
            correlation_energy: None,
        })
    }

    pub fn with_denominator_policy(mut self, policy: DenominatorPolicy) -> Self {
        self.denominator_policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Contribution of one occupied orbital i:
    /// Σ_j Σ_ab <ij|ab> (2<ij|ab> - <ij|ba>) / (ε_i + ε_j - ε_a - ε_b)
    fn occupied_orbital_energy(&self, i: usize) -> Result<f64> {
        let e = self.orbital_energies;
        let mut energy = 0.0;

        for j in 0..self.num_occ {
            for a in self.num_occ..self.num_orb {
                for b in self.num_occ..self.num_orb {
                    let denominator = (e[i] + e[j]) - (e[a] + e[b]);
                    if denominator == 0.0 && self.denominator_policy == DenominatorPolicy::Fail {
                        return Err(EnergyError::DegenerateOrbitals { i, j, a, b });
                    }

                    let ijab = self.eri.get(i, j, a, b);
                    let ijba = self.eri.get(i, j, b, a);
                    energy += ijab * (2.0 * ijab - ijba) / denominator;
                }
            }
        }

        Ok(energy)
    }

    /// Calculate the MP2 correlation energy
    ///
    /// Per-orbital partial sums are always reduced in index order, so the
    /// serial and parallel paths return bit-identical results.
    pub fn calculate_mp2_energy(&mut self) -> Result<f64> {
        if self.num_occ == 0 || self.num_virt == 0 {
            info!("No occupied or virtual orbitals - MP2 correlation energy is zero.");
            self.correlation_energy = Some(0.0);
            return Ok(0.0);
        }

        info!(
            "Computing MP2 energy for {} terms ({} occupied, {} virtual{})...",
            self.num_occ * self.num_occ * self.num_virt * self.num_virt,
            self.num_occ,
            self.num_virt,
            if self.parallel { ", parallel" } else { "" }
        );

        let partials: Vec<f64> = if self.parallel {
            (0..self.num_occ)
                .into_par_iter()
                .map(|i| self.occupied_orbital_energy(i))
                .collect::<Result<Vec<f64>>>()?
        } else {
            (0..self.num_occ)
                .map(|i| self.occupied_orbital_energy(i))
                .collect::<Result<Vec<f64>>>()?
        };

        let mut total_energy = 0.0;
        for (i, partial) in partials.iter().enumerate() {
            total_energy += partial;
            debug!(
                "Occupied orbital {}: contribution {:.12} Eh, running E_MP2 = {:.12} Eh",
                i, partial, total_energy
            );
        }

        if !total_energy.is_finite() {
            warn!("MP2 correlation energy is not finite; degenerate orbital energies were propagated");
        }
        info!("MP2 correlation energy: {:.12} Eh", total_energy);
        self.correlation_energy = Some(total_energy);
        Ok(total_energy)
    }

    /// Get the correlation energy (HF energy must be added separately)
    pub fn get_correlation_energy(&self) -> Option<f64> {
        self.correlation_energy
    }
}
