//! MP2 (Møller-Plesset perturbation theory, second order) implementation
//!
//! This module provides the closed-shell MP2 correlation energy on top of a
//! converged Hartree-Fock reference whose molecular-orbital integrals and
//! orbital energies are already known.
//!
//! # Theory
//!
//! The MP2 correlation energy is given by:
//!
//! E_MP2 = Σ_{ij} Σ_{ab} [<ij|ab> * (2*<ij|ab> - <ij|ba>)] / (ε_i + ε_j - ε_a - ε_b)
//!
//! where:
//! - i, j run over all occupied orbitals (i = j included)
//! - a, b run over all virtual orbitals (a = b included)
//! - <ij|ab> are two-electron integrals in physicist notation, i.e. (ia|jb)
//! - ε are orbital energies
//!
//! # Usage
//!
//! ```ignore
//! let eri = DenseEri::expand(mo_num, &sparse)?;
//! let mut mp2 = MP2::new(&orbital_energies, &eri, n_occ)?;
//! let correlation_energy = mp2.calculate_mp2_energy()?;
//! ```
//!
//! A zero denominator (an occupied pair degenerate with a virtual pair) fails
//! with `DegenerateOrbitals` unless `DenominatorPolicy::Propagate` is selected,
//! in which case the non-finite quotient is summed into the result.

mod mp2;

pub use mp2::{DenominatorPolicy, MP2};
