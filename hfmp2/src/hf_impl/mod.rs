//! Closed-shell Hartree-Fock energy from molecular-orbital integrals
//!
//! With the orbitals already converged, the RHF energy is a direct contraction:
//!
//! E_HF = E_nn + 2 Σ_i h_ii + Σ_ij [2 <ij|ij> - <ij|ji>]
//!
//! where i, j run over the doubly occupied orbitals. Virtual orbitals do not
//! contribute.

mod hf;
#[cfg(test)]
mod tests;

pub use hf::HartreeFock;
