// Library for HF and MP2 energies from precomputed molecular-orbital integrals

pub mod app;
pub mod config;
pub mod energy;
pub mod eri_impl;
pub mod error;
pub mod hf_impl;
pub mod io;
pub mod mp2_impl;

pub use energy::{compute_energies, compute_hartree_fock, compute_mp2, EnergyComponents, EnergyOptions};
pub use eri_impl::{DenseEri, SparseIntegral, SparseIntegrals};
pub use error::{EnergyError, Result};
pub use hf_impl::HartreeFock;
pub use io::{read_molecular_integrals, IntegralFile, IntegralStore, MolecularIntegrals};
pub use mp2_impl::{DenominatorPolicy, MP2};
