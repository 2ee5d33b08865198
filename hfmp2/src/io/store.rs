//! Integral store interface and the bundle of data read from it

use crate::eri_impl::{SparseIntegral, SparseIntegrals};
use crate::error::{EnergyError, Result};
use nalgebra::{DMatrix, DVector};
use tracing::info;

/// Source of precomputed molecular-orbital integrals.
pub trait IntegralStore {
    fn read_nuclear_repulsion(&self) -> Result<f64>;

    /// Number of doubly occupied orbitals (alpha electron count)
    fn read_occupied_orbital_count(&self) -> Result<usize>;

    fn read_orbital_count(&self) -> Result<usize>;

    /// Dense mo_num x mo_num core Hamiltonian
    fn read_one_electron_integrals(&self, mo_num: usize) -> Result<DMatrix<f64>>;

    /// Declared number of sparse two-electron integrals
    fn read_two_electron_integral_count(&self) -> Result<usize>;

    /// Bulk read of the sparse two-electron integrals. `buffer_size` is the
    /// count the caller expects; stores return whatever they actually hold.
    fn read_two_electron_records(&self, buffer_size: usize) -> Result<Vec<SparseIntegral>>;

    fn read_orbital_energies(&self, mo_num: usize) -> Result<DVector<f64>>;

    /// Size query followed by the bulk read, checking that both agree.
    fn read_two_electron_integrals(&self) -> Result<SparseIntegrals> {
        let declared = self.read_two_electron_integral_count()?;
        let records = self.read_two_electron_records(declared)?;

        if records.len() != declared {
            return Err(EnergyError::SourceSizeMismatch {
                what: "two-electron integrals",
                declared,
                delivered: records.len(),
            });
        }

        Ok(SparseIntegrals::new(records))
    }
}

/// Everything one HF/MP2 evaluation needs, as read from a store.
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularIntegrals {
    pub nuclear_repulsion: f64,
    pub num_occ: usize,
    pub mo_num: usize,
    pub core_hamiltonian: DMatrix<f64>,
    pub two_electron: SparseIntegrals,
    pub orbital_energies: Option<DVector<f64>>,
}

/// Read all integrals from `store`. Orbital energies are only requested when
/// `with_orbital_energies` is set, since HF alone does not need them.
pub fn read_molecular_integrals<S: IntegralStore + ?Sized>(
    store: &S,
    with_orbital_energies: bool,
) -> Result<MolecularIntegrals> {
    let nuclear_repulsion = store.read_nuclear_repulsion()?;
    info!("Nuclear repulsion energy = {:.6}", nuclear_repulsion);

    let num_occ = store.read_occupied_orbital_count()?;
    info!("Number of occupied orbitals (n_occ) = {}", num_occ);

    let mo_num = store.read_orbital_count()?;
    info!("Number of molecular orbitals (mo_num) = {}", mo_num);

    if mo_num == 0 {
        return Err(EnergyError::dimensions(mo_num, num_occ, "mo_num must be at least 1"));
    }
    if num_occ > mo_num {
        return Err(EnergyError::dimensions(
            mo_num,
            num_occ,
            "more occupied orbitals than molecular orbitals",
        ));
    }

    let core_hamiltonian = store.read_one_electron_integrals(mo_num)?;

    let two_electron = store.read_two_electron_integrals()?;
    info!("Number of non-zero two-electron integrals = {}", two_electron.len());

    let orbital_energies = if with_orbital_energies {
        Some(store.read_orbital_energies(mo_num)?)
    } else {
        None
    };

    Ok(MolecularIntegrals {
        nuclear_repulsion,
        num_occ,
        mo_num,
        core_hamiltonian,
        two_electron,
        orbital_energies,
    })
}
