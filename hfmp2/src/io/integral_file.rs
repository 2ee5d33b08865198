//! YAML integral file
//!
//! Field names follow the TREXIO groups the integrals are usually exported from:
//!
//! ```yaml
//! nuclear_repulsion: 0.7143
//! electron_up_num: 1
//! electron_dn_num: 1
//! mo_num: 2
//! mo_1e_int_core_hamiltonian: [-1.2528, 0.0, 0.0, -0.4756]   # row-major
//! mo_2e_int_eri:
//!   size: 2
//!   index: [[0, 0, 0, 0], [0, 0, 1, 1]]
//!   value: [0.6746, 0.1813]
//! mo_energy: [-0.5782, 0.6703]
//! ```

use super::store::IntegralStore;
use crate::eri_impl::SparseIntegral;
use crate::error::{EnergyError, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Sparse two-electron block: declared size, index quadruples and values
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EriBlock {
    pub size: usize,
    pub index: Vec<[i32; 4]>,
    pub value: Vec<f64>,
}

/// Raw contents of an integral file. Every field is optional so that a
/// missing group is reported by the read that needs it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntegralDocument {
    pub nuclear_repulsion: Option<f64>,
    pub electron_up_num: Option<usize>,
    pub electron_dn_num: Option<usize>,
    pub mo_num: Option<usize>,
    pub mo_1e_int_core_hamiltonian: Option<Vec<f64>>,
    pub mo_2e_int_eri: Option<EriBlock>,
    pub mo_energy: Option<Vec<f64>>,
}

/// Integral store backed by a YAML document
#[derive(Debug, Clone)]
pub struct IntegralFile {
    document: IntegralDocument,
}

impl IntegralFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading integral file {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| EnergyError::read("integral file", format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document = serde_yml::from_str::<IntegralDocument>(content)
            .map_err(|e| EnergyError::read("integral file", e))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: IntegralDocument) -> Self {
        IntegralFile { document }
    }

    pub fn document(&self) -> &IntegralDocument {
        &self.document
    }

    fn eri_block(&self) -> Result<&EriBlock> {
        self.document
            .mo_2e_int_eri
            .as_ref()
            .ok_or_else(|| missing("two-electron integrals", "mo_2e_int_eri"))
    }
}

fn missing(what: &'static str, field: &str) -> EnergyError {
    EnergyError::read(what, format!("field `{}` is absent", field))
}

impl IntegralStore for IntegralFile {
    fn read_nuclear_repulsion(&self) -> Result<f64> {
        self.document
            .nuclear_repulsion
            .ok_or_else(|| missing("nuclear repulsion energy", "nuclear_repulsion"))
    }

    fn read_occupied_orbital_count(&self) -> Result<usize> {
        let up = self
            .document
            .electron_up_num
            .ok_or_else(|| missing("number of occupied orbitals", "electron_up_num"))?;

        match self.document.electron_dn_num {
            Some(down) if down != up => Err(EnergyError::OpenShell { up, down }),
            _ => Ok(up),
        }
    }

    fn read_orbital_count(&self) -> Result<usize> {
        self.document
            .mo_num
            .ok_or_else(|| missing("number of molecular orbitals", "mo_num"))
    }

    fn read_one_electron_integrals(&self, mo_num: usize) -> Result<DMatrix<f64>> {
        let flat = self
            .document
            .mo_1e_int_core_hamiltonian
            .as_ref()
            .ok_or_else(|| missing("one-electron integrals", "mo_1e_int_core_hamiltonian"))?;

        let expected = mo_num
            .checked_mul(mo_num)
            .ok_or_else(|| EnergyError::dimensions(mo_num, 0, "mo_num^2 overflows the index width"))?;

        if flat.len() != expected {
            return Err(EnergyError::SourceSizeMismatch {
                what: "one-electron integrals",
                declared: expected,
                delivered: flat.len(),
            });
        }

        Ok(DMatrix::from_row_slice(mo_num, mo_num, flat))
    }

    fn read_two_electron_integral_count(&self) -> Result<usize> {
        Ok(self.eri_block()?.size)
    }

    fn read_two_electron_records(&self, buffer_size: usize) -> Result<Vec<SparseIntegral>> {
        let block = self.eri_block()?;

        if block.index.len() != block.value.len() {
            return Err(EnergyError::SourceSizeMismatch {
                what: "two-electron integral values",
                declared: block.index.len(),
                delivered: block.value.len(),
            });
        }

        let mut records = Vec::with_capacity(buffer_size.min(block.index.len()));
        records.extend(
            block
                .index
                .iter()
                .zip(block.value.iter())
                .map(|(&index, &value)| SparseIntegral { index, value }),
        );
        Ok(records)
    }

    fn read_orbital_energies(&self, mo_num: usize) -> Result<DVector<f64>> {
        let energies = self
            .document
            .mo_energy
            .as_ref()
            .ok_or_else(|| missing("orbital energies", "mo_energy"))?;

        if energies.len() != mo_num {
            return Err(EnergyError::SourceSizeMismatch {
                what: "orbital energies",
                declared: mo_num,
                delivered: energies.len(),
            });
        }

        Ok(DVector::from_column_slice(energies))
    }
}
