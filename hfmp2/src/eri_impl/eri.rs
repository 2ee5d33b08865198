//! Sparse two-electron integral records and their dense expansion

use crate::error::{EnergyError, Result};
use tracing::{debug, info};

/// One symmetry-unique two-electron integral <ij|kl> as delivered by an
/// integral store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseIntegral {
    pub index: [i32; 4],
    pub value: f64,
}

impl SparseIntegral {
    pub fn new(i: i32, j: i32, k: i32, l: i32, value: f64) -> Self {
        SparseIntegral {
            index: [i, j, k, l],
            value,
        }
    }
}

/// Ordered list of sparse two-electron integrals.
///
/// Each symmetry-distinct integral is expected once. Later records overwrite
/// earlier ones when they land on the same slot of the dense tensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseIntegrals {
    records: Vec<SparseIntegral>,
}

impl SparseIntegrals {
    pub fn new(records: Vec<SparseIntegral>) -> Self {
        SparseIntegrals { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SparseIntegral> {
        self.records.iter()
    }

    pub fn push(&mut self, record: SparseIntegral) {
        self.records.push(record);
    }

    /// Convert every record to `usize` indices, rejecting anything outside
    /// `[0, mo_num)`.
    fn checked_indices(&self, mo_num: usize) -> Result<Vec<[usize; 4]>> {
        self.records
            .iter()
            .enumerate()
            .map(|(record, integral)| -> Result<[usize; 4]> {
                let mut out = [0usize; 4];
                for (slot, &raw) in out.iter_mut().zip(integral.index.iter()) {
                    *slot = usize::try_from(raw)
                        .ok()
                        .filter(|&p| p < mo_num)
                        .ok_or(EnergyError::IndexOutOfRange {
                            record,
                            index: raw as i64,
                            mo_num,
                        })?;
                }
                Ok(out)
            })
            .collect()
    }
}

impl FromIterator<SparseIntegral> for SparseIntegrals {
    fn from_iter<T: IntoIterator<Item = SparseIntegral>>(iter: T) -> Self {
        SparseIntegrals::new(iter.into_iter().collect())
    }
}

/// The eight index tuples that share the value of <ij|kl> for real orbitals.
pub fn symmetry_equivalents([i, j, k, l]: [usize; 4]) -> [[usize; 4]; 8] {
    [
        [i, j, k, l],
        [i, l, k, j],
        [k, l, i, j],
        [k, j, i, l],
        [j, i, l, k],
        [l, i, j, k],
        [l, k, j, i],
        [j, k, l, i],
    ]
}

/// Dense mo_num^4 two-electron tensor <ij|kl>, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseEri {
    mo_num: usize,
    data: Vec<f64>,
}

impl DenseEri {
    /// Expand the sparse integrals into a dense tensor, filling all eight
    /// symmetry-equivalent positions of every record. Unlisted entries are zero.
    pub fn expand(mo_num: usize, integrals: &SparseIntegrals) -> Result<Self> {
        let indices = integrals.checked_indices(mo_num)?;
        let mut eri = DenseEri::zeros(mo_num)?;

        for (idx, integral) in indices.iter().zip(integrals.iter()) {
            for pos in symmetry_equivalents(*idx) {
                let offset = eri.offset(pos);
                eri.data[offset] = integral.value;
            }
        }

        debug!("Expanded {} sparse integrals", integrals.len());
        Ok(eri)
    }

    /// Like [`DenseEri::expand`], but a record that would overwrite an already
    /// populated slot with a value differing by more than `tolerance` is
    /// rejected.
    /// `tolerance` must be a non-negative number.
    pub fn expand_strict(mo_num: usize, integrals: &SparseIntegrals, tolerance: f64) -> Result<Self> {
        if !(tolerance >= 0.0) {
            return Err(EnergyError::InvalidTolerance(tolerance));
        }
        let indices = integrals.checked_indices(mo_num)?;
        let mut eri = DenseEri::zeros(mo_num)?;

        let mut populated = Vec::new();
        populated
            .try_reserve_exact(eri.data.len())
            .map_err(|_| EnergyError::OutOfMemory { mo_num })?;
        populated.resize(eri.data.len(), false);

        for (record, (idx, integral)) in indices.iter().zip(integrals.iter()).enumerate() {
            for pos in symmetry_equivalents(*idx) {
                let offset = eri.offset(pos);
                let existing = eri.data[offset];
                if populated[offset] && (existing - integral.value).abs() > tolerance {
                    return Err(EnergyError::InconsistentIntegral {
                        record,
                        index: pos,
                        existing,
                        incoming: integral.value,
                    });
                }
                eri.data[offset] = integral.value;
                populated[offset] = true;
            }
        }

        debug!(
            "Expanded {} sparse integrals with consistency check (tolerance {:.1e})",
            integrals.len(),
            tolerance
        );
        Ok(eri)
    }

    /// Zero-filled tensor. Fails with `OutOfMemory` when mo_num^4 entries
    /// cannot be represented or allocated.
    pub fn zeros(mo_num: usize) -> Result<Self> {
        if mo_num == 0 {
            return Err(EnergyError::dimensions(mo_num, 0, "mo_num must be at least 1"));
        }

        let len = mo_num
            .checked_mul(mo_num)
            .and_then(|n| n.checked_mul(mo_num))
            .and_then(|n| n.checked_mul(mo_num))
            .ok_or(EnergyError::OutOfMemory { mo_num })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| EnergyError::OutOfMemory { mo_num })?;
        data.resize(len, 0.0);

        info!(
            "Dense two-electron tensor: {}^4 = {} entries ({:.2} MB)",
            mo_num,
            len,
            (len * std::mem::size_of::<f64>()) as f64 / 1_048_576.0
        );

        Ok(DenseEri { mo_num, data })
    }

    pub fn mo_num(&self) -> usize {
        self.mo_num
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// <ij|kl>
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        self.data[self.offset([i, j, k, l])]
    }

    #[inline]
    fn offset(&self, [i, j, k, l]: [usize; 4]) -> usize {
        let n = self.mo_num;
        ((i * n + j) * n + k) * n + l
    }
}
