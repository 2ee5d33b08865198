//! Error type shared by the integral store, the tensor expansion and the
//! energy evaluators.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnergyError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnergyError {
    #[error("invalid dimensions: {reason} (mo_num={mo_num}, n_occ={n_occ})")]
    InvalidDimensions {
        mo_num: usize,
        n_occ: usize,
        reason: String,
    },

    #[error("two-electron integral record {record} has index {index} outside [0, {mo_num})")]
    IndexOutOfRange {
        record: usize,
        index: i64,
        mo_num: usize,
    },

    #[error("unable to allocate the dense two-electron tensor for mo_num={mo_num}")]
    OutOfMemory { mo_num: usize },

    #[error(
        "inconsistent two-electron integral at {index:?}: already holds {existing}, record {record} writes {incoming}"
    )]
    InconsistentIntegral {
        record: usize,
        index: [usize; 4],
        existing: f64,
        incoming: f64,
    },

    #[error("consistency tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),

    #[error("zero MP2 denominator for (i={i}, j={j}, a={a}, b={b}): degenerate orbital energies")]
    DegenerateOrbitals {
        i: usize,
        j: usize,
        a: usize,
        b: usize,
    },

    #[error("failed to read {what} from integral source: {reason}")]
    SourceRead { what: &'static str, reason: String },

    #[error("{what}: source declared {declared} entries but delivered {delivered}")]
    SourceSizeMismatch {
        what: &'static str,
        declared: usize,
        delivered: usize,
    },

    #[error("open-shell system ({up} alpha, {down} beta electrons) cannot be treated with RHF")]
    OpenShell { up: usize, down: usize },
}

impl EnergyError {
    pub(crate) fn dimensions(mo_num: usize, n_occ: usize, reason: impl Into<String>) -> Self {
        EnergyError::InvalidDimensions {
            mo_num,
            n_occ,
            reason: reason.into(),
        }
    }

    pub(crate) fn read(what: &'static str, reason: impl ToString) -> Self {
        EnergyError::SourceRead {
            what,
            reason: reason.to_string(),
        }
    }
}
