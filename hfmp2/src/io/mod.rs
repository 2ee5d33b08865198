//! Input/Output operations for energy calculations
//!
//! This module handles the integral store interface, the YAML integral file,
//! logging setup and the energy summary file.

mod integral_file;
mod output;
mod store;

pub use integral_file::{EriBlock, IntegralDocument, IntegralFile};
pub use output::{setup_output, write_energy_summary};
pub use store::{read_molecular_integrals, IntegralStore, MolecularIntegrals};
