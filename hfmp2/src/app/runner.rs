use crate::energy::{compute_energies, EnergyComponents, EnergyOptions};
use crate::io::{read_molecular_integrals, IntegralFile};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

/// Read `integral_file` and evaluate the HF (and MP2) energy
pub fn run_energy_calculation(integral_file: &str, options: &EnergyOptions) -> Result<EnergyComponents> {
    info!("Reading integrals from: {}", integral_file);
    let store = IntegralFile::open(integral_file)
        .wrap_err_with(|| format!("Unable to open integral file: {}", integral_file))?;

    let integrals = read_molecular_integrals(&store, options.mp2)
        .wrap_err_with(|| format!("Unable to read integrals from: {}", integral_file))?;

    info!("\nStarting energy evaluation...");
    let energies = compute_energies(&integrals, options).wrap_err("Energy evaluation failed")?;
    Ok(energies)
}
