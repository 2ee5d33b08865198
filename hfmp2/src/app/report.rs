use crate::energy::EnergyComponents;
use tracing::info;

pub fn report_energies(energies: &EnergyComponents) {
    info!("\n===========================================");
    info!("        Energy Summary");
    info!("===========================================");
    info!(
        "Nuclear repulsion energy:  {:.10} au",
        energies.nuclear_repulsion
    );
    info!("Hartree-Fock energy:       {:.10} au", energies.hartree_fock);
    match energies.mp2_correlation {
        Some(correlation) => {
            info!("MP2 correlation energy:    {:.10} au", correlation);
            info!("Total MP2 energy:          {:.10} au", energies.total());
        }
        None => info!("MP2 correlation energy not calculated."),
    }
    info!("===========================================\n");
}
