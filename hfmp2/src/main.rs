//! Energy calculation command-line interface
//!
//! Reads a YAML integral file and reports the HF, MP2 and total energies.

use color_eyre::eyre::Result;
use hfmp2::app::EnergyApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    EnergyApplication::from_cli()?.run()
}
