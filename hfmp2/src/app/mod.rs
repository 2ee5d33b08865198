mod report;
mod runner;

pub use runner::run_energy_calculation;

use self::report::report_energies;
use crate::config::{Args, Config};
use crate::io::{setup_output, write_energy_summary};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::{self, File};
use tracing::info;

pub struct EnergyApplication {
    args: Args,
    config: Config,
}

impl EnergyApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());

        let integral_file = self
            .args
            .integral_file
            .clone()
            .or_else(|| self.config.integral_file.clone())
            .ok_or_else(|| eyre!("No integral file given on the command line or in the configuration"))?;

        let options = self.config.energy_options(&self.args);
        info!("Calculation options: {:?}", options);

        let energies = run_energy_calculation(&integral_file, &options)?;
        report_energies(&energies);

        if let Some(ref summary_path) = self.args.summary {
            let mut file = File::create(summary_path)
                .wrap_err_with(|| format!("Unable to create summary file: {}", summary_path))?;
            write_energy_summary(&mut file, &integral_file, &energies)?;
            info!("Energy summary written to: {}", summary_path);
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(ref path) = args.config_file else {
        return Ok(Config::default().with_defaults());
    };

    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
