//! Output formatting and logging utilities

use crate::energy::EnergyComponents;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Wall-clock timer printed as HH:MM:SS
struct ClockTimer;

impl FormatTime for ClockTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        write!(
            w,
            "{:02}:{:02}:{:02}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60
        )
    }
}

/// Route tracing output to a log file, or to stdout when no path is given
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(ClockTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Output will be written to: {}", path);
            }
            Err(e) => eprintln!("Could not create output file {}: {}", path, e),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(ClockTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

#[derive(Serialize)]
struct EnergySummary<'a> {
    integral_file: &'a str,
    nuclear_repulsion: f64,
    hartree_fock: f64,
    mp2_correlation: Option<f64>,
    total: f64,
}

/// Write the final energies as a small YAML document
pub fn write_energy_summary<W: Write>(
    writer: &mut W,
    integral_file: &str,
    energies: &EnergyComponents,
) -> Result<()> {
    let summary = EnergySummary {
        integral_file,
        nuclear_repulsion: energies.nuclear_repulsion,
        hartree_fock: energies.hartree_fock,
        mp2_correlation: energies.mp2_correlation,
        total: energies.total(),
    };
    let yaml = serde_yml::to_string(&summary).wrap_err("Failed to serialize energy summary")?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}
