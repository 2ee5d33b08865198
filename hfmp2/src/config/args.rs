//! Command-line argument parsing for energy calculations

use crate::mp2_impl::DenominatorPolicy;
use clap::Parser;

/// HF and MP2 energies from precomputed molecular-orbital integrals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML integral file (overrides config file)
    pub integral_file: Option<String>,

    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the final energies to this YAML file
    #[arg(long)]
    pub summary: Option<String>,

    /// Compute the MP2 correction; `--mp2=false` reports the HF energy only
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mp2: Option<bool>,

    /// Evaluate MP2 terms on all available threads
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub parallel: Option<bool>,

    /// Handling of zero MP2 denominators
    #[arg(long, value_enum)]
    pub zero_denominator: Option<DenominatorPolicy>,

    /// Reject symmetry-inconsistent duplicate integrals
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub strict: Option<bool>,

    /// Tolerance of the strict check; implies --strict unless --strict=false
    #[arg(long)]
    pub tolerance: Option<f64>,
}
