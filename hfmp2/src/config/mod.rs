//! Configuration management for energy calculations
//!
//! This module handles configuration structures and defaults. Command-line
//! arguments take precedence over the YAML file.

mod args;

pub use args::Args;

use crate::energy::EnergyOptions;
use crate::mp2_impl::DenominatorPolicy;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub integral_file: Option<String>,
    pub mp2: Option<Mp2Params>,
    pub expansion: Option<ExpansionParams>,
}

/// MP2 calculation parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Mp2Params {
    pub enabled: Option<bool>,
    pub parallel: Option<bool>,
    pub zero_denominator: Option<DenominatorPolicy>,
}

impl Default for Mp2Params {
    fn default() -> Self {
        Mp2Params {
            enabled: Some(true),
            parallel: Some(false),
            zero_denominator: Some(DenominatorPolicy::Fail),
        }
    }
}

impl Mp2Params {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.parallel.is_none() {
            self.parallel = defaults.parallel;
        }
        if self.zero_denominator.is_none() {
            self.zero_denominator = defaults.zero_denominator;
        }
        self
    }
}

/// Two-electron tensor expansion parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpansionParams {
    pub strict: Option<bool>,
    pub tolerance: Option<f64>,
}

impl Default for ExpansionParams {
    fn default() -> Self {
        ExpansionParams {
            strict: Some(false),
            tolerance: Some(1e-10),
        }
    }
}

impl ExpansionParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.strict.is_none() {
            self.strict = defaults.strict;
        }
        if self.tolerance.is_none() {
            self.tolerance = defaults.tolerance;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.mp2 = Some(self.mp2.take().unwrap_or_default().with_defaults());
        self.expansion = Some(self.expansion.take().unwrap_or_default().with_defaults());
        self
    }

    pub fn is_mp2_enabled(&self) -> bool {
        self.mp2.as_ref().and_then(|m| m.enabled).unwrap_or(true)
    }

    pub fn is_mp2_parallel(&self) -> bool {
        self.mp2.as_ref().and_then(|m| m.parallel).unwrap_or(false)
    }

    pub fn zero_denominator(&self) -> DenominatorPolicy {
        self.mp2
            .as_ref()
            .and_then(|m| m.zero_denominator)
            .unwrap_or_default()
    }

    pub fn is_strict_expansion(&self) -> bool {
        self.expansion.as_ref().and_then(|e| e.strict).unwrap_or(false)
    }

    pub fn expansion_tolerance(&self) -> f64 {
        self.expansion
            .as_ref()
            .and_then(|e| e.tolerance)
            .unwrap_or(1e-10)
    }

    /// Merge command-line overrides into the options used for the calculation
    pub fn energy_options(&self, args: &Args) -> EnergyOptions {
        let strict = args
            .strict
            .or(args.tolerance.map(|_| true))
            .unwrap_or_else(|| self.is_strict_expansion());
        let tolerance = args.tolerance.unwrap_or_else(|| self.expansion_tolerance());

        EnergyOptions {
            mp2: args.mp2.unwrap_or_else(|| self.is_mp2_enabled()),
            parallel: args.parallel.unwrap_or_else(|| self.is_mp2_parallel()),
            denominator_policy: args.zero_denominator.unwrap_or_else(|| self.zero_denominator()),
            consistency_tolerance: strict.then_some(tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_applied() {
        let config = serde_yml::from_str::<Config>("integral_file: h2.yaml\n")
            .unwrap()
            .with_defaults();
        let options = config.energy_options(&Args::parse_from(["hfmp2"]));

        assert_eq!(config.integral_file.as_deref(), Some("h2.yaml"));
        assert_eq!(options, EnergyOptions::default());
    }

    #[test]
    fn test_yaml_sections() {
        let yaml = "mp2:\n  parallel: true\n  zero_denominator: propagate\nexpansion:\n  strict: true\n";
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        let options = config.energy_options(&Args::parse_from(["hfmp2"]));

        assert!(options.mp2);
        assert!(options.parallel);
        assert_eq!(options.denominator_policy, DenominatorPolicy::Propagate);
        assert_eq!(options.consistency_tolerance, Some(1e-10));
    }

    #[test]
    fn test_cli_overrides_config() {
        let yaml = "mp2:\n  enabled: true\n  zero_denominator: propagate\n";
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        let args = Args::parse_from([
            "hfmp2",
            "water.yaml",
            "--mp2=false",
            "--zero-denominator",
            "fail",
            "--strict",
            "--tolerance",
            "1e-8",
        ]);
        let options = config.energy_options(&args);

        assert_eq!(args.integral_file.as_deref(), Some("water.yaml"));
        assert!(!options.mp2);
        assert_eq!(options.denominator_policy, DenominatorPolicy::Fail);
        assert_eq!(options.consistency_tolerance, Some(1e-8));
    }

    #[test]
    fn test_cli_disables_config_switches() {
        let yaml = "mp2:\n  parallel: true\nexpansion:\n  strict: true\n";
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        let args = Args::parse_from(["hfmp2", "--parallel=false", "--strict=false", "water.yaml"]);
        let options = config.energy_options(&args);

        assert_eq!(args.integral_file.as_deref(), Some("water.yaml"));
        assert!(!options.parallel);
        assert_eq!(options.consistency_tolerance, None);

        let args = Args::parse_from(["hfmp2", "--parallel", "--strict", "water.yaml"]);
        let options = Config::default().with_defaults().energy_options(&args);
        assert!(options.parallel);
        assert_eq!(options.consistency_tolerance, Some(1e-10));
    }

    #[test]
    fn test_tolerance_implies_strict() {
        let config = Config::default().with_defaults();

        let args = Args::parse_from(["hfmp2", "--tolerance", "1e-6"]);
        assert_eq!(config.energy_options(&args).consistency_tolerance, Some(1e-6));

        let args = Args::parse_from(["hfmp2", "--tolerance", "1e-6", "--strict=false"]);
        assert_eq!(config.energy_options(&args).consistency_tolerance, None);
    }

    #[test]
    fn test_example_config_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/example/h2_mp2.yaml");
        let content = std::fs::read_to_string(path).unwrap();
        let config = serde_yml::from_str::<Config>(&content).unwrap().with_defaults();
        let options = config.energy_options(&Args::parse_from(["hfmp2"]));

        assert_eq!(config.integral_file.as_deref(), Some("example/h2_sto3g.yaml"));
        assert!(options.mp2);
        assert!(!options.parallel);
        assert_eq!(options.denominator_policy, DenominatorPolicy::Fail);
        assert_eq!(options.consistency_tolerance, Some(1e-10));
    }
}
