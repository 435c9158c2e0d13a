#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for IUU vessel risk prioritization.
//!
//! Reads a vessel CSV, applies the scoring configuration, and prints the
//! ranked table, boarding narratives, and operational summary. With no
//! subcommand it falls back to an interactive prompt flow.
//!
//! Uses `indicatif-log-bridge` (via [`iuu_risk_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and progress bars never fight for the terminal.

mod commands;
mod interactive;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use iuu_risk_scoring_models::{ConfigError, RunConfig};

#[derive(Parser)]
#[command(
    name = "iuu_risk",
    about = "Prioritize vessels for boarding by IUU risk and proximity"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Configuration file plus per-run overrides.
#[derive(Args, Default)]
struct ConfigArgs {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Patrol vessel latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    patrol_lat: Option<f64>,
    /// Patrol vessel longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    patrol_lon: Option<f64>,
    /// Distance filter radius in nautical miles
    #[arg(long)]
    range_nm: Option<f64>,
    /// Number of top-ranked vessels to write narratives for
    #[arg(long)]
    top_n: Option<usize>,
    /// Maximum rows in the ranked table
    #[arg(long)]
    limit: Option<usize>,
}

impl ConfigArgs {
    /// Loads the config file (or defaults) and applies any overrides.
    fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(lat) = self.patrol_lat {
            config.patrol.latitude = lat;
        }
        if let Some(lon) = self.patrol_lon {
            config.patrol.longitude = lon;
        }
        if let Some(range_nm) = self.range_nm {
            config.output.range_nm = range_nm;
        }
        if let Some(top_n) = self.top_n {
            config.output.top_n = top_n;
        }
        if let Some(limit) = self.limit {
            config.output.table_limit = limit;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Score, rank, and narrate every vessel in a CSV file
    Score {
        /// Vessel CSV file
        input: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Write the scored dataset (original columns plus risk columns) to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Report individual vessels at their last known position
    ///
    /// Rows sharing a vessel name are treated as one track; the last row
    /// is the vessel's current position.
    Report {
        /// Vessel CSV file
        input: PathBuf,
        /// Vessel name to report (repeatable). Reports every vessel when omitted.
        #[arg(long = "vessel", value_name = "NAME")]
        vessels: Vec<String>,
        #[command(flatten)]
        config: ConfigArgs,
        /// Print the reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a CSV file against the required schema without scoring
    Validate {
        /// Vessel CSV file
        input: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = iuu_risk_cli_utils::init_logger();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run(&multi);
    };

    match command {
        Commands::Score {
            input,
            config,
            json,
            export,
        } => {
            let config = config.resolve()?;
            commands::score(&multi, &input, &config, json, export.as_deref())?;
        }
        Commands::Report {
            input,
            vessels,
            config,
            json,
        } => {
            let config = config.resolve()?;
            commands::report(&input, &vessels, &config, json)?;
        }
        Commands::Validate { input } => commands::validate(&input)?,
        Commands::Config { config } => {
            let config = config.resolve()?;
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args = ConfigArgs {
            patrol_lat: Some(-12.5),
            range_nm: Some(0.0),
            limit: Some(25),
            ..ConfigArgs::default()
        };
        let config = args.resolve().unwrap();
        assert!((config.patrol.latitude - -12.5).abs() < f64::EPSILON);
        assert!((config.patrol.longitude - -170.0).abs() < f64::EPSILON);
        assert!(config.output.range_nm.abs() < f64::EPSILON);
        assert_eq!(config.output.table_limit, 25);
        assert_eq!(config.output.top_n, 3);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = ConfigArgs {
            patrol_lon: Some(200.0),
            ..ConfigArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "iuu_risk",
            "score",
            "vessels.csv",
            "--patrol-lat",
            "-10.5",
            "--patrol-lon",
            "-171",
            "--json",
        ])
        .unwrap();
        let Some(Commands::Score { config, json, .. }) = cli.command else {
            panic!("expected score subcommand");
        };
        assert!(json);
        assert_eq!(config.patrol_lat, Some(-10.5));
        assert_eq!(config.patrol_lon, Some(-171.0));
    }

    #[test]
    fn parses_repeated_vessel_names() {
        let cli = Cli::try_parse_from([
            "iuu_risk",
            "report",
            "tracks.csv",
            "--vessel",
            "Sea Wolf",
            "--vessel",
            "Ghost Reefer",
        ])
        .unwrap();
        let Some(Commands::Report { vessels, json, .. }) = cli.command else {
            panic!("expected report subcommand");
        };
        assert!(!json);
        assert_eq!(vessels, vec!["Sea Wolf", "Ghost Reefer"]);
    }
}
