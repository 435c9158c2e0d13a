//! Interactive prompt flow for the prioritization CLI.
//!
//! Provides a menu-driven interface using `dialoguer` for scoring a vessel
//! file without memorizing CLI flags.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};
use iuu_risk_cli_utils::MultiProgress;
use iuu_risk_engine::tracks::latest_positions;
use iuu_risk_ingest::{RawTable, validate};
use iuu_risk_scoring_models::RunConfig;

use crate::{ConfigArgs, commands};

/// Top-level actions available in the interactive menu.
enum Action {
    Score,
    Report,
    Validate,
    ShowConfig,
}

impl Action {
    const ALL: &[Self] = &[Self::Score, Self::Report, Self::Validate, Self::ShowConfig];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Score => "Score and rank vessels",
            Self::Report => "Report a single vessel",
            Self::Validate => "Validate a vessel file",
            Self::ShowConfig => "Show default configuration",
        }
    }
}

/// Runs the interactive menu, prompting for the action and its inputs.
///
/// # Errors
///
/// Returns an error if a prompt fails or the selected operation fails.
pub fn run(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    println!("IUU Risk Prioritization");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Score => score(multi)?,
        Action::Report => report()?,
        Action::Validate => commands::validate(&prompt_path("Vessel CSV file")?)?,
        Action::ShowConfig => print!("{}", RunConfig::default().to_toml_string()?),
    }

    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf, dialoguer::Error> {
    let path: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

fn score(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let input = prompt_path("Vessel CSV file")?;

    let config_path: String = Input::new()
        .with_prompt("Config file (empty for defaults)")
        .allow_empty(true)
        .interact_text()?;
    let config_file = if config_path.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(config_path.trim()))
    };
    let base = ConfigArgs {
        config: config_file,
        ..ConfigArgs::default()
    }
    .resolve()?;

    let patrol_lat: f64 = Input::new()
        .with_prompt("Your vessel's latitude")
        .default(base.patrol.latitude)
        .interact_text()?;
    let patrol_lon: f64 = Input::new()
        .with_prompt("Your vessel's longitude")
        .default(base.patrol.longitude)
        .interact_text()?;
    let range_nm: f64 = Input::new()
        .with_prompt("Detection range (nautical miles)")
        .default(base.output.range_nm)
        .interact_text()?;

    let export = if Confirm::new()
        .with_prompt("Export the scored dataset to CSV?")
        .default(false)
        .interact()?
    {
        Some(prompt_path("Export file")?)
    } else {
        None
    };

    let mut config = base;
    config.patrol.latitude = patrol_lat;
    config.patrol.longitude = patrol_lon;
    config.output.range_nm = range_nm;
    config.validate()?;

    commands::score(multi, &input, &config, false, export.as_deref())
}

fn report() -> Result<(), Box<dyn std::error::Error>> {
    let input = prompt_path("Vessel CSV file")?;
    let batch = validate(RawTable::from_path(&input)?)?;

    let names: Vec<&str> = latest_positions(&batch.vessels)
        .iter()
        .map(|track| track.latest.name.as_str())
        .collect();
    if names.is_empty() {
        println!("{} has no vessel rows.", input.display());
        return Ok(());
    }

    let idx = Select::new()
        .with_prompt("Select a vessel")
        .items(&names)
        .default(0)
        .interact()?;

    let config = ConfigArgs::default().resolve()?;
    commands::report(&input, &[names[idx].to_owned()], &config, false)
}
