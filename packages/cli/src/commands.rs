//! Subcommand implementations shared by the flag-driven and interactive
//! front-ends.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use iuu_risk_cli_utils::{MultiProgress, VesselProgress};
use iuu_risk_engine::progress::null_progress;
use iuu_risk_engine::tracks::vessel_reports;
use iuu_risk_ingest::export::write_scored_csv;
use iuu_risk_ingest::{RawTable, validate as validate_table};
use iuu_risk_scoring_models::RunConfig;

use crate::output;

/// Runs a full prioritization pass over `input` and prints the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is missing required
/// columns, or the export/JSON output fails.
pub fn score(
    multi: &MultiProgress,
    input: &Path,
    config: &RunConfig,
    json: bool,
    export: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let batch = validate_table(RawTable::from_path(input)?)?;

    let progress = if json {
        null_progress()
    } else {
        VesselProgress::attach(multi, "Scoring vessels")
    };
    let report = iuu_risk_engine::run_with_progress(&batch, config, progress.as_ref());

    if let Some(path) = export {
        write_scored_csv(File::create(path)?, &batch, &report.scored)?;
        log::info!(
            "Wrote {} scored vessel(s) to {}",
            report.scored.len(),
            path.display()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }

    log::info!(
        "Prioritization complete in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Prints a report for each named vessel at its last known position.
///
/// Every vessel in the file is reported when `vessels` is empty.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is missing required
/// columns, names a vessel that is not in the file, or JSON output fails.
pub fn report(
    input: &Path,
    vessels: &[String],
    config: &RunConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = validate_table(RawTable::from_path(input)?)?;
    let reports = vessel_reports(&batch, config, vessels)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        output::print_vessel_reports(&reports);
    }

    Ok(())
}

/// Validates `input` against the required schema and reports coercions.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is missing required
/// columns.
pub fn validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let batch = validate_table(RawTable::from_path(input)?)?;

    println!(
        "{}: {} vessel(s), {} column(s), schema OK",
        input.display(),
        batch.vessels.len(),
        batch.headers.len()
    );
    if batch.warnings.is_empty() {
        println!("All numeric values parsed cleanly.");
    } else {
        println!("{} value(s) coerced to 0:", batch.warnings.len());
        for warning in &batch.warnings {
            println!("  {warning}");
        }
    }

    Ok(())
}
