//! Scored dataset export.
//!
//! Writes every original column back out, followed by the derived
//! `Risk Score`, `Risk Level` and `Distance from Patrol` columns.

use std::io::Write;

use iuu_risk_vessel_models::ScoredVessel;

use crate::{IngestError, VesselBatch};

/// Derived columns appended after the original header.
pub const DERIVED_COLUMNS: &[&str] = &["Risk Score", "Risk Level", "Distance from Patrol"];

/// Writes the scored dataset as CSV.
///
/// `scored` must be in the batch's input order (one entry per row). Short
/// rows are padded so every record has the full column count.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] if writing fails.
pub fn write_scored_csv<W: Write>(
    writer: W,
    batch: &VesselBatch,
    scored: &[ScoredVessel],
) -> Result<(), IngestError> {
    if scored.len() != batch.rows.len() {
        log::warn!(
            "Exporting {} scored vessel(s) for {} input row(s)",
            scored.len(),
            batch.rows.len()
        );
    }

    let mut writer = csv::WriterBuilder::new().from_writer(writer);

    writer.write_record(
        batch
            .headers
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS.iter().copied()),
    )?;

    let width = batch.headers.len();
    for (row, vessel) in batch.rows.iter().zip(scored) {
        let mut record: Vec<String> = row.iter().take(width).cloned().collect();
        record.resize(width, String::new());
        record.push(vessel.score.to_string());
        record.push(vessel.level.to_string());
        record.push(format!("{:.2}", vessel.distance_nm));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
