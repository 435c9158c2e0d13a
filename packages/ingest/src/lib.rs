#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vessel CSV schema validation and numeric coercion.
//!
//! A batch is rejected outright when any required column is missing. Once
//! the schema is satisfied every row is accepted: numeric cells that are
//! empty, non-numeric or non-finite are replaced with `0.0` and reported
//! as [`CoercionWarning`]s rather than errors.
//!
//! The validated [`VesselBatch`] keeps the original header and cells so the
//! scored dataset can be written back out with [`export`].

pub mod export;
pub mod schema;

use std::io::Read;
use std::path::Path;

use iuu_risk_vessel_models::VesselRecord;
use serde::Serialize;

use crate::schema::{ColumnIndex, resolve_columns};

/// Required columns are missing from the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required columns: {}", .missing.join(", "))]
pub struct SchemaError {
    /// The missing column names, in required-field order.
    pub missing: Vec<String>,
}

/// Errors that can occur while reading a vessel batch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The header does not carry every required column.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A numeric cell that was replaced with zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoercionWarning {
    /// 1-based data row (the header is row 0).
    pub row: usize,
    /// Canonical column name.
    pub field: &'static str,
    /// The raw cell contents.
    pub value: String,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: {} value {:?} is not numeric, using 0",
            self.row, self.field, self.value
        )
    }
}

/// Raw header and string cells, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Reads a CSV document. Header names are trimmed and rows may have a
    /// different cell count from the header.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Csv`] if the document cannot be parsed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_owned).collect());
        }

        log::debug!("Read {} rows with {} columns", rows.len(), headers.len());

        Ok(Self { headers, rows })
    }

    /// Reads a CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] if the file cannot be opened, or any
    /// error from [`Self::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
}

/// A validated batch: typed vessels plus the original table.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselBatch {
    /// Original header, for export.
    pub headers: Vec<String>,
    /// Original cells, parallel to [`Self::vessels`].
    pub rows: Vec<Vec<String>>,
    pub vessels: Vec<VesselRecord>,
    pub warnings: Vec<CoercionWarning>,
}

/// Validates a raw table into a [`VesselBatch`].
///
/// # Errors
///
/// Returns [`SchemaError`] naming every missing required column. No rows
/// are processed in that case.
pub fn validate(table: RawTable) -> Result<VesselBatch, SchemaError> {
    let columns = resolve_columns(&table.headers).map_err(|missing| SchemaError { missing })?;

    let mut warnings = Vec::new();
    let vessels = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i + 1, row, &columns, &mut warnings))
        .collect::<Vec<_>>();

    for warning in &warnings {
        log::warn!("{warning}");
    }
    if !warnings.is_empty() {
        log::info!(
            "Coerced {} non-numeric value(s) to zero across {} vessel(s)",
            warnings.len(),
            vessels.len()
        );
    }

    Ok(VesselBatch {
        headers: table.headers,
        rows: table.rows,
        vessels,
        warnings,
    })
}

/// Reads and validates a CSV document in one step.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] for malformed CSV and
/// [`IngestError::Schema`] for missing columns.
pub fn read_vessels<R: Read>(reader: R) -> Result<VesselBatch, IngestError> {
    Ok(validate(RawTable::from_reader(reader)?)?)
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", |s| s.trim())
}

fn parse_row(
    row_number: usize,
    row: &[String],
    columns: &ColumnIndex,
    warnings: &mut Vec<CoercionWarning>,
) -> VesselRecord {
    let mut number = |idx: usize, field: &'static str| -> f64 {
        let raw = cell(row, idx);
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                warnings.push(CoercionWarning {
                    row: row_number,
                    field,
                    value: raw.to_owned(),
                });
                0.0
            }
        }
    };

    let latitude = number(columns.latitude, schema::LATITUDE);
    let longitude = number(columns.longitude, schema::LONGITUDE);
    let days_since_port = number(columns.days_since_port, schema::DAYS_SINCE_PORT);
    let speed_knots = number(columns.speed_knots, schema::SPEED_KNOTS);
    let loitering_hours = number(columns.loitering_hours, schema::LOITERING_HOURS);
    let ais_gap_hours = number(columns.ais_gap_hours, schema::AIS_GAP_HOURS);

    VesselRecord {
        name: cell(row, columns.name).to_owned(),
        mmsi: cell(row, columns.mmsi).to_owned(),
        imo: cell(row, columns.imo).to_owned(),
        flag_state: cell(row, columns.flag_state).to_owned(),
        latitude,
        longitude,
        days_since_port,
        speed_knots,
        loitering_hours,
        ais_gap_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Vessel Name,MMSI,IMO,Flag State,Latitude,Longitude,Days Since Port,Speed (knots),Loitering Hours,AIS Gap Hours";

    #[test]
    fn parses_complete_rows() {
        let csv = format!("{HEADER}\nSea Wolf,412000001,9000001,Panama,-9.5,-170.2,45,0.5,5,10\n");
        let batch = read_vessels(csv.as_bytes()).unwrap();
        assert!(batch.warnings.is_empty());
        assert_eq!(batch.vessels.len(), 1);

        let v = &batch.vessels[0];
        assert_eq!(v.name, "Sea Wolf");
        assert_eq!(v.mmsi, "412000001");
        assert_eq!(v.flag_state, "Panama");
        assert!((v.latitude - -9.5).abs() < f64::EPSILON);
        assert!((v.days_since_port - 45.0).abs() < f64::EPSILON);
        assert!((v.speed_knots - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_columns_fail_the_batch() {
        let csv = "Vessel Name,MMSI,Flag State,Latitude,Longitude\nA,1,Panama,0,0\n";
        let err = read_vessels(csv.as_bytes()).unwrap_err();
        let schema = match err {
            IngestError::Schema(schema) => schema,
            other => panic!("expected schema error, got {other:?}"),
        };
        assert_eq!(
            schema.missing,
            vec![
                "IMO",
                "Days Since Port",
                "Speed (knots)",
                "Loitering Hours",
                "AIS Gap Hours"
            ]
        );
        assert_eq!(
            schema.to_string(),
            "Missing required columns: IMO, Days Since Port, Speed (knots), Loitering Hours, AIS Gap Hours"
        );
    }

    #[test]
    fn non_numeric_values_become_zero_with_warnings() {
        let csv = format!("{HEADER}\nDrifter,1,2,Togo,abc,10,,n/a,NaN,7\n");
        let batch = read_vessels(csv.as_bytes()).unwrap();
        let v = &batch.vessels[0];
        assert!(v.latitude.abs() < f64::EPSILON);
        assert!((v.longitude - 10.0).abs() < f64::EPSILON);
        assert!(v.days_since_port.abs() < f64::EPSILON);
        assert!(v.speed_knots.abs() < f64::EPSILON);
        assert!(v.loitering_hours.abs() < f64::EPSILON);
        assert!((v.ais_gap_hours - 7.0).abs() < f64::EPSILON);

        let fields: Vec<&str> = batch.warnings.iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec!["Latitude", "Days Since Port", "Speed (knots)", "Loitering Hours"]
        );
        assert!(batch.warnings.iter().all(|w| w.row == 1));
        assert_eq!(batch.warnings[0].value, "abc");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let csv = format!("{HEADER}\nStub,1,2,Belize,1.5\n");
        let batch = read_vessels(csv.as_bytes()).unwrap();
        assert_eq!(batch.vessels.len(), 1);
        assert!((batch.vessels[0].latitude - 1.5).abs() < f64::EPSILON);
        assert_eq!(batch.warnings.len(), 5);
    }

    #[test]
    fn headers_are_trimmed_and_extra_columns_kept() {
        let csv = " Vessel Name , MMSI,IMO,Flag State,Latitude,Longitude,Days Since Port,Speed (knots),Loitering Hours,AIS Gap Hours,Owner\nA,1,2,Chile,0,0,1,9,0,0,Acme\n";
        let batch = read_vessels(csv.as_bytes()).unwrap();
        assert_eq!(batch.headers[0], "Vessel Name");
        assert_eq!(batch.headers[10], "Owner");
        assert_eq!(batch.rows[0][10], "Acme");
        assert_eq!(batch.vessels[0].name, "A");
    }

    #[test]
    fn header_only_batch_is_empty() {
        let batch = read_vessels(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(batch.vessels.is_empty());
        assert!(batch.warnings.is_empty());
    }
}
