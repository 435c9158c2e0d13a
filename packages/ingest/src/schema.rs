//! Required column names and header resolution.

/// Vessel name column.
pub const VESSEL_NAME: &str = "Vessel Name";
/// MMSI column.
pub const MMSI: &str = "MMSI";
/// IMO column.
pub const IMO: &str = "IMO";
/// Flag state column.
pub const FLAG_STATE: &str = "Flag State";
/// Latitude column (degrees).
pub const LATITUDE: &str = "Latitude";
/// Longitude column (degrees).
pub const LONGITUDE: &str = "Longitude";
/// Days since last port call.
pub const DAYS_SINCE_PORT: &str = "Days Since Port";
/// Speed over ground in knots.
pub const SPEED_KNOTS: &str = "Speed (knots)";
/// Loitering hours.
pub const LOITERING_HOURS: &str = "Loitering Hours";
/// AIS gap hours.
pub const AIS_GAP_HOURS: &str = "AIS Gap Hours";

/// Every column a vessel batch must carry, in reporting order.
pub const REQUIRED_FIELDS: &[&str] = &[
    VESSEL_NAME,
    MMSI,
    IMO,
    FLAG_STATE,
    LATITUDE,
    LONGITUDE,
    DAYS_SINCE_PORT,
    SPEED_KNOTS,
    LOITERING_HOURS,
    AIS_GAP_HOURS,
];

/// Alternate header spellings seen in tracking exports, mapped to their
/// canonical column. The canonical name wins when both are present.
pub const FIELD_ALIASES: &[(&str, &str)] = &[
    ("VesselName", VESSEL_NAME),
    ("FlagState", FLAG_STATE),
    ("Speed", SPEED_KNOTS),
];

/// Column indices for every required field.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    pub name: usize,
    pub mmsi: usize,
    pub imo: usize,
    pub flag_state: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub days_since_port: usize,
    pub speed_knots: usize,
    pub loitering_hours: usize,
    pub ais_gap_hours: usize,
}

/// Finds the column for `field`, falling back to any of its aliases.
fn find_column(headers: &[String], field: &str) -> Option<usize> {
    headers.iter().position(|h| h == field).or_else(|| {
        FIELD_ALIASES
            .iter()
            .filter(|(_, canonical)| *canonical == field)
            .find_map(|(alias, _)| headers.iter().position(|h| h == alias))
    })
}

/// Resolves every required field to a column index.
///
/// # Errors
///
/// Returns the names of all required fields that could not be found, in
/// [`REQUIRED_FIELDS`] order.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnIndex, Vec<String>> {
    let found: Vec<Option<usize>> = REQUIRED_FIELDS
        .iter()
        .map(|field| find_column(headers, field))
        .collect();

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .zip(&found)
        .filter(|(_, idx)| idx.is_none())
        .map(|(field, _)| (*field).to_owned())
        .collect();

    match found.as_slice() {
        [
            Some(name),
            Some(mmsi),
            Some(imo),
            Some(flag_state),
            Some(latitude),
            Some(longitude),
            Some(days_since_port),
            Some(speed_knots),
            Some(loitering_hours),
            Some(ais_gap_hours),
        ] => Ok(ColumnIndex {
            name: *name,
            mmsi: *mmsi,
            imo: *imo,
            flag_state: *flag_state,
            latitude: *latitude,
            longitude: *longitude,
            days_since_port: *days_since_port,
            speed_knots: *speed_knots,
            loitering_hours: *loitering_hours,
            ais_gap_hours: *ais_gap_hours,
        }),
        _ => Err(missing),
    }
}
