use crate::data::table::Table;

use super::AnalysisError;

// ---------------------------------------------------------------------------
// Program A: resistance / marker power / amplitude
// ---------------------------------------------------------------------------

/// Row label carrying the input resistance.
pub const RF_INPUT_LABEL: &str = "RF Input";
/// Row label carrying the marker power in dBm.
pub const MARKER_LABEL: &str = "marker_1_value_dbm";

/// Column holding the frequency axis of the trace (header-less export).
const FREQUENCY_COLUMN: usize = 1;
/// Column holding the power axis of the trace.
const POWER_COLUMN: usize = 2;

/// Scalar quantities derived from a marker export.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerReadings {
    /// Input resistance in ohms, as reported by the instrument.
    pub resistance_ohms: f64,
    /// Marker power in dBm, as reported.
    pub power_dbm: f64,
    /// Marker power converted to milliwatts: 10^(dBm / 10).
    pub power_mw: f64,
    /// Signal amplitude, sqrt of the power in mW.
    pub amplitude: f64,
}

/// Extract resistance and marker power from the table and derive
/// power in mW and amplitude.
pub fn analyze(table: &Table) -> Result<MarkerReadings, AnalysisError> {
    let resistance_ohms = labeled_value(table, RF_INPUT_LABEL)?;
    let power_dbm = labeled_value(table, MARKER_LABEL)?;

    let power_mw = 10f64.powf(power_dbm / 10.0);
    let amplitude = power_mw.sqrt();

    Ok(MarkerReadings {
        resistance_ohms,
        power_dbm,
        power_mw,
        amplitude,
    })
}

/// The trace embedded in the export: (frequency, power) pairs in row order.
pub fn power_curve(table: &Table) -> Vec<[f64; 2]> {
    table.numeric_pairs(FREQUENCY_COLUMN, POWER_COLUMN)
}

/// Find the row whose first cell contains `label` and parse the leading
/// whitespace-delimited token of its second cell (cells look like "50 Ohm").
fn labeled_value(table: &Table, label: &str) -> Result<f64, AnalysisError> {
    let row = table
        .find_row(label)
        .ok_or_else(|| AnalysisError::FieldNotFound(label.to_string()))?;

    let cell = row.get(1).map(String::as_str).unwrap_or("");
    let token = cell.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|_| AnalysisError::ParseError {
        field: label.to_string(),
        token: token.to_string(),
    })
}
