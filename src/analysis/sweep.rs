use crate::data::table::Table;

use super::AnalysisError;

// ---------------------------------------------------------------------------
// Program B: frequency sweep summary
// ---------------------------------------------------------------------------

/// Header of the column holding the recorded sweep frequencies.
pub const SWEEP_COLUMN: &str = "Sweep (T1)";

/// Summary of a frequency sweep, input to the spectrogram step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSummary {
    /// Lowest recorded frequency in Hz.
    pub freq_initial: f64,
    /// Highest recorded frequency in Hz.
    pub freq_final: f64,
    /// Linear estimate of the sweep sampling rate in Hz:
    /// (final − initial) / (count − 1).
    pub sampling_rate: f64,
    /// Number of usable sweep points.
    pub samples: usize,
}

/// Summarize the sweep column: coerce to numeric, drop unusable entries,
/// sort ascending, and estimate the sampling rate.
pub fn summarize(table: &Table) -> Result<SweepSummary, AnalysisError> {
    let index = table
        .column_index(SWEEP_COLUMN)
        .ok_or_else(|| AnalysisError::FieldNotFound(SWEEP_COLUMN.to_string()))?;

    let mut values = table.numeric_column(index);
    if values.len() < 2 {
        return Err(AnalysisError::EmptySeries);
    }
    values.sort_by(f64::total_cmp);

    let freq_initial = values[0];
    let freq_final = values[values.len() - 1];
    let sampling_rate = (freq_final - freq_initial) / (values.len() - 1) as f64;

    Ok(SweepSummary {
        freq_initial,
        freq_final,
        sampling_rate,
        samples: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_table, LoadOptions};

    fn sweep_export(values: &[&str]) -> Table {
        let mut text = String::from("Time,Sweep (T1)\n");
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("{i},{v}\n"));
        }
        parse_table(&text, &LoadOptions::comma_with_header())
    }

    #[test]
    fn three_point_sweep_gives_linear_rate() {
        let summary = summarize(&sweep_export(&["100", "300", "700"])).unwrap();
        assert_eq!(summary.freq_initial, 100.0);
        assert_eq!(summary.freq_final, 700.0);
        assert_eq!(summary.sampling_rate, 300.0);
        assert_eq!(summary.samples, 3);
    }

    #[test]
    fn values_are_sorted_and_junk_entries_dropped_first() {
        let summary =
            summarize(&sweep_export(&["700", "", "n/a", "100", "300"])).unwrap();
        assert_eq!(summary.freq_initial, 100.0);
        assert_eq!(summary.freq_final, 700.0);
        assert_eq!(summary.samples, 3);
    }

    #[test]
    fn missing_column_names_the_field() {
        let table = parse_table(
            "Time,Frequency\n0,100\n",
            &LoadOptions::comma_with_header(),
        );
        assert_eq!(
            summarize(&table).unwrap_err(),
            AnalysisError::FieldNotFound("Sweep (T1)".to_string())
        );
    }

    #[test]
    fn fewer_than_two_usable_values_is_an_empty_series() {
        assert_eq!(
            summarize(&sweep_export(&["100", "junk"])).unwrap_err(),
            AnalysisError::EmptySeries
        );
        assert_eq!(
            summarize(&sweep_export(&[])).unwrap_err(),
            AnalysisError::EmptySeries
        );
    }
}
