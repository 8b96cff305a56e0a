/// Analysis layer: pulls labeled values out of a [`Table`](crate::data::table::Table)
/// and derives the physical quantities shown in the UI.
pub mod marker;
pub mod spectrogram;
pub mod sweep;

use thiserror::Error;

/// Failures while extracting or deriving values from a loaded table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The expected row label or column header was not found.
    #[error("field '{0}' not found in the loaded file")]
    FieldNotFound(String),

    /// A cell that should hold a number did not parse.
    #[error("field '{field}': '{token}' is not a number")]
    ParseError { field: String, token: String },

    /// The sweep column held fewer than two usable values.
    #[error("sweep column has fewer than two numeric values")]
    EmptySeries,

    /// Spectrogram requested before a sweep was loaded.
    #[error("no sweep loaded yet; open a sweep CSV first")]
    NotReady,
}
