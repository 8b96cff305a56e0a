/// Presenters: pure rendering of already-computed series and grids.
pub mod plot;
pub mod spectrogram;
