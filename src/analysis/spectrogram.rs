use std::f64::consts::PI;

use realfft::RealFftPlanner;

use super::sweep::SweepSummary;
use super::AnalysisError;

// ---------------------------------------------------------------------------
// Synthetic chirp spectrogram
// ---------------------------------------------------------------------------

/// Duration of the synthesized chirp in seconds.
pub const CHIRP_SECONDS: f64 = 2.0;
/// Analysis window length in samples.
pub const SEGMENT_LEN: usize = 64;
/// Tukey window taper fraction.
const TUKEY_ALPHA: f64 = 0.25;
/// Floor applied before taking log10, keeps silent bins finite.
const POWER_FLOOR: f64 = 1e-12;

/// Time-frequency power grid in dB.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// Frequency bin centers in Hz, DC first.
    pub frequencies: Vec<f64>,
    /// Segment center times in seconds.
    pub times: Vec<f64>,
    /// Power in dB, one row per segment: `power_db[time][frequency]`.
    pub power_db: Vec<Vec<f64>>,
}

impl Spectrogram {
    /// Overall dB range, used for the color scale.
    pub fn min_max_db(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.power_db {
            for &value in row {
                min = min.min(value);
                max = max.max(value);
            }
        }
        (min, max)
    }
}

/// Synthesize a 2-second linear chirp from the sweep summary and compute its
/// power spectrogram.
///
/// Requires a summary from a previous successful sweep load ([`AnalysisError::NotReady`]
/// otherwise).  A sweep whose sampling-rate estimate yields fewer than two
/// chirp samples is reported as [`AnalysisError::EmptySeries`].
pub fn chirp_spectrogram(summary: Option<&SweepSummary>) -> Result<Spectrogram, AnalysisError> {
    let summary = summary.ok_or(AnalysisError::NotReady)?;

    let fs = summary.sampling_rate;
    if !fs.is_finite() || fs <= 0.0 {
        return Err(AnalysisError::EmptySeries);
    }
    let n = (fs * CHIRP_SECONDS) as usize;
    if n < 2 {
        return Err(AnalysisError::EmptySeries);
    }

    let signal = chirp(summary.freq_initial, summary.freq_final, n);
    Ok(power_spectrogram(&signal, fs))
}

/// Sampled sine sweeping linearly from `f0` to `f1` over [`CHIRP_SECONDS`].
/// The time axis is an inclusive linspace over [0, CHIRP_SECONDS].
fn chirp(f0: f64, f1: f64, n: usize) -> Vec<f64> {
    let dt = CHIRP_SECONDS / (n - 1) as f64;
    (0..n)
        .map(|k| {
            let t = k as f64 * dt;
            (2.0 * PI * (f0 + (f1 - f0) * t / CHIRP_SECONDS) * t).sin()
        })
        .collect()
}

/// Short-time power spectral density of a real signal, in dB.
///
/// Tukey(0.25) window of [`SEGMENT_LEN`] samples (clamped to the signal
/// length), hop of window − window/8, per-segment mean removal, one-sided
/// spectrum with density scaling 1/(fs·Σw²).
fn power_spectrogram(signal: &[f64], fs: f64) -> Spectrogram {
    let seg = SEGMENT_LEN.min(signal.len());
    let hop = (seg - seg / 8).max(1);
    let window = tukey_window(seg, TUKEY_ALPHA);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1.0 / (fs * window_power);

    let n_bins = seg / 2 + 1;
    let frequencies: Vec<f64> = (0..n_bins).map(|i| i as f64 * fs / seg as f64).collect();

    let mut planner = RealFftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(seg);
    let mut spectrum = fft.make_output_vec();

    let mut times = Vec::new();
    let mut power_db = Vec::new();

    let mut start = 0;
    while start + seg <= signal.len() {
        let mut input: Vec<f64> = signal[start..start + seg].to_vec();
        let mean = input.iter().sum::<f64>() / seg as f64;
        for (x, w) in input.iter_mut().zip(&window) {
            *x = (*x - mean) * w;
        }

        if fft.process(&mut input, &mut spectrum).is_err() {
            log::warn!("FFT failed for segment starting at sample {start}");
            start += hop;
            continue;
        }

        let row: Vec<f64> = spectrum
            .iter()
            .enumerate()
            .map(|(bin, c)| {
                let mut power = c.norm_sqr() * scale;
                // One-sided spectrum: double everything except DC and Nyquist.
                if bin != 0 && !(seg % 2 == 0 && bin == n_bins - 1) {
                    power *= 2.0;
                }
                10.0 * power.max(POWER_FLOOR).log10()
            })
            .collect();

        times.push((start as f64 + seg as f64 / 2.0) / fs);
        power_db.push(row);
        start += hop;
    }

    Spectrogram {
        frequencies,
        times,
        power_db,
    }
}

/// Tukey (tapered cosine) window, flat in the middle with cosine edges.
fn tukey_window(n: usize, alpha: f64) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let last = (n - 1) as f64;
    let taper = alpha * last / 2.0;
    (0..n)
        .map(|i| {
            let x = i as f64;
            if x < taper {
                0.5 * (1.0 + (PI * (x / taper - 1.0)).cos())
            } else if x <= last - taper {
                1.0
            } else {
                0.5 * (1.0 + (PI * ((x - last) / taper + 1.0)).cos())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(f0: f64, f1: f64, rate: f64) -> SweepSummary {
        SweepSummary {
            freq_initial: f0,
            freq_final: f1,
            sampling_rate: rate,
            samples: 3,
        }
    }

    #[test]
    fn without_a_sweep_summary_generation_is_not_ready() {
        assert_eq!(
            chirp_spectrogram(None).unwrap_err(),
            AnalysisError::NotReady
        );
    }

    #[test]
    fn degenerate_sampling_rate_is_an_empty_series() {
        let flat = summary(100.0, 100.0, 0.0);
        assert_eq!(
            chirp_spectrogram(Some(&flat)).unwrap_err(),
            AnalysisError::EmptySeries
        );
    }

    #[test]
    fn grid_shape_matches_window_and_signal_length() {
        let spec = chirp_spectrogram(Some(&summary(100.0, 700.0, 300.0))).unwrap();

        // 64-sample window over a 600-sample signal, one-sided spectrum.
        assert_eq!(spec.frequencies.len(), SEGMENT_LEN / 2 + 1);
        assert_eq!(spec.frequencies[0], 0.0);
        assert!((spec.frequencies[spec.frequencies.len() - 1] - 150.0).abs() < 1e-9);

        assert!(!spec.times.is_empty());
        assert_eq!(spec.power_db.len(), spec.times.len());
        for (time, row) in spec.times.iter().zip(&spec.power_db) {
            assert!(*time > 0.0 && *time < CHIRP_SECONDS);
            assert_eq!(row.len(), spec.frequencies.len());
            assert!(row.iter().all(|p| p.is_finite()));
        }
    }

    #[test]
    fn grid_carries_signal_not_a_constant_field() {
        let spec = chirp_spectrogram(Some(&summary(10.0, 40.0, 200.0))).unwrap();
        let (min_db, max_db) = spec.min_max_db();
        assert!(max_db - min_db > 10.0);
    }

    #[test]
    fn short_signal_clamps_the_window() {
        // 20 Hz over 2 s gives 40 samples, below the 64-sample window.
        let spec = chirp_spectrogram(Some(&summary(1.0, 5.0, 20.0))).unwrap();
        assert_eq!(spec.frequencies.len(), 40 / 2 + 1);
        assert_eq!(spec.power_db.len(), 1);
    }

    #[test]
    fn tukey_window_tapers_to_zero_at_the_edges() {
        let w = tukey_window(64, 0.25);
        assert_eq!(w.len(), 64);
        assert!(w[0].abs() < 1e-12);
        assert!(w[63].abs() < 1e-12);
        assert_eq!(w[32], 1.0);
        assert!(w.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
