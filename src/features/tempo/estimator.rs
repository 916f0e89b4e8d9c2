//! Tempo estimation from energy peaks
//!
//! Converts the median interval between detected energy peaks into a BPM
//! value. The series is assumed to be sampled at a materially constant tick
//! rate; the tick rate is an explicit parameter, never inferred.

use super::{
    peaks::{find_energy_peaks, peak_threshold},
    TempoEstimate,
};
use crate::config::TempoConfig;
use crate::error::AnalysisError;

/// Estimate tempo from an energy sample series
///
/// Peaks are strict local maxima above `mean + 1.5 * stddev`. The median
/// inter-peak interval, divided by the tick rate, gives the beat period; the
/// resulting BPM is folded once into [60, 180] (doubled if below, halved if
/// above) and rounded.
///
/// The octave fold is applied exactly once, never iterated. An implausible
/// raw estimate (e.g., 500 BPM from a noise burst) folds to 250 and stays
/// there; repeated halving would change observable results and is
/// deliberately not done.
///
/// # Arguments
///
/// * `samples` - Energy readings in [0.0, 1.0], one per tick
/// * `tick_rate_hz` - Energy sampling rate in Hz (e.g., 60.0)
///
/// # Returns
///
/// Tempo estimate with the qualifying peak count. Fewer than 2 peaks is not
/// an error: a signal without detectable transients reports the 120 BPM
/// fallback.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the series is empty or the tick
/// rate is not positive.
///
/// # Example
///
/// ```
/// use pulsekey::estimate_tempo;
///
/// // Peaks every 30 ticks at 60 Hz: one beat each 0.5 s -> 120 BPM
/// let samples: Vec<f32> = (0..300)
///     .map(|i| if i % 30 == 15 { 1.0 } else { 0.1 })
///     .collect();
/// let estimate = estimate_tempo(&samples, 60.0)?;
/// assert_eq!(estimate.bpm, 120);
/// # Ok::<(), pulsekey::AnalysisError>(())
/// ```
pub fn estimate_tempo(samples: &[f32], tick_rate_hz: f32) -> Result<TempoEstimate, AnalysisError> {
    estimate_tempo_with_config(samples, tick_rate_hz, &TempoConfig::default())
}

/// Estimate tempo with explicit fold range and fallback
///
/// Same algorithm as [`estimate_tempo`], with the folded BPM range and the
/// sparse-signal fallback taken from `config`.
pub fn estimate_tempo_with_config(
    samples: &[f32],
    tick_rate_hz: f32,
    config: &TempoConfig,
) -> Result<TempoEstimate, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty energy sample series".to_string(),
        ));
    }

    if tick_rate_hz <= 0.0 || !tick_rate_hz.is_finite() {
        return Err(AnalysisError::InvalidInput(format!(
            "Tick rate must be positive, got {}",
            tick_rate_hz
        )));
    }

    let threshold = peak_threshold(samples);
    let peaks = find_energy_peaks(samples, threshold);

    log::debug!(
        "Tempo estimation: {} ticks at {:.1} Hz, threshold {:.4}, {} peaks",
        samples.len(),
        tick_rate_hz,
        threshold,
        peaks.len()
    );

    if peaks.len() < 2 {
        log::debug!(
            "Fewer than 2 peaks, reporting fallback {} BPM",
            config.fallback_bpm
        );
        return Ok(TempoEstimate {
            bpm: config.fallback_bpm,
            peak_count: peaks.len(),
        });
    }

    // Median inter-peak interval: element at index len/2 of the sorted list
    // (even counts take the upper of the two central values)
    let mut intervals: Vec<usize> = peaks.windows(2).map(|w| w[1] - w[0]).collect();
    intervals.sort_unstable();
    let median_interval = intervals[intervals.len() / 2] as f32;

    let seconds_per_beat = median_interval / tick_rate_hz;
    let mut bpm = 60.0 / seconds_per_beat;

    // Single octave fold into the configured range
    if bpm < config.min_bpm {
        bpm *= 2.0;
    } else if bpm > config.max_bpm {
        bpm /= 2.0;
    }

    let estimate = TempoEstimate {
        bpm: bpm.round() as u32,
        peak_count: peaks.len(),
    };

    log::debug!(
        "Median interval {:.0} ticks -> {} BPM",
        median_interval,
        estimate.bpm
    );

    Ok(estimate)
}
