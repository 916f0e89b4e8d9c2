//! RMS energy sampling
//!
//! The tempo estimator consumes a series of normalized energy readings taken
//! at a constant tick rate. Hosts that sample live audio produce one RMS
//! value per tick themselves; hosts that hold a contiguous buffer can slice
//! it into ticks here.

use crate::error::AnalysisError;

/// Compute RMS energy of one frame of samples
///
/// For samples normalized to [-1.0, 1.0] the result lies in [0.0, 1.0],
/// which is the domain the tempo estimator expects.
pub fn rms(frame: &[f32]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
    (sum_sq / frame.len() as f32).sqrt()
}

/// Slice a contiguous signal into fixed ticks and compute RMS per tick
///
/// Produces an energy sample series equivalent to polling a live signal at
/// `tick_rate_hz`: each tick covers `sample_rate / tick_rate_hz` samples. A
/// trailing partial tick is dropped so every reading covers the same
/// duration.
///
/// # Arguments
///
/// * `samples` - Time-domain samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `tick_rate_hz` - Energy sampling rate in Hz (e.g., 60.0)
///
/// # Returns
///
/// One RMS value per complete tick, in signal order
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the samples are empty, either
/// rate is not positive, or the tick rate exceeds the sample rate (a tick
/// would cover less than one sample).
pub fn energy_series(
    samples: &[f32],
    sample_rate: f32,
    tick_rate_hz: f32,
) -> Result<Vec<f32>, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty samples for energy series".to_string(),
        ));
    }

    if sample_rate <= 0.0 || !sample_rate.is_finite() {
        return Err(AnalysisError::InvalidInput(format!(
            "Sample rate must be positive, got {}",
            sample_rate
        )));
    }

    if tick_rate_hz <= 0.0 || !tick_rate_hz.is_finite() {
        return Err(AnalysisError::InvalidInput(format!(
            "Tick rate must be positive, got {}",
            tick_rate_hz
        )));
    }

    let tick_len = (sample_rate / tick_rate_hz) as usize;
    if tick_len == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Tick rate {} Hz exceeds sample rate {} Hz",
            tick_rate_hz, sample_rate
        )));
    }

    let series: Vec<f32> = samples.chunks_exact(tick_len).map(rms).collect();

    log::debug!(
        "Energy series: {} ticks of {} samples at {:.1} Hz",
        series.len(),
        tick_len,
        tick_rate_hz
    );

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_empty() {
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_rms_constant_signal() {
        let frame = vec![0.5f32; 100];
        assert!((rms(&frame) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rms_sine_wave() {
        // RMS of a full-scale sine is 1/sqrt(2)
        let frame: Vec<f32> = (0..1000)
            .map(|i| (2.0 * std::f32::consts::PI * i as f32 / 100.0).sin())
            .collect();
        assert!((rms(&frame) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_energy_series_tick_count() {
        // 2 seconds at 600 Hz sampled at 60 ticks/s -> 120 ticks of 10 samples
        let samples = vec![0.1f32; 1200];
        let series = energy_series(&samples, 600.0, 60.0).unwrap();
        assert_eq!(series.len(), 120);
        for &e in &series {
            assert!((e - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_energy_series_drops_partial_tick() {
        let samples = vec![0.1f32; 1205];
        let series = energy_series(&samples, 600.0, 60.0).unwrap();
        assert_eq!(series.len(), 120);
    }

    #[test]
    fn test_energy_series_invalid_inputs() {
        assert!(energy_series(&[], 600.0, 60.0).is_err());
        assert!(energy_series(&[0.1], 0.0, 60.0).is_err());
        assert!(energy_series(&[0.1], 600.0, 0.0).is_err());
        // Tick rate above the sample rate leaves no samples per tick
        assert!(energy_series(&[0.1; 100], 60.0, 600.0).is_err());
    }
}
