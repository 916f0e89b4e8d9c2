//! Frequency-magnitude spectrum snapshots
//!
//! A [`SpectralFrame`] is a read-only, one-sided magnitude spectrum in dB,
//! paired with the sample rate and analysis window size that produced it. The
//! chromagram builder consumes it; hosts either supply a frame directly from
//! their own analyser or compute one here from time-domain samples.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::AnalysisError;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// One-sided frequency-magnitude spectrum snapshot in dB
///
/// Invariant: `bins.len() == window_size / 2` (standard one-sided spectrum).
/// The frame is a snapshot of a single analysis window; it carries no history.
#[derive(Debug, Clone)]
pub struct SpectralFrame {
    /// Magnitude per frequency bin, in dB
    pub bins: Vec<f32>,

    /// Sample rate of the source signal in Hz
    pub sample_rate: f32,

    /// Analysis window size in samples
    pub window_size: usize,
}

impl SpectralFrame {
    /// Create a frame from existing dB magnitudes, validating the metadata
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the sample rate is not
    /// positive, the window size is zero, or `bins.len() != window_size / 2`.
    pub fn new(
        bins: Vec<f32>,
        sample_rate: f32,
        window_size: usize,
    ) -> Result<Self, AnalysisError> {
        let frame = Self {
            bins,
            sample_rate,
            window_size,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Compute a frame from time-domain samples
    ///
    /// Applies a Hann window to the first `window_size` samples, runs a
    /// forward FFT, and converts the one-sided magnitudes to dB. This mirrors
    /// what a host analyser node produces, so the output feeds straight into
    /// [`build_chromagram`](crate::build_chromagram).
    ///
    /// Bins with no energy map to negative infinity dB, so converting them
    /// back to linear magnitude yields exactly zero. A silent window
    /// therefore produces the all-zero chromagram downstream instead of a
    /// spurious floor-level distribution.
    ///
    /// # Arguments
    ///
    /// * `samples` - Time-domain samples, normalized to [-1.0, 1.0]
    /// * `sample_rate` - Sample rate in Hz
    /// * `window_size` - Analysis window size in samples (e.g., 2048)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the window size is zero, the
    /// sample rate is not positive, or fewer than `window_size` samples are
    /// provided.
    pub fn from_samples(
        samples: &[f32],
        sample_rate: f32,
        window_size: usize,
    ) -> Result<Self, AnalysisError> {
        if window_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "Window size must be > 0".to_string(),
            ));
        }

        if sample_rate <= 0.0 || !sample_rate.is_finite() {
            return Err(AnalysisError::InvalidInput(format!(
                "Sample rate must be positive, got {}",
                sample_rate
            )));
        }

        if samples.len() < window_size {
            return Err(AnalysisError::InvalidInput(format!(
                "Need at least {} samples for one analysis window, got {}",
                window_size,
                samples.len()
            )));
        }

        log::debug!(
            "Computing spectral frame: window={} at {} Hz",
            window_size,
            sample_rate
        );

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(window_size);

        // Hann window over the first analysis window of samples
        let mut buffer: Vec<Complex<f32>> = samples[..window_size]
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let w = 0.5
                    * (1.0
                        - (2.0 * std::f32::consts::PI * i as f32 / (window_size - 1) as f32)
                            .cos());
                Complex::new(s * w, 0.0)
            })
            .collect();

        fft.process(&mut buffer);

        // One-sided spectrum: bins 0..window_size/2, magnitudes in dB.
        // Zero-energy bins become -inf dB, which is 0.0 in linear magnitude.
        let bins: Vec<f32> = buffer[..window_size / 2]
            .iter()
            .map(|c| {
                let norm = c.norm();
                if norm <= EPSILON {
                    f32::NEG_INFINITY
                } else {
                    20.0 * norm.log10()
                }
            })
            .collect();

        Ok(Self {
            bins,
            sample_rate,
            window_size,
        })
    }

    /// Check the one-sided spectrum invariant
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the metadata is inconsistent
    /// with the bin count.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sample_rate <= 0.0 || !self.sample_rate.is_finite() {
            return Err(AnalysisError::InvalidInput(format!(
                "Sample rate must be positive, got {}",
                self.sample_rate
            )));
        }

        if self.window_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "Window size must be > 0".to_string(),
            ));
        }

        if self.bins.len() != self.window_size / 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "Expected {} bins for window size {}, got {}",
                self.window_size / 2,
                self.window_size,
                self.bins.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bin_count() {
        let result = SpectralFrame::new(vec![0.0; 100], 44100.0, 2048);
        assert!(result.is_err());

        let result = SpectralFrame::new(vec![0.0; 1024], 44100.0, 2048);
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_rejects_bad_metadata() {
        assert!(SpectralFrame::new(vec![0.0; 1024], 0.0, 2048).is_err());
        assert!(SpectralFrame::new(vec![0.0; 1024], -44100.0, 2048).is_err());
        assert!(SpectralFrame::new(vec![], 44100.0, 0).is_err());
    }

    #[test]
    fn test_from_samples_too_short() {
        let samples = vec![0.0f32; 100];
        assert!(SpectralFrame::from_samples(&samples, 44100.0, 2048).is_err());
    }

    #[test]
    fn test_from_samples_sine_peak_bin() {
        // 440 Hz sine at 44100 Hz, window 2048 -> peak near bin 440 * 2048 / 44100 ~= 20
        let sample_rate = 44100.0;
        let window_size = 2048;
        let samples: Vec<f32> = (0..window_size)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate).sin())
            .collect();

        let frame = SpectralFrame::from_samples(&samples, sample_rate, window_size).unwrap();
        assert_eq!(frame.bins.len(), window_size / 2);

        let peak_bin = frame
            .bins
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();

        let expected = (440.0 * window_size as f32 / sample_rate).round() as usize;
        assert!(
            (peak_bin as i32 - expected as i32).abs() <= 1,
            "Peak bin should be near {}, got {}",
            expected,
            peak_bin
        );
    }

    #[test]
    fn test_from_samples_silence_maps_to_zero_magnitude() {
        let samples = vec![0.0f32; 2048];
        let frame = SpectralFrame::from_samples(&samples, 44100.0, 2048).unwrap();

        // -inf dB round-trips to exactly zero linear magnitude, so silence
        // stays silent downstream
        for &db in &frame.bins {
            assert_eq!(db, f32::NEG_INFINITY);
            assert_eq!(10.0f32.powf(db / 20.0), 0.0);
        }
    }
}
