//! Chromagram construction from a spectral frame
//!
//! Each frequency bin inside the musically relevant band is converted from
//! dB to linear magnitude, mapped to a pitch class, and accumulated; the
//! result is normalized by its maximum element.

use super::Chromagram;
use crate::config::ChromaConfig;
use crate::error::AnalysisError;
use crate::spectrum::SpectralFrame;

/// Build a chromagram from a spectral frame
///
/// Bin frequencies follow the reference mapping
/// `frequency = i * sample_rate / (window_size * 2)`. Relative to the
/// textbook one-sided bin spacing this sits exactly one octave low, which is
/// invisible here: an octave shift never changes a pitch class, only where
/// the band limits cut.
///
/// For each bin in [60 Hz, 4000 Hz]:
/// - `magnitude = 10^(dB / 20)`
/// - `midi = 12 * log2(frequency / 440) + 69`
/// - `pitch_class = round(midi) mod 12`, floor-consistent so frequencies far
///   below the reference still land in 0..=11
///
/// The accumulated bins are divided by their maximum; a spectrum with no
/// contributing energy yields the all-zero chromagram.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the frame metadata is
/// inconsistent (see [`SpectralFrame::validate`]).
///
/// # Example
///
/// ```
/// use pulsekey::{build_chromagram, SpectralFrame};
///
/// let frame = SpectralFrame::new(vec![-120.0; 1024], 44100.0, 2048)?;
/// let chroma = build_chromagram(&frame)?;
/// assert!(chroma.values.iter().all(|&v| (0.0..=1.0).contains(&v)));
/// # Ok::<(), pulsekey::AnalysisError>(())
/// ```
pub fn build_chromagram(frame: &SpectralFrame) -> Result<Chromagram, AnalysisError> {
    build_chromagram_with_config(frame, &ChromaConfig::default())
}

/// Build a chromagram with an explicit band and tuning reference
///
/// Same algorithm as [`build_chromagram`] with the frequency band and A4
/// reference taken from `config`.
pub fn build_chromagram_with_config(
    frame: &SpectralFrame,
    config: &ChromaConfig,
) -> Result<Chromagram, AnalysisError> {
    frame.validate()?;

    let mut values = [0.0f32; 12];

    for (i, &db) in frame.bins.iter().enumerate() {
        let frequency = i as f32 * frame.sample_rate / (frame.window_size as f32 * 2.0);

        if frequency < config.min_frequency_hz || frequency > config.max_frequency_hz {
            continue;
        }

        let magnitude = 10.0f32.powf(db / 20.0);

        let midi = 12.0 * (frequency / config.reference_frequency_hz).log2() + 69.0;
        // rem_euclid keeps the class in 0..=11 even when the rounded MIDI
        // number goes negative for very low frequencies
        let pitch_class = (midi.round() as i32).rem_euclid(12) as usize;

        values[pitch_class] += magnitude;
    }

    let max = values.iter().copied().fold(0.0f32, f32::max);
    if max > 0.0 {
        for v in &mut values {
            *v /= max;
        }
    }

    log::debug!(
        "Chromagram from {} bins (band {:.0}-{:.0} Hz), max class energy {:.6}",
        frame.bins.len(),
        config.min_frequency_hz,
        config.max_frequency_hz,
        max
    );

    Ok(Chromagram { values })
}
