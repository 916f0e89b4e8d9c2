//! # pulsekey
//!
//! A lightweight feature extraction engine for live audio, providing tempo
//! (BPM) estimation and musical key classification in Camelot notation.
//!
//! ## Features
//!
//! - **Tempo estimation**: adaptive-threshold energy peak picking with
//!   median-interval BPM conversion, folded once into [60, 180]
//! - **Key classification**: chromagram extraction with Krumhansl-Schmuckler
//!   template correlation across all 24 keys, mapped to the Camelot Wheel
//!
//! ## Quick Start
//!
//! ```
//! use pulsekey::{build_chromagram, classify_key, estimate_tempo, SpectralFrame};
//!
//! // Energy readings polled at 60 Hz, one peak every half second
//! let energy: Vec<f32> = (0..300)
//!     .map(|i| if i % 30 == 15 { 1.0 } else { 0.1 })
//!     .collect();
//! let tempo = estimate_tempo(&energy, 60.0)?;
//! assert_eq!(tempo.bpm, 120);
//!
//! // One spectrum snapshot (dB magnitudes) from the same audio window
//! let frame = SpectralFrame::new(vec![-120.0; 1024], 44100.0, 2048)?;
//! let key = classify_key(&build_chromagram(&frame)?);
//! println!("Key: {} ({})", key.name, key.camelot);
//! # Ok::<(), pulsekey::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! Two independent, stateless estimators share only numeric utilities:
//!
//! ```text
//! Energy series -> peak picking -> median interval -> BPM
//! Spectrum      -> chromagram   -> template correlation -> Camelot key
//! ```
//!
//! Audio acquisition is the host's job: the crate consumes an
//! already-materialized energy sample series and a spectral frame snapshot,
//! and never blocks or retries. Both estimators may run on parallel threads
//! with no coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod preprocessing;
pub mod spectrum;

// Re-export main types
pub use config::{ChromaConfig, TempoConfig};
pub use error::AnalysisError;
pub use features::chroma::{build_chromagram, build_chromagram_with_config, Chromagram};
pub use features::key::{classify_key, KeyEstimate, Mode};
pub use features::tempo::{estimate_tempo, estimate_tempo_with_config, TempoEstimate};
pub use spectrum::SpectralFrame;

use serde::{Deserialize, Serialize};

/// Combined result of one analysis window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tempo estimate from the energy sample series
    pub tempo: TempoEstimate,

    /// Key estimate from the spectral frame
    pub key: KeyEstimate,

    /// Chromagram the key estimate was derived from
    pub chromagram: Chromagram,
}

/// Analyze one audio window for tempo and key
///
/// Convenience entry running both estimators over inputs captured from the
/// same underlying audio window. The estimators are independent; callers
/// needing only one feature should call [`estimate_tempo`] or
/// [`classify_key`] directly.
///
/// # Arguments
///
/// * `energy_samples` - Energy readings in [0.0, 1.0], one per tick
/// * `tick_rate_hz` - Energy sampling rate in Hz (e.g., 60.0)
/// * `frame` - One-sided spectrum snapshot in dB from the same window
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the energy series is empty, the
/// tick rate is not positive, or the frame metadata is inconsistent.
pub fn analyze_frame(
    energy_samples: &[f32],
    tick_rate_hz: f32,
    frame: &SpectralFrame,
) -> Result<AnalysisResult, AnalysisError> {
    log::debug!(
        "Analyzing window: {} energy ticks at {:.1} Hz, {} spectrum bins",
        energy_samples.len(),
        tick_rate_hz,
        frame.bins.len()
    );

    let tempo = estimate_tempo(energy_samples, tick_rate_hz)?;
    let chromagram = build_chromagram(frame)?;
    let key = classify_key(&chromagram);

    Ok(AnalysisResult {
        tempo,
        key,
        chromagram,
    })
}
