//! Tempo estimation modules
//!
//! Turns a time series of energy samples into a BPM value:
//! - Adaptive peak threshold (mean + 1.5 x stddev)
//! - Local-maxima peak picking
//! - Median inter-peak interval with single octave fold

pub mod estimator;
pub mod peaks;

pub use estimator::{estimate_tempo, estimate_tempo_with_config};
pub use peaks::{find_energy_peaks, peak_threshold};

use serde::{Deserialize, Serialize};

/// Tempo estimation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoEstimate {
    /// Estimated tempo in beats per minute, rounded to the nearest integer
    pub bpm: u32,

    /// Number of qualifying energy peaks that produced the estimate
    ///
    /// Fewer than 2 means the fallback tempo was reported.
    pub peak_count: usize,
}
