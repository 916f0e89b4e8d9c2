//! Chromagram extraction modules
//!
//! Folds a frequency-magnitude spectrum into a 12-bin pitch-class
//! distribution (octave-independent):
//! - Frequency-to-pitch-class mapping (12-TET, A4 reference)
//! - Per-class magnitude accumulation
//! - Max normalization

pub mod builder;

pub use builder::{build_chromagram, build_chromagram_with_config};

use serde::{Deserialize, Serialize};

/// Pitch-class energy distribution
///
/// Indexed 0 = C through 11 = B. After max normalization every value lies in
/// [0, 1] and at least one value equals 1, unless the source spectrum
/// contributed no energy at all, in which case the chromagram is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromagram {
    /// Normalized magnitude per pitch class (0 = C .. 11 = B)
    pub values: [f32; 12],
}

impl Chromagram {
    /// True if no pitch class received any energy
    pub fn is_silent(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
