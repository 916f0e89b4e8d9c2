//! Key classification modules
//!
//! Classifies a chromagram into one of 24 musical keys:
//! - Krumhansl-Schmuckler templates (12 tonics x major/minor)
//! - Deterministic rotation scan with first-max-wins tie breaking
//! - Camelot Wheel display lookup

pub mod camelot;
pub mod classifier;
pub mod templates;

pub use camelot::{camelot_code, NOTE_NAMES, UNKNOWN_CODE};
pub use classifier::classify_key;
pub use templates::{MAJOR_PROFILE, MINOR_PROFILE};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Major key
    Major,
    /// Minor key
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Key classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Tonic pitch class (0 = C .. 11 = B)
    pub tonic: usize,

    /// Major or minor
    pub mode: Mode,

    /// Correlation score of the winning template
    pub score: f32,

    /// Display name, e.g. "C major" or "A minor"
    pub name: String,

    /// Camelot Wheel code, e.g. "8B", or the "unknown" sentinel when the
    /// display name has no entry in the wheel table
    pub camelot: String,
}
