//! Configuration parameters for feature extraction

/// Tempo estimation parameters
#[derive(Debug, Clone)]
pub struct TempoConfig {
    /// Minimum BPM of the folded range (default: 60.0)
    /// A raw estimate below this is doubled once.
    pub min_bpm: f32,

    /// Maximum BPM of the folded range (default: 180.0)
    /// A raw estimate above this is halved once.
    pub max_bpm: f32,

    /// BPM reported when fewer than 2 qualifying peaks exist (default: 120)
    /// Sparse or beat-free signals cannot yield a meaningful interval, so the
    /// estimator falls back to this value instead of failing.
    pub fallback_bpm: u32,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            min_bpm: 60.0,
            max_bpm: 180.0,
            fallback_bpm: 120,
        }
    }
}

/// Chromagram extraction parameters
#[derive(Debug, Clone)]
pub struct ChromaConfig {
    /// Lowest frequency considered musically relevant in Hz (default: 60.0)
    /// Bins below this are dominated by sub-bass rumble.
    pub min_frequency_hz: f32,

    /// Highest frequency considered in Hz (default: 4000.0)
    /// Above this, harmonics and noise degrade pitch-class estimation.
    pub max_frequency_hz: f32,

    /// Tuning reference for A4 in Hz (default: 440.0)
    pub reference_frequency_hz: f32,
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            min_frequency_hz: 60.0,
            max_frequency_hz: 4000.0,
            reference_frequency_hz: 440.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempo_config_defaults() {
        let config = TempoConfig::default();
        assert_eq!(config.min_bpm, 60.0);
        assert_eq!(config.max_bpm, 180.0);
        assert_eq!(config.fallback_bpm, 120);
    }

    #[test]
    fn test_chroma_config_defaults() {
        let config = ChromaConfig::default();
        assert_eq!(config.min_frequency_hz, 60.0);
        assert_eq!(config.max_frequency_hz, 4000.0);
        assert_eq!(config.reference_frequency_hz, 440.0);
    }
}
