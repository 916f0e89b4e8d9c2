//! Krumhansl-Schmuckler key templates
//!
//! Tonal salience profiles for the major and minor modes, indexed by scale
//! degree in semitones from the tonic. All 24 key templates are rotations of
//! these two constants.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). Cognitive Foundations of Musical Pitch.
//! Oxford University Press.

/// Major-mode pitch-class salience profile (tonic at index 0)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor-mode pitch-class salience profile (tonic at index 0)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_peak_at_tonic() {
        let max_major = MAJOR_PROFILE.iter().copied().fold(f32::MIN, f32::max);
        let max_minor = MINOR_PROFILE.iter().copied().fold(f32::MIN, f32::max);
        assert_eq!(MAJOR_PROFILE[0], max_major);
        assert_eq!(MINOR_PROFILE[0], max_minor);
    }

    #[test]
    fn test_profiles_emphasize_the_third() {
        // Major third (4 semitones) outweighs minor third in the major
        // profile, and vice versa
        assert!(MAJOR_PROFILE[4] > MAJOR_PROFILE[3]);
        assert!(MINOR_PROFILE[3] > MINOR_PROFILE[4]);
    }
}
