//! Key classification by template correlation
//!
//! Correlates a chromagram against all 24 rotated Krumhansl-Schmuckler
//! templates and reports the best-scoring (tonic, mode) pair with its
//! display name and Camelot code.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Schmuckler, M. A. key-finding algorithm, as described
//! in Krumhansl (1990), Cognitive Foundations of Musical Pitch.

use super::{
    camelot::{camelot_code, NOTE_NAMES},
    templates::{MAJOR_PROFILE, MINOR_PROFILE},
    KeyEstimate, Mode,
};
use crate::features::chroma::Chromagram;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Classify the musical key of a chromagram
///
/// For each tonic 0..12 in ascending order, the major template is scored
/// before the minor one; chroma index `(i + tonic) % 12` pairs with profile
/// index `i`. Scores are Pearson correlations of the paired sequences, so
/// the result is invariant to uniform positive scaling of the chromagram.
/// The comparison is strict, so the first maximum encountered wins and a
/// later equal score never replaces it.
///
/// This is a pure, total function: every chromagram, including the all-zero
/// one, yields a definite key. A zero-variance chromagram scores 0 against
/// every template, and the scan order then selects tonic 0, major.
///
/// # Example
///
/// ```
/// use pulsekey::{classify_key, Chromagram};
///
/// // C major triad
/// let mut values = [0.0f32; 12];
/// values[0] = 1.0; // C
/// values[4] = 1.0; // E
/// values[7] = 1.0; // G
/// let estimate = classify_key(&Chromagram { values });
/// assert_eq!(estimate.name, "C major");
/// assert_eq!(estimate.camelot, "8B");
/// ```
pub fn classify_key(chroma: &Chromagram) -> KeyEstimate {
    let mut best_tonic = 0usize;
    let mut best_mode = Mode::Major;
    let mut best_score = f32::NEG_INFINITY;

    for tonic in 0..12 {
        for (mode, profile) in [(Mode::Major, &MAJOR_PROFILE), (Mode::Minor, &MINOR_PROFILE)] {
            let score = rotated_correlation(&chroma.values, profile, tonic);
            if score > best_score {
                best_score = score;
                best_tonic = tonic;
                best_mode = mode;
            }
        }
    }

    let name = format!("{} {}", NOTE_NAMES[best_tonic], best_mode);
    let camelot = camelot_code(&name).to_string();

    log::debug!(
        "Classified key: {} ({}), correlation {:.4}",
        name,
        camelot,
        best_score
    );

    KeyEstimate {
        tonic: best_tonic,
        mode: best_mode,
        score: best_score,
        name,
        camelot,
    }
}

/// Pearson correlation between a chromagram and a profile rotated to `tonic`
///
/// Pairs `chroma[(i + tonic) % 12]` with `profile[i]`. Returns 0.0 when
/// either sequence has zero variance, which makes the all-zero chromagram
/// score 0 against every template.
fn rotated_correlation(chroma: &[f32; 12], profile: &[f32; 12], tonic: usize) -> f32 {
    let n = 12.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xy = 0.0f32;
    let mut sum_x2 = 0.0f32;
    let mut sum_y2 = 0.0f32;

    for (i, &y) in profile.iter().enumerate() {
        let x = chroma[(i + tonic) % 12];
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator <= EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}
