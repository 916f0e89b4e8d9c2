//! Camelot Wheel lookup
//!
//! Maps key display names to the Camelot codes DJs use for harmonic mixing
//! (minor keys on the A ring, major keys on the B ring).
//!
//! The wheel table spells several tonics with flats (Db, Eb, Ab, Bb) while
//! the note-name table emits sharps only. Display names such as "C# major"
//! therefore have no wheel entry and resolve to the "unknown" sentinel;
//! enharmonic spellings are deliberately not substituted.

/// Pitch-class note names, sharps only (0 = C .. 11 = B)
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Sentinel code for display names without a wheel entry
pub const UNKNOWN_CODE: &str = "unknown";

/// Camelot Wheel: display name to code, 12 major + 12 minor entries
const CAMELOT_WHEEL: [(&str, &str); 24] = [
    ("C major", "8B"),
    ("Db major", "3B"),
    ("D major", "10B"),
    ("Eb major", "5B"),
    ("E major", "12B"),
    ("F major", "7B"),
    ("F# major", "2B"),
    ("G major", "9B"),
    ("Ab major", "4B"),
    ("A major", "11B"),
    ("Bb major", "6B"),
    ("B major", "1B"),
    ("C minor", "5A"),
    ("C# minor", "12A"),
    ("D minor", "7A"),
    ("Eb minor", "2A"),
    ("E minor", "9A"),
    ("F minor", "4A"),
    ("F# minor", "11A"),
    ("G minor", "6A"),
    ("G# minor", "1A"),
    ("A minor", "8A"),
    ("Bb minor", "3A"),
    ("B minor", "10A"),
];

/// Look up the Camelot code for a key display name
///
/// Exact-match lookup against the wheel table. Names absent from the table
/// (e.g., "C# major", where the wheel spells "Db major") return
/// [`UNKNOWN_CODE`]; the lookup never fails.
///
/// # Example
///
/// ```
/// use pulsekey::features::key::{camelot_code, UNKNOWN_CODE};
///
/// assert_eq!(camelot_code("C major"), "8B");
/// assert_eq!(camelot_code("A minor"), "8A");
/// assert_eq!(camelot_code("C# major"), UNKNOWN_CODE);
/// ```
pub fn camelot_code(display_name: &str) -> &'static str {
    CAMELOT_WHEEL
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, code)| *code)
        .unwrap_or(UNKNOWN_CODE)
}
