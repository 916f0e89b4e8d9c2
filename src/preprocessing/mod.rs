//! Preprocessing helpers for hosts
//!
//! Utilities that turn a raw time-domain signal into the inputs the
//! estimators consume:
//! - RMS energy per fixed-duration tick (energy sample series)

pub mod energy;
