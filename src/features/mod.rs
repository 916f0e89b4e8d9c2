//! Feature extraction modules
//!
//! This module contains both feature estimators and their shared data types:
//! - Tempo estimation (energy peaks -> BPM)
//! - Chromagram extraction (spectrum -> pitch classes)
//! - Key classification (chromagram -> Camelot key)

pub mod chroma;
pub mod key;
pub mod tempo;
