//! Energy peak picking
//!
//! Finds transient peaks in an energy sample series using an adaptive
//! threshold derived from the series itself. A peak must be a strict local
//! maximum above the threshold, so flat plateaus and threshold-grazing
//! samples do not qualify.

/// Compute the adaptive peak threshold for an energy series
///
/// `threshold = mean + 1.5 * stddev` over the whole series (population
/// standard deviation). Quiet, steady signals get a threshold just above
/// their noise floor; dynamic signals get one that only strong transients
/// clear.
///
/// Returns 0.0 for an empty series; callers validate emptiness themselves.
pub fn peak_threshold(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let n = samples.len() as f32;
    let mean = samples.iter().sum::<f32>() / n;
    let variance = samples.iter().map(|&x| (x - mean) * (x - mean)).sum::<f32>() / n;

    mean + 1.5 * variance.sqrt()
}

/// Find strict local maxima above a threshold
///
/// Index `i` qualifies when `samples[i] > threshold`,
/// `samples[i] > samples[i - 1]`, and `samples[i] > samples[i + 1]`. Only
/// interior indices are considered, so the result is strictly increasing
/// with every index in `1..=len - 2`.
pub fn find_energy_peaks(samples: &[f32], threshold: f32) -> Vec<usize> {
    let mut peaks = Vec::new();

    if samples.len() < 3 {
        return peaks;
    }

    for i in 1..samples.len() - 1 {
        let s = samples[i];
        if s > threshold && s > samples[i - 1] && s > samples[i + 1] {
            peaks.push(i);
        }
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_threshold_empty() {
        assert_eq!(peak_threshold(&[]), 0.0);
    }

    #[test]
    fn test_peak_threshold_constant_series() {
        // Zero variance: threshold equals the mean
        let samples = vec![0.4f32; 50];
        assert!((peak_threshold(&samples) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_peak_threshold_known_values() {
        // mean = 0.5, population stddev = 0.5 -> threshold = 1.25
        let samples = vec![0.0, 1.0, 0.0, 1.0];
        assert!((peak_threshold(&samples) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_find_peaks_basic() {
        let samples = vec![0.0, 0.9, 0.0, 0.0, 0.9, 0.0];
        let peaks = find_energy_peaks(&samples, 0.5);
        assert_eq!(peaks, vec![1, 4]);
    }

    #[test]
    fn test_find_peaks_requires_strict_maximum() {
        // Plateau: neither plateau sample strictly exceeds the other
        let samples = vec![0.0, 0.9, 0.9, 0.0];
        let peaks = find_energy_peaks(&samples, 0.5);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_find_peaks_excludes_endpoints() {
        // Maxima at the series ends have no neighbor on one side
        let samples = vec![0.9, 0.0, 0.0, 0.9];
        let peaks = find_energy_peaks(&samples, 0.5);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_find_peaks_below_threshold() {
        let samples = vec![0.0, 0.4, 0.0, 0.4, 0.0];
        let peaks = find_energy_peaks(&samples, 0.5);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_find_peaks_too_short() {
        assert!(find_energy_peaks(&[0.9, 0.9], 0.5).is_empty());
        assert!(find_energy_peaks(&[], 0.5).is_empty());
    }

    #[test]
    fn test_find_peaks_indices_strictly_increasing_and_interior() {
        let samples: Vec<f32> = (0..200)
            .map(|i| if i % 10 == 5 { 1.0 } else { 0.1 })
            .collect();
        let threshold = peak_threshold(&samples);
        let peaks = find_energy_peaks(&samples, threshold);

        assert!(!peaks.is_empty());
        for w in peaks.windows(2) {
            assert!(w[0] < w[1]);
        }
        for &i in &peaks {
            assert!(i >= 1 && i <= samples.len() - 2);
        }
    }
}
