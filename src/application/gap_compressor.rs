// Gap compressor - collapses idle stretches out of a timeline
use crate::domain::view::SECONDS_PER_HOUR;

/// Default longest gap kept as-is in the compressed view (0.2 h)
pub const DEFAULT_MAX_GAP_SECS: f64 = 0.2 * SECONDS_PER_HOUR;

/// Replaces every gap longer than `threshold` with exactly `threshold`.
///
/// The latest timestamp is the anchor: the excess of each long gap is added
/// to every point before it, so older points slide forward toward the present
/// and several gaps compound. Runs in two passes, first accumulating the
/// shift each index receives from the gaps after it, then applying it.
pub fn compress(timestamps: &[f64], threshold: f64) -> Vec<f64> {
    let n = timestamps.len();
    let mut shifts = vec![0.0; n];

    let mut pending = 0.0;
    for i in (1..n).rev() {
        let delta = timestamps[i] - timestamps[i - 1];
        if delta > threshold {
            pending += delta - threshold;
        }
        shifts[i - 1] = pending;
    }

    timestamps
        .iter()
        .zip(&shifts)
        .map(|(t, shift)| t + shift)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: f64 = SECONDS_PER_HOUR;

    fn is_non_decreasing(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_single_gap_shifts_earlier_points() {
        let t0 = 1_700_000_000.0;
        let raw = vec![t0, t0 + 60.0, t0 + 60.0 + 5.0 * HOUR, t0 + 120.0 + 5.0 * HOUR];
        let out = compress(&raw, DEFAULT_MAX_GAP_SECS);

        assert_eq!(out[0], raw[0] + 4.8 * HOUR);
        assert_eq!(out[1], raw[1] + 4.8 * HOUR);
        assert_eq!(out[2], raw[2]);
        assert_eq!(out[3], raw[3]);
        assert_eq!(out[2] - out[1], DEFAULT_MAX_GAP_SECS);
    }

    #[test]
    fn test_multiple_gaps_compound() {
        let raw = vec![0.0, 10_000.0, 10_100.0, 30_000.0];
        let out = compress(&raw, 1000.0);

        // gaps of 10_000 and 19_900 leave 9_000 and 18_900 of excess
        assert_eq!(out, vec![27_900.0, 28_900.0, 29_000.0, 30_000.0]);
    }

    #[test]
    fn test_small_gaps_untouched() {
        let raw = vec![0.0, 300.0, 600.0, 1320.0];
        assert_eq!(compress(&raw, DEFAULT_MAX_GAP_SECS), raw);
    }

    #[test]
    fn test_gap_equal_to_threshold_is_kept() {
        let raw = vec![0.0, DEFAULT_MAX_GAP_SECS];
        assert_eq!(compress(&raw, DEFAULT_MAX_GAP_SECS), raw);
    }

    #[test]
    fn test_length_and_order_preserved() {
        let raw: Vec<f64> = [0, 30, 5000, 5030, 5030, 90_000, 90_060, 200_000]
            .iter()
            .map(|&t| t as f64)
            .collect();
        let out = compress(&raw, DEFAULT_MAX_GAP_SECS);

        assert_eq!(out.len(), raw.len());
        assert!(is_non_decreasing(&out));
        assert_eq!(out.last(), raw.last());
    }

    #[test]
    fn test_idempotent() {
        let raw = vec![0.0, 4000.0, 4060.0, 50_000.0, 50_500.0, 51_500.0];
        let once = compress(&raw, DEFAULT_MAX_GAP_SECS);
        let twice = compress(&once, DEFAULT_MAX_GAP_SECS);

        assert_eq!(once, twice);
        assert!(once.windows(2).all(|w| w[1] - w[0] <= DEFAULT_MAX_GAP_SECS));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(compress(&[], DEFAULT_MAX_GAP_SECS).is_empty());
        assert_eq!(compress(&[42.0], DEFAULT_MAX_GAP_SECS), vec![42.0]);
    }
}
