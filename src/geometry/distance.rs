// File: distance.rs
// Created: 2026-10-12 16:40:08

use crate::structure::coordinate::{CoordinateFrameSeries, DistanceSeries};
use crate::utils::calculator::Calculate;

/// Euclidean distance between frame i of `series_a` and frame i of `series_b`.
/// Frames are paired by position; the longer series is truncated.
pub fn compute_distances(series_a: &CoordinateFrameSeries, series_b: &CoordinateFrameSeries) -> DistanceSeries {
    series_a
        .iter()
        .zip(series_b.iter())
        .map(|(a, b)| a.calc_distance(b))
        .collect()
}

/// Number of frames that can be paired.
pub fn paired_frame_count(series_a: &CoordinateFrameSeries, series_b: &CoordinateFrameSeries) -> usize {
    series_a.len().min(series_b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::coordinate::Coordinate;
    use rand::Rng;

    fn series(serial: u64, frames: &[(f64, f64, f64)]) -> CoordinateFrameSeries {
        CoordinateFrameSeries::from_frames(serial, frames.iter().map(|&frame| frame.into()).collect())
    }

    #[test]
    fn test_single_frame() {
        let a = series(1, &[(0.0, 0.0, 0.0)]);
        let b = series(2, &[(3.0, 4.0, 0.0)]);
        assert_eq!(compute_distances(&a, &b), vec![5.0]);
    }

    #[test]
    fn test_same_point() {
        let a = series(1, &[(-1.164, -14.104, 31.891)]);
        let b = series(2, &[(-1.164, -14.104, 31.891)]);
        assert_eq!(compute_distances(&a, &b), vec![0.0]);
    }

    #[test]
    fn test_multiple_frames_in_order() {
        let a = series(1, &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (0.0, 0.0, 0.0)]);
        let b = series(2, &[(3.0, 4.0, 0.0), (1.0, 1.0, 7.0), (0.0, 0.0, 2.5)]);
        assert_eq!(compute_distances(&a, &b), vec![5.0, 6.0, 2.5]);
    }

    #[test]
    fn test_ragged_series_truncated() {
        let a = series(1, &[(0.0, 0.0, 0.0); 3]);
        let b = series(2, &[(0.0, 0.0, 1.0); 5]);
        assert_eq!(paired_frame_count(&a, &b), 3);
        assert_eq!(compute_distances(&a, &b), vec![1.0; 3]);
        assert_eq!(compute_distances(&b, &a), vec![1.0; 3]);
    }

    #[test]
    fn test_empty_series() {
        let empty = CoordinateFrameSeries::new(99);
        let b = series(2, &[(3.0, 4.0, 0.0), (1.0, 1.0, 7.0)]);
        assert!(compute_distances(&empty, &b).is_empty());
        assert!(compute_distances(&b, &empty).is_empty());
        assert!(compute_distances(&empty, &empty).is_empty());
    }

    #[test]
    fn test_symmetric_on_random_frames() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len_a = rng.gen_range(0..8);
            let len_b = rng.gen_range(0..8);
            let mut random_series = |serial: u64, len: usize| {
                let frames = (0..len)
                    .map(|_| Coordinate::new(
                        rng.gen_range(-100.0..100.0),
                        rng.gen_range(-100.0..100.0),
                        rng.gen_range(-100.0..100.0),
                    ))
                    .collect();
                CoordinateFrameSeries::from_frames(serial, frames)
            };
            let a = random_series(1, len_a);
            let b = random_series(2, len_b);
            let forward = compute_distances(&a, &b);
            let backward = compute_distances(&b, &a);
            assert_eq!(forward.len(), len_a.min(len_b));
            assert_eq!(forward, backward);
            assert!(forward.iter().all(|d| *d >= 0.0));
        }
    }
}
