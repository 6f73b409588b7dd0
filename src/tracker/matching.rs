//! Matching utilities for assigning detections to previous tracks.

use crate::tracker::rect::Rect;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Detection input for the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box in TLWH format
    pub bbox: Rect,
    /// Class label reported by the detector
    pub label: String,
    /// Detection confidence score (0.0 to 1.0)
    pub score: f32,
}

impl Detection {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            bbox: Rect::new(x, y, width, height),
            label: label.into(),
            score,
        }
    }

    pub fn from_rect(bbox: Rect, label: impl Into<String>, score: f32) -> Self {
        Self {
            bbox,
            label: label.into(),
            score,
        }
    }
}

/// How detections claim previous tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Each detection takes the earliest previous track within the threshold.
    ///
    /// Tracks are not claimed exclusively: two detections near the same track
    /// both inherit its identity and color.
    #[default]
    FirstMatch,
    /// Minimum total distance one-to-one assignment; a track is matched by at
    /// most one detection.
    Exclusive,
}

/// Assign detections to previous tracks.
///
/// `distances` has shape (tracks, detections). Returns one entry per detection
/// holding the index of the matched track, if any. A pair only matches when its
/// distance is strictly below `threshold`.
pub fn assign(
    distances: &Array2<f32>,
    threshold: f32,
    policy: MatchPolicy,
) -> Vec<Option<usize>> {
    match policy {
        MatchPolicy::FirstMatch => first_match(distances, threshold),
        MatchPolicy::Exclusive => exclusive_match(distances, threshold),
    }
}

fn first_match(distances: &Array2<f32>, threshold: f32) -> Vec<Option<usize>> {
    let (num_rows, num_cols) = distances.dim();
    (0..num_cols)
        .map(|j| (0..num_rows).find(|&i| distances[[i, j]] < threshold))
        .collect()
}

fn exclusive_match(distances: &Array2<f32>, threshold: f32) -> Vec<Option<usize>> {
    let (num_rows, num_cols) = distances.dim();
    let mut assignment = vec![None; num_cols];

    if num_rows == 0 || num_cols == 0 {
        return assignment;
    }

    let size = num_rows.max(num_cols);
    // Gated and padding cells must cost more than any full set of valid pairs.
    let gate_cost = threshold as f64 * (size as f64 + 1.0);
    let mut padded = Array2::<f64>::from_elem((size, size), gate_cost);

    for i in 0..num_rows {
        for j in 0..num_cols {
            let d = distances[[i, j]];
            if d < threshold {
                padded[[i, j]] = d as f64;
            }
        }
    }

    match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => {
            for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
                if row_idx >= num_rows || col_idx >= num_cols {
                    continue;
                }
                if distances[[row_idx, col_idx]] < threshold {
                    assignment[col_idx] = Some(row_idx);
                }
            }
        }
        Err(err) => {
            warn!(?err, "assignment solver failed, treating all detections as new");
        }
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_first_match_picks_earliest_track() {
        // Track 1 is closer, but track 0 is within threshold and comes first.
        let dists = array![[20.0_f32], [1.0]];
        assert_eq!(assign(&dists, 30.0, MatchPolicy::FirstMatch), vec![Some(0)]);
    }

    #[test]
    fn test_first_match_is_not_exclusive() {
        let dists = array![[5.0_f32, 8.0]];
        assert_eq!(
            assign(&dists, 30.0, MatchPolicy::FirstMatch),
            vec![Some(0), Some(0)]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let dists = array![[30.0_f32, 29.9]];
        assert_eq!(
            assign(&dists, 30.0, MatchPolicy::FirstMatch),
            vec![None, Some(0)]
        );
        assert_eq!(
            assign(&dists, 30.0, MatchPolicy::Exclusive),
            vec![None, Some(0)]
        );
    }

    #[test]
    fn test_exclusive_claims_each_track_once() {
        let dists = array![[5.0_f32, 8.0]];
        assert_eq!(
            assign(&dists, 30.0, MatchPolicy::Exclusive),
            vec![Some(0), None]
        );
    }

    #[test]
    fn test_exclusive_minimizes_total_distance() {
        // Detection 0 is nearest track 0, but giving it track 1 lets detection 1
        // keep track 0 at a lower total cost.
        let dists = array![[2.0_f32, 3.0], [4.0, 25.0]];
        assert_eq!(
            assign(&dists, 30.0, MatchPolicy::Exclusive),
            vec![Some(1), Some(0)]
        );
    }

    #[test]
    fn test_exclusive_with_threshold_beyond_distances() {
        // Valid pairs far larger than any fixed gate must still beat gated cells.
        let dists = array![[2.0e6_f32, 1.27e8], [4.8e7, 9.85e7]];
        assert_eq!(
            assign(&dists, 1.0e8, MatchPolicy::Exclusive),
            vec![Some(0), Some(1)]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let no_tracks = Array2::<f32>::zeros((0, 3));
        for policy in [MatchPolicy::FirstMatch, MatchPolicy::Exclusive] {
            assert_eq!(assign(&no_tracks, 30.0, policy), vec![None, None, None]);
        }

        let no_dets = Array2::<f32>::zeros((2, 0));
        for policy in [MatchPolicy::FirstMatch, MatchPolicy::Exclusive] {
            assert!(assign(&no_dets, 30.0, policy).is_empty());
        }
    }
}
