//! Per-frame detection-to-track matching by center distance.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TrackerError;
use crate::tracker::color::{ColorSource, RandomColors};
use crate::tracker::matching::{self, Detection, MatchPolicy};
use crate::tracker::rect::{Rect, center_distance_batch};
use crate::tracker::track::Track;

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Center distance (source pixels) below which a detection matches a track
    pub distance_threshold: f32,
    pub policy: MatchPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 30.0,
            policy: MatchPolicy::FirstMatch,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(TrackerError::InvalidThreshold(self.distance_threshold));
        }
        Ok(())
    }
}

/// Tracks retained from the previous frame, plus the id counter for new ones.
#[derive(Debug, Clone, Default)]
pub struct TrackSet {
    tracks: Vec<Track>,
    last_id: u64,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drop all tracks. Ids keep counting up so old ones are never reused.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Match one frame of detections against the previous frame's tracks.
///
/// Returns a track set with exactly one track per detection, in detection
/// order. Matched detections keep the matched track's id and color; the rest
/// get a new id and a color from `colors`. Previous tracks that nothing
/// matched are discarded.
pub fn match_detections<C: ColorSource + ?Sized>(
    previous: TrackSet,
    detections: Vec<Detection>,
    config: &TrackerConfig,
    colors: &mut C,
) -> TrackSet {
    let TrackSet {
        tracks: previous_tracks,
        last_id,
    } = previous;

    let track_rects: Vec<Rect> = previous_tracks.iter().map(|t| t.rect()).collect();
    let det_rects: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
    let dists = center_distance_batch(&track_rects, &det_rects);
    let assignment = matching::assign(&dists, config.distance_threshold, config.policy);

    let mut next = TrackSet {
        tracks: Vec::with_capacity(detections.len()),
        last_id,
    };
    let mut matched = 0usize;

    for (j, (det, assigned)) in detections.into_iter().zip(assignment).enumerate() {
        let track = match assigned {
            Some(idx) => {
                let mut track = previous_tracks[idx].clone();
                trace!(
                    track_id = track.track_id,
                    distance = dists[[idx, j]],
                    "detection matched existing track"
                );
                track.update(det);
                matched += 1;
                track
            }
            None => {
                let track_id = next.next_id();
                let color = colors.next_color();
                debug!(track_id, label = %det.label, ?color, "new track");
                Track::new(track_id, det, color)
            }
        };
        next.tracks.push(track);
    }

    trace!(
        previous = previous_tracks.len(),
        current = next.tracks.len(),
        matched,
        "frame matched"
    );

    next
}

/// Owns the track state, configuration and color source for one stream.
pub struct CentroidTracker<C: ColorSource = RandomColors> {
    state: TrackSet,
    config: TrackerConfig,
    colors: C,
    frame_id: u32,
}

impl CentroidTracker<RandomColors> {
    /// Create a tracker with entropy-seeded random colors.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        Self::with_colors(config, RandomColors::new())
    }
}

impl<C: ColorSource> CentroidTracker<C> {
    pub fn with_colors(config: TrackerConfig, colors: C) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            state: TrackSet::new(),
            config,
            colors,
            frame_id: 0,
        })
    }

    /// Process one frame of detections and return the resulting tracks.
    pub fn update(&mut self, detections: Vec<Detection>) -> &[Track] {
        self.frame_id = self.frame_id.saturating_add(1);
        let previous = std::mem::take(&mut self.state);
        self.state = match_detections(previous, detections, &self.config, &mut self.colors);
        debug!(
            frame_id = self.frame_id,
            tracks = self.state.len(),
            "tracker updated"
        );
        self.state.tracks()
    }

    pub fn tracks(&self) -> &[Track] {
        self.state.tracks()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of frames processed since creation or the last reset.
    pub fn frame_count(&self) -> u32 {
        self.frame_id
    }

    pub fn reset(&mut self) {
        self.state.clear();
        self.frame_id = 0;
    }
}
