//! Center-distance tracking for per-frame object detections.
//!
//! Each frame's detections are matched against the previous frame's tracks by
//! the distance between box centers. A detection close enough to an earlier
//! track inherits its identity and display color; everything else starts a new
//! track with a fresh color. Tracks that find no detection are dropped.

pub mod error;
pub mod integration;
pub mod overlay;
pub mod tracker;

pub use error::TrackerError;
pub use integration::{DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline};
pub use tracker::{
    CentroidTracker, Color, ColorCycle, ColorSource, Detection, MatchPolicy, RandomColors, Rect,
    Track, TrackSet, TrackerConfig, match_detections,
};
