mod centroid_tracker;
mod color;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{CentroidTracker, TrackSet, TrackerConfig, match_detections};
pub use color::{Color, ColorCycle, ColorSource, RandomColors};
pub use matching::{Detection, MatchPolicy, assign};
pub use rect::{Rect, center_distance_batch};
pub use track::Track;
