//! Integration module for connecting object detection backends with the tracker.
//!
//! This module provides traits and utilities for feeding any inference
//! backend's per-frame output into the centroid tracker.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::TrackerPipeline;
