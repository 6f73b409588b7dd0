//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{CentroidTracker, ColorSource, RandomColors, Track};

use super::{DetectionSource, IntoDetections};

/// Bundles a detection backend with a `CentroidTracker`.
///
/// Each call runs inference on one frame and feeds the result straight into
/// the tracker, so the returned tracks are ready for drawing.
pub struct TrackerPipeline<D: DetectionSource, C: ColorSource = RandomColors> {
    detector: D,
    tracker: CentroidTracker<C>,
}

impl<D: DetectionSource, C: ColorSource> TrackerPipeline<D, C> {
    /// Create a new tracking pipeline from a detector and a configured tracker.
    pub fn new(detector: D, tracker: CentroidTracker<C>) -> Self {
        Self { detector, tracker }
    }

    /// Process a single frame and return the current tracks.
    ///
    /// A detector error is returned unchanged and leaves the tracks from the
    /// previous frame in place.
    ///
    /// # Arguments
    /// * `input` - Raw frame bytes
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<&[Track], D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.tracker.update(detections))
    }

    /// Feed already-computed model output into the tracker.
    pub fn process_output<O: IntoDetections>(&mut self, output: O) -> &[Track] {
        self.tracker.update(output.into_detections())
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker<C> {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker<C> {
        &mut self.tracker
    }
}
