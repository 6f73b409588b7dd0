//! Single tracked object.

use crate::tracker::color::Color;
use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;

/// An object identity carried across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Identifier, unique within the owning track set
    pub track_id: u64,
    /// Latest bounding box (TLWH format)
    pub bbox: Rect,
    /// Latest class label
    pub label: String,
    /// Latest detection confidence score
    pub score: f32,
    /// Display color, fixed when the track is created
    pub color: Color,
    /// Number of consecutive frames this identity has been matched
    pub hits: u32,
}

impl Track {
    pub(crate) fn new(track_id: u64, detection: Detection, color: Color) -> Self {
        Self {
            track_id,
            bbox: detection.bbox,
            label: detection.label,
            score: detection.score,
            color,
            hits: 1,
        }
    }

    /// Take over a matched detection's box, label and score, keeping id and color.
    pub(crate) fn update(&mut self, detection: Detection) {
        self.bbox = detection.bbox;
        self.label = detection.label;
        self.score = detection.score;
        self.hits = self.hits.saturating_add(1);
    }

    pub fn rect(&self) -> Rect {
        self.bbox
    }

    pub fn center(&self) -> (f32, f32) {
        self.bbox.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_identity() {
        let first = Detection::new(0.0, 0.0, 10.0, 10.0, "cat", 0.9);
        let mut track = Track::new(7, first, Color::new(1, 2, 3));
        track.update(Detection::new(2.0, 1.0, 12.0, 9.0, "dog", 0.4));

        assert_eq!(track.track_id, 7);
        assert_eq!(track.color, Color::new(1, 2, 3));
        assert_eq!(track.bbox, Rect::new(2.0, 1.0, 12.0, 9.0));
        assert_eq!(track.label, "dog");
        assert_eq!(track.hits, 2);
    }

    #[test]
    fn test_hits_saturate() {
        let det = Detection::new(0.0, 0.0, 10.0, 10.0, "cat", 0.9);
        let mut track = Track::new(1, det.clone(), Color::default());
        track.hits = u32::MAX;
        track.update(det);
        assert_eq!(track.hits, u32::MAX);
    }
}
