//! Drawing tracks onto a frame.

use image::{Rgba, RgbaImage};

use crate::tracker::Track;

/// Clamp a box to pixel coordinates inside an image of size `dims`.
///
/// Returns `[x0, y0, x1, y1]` (inclusive), or `None` when the box lies
/// entirely outside the image or has no area.
pub fn clamp_box(track: &Track, dims: (u32, u32)) -> Option<[u32; 4]> {
    let (w, h) = dims;
    if w == 0 || h == 0 {
        return None;
    }
    let [x0, y0, x1, y1] = track.bbox.to_tlbr();
    if !(x1 > x0 && y1 > y0) || x1 < 0.0 || y1 < 0.0 || x0 >= w as f32 || y0 >= h as f32 {
        return None;
    }
    let clamp = |v: f32, max: u32| -> u32 { v.max(0.0).min((max - 1) as f32) as u32 };
    Some([clamp(x0, w), clamp(y0, h), clamp(x1, w), clamp(y1, h)])
}

/// Draw a rectangle border with given thickness.
pub fn draw_rect(img: &mut RgbaImage, bbox_px: [u32; 4], color: Rgba<u8>, thickness: u32) {
    let (w, h) = img.dimensions();
    let [x0, y0, x1, y1] = bbox_px;
    for t in 0..thickness {
        let xx0 = x0.saturating_add(t);
        let yy0 = y0.saturating_add(t);
        let xx1 = x1.saturating_sub(t);
        let yy1 = y1.saturating_sub(t);
        if xx0 >= w || yy0 >= h || xx1 >= w || yy1 >= h || xx0 > xx1 || yy0 > yy1 {
            break;
        }
        for x in xx0..=xx1 {
            img.put_pixel(x, yy0, color);
            img.put_pixel(x, yy1, color);
        }
        for y in yy0..=yy1 {
            img.put_pixel(xx0, y, color);
            img.put_pixel(xx1, y, color);
        }
    }
}

/// Draw every track's box outline in its own color.
pub fn draw_tracks(img: &mut RgbaImage, tracks: &[Track], thickness: u32) {
    let dims = img.dimensions();
    for track in tracks {
        if let Some(px) = clamp_box(track, dims) {
            draw_rect(img, px, track.color.to_rgba(255), thickness);
        }
    }
}

/// Caption for a track: its label and the score as a whole percentage.
pub fn label_text(track: &Track) -> String {
    format!("{} {}%", track.label, (track.score * 100.0).round() as u32)
}
