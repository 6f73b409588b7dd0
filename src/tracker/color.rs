//! Display colors for tracks.

use image::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// RGB display color assigned to a track for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }
}

/// Source of colors for newly created tracks.
///
/// Implement this to control how new identities are colored.
///
/// # Example
///
/// ```
/// use centroid_track::{Color, ColorSource};
///
/// let mut always_red = || Color::new(255, 0, 0);
/// assert_eq!(always_red.next_color(), Color::new(255, 0, 0));
/// ```
pub trait ColorSource {
    /// Produce the color for the next new track.
    fn next_color(&mut self) -> Color;
}

impl<F: FnMut() -> Color> ColorSource for F {
    fn next_color(&mut self) -> Color {
        self()
    }
}

/// Uniformly random colors, each channel drawn independently from 0..=255.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Random colors seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible random colors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::new(self.rng.r#gen(), self.rng.r#gen(), self.rng.r#gen())
    }
}

/// Deterministic colors cycling through a fixed palette.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    palette: Vec<Color>,
    next: usize,
}

impl ColorCycle {
    pub fn new(palette: Vec<Color>) -> Result<Self, TrackerError> {
        if palette.is_empty() {
            return Err(TrackerError::EmptyPalette);
        }
        Ok(Self { palette, next: 0 })
    }
}

impl ColorSource for ColorCycle {
    fn next_color(&mut self) -> Color {
        let color = self.palette[self.next];
        self.next = (self.next + 1) % self.palette.len();
        color
    }
}
