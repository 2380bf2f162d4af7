//! Plain 2D value types.

use serde::{Deserialize, Serialize};

/// Size of the drawable environment, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Either dimension is zero, as a minimised window reports.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Per-axis scale factors that map `self` onto `other`.
    ///
    /// A zero dimension on either side yields a factor of 1 on that axis.
    pub fn scale_to(self, other: Extent) -> (f32, f32) {
        let ratio = |from: u32, to: u32| {
            if from == 0 || to == 0 {
                1.0
            } else {
                to as f32 / from as f32
            }
        };
        (ratio(self.width, other.width), ratio(self.height, other.height))
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// A position in environment coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
