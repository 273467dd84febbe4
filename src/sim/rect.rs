//! Axis-aligned rectangles in screen space
//!
//! Screen space has its origin at the top-left with y pointing down. A rect is
//! stored as its top-left corner plus size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Move so the rect is centered on `center`, keeping its size
    pub fn recenter(&mut self, center: Vec2) {
        self.min = center - self.size * 0.5;
    }

    /// True if the rects share a region of positive area.
    ///
    /// Rects that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// True if any part of the rect reaches or crosses the edge of `bounds`
    /// (a `bounds`-sized area with its origin at zero).
    pub fn touches_bounds(&self, bounds: Vec2) -> bool {
        let max = self.max();
        self.min.x <= 0.0 || self.min.y <= 0.0 || max.x >= bounds.x || max.y >= bounds.y
    }
}
