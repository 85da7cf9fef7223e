//! Axis-aligned bodies shared by every entity
//!
//! A body is a rectangle in world space (y grows downward) with a velocity:
//! - pos: top-left corner
//! - size: width and height
//! - vel: displacement applied per tick

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rects_overlap;

/// A moving or static axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Midpoint of the bottom edge
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Strict overlap; bodies sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        rects_overlap(self.pos, self.size, other.pos, other.size)
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Advance one semi-implicit Euler step
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Anything that occupies space in the world
pub trait HasBody {
    fn body(&self) -> &Body;
}

impl HasBody for Body {
    fn body(&self) -> &Body {
        self
    }
}
