//! Axis-aligned rectangle geometry
//!
//! Everything in the world is an AABB in screen space (y grows downward).
//! Two queries are needed: a plain overlap test for pickups and the goal,
//! and a penetration resolver that pushes a moving box out of a static one
//! along the axis of least overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from a top-left position and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Midpoint of the bottom edge
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height)
    }
}

/// Which face of the fixed rectangle a moving rectangle was pushed out of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contact {
    /// No penetration
    #[default]
    None,
    /// Struck the underside (moving box was below, pushed down)
    Top,
    /// Landed on the upper surface (moving box was above, pulled up)
    Bottom,
    /// Struck from the right side (moving box pushed right)
    Left,
    /// Struck from the left side (moving box pushed left)
    Right,
}

/// Strict AABB overlap test. Touching edges do not count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Push `moving` out of `fixed` along the axis of smaller overlap
///
/// Ties (`overlap.x == overlap.y`) resolve vertically, so a box that lands
/// exactly on a corner ends up standing on the platform rather than being
/// shoved sideways off it.
///
/// A second call on the resolved rect reports `Contact::None` only when the
/// coordinates and half extents are exactly representable in f32 (e.g. whole
/// or half pixels). With arbitrary fractions the center arithmetic rounds and
/// a sliver of overlap can survive.
pub fn resolve_penetration(moving: &mut Rect, fixed: &Rect) -> Contact {
    let delta = moving.center() - fixed.center();
    let half = moving.half_extents() + fixed.half_extents();

    if delta.x.abs() >= half.x || delta.y.abs() >= half.y {
        return Contact::None;
    }

    let overlap = half - delta.abs();

    if overlap.x >= overlap.y {
        if delta.y > 0.0 {
            moving.y += overlap.y;
            Contact::Top
        } else {
            moving.y -= overlap.y;
            Contact::Bottom
        }
    } else if delta.x > 0.0 {
        moving.x += overlap.x;
        Contact::Left
    } else {
        moving.x -= overlap.x;
        Contact::Right
    }
}
