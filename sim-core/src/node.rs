use crate::types::Bounds;
use glam::Vec2;

/// A moving point of the constellation, drawn as a filled disk.
///
/// `vel` and `radius` are sampled from the configured ranges when the
/// node is created or respawned and stay fixed until the next respawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Node {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Advances the node by one unit time step: `pos += vel`.
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Returns `true` if the node's position, grown by `margin` on every
    /// side, still touches the `[0, w] × [0, h]` rectangle.
    ///
    /// Comparisons are inclusive, so a node exactly `margin` outside an
    /// edge is still inside.
    #[inline]
    pub fn is_within_bounds(&self, bounds: Bounds, margin: f32) -> bool {
        self.pos.x + margin >= 0.0
            && self.pos.x - margin <= bounds.width
            && self.pos.y + margin >= 0.0
            && self.pos.y - margin <= bounds.height
    }

    /// Recycling test: within the canvas grown by `line_distance`.
    #[inline]
    pub fn is_active(&self, bounds: Bounds, line_distance: f32) -> bool {
        self.is_within_bounds(bounds, line_distance)
    }

    /// Culling test: within the canvas grown by the node's own radius.
    #[inline]
    pub fn is_visible(&self, bounds: Bounds) -> bool {
        self.is_within_bounds(bounds, self.radius)
    }
}
