//! Random sampling of node positions, velocities and radii.
//!
//! All ranges are sampled as `min + (max - min) * t` with `t` uniform in
//! `[0, 1)`, so an empty or inverted range degenerates instead of
//! panicking.

use crate::{config::Config, node::Node, types::Bounds};
use glam::Vec2;
use rand::Rng;

#[inline]
fn uniform_between(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Picks a point uniformly along the canvas perimeter, pushed `margin`
/// units outward so it starts just outside the visible area.
///
/// A scalar `s` in `[0, 2w + 2h)` is mapped onto the edges in order:
/// top (`y = -margin`), bottom (`y = h + margin`), left (`x = -margin`),
/// right (`x = w + margin`). Longer edges therefore receive proportionally
/// more spawns.
pub fn random_border_position(bounds: Bounds, margin: f32, rng: &mut impl Rng) -> Vec2 {
    let Bounds { width: w, height: h } = bounds;
    let s = uniform_between(rng, 0.0, bounds.perimeter());

    if s < w {
        Vec2::new(s, -margin)
    } else if s < 2.0 * w {
        Vec2::new(s - w, h + margin)
    } else if s < 2.0 * w + h {
        Vec2::new(-margin, s - 2.0 * w)
    } else {
        Vec2::new(w + margin, s - 2.0 * w - h)
    }
}

/// Samples a radius uniformly in `[cfg.min_radius, cfg.max_radius]`.
pub fn random_radius(cfg: &Config, rng: &mut impl Rng) -> f32 {
    uniform_between(rng, cfg.min_radius, cfg.max_radius)
}

/// Samples a velocity whose length is uniform in
/// `[cfg.min_speed, cfg.max_speed]`.
///
/// The direction comes from scaling a point drawn uniformly in the
/// `[-1, 1]²` square, which favours the diagonals slightly. A draw of
/// exactly `(0, 0)` has no direction and is redrawn.
pub fn random_vector(cfg: &Config, rng: &mut impl Rng) -> Vec2 {
    let magnitude = uniform_between(rng, cfg.min_speed, cfg.max_speed);
    loop {
        let dir = Vec2::new(
            uniform_between(rng, -1.0, 1.0),
            uniform_between(rng, -1.0, 1.0),
        );
        let len = dir.length();
        if len > 0.0 {
            return dir * (magnitude / len);
        }
    }
}

/// Builds a node with freshly sampled position, velocity and radius.
pub fn random_node(bounds: Bounds, cfg: &Config, rng: &mut impl Rng) -> Node {
    Node::new(
        random_border_position(bounds, cfg.line_distance, rng),
        random_vector(cfg, rng),
        random_radius(cfg, rng),
    )
}

/// Resets a node in place with freshly sampled state.
pub fn respawn(node: &mut Node, bounds: Bounds, cfg: &Config, rng: &mut impl Rng) {
    *node = random_node(bounds, cfg, rng);
}

/// Creates `count` nodes spread along the outside of `bounds`.
pub fn init_nodes(count: usize, bounds: Bounds, cfg: &Config, rng: &mut impl Rng) -> Vec<Node> {
    (0..count).map(|_| random_node(bounds, cfg, rng)).collect()
}
