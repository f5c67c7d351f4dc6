//! Per-tick phases of the node simulation.
//!
//! A tick is:
//! 1. [`advance_phase`] — every active node moves by its velocity.
//! 2. [`recycle_phase`] — every node that left the active region is
//!    respawned in place on the spawn border.
//!
//! Nodes do not interact, so running the phases over the whole
//! collection is the same as stepping and checking node by node.

use crate::{config::Config, node::Node, spawn, types::Bounds};
use rand::Rng;

/// Moves every active node by one unit time step.
///
/// Nodes that are already outside the active region (placed there by the
/// host, or stranded by a shrinking canvas) are left where they are so the
/// following [`recycle_phase`] picks them up whatever their velocity.
pub fn advance_phase(nodes: &mut [Node], bounds: Bounds, line_distance: f32) {
    for n in nodes
        .iter_mut()
        .filter(|n| n.is_active(bounds, line_distance))
    {
        n.step();
    }
}

/// Respawns nodes that are outside the canvas grown by
/// `cfg.line_distance`.
///
/// A recycled node gets a new border position, velocity and radius and is
/// not stepped again during this tick. The collection length never
/// changes.
///
/// ### Parameters
/// - `nodes` - The node collection; inactive slots are overwritten.
/// - `bounds` - Current canvas extent.
/// - `cfg` - Snapshot supplying the margin and the sampling ranges.
/// - `rng` - Source of randomness for respawns.
///
/// ### Returns
/// Indices of the recycled slots in ascending order.
pub fn recycle_phase(
    nodes: &mut [Node],
    bounds: Bounds,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut recycled = Vec::new();
    for (i, n) in nodes.iter_mut().enumerate() {
        if !n.is_active(bounds, cfg.line_distance) {
            spawn::respawn(n, bounds, cfg, rng);
            recycled.push(i);
        }
    }
    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::{SeedableRng, rngs::SmallRng};

    fn bounds() -> Bounds {
        Bounds::new(200.0, 100.0)
    }

    fn cfg() -> Config {
        let mut cfg = Config::default();
        cfg.line_distance = 10.0;
        cfg
    }

    #[test]
    fn advance_phase_moves_every_node() {
        let mut nodes = vec![
            Node::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), 1.0),
            Node::new(Vec2::new(5.0, 5.0), Vec2::new(-1.0, 0.0), 1.0),
        ];
        advance_phase(&mut nodes, bounds(), 10.0);
        assert_eq!(nodes[0].pos, Vec2::new(1.0, 2.0));
        assert_eq!(nodes[1].pos, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn advance_phase_leaves_stranded_nodes_in_place() {
        let stranded = Node::new(Vec2::new(-50.0, 50.0), Vec2::new(5.0, 0.0), 1.0);
        let mut nodes = vec![stranded];
        advance_phase(&mut nodes, bounds(), 10.0);
        assert_eq!(nodes[0], stranded);
    }

    #[test]
    fn recycle_phase_only_touches_inactive_nodes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let inside = Node::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0), 3.0);
        // Just past the right-hand margin.
        let outside = Node::new(Vec2::new(200.0 + 10.0 + 1.0, 50.0), Vec2::ZERO, 3.0);
        let mut nodes = vec![inside, outside];

        let recycled = recycle_phase(&mut nodes, bounds(), &cfg(), &mut rng);

        assert_eq!(recycled, vec![1]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], inside);
        assert!(nodes[1].is_active(bounds(), 10.0));
    }

    #[test]
    fn node_on_the_margin_is_kept() {
        let mut rng = SmallRng::seed_from_u64(1);
        let on_margin = Node::new(Vec2::new(-10.0, 50.0), Vec2::new(-1.0, 0.0), 3.0);
        let mut nodes = vec![on_margin];

        assert!(recycle_phase(&mut nodes, bounds(), &cfg(), &mut rng).is_empty());
        assert_eq!(nodes[0], on_margin);
    }

    #[test]
    fn recycled_node_is_not_stepped() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut nodes = vec![Node::new(Vec2::new(-100.0, -100.0), Vec2::ZERO, 1.0)];

        recycle_phase(&mut nodes, bounds(), &cfg(), &mut rng);

        // Still exactly on the offset border, not one velocity away from it.
        let p = nodes[0].pos;
        let on_border = p.x == -10.0 || p.x == 210.0 || p.y == -10.0 || p.y == 110.0;
        assert!(on_border, "respawn moved off the border: {p:?}");
    }
}
