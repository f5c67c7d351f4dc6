use crate::{config::Config, node::Node, phases, spawn, types::Bounds};
use rand::{SeedableRng, rngs::SmallRng};

/// The moving node field.
///
/// [`Simulation`] owns a fixed-size node collection, the canvas bounds it
/// recycles against, and the RNG used for every spawn. The host calls
/// [`Simulation::tick`] once per animation tick and hands
/// [`Simulation::nodes`] to the renderer between ticks.
///
/// ### Fields
/// - `nodes` - Node slots; the length is fixed between resets.
/// - `bounds` - Canvas extent used for spawning and recycling.
/// - `rng` - Seeded generator, so a run can be replayed from `seed`.
/// - `seed` - Seed the generator was built from.
#[derive(Debug)]
pub struct Simulation {
    nodes: Vec<Node>,
    bounds: Bounds,
    rng: SmallRng,
    seed: u64,
}

impl Simulation {
    /// Creates a field of `cfg.node_count` nodes just outside `bounds`.
    ///
    /// ### Parameters
    /// - `cfg` - Snapshot supplying the node count and sampling ranges.
    /// - `bounds` - Canvas extent; may be zero if the host does not know
    ///   its size yet, in which case [`Simulation::reset`] should be called
    ///   once it does.
    /// - `seed` - RNG seed; `None` draws one from entropy.
    pub fn new(cfg: &Config, bounds: Bounds, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let nodes = spawn::init_nodes(cfg.node_count, bounds, cfg, &mut rng);
        log::debug!(
            "initialized {} nodes in {}x{} (seed {seed})",
            nodes.len(),
            bounds.width,
            bounds.height
        );

        Self {
            nodes,
            bounds,
            rng,
            seed,
        }
    }

    /// Advances the field by one tick.
    ///
    /// Every active node is stepped, then every node outside the active
    /// region is respawned in place.
    ///
    /// ### Returns
    /// Indices of the slots recycled during this tick.
    pub fn tick(&mut self, cfg: &Config) -> Vec<usize> {
        phases::advance_phase(&mut self.nodes, self.bounds, cfg.line_distance);
        let recycled = phases::recycle_phase(&mut self.nodes, self.bounds, cfg, &mut self.rng);
        if !recycled.is_empty() {
            log::trace!("recycled {} of {} nodes", recycled.len(), self.nodes.len());
        }
        recycled
    }

    /// Updates the canvas extent. Existing nodes are kept; later recycling
    /// and respawns use the new bounds.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Rebuilds the collection with `cfg.node_count` fresh nodes around the
    /// current bounds, continuing the same RNG stream.
    pub fn reset(&mut self, cfg: &Config) {
        self.nodes = spawn::init_nodes(cfg.node_count, self.bounds, cfg, &mut self.rng);
        log::debug!(
            "reset to {} nodes in {}x{}",
            self.nodes.len(),
            self.bounds.width,
            self.bounds.height
        );
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
