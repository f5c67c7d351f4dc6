//! Frame rendering for the node field.
//!
//! The renderer is a pure function of (nodes, config, canvas bounds) that
//! issues an ordered sequence of primitive draw calls into a [`Canvas`]:
//! background, then lines, then node disks.

use crate::{
    config::Config,
    node::Node,
    types::{Bounds, Rgba},
};
use glam::Vec2;

/// A drawing surface supplied by the host.
///
/// Implementors only translate primitives; buffering and presentation
/// are the host's business.
pub trait Canvas {
    /// Extent of the surface in canvas units.
    fn bounds(&self) -> Bounds;

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { min: Vec2, size: Vec2, color: Rgba },
    StrokeLine { from: Vec2, to: Vec2, color: Rgba },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
}

/// A [`Canvas`] that records every call, for offscreen use and tests.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    pub bounds: Bounds,
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }
}

impl Canvas for CommandList {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::StrokeLine { from, to, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}

/// How node pairs are walked when drawing lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairMode {
    /// Every ordered pair `(a, b)` including `a == b`. Each connection is
    /// drawn twice and every node gets a zero-length segment to itself.
    Ordered,
    /// Each unordered pair of distinct nodes once. Looks the same as
    /// [`PairMode::Ordered`] with half the strokes.
    #[default]
    Unordered,
}

/// Opacity of a line between two nodes `distance` apart.
///
/// Falls off linearly from `1.0` at contact to `0.0` at `line_distance`.
/// Returns `None` beyond the threshold, or for a threshold of zero.
#[inline]
pub fn line_alpha(distance: f32, line_distance: f32) -> Option<f32> {
    if line_distance <= 0.0 || distance > line_distance {
        return None;
    }
    Some(1.0 - distance / line_distance)
}

/// Paints frames of the node field.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    pub pairs: PairMode,
}

impl Renderer {
    pub fn new(pairs: PairMode) -> Self {
        Self { pairs }
    }

    /// Draws one frame: background, connecting lines, then visible nodes.
    ///
    /// ### Parameters
    /// - `nodes` - Current node states; only read.
    /// - `cfg` - Snapshot supplying colors and the line threshold.
    /// - `canvas` - Target surface; its bounds drive background fill and
    ///   visibility culling.
    pub fn draw(&self, nodes: &[Node], cfg: &Config, canvas: &mut impl Canvas) {
        let bounds = canvas.bounds();
        canvas.fill_rect(Vec2::ZERO, bounds.size(), cfg.background_color);
        self.draw_lines(nodes, cfg, canvas);
        Self::draw_nodes(nodes, cfg, bounds, canvas);
    }

    fn draw_lines(&self, nodes: &[Node], cfg: &Config, canvas: &mut impl Canvas) {
        match self.pairs {
            PairMode::Ordered => {
                for a in nodes {
                    for b in nodes {
                        Self::draw_line(a, b, cfg, canvas);
                    }
                }
            }
            PairMode::Unordered => {
                for (i, a) in nodes.iter().enumerate() {
                    for b in &nodes[i + 1..] {
                        Self::draw_line(a, b, cfg, canvas);
                    }
                }
            }
        }
    }

    #[inline]
    fn draw_line(a: &Node, b: &Node, cfg: &Config, canvas: &mut impl Canvas) {
        let d = a.pos.distance(b.pos);
        if let Some(alpha) = line_alpha(d, cfg.line_distance) {
            canvas.stroke_line(a.pos, b.pos, cfg.line_color.with_alpha(alpha));
        }
    }

    fn draw_nodes(nodes: &[Node], cfg: &Config, bounds: Bounds, canvas: &mut impl Canvas) {
        for n in nodes.iter().filter(|n| n.radius > 0.0 && n.is_visible(bounds)) {
            canvas.fill_circle(n.pos, n.radius, cfg.node_color);
        }
    }
}
