//! Window host for the constellation animation built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation, renderer
//! and settings store and implements [`eframe::App`] to drive ticks and
//! paint frames, and [`EguiCanvas`], which maps the renderer's draw
//! calls onto an [`egui::Painter`].

use constellation_core::{
    config::Config,
    render::{Canvas, Renderer},
    simulation::Simulation,
    store::SettingsStore,
    types::{Bounds, Rgba},
};
use eframe::App;
use glam::Vec2;

/// 30 ticks per second.
const STEP_INTERVAL: f64 = 1.0 / 30.0;

/// Connector stroke width in points.
const LINE_WIDTH: f32 = 1.0;

fn color32(c: Rgba) -> egui::Color32 {
    let [r, g, b, a] = c.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// [`Canvas`] over an egui painter. Canvas coordinates are offset by the
/// top-left corner of the painted rectangle.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.rect.width(), self.rect.height())
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        let rect = egui::Rect::from_min_size(self.to_screen(min), egui::vec2(size.x, size.y));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, color32(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(LINE_WIDTH, color32(color)),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color32(color));
    }
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `sim` - The node field being animated.
/// - `renderer` - Frame painter; unordered pair iteration.
/// - `cfg` - Settings snapshot used for ticks and frames.
/// - `store` - Where `cfg` is loaded from.
///
/// - `running` - Whether ticks are currently being issued.
/// - `awaiting_bounds` - The field was built before the window size was
///   known and must be rebuilt on the first sized frame.
/// - `last_step_time` - egui time stamp of the last tick.
pub struct Viewer {
    sim: Simulation,
    renderer: Renderer,
    cfg: Config,
    store: Box<dyn SettingsStore>,

    running: bool,
    awaiting_bounds: bool,
    last_step_time: f64,
}

impl Viewer {
    /// Loads settings from `store` and builds a field with unknown bounds.
    pub fn new(store: Box<dyn SettingsStore>, seed: u64) -> Self {
        let cfg = Self::load_config(store.as_ref());
        let sim = Simulation::new(&cfg, Bounds::default(), Some(seed));

        Self {
            sim,
            renderer: Renderer::default(),
            cfg,
            store,
            running: true,
            awaiting_bounds: true,
            last_step_time: 0.0,
        }
    }

    /// Reads a snapshot, falling back to defaults when the store fails.
    fn load_config(store: &dyn SettingsStore) -> Config {
        match store.load() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("could not load settings, using defaults: {e}");
                Config::default()
            }
        }
    }

    /// Re-reads the settings and rebuilds the field with them.
    fn reload(&mut self) {
        self.cfg = Self::load_config(self.store.as_ref());
        self.sim.reset(&self.cfg);
        log::info!("reloaded settings, {} nodes", self.sim.nodes().len());
    }

    /// Tracks the size of the painted area.
    ///
    /// The first non-empty size rebuilds the field so nodes spawn around
    /// the real canvas; later size changes only move the recycle bounds.
    fn apply_bounds(&mut self, bounds: Bounds) {
        if bounds == self.sim.bounds() {
            return;
        }
        self.sim.resize(bounds);
        log::info!("canvas resized to {}x{}", bounds.width, bounds.height);

        if self.awaiting_bounds && bounds.width > 0.0 && bounds.height > 0.0 {
            self.sim.reset(&self.cfg);
            self.awaiting_bounds = false;
        }
    }

    fn step_once(&mut self) {
        self.sim.tick(&self.cfg);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (toggle, reload) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
            )
        });
        if toggle {
            self.running = !self.running;
        }
        if reload {
            self.reload();
        }
    }
}

impl App for Viewer {
    /// Ticks the field at a fixed interval and paints a frame on every
    /// repaint.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                self.apply_bounds(Bounds::new(rect.width(), rect.height()));

                if self.running {
                    let now = ctx.input(|i| i.time);
                    if now - self.last_step_time >= STEP_INTERVAL {
                        self.step_once();
                        self.last_step_time = now;
                    }
                    ctx.request_repaint();
                }

                let painter = ui.painter_at(rect);
                let mut canvas = EguiCanvas::new(&painter, rect);
                self.renderer.draw(self.sim.nodes(), &self.cfg, &mut canvas);
            });
    }
}
