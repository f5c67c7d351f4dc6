//! Core of the constellation animation: moving nodes joined by lines
//! that fade with distance.
//!
//! Main components:
//! - [`config`] — the per-frame settings snapshot.
//! - [`node`] — a single moving node and its bounds tests.
//! - [`spawn`] — random border positions, velocities and radii.
//! - [`phases`] — the advance and recycle phases of a tick.
//! - [`simulation`] — the fixed-size node field driven by the host.
//! - [`render`] — frame drawing through the [`render::Canvas`] trait.
//! - [`store`] — loading and saving settings.
//! - [`types`] — canvas bounds and colors.
//! - [`error`] — configuration and storage errors.

pub mod config;
pub mod error;
pub mod node;
pub mod phases;
pub mod render;
pub mod simulation;
pub mod spawn;
pub mod store;
pub mod types;
