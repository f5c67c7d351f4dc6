use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Extent of the drawing surface in canvas units.
///
/// The origin is the top-left corner and y grows downward, matching the
/// host surface. A zero-sized bounds value is valid and simply produces
/// degenerate spawn positions and empty frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length of the rectangle's perimeter, `2w + 2h`.
    #[inline]
    pub fn perimeter(&self) -> f32 {
        2.0 * self.width + 2.0 * self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// Straight (non-premultiplied) RGBA color with `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with its alpha replaced by `alpha`.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Converts to 8-bit channels, clamping each to `[0, 1]` and rounding.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_of_zero_bounds_is_zero() {
        assert_eq!(Bounds::default().perimeter(), 0.0);
        assert_eq!(Bounds::new(3.0, 2.0).perimeter(), 10.0);
    }

    #[test]
    fn with_alpha_keeps_rgb_channels() {
        let c = Rgba::new(0.2, 0.4, 0.6, 1.0).with_alpha(0.25);
        assert_eq!(c, Rgba::new(0.2, 0.4, 0.6, 0.25));
    }

    #[test]
    fn to_rgba8_clamps_and_rounds() {
        assert_eq!(Rgba::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Rgba::new(-1.0, 2.0, 0.5, 0.0).to_rgba8(), [0, 255, 128, 0]);
    }
}
