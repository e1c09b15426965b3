use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0.0, 1.0]`.
///
/// The engine never interprets colors; it only stores them on cells and
/// hands them to the renderer. A small named palette covers the common
/// styling calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const RED: Rgba = Rgba::rgb(0.99, 0.26, 0.25);
    pub const GREEN: Rgba = Rgba::rgb(0.33, 0.76, 0.44);
    pub const BLUE: Rgba = Rgba::rgb(0.35, 0.52, 0.89);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 1.0, 0.0);
    pub const GREY: Rgba = Rgba::rgb(0.53, 0.53, 0.53);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}
