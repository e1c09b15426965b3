//! Text measurement seam.
//!
//! The engine never shapes text itself. Column sizing only needs a width for
//! a given string at a given font size, so the real font stack stays outside
//! the engine behind this trait.

/// External measurement capability: text plus font size to (width, height)
/// in scene units.
///
/// Implementations must be deterministic: layout is recomputed from content
/// after every edit and two runs over the same content must agree exactly.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Advance per character as a fraction of font size, and line height ditto.
/// Rough monospace metrics; good enough for headless layout and tests.
const CHAR_ADVANCE: f64 = 0.0125;
const LINE_HEIGHT: f64 = 0.025;

/// Deterministic fallback measurer with a fixed per-character advance.
///
/// Used when no font stack is wired in. Width scales linearly with the
/// character count, which preserves the engine's monotonic-widening rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monospace;

impl TextMeasurer for Monospace {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let chars = text.chars().count() as f64;
        (chars * font_size * CHAR_ADVANCE, font_size * LINE_HEIGHT)
    }
}
