//! Glyph placement: y-axis inversion and per-glyph translation
//!
//! Font design coordinates grow upward while SVG coordinates grow downward,
//! so every y is negated before the per-glyph offset is applied. This runs
//! once, before any path logic sees the points; the walker never transforms
//! coordinates again.

use crate::outline::{Outline, Point};

/// Per-glyph placement within a multi-glyph composition
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphLayout {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl GlyphLayout {
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self { offset_x, offset_y }
    }

    /// Produce a placed copy of the outline: y negated, then both
    /// coordinates shifted by the offset. Pure, no failure modes; the
    /// offset is unconstrained and may push points anywhere.
    pub fn place(&self, outline: &Outline) -> Outline {
        outline.map_points(|p| Point::new(p.x + self.offset_x, -p.y + self.offset_y))
    }
}
