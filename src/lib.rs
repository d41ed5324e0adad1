//! glyph2svg - Reconstruct SVG paths from quadratic-spline glyph outlines
//!
//! This library takes the raw outline of a glyph as exposed by a
//! font-parsing library (points, on/off-curve tags, contour end indices)
//! and produces an SVG path description of the glyph shape: on-curve
//! anchors become line and curve targets, off-curve control points shape
//! quadratic Bezier segments, and the implied anchor halfway between two
//! consecutive control points is synthesized during the walk.
//!
//! Font file parsing, glyph-index resolution, and document-level SVG
//! framing are the caller's concern; the output of [`glyph_path`] is a
//! single `<path>` element ready to embed in a surrounding document.
//!
//! # Example
//!
//! ```rust
//! use glyph2svg::{glyph_path, GlyphLayout, Outline, PathConfig, Point};
//!
//! // A 10x10 square, all points on-curve (tag bit 0 set)
//! let outline = Outline::from_tag_bytes(
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 10.0),
//!         Point::new(0.0, 10.0),
//!     ],
//!     &[1, 1, 1, 1],
//!     vec![3],
//! )
//! .unwrap();
//!
//! let svg = glyph_path(&outline, GlyphLayout::new(0.0, 10.0), &PathConfig::default());
//! assert!(svg.contains(r#"d="M 0,10 L 10,10 L 10,0 L 0,0 Z""#));
//! ```

pub mod error;
pub mod flatten;
pub mod layout;
pub mod outline;
pub mod renderer;
pub mod walker;

pub use error::OutlineError;
pub use flatten::{quadratic_point, QuadFlattener, DEFAULT_FLATTEN_STEP};
pub use layout::GlyphLayout;
pub use outline::{Outline, Point, PointTag};
pub use renderer::path::{NO_CONTOURS_PLACEHOLDER, NO_POINTS_PLACEHOLDER};
pub use renderer::{ConfigError, CoordFormat, GlyphPath, PathConfig, PathSegment};
pub use walker::{walk_contour, walk_outline, ContourTracer, LogTracer, NullTracer};

/// Reconstruct one glyph's outline into an SVG `<path>` element
///
/// The full pipeline: place the outline (y inversion plus per-glyph
/// offset), walk each contour into path operations, and serialize. A
/// degenerate outline (no points or no contours) yields a placeholder
/// comment instead of a path element; this is defined output, not an
/// error. Re-running on the same input always yields byte-identical text.
pub fn glyph_path(outline: &Outline, layout: GlyphLayout, config: &PathConfig) -> String {
    glyph_path_traced(outline, layout, config, &mut NullTracer)
}

/// Like [`glyph_path`], with an injected tracer observing the walk
pub fn glyph_path_traced(
    outline: &Outline,
    layout: GlyphLayout,
    config: &PathConfig,
    tracer: &mut dyn ContourTracer,
) -> String {
    if outline.points().is_empty() {
        return NO_POINTS_PLACEHOLDER.to_string();
    }
    if outline.contour_ends().is_empty() {
        return NO_CONTOURS_PLACEHOLDER.to_string();
    }
    let placed = layout.place(outline);
    walk_outline(&placed, tracer).render_element(config)
}

/// Reconstruct one glyph's outline into a bare `d` attribute string
///
/// For callers that frame their own `<path>` element. A degenerate outline
/// yields an empty string (a comment is not valid inside a `d` attribute).
pub fn glyph_path_d(outline: &Outline, layout: GlyphLayout, config: &PathConfig) -> String {
    if outline.is_degenerate() {
        return String::new();
    }
    let placed = layout.place(outline);
    walk_outline(&placed, &mut NullTracer).to_path_d(config)
}
