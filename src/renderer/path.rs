//! Serialization of path operations into SVG path text
//!
//! Converts the walker's segment sequence into an SVG path `d` attribute
//! string, optionally flattening quadratic curves into line segments for
//! renderers that cannot consume curve primitives.

use std::fmt::Write;

use crate::flatten::QuadFlattener;
use crate::outline::Point;

use super::config::{CoordFormat, PathConfig};

/// Placeholder emitted for an outline with no points
pub const NO_POINTS_PLACEHOLDER: &str = "<!-- glyph outline has 0 points -->";

/// Placeholder emitted for an outline with no contours
pub const NO_CONTOURS_PLACEHOLDER: &str = "<!-- glyph outline has 0 contours -->";

/// A single path operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to a contour's starting anchor
    MoveTo(Point),
    /// Straight line to an anchor
    LineTo(Point),
    /// Quadratic Bezier to an anchor
    QuadTo { control: Point, end: Point },
    /// Close the contour back to its starting anchor
    Close,
}

/// A reconstructed glyph path ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPath {
    pub segments: Vec<PathSegment>,
}

impl GlyphPath {
    /// Serialize to an SVG path `d` attribute string
    ///
    /// Segment order is preserved exactly; there is no reordering,
    /// deduplication, or simplification. With `curve_statements` disabled,
    /// each curve becomes `floor(1 / flatten_step)` line segments followed
    /// by a line to the curve's end anchor (the flattener's t = 0 sample
    /// coincides with the current point and is skipped).
    pub fn to_path_d(&self, config: &PathConfig) -> String {
        let mut d = String::new();
        // Current point is only needed as the start of flattened curves
        let mut current = Point::new(0.0, 0.0);
        let mut subpath_start = current;

        for segment in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match *segment {
                PathSegment::MoveTo(p) => {
                    write_op(&mut d, 'M', p, config.coordinates);
                    current = p;
                    subpath_start = p;
                }
                PathSegment::LineTo(p) => {
                    write_op(&mut d, 'L', p, config.coordinates);
                    current = p;
                }
                PathSegment::QuadTo { control, end } => {
                    if config.curve_statements {
                        let _ = write!(
                            d,
                            "Q {},{} {},{}",
                            fmt_coord(control.x, config.coordinates),
                            fmt_coord(control.y, config.coordinates),
                            fmt_coord(end.x, config.coordinates),
                            fmt_coord(end.y, config.coordinates),
                        );
                    } else {
                        let samples =
                            QuadFlattener::new(current, control, end, config.flatten_step);
                        let mut first = true;
                        for sample in samples.skip(1) {
                            if !first {
                                d.push(' ');
                            }
                            write_op(&mut d, 'L', sample, config.coordinates);
                            first = false;
                        }
                        if !first {
                            d.push(' ');
                        }
                        write_op(&mut d, 'L', end, config.coordinates);
                    }
                    current = end;
                }
                PathSegment::Close => {
                    d.push('Z');
                    current = subpath_start;
                }
            }
        }
        d
    }

    /// Serialize to a complete SVG `<path>` element
    ///
    /// The element carries `fill-rule="nonzero"` so multiple contours
    /// combine the way outline fonts expect, plus the config's presentation
    /// attributes.
    pub fn render_element(&self, config: &PathConfig) -> String {
        let class_attr = config
            .css_class
            .as_ref()
            .map(|c| format!(r#" class="{}""#, c))
            .unwrap_or_default();
        format!(
            r#"<path{} fill-rule="nonzero" fill="{}" stroke="{}" fill-opacity="{}" stroke-width="{}" d="{}"/>"#,
            class_attr,
            config.fill,
            config.stroke,
            config.fill_opacity,
            config.stroke_width,
            self.to_path_d(config),
        )
    }
}

fn write_op(d: &mut String, op: char, p: Point, format: CoordFormat) {
    let _ = write!(
        d,
        "{} {},{}",
        op,
        fmt_coord(p.x, format),
        fmt_coord(p.y, format)
    );
}

fn fmt_coord(value: f64, format: CoordFormat) -> String {
    match format {
        CoordFormat::Fractional => {
            // A flipped 0.0 would otherwise print as "-0"
            let value = if value == 0.0 { 0.0 } else { value };
            format!("{}", value)
        }
        CoordFormat::Truncated => format!("{}", value.trunc() as i64),
    }
}
