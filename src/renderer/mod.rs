//! Path emission: serialize reconstructed segments to SVG path text

pub mod config;
pub mod path;

pub use config::{ConfigError, CoordFormat, PathConfig};
pub use path::{GlyphPath, PathSegment};
