//! SVG output primitives used by the association graph drawer.

pub mod document;
pub mod path;

pub use document::SvgDocument;
pub use path::{SvgPath, interpolate_catmull_rom};
