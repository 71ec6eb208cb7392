pub mod glyph;
pub mod layer;
