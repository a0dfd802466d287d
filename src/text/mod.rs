//! Text measurement and painting.

/// Font-file backed shaping.
pub mod font;
/// Shaper traits and the block-glyph face.
pub mod shaper;
