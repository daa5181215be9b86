#![cfg_attr(not(test), no_std)]

//! Typographic glyph substitution and rendering for monochrome e-paper quote cards.
//!
//! The display fonts carry no curly quotes or long dashes, so those code points are
//! swapped for reserved control bytes before layout and drawn as small rectangle
//! glyphs scaled to whatever font the surface has active.

pub mod glyphs;
pub mod layout;
pub mod mock;

pub use glyphs::{
    FontTier, GlyphPlacement, GlyphSurface, PixelRect, RendererConfig, SpecialGlyph,
    SpecialGlyphRenderer, TierThresholds, is_reserved, substitute,
};
pub use layout::{Align, LayoutConfig, TextSurface};
