//! Special typographic glyphs the panel fonts cannot draw.

mod geometry;
mod metrics;
mod renderer;
mod substitution;

#[cfg(test)]
mod tests;

pub use self::geometry::{GlyphRect, GlyphShape, PixelRect};
pub use self::metrics::{
    DASH_HEIGHT_UNITS, EM_DASH_WIDTH_UNITS, EN_DASH_WIDTH_UNITS, FontTier, QUOTE_RAISE,
    RIGHT_QUOTE_ORIGIN_SHIFT, TEARDROP_GAP_UNITS, TEARDROP_HEIGHT_UNITS, TEARDROP_TAPER,
    TEARDROP_WIDTH_UNITS, TierMetrics, TierThresholds, base_advance,
};
pub use self::renderer::{GlyphPlacement, GlyphSurface, RendererConfig, SpecialGlyphRenderer};
pub use self::substitution::{restore_into, substitute, substitute_in_place, substitute_into};

/// First reserved placeholder byte.
pub const RESERVED_MIN: u8 = 0x01;
/// Last reserved placeholder byte.
pub const RESERVED_MAX: u8 = 0x05;

/// Returns `true` when `byte` is one of the reserved placeholder codes (`0x01..=0x05`).
#[inline]
pub const fn is_reserved(byte: u8) -> bool {
    byte >= RESERVED_MIN && byte <= RESERVED_MAX
}

/// Glyphs drawn from rectangles instead of the active font.
///
/// Each variant owns exactly one reserved byte; the byte form only exists between
/// [`substitute`] and the layout engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum SpecialGlyph {
    /// U+201C `“`
    LeftDoubleQuote = 0x01,
    /// U+201D `”`
    RightDoubleQuote = 0x02,
    /// U+2019 `’`
    Apostrophe = 0x03,
    /// U+2013 `–`
    EnDash = 0x04,
    /// U+2014 `—`
    EmDash = 0x05,
}

impl SpecialGlyph {
    pub const ALL: [Self; 5] = [
        Self::LeftDoubleQuote,
        Self::RightDoubleQuote,
        Self::Apostrophe,
        Self::EnDash,
        Self::EmDash,
    ];

    /// Maps a reserved byte back to its glyph. Any other byte is not special.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::LeftDoubleQuote),
            0x02 => Some(Self::RightDoubleQuote),
            0x03 => Some(Self::Apostrophe),
            0x04 => Some(Self::EnDash),
            0x05 => Some(Self::EmDash),
            _ => None,
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{201C}' => Some(Self::LeftDoubleQuote),
            '\u{201D}' => Some(Self::RightDoubleQuote),
            '\u{2019}' => Some(Self::Apostrophe),
            '\u{2013}' => Some(Self::EnDash),
            '\u{2014}' => Some(Self::EmDash),
            _ => None,
        }
    }

    /// Reserved placeholder byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Unicode code point this glyph stands in for.
    pub const fn as_char(self) -> char {
        match self {
            Self::LeftDoubleQuote => '\u{201C}',
            Self::RightDoubleQuote => '\u{201D}',
            Self::Apostrophe => '\u{2019}',
            Self::EnDash => '\u{2013}',
            Self::EmDash => '\u{2014}',
        }
    }

    /// UTF-8 encoding of [`Self::as_char`]. All five share the `E2 80` prefix.
    pub const fn utf8(self) -> [u8; 3] {
        [0xE2, 0x80, self.utf8_tail()]
    }

    const fn utf8_tail(self) -> u8 {
        match self {
            Self::LeftDoubleQuote => 0x9C,
            Self::RightDoubleQuote => 0x9D,
            Self::Apostrophe => 0x99,
            Self::EnDash => 0x93,
            Self::EmDash => 0x94,
        }
    }

    const fn from_utf8_tail(tail: u8) -> Option<Self> {
        match tail {
            0x9C => Some(Self::LeftDoubleQuote),
            0x9D => Some(Self::RightDoubleQuote),
            0x99 => Some(Self::Apostrophe),
            0x93 => Some(Self::EnDash),
            0x94 => Some(Self::EmDash),
            _ => None,
        }
    }

    /// Quote marks sit near the cap line; dashes sit mid-height.
    #[inline]
    pub const fn is_quote(self) -> bool {
        matches!(
            self,
            Self::LeftDoubleQuote | Self::RightDoubleQuote | Self::Apostrophe
        )
    }

    #[inline]
    pub const fn is_dash(self) -> bool {
        !self.is_quote()
    }
}

impl TryFrom<u8> for SpecialGlyph {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl From<SpecialGlyph> for u8 {
    fn from(glyph: SpecialGlyph) -> Self {
        glyph.byte()
    }
}

impl From<SpecialGlyph> for char {
    fn from(glyph: SpecialGlyph) -> Self {
        glyph.as_char()
    }
}
