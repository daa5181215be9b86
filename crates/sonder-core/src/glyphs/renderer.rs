use log::{debug, trace};

use super::SpecialGlyph;
use super::geometry::PixelRect;
use super::metrics::{FontTier, QUOTE_RAISE, RIGHT_QUOTE_ORIGIN_SHIFT, TierThresholds};

/// Drawing surface the special glyphs are rendered onto.
///
/// Implemented by the board or host glue around the display's framebuffer and
/// font engine.
pub trait GlyphSurface {
    type Error;

    /// Fills `rect` with `on` (ink) or `!on` (paper). Clipping is up to the surface.
    fn fill_rect(&mut self, rect: PixelRect, on: bool) -> Result<(), Self::Error>;

    /// Bounding box the active font would cover drawing `text` at `(x, y)`.
    fn text_bounds(&self, text: &str, x: i32, y: i32) -> PixelRect;
}

/// Renderer configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RendererConfig {
    pub thresholds: TierThresholds,
    /// Glyph measured to classify the active font.
    pub reference_glyph: &'static str,
    /// Pixel state used for glyph ink.
    pub ink_on: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            reference_glyph: "M",
            ink_on: true,
        }
    }
}

/// Where and how large a glyph lands for one draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub glyph: SpecialGlyph,
    pub tier: FontTier,
    pub scale: f32,
    /// Top-left corner of the glyph shape.
    pub x: i32,
    pub y: i32,
    /// Cursor movement after the glyph.
    pub advance: i32,
}

impl GlyphPlacement {
    /// Places `glyph` for a cursor at `(x, y)` on the baseline of a font whose
    /// reference glyph is `reference_height` pixels tall.
    pub fn compute(
        glyph: SpecialGlyph,
        x: i32,
        y: i32,
        reference_height: u32,
        thresholds: TierThresholds,
    ) -> Self {
        let tier = FontTier::classify(reference_height, thresholds);
        let metrics = tier.metrics();
        let offset = tier.vertical_offset(reference_height);

        let mut advance = tier.scaled_advance(glyph, metrics.scale);
        let mut origin_x = x;
        match glyph {
            SpecialGlyph::LeftDoubleQuote => advance += metrics.left_quote_advance_delta,
            SpecialGlyph::RightDoubleQuote => {
                origin_x = origin_x.saturating_add(RIGHT_QUOTE_ORIGIN_SHIFT)
            }
            _ => {}
        }

        let dy = if glyph.is_quote() {
            offset - QUOTE_RAISE
        } else {
            offset / 2
        };

        Self {
            glyph,
            tier,
            scale: metrics.scale,
            x: origin_x,
            y: y.saturating_add(dy),
            advance,
        }
    }
}

/// Draws special glyphs onto a borrowed surface.
///
/// Holds no state besides configuration; every call measures the active font
/// again, so switching fonts between calls is picked up immediately.
#[derive(Debug)]
pub struct SpecialGlyphRenderer<'a, S> {
    surface: &'a mut S,
    config: RendererConfig,
}

impl<'a, S> SpecialGlyphRenderer<'a, S>
where
    S: GlyphSurface,
{
    pub fn new(surface: &'a mut S) -> Self {
        Self::with_config(surface, RendererConfig::default())
    }

    pub fn with_config(surface: &'a mut S, config: RendererConfig) -> Self {
        Self { surface, config }
    }

    pub fn config(&self) -> RendererConfig {
        self.config
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Height of the reference glyph in the surface's active font.
    pub fn reference_height(&self) -> u32 {
        self.surface
            .text_bounds(self.config.reference_glyph, 0, 0)
            .height
    }

    /// Tier of the surface's active font.
    pub fn tier(&self) -> FontTier {
        let height = self.reference_height();
        let tier = FontTier::classify(height, self.config.thresholds);
        trace!("glyph tier: reference height {} -> {:?}", height, tier);
        tier
    }

    /// Advance width of `byte` at `scale`.
    ///
    /// Only the medium tier's advance factor depends on the active font. Returns
    /// 0 for bytes outside the reserved range.
    pub fn measure_advance(&self, byte: u8, scale: f32) -> i32 {
        let Some(glyph) = SpecialGlyph::from_byte(byte) else {
            return 0;
        };

        self.tier().scaled_advance(glyph, scale)
    }

    /// Placement [`Self::draw`] would use for `byte` at `(x, y)`.
    pub fn placement(&self, x: i32, y: i32, byte: u8) -> Option<GlyphPlacement> {
        let glyph = SpecialGlyph::from_byte(byte)?;
        Some(GlyphPlacement::compute(
            glyph,
            x,
            y,
            self.reference_height(),
            self.config.thresholds,
        ))
    }

    /// Width [`Self::draw`] returns for `byte`, without drawing.
    pub fn advance(&self, byte: u8) -> i32 {
        self.placement(0, 0, byte).map_or(0, |p| p.advance)
    }

    /// Draws `byte` with the cursor at `(x, y)` on the text baseline.
    ///
    /// Returns how far the cursor should move. Bytes outside the reserved range
    /// draw nothing and return 0.
    pub fn draw(&mut self, x: i32, y: i32, byte: u8) -> Result<i32, S::Error> {
        let Some(placement) = self.placement(x, y, byte) else {
            return Ok(0);
        };

        debug!(
            "glyph draw: {:?} at ({}, {}) tier {:?} advance {}",
            placement.glyph, placement.x, placement.y, placement.tier, placement.advance
        );

        for rect in placement.glyph.shape(placement.scale).iter() {
            let pixels = rect.to_pixels(placement.x, placement.y);
            if pixels.is_empty() {
                continue;
            }
            self.surface.fill_rect(pixels, self.config.ink_on)?;
        }

        Ok(placement.advance)
    }
}
