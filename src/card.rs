//! Quote card: a wrapped, centered quote with an optional attribution line.

use core::ops::Range;

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_9X15, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    prelude::*,
};
use heapless::{String, Vec};
use log::{debug, info, warn};
use sonder_core::{
    Align, LayoutConfig, RendererConfig, SpecialGlyph, SpecialGlyphRenderer,
    glyphs::substitute,
    layout::{self, MAX_WRAP_LINES},
};

use crate::surface::MonoSurface;

pub const QUOTE_MAX_BYTES: usize = 512;
pub const ATTRIBUTION_MAX_BYTES: usize = 64;

/// Font used for the attribution line.
const ATTRIBUTION_FONT: &MonoFont<'static> = &FONT_6X10;

/// Font choices, one per glyph tier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CardFont {
    Small,
    Medium,
    Large,
}

impl CardFont {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Small => &FONT_6X10,
            Self::Medium => &FONT_9X15,
            Self::Large => &FONT_10X20,
        }
    }

    /// This font and every smaller one, largest first.
    fn candidates(self) -> &'static [CardFont] {
        match self {
            Self::Large => &[Self::Large, Self::Medium, Self::Small],
            Self::Medium => &[Self::Medium, Self::Small],
            Self::Small => &[Self::Small],
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardConfig {
    /// Blank border on every side, in pixels.
    pub margin: i32,
    /// Largest font to try; smaller ones are used when the quote does not fit.
    pub max_font: CardFont,
    /// White text on black.
    pub inverted: bool,
    pub layout: LayoutConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            margin: 8,
            max_font: CardFont::Large,
            inverted: false,
            layout: LayoutConfig {
                line_spacing: 2,
                align: Align::Center,
            },
        }
    }
}

/// Outcome of laying out a card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardLayout {
    pub font: CardFont,
    pub lines: usize,
    /// `false` when even the smallest font overflows the card.
    pub fits: bool,
}

fn block_height(lines: usize, font: &MonoFont<'_>, spacing: i32) -> i32 {
    let lines = lines as i32;
    if lines == 0 {
        return 0;
    }
    lines * font.character_size.height as i32 + (lines - 1) * spacing
}

fn attribution_line(source: &str) -> String<ATTRIBUTION_MAX_BYTES> {
    let mut line = String::new();
    let body: String<ATTRIBUTION_MAX_BYTES> = substitute(source);

    let _ = line.push(char::from(SpecialGlyph::EmDash.byte()));
    let _ = line.push(' ');
    for c in body.chars() {
        if line.push(c).is_err() {
            warn!("card: attribution truncated to {} bytes", line.len());
            break;
        }
    }
    line
}

/// Clears `target` and draws `quote` as a card.
///
/// Typographic quotes and dashes are substituted before layout. The largest
/// font from `config.max_font` down whose wrapped block fits is used.
pub fn render_card<D>(
    target: &mut D,
    quote: &str,
    attribution: Option<&str>,
    config: CardConfig,
) -> Result<CardLayout, D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let size = target.size();
    let (width, height) = (size.width as i32, size.height as i32);
    target.clear(BinaryColor::from(config.inverted))?;

    let quote: String<QUOTE_MAX_BYTES> = substitute(quote);
    let attribution = attribution.map(attribution_line);

    let spacing = config.layout.line_spacing;
    let attribution_height = if attribution.is_some() {
        ATTRIBUTION_FONT.character_size.height as i32 + spacing
    } else {
        0
    };
    let max_width = width - 2 * config.margin;
    let max_height = height - 2 * config.margin - attribution_height;

    let renderer_config = RendererConfig {
        ink_on: !config.inverted,
        ..RendererConfig::default()
    };
    let mut surface = MonoSurface::new(target, config.max_font.font());

    let mut chosen = CardLayout {
        font: CardFont::Small,
        lines: 0,
        fits: false,
    };
    for &candidate in config.max_font.candidates() {
        surface.set_font(candidate.font());
        let renderer = SpecialGlyphRenderer::with_config(&mut surface, renderer_config);
        let lines: Vec<Range<usize>, MAX_WRAP_LINES> =
            layout::wrap_lines(&renderer, &quote, max_width);

        let block = block_height(lines.len(), candidate.font(), spacing);
        let widest = lines
            .iter()
            .map(|line| layout::line_width(&renderer, &quote[line.clone()]))
            .max()
            .unwrap_or(0);
        let fits = block <= max_height && widest <= max_width;
        debug!(
            "card: {:?} -> {} lines, {}x{} in {}x{}",
            candidate,
            lines.len(),
            widest,
            block,
            max_width,
            max_height
        );

        chosen = CardLayout {
            font: candidate,
            lines: lines.len(),
            fits,
        };
        if fits {
            break;
        }
    }

    if !chosen.fits {
        warn!("card: quote overflows even at {:?}", chosen.font);
    }

    let font = chosen.font.font();
    surface.set_font(font);
    let block = block_height(chosen.lines, font, spacing);
    let top = config.margin + (max_height - block).max(0) / 2;
    let first_baseline = top + font.baseline as i32;

    {
        let mut renderer = SpecialGlyphRenderer::with_config(&mut surface, renderer_config);
        layout::draw_wrapped(
            &mut renderer,
            config.margin,
            first_baseline,
            &quote,
            max_width,
            config.layout,
        )?;
    }

    if let Some(line) = attribution {
        surface.set_font(ATTRIBUTION_FONT);
        let descent =
            ATTRIBUTION_FONT.character_size.height as i32 - ATTRIBUTION_FONT.baseline as i32;
        let baseline = height - config.margin - descent;

        let mut renderer = SpecialGlyphRenderer::with_config(&mut surface, renderer_config);
        let line_width = layout::line_width(&renderer, &line);
        let x = (width - config.margin - line_width).max(config.margin);
        layout::draw_line(&mut renderer, x, baseline, &line)?;
    }

    info!(
        "card: {} lines at {:?}{}",
        chosen.lines,
        chosen.font,
        if chosen.fits { "" } else { " (overflow)" }
    );

    Ok(chosen)
}
