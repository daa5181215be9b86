//! Line drawing and word wrapping over substituted text.
//!
//! Text handed to these functions has already been through
//! [`substitute`](crate::glyphs::substitute): reserved bytes go to the glyph
//! renderer, every other character to the surface font.

use core::ops::Range;

use heapless::Vec;
use log::warn;

use crate::glyphs::{GlyphSurface, SpecialGlyphRenderer, is_reserved};

/// Most lines [`draw_wrapped`] lays out in one call.
pub const MAX_WRAP_LINES: usize = 16;

/// Font side of a text surface.
pub trait TextSurface: GlyphSurface {
    /// Draws `c` with its baseline at `y` and returns the advance width.
    fn draw_char(&mut self, x: i32, y: i32, c: char, on: bool) -> Result<i32, Self::Error>;

    fn char_advance(&self, c: char) -> i32;

    /// Baseline-to-baseline distance of the active font.
    fn line_height(&self) -> i32;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Align {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutConfig {
    /// Extra pixels between wrapped lines.
    pub line_spacing: i32,
    pub align: Align,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_spacing: 2,
            align: Align::Left,
        }
    }
}

#[inline]
fn reserved_byte(c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(|byte| is_reserved(*byte))
}

/// Pixel width of `text` on one line.
///
/// Any whitespace inside a line (tabs, newlines from pasted text) counts as one
/// space, matching [`draw_line`].
pub fn line_width<S>(renderer: &SpecialGlyphRenderer<'_, S>, text: &str) -> i32
where
    S: TextSurface,
{
    text.chars()
        .map(|c| match reserved_byte(c) {
            Some(byte) => renderer.advance(byte),
            None if c.is_whitespace() => renderer.surface().char_advance(' '),
            None => renderer.surface().char_advance(c),
        })
        .sum()
}

/// Draws `text` from `(x, y)` along the baseline and returns the final cursor x.
pub fn draw_line<S>(
    renderer: &mut SpecialGlyphRenderer<'_, S>,
    x: i32,
    y: i32,
    text: &str,
) -> Result<i32, S::Error>
where
    S: TextSurface,
{
    let ink = renderer.config().ink_on;
    let mut cursor = x;

    for c in text.chars() {
        cursor += match reserved_byte(c) {
            Some(byte) => renderer.draw(cursor, y, byte)?,
            None if c.is_whitespace() => renderer.surface().char_advance(' '),
            None => renderer.surface_mut().draw_char(cursor, y, c, ink)?,
        };
    }

    Ok(cursor)
}

fn next_word_at(text: &str, mut cursor: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if cursor >= len {
        return None;
    }

    let start = cursor;
    while cursor < len && !bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    Some((start, cursor))
}

/// Greedy word wrap of `text` into lines no wider than `max_width`.
///
/// Returns byte ranges into `text`. A word wider than `max_width` gets a line
/// of its own and overflows it. Lines past `N` are dropped.
pub fn wrap_lines<S, const N: usize>(
    renderer: &SpecialGlyphRenderer<'_, S>,
    text: &str,
    max_width: i32,
) -> Vec<Range<usize>, N>
where
    S: TextSurface,
{
    let mut lines = Vec::new();
    let mut current: Option<Range<usize>> = None;
    let mut cursor = 0usize;

    while let Some((start, end)) = next_word_at(text, cursor) {
        cursor = end;

        current = match current {
            None => Some(start..end),
            Some(line) if line_width(renderer, &text[line.start..end]) <= max_width => {
                Some(line.start..end)
            }
            Some(line) => {
                if lines.push(line).is_err() {
                    warn!("wrap: more than {} lines, dropping the rest", N);
                    return lines;
                }
                Some(start..end)
            }
        };
    }

    if let Some(line) = current
        && lines.push(line).is_err()
    {
        warn!("wrap: more than {} lines, dropping the rest", N);
    }

    lines
}

/// Wraps `text` to `max_width` and draws it with the first baseline at `y`.
///
/// Returns the number of lines drawn.
pub fn draw_wrapped<S>(
    renderer: &mut SpecialGlyphRenderer<'_, S>,
    x: i32,
    y: i32,
    text: &str,
    max_width: i32,
    config: LayoutConfig,
) -> Result<usize, S::Error>
where
    S: TextSurface,
{
    let lines: Vec<Range<usize>, MAX_WRAP_LINES> = wrap_lines(renderer, text, max_width);
    let step = renderer.surface().line_height() + config.line_spacing;
    let mut baseline = y;

    for line in &lines {
        let slice = &text[line.clone()];
        let left = match config.align {
            Align::Left => x,
            Align::Center => x + (max_width - line_width(renderer, slice)).max(0) / 2,
        };
        draw_line(renderer, left, baseline, slice)?;
        baseline += step;
    }

    Ok(lines.len())
}
