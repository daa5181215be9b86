use core::convert::Infallible;

use heapless::Vec;

use crate::glyphs::{GlyphSurface, PixelRect};
use crate::layout::TextSurface;

pub const MOCK_MAX_RECORDS: usize = 64;

/// No-hardware surface with a fixed-cell font, used during bring-up and tests.
///
/// Records fills and characters instead of drawing them. Records past
/// [`MOCK_MAX_RECORDS`] are counted but not kept.
#[derive(Debug, Clone)]
pub struct FixedMetricsSurface {
    cell_width: u32,
    cell_height: u32,
    fills: Vec<(PixelRect, bool), MOCK_MAX_RECORDS>,
    chars: Vec<(i32, i32, char), MOCK_MAX_RECORDS>,
    dropped: usize,
}

impl FixedMetricsSurface {
    pub const fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            fills: Vec::new(),
            chars: Vec::new(),
            dropped: 0,
        }
    }

    /// Switches the active font's cell size.
    pub fn set_cell(&mut self, cell_width: u32, cell_height: u32) {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
    }

    pub fn fills(&self) -> &[(PixelRect, bool)] {
        &self.fills
    }

    pub fn chars(&self) -> &[(i32, i32, char)] {
        &self.chars
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.fills.clear();
        self.chars.clear();
        self.dropped = 0;
    }

    fn cell_advance(&self) -> i32 {
        i32::try_from(self.cell_width).unwrap_or(i32::MAX)
    }
}

impl GlyphSurface for FixedMetricsSurface {
    type Error = Infallible;

    fn fill_rect(&mut self, rect: PixelRect, on: bool) -> Result<(), Self::Error> {
        if self.fills.push((rect, on)).is_err() {
            self.dropped += 1;
        }
        Ok(())
    }

    fn text_bounds(&self, text: &str, x: i32, y: i32) -> PixelRect {
        let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let top = y.saturating_sub(i32::try_from(self.cell_height).unwrap_or(i32::MAX));
        PixelRect::new(x, top, self.cell_width.saturating_mul(count), self.cell_height)
    }
}

impl TextSurface for FixedMetricsSurface {
    fn draw_char(&mut self, x: i32, y: i32, c: char, _on: bool) -> Result<i32, Self::Error> {
        if self.chars.push((x, y, c)).is_err() {
            self.dropped += 1;
        }
        Ok(self.cell_advance())
    }

    fn char_advance(&self, _c: char) -> i32 {
        self.cell_advance()
    }

    fn line_height(&self) -> i32 {
        i32::try_from(self.cell_height).unwrap_or(i32::MAX)
    }
}
