//! Rectangle outlines of the special glyphs.
//!
//! Shapes are computed in floating point relative to the glyph origin and only
//! snapped to pixels when handed to a surface. Snapping rounds each edge rather
//! than each size, so neighbouring rectangles never overlap or leave a gap.
//! Quote marks round their own size first so repeated marks stay identical.

use heapless::Vec;

use super::SpecialGlyph;
use super::metrics::{
    DASH_HEIGHT_UNITS, EM_DASH_WIDTH_UNITS, EN_DASH_WIDTH_UNITS, TEARDROP_GAP_UNITS,
    TEARDROP_HEIGHT_UNITS, TEARDROP_TAPER, TEARDROP_WIDTH_UNITS,
};

/// Axis-aligned rectangle relative to a glyph origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Integer rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Up to four rectangles; double quotes use all of them.
pub type GlyphShape = Vec<GlyphRect, 4>;

#[inline]
fn snap(v: f32) -> i32 {
    // Relative edges are never negative, so truncating `v + 0.5` rounds half up.
    (v + 0.5) as i32
}

impl GlyphRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Places the rectangle at `(origin_x, origin_y)` and rounds its edges to pixels.
    pub fn to_pixels(&self, origin_x: i32, origin_y: i32) -> PixelRect {
        let left = snap(self.x);
        let right = snap(self.x + self.width);
        let top = snap(self.y);
        let bottom = snap(self.y + self.height);

        PixelRect {
            x: origin_x.saturating_add(left),
            y: origin_y.saturating_add(top),
            width: right.saturating_sub(left).max(0) as u32,
            height: bottom.saturating_sub(top).max(0) as u32,
        }
    }
}

/// Pixel size of one comma-like mark at `scale`: width and half height.
///
/// Rounded once per glyph so every mark of a double quote comes out identical.
fn teardrop_size(scale: f32) -> (f32, f32) {
    let width = snap(TEARDROP_WIDTH_UNITS * scale) as f32;
    let half = snap(TEARDROP_HEIGHT_UNITS * scale / 2.0) as f32;
    (width, half)
}

/// One comma-like mark: a full-width top half over a tapered bottom half.
///
/// `bottom_inset` moves the tapered half right; zero keeps it flush left.
fn push_teardrop(shape: &mut GlyphShape, x: f32, size: (f32, f32), bottom_inset: f32) {
    let (w, half) = size;

    let _ = shape.push(GlyphRect::new(x, 0.0, w, half));
    let _ = shape.push(GlyphRect::new(
        x + bottom_inset,
        half,
        w - TEARDROP_TAPER,
        half,
    ));
}

impl SpecialGlyph {
    /// Rectangles making up this glyph at `scale`.
    pub fn shape(self, scale: f32) -> GlyphShape {
        let mut shape = GlyphShape::new();
        let mark = teardrop_size(scale);
        let second = mark.0 + snap(TEARDROP_GAP_UNITS * scale) as f32;

        match self {
            Self::LeftDoubleQuote => {
                push_teardrop(&mut shape, 0.0, mark, 0.0);
                push_teardrop(&mut shape, second, mark, 0.0);
            }
            Self::RightDoubleQuote => {
                push_teardrop(&mut shape, 0.0, mark, TEARDROP_TAPER);
                push_teardrop(&mut shape, second, mark, TEARDROP_TAPER);
            }
            Self::Apostrophe => push_teardrop(&mut shape, 0.0, mark, TEARDROP_TAPER),
            Self::EnDash => {
                let _ = shape.push(GlyphRect::new(
                    0.0,
                    0.0,
                    EN_DASH_WIDTH_UNITS * scale,
                    DASH_HEIGHT_UNITS * scale,
                ));
            }
            Self::EmDash => {
                let _ = shape.push(GlyphRect::new(
                    0.0,
                    0.0,
                    EM_DASH_WIDTH_UNITS * scale,
                    DASH_HEIGHT_UNITS * scale,
                ));
            }
        }

        shape
    }
}
