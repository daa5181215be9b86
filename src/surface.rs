//! `embedded-graphics` glue for the glyph renderer.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use sonder_core::{GlyphSurface, PixelRect, TextSurface};

/// Borrows a binary draw target and draws text with one active mono font.
pub struct MonoSurface<'a, D> {
    target: &'a mut D,
    font: &'a MonoFont<'a>,
}

impl<'a, D> MonoSurface<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D, font: &'a MonoFont<'a>) -> Self {
        Self { target, font }
    }

    pub fn font(&self) -> &'a MonoFont<'a> {
        self.font
    }

    /// Switches the active font for following text and glyph calls.
    pub fn set_font(&mut self, font: &'a MonoFont<'a>) {
        self.font = font;
    }

    fn style(&self, on: bool) -> MonoTextStyle<'a, BinaryColor> {
        MonoTextStyle::new(self.font, BinaryColor::from(on))
    }
}

fn to_pixel_rect(rect: Rectangle) -> PixelRect {
    PixelRect::new(
        rect.top_left.x,
        rect.top_left.y,
        rect.size.width,
        rect.size.height,
    )
}

impl<D> GlyphSurface for MonoSurface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn fill_rect(&mut self, rect: PixelRect, on: bool) -> Result<(), Self::Error> {
        Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::from(on)))
        .draw(&mut *self.target)
    }

    fn text_bounds(&self, text: &str, x: i32, y: i32) -> PixelRect {
        let text = Text::with_baseline(
            text,
            Point::new(x, y),
            self.style(true),
            Baseline::Alphabetic,
        );
        to_pixel_rect(text.bounding_box())
    }
}

impl<D> TextSurface for MonoSurface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn draw_char(&mut self, x: i32, y: i32, c: char, on: bool) -> Result<i32, Self::Error> {
        let mut utf8 = [0u8; 4];
        let text = Text::with_baseline(
            c.encode_utf8(&mut utf8),
            Point::new(x, y),
            self.style(on),
            Baseline::Alphabetic,
        );
        let next = text.draw(&mut *self.target)?;
        Ok(next.x - x)
    }

    fn char_advance(&self, _c: char) -> i32 {
        (self.font.character_size.width + self.font.character_spacing) as i32
    }

    fn line_height(&self) -> i32 {
        self.font.character_size.height as i32
    }
}
