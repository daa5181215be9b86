//! In-memory framebuffer for the 2.66" panel.

use core::convert::TryFrom;

use crate::panel::{BUFFER_SIZE, HEIGHT, LINE_BYTES, WIDTH};

/// 1bpp framebuffer, `true` pixels are ink.
///
/// Bit mapping within one row byte: bit 7 is the leftmost pixel in that byte.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a blank (all paper) framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Clears to paper (`on = false`) or ink (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte_index = y * LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let byte_index = y * LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Fills a rectangle, clipped to the panel. Negative origins are allowed.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(WIDTH as i64);
        let y1 = (y as i64 + height as i64).min(HEIGHT as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                let _ = self.set_pixel(px as usize, py as usize, on);
            }
        }
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns a row payload for row 1..=152.
    pub fn line(&self, line: u16) -> Option<&[u8; LINE_BYTES]> {
        if !(1..=HEIGHT as u16).contains(&line) {
            return None;
        }

        let start = (line as usize - 1) * LINE_BYTES;
        let end = start + LINE_BYTES;
        <&[u8; LINE_BYTES]>::try_from(&self.bytes[start..end]).ok()
    }

    /// Iterates rows top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(LINE_BYTES)
    }
}
