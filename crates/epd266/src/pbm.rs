//! Binary PBM (P4) export of the framebuffer for host previews.
//!
//! P4 rows are packed MSB first with `1` as black, which is exactly the
//! framebuffer's own layout, so rows are copied as is.

use crate::FrameBuffer;
use crate::panel::{BUFFER_SIZE, HEIGHT, WIDTH};

/// Upper bound of the P4 header for this panel.
pub const PBM_HEADER_MAX: usize = 16;
/// Buffer size that always fits an encoded frame.
pub const PBM_MAX_SIZE: usize = PBM_HEADER_MAX + BUFFER_SIZE;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PbmError {
    /// Output buffer cannot hold the encoded image.
    BufferTooSmall { needed: usize },
}

fn write_usize_ascii(mut value: usize, out: &mut [u8]) -> usize {
    let mut tmp = [0u8; 20];
    let mut n = 0usize;
    loop {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
        if value == 0 || n == tmp.len() {
            break;
        }
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}

fn write_header(out: &mut [u8; PBM_HEADER_MAX]) -> usize {
    let mut len = 0usize;
    out[..3].copy_from_slice(b"P4\n");
    len += 3;
    len += write_usize_ascii(WIDTH, &mut out[len..]);
    out[len] = b' ';
    len += 1;
    len += write_usize_ascii(HEIGHT, &mut out[len..]);
    out[len] = b'\n';
    len + 1
}

/// Encodes `frame` as a P4 image into `out`.
pub fn encode_p4<'a>(frame: &FrameBuffer, out: &'a mut [u8]) -> Result<&'a [u8], PbmError> {
    let mut header = [0u8; PBM_HEADER_MAX];
    let header_len = write_header(&mut header);
    let needed = header_len + BUFFER_SIZE;

    if out.len() < needed {
        log::warn!("pbm: need {} bytes, have {}", needed, out.len());
        return Err(PbmError::BufferTooSmall { needed });
    }

    out[..header_len].copy_from_slice(&header[..header_len]);
    out[header_len..needed].copy_from_slice(frame.bytes());
    Ok(&out[..needed])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_panel_size() {
        let fb = FrameBuffer::new();
        let mut out = [0u8; PBM_MAX_SIZE];
        let encoded = encode_p4(&fb, &mut out).unwrap();

        assert!(encoded.starts_with(b"P4\n296 152\n"));
        assert_eq!(encoded.len(), 11 + BUFFER_SIZE);
    }

    #[test]
    fn ink_pixels_are_black_bits() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(WIDTH - 1, HEIGHT - 1, true);

        let mut out = [0u8; PBM_MAX_SIZE];
        let encoded = encode_p4(&fb, &mut out).unwrap();

        assert_eq!(encoded[11], 0b1000_0000);
        assert_eq!(encoded[encoded.len() - 1], 0b0000_0001);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let fb = FrameBuffer::new();
        let mut out = [0u8; 64];
        assert_eq!(
            encode_p4(&fb, &mut out),
            Err(PbmError::BufferTooSmall {
                needed: 11 + BUFFER_SIZE
            })
        );
    }
}
