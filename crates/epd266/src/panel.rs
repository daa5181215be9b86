//! Panel geometry, in landscape orientation.

/// Panel width in pixels.
pub const WIDTH: usize = 296;
/// Panel height in pixels.
pub const HEIGHT: usize = 152;
/// Number of bytes in one framebuffer row.
pub const LINE_BYTES: usize = WIDTH.div_ceil(8);
/// Total framebuffer size in bytes.
pub const BUFFER_SIZE: usize = LINE_BYTES * HEIGHT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pack_without_padding() {
        assert_eq!(LINE_BYTES, 37);
        assert_eq!(LINE_BYTES * 8, WIDTH);
        assert_eq!(BUFFER_SIZE, 5_624);
    }
}
