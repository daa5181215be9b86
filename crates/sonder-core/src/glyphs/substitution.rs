//! Translation between UTF-8 typography and reserved placeholder bytes.
//!
//! Every target sequence is three bytes long and maps to one byte, so the
//! substituted text is never longer than its source and can be rewritten in place.

use heapless::String;
use log::warn;

use super::SpecialGlyph;

#[inline]
fn glyph_at(bytes: &[u8], idx: usize) -> Option<SpecialGlyph> {
    match bytes.get(idx..idx + 3)? {
        [0xE2, 0x80, tail] => SpecialGlyph::from_utf8_tail(*tail),
        _ => None,
    }
}

/// Rewrites `buf` so each supported UTF-8 sequence becomes its reserved byte.
///
/// Returns the new logical length; bytes past it are left as they were.
/// Bytes that are not part of a supported sequence, malformed UTF-8 included,
/// are kept unchanged.
pub fn substitute_in_place(buf: &mut [u8]) -> usize {
    let mut read = 0usize;
    let mut write = 0usize;

    while read < buf.len() {
        if let Some(glyph) = glyph_at(buf, read) {
            buf[write] = glyph.byte();
            read += 3;
        } else {
            buf[write] = buf[read];
            read += 1;
        }
        write += 1;
    }

    write
}

/// Copies `source` into `out`, substituting supported sequences on the way.
///
/// Stops early when `out` is full.
pub fn substitute_into<'a>(source: &[u8], out: &'a mut [u8]) -> &'a [u8] {
    let mut read = 0usize;
    let mut len = 0usize;

    while read < source.len() {
        if len >= out.len() {
            warn!(
                "substitute: output full at {} bytes, dropped {} source bytes",
                len,
                source.len() - read
            );
            break;
        }

        let (byte, consumed) = match glyph_at(source, read) {
            Some(glyph) => (glyph.byte(), 3),
            None => (source[read], 1),
        };
        out[len] = byte;
        len += 1;
        read += consumed;
    }

    &out[..len]
}

/// Substitutes a UTF-8 string into a bounded string.
///
/// Placeholder bytes are ASCII, so the result stays valid UTF-8. Characters that
/// do not fit in `N` bytes are dropped whole.
pub fn substitute<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();

    for c in text.chars() {
        let mapped = match SpecialGlyph::from_char(c) {
            Some(glyph) => char::from(glyph.byte()),
            None => c,
        };
        if out.push(mapped).is_err() {
            warn!("substitute: text truncated at {} bytes", out.len());
            break;
        }
    }

    out
}

/// Expands reserved bytes back into their UTF-8 sequences.
///
/// Stops before the first unit that would not fit in `out`.
pub fn restore_into<'a>(source: &[u8], out: &'a mut [u8]) -> &'a [u8] {
    let mut len = 0usize;

    for &byte in source {
        if let Some(glyph) = SpecialGlyph::from_byte(byte) {
            let encoded = glyph.utf8();
            if len + encoded.len() > out.len() {
                break;
            }
            out[len..len + encoded.len()].copy_from_slice(&encoded);
            len += encoded.len();
        } else {
            if len >= out.len() {
                break;
            }
            out[len] = byte;
            len += 1;
        }
    }

    &out[..len]
}
