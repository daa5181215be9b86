#![cfg_attr(not(test), no_std)]

//! Framebuffer for the 2.66" 296x152 black/white e-paper panel.
//!
//! Only the in-memory side lives here: the buffer, `embedded-graphics` integration
//! and PBM export for host previews. Panel refresh stays with the board glue.

mod framebuffer;
pub mod panel;
pub mod pbm;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;
pub use pbm::{PbmError, encode_p4};
