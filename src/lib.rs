//! Host side of the quote display: `embedded-graphics` surfaces and the quote card scene.

pub mod card;
pub mod surface;

pub use card::{CardConfig, CardFont, CardLayout, render_card};
pub use surface::MonoSurface;
