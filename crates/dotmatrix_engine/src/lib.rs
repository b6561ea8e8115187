#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Dot-matrix character set model
//!
//! - [`Glyph`] / [`GlyphSize`] - bitmap of a single character
//! - [`CharacterSet`] - all glyphs of a font, keyed by character
//! - [`CharsetStore`] - JSON persistence
//! - [`StringRenderer`] - turns strings into positioned shapes
//! - [`raster`] - pixel output of rendered strings

mod error;
pub use error::*;

mod glyph;
pub use glyph::*;

mod charset;
pub use charset::*;

mod store;
pub use store::*;

mod color;
pub use color::*;

mod string_renderer;
pub use string_renderer::*;

pub mod raster;
pub use raster::{render_to_rgba, RgbaImage};
