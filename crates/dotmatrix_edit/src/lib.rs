//! Dot-matrix character editing
//!
//! Provides the model layer of the character designer:
//! - [`EditBuffer`] - the grid being edited
//! - [`EditorController`] - load / save / remove actions over a character set file
//! - [`EditorStatus`] - the outcome of each action as a message

mod edit_buffer;
pub use edit_buffer::*;

mod controller;
pub use controller::*;

mod status;
pub use status::*;

// Re-export the model types the editor works with
pub use dotmatrix_engine::{CharacterSet, CharsetStore, EngineError, Glyph, GlyphSize, Result};
