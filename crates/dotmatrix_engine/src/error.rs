//! Unified error types for dotmatrix_engine

use std::path::PathBuf;
use thiserror::Error;

use crate::GlyphSize;

/// Main error type for character set, editing and rendering operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    // === Loading Errors ===
    #[error("Invalid character set file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Row \"{row}\" may only contain '0' and '1'")]
    InvalidBitString { row: String },

    #[error("Key \"{key}\" must be exactly one character")]
    InvalidKey { key: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Dimension Errors ===
    #[error("Glyph size {actual} does not match {expected}")]
    DimensionMismatch { expected: GlyphSize, actual: GlyphSize },

    #[error("Character set dimension {actual} conflicts with the configured {expected}")]
    DimensionConflict { expected: GlyphSize, actual: GlyphSize },

    #[error("Invalid glyph dimensions: {rows} rows, {columns} columns (both must be at least 1)")]
    InvalidDimensions { rows: usize, columns: usize },

    // === Editing Errors ===
    #[error("Only a single, non-empty character can be given (got \"{input}\")")]
    InvalidInput { input: String },

    #[error("Cell ({row}, {column}) is outside of the {size} grid")]
    OutOfRange { row: usize, column: usize, size: GlyphSize },

    // === Rendering Errors ===
    #[error("Character set is empty, glyph dimensions are unknown")]
    EmptyCharset,

    #[error("Scale factor must be at least 1")]
    InvalidScaleFactor,

    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Unknown marker '{name}' (expected 'circle' or 'rectangle')")]
    UnknownMarker { name: String },
}

/// Result type alias for dotmatrix_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a parse error for the given file
    pub fn parse(path: impl Into<PathBuf>, msg: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: msg.to_string(),
        }
    }

    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput { input: input.into() }
    }
}
