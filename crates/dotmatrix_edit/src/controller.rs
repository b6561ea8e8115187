//! Editor controller
//!
//! Owns everything a designer session works on: the store, the in-memory
//! character set and the edit buffer. The UI layer reads from it and calls
//! the action methods, each of which yields one [`EditorStatus`].
//!
//! | Action | Character present | Character absent |
//! |--------|-------------------|------------------|
//! | show   | buffer ← glyph    | buffer cleared, `Undefined` |
//! | save   | glyph ← buffer, file rewritten | same |
//! | remove | glyph removed, file rewritten, buffer cleared | file untouched, buffer cleared, `NotDefined` |

use std::path::{Path, PathBuf};

use dotmatrix_engine::{CharacterSet, CharsetStore, EngineError, GlyphSize, Result};

use crate::{EditBuffer, EditorStatus};

pub struct EditorController {
    store: CharsetStore,
    charset: CharacterSet,
    buffer: EditBuffer,
}

impl EditorController {
    /// Opens the character set at `path`, or starts an empty one that is
    /// written on the first save.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for a zero size, load errors of an existing file and
    /// `DimensionConflict` if an existing, non-empty set has glyphs of another size.
    pub fn open_or_create(path: impl Into<PathBuf>, rows: usize, columns: usize) -> Result<Self> {
        let size = GlyphSize::new(rows, columns).validate()?;
        let store = CharsetStore::new(path);
        let buffer = EditBuffer::new(size)?;

        let charset = if store.exists() {
            let charset = store.load()?;
            charset.validate_size(size)?;
            charset
        } else {
            log::info!("{} does not exist yet, it will be created on save", store.path().display());
            CharacterSet::new()
        };

        Ok(Self { store, charset, buffer })
    }

    pub fn charset(&self) -> &CharacterSet {
        &self.charset
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn size(&self) -> GlyphSize {
        self.buffer.size()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Cell click on the editing surface.
    pub fn toggle(&mut self, row: usize, column: usize) -> Result<bool> {
        self.buffer.toggle(row, column)
    }

    pub fn clear_grid(&mut self) {
        self.buffer.clear();
    }

    /// Re-reads the file and shows the glyph of `input` in the edit buffer.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless `input` is exactly one character. Load errors other
    /// than a vanished file, and `DimensionConflict` if the file now holds glyphs
    /// of another size; the previous set is kept in both cases.
    pub fn show_character(&mut self, input: &str) -> Result<EditorStatus> {
        let ch = single_char(input)?;

        match self.store.load() {
            Ok(charset) => {
                if let Err(err) = charset.validate_size(self.size()) {
                    log::warn!("Ignoring {}: {err}", self.store.path().display());
                    return Err(err);
                }
                self.charset = charset;
            }
            Err(EngineError::NotFound { path }) => {
                log::warn!("Character set file {} disappeared", path.display());
                self.charset.clear();
                self.buffer.clear();
                return Ok(EditorStatus::FileMissing(path));
            }
            Err(err) => return Err(err),
        }

        match self.charset.get(ch) {
            Some(glyph) => {
                self.buffer.load_from(glyph)?;
                Ok(EditorStatus::Loaded(ch))
            }
            None => {
                self.buffer.clear();
                Ok(EditorStatus::Undefined(ch))
            }
        }
    }

    /// Stores the edit buffer as the glyph of `input` and rewrites the file.
    pub fn save_character(&mut self, input: &str) -> Result<EditorStatus> {
        let ch = single_char(input)?;
        self.charset.insert(ch, self.buffer.to_glyph())?;
        self.store.save(&self.charset)?;
        Ok(EditorStatus::Saved(ch))
    }

    /// Removes `input` from the set. The edit buffer is cleared in any case,
    /// the file is only rewritten if something was removed.
    pub fn remove_character(&mut self, input: &str) -> Result<EditorStatus> {
        self.buffer.clear();
        let Ok(ch) = single_char(input) else {
            return Ok(EditorStatus::NotDefined(input.to_string()));
        };
        if self.charset.remove(ch).is_none() {
            return Ok(EditorStatus::NotDefined(input.to_string()));
        }
        self.store.save(&self.charset)?;
        Ok(EditorStatus::Removed(ch))
    }

    /// `key:value` listing of the in-memory set for the file content view.
    pub fn file_content(&self) -> String {
        self.charset.content_listing()
    }
}

fn single_char(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(EngineError::invalid_input(input)),
    }
}
