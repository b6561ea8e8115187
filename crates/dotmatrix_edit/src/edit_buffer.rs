//! Edit buffer
//!
//! The grid currently shown in the designer. It has a fixed size and is only
//! connected to a stored glyph through [`EditBuffer::load_from`] and
//! [`EditBuffer::to_glyph`].

use dotmatrix_engine::{EngineError, Glyph, GlyphSize, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    size: GlyphSize,
    cells: Vec<Vec<bool>>,
}

impl EditBuffer {
    /// Blank buffer.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if `size` has a zero dimension.
    pub fn new(size: GlyphSize) -> Result<Self> {
        let size = size.validate()?;
        Ok(Self {
            size,
            cells: vec![vec![false; size.columns]; size.rows],
        })
    }

    pub fn size(&self) -> GlyphSize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Sets every cell to background.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    pub fn is_set(&self, row: usize, column: usize) -> Result<bool> {
        self.check_range(row, column)?;
        Ok(self.cells[row][column])
    }

    pub fn set(&mut self, row: usize, column: usize, value: bool) -> Result<()> {
        self.check_range(row, column)?;
        self.cells[row][column] = value;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, column: usize) -> Result<bool> {
        self.check_range(row, column)?;
        let cell = &mut self.cells[row][column];
        *cell = !*cell;
        log::debug!("Toggled cell ({row}, {column}) to {}", *cell);
        Ok(*cell)
    }

    /// Replaces the buffer contents with `glyph`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the glyph is not exactly the buffer's size.
    pub fn load_from(&mut self, glyph: &Glyph) -> Result<()> {
        if !glyph.is_rectangular() || glyph.size() != self.size {
            return Err(EngineError::DimensionMismatch {
                expected: self.size,
                actual: glyph.size(),
            });
        }
        self.cells = glyph.pixels().to_vec();
        Ok(())
    }

    pub fn to_glyph(&self) -> Glyph {
        Glyph::from_pixels(self.cells.clone())
    }

    /// Text preview, one line per row.
    pub fn to_text(&self, on: char, off: char) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&bit| if bit { on } else { off }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_range(&self, row: usize, column: usize) -> Result<()> {
        if self.size.contains(row, column) {
            Ok(())
        } else {
            Err(EngineError::OutOfRange { row, column, size: self.size })
        }
    }
}
