use crate::{EngineError, Result};

/// Dimensions of a dot-matrix glyph in cells
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GlyphSize {
    pub rows: usize,
    pub columns: usize,
}

impl std::fmt::Display for GlyphSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(rows: {}, columns: {})", self.rows, self.columns)
    }
}

impl GlyphSize {
    pub fn new(rows: usize, columns: usize) -> Self {
        GlyphSize { rows, columns }
    }

    /// Both dimensions are at least one cell.
    pub fn is_valid(&self) -> bool {
        self.rows >= 1 && self.columns >= 1
    }

    /// Returns `InvalidDimensions` unless [`is_valid`](Self::is_valid) holds.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(EngineError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }
}

impl From<(usize, usize)> for GlyphSize {
    fn from((rows, columns): (usize, usize)) -> Self {
        GlyphSize { rows, columns }
    }
}

/// Bitmap of one character: rows of cells, `true` is foreground.
///
/// A glyph read from disk is kept exactly as it was stored, so it may be
/// ragged. [`Glyph::is_rectangular`] and [`crate::CharacterSet::validate`]
/// check the shape.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Glyph {
    rows: Vec<Vec<bool>>,
}

impl Glyph {
    /// Blank glyph of the given size
    pub fn new(size: GlyphSize) -> Self {
        Self {
            rows: vec![vec![false; size.columns]; size.rows],
        }
    }

    pub fn from_pixels(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Parses row bit-strings such as `["010", "111", "101"]`.
    pub fn from_bitstrings<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows = rows.iter().map(|row| parse_row(row.as_ref())).collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn to_bitstrings(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().map(|&bit| if bit { '1' } else { '0' }).collect()).collect()
    }

    /// Row count and the length of the first row.
    pub fn size(&self) -> GlyphSize {
        GlyphSize::new(self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn is_rectangular(&self) -> bool {
        let size = self.size();
        size.is_valid() && self.rows.iter().all(|row| row.len() == size.columns)
    }

    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.rows.get(row).and_then(|r| r.get(column)).copied().unwrap_or(false)
    }

    pub fn pixels(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// `(row, column)` of every foreground cell in row-major order.
    pub fn foreground_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, bits)| bits.iter().enumerate().filter(|(_, bit)| **bit).map(move |(column, _)| (row, column)))
    }
}

fn parse_row(row: &str) -> Result<Vec<bool>> {
    row.chars()
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(EngineError::InvalidBitString { row: row.to_string() }),
        })
        .collect()
}
