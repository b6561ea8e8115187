//! String rendering
//!
//! Turns a string into one [`GlyphPlacement`] per code point. Each placement
//! owns a [`CharCanvas`] holding one shape per foreground cell, already scaled.
//! Shapes are built in cell units and the whole canvas is then scaled about
//! the origin, which keeps neighbouring cells exactly adjacent.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CharacterSet, Color, EngineError, Glyph, GlyphSize, Result};

/// Extra blank columns to the right of every character canvas, before scaling.
pub const CANVAS_PADDING: i32 = 1;

/// Shape used to draw one foreground cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[default]
    Circle,
    Rectangle,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::Circle, Marker::Rectangle];

    pub fn name(&self) -> &'static str {
        match self {
            Marker::Circle => "circle",
            Marker::Rectangle => "rectangle",
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Marker {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Marker::ALL
            .into_iter()
            .find(|marker| marker.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownMarker { name: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub foreground: Color,
    pub background: Color,
    pub scale_factor: u32,
    pub marker: Marker,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            scale_factor: 1,
            marker: Marker::Circle,
        }
    }
}

/// Axis aligned box `[x0, x1) × [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The unit cell at `(row, column)`.
    pub fn cell(row: usize, column: usize) -> Self {
        let (x, y) = (column as i32, row as i32);
        Self::new(x, y, x + 1, y + 1)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Scales about the origin.
    pub fn scaled(&self, factor: i32) -> Self {
        Self::new(self.x0 * factor, self.y0 * factor, self.x1 * factor, self.y1 * factor)
    }
}

/// Filled shape primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Rectangle(Bounds),
    /// Ellipse inscribed in the bounds.
    Ellipse(Bounds),
}

impl Shape {
    pub fn for_cell(marker: Marker, row: usize, column: usize) -> Self {
        let cell = Bounds::cell(row, column);
        match marker {
            Marker::Rectangle => Shape::Rectangle(cell),
            Marker::Circle => Shape::Ellipse(cell),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle(bounds) | Shape::Ellipse(bounds) => *bounds,
        }
    }

    pub fn scaled(&self, factor: i32) -> Self {
        match self {
            Shape::Rectangle(bounds) => Shape::Rectangle(bounds.scaled(factor)),
            Shape::Ellipse(bounds) => Shape::Ellipse(bounds.scaled(factor)),
        }
    }

    /// Whether the point lies inside the filled shape.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let b = self.bounds();
        let (x0, y0, x1, y1) = (f64::from(b.x0), f64::from(b.y0), f64::from(b.x1), f64::from(b.y1));
        if x < x0 || x >= x1 || y < y0 || y >= y1 {
            return false;
        }
        match self {
            Shape::Rectangle(_) => true,
            Shape::Ellipse(_) => {
                let (rx, ry) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
                let dx = (x - (x0 + rx)) / rx;
                let dy = (y - (y0 + ry)) / ry;
                dx * dx + dy * dy <= 1.0
            }
        }
    }
}

/// Drawing surface of a single character
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharCanvas {
    pub width: i32,
    pub height: i32,
    pub shapes: Vec<Shape>,
}

impl CharCanvas {
    /// Unscaled canvas for `size` cells plus the right padding.
    pub fn new(size: GlyphSize) -> Self {
        Self {
            width: size.columns as i32 + CANVAS_PADDING,
            height: size.rows as i32,
            shapes: Vec::new(),
        }
    }

    pub fn draw_glyph(&mut self, glyph: &Glyph, marker: Marker) {
        self.shapes.extend(glyph.foreground_cells().map(|(row, column)| Shape::for_cell(marker, row, column)));
    }

    /// Scales every shape and the canvas itself about the origin.
    pub fn scale(&mut self, factor: i32) {
        for shape in &mut self.shapes {
            *shape = shape.scaled(factor);
        }
        self.width *= factor;
        self.height *= factor;
    }
}

/// Rendering instruction for one character of a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPlacement {
    /// Character from the rendered text.
    pub ch: char,
    /// Key of the glyph that was drawn: `ch`, U+FFFD, or `None` for a blank.
    pub glyph: Option<char>,
    /// Left edge of the canvas in the scaled coordinates of its shapes:
    /// the running sum of the previous glyph widths times the scale factor.
    pub offset: usize,
    pub canvas: CharCanvas,
}

impl GlyphPlacement {
    pub fn is_blank(&self) -> bool {
        self.glyph.is_none()
    }
}

/// Renders strings with a fixed character set and options.
pub struct StringRenderer<'a> {
    charset: &'a CharacterSet,
    size: GlyphSize,
    options: RenderOptions,
    scale: i32,
}

impl<'a> StringRenderer<'a> {
    /// # Errors
    ///
    /// `EmptyCharset` if the set has no glyphs, `InvalidScaleFactor` for a zero
    /// scale or one that makes the scaled canvas exceed `i32` coordinates.
    pub fn new(charset: &'a CharacterSet, options: RenderOptions) -> Result<Self> {
        let size = charset.size().ok_or(EngineError::EmptyCharset)?;
        let scale = checked_scale(size, options.scale_factor).ok_or(EngineError::InvalidScaleFactor)?;
        Ok(Self {
            charset,
            size,
            options,
            scale,
        })
    }

    pub fn render(&self, text: &str) -> Vec<GlyphPlacement> {
        let advance = self.size.columns * self.scale as usize;
        let mut offset = 0;
        text.chars()
            .map(|ch| {
                let placement = self.render_char(ch, offset);
                offset += advance;
                placement
            })
            .collect()
    }

    fn render_char(&self, ch: char, offset: usize) -> GlyphPlacement {
        let mut canvas = CharCanvas::new(self.size);
        let resolved = self.charset.resolve(ch);
        if let Some((_, glyph)) = resolved {
            canvas.draw_glyph(glyph, self.options.marker);
        } else {
            log::debug!("No glyph for {ch:?} and no replacement character, leaving it blank");
        }
        canvas.scale(self.scale);
        GlyphPlacement {
            ch,
            glyph: resolved.map(|(key, _)| key),
            offset,
            canvas,
        }
    }
}

/// Scale factor as `i32` if the scaled canvas of `size` stays addressable.
fn checked_scale(size: GlyphSize, scale_factor: u32) -> Option<i32> {
    let scale = i32::try_from(scale_factor).ok().filter(|scale| *scale > 0)?;
    let width = i32::try_from(size.columns).ok()?.checked_add(CANVAS_PADDING)?;
    let height = i32::try_from(size.rows).ok()?;
    width.checked_mul(scale)?;
    height.checked_mul(scale)?;
    Some(scale)
}

/// Renders `text` with `charset`, see [`StringRenderer`].
pub fn render(charset: &CharacterSet, text: &str, options: &RenderOptions) -> Result<Vec<GlyphPlacement>> {
    Ok(StringRenderer::new(charset, *options)?.render(text))
}
