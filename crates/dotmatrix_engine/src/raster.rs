//! Pixel output for rendered strings
//!
//! Every character canvas is placed at the offset of its placement. The
//! padding column of a canvas lies under the start of the next one, so only
//! the last canvas keeps its padding visible. A pixel is foreground when its
//! centre lies inside one of the shapes of its canvas.

use crate::{GlyphPlacement, RenderOptions};

/// Coverage mask of a rendered string, row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RasterMask {
    pub width: usize,
    pub height: usize,
    pub bits: Vec<bool>,
}

impl RasterMask {
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// One line per pixel row using `on`/`off` characters.
    pub fn to_text(&self, on: char, off: char) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                result.push(if self.get(x, y) { on } else { off });
            }
            if y + 1 < self.height {
                result.push('\n');
            }
        }
        result
    }
}

/// RGBA image, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub fn rasterize(placements: &[GlyphPlacement]) -> RasterMask {
    let width = placements.iter().map(|p| p.offset + p.canvas.width.max(0) as usize).max().unwrap_or(0);
    let height = placements.iter().map(|p| p.canvas.height.max(0) as usize).max().unwrap_or(0);
    let mut bits = vec![false; width * height];

    for placement in placements {
        let (left, canvas) = (placement.offset, &placement.canvas);
        for shape in &canvas.shapes {
            let b = shape.bounds();
            let x_range = b.x0.max(0)..b.x1.min(canvas.width).max(0);
            let y_range = b.y0.max(0)..b.y1.min(canvas.height).max(0);
            for y in y_range {
                for x in x_range.clone() {
                    if shape.contains(f64::from(x) + 0.5, f64::from(y) + 0.5) {
                        bits[y as usize * width + left + x as usize] = true;
                    }
                }
            }
        }
    }

    RasterMask { width, height, bits }
}

/// Paints the placements with the foreground and background colors of `options`.
pub fn render_to_rgba(placements: &[GlyphPlacement], options: &RenderOptions) -> RgbaImage {
    let mask = rasterize(placements);
    let (fr, fg, fb) = options.foreground.get_rgb();
    let (br, bg, bb) = options.background.get_rgb();

    let mut pixels = Vec::with_capacity(mask.bits.len() * 4);
    for &bit in &mask.bits {
        if bit {
            pixels.extend_from_slice(&[fr, fg, fb, 0xFF]);
        } else {
            pixels.extend_from_slice(&[br, bg, bb, 0xFF]);
        }
    }

    RgbaImage {
        width: mask.width as u32,
        height: mask.height as u32,
        pixels,
    }
}
