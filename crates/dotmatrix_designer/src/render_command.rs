use std::{fs::File, io::BufWriter, path::Path};

use anyhow::bail;
use dotmatrix_engine::{raster::rasterize, render_to_rgba, CharsetStore, RenderOptions, StringRenderer};

use crate::DesignerResult;

/// Renders `text` with the character set at `charset_path`.
///
/// Writes a PNG to `output` if given, otherwise returns a text preview.
pub fn render_text(charset_path: &Path, text: &str, options: &RenderOptions, output: Option<&Path>) -> DesignerResult<String> {
    let charset = CharsetStore::new(charset_path).load()?;
    let renderer = StringRenderer::new(&charset, *options)?;
    let placements = renderer.render(text);

    let blanks = placements.iter().filter(|p| p.is_blank()).count();
    if blanks > 0 {
        log::warn!("{blanks} characters of \"{text}\" have no glyph and no replacement glyph");
    }

    let Some(output) = output else {
        return Ok(rasterize(&placements).to_text('#', ' '));
    };

    let image = render_to_rgba(&placements, options);
    if image.width == 0 || image.height == 0 {
        bail!("Nothing to render");
    }
    write_png(output, image.width, image.height, &image.pixels)?;
    log::info!("Rendered \"{text}\" to {} ({}x{})", output.display(), image.width, image.height);
    Ok(format!("Saved {}x{} image to {}", image.width, image.height, output.display()))
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> DesignerResult<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
