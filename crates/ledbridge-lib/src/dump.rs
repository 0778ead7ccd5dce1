//! Degraded-mode artifacts — full-surface PNG dumps when no hardware sink
//! is available.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedbridgeError, Result};
use crate::surface::{self, FrameSurface};

/// File name for the `index`-th dump frame: `output0000.png`,
/// `output0001.png`, …
pub fn frame_file_name(index: u32) -> String {
    format!("output{index:04}.png")
}

/// Encode the full surface as an 8-bit RGB PNG, one image pixel per LED.
/// Alpha is dropped, matching what the hardware sink would receive.
pub fn write_surface_png(surface: &FrameSurface, path: &Path) -> Result<()> {
    if surface.is_empty() {
        return Err(LedbridgeError::Encode("surface is empty".into()));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header().map_err(encode_err)?;

    let mut data =
        Vec::with_capacity(surface.width() as usize * surface.height() as usize * 3);
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let (r, g, b) = surface::channels(surface.pixel(x, y).unwrap_or(0));
            data.extend_from_slice(&[r, g, b]);
        }
    }
    png_writer.write_image_data(&data).map_err(encode_err)?;
    Ok(())
}

fn encode_err(e: png::EncodingError) -> LedbridgeError {
    LedbridgeError::Encode(e.to_string())
}
