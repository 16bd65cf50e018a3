//! Image writers: plain-text PPM and PNG.

use crate::renderer::{color_to_rgb8, ImageBuffer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while writing a rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Write the image as plain-text PPM (P3).
///
/// Three header lines (magic token, `width height`, max channel value)
/// followed by one `R G B` line per pixel, row-major starting at the top
/// scanline. The layout is stable so renders stay diff-comparable.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> Result<(), OutputError> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

/// Save the image as a PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save the image as a PNG file.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let mut out = image::RgbImage::new(image.width, image.height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = image::Rgb(color_to_rgb8(image.get(x, y)));
    }
    out.save(path)?;
    Ok(())
}
