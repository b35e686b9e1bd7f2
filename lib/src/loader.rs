use crate::error::{Error, Result};
use crate::render::render;
use image::{GenericImageView, imageops::FilterType};
use std::io::Write;
use std::path::Path;

/// Default number of symbols per output row.
pub const DEFAULT_WIDTH: u32 = 80;

/// Proportional height for a target width.
///
/// Computed as the real-valued aspect ratio floored at the final step,
/// not as integer division: 100x200 scaled to width 150 gives
/// floor(200 * 150 / 100) = 300, and fractional results truncate
/// toward zero.
fn scaled_height(width: u32, height: u32, desired_width: u32) -> u32 {
    (height as f64 * desired_width as f64 / width as f64) as u32
}

/// Render the image at `path` as letter-density text.
///
/// The image is resized to `desired_width` symbols per row with its
/// aspect ratio preserved, converted to grayscale, and handed to the
/// renderer.
///
/// # Arguments
/// * `path` - Filesystem path to the image
/// * `desired_width` - Number of symbols per output row, must be positive
/// * `sink` - Destination for the rendered text
///
/// # Returns
/// `Error::InvalidArgument` for a zero `desired_width` (checked before
/// any image operation), `Error::ImageLoad` if the file is missing or
/// cannot be decoded. On either error nothing is written to the sink.
pub fn render_image<P: AsRef<Path>, W: Write>(
    path: P,
    desired_width: u32,
    sink: &mut W,
) -> Result<()> {
    if desired_width == 0 {
        return Err(Error::InvalidArgument(
            "desired width must be positive".to_string(),
        ));
    }

    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    let new_height = scaled_height(width, height, desired_width);
    log::debug!("scaling {width}x{height} to {desired_width}x{new_height}");

    let gray = img
        .resize_exact(desired_width, new_height, FilterType::Lanczos3)
        .into_luma8();

    render(gray.as_raw(), desired_width, sink)
}

/// Render the image at `path` to the process's standard output.
pub fn render_image_to_stdout<P: AsRef<Path>>(path: P, desired_width: u32) -> Result<()> {
    let stdout = std::io::stdout();
    render_image(path, desired_width, &mut stdout.lock())
}
