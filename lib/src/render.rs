use crate::error::{Error, Result};
use crate::symbol::symbol_for;
use rand::Rng;
use std::io::Write;

/// Render a grayscale pixel sequence as letter-density text.
///
/// Letters for dark pixels come from the thread-local generator; use
/// [`render_with_rng`] to supply your own.
///
/// # Arguments
/// * `pixels` - Row-major grayscale values, `width` per row
/// * `width` - Number of symbols per output row, must be positive
/// * `sink` - Destination for the rendered text
pub fn render<W: Write>(pixels: &[u8], width: u32, sink: &mut W) -> Result<()> {
    render_with_rng(pixels, width, sink, &mut rand::thread_rng())
}

/// Render a grayscale pixel sequence, drawing letters from `rng`.
///
/// The output opens with a blank line, then one line per row of `width`
/// symbols, then a trailing newline. An empty sequence therefore writes
/// exactly two newlines. A sequence whose length is not a multiple of
/// `width` wraps mid-row rather than failing.
///
/// # Arguments
/// * `pixels` - Row-major grayscale values, `width` per row
/// * `width` - Number of symbols per output row, must be positive
/// * `sink` - Destination for the rendered text
/// * `rng` - Generator for the dark-pixel letters
///
/// # Returns
/// `Error::InvalidArgument` for a zero width, `Error::Io` if the sink
/// rejects the write. Nothing is written on the width check.
pub fn render_with_rng<W: Write, R: Rng>(
    pixels: &[u8],
    width: u32,
    sink: &mut W,
    rng: &mut R,
) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidArgument("width must be positive".to_string()));
    }

    let width = width as usize;
    // One symbol per pixel, one newline per row plus the leading and
    // trailing ones.
    let mut text = String::with_capacity(pixels.len() + pixels.len() / width + 2);

    text.push('\n');
    for (i, &value) in pixels.iter().enumerate() {
        if i > 0 && i % width == 0 {
            text.push('\n');
        }
        text.push(symbol_for(value, rng));
    }
    text.push('\n');

    sink.write_all(text.as_bytes())?;
    Ok(())
}

/// Render to the process's standard output.
pub fn render_to_stdout(pixels: &[u8], width: u32) -> Result<()> {
    let stdout = std::io::stdout();
    render(pixels, width, &mut stdout.lock())
}
