use anyhow::Context;
use ascii_sketch::DEFAULT_WIDTH;
use clap::Parser;
use std::path::PathBuf;

/// Render an image as letter-density text on stdout.
///
/// Dark pixels come out as random lowercase letters, light pixels as
/// spaces. High-contrast images with large shapes give the best results.
#[derive(Parser)]
#[command(name = "ascii-sketch", version, about)]
struct Cli {
    /// Path to the image to render
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    ascii_sketch::render_image_to_stdout(&cli.image, DEFAULT_WIDTH)
        .with_context(|| format!("could not render {}", cli.image.display()))?;
    Ok(())
}
