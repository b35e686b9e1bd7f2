//! Error types for the rendering pipeline.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering an image to text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied parameter was rejected before any work started
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The image could not be opened or decoded
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Writing to the output sink failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
