//! ASCII Sketch - letter-density image to text converter
//!
//! Converts an image into a textual approximation: dark pixels become
//! random lowercase letters, light pixels become spaces. Works best on
//! high-contrast images with large simple shapes; a busy photograph
//! comes out unrecognizable.
//!
//! # Example
//! ```no_run
//! use ascii_sketch::{DEFAULT_WIDTH, render_image};
//!
//! let mut out = Vec::new();
//! render_image("photo.jpg", DEFAULT_WIDTH, &mut out).unwrap();
//! print!("{}", String::from_utf8(out).unwrap());
//! ```

pub mod error;
pub mod loader;
pub mod render;
pub mod symbol;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use loader::{DEFAULT_WIDTH, render_image, render_image_to_stdout};
pub use render::{render, render_to_stdout, render_with_rng};
