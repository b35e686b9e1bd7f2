/// Basic example: render a synthetic test image as letter-density text
///
/// Draws a dark circle on a light background and prints the rendering
/// to stdout. No image file needed.
use ascii_sketch::render_to_stdout;

fn main() {
    let width = 60u32;
    let height = 30u32;
    let mut pixels = Vec::with_capacity((width * height) as usize);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 13.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            // Terminal cells are roughly twice as tall as they are wide
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            pixels.push(if dist < radius { 0 } else { 255 });
        }
    }

    println!("ASCII Sketch - Basic Example");
    println!("============================");

    render_to_stdout(&pixels, width).expect("failed to write to stdout");
}
