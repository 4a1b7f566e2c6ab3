use image::{Rgb, RgbImage};

/// Builds a `size x size` RGB image where every pixel gets a distinct,
/// deterministic color, handy for image-adapter round-trip tests.
pub fn distinct_pixel_image(size: u32) -> RgbImage {
    let mut texture = RgbImage::new(size, size);
    let mut count: u8 = 0;
    for y in 0..size {
        for x in 0..size {
            texture.put_pixel(x, y, Rgb([count, count.wrapping_mul(7), count.wrapping_mul(13)]));
            count = count.wrapping_add(1);
        }
    }
    texture
}
