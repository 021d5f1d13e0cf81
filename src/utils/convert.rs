use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use crate::color_mode::ColorMode;

/// Opaque background every transparent pixel is flattened onto.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Blend one RGBA pixel over white, using its alpha as the weight.
///
/// Alpha 255 passes the color through, alpha 0 yields white and anything
/// in between is a linear mix rounded to the nearest value.
pub fn blend_over_white(pixel: Rgba<u8>) -> Rgb<u8> {
    let alpha = pixel[3] as u32;
    let mix = |channel: u8, background: u8| -> u8 {
        let value = channel as u32 * alpha + background as u32 * (255 - alpha);
        ((value + 127) / 255) as u8
    };

    Rgb([
        mix(pixel[0], BACKGROUND[0]),
        mix(pixel[1], BACKGROUND[1]),
        mix(pixel[2], BACKGROUND[2]),
    ])
}

/// Composite an RGBA buffer onto a freshly allocated white canvas of the same size.
pub fn composite_onto_white(image: &RgbaImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = ImageBuffer::from_pixel(width, height, BACKGROUND);

    for (x, y, pixel) in image.enumerate_pixels() {
        canvas.put_pixel(x, y, blend_over_white(*pixel));
    }

    canvas
}

/// Reduce any decoded image to an opaque 8-bit RGB buffer.
///
/// Alpha-bearing modes are expanded to RGBA first (palettes and gray+alpha
/// included) and composited; everything else goes through the regular
/// color conversion.
pub fn flatten(image: &DynamicImage, mode: ColorMode) -> RgbImage {
    if mode.carries_alpha() {
        composite_onto_white(&image.to_rgba8())
    } else {
        image.to_rgb8()
    }
}
