//! Color mode classification of a source image.

use std::fmt;
use std::io::Cursor;

use image::DynamicImage;

/// How a source image stores its pixels before flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
    Luma,
    LumaAlpha,
    /// Indexed into a color table. The table may mark entries transparent.
    Palette,
}

impl ColorMode {
    /// Classify an already decoded buffer.
    pub fn of(image: &DynamicImage) -> Self {
        let color = image.color();
        match (color.has_color(), color.has_alpha()) {
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
            (false, false) => ColorMode::Luma,
            (false, true) => ColorMode::LumaAlpha,
        }
    }

    /// Classify a source using its raw bytes as well as the decoded buffer.
    ///
    /// The decoder expands palettes on load, so an indexed PNG is only
    /// recognisable from its header. Beyond [`ColorMode::carries_alpha`] the
    /// mode is informational: a palette flattens exactly like the RGB or RGBA
    /// buffer it expands to.
    pub fn probe(bytes: &[u8], image: &DynamicImage) -> Self {
        match png::Decoder::new(Cursor::new(bytes)).read_info() {
            Ok(reader) if reader.info().color_type == png::ColorType::Indexed => {
                ColorMode::Palette
            }
            _ => Self::of(image),
        }
    }

    /// Whether the mode has to be composited onto the background.
    pub fn carries_alpha(self) -> bool {
        matches!(
            self,
            ColorMode::Rgba | ColorMode::LumaAlpha | ColorMode::Palette
        )
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Palette => "P",
        };
        f.write_str(name)
    }
}
