use std::fmt;

use image::RgbaImage;

use super::image::{Color, Image};

/// Visual parameters of a rasterized label.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Glyph size in pixels.
    pub px: f32,
    pub color: Color,
}

impl TextStyle {
    #[inline]
    pub const fn new(px: f32, color: Color) -> Self {
        Self { px, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { px: 16.0, color: Color::BLACK }
    }
}

/// Turns label text into an image.
///
/// Text rasterization is a collaborator concern: textfields hold a shared
/// rasterizer and regenerate their image whenever the text changes, without
/// caring whether glyphs come from a real font or a placeholder.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str, style: TextStyle) -> Image;
}

/// Error returned by [`FontLabels::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Fontdue-backed label rasterizer.
pub struct FontLabels {
    font: fontdue::Font,
}

impl FontLabels {
    /// Parses a TrueType / OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }
}

impl TextRasterizer for FontLabels {
    fn rasterize(&self, text: &str, style: TextStyle) -> Image {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as GlyphRun};

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &GlyphRun::new(text, style.px, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Image::solid(1, style.px.ceil().max(1.0) as u32, Color::TRANSPARENT);
        }

        let w = glyphs
            .iter()
            .map(|g| g.x + g.width as f32)
            .fold(1.0f32, f32::max)
            .ceil() as u32;
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(style.px, f32::max)
            .ceil() as u32;

        let mut pixels = RgbaImage::new(w, h);
        for g in glyphs {
            let (metrics, coverage) = self.font.rasterize_config(g.key);
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let cov = coverage[row * metrics.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let x = g.x as u32 + col as u32;
                    let y = g.y as u32 + row as u32;
                    if x < w && y < h {
                        let a = (cov as u16 * style.color.a as u16 / 255) as u8;
                        pixels.put_pixel(
                            x,
                            y,
                            image::Rgba([style.color.r, style.color.g, style.color.b, a]),
                        );
                    }
                }
            }
        }
        Image::from_rgba(pixels)
    }
}

/// Placeholder rasterizer: one filled cell per character.
///
/// Used by headless tests and hosts without a font file. Whitespace leaves
/// its cell empty, so label widths stay proportional to the text.
#[derive(Debug, Clone)]
pub struct BlockLabels {
    /// Cell width in pixels; height is twice the width.
    pub cell: u32,
}

impl BlockLabels {
    pub const fn new(cell: u32) -> Self {
        Self { cell }
    }
}

impl Default for BlockLabels {
    fn default() -> Self {
        Self { cell: 8 }
    }
}

impl TextRasterizer for BlockLabels {
    fn rasterize(&self, text: &str, style: TextStyle) -> Image {
        let cell = self.cell.max(2);
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Image::solid(1, cell * 2, Color::TRANSPARENT);
        }

        let w = cell * chars.len() as u32;
        let h = cell * 2;
        let fill = image::Rgba(style.color.to_rgba());
        let blank = image::Rgba(Color::TRANSPARENT.to_rgba());
        let pixels = RgbaImage::from_fn(w, h, |x, y| {
            let idx = (x / cell) as usize;
            let in_gap = x % cell == cell - 1 || y == 0 || y == h - 1;
            if chars[idx].is_whitespace() || in_gap { blank } else { fill }
        });
        Image::from_rgba(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_labels_width_tracks_char_count() {
        let labels = BlockLabels::new(8);
        let one = labels.rasterize("a", TextStyle::default());
        let four = labels.rasterize("abcd", TextStyle::default());
        assert_eq!(one.width() * 4, four.width());
        assert_eq!(one.height(), four.height());
    }

    #[test]
    fn block_labels_whitespace_cell_is_blank() {
        let labels = BlockLabels::new(8);
        let img = labels.rasterize("a b", TextStyle::new(16.0, Color::WHITE));
        // middle of the space cell
        assert_eq!(img.pixels().get_pixel(8 + 3, 8).0[3], 0);
        // middle of a glyph cell
        assert_eq!(img.pixels().get_pixel(3, 8).0[3], 255);
    }

    #[test]
    fn block_labels_empty_text_is_minimal() {
        let labels = BlockLabels::default();
        assert_eq!(labels.rasterize("", TextStyle::default()).width(), 1);
    }
}
