use std::sync::Arc;

use image::{Rgba, RgbaImage};

/// Straight-alpha RGBA color with 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Shareable image handle.
///
/// Images move between components, the asset registry, and the rendering
/// context every frame; the `Arc` keeps those hand-offs at pointer cost.
/// Pixels are immutable after construction — "updating" an image means
/// replacing the handle.
#[derive(Debug, Clone)]
pub struct Image(Arc<RgbaImage>);

impl Image {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self(Arc::new(pixels))
    }

    /// Uniformly filled rectangle.
    pub fn solid(w: u32, h: u32, color: Color) -> Self {
        let px = Rgba(color.to_rgba());
        Self::from_rgba(RgbaImage::from_pixel(w.max(1), h.max(1), px))
    }

    /// Rectangular border frame with a transparent interior.
    ///
    /// Used for highlight overlays: the frame is `border` pixels thick on
    /// every side.
    pub fn border(w: u32, h: u32, border: u32, color: Color) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        let frame = Rgba(color.to_rgba());
        let hole = Rgba(Color::TRANSPARENT.to_rgba());
        let pixels = RgbaImage::from_fn(w, h, |x, y| {
            if x < border || y < border || x >= w - border || y >= h - border {
                frame
            } else {
                hole
            }
        });
        Self::from_rgba(pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Image dimensions as component-space integers.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.0.width() as i32, self.0.height() as i32)
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }
}
