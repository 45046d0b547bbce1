//! Software compositor.
//!
//! Flattens a paint-ordered rendering context onto an RGBA surface with
//! straight-alpha "over" blending. Entries outside the surface are clipped
//! per pixel.

use std::path::Path;

use image::{Rgba, RgbaImage};

use tabula_engine::assets::image::{Color, Image};
use tabula_engine::coords::Point;

pub struct Compositor {
    surface: RgbaImage,
    background: Color,
}

impl Compositor {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let surface = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba()));
        Self { surface, background }
    }

    /// Clears to the background and paints `context` back-to-front.
    pub fn run(&mut self, context: &[(Image, Point)]) {
        let clear = Rgba(self.background.to_rgba());
        for px in self.surface.pixels_mut() {
            *px = clear;
        }
        for (image, location) in context {
            self.blit(image, *location);
        }
    }

    fn blit(&mut self, image: &Image, at: Point) {
        let (sw, sh) = (self.surface.width() as i32, self.surface.height() as i32);
        for (x, y, src) in image.pixels().enumerate_pixels() {
            let dx = at.x + x as i32;
            let dy = at.y + y as i32;
            if dx < 0 || dy < 0 || dx >= sw || dy >= sh {
                continue;
            }
            let a = src.0[3] as u32;
            if a == 0 {
                continue;
            }
            let dst = self.surface.get_pixel_mut(dx as u32, dy as u32);
            if a == 255 {
                *dst = *src;
                continue;
            }
            for c in 0..3 {
                let s = src.0[c] as u32;
                let d = dst.0[c] as u32;
                dst.0[c] = ((s * a + d * (255 - a)) / 255) as u8;
            }
            let da = dst.0[3] as u32;
            dst.0[3] = (a + da * (255 - a) / 255) as u8;
        }
    }

    #[inline]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        self.surface.save(path)
    }
}
