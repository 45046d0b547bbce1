use std::sync::Arc;

use crate::assets::text::{TextRasterizer, TextStyle};

use super::component::{Component, Kind};

/// Label payload: text plus the rasterizer that turns it into pixels.
///
/// The generated image lives on the owning component and is keyed in the
/// asset registry by the component's own id.
pub struct Textfield {
    pub(crate) text: String,
    pub(crate) style: TextStyle,
    pub(crate) labels: Arc<dyn TextRasterizer>,
}

impl Textfield {
    /// Builds a textfield component at (`x`, `y`), sized to the rasterized
    /// text and already marked dirty so the image reaches the registry.
    pub fn component(
        id: impl Into<String>,
        text: impl Into<String>,
        x: i32,
        y: i32,
        style: TextStyle,
        labels: Arc<dyn TextRasterizer>,
    ) -> Component {
        let text = text.into();
        let image = labels.rasterize(&text, style);
        let (w, h) = image.size();

        let mut c = Component::sized(id, x, y, w, h);
        c.image_id = Some(c.id.clone());
        c.image = Some(image);
        c.dirty = true;
        c.kind = Kind::Textfield(Textfield { text, style, labels });
        c
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Stores new text and returns the freshly rasterized image; the owning
    /// component applies size/dirty bookkeeping.
    pub(crate) fn set_text(&mut self, text: &str) -> crate::assets::image::Image {
        self.text = text.to_string();
        self.labels.rasterize(&self.text, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::image::Color;
    use crate::assets::text::BlockLabels;
    use crate::components::component::Tag;

    #[test]
    fn component_is_sized_to_its_image() {
        let labels = Arc::new(BlockLabels::new(8));
        let c = Textfield::component("t", "abc", 5, 6, TextStyle::new(16.0, Color::WHITE), labels);
        assert_eq!(c.tag(), Tag::Textfield);
        assert_eq!(c.size(), (24, 16));
        assert_eq!(c.image_key(), "t");
        assert!(c.dirty());
    }
}
