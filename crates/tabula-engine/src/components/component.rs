use crate::assets::image::{Color, Image};
use crate::coords::{Point, Rect};

use super::button::Button;
use super::dragable::Dragable;
use super::textfield::Textfield;
use super::zone::Zone;

/// Category tag used for registry bucketing and interaction routing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Button,
    Dragable,
    Zone,
    Textfield,
    Other,
}

/// Variant payload attached to a [`Component`].
pub(crate) enum Kind {
    Plain,
    Textfield(Textfield),
    Button(Button),
    Dragable(Dragable),
    Zone(Zone),
}

impl Kind {
    fn tag(&self) -> Tag {
        match self {
            Kind::Plain => Tag::Other,
            Kind::Textfield(_) => Tag::Textfield,
            Kind::Button(_) => Tag::Button,
            Kind::Dragable(_) => Tag::Dragable,
            Kind::Zone(_) => Tag::Zone,
        }
    }
}

/// Base visual entity.
///
/// A component has an id (unique within its manager), a rectangle, a render
/// priority (ascending = painted earlier, i.e. underneath), a visible and an
/// active flag, an optional image reference, and an optional owned highlight
/// overlay. The variant payloads (drag state, occupant slot, armed/action
/// state, label text) live in [`Kind`] and are reached through the `as_*`
/// accessors.
pub struct Component {
    pub(crate) id: String,
    pub(crate) rect: Rect,
    pub(crate) visible: bool,
    pub(crate) active: bool,
    pub(crate) priority: i32,
    /// Registry key of the image to paint. Components with a generated
    /// image (labels, highlight frames) key it by their own id.
    pub(crate) image_id: Option<String>,
    /// Generated image, if this component produces its own pixels.
    pub(crate) image: Option<Image>,
    /// Visual changed since the last registry sync.
    pub(crate) dirty: bool,
    /// Flagged for removal; swept by the manager on the next update.
    pub(crate) removed: bool,
    /// Insertion order, assigned by the manager. Breaks priority ties.
    pub(crate) order: u32,
    pub(crate) highlight: Option<Box<Component>>,
    pub(crate) kind: Kind,
}

impl Component {
    /// A plain 1×1 component at (`x`, `y`).
    pub fn new(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self::sized(id, x, y, 1, 1)
    }

    pub fn sized(id: impl Into<String>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id: id.into(),
            rect: Rect::new(x, y, w, h),
            visible: true,
            active: true,
            priority: 0,
            image_id: None,
            image: None,
            dirty: false,
            removed: false,
            order: 0,
            highlight: None,
            kind: Kind::Plain,
        }
    }

    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.set_priority(priority);
        self
    }

    // ── identity & geometry ───────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.kind.tag()
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.rect.origin()
    }

    /// Moves the component; owned sub-components (highlight, button label)
    /// keep their relative placement.
    pub fn set_location(&mut self, p: Point) {
        self.rect.x = p.x;
        self.rect.y = p.y;
        self.position_attachments();
    }

    #[inline]
    pub fn size(&self) -> (i32, i32) {
        self.rect.size()
    }

    pub fn set_size(&mut self, w: i32, h: i32) {
        self.rect.w = w;
        self.rect.h = h;
        self.position_attachments();
    }

    /// Inclusive rectangle containment test.
    #[inline]
    pub fn collide_point(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    // ── flags ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Sets the render priority; owned sub-components stay one layer above.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
        if let Some(h) = &mut self.highlight {
            h.priority = priority + 1;
        }
        if let Kind::Button(b) = &mut self.kind {
            b.label.priority = priority + 1;
        }
    }

    #[inline]
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Marks the component for removal; the manager unregisters it on the
    /// next update.
    pub fn flag_removed(&mut self) {
        self.removed = true;
    }

    // ── images ────────────────────────────────────────────────────────────

    #[inline]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// Registry key for this component's image: the explicit image id, or
    /// the component's own id for generated images.
    #[inline]
    pub fn image_key(&self) -> &str {
        self.image_id.as_deref().unwrap_or(&self.id)
    }

    #[inline]
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    // ── highlight overlay ─────────────────────────────────────────────────

    /// Builds the owned highlight overlay: a border frame sized to the
    /// component plus `border_width` on every side, centered around it, one
    /// priority layer above, initially invisible.
    ///
    /// Calling this again replaces the previous overlay.
    pub fn create_highlight(&mut self, color: Color, border_width: i32) {
        let frame = self.rect.inflate(border_width);
        let mut hl = Component::sized(
            format!("{}_highlight", self.id),
            frame.x,
            frame.y,
            frame.w,
            frame.h,
        );
        hl.priority = self.priority + 1;
        hl.visible = false;
        hl.image = Some(Image::border(
            frame.w.max(1) as u32,
            frame.h.max(1) as u32,
            border_width.max(0) as u32,
            color,
        ));
        hl.image_id = Some(hl.id.clone());
        hl.dirty = true;
        self.highlight = Some(Box::new(hl));
    }

    /// Toggles the overlay's visibility without recreating it. No-op when
    /// no highlight exists.
    pub fn set_highlight(&mut self, visible: bool) {
        if let Some(h) = &mut self.highlight {
            h.visible = visible;
        }
    }

    #[inline]
    pub fn highlight(&self) -> Option<&Component> {
        self.highlight.as_deref()
    }

    pub(crate) fn highlight_mut(&mut self) -> Option<&mut Component> {
        self.highlight.as_deref_mut()
    }

    // ── variant access ────────────────────────────────────────────────────

    pub fn as_dragable(&self) -> Option<&Dragable> {
        match &self.kind {
            Kind::Dragable(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dragable_mut(&mut self) -> Option<&mut Dragable> {
        match &mut self.kind {
            Kind::Dragable(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_zone(&self) -> Option<&Zone> {
        match &self.kind {
            Kind::Zone(z) => Some(z),
            _ => None,
        }
    }

    pub fn as_zone_mut(&mut self) -> Option<&mut Zone> {
        match &mut self.kind {
            Kind::Zone(z) => Some(z),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            Kind::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            Kind::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Current label text, for textfield components.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            Kind::Textfield(tf) => Some(tf.text()),
            _ => None,
        }
    }

    /// Replaces a textfield's text, re-rasterizes its image, resizes the
    /// component to the new image and marks it dirty. No-op on other
    /// variants.
    pub fn set_text(&mut self, text: &str) {
        let Kind::Textfield(tf) = &mut self.kind else {
            return;
        };
        let image = tf.set_text(text);
        let (w, h) = image.size();
        self.rect.w = w;
        self.rect.h = h;
        self.image = Some(image);
        self.dirty = true;
    }

    /// Re-centers owned sub-components after a move or resize.
    pub(crate) fn position_attachments(&mut self) {
        let owner = self.rect;
        if let Some(h) = &mut self.highlight {
            h.rect.x = owner.x - (h.rect.w - owner.w) / 2;
            h.rect.y = owner.y - (h.rect.h - owner.h) / 2;
        }
        if let Kind::Button(b) = &mut self.kind {
            let label = &mut b.label;
            label.rect.x = owner.x + (owner.w - label.rect.w) / 2;
            label.rect.y = owner.y + (owner.h - label.rect.h) / 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::text::{BlockLabels, TextStyle};
    use std::sync::Arc;

    #[test]
    fn new_defaults_to_unit_size() {
        let c = Component::new("c", 3, 4);
        assert_eq!(c.rect(), Rect::new(3, 4, 1, 1));
        assert!(c.visible());
        assert!(c.active());
        assert_eq!(c.priority(), 0);
    }

    // ── highlight ─────────────────────────────────────────────────────────

    #[test]
    fn highlight_is_centered_and_one_layer_above() {
        let mut c = Component::sized("c", 10, 10, 20, 20).with_priority(5);
        c.create_highlight(Color::WHITE, 3);

        let h = c.highlight().unwrap();
        assert_eq!(h.rect(), Rect::new(7, 7, 26, 26));
        assert_eq!(h.priority(), 6);
        assert!(!h.visible());
        assert_eq!(h.image().unwrap().size(), (26, 26));
    }

    #[test]
    fn set_highlight_toggles_without_recreating() {
        let mut c = Component::sized("c", 0, 0, 10, 10);
        c.create_highlight(Color::WHITE, 2);
        c.set_highlight(true);
        assert!(c.highlight().unwrap().visible());
        c.set_highlight(false);
        assert!(!c.highlight().unwrap().visible());
    }

    #[test]
    fn set_highlight_without_overlay_is_noop() {
        let mut c = Component::new("c", 0, 0);
        c.set_highlight(true);
        assert!(c.highlight().is_none());
    }

    #[test]
    fn moving_owner_moves_highlight() {
        let mut c = Component::sized("c", 0, 0, 10, 10);
        c.create_highlight(Color::WHITE, 2);
        c.set_location(Point::new(100, 50));
        let h = c.highlight().unwrap();
        assert_eq!(h.rect(), Rect::new(98, 48, 14, 14));
    }

    #[test]
    fn priority_change_keeps_highlight_above() {
        let mut c = Component::sized("c", 0, 0, 10, 10);
        c.create_highlight(Color::WHITE, 1);
        c.set_priority(9);
        assert_eq!(c.highlight().unwrap().priority(), 10);
    }

    // ── textfield ─────────────────────────────────────────────────────────

    #[test]
    fn set_text_resizes_and_marks_dirty() {
        let labels = Arc::new(BlockLabels::new(8));
        let mut tf = crate::components::textfield::Textfield::component(
            "tf",
            "ab",
            0,
            0,
            TextStyle::default(),
            labels,
        );
        let before = tf.size();
        tf.clear_dirty();
        tf.set_text("abcd");
        assert!(tf.dirty());
        assert_eq!(tf.size().0, before.0 * 2);
        assert_eq!(tf.text(), Some("abcd"));
    }

    #[test]
    fn set_text_on_plain_component_is_noop() {
        let mut c = Component::new("c", 0, 0);
        c.set_text("hello");
        assert!(c.text().is_none());
        assert!(!c.dirty());
    }
}
