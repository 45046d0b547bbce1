use crate::scene::SceneCtx;

use super::component::{Component, Kind};

/// Callback fired when an armed button receives pointer-up inside its
/// bounds. The context is the slice of scene state actions may touch:
/// requesting the next scene or stopping the loop.
pub type ButtonAction = Box<dyn FnMut(&mut SceneCtx)>;

/// Armed/action payload for clickable components.
///
/// A button arms on pointer-down over its bounds and fires on the next
/// pointer-up over its bounds while armed; every pointer-up disarms it
/// regardless of position. It owns a centered label sub-component painted
/// one priority layer above the button face.
pub struct Button {
    pub(crate) label: Box<Component>,
    pub(crate) armed: bool,
    pub(crate) action: ButtonAction,
}

impl Button {
    /// Builds a button component with an owned, centered `label`.
    pub fn component(
        id: impl Into<String>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: Component,
        action: ButtonAction,
    ) -> Component {
        let mut c = Component::sized(id, x, y, w, h);
        c.kind = Kind::Button(Button { label: Box::new(label), armed: false, action });
        c.set_priority(0); // lifts the label one layer above
        c.position_attachments();
        c
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub(crate) fn arm(&mut self) {
        self.armed = true;
    }

    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    pub(crate) fn fire(&mut self, ctx: &mut SceneCtx) {
        (self.action)(ctx);
    }

    #[inline]
    pub fn label(&self) -> &Component {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut Component {
        &mut self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn label_is_centered_one_layer_above() {
        let label = Component::sized("b_label", 0, 0, 20, 10);
        let c = Button::component("b", 100, 100, 60, 30, label, Box::new(|_| {}));
        let l = c.as_button().unwrap().label();
        assert_eq!(l.rect(), Rect::new(120, 110, 20, 10));
        assert_eq!(l.priority(), c.priority() + 1);
    }

    #[test]
    fn fire_invokes_the_action() {
        let hits = Rc::new(Cell::new(0));
        let counted = hits.clone();
        let label = Component::new("b_label", 0, 0);
        let mut c = Button::component(
            "b",
            0,
            0,
            10,
            10,
            label,
            Box::new(move |_| counted.set(counted.get() + 1)),
        );
        let mut ctx = SceneCtx::new();
        let b = c.as_button_mut().unwrap();
        b.fire(&mut ctx);
        b.fire(&mut ctx);
        assert_eq!(hits.get(), 2);
    }
}
