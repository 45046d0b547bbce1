use crate::coords::Point;

use super::component::{Component, Kind};

/// A drop-target registration: where the dragable may land, and whether
/// landing there locks it in place for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLink {
    pub zone_id: String,
    pub locks: bool,
}

/// Drag state payload for components that can be picked up, moved with the
/// pointer and dropped into zones.
///
/// Zones are linked by id only; the owning manager resolves them. The
/// anchor is the last committed resting position — a drop outside every
/// registered zone returns the dragable there.
pub struct Dragable {
    pub(crate) dragging: bool,
    pub(crate) locked: bool,
    pub(crate) anchor: Point,
    pub(crate) zones: Vec<ZoneLink>,
}

impl Dragable {
    /// Builds a dragable component at (`x`, `y`) with the given size.
    pub fn component(id: impl Into<String>, x: i32, y: i32, w: i32, h: i32) -> Component {
        let mut c = Component::sized(id, x, y, w, h);
        c.kind = Kind::Dragable(Dragable {
            dragging: false,
            locked: false,
            anchor: Point::new(x, y),
            zones: Vec::new(),
        });
        c
    }

    /// Registers a drop zone by id. Duplicate ids are ignored; registration
    /// order decides drop-resolution order.
    pub fn register_zone(&mut self, zone_id: impl Into<String>, locks: bool) {
        let zone_id = zone_id.into();
        if !self.zones.iter().any(|z| z.zone_id == zone_id) {
            self.zones.push(ZoneLink { zone_id, locks });
        }
    }

    pub fn unregister_zone(&mut self, zone_id: &str) {
        self.zones.retain(|z| z.zone_id != zone_id);
    }

    #[inline]
    pub fn zones(&self) -> &[ZoneLink] {
        &self.zones
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| z.zone_id.as_str())
    }

    #[inline]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// `true` once the dragable has been locked by a drop; locked dragables
    /// never pick up again.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Last committed resting position.
    #[inline]
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_starts_anchored_at_origin_location() {
        let c = Dragable::component("card", 30, 40, 100, 150);
        let d = c.as_dragable().unwrap();
        assert_eq!(d.anchor(), Point::new(30, 40));
        assert!(!d.dragging());
        assert!(!d.is_locked());
    }

    #[test]
    fn zone_registration_is_ordered_and_deduplicated() {
        let mut c = Dragable::component("card", 0, 0, 10, 10);
        let d = c.as_dragable_mut().unwrap();
        d.register_zone("stack", true);
        d.register_zone("hand", false);
        d.register_zone("stack", false); // ignored
        assert_eq!(d.zone_ids().collect::<Vec<_>>(), ["stack", "hand"]);
        assert!(d.zones()[0].locks);

        d.unregister_zone("stack");
        assert_eq!(d.zone_ids().collect::<Vec<_>>(), ["hand"]);
    }
}
