use std::collections::BTreeMap;

use crate::assets::image::Image;
use crate::coords::Point;
use crate::input::EventToken;
use crate::scene::SceneCtx;

use super::component::{Component, Tag};
use super::dragable::ZoneLink;

/// One paintable entry of the rendering context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    pub image_id: String,
    pub location: Point,
    pub priority: i32,
}

/// Stable paint-order key.
///
/// Ordering rules:
/// 1) `priority`: ascending (painted earlier = underneath)
/// 2) `order`: registration order for equal priorities
/// 3) `layer`: a component's owned overlays sort after the component itself
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    priority: i32,
    order: u32,
    layer: u8,
}

/// Owns every component of one scene and resolves pointer interaction.
///
/// Components live in a two-level store: bucketed by [`Tag`], then ordered
/// by registration within each bucket. Buttons and dragables are therefore
/// hit-tested in registration order, exactly as registered.
///
/// The *dragable floor* is the priority every registered dragable is held
/// at. It is explicit manager state: whenever a component registers at or
/// above the floor, the floor moves to `priority + 1` and all dragables are
/// reset to it — dragables always paint above everything registered at or
/// below them, regardless of registration order.
pub struct ComponentManager {
    buckets: BTreeMap<Tag, Vec<Component>>,
    dragable_floor: i32,
    next_order: u32,
}

impl ComponentManager {
    pub fn new() -> Self {
        Self { buckets: BTreeMap::new(), dragable_floor: 0, next_order: 0 }
    }

    // ── registry ──────────────────────────────────────────────────────────

    /// Inserts a component into its tag bucket and maintains the dragable
    /// floor.
    pub fn register(&mut self, mut component: Component) {
        debug_assert!(
            self.get(component.id()).is_none(),
            "duplicate component id: {}",
            component.id()
        );

        if component.tag() == Tag::Dragable {
            component.set_priority(self.dragable_floor);
        }
        component.order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        let priority = component.priority();
        self.buckets.entry(component.tag()).or_default().push(component);

        if priority >= self.dragable_floor {
            self.dragable_floor = priority + 1;
            if let Some(dragables) = self.buckets.get_mut(&Tag::Dragable) {
                for d in dragables.iter_mut() {
                    d.set_priority(self.dragable_floor);
                }
            }
        }
    }

    /// Removes the component with `id` from its tag bucket.
    pub fn unregister(&mut self, id: &str) {
        for bucket in self.buckets.values_mut() {
            bucket.retain(|c| c.id() != id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.buckets.values().flat_map(|b| b.iter()).find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.buckets.values_mut().flat_map(|b| b.iter_mut()).find(|c| c.id() == id)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.buckets.values().flat_map(|b| b.iter())
    }

    /// Components of one category, in registration order.
    pub fn bucket(&self, tag: Tag) -> &[Component] {
        self.buckets.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn dragable_floor(&self) -> i32 {
        self.dragable_floor
    }

    // ── per-tick update ───────────────────────────────────────────────────

    /// Runs one tick of the interaction protocol.
    ///
    /// Sweeps removal flags, collects `(image id, image)` pairs for every
    /// dirty generated visual (clearing the dirty flags), moves the dragged
    /// component with the pointer, then resolves pointer-down (button
    /// arming, dragable pick-up) and pointer-up (button firing, drop
    /// resolution) when interaction is enabled.
    pub fn update(
        &mut self,
        interaction_enabled: bool,
        token: &EventToken,
        pointer: Point,
        ctx: &mut SceneCtx,
    ) -> Vec<(String, Image)> {
        let mut synced = Vec::new();

        for bucket in self.buckets.values_mut() {
            bucket.retain(|c| !c.is_removed());
            for c in bucket.iter_mut() {
                collect_dirty(c, &mut synced);
                if c.as_dragable().is_some_and(|d| d.dragging()) {
                    // Drag follows the pointer, centered on it.
                    let (w, h) = c.size();
                    c.set_location(Point::new(pointer.x - w / 2, pointer.y - h / 2));
                }
            }
        }

        if interaction_enabled && token.pointer_down() {
            self.pointer_down(pointer);
        }
        if interaction_enabled && token.pointer_up() {
            self.pointer_up(pointer, ctx);
        }

        synced
    }

    /// Arms the first hit button, else picks up the first hit dragable.
    fn pointer_down(&mut self, pointer: Point) {
        if let Some(buttons) = self.buckets.get_mut(&Tag::Button) {
            for c in buttons.iter_mut() {
                if c.collide_point(pointer) {
                    if let Some(b) = c.as_button_mut() {
                        b.arm();
                        log::debug!("armed button '{}'", c.id());
                    }
                    return;
                }
            }
        }

        let mut lit_zones: Vec<String> = Vec::new();
        if let Some(dragables) = self.buckets.get_mut(&Tag::Dragable) {
            for c in dragables.iter_mut() {
                let hit = c.active() && c.collide_point(pointer);
                let Some(d) = c.as_dragable_mut() else { continue };
                if d.is_locked() || !hit {
                    continue;
                }
                d.dragging = true;
                lit_zones = d.zone_ids().map(str::to_string).collect();
                let lifted = c.priority() + 1;
                c.set_priority(lifted);
                log::debug!("picked up dragable '{}'", c.id());
                break;
            }
        }
        for zone_id in lit_zones {
            if let Some(zone) = self.get_mut(&zone_id) {
                zone.set_highlight(true);
            }
        }
    }

    /// Fires armed hit buttons (disarming all) and resolves the drop of the
    /// dragged component.
    fn pointer_up(&mut self, pointer: Point, ctx: &mut SceneCtx) {
        if let Some(buttons) = self.buckets.get_mut(&Tag::Button) {
            for c in buttons.iter_mut() {
                let hit = c.collide_point(pointer);
                let id = c.id().to_string();
                if let Some(b) = c.as_button_mut() {
                    if hit && b.is_armed() {
                        log::debug!("fired button '{id}'");
                        b.fire(ctx);
                    }
                    // Disarm unconditionally: no stuck-armed state.
                    b.disarm();
                }
            }
        }

        struct PendingDrop {
            index: usize,
            id: String,
            location: Point,
            size: (i32, i32),
            zones: Vec<ZoneLink>,
        }

        let mut drops: Vec<PendingDrop> = Vec::new();
        if let Some(dragables) = self.buckets.get(&Tag::Dragable) {
            for (index, c) in dragables.iter().enumerate() {
                let Some(d) = c.as_dragable() else { continue };
                if d.is_locked() || !d.dragging() || !c.collide_point(pointer) {
                    continue;
                }
                drops.push(PendingDrop {
                    index,
                    id: c.id().to_string(),
                    location: c.location(),
                    size: c.size(),
                    zones: d.zones().to_vec(),
                });
            }
        }

        for drop in drops {
            // Walk registered zones in registration order, clearing
            // highlights as visited. The first zone containing the
            // dragable's current location is the landing zone; the walk
            // stops there.
            let mut landing: Option<(Point, bool)> = None;
            for link in &drop.zones {
                let Some(zone) = self.get_mut(&link.zone_id) else { continue };
                zone.set_highlight(false);
                if zone.collide_point(drop.location) {
                    let zr = zone.rect();
                    let resting = Point::new(
                        zr.x + (zr.w - drop.size.0) / 2,
                        zr.y + (zr.h - drop.size.1) / 2,
                    );
                    if let Some(z) = zone.as_zone_mut() {
                        z.set_occupant(drop.id.clone());
                    }
                    log::debug!("dropped '{}' into zone '{}'", drop.id, link.zone_id);
                    landing = Some((resting, link.locks));
                    break;
                }
            }

            if let Some(dragables) = self.buckets.get_mut(&Tag::Dragable) {
                if let Some(c) = dragables.get_mut(drop.index) {
                    if let Some(d) = c.as_dragable_mut() {
                        if let Some((resting, locks)) = landing {
                            if locks {
                                d.locked = true;
                            }
                            d.anchor = resting;
                        }
                        d.dragging = false;
                        let anchor = d.anchor;
                        c.set_location(anchor);
                        let restored = c.priority() - 1;
                        c.set_priority(restored);
                    }
                }
            }
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Paint-ordered `(image id, location, priority)` entries for every
    /// visible component, including visible highlight overlays and button
    /// labels. Ascending priority paints first (underneath); ties keep
    /// registration order.
    pub fn rendering_context(&self) -> Vec<RenderEntry> {
        let mut keyed: Vec<(SortKey, RenderEntry)> = Vec::new();
        for c in self.components() {
            if !c.visible() {
                continue;
            }
            keyed.push((
                SortKey { priority: c.priority(), order: c.order, layer: 0 },
                entry_for(c),
            ));
            if let Some(h) = c.highlight() {
                if h.visible() {
                    keyed.push((
                        SortKey { priority: h.priority(), order: c.order, layer: 1 },
                        entry_for(h),
                    ));
                }
            }
            if let Some(b) = c.as_button() {
                let label = b.label();
                if label.visible() {
                    keyed.push((
                        SortKey { priority: label.priority(), order: c.order, layer: 2 },
                        entry_for(label),
                    ));
                }
            }
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, entry)| entry).collect()
    }
}

impl Default for ComponentManager {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_for(c: &Component) -> RenderEntry {
    RenderEntry { image_id: c.image_key().to_string(), location: c.location(), priority: c.priority() }
}

/// Collects `(image id, image)` pairs for a dirty component and its owned
/// sub-components, clearing the dirty flags.
fn collect_dirty(c: &mut Component, out: &mut Vec<(String, Image)>) {
    if c.dirty() {
        if let Some(image) = c.image() {
            out.push((c.image_key().to_string(), image.clone()));
        }
        c.clear_dirty();
    }
    if let Some(h) = c.highlight_mut() {
        collect_dirty(h, out);
    }
    if let Some(b) = c.as_button_mut() {
        collect_dirty(b.label_mut(), out);
    }
}
