use super::component::{Component, Kind};

/// Drop-target payload: a single-slot area a dragable can land in.
///
/// The occupant is a non-owning by-id link resolved through the manager; a
/// later drop overwrites it.
#[derive(Debug, Default)]
pub struct Zone {
    pub(crate) occupant: Option<String>,
}

impl Zone {
    /// Builds a zone component at (`x`, `y`) with the given size.
    pub fn component(id: impl Into<String>, x: i32, y: i32, w: i32, h: i32) -> Component {
        let mut c = Component::sized(id, x, y, w, h);
        c.kind = Kind::Zone(Zone::default());
        c
    }

    #[inline]
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    pub fn set_occupant(&mut self, id: impl Into<String>) {
        self.occupant = Some(id.into());
    }

    pub fn clear_occupant(&mut self) {
        self.occupant = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slot_overwrites() {
        let mut z = Zone::default();
        assert!(z.occupant().is_none());
        z.set_occupant("card_a");
        z.set_occupant("card_b");
        assert_eq!(z.occupant(), Some("card_b"));
        z.clear_occupant();
        assert!(z.occupant().is_none());
    }
}
