//! On-screen entities and their registry.
//!
//! Responsibilities:
//! - the base `Component` (identity, rect, visibility, priority, highlight)
//! - the typed variants: dragables, drop zones, buttons, textfields
//! - the `ComponentManager`: registration, pointer interaction resolution,
//!   and the priority-ordered rendering context
//!
//! Variants are routed by their category [`component::Tag`], never by
//! runtime type inspection.

pub mod button;
pub mod component;
pub mod dragable;
pub mod manager;
pub mod textfield;
pub mod zone;
