//! Asset handling.
//!
//! Responsibilities:
//! - cheap shareable RGBA image handles and procedural bitmaps
//! - label rasterization behind a trait seam (fontdue or a block fallback)
//! - the per-scene registry of loaded and generated images/sounds

pub mod image;
pub mod registry;
pub mod text;
