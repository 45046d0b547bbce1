//! Integer screen-space geometry.
//!
//! Responsibilities:
//! - 2D point arithmetic for locations and pointer positions
//! - rectangles with inclusive containment (drop targets, button bounds)

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
