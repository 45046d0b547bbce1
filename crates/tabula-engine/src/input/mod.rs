//! Input plumbing.
//!
//! Responsibilities:
//! - the per-tick event token: a compact textual encoding of this tick's
//!   input events, shared between the host's poller and the core
//! - the `InputSource` seam the host implements

mod source;
mod token;

pub use source::{InputSample, InputSource};
pub use token::{EventCode, EventToken};
