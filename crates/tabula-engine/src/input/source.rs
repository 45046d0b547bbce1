use crate::coords::Point;

use super::token::EventToken;

/// Everything the input collaborator delivers for one tick.
#[derive(Debug, Clone, Default)]
pub struct InputSample {
    /// `false` when the host wants the loop to end (window closed, script
    /// exhausted).
    pub running: bool,
    /// This tick's encoded events; empty when nothing happened.
    pub token: EventToken,
    /// Current pointer position.
    pub pointer: Point,
}

impl InputSample {
    /// A quiet tick: running, no events, pointer at `pointer`.
    pub fn quiet(pointer: Point) -> Self {
        Self { running: true, token: EventToken::new(), pointer }
    }
}

/// The seam to the host's input polling.
///
/// Implementations decode whatever the platform delivers (window events, a
/// script, a replay file) into one [`InputSample`] per tick.
pub trait InputSource {
    fn poll(&mut self) -> InputSample;
}
