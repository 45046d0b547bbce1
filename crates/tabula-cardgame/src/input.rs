//! Scripted input source for headless runs.

use std::collections::VecDeque;

use tabula_engine::coords::Point;
use tabula_engine::input::{EventCode, EventToken, InputSample, InputSource};

/// Plays back a fixed list of per-tick samples, then reports "not running".
///
/// Stands in for real event polling: the demo binary and the end-to-end
/// tests drive the scene manager with it.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<InputSample>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: EventToken, pointer: Point) {
        self.ticks.push_back(InputSample { running: true, token, pointer });
    }

    /// A tick with no events.
    pub fn quiet(&mut self, pointer: Point) {
        self.push(EventToken::new(), pointer);
    }

    /// Primary button pressed at `pointer`.
    pub fn press(&mut self, pointer: Point) {
        self.code(EventCode::PointerDown, pointer);
    }

    /// Primary button released at `pointer`.
    pub fn release(&mut self, pointer: Point) {
        self.code(EventCode::PointerUp, pointer);
    }

    /// Press + release on consecutive ticks.
    pub fn click(&mut self, pointer: Point) {
        self.press(pointer);
        self.release(pointer);
    }

    pub fn code(&mut self, code: EventCode, pointer: Point) {
        let mut token = EventToken::new();
        token.push_code(code);
        self.push(token, pointer);
    }

    /// One tick of literal text input.
    pub fn text(&mut self, text: &str, pointer: Point) {
        let mut token = EventToken::new();
        for ch in text.chars() {
            token.push_char(ch);
        }
        self.push(token, pointer);
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSample {
        self.ticks.pop_front().unwrap_or_default() // default: running = false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_back_then_stops() {
        let mut script = ScriptedInput::new();
        script.click(Point::new(5, 5));
        script.quiet(Point::new(9, 9));

        let a = script.poll();
        assert!(a.running && a.token.pointer_down());
        let b = script.poll();
        assert!(b.running && b.token.pointer_up());
        let c = script.poll();
        assert!(c.running && c.token.is_empty());
        assert_eq!(c.pointer, Point::new(9, 9));

        assert!(!script.poll().running);
        assert!(!script.poll().running);
    }

    #[test]
    fn text_ticks_carry_literals() {
        let mut script = ScriptedInput::new();
        script.text("hi", Point::zero());
        assert_eq!(script.poll().token.text(), "hi");
    }
}
