use std::fmt;

/// A named, non-textual input event.
///
/// Codes are encoded into the token stream as `//` followed by the code
/// glyph; everything else in the stream is literal text input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventCode {
    PointerDown,
    PointerUp,
    Backspace,
    Delete,
    Enter,
    Escape,
}

impl EventCode {
    #[inline]
    const fn glyph(self) -> char {
        match self {
            EventCode::PointerDown => 'd',
            EventCode::PointerUp => 'u',
            EventCode::Backspace => '<',
            EventCode::Delete => '>',
            EventCode::Enter => '!',
            EventCode::Escape => '?',
        }
    }
}

/// Concatenated encoding of one tick's input events.
///
/// A token mixes `//`-prefixed codes with literal characters, in arrival
/// order: pressing `a`, then the primary mouse button, then `b` encodes as
/// `"a//db"`. The empty token means "nothing happened this tick".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventToken(String);

impl EventToken {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // ── encoding ──────────────────────────────────────────────────────────

    pub fn push_code(&mut self, code: EventCode) {
        self.0.push_str("//");
        self.0.push(code.glyph());
    }

    pub fn push_char(&mut self, ch: char) {
        self.0.push(ch);
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn pointer_down(&self) -> bool {
        self.has(EventCode::PointerDown)
    }

    #[inline]
    pub fn pointer_up(&self) -> bool {
        self.has(EventCode::PointerUp)
    }

    #[inline]
    pub fn backspace(&self) -> bool {
        self.has(EventCode::Backspace)
    }

    #[inline]
    pub fn delete(&self) -> bool {
        self.has(EventCode::Delete)
    }

    #[inline]
    pub fn enter(&self) -> bool {
        self.has(EventCode::Enter)
    }

    /// The escape code doubles as the open-menu marker.
    #[inline]
    pub fn escape(&self) -> bool {
        self.has(EventCode::Escape)
    }

    fn has(&self, code: EventCode) -> bool {
        let glyph = code.glyph();
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '/' && chars.peek() == Some(&'/') {
                chars.next();
                if chars.next() == Some(glyph) {
                    return true;
                }
            }
        }
        false
    }

    /// Literal text input with all codes stripped, in arrival order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '/' && chars.peek() == Some(&'/') {
                chars.next();
                chars.next();
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// `Display` shows the raw stream; useful for the last-event echo.
impl fmt::Display for EventToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_has_no_events() {
        let t = EventToken::new();
        assert!(t.is_empty());
        assert!(!t.pointer_down());
        assert!(!t.escape());
        assert_eq!(t.text(), "");
    }

    #[test]
    fn codes_round_trip() {
        let mut t = EventToken::new();
        t.push_code(EventCode::PointerDown);
        t.push_code(EventCode::PointerUp);
        assert_eq!(t.as_str(), "//d//u");
        assert!(t.pointer_down());
        assert!(t.pointer_up());
        assert!(!t.enter());
    }

    #[test]
    fn literal_d_is_not_a_pointer_code() {
        let t = EventToken::from_raw("dd");
        assert!(!t.pointer_down());
        assert_eq!(t.text(), "dd");
    }

    #[test]
    fn mixed_text_and_codes() {
        let mut t = EventToken::new();
        t.push_char('a');
        t.push_code(EventCode::Escape);
        t.push_char('b');
        assert_eq!(t.as_str(), "a//?b");
        assert!(t.escape());
        assert_eq!(t.text(), "ab");
    }

    #[test]
    fn named_key_codes() {
        let t = EventToken::from_raw("//<//>//!");
        assert!(t.backspace());
        assert!(t.delete());
        assert!(t.enter());
        assert!(!t.escape());
    }
}
