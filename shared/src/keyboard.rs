//! Keyboard handling for accordion headers.
//!
//! `Enter` and `Space` toggle the focused section. The arrow keys, `Home`
//! and `End` move focus between the headers of one widget without touching
//! open state.

/// Keys a header reacts to. Everything else keeps its default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowDown,
    ArrowUp,
    Home,
    End,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Key::Enter),
            " " => Some(Key::Space),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowUp" => Some(Key::ArrowUp),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            _ => None,
        }
    }

    pub fn command(&self) -> Command {
        match self {
            Key::Enter | Key::Space => Command::Toggle,
            Key::ArrowDown => Command::Focus(FocusTarget::Next),
            Key::ArrowUp => Command::Focus(FocusTarget::Previous),
            Key::Home => Command::Focus(FocusTarget::First),
            Key::End => Command::Focus(FocusTarget::Last),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Focus(FocusTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Next,
    Previous,
    First,
    Last,
}

impl FocusTarget {
    /// Index of the header to focus among `len` headers.
    ///
    /// `Next` and `Previous` wrap around. A `current` that is not among the
    /// headers behaves as if it sat just outside the list, so `Next` lands
    /// on the first header and `Previous` on the last. Returns `None` only
    /// when there is nothing to focus.
    pub fn resolve(&self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let index = match (self, current) {
            (FocusTarget::First, _) => 0,
            (FocusTarget::Last, _) => last,
            (FocusTarget::Next, Some(i)) if i < last => i + 1,
            (FocusTarget::Next, _) => 0,
            (FocusTarget::Previous, Some(i)) if i > 0 && i <= last => i - 1,
            (FocusTarget::Previous, _) => last,
        };
        Some(index)
    }
}
