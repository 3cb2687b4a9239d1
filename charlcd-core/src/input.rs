//! Logical keys reported by display modules with front-panel buttons

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
    Enter,
}

impl Key {
    /// Key name as the server protocol spells it
    pub const fn name(self) -> &'static str {
        match self {
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Escape => "Escape",
            Key::Enter => "Enter",
        }
    }
}
