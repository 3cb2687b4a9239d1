//! Icon vocabulary of the display server
//!
//! Backends handle the icons their hardware can show and report
//! [`IconOutcome::Unhandled`] for the rest, letting the server fall back
//! to a generic character rendering.

/// Symbolic icons a server may ask a backend to place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Completely filled cell
    BlockFilled,
    /// Heartbeat indicator, open phase
    HeartOpen,
    /// Heartbeat indicator, filled phase
    HeartFilled,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CheckboxOff,
    CheckboxOn,
    /// Partially selected checkbox
    CheckboxGray,
    SelectorAtLeft,
    SelectorAtRight,
    Ellipsis,
    Stop,
    Pause,
    Play,
    PrevTrack,
    NextTrack,
    Record,
}

/// Whether a backend rendered an icon itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum IconOutcome {
    /// The backend drew the icon
    Handled,
    /// The server core must render a fallback
    Unhandled,
}
