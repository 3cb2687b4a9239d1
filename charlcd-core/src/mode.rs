//! Render-mode rules for the programmable glyph slots
//!
//! The rewritable glyph slots can serve exactly one purpose at a time:
//! plain text, vertical bars, horizontal bars, or big numbers. A driver
//! tracks the active mode and consults [`RenderMode::request`] before
//! entering a special mode, so the "no two special modes at once" rule is
//! one auditable check instead of scattered flag comparisons.

/// Active interpretation of the programmable glyph slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Plain text; slots are free
    #[default]
    Standard,
    /// Slots hold the vertical-bar glyph set
    VBar,
    /// Slots hold the horizontal-bar glyph set
    HBar,
    /// Slots hold big-number segments (not every module supports this)
    BigNum,
}

/// Outcome of asking to enter a special render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// The requested mode is already active; slots are programmed
    AlreadyActive,
    /// Entering from `Standard`; the caller must program its glyph set
    Program,
    /// A different special mode holds the slots; the request must be
    /// dropped without side effects
    Rejected,
}

impl RenderMode {
    /// Validate a transition into `wanted`
    ///
    /// The only way back to `Standard` is a screen clear, so requesting
    /// a special mode while a different one is active is rejected.
    pub fn request(self, wanted: RenderMode) -> ModeTransition {
        if self == wanted {
            ModeTransition::AlreadyActive
        } else if self == RenderMode::Standard {
            ModeTransition::Program
        } else {
            ModeTransition::Rejected
        }
    }
}
