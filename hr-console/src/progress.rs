//! Progress/status rendering
//!
//! A percentage as a value, with the formatted width and label a view
//! writes into its bar and text targets. Views without those targets
//! simply don't render; that's a safe no-op, not an error.

/// A completion percentage ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress(u8);

impl Progress {
    /// The input is trusted to be 0–100; anything above is clamped so a
    /// misbehaving backend can't stretch the bar.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }

    /// Label text for the bar and the adjacent status element.
    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }

    /// CSS width for the bar element.
    pub fn width(&self) -> String {
        format!("{}%", self.0)
    }
}
