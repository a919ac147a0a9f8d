//! Horizontal scrolling for names wider than the status line.
//!
//! On every display refresh the text moves left by [`STEP_PX`]. Once it has
//! scrolled completely past its own width it re-enters from the right edge.

/// Glyph advance of the status font.
pub const GLYPH_WIDTH_PX: i32 = 6;

/// Visible width of the status line.
pub const VIEWPORT_WIDTH_PX: i32 = 128;

/// Scroll per refresh.
pub const STEP_PX: i32 = 5;

/// Scroll state of one line of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marquee {
    scroll: i32,
    text_width: i32,
}

impl Marquee {
    /// Start over for a text of `chars` characters.
    pub fn reset(&mut self, chars: usize) {
        let chars = i32::try_from(chars).unwrap_or(i32::MAX);
        self.text_width = chars.saturating_mul(GLYPH_WIDTH_PX);
        self.scroll = 0;
    }

    /// `true` when the text does not fit and therefore scrolls.
    pub fn scrolls(&self) -> bool {
        self.text_width > VIEWPORT_WIDTH_PX
    }

    /// X position to draw the text at for the current refresh.
    pub fn x(&self) -> i32 {
        self.scroll.saturating_neg()
    }

    /// Move one step; call once per display refresh.
    pub fn tick(&mut self) {
        if !self.scrolls() {
            return;
        }
        self.scroll = self.scroll.saturating_add(STEP_PX);
        if self.scroll > self.text_width {
            self.scroll = VIEWPORT_WIDTH_PX.saturating_neg();
        }
    }
}
