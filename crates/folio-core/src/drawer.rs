//! Mobile navigation drawer

pub const CLOSED_GLYPH: &str = "\u{2630}";
pub const OPEN_GLYPH: &str = "\u{2715}";

/// Open/closed state of the narrow-viewport menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileDrawer {
    open: bool,
}

impl MobileDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph for the toggle button
    pub fn glyph(&self) -> &'static str {
        if self.open {
            OPEN_GLYPH
        } else {
            CLOSED_GLYPH
        }
    }

    /// A document click; closes unless it landed on the toggle or the menu
    pub fn handle_outside_click(&mut self, on_toggle: bool, on_menu: bool) {
        if !on_toggle && !on_menu {
            self.close();
        }
    }

    /// Viewport resized; the drawer only exists at or below the breakpoint
    pub fn handle_resize(&mut self, width: f64, breakpoint_px: f64) {
        if width > breakpoint_px {
            self.close();
        }
    }
}
