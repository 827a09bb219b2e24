use crate::constants::PRIMARY_BUTTON;
use crate::state::PageState;

// Press tracking is desktop-only; every handler is a no-op on mobile.
impl PageState {
    pub fn on_press_down(&mut self, button: i16) -> bool {
        if self.is_mobile() || button != PRIMARY_BUTTON || self.pressed {
            return false;
        }
        self.pressed = true;
        true
    }

    /// Release of any button, anywhere in the window.
    pub fn on_press_up(&mut self) -> bool {
        if self.is_mobile() || !self.pressed {
            return false;
        }
        self.pressed = false;
        true
    }

    /// The button may be released outside the window, so leaving counts
    /// as a release.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.on_press_up()
    }
}
