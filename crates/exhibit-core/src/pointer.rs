use crate::state::{center, PageState};
use glam::Vec2;
use std::time::Duration;

/// Map a client-space point to percent of the container box.
///
/// Returns `None` while the box has no usable size (before layout settles)
/// or the point itself is not finite. Results are not clamped: a point
/// outside the box maps outside [0, 100].
#[inline]
pub fn percent_of(client: Vec2, container: Vec2) -> Option<Vec2> {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if !usable(container.x) || !usable(container.y) || !client.is_finite() {
        return None;
    }
    Some(client / container * 100.0)
}

/// Returned by a touch end; the host must call
/// [`PageState::reset_position`] once `delay` has elapsed.
///
/// There is no cancellation handle. A touch that starts inside the delay
/// window is still snapped back when the timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredReset {
    pub delay: Duration,
}

impl DeferredReset {
    pub fn delay_ms(&self) -> i32 {
        self.delay.as_millis().min(i32::MAX as u128) as i32
    }
}

impl PageState {
    /// Desktop pointer move. Ignored on mobile and for unusable boxes.
    pub fn on_pointer_move(&mut self, client: Vec2, container: Vec2) -> bool {
        if self.is_mobile() {
            return false;
        }
        self.track(client, container)
    }

    /// Mobile touch move, fed with the first active touch point.
    pub fn on_touch_move(&mut self, first_touch: Option<Vec2>, container: Vec2) -> bool {
        match first_touch {
            Some(client) => self.track(client, container),
            None => false,
        }
    }

    pub fn on_touch_end(&self) -> DeferredReset {
        DeferredReset {
            delay: self.config.touch_reset_delay,
        }
    }

    pub fn reset_position(&mut self) {
        self.position = center();
    }

    fn track(&mut self, client: Vec2, container: Vec2) -> bool {
        match percent_of(client, container) {
            Some(pos) => {
                self.position = pos;
                true
            }
            None => false,
        }
    }
}
