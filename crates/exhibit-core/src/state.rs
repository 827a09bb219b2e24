//! Transient page state: tracked position, device class, press flag and
//! viewport height. One instance per mounted page; nothing survives a reload.

use crate::constants::{CENTER_PERCENT, MOBILE_BREAKPOINT_PX, TOUCH_RESET_DELAY_MS};
use crate::viewport::{DeviceClass, Viewport};
use glam::Vec2;
use std::time::Duration;

/// Behavioural knobs. `Default` mirrors the constants table.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub mobile_breakpoint_px: f64,
    pub touch_reset_delay: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            touch_reset_delay: Duration::from_millis(TOUCH_RESET_DELAY_MS as u64),
        }
    }
}

#[inline]
pub fn center() -> Vec2 {
    Vec2::splat(CENTER_PERCENT)
}

#[derive(Clone, Debug)]
pub struct PageState {
    pub config: PageConfig,
    pub(crate) position: Vec2,
    pub(crate) device: DeviceClass,
    pub(crate) pressed: bool,
    pub(crate) viewport_height: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl PageState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            position: center(),
            device: DeviceClass::Desktop,
            pressed: false,
            viewport_height: 0,
        }
    }

    /// Tracked position in percent of the container box.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Re-classify after mount or a resize. Returns true when the device
    /// class flipped and the caller must rebind listeners.
    ///
    /// Position and press flag are left as they are across a flip.
    pub fn on_resize(&mut self, viewport: &Viewport) -> bool {
        let device = DeviceClass::classify(viewport, self.config.mobile_breakpoint_px);
        self.viewport_height = viewport.height_px();
        if device == self.device {
            return false;
        }
        log::debug!(
            "[viewport] {} -> {} (width={:.0}, touch={})",
            self.device.name(),
            device.name(),
            viewport.width,
            viewport.touch_capable
        );
        self.device = device;
        true
    }
}
