//! Viewport snapshot and the desktop/mobile classification derived from it.

/// Environment facts sampled on mount and on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub touch_capable: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64, touch_capable: bool) -> Self {
        Self {
            width,
            height,
            touch_capable,
        }
    }

    /// Height in whole pixels. Non-finite or negative heights count as zero.
    pub fn height_px(&self) -> u32 {
        if self.height.is_finite() && self.height > 0.0 {
            self.height.round().min(u32::MAX as f64) as u32
        } else {
            0
        }
    }
}

/// Which layout and listener set is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Narrow viewports and anything that reports touch input are mobile.
    pub fn classify(viewport: &Viewport, breakpoint_px: f64) -> Self {
        if viewport.width <= breakpoint_px || viewport.touch_capable {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Mobile => "mobile",
        }
    }
}
