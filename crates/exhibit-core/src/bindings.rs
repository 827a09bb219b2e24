//! Scoped ownership of the per-mode listener set.
//!
//! The bound value `B` is expected to release its resources on drop (the web
//! frontend uses a set of listener guards). `ModeBindings` only decides when
//! a set is dropped and when a new one is acquired.

use crate::viewport::DeviceClass;

#[derive(Debug)]
pub struct ModeBindings<B> {
    bound: Option<(DeviceClass, B)>,
}

impl<B> Default for ModeBindings<B> {
    fn default() -> Self {
        Self { bound: None }
    }
}

impl<B> ModeBindings<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device class of the currently bound set, if any.
    pub fn bound_device(&self) -> Option<DeviceClass> {
        self.bound.as_ref().map(|(d, _)| *d)
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Make sure the set bound for `device` is the active one.
    ///
    /// The previous set is dropped before `bind` runs, so the two sets never
    /// coexist. Returns true when a (re)bind happened.
    pub fn sync(&mut self, device: DeviceClass, bind: impl FnOnce(DeviceClass) -> B) -> bool {
        if self.bound_device() == Some(device) {
            return false;
        }
        self.release();
        log::debug!("[bindings] acquire {} listeners", device.name());
        self.bound = Some((device, bind(device)));
        true
    }

    pub fn release(&mut self) {
        if let Some((device, set)) = self.bound.take() {
            log::debug!("[bindings] release {} listeners", device.name());
            drop(set);
        }
    }
}
