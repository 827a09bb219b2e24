pub mod pointer;
pub mod touch;

use crate::listeners::ListenerSet;
use crate::page::Page;
use exhibit_core::DeviceClass;
use std::rc::Weak;

/// Acquire the listener set for `device`. Released by dropping the set.
pub fn bind_mode(device: DeviceClass, page: &Weak<Page>) -> ListenerSet {
    let set = match device {
        DeviceClass::Desktop => pointer::bind_desktop(page),
        DeviceClass::Mobile => touch::bind_mobile(page),
    };
    log::debug!("[events] {} listeners: {:?}", device.name(), set.events());
    set
}
