// DOM hooks and event names used by the web frontend.

// Mount point and injected stylesheet
pub const CONTAINER_ID: &str = "exhibit";
pub const STYLESHEET_ID: &str = "exhibit-styles";
pub const ROOT_CLASS: &str = "exhibit";
pub const LAYER_ATTR: &str = "data-layer";

// Mount-scoped
pub const EV_RESIZE: &str = "resize";

// Desktop listener set
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_MOUSE_DOWN: &str = "mousedown";
pub const EV_MOUSE_UP: &str = "mouseup";
pub const EV_MOUSE_LEAVE: &str = "mouseleave"; // bound on <html>, fires when leaving the window

// Mobile listener set
pub const EV_TOUCH_MOVE: &str = "touchmove";
pub const EV_TOUCH_END: &str = "touchend";

// Presence of this property on `window` marks a touch-capable device
pub const TOUCH_PROBE_PROPERTY: &str = "ontouchstart";
