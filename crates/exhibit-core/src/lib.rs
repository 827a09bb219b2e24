pub mod bindings;
pub mod constants;
pub mod pointer;
mod press;
pub mod scene;
pub mod state;
pub mod style;
pub mod viewport;

// Static stylesheet for the layer classes emitted by `scene`
pub static PAGE_CSS: &str = include_str!("../assets/page.css");

pub use bindings::ModeBindings;
pub use pointer::{percent_of, DeferredReset};
pub use scene::{compose, Content, Fit, ImageRef, Layer, LayerId, Scene, Sizing, Wordmark};
pub use state::{PageConfig, PageState};
pub use style::Style;
pub use viewport::{DeviceClass, Viewport};
