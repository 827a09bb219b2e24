#![cfg(target_arch = "wasm32")]
use exhibit_core::PageConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod listeners;
mod page;
mod view;

use page::Page;

thread_local! {
    // The page mounted by `start` or `mount_exhibit`; taking it out unmounts.
    static MOUNTED: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("exhibit-web starting");

    if let Err(e) = init(constants::CONTAINER_ID) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(container_id: &str) -> anyhow::Result<()> {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(page) = previous {
        page.unmount();
    }
    let page = Page::mount(container_id, PageConfig::default())?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(page));
    Ok(())
}

/// Mount onto the element with `container_id` (created when missing),
/// replacing any page mounted earlier.
#[wasm_bindgen]
pub fn mount_exhibit(container_id: &str) -> Result<(), JsValue> {
    let id = if container_id.is_empty() {
        constants::CONTAINER_ID
    } else {
        container_id
    };
    init(id).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Detach every listener and clear the container.
#[wasm_bindgen]
pub fn unmount_exhibit() {
    if let Some(page) = MOUNTED.with(|m| m.borrow_mut().take()) {
        page.unmount();
    }
}
