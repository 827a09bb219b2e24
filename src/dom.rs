use crate::constants::{STYLESHEET_ID, TOUCH_PROBE_PROPERTY};
use exhibit_core::Viewport;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Current viewport size and touch capability.
pub fn viewport_snapshot(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let touch_capable =
        js_sys::Reflect::has(window, &JsValue::from_str(TOUCH_PROBE_PROPERTY)).unwrap_or(false);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()), touch_capable)
}

/// Size of the element's bounding box in CSS pixels.
#[inline]
pub fn box_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Find the mount point, creating `<div id=..>` under `<body>` if missing.
pub fn resolve_container(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id(id);
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            log::info!("created #{} container", el.id());
            el
        }
    };
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an HtmlElement: {:?}", id, e)))
}

/// Add the page stylesheet to `<head>` once per document.
pub fn inject_stylesheet(document: &web::Document, css: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
