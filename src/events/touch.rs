use crate::constants::{EV_TOUCH_END, EV_TOUCH_MOVE};
use crate::listeners::{Listener, ListenerSet};
use crate::page::{with_page, Page};
use glam::Vec2;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile set: first-touch tracking and the deferred return to center.
pub fn bind_mobile(page: &Weak<Page>) -> ListenerSet {
    let mut set = ListenerSet::new();
    let Some(strong) = page.upgrade() else {
        return set;
    };
    let window = strong.window().clone();
    drop(strong);

    set.push(wire_touchmove(&window, page.clone()));
    set.push(wire_touchend(&window, page.clone()));
    set
}

fn wire_touchmove(window: &web::Window, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(window, EV_TOUCH_MOVE, move |ev: web::TouchEvent| {
        let first = ev
            .touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
        with_page(&page, |p| {
            let container = p.container_size();
            p.update(|s| s.on_touch_move(first, container));
        });
    })
}

fn wire_touchend(window: &web::Window, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(window, EV_TOUCH_END, move |_: web::TouchEvent| {
        with_page(&page, |p| {
            let reset = p.state().on_touch_end();
            schedule_reset(p.window(), page.clone(), reset.delay_ms());
        });
    })
}

// One-shot timer with no handle kept: a later touch does not cancel it. It
// holds only a weak page handle, so firing after unmount does nothing.
fn schedule_reset(window: &web::Window, page: Weak<Page>, delay_ms: i32) {
    let cb = Closure::once_into_js(move || {
        with_page(&page, |p| {
            p.update(|s| {
                s.reset_position();
                true
            })
        });
    });
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::error!("[touch] setTimeout error: {:?}", e);
    }
}
