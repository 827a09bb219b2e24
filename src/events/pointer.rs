use crate::constants::{EV_MOUSE_DOWN, EV_MOUSE_LEAVE, EV_MOUSE_MOVE, EV_MOUSE_UP};
use crate::listeners::{Listener, ListenerSet};
use crate::page::{with_page, Page};
use glam::Vec2;
use std::rc::Weak;
use web_sys as web;

/// Desktop set: pointer tracking plus press darkening.
pub fn bind_desktop(page: &Weak<Page>) -> ListenerSet {
    let mut set = ListenerSet::new();
    let Some(strong) = page.upgrade() else {
        return set;
    };
    let window = strong.window().clone();
    drop(strong);

    set.push(wire_mousemove(&window, page.clone()));
    set.push(wire_mousedown(&window, page.clone()));
    set.push(wire_mouseup(&window, page.clone()));
    match window.document().and_then(|d| d.document_element()) {
        Some(root) => set.push(wire_mouseleave(&root, page.clone())),
        None => log::error!("[pointer] no document element for {}", EV_MOUSE_LEAVE),
    }
    set
}

fn wire_mousemove(window: &web::Window, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(window, EV_MOUSE_MOVE, move |ev: web::MouseEvent| {
        with_page(&page, |p| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let container = p.container_size();
            p.update(|s| s.on_pointer_move(client, container));
        });
    })
}

fn wire_mousedown(window: &web::Window, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(window, EV_MOUSE_DOWN, move |ev: web::MouseEvent| {
        let button = ev.button();
        with_page(&page, |p| p.update(|s| s.on_press_down(button)));
    })
}

fn wire_mouseup(window: &web::Window, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(window, EV_MOUSE_UP, move |_: web::MouseEvent| {
        with_page(&page, |p| p.update(|s| s.on_press_up()));
    })
}

fn wire_mouseleave(root: &web::Element, page: Weak<Page>) -> anyhow::Result<Listener> {
    Listener::new(root, EV_MOUSE_LEAVE, move |_: web::MouseEvent| {
        with_page(&page, |p| p.update(|s| s.on_pointer_leave()));
    })
}
