use crate::constants::EV_RESIZE;
use crate::dom;
use crate::events;
use crate::listeners::{Listener, ListenerSet};
use crate::view::SceneView;
use exhibit_core::{compose, ModeBindings, PageConfig, PageState, PAGE_CSS};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// A mounted exhibition page. Owns the state, the DOM mirror and every
/// listener; dropping it (or calling [`Page::unmount`]) detaches them all.
pub struct Page {
    window: web::Window,
    container: web::HtmlElement,
    state: RefCell<PageState>,
    view: RefCell<SceneView>,
    bindings: RefCell<ModeBindings<ListenerSet>>,
    resize: RefCell<Option<Listener>>,
}

impl Page {
    pub fn mount(container_id: &str, config: PageConfig) -> anyhow::Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        dom::inject_stylesheet(&document, PAGE_CSS)?;
        let container = dom::resolve_container(&document, container_id)?;

        let page = Rc::new(Self {
            window: window.clone(),
            container: container.clone(),
            state: RefCell::new(PageState::new(config)),
            view: RefCell::new(SceneView::new(document, container)),
            bindings: RefCell::new(ModeBindings::new()),
            resize: RefCell::new(None),
        });

        let weak = Rc::downgrade(&page);
        let resize = Listener::new(&window, EV_RESIZE, move |_: web::Event| {
            if let Some(page) = weak.upgrade() {
                page.sync_viewport();
            }
        })?;
        *page.resize.borrow_mut() = Some(resize);

        page.sync_viewport();
        log::info!("[page] mounted on #{}", container_id);
        Ok(page)
    }

    /// Re-classify the viewport, swap listener sets if the device class
    /// changed, and re-render.
    pub fn sync_viewport(self: &Rc<Self>) {
        let viewport = dom::viewport_snapshot(&self.window);
        let (changed, device) = {
            let mut state = self.state.borrow_mut();
            (state.on_resize(&viewport), state.device())
        };
        if changed {
            log::info!("[page] switched to {} layout", device.name());
        }
        let weak = Rc::downgrade(self);
        self.bindings
            .borrow_mut()
            .sync(device, |d| events::bind_mode(d, &weak));
        self.render();
    }

    pub fn unmount(&self) {
        self.resize.borrow_mut().take();
        self.bindings.borrow_mut().release();
        self.view.borrow_mut().clear();
        log::info!("[page] unmounted");
    }

    pub(crate) fn window(&self) -> &web::Window {
        &self.window
    }

    pub(crate) fn container_size(&self) -> Vec2 {
        dom::box_size(&self.container)
    }

    /// Apply `f` to the state and re-render when it reports a change.
    pub(crate) fn update(&self, f: impl FnOnce(&mut PageState) -> bool) {
        let changed = f(&mut self.state.borrow_mut());
        if changed {
            self.render();
        }
    }

    pub(crate) fn state(&self) -> std::cell::Ref<'_, PageState> {
        self.state.borrow()
    }

    fn render(&self) {
        let scene = compose(&self.state.borrow());
        if let Err(e) = self.view.borrow_mut().apply(&scene) {
            log::error!("[page] render error: {:?}", e);
        }
    }
}

/// Convenience for listener closures that only hold a weak handle.
pub(crate) fn with_page(page: &Weak<Page>, f: impl FnOnce(&Page)) {
    if let Some(page) = page.upgrade() {
        f(&page);
    }
}
