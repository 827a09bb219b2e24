use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays attached exactly as long as this value
/// lives. Dropping it detaches the callback from its target.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Attach `handler` for `event`. Events that are not an `E` are skipped.
    pub fn new<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: F,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listeners acquired together and released together.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a freshly attached listener; a failed attach is logged and the
    /// rest of the set still binds.
    pub fn push(&mut self, listener: anyhow::Result<Listener>) {
        match listener {
            Ok(l) => self.listeners.push(l),
            Err(e) => log::error!("[listeners] {:?}", e),
        }
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(Listener::event).collect()
    }
}
