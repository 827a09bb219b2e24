use crate::constants::{LAYER_ATTR, ROOT_CLASS};
use exhibit_core::{Content, DeviceClass, ImageRef, Layer, LayerId, Scene, Sizing, Style};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM mirror of the last applied [`Scene`].
///
/// Elements are rebuilt only when the device class changes; otherwise only
/// `style` attributes are rewritten so CSS transitions animate between
/// positions.
pub struct SceneView {
    document: web::Document,
    root: web::HtmlElement,
    device: Option<DeviceClass>,
    nodes: Vec<(LayerId, web::Element)>,
}

impl SceneView {
    pub fn new(document: web::Document, root: web::HtmlElement) -> Self {
        _ = root.class_list().add_1(ROOT_CLASS);
        Self {
            document,
            root,
            device: None,
            nodes: Vec::new(),
        }
    }

    pub fn apply(&mut self, scene: &Scene) -> anyhow::Result<()> {
        if self.device != Some(scene.device) {
            self.rebuild(scene)?;
        }
        set_style(&self.root, &scene.root_style);
        for layer in &scene.layers {
            if let Some((_, el)) = self.nodes.iter().find(|(id, _)| *id == layer.id) {
                set_style(el, &layer.style);
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.root.set_inner_html("");
        _ = self.root.remove_attribute("style");
        self.nodes.clear();
        self.device = None;
    }

    fn rebuild(&mut self, scene: &Scene) -> anyhow::Result<()> {
        self.clear();
        for layer in &scene.layers {
            let el = self.build_layer(layer)?;
            self.root
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            self.nodes.push((layer.id, el));
        }
        self.device = Some(scene.device);
        log::info!(
            "[view] built {} layout ({} layers)",
            scene.device.name(),
            self.nodes.len()
        );
        Ok(())
    }

    fn build_layer(&self, layer: &Layer) -> anyhow::Result<web::Element> {
        let el = self.create("div")?;
        el.set_class_name(layer.class);
        _ = el.set_attribute(LAYER_ATTR, layer.id.key());
        _ = el.set_attribute("aria-hidden", "true");
        match &layer.content {
            Content::Empty => {}
            Content::Image(img) => {
                _ = el.remove_attribute("aria-hidden");
                let img_el = self.build_image(img)?;
                el.append_child(&img_el)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            }
            Content::Wordmark(mark) => {
                _ = el.remove_attribute("aria-hidden");
                el.set_inner_html(&mark.to_svg());
            }
        }
        Ok(el)
    }

    fn build_image(&self, img: &ImageRef) -> anyhow::Result<web::HtmlImageElement> {
        let el = self
            .create("img")?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_alt(img.alt);
        _ = el.set_attribute("decoding", "async");
        if img.priority {
            _ = el.set_attribute("fetchpriority", "high");
            _ = el.set_attribute("loading", "eager");
        }
        match img.sizing {
            Sizing::Fill { fit } => {
                el.set_class_name(fit.class());
                _ = el.set_attribute("sizes", "100vw");
            }
            Sizing::Intrinsic { width, height } => {
                el.set_width(width);
                el.set_height(height);
            }
        }
        // src last so the priority hints apply to the first request
        el.set_src(img.src);
        Ok(el)
    }

    fn create(&self, tag: &str) -> anyhow::Result<web::Element> {
        self.document
            .create_element(tag)
            .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
    }
}

fn set_style(el: &web::Element, style: &Style) {
    if style.is_empty() {
        _ = el.remove_attribute("style");
    } else {
        _ = el.set_attribute("style", &style.to_css());
    }
}
