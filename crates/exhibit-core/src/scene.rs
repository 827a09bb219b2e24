//! Render composition: a pure mapping from [`PageState`] to the layered
//! scene the web frontend mirrors into the DOM.
//!
//! Layers are listed back to front. Each carries a stable [`LayerId`] so the
//! view can keep elements alive between updates and let CSS transitions run;
//! only `style` values change while the device class stays the same.

use crate::constants::*;
use crate::state::{center, PageState};
use crate::style::Style;
use crate::viewport::DeviceClass;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    Background,
    PressOverlay,
    Spotlight,
    GlowViolet,
    GlowPink,
    GlowBlended,
    Info,
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
}

impl LayerId {
    /// Value of the `data-layer` attribute.
    pub fn key(self) -> &'static str {
        match self {
            LayerId::Background => "background",
            LayerId::PressOverlay => "press-overlay",
            LayerId::Spotlight => "spotlight",
            LayerId::GlowViolet => "glow-violet",
            LayerId::GlowPink => "glow-pink",
            LayerId::GlowBlended => "glow-blended",
            LayerId::Info => "info",
            LayerId::CornerTopLeft => "corner-top-left",
            LayerId::CornerTopRight => "corner-top-right",
            LayerId::CornerBottomLeft => "corner-bottom-left",
            LayerId::CornerBottomRight => "corner-bottom-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    Cover,
    Contain,
}

impl Fit {
    pub fn class(self) -> &'static str {
        match self {
            Fit::Cover => "fit-cover",
            Fit::Contain => "fit-contain",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    /// Stretch over the parent box; `sizes="100vw"`.
    Fill { fit: Fit },
    /// Natural size hint; the element scales to its parent's width.
    Intrinsic { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
    pub sizing: Sizing,
    pub priority: bool,
}

/// Institution name drawn as SVG text so it does not depend on an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wordmark {
    pub text: &'static str,
}

impl Wordmark {
    pub fn to_svg(&self) -> String {
        let (vw, vh) = WORDMARK_VIEWBOX;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vw} {vh}" class="wordmark" role="img" aria-label="{label}">"#,
                r##"<text transform="translate(0 {base})" fill="#fff" font-family="{family}" font-weight="700" font-size="{size}px" letter-spacing=".05em">"##,
                r#"<tspan x="0" y="0">{label}</tspan></text></svg>"#
            ),
            vw = vw,
            vh = vh,
            base = WORDMARK_BASELINE,
            family = WORDMARK_FONT_FAMILY,
            size = WORDMARK_FONT_SIZE_PX,
            label = escape_xml(self.text),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Empty,
    Image(ImageRef),
    Wordmark(Wordmark),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub class: &'static str,
    pub style: Style,
    pub content: Content,
}

impl Layer {
    fn new(id: LayerId, class: &'static str) -> Self {
        Self {
            id,
            class,
            style: Style::new(),
            content: Content::Empty,
        }
    }

    fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn image(&self) -> Option<&ImageRef> {
        match &self.content {
            Content::Image(img) => Some(img),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub device: DeviceClass,
    pub root_style: Style,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.id).collect()
    }

    pub fn image_sources(&self) -> Vec<&'static str> {
        self.layers
            .iter()
            .filter_map(|l| l.image().map(|img| img.src))
            .collect()
    }
}

pub fn compose(state: &PageState) -> Scene {
    match state.device() {
        DeviceClass::Desktop => compose_desktop(state),
        DeviceClass::Mobile => compose_mobile(state),
    }
}

fn compose_desktop(state: &PageState) -> Scene {
    let pos = state.position();
    let layers = vec![
        Layer::new(LayerId::Background, "layer layer-background parallax")
            .style(Style::new().with("transform", background_transform(pos)))
            .content(Content::Image(fill_image(
                DESKTOP_BACKGROUND_SRC,
                EVENT_TITLE,
                Fit::Cover,
            ))),
        Layer::new(LayerId::PressOverlay, "layer layer-press-overlay").style(
            Style::new().with("opacity", fmt_num(overlay_opacity(state.is_pressed()))),
        ),
        spotlight(pos, SPOTLIGHT_FALLOFF_DESKTOP),
        glow(
            LayerId::GlowViolet,
            "glow glow-violet",
            pos,
            GLOW_VIOLET_REM,
            GLOW_VIOLET_GRADIENT,
        ),
        glow(
            LayerId::GlowPink,
            "glow glow-pink",
            pos,
            GLOW_PINK_REM,
            GLOW_PINK_GRADIENT,
        )
        .with_style("animation-delay", format!("{}s", fmt_num(GLOW_PINK_DELAY_SEC))),
        Layer::new(LayerId::Info, "layer layer-info")
            .content(Content::Image(fill_image(INFO_SRC, INFO_ALT, Fit::Contain))),
    ];
    Scene {
        device: DeviceClass::Desktop,
        root_style: Style::new().with("min-height", "100vh"),
        layers,
    }
}

fn compose_mobile(state: &PageState) -> Scene {
    let pos = state.position();
    let layers = vec![
        Layer::new(LayerId::Background, "layer layer-background").content(Content::Image(
            fill_image(MOBILE_BACKGROUND_SRC, EVENT_TITLE, Fit::Cover),
        )),
        spotlight(pos, SPOTLIGHT_FALLOFF_MOBILE),
        glow(
            LayerId::GlowBlended,
            "glow glow-blended",
            pos,
            GLOW_BLENDED_REM,
            GLOW_BLENDED_GRADIENT,
        ),
        Layer::new(LayerId::CornerTopLeft, "corner corner-top-left halo").content(
            Content::Wordmark(Wordmark {
                text: WORDMARK_TEXT,
            }),
        ),
        corner(
            LayerId::CornerTopRight,
            "corner corner-top-right halo",
            EVENT_MARK_SRC,
            EVENT_MARK_ALT,
            EVENT_MARK_SIZE,
        ),
        corner(
            LayerId::CornerBottomLeft,
            "corner corner-bottom-left halo",
            VENUE_SRC,
            VENUE_ALT,
            VENUE_SIZE,
        ),
        corner(
            LayerId::CornerBottomRight,
            "corner corner-bottom-right halo",
            DATES_SRC,
            DATES_ALT,
            DATES_SIZE,
        ),
    ];
    // Mobile browsers resize the visual viewport as toolbars show and hide;
    // pin the measured height so corner graphics stay on screen.
    let root_style = match state.viewport_height() {
        0 => Style::new().with("min-height", "100vh"),
        h => Style::new().with("height", format!("{}px", h)),
    };
    Scene {
        device: DeviceClass::Mobile,
        root_style,
        layers,
    }
}

impl Layer {
    fn with_style(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.style.set(prop, value);
        self
    }
}

fn fill_image(src: &'static str, alt: &'static str, fit: Fit) -> ImageRef {
    ImageRef {
        src,
        alt,
        sizing: Sizing::Fill { fit },
        priority: true,
    }
}

fn corner(
    id: LayerId,
    class: &'static str,
    src: &'static str,
    alt: &'static str,
    (width, height): (u32, u32),
) -> Layer {
    Layer::new(id, class).content(Content::Image(ImageRef {
        src,
        alt,
        sizing: Sizing::Intrinsic { width, height },
        priority: true,
    }))
}

fn spotlight(pos: Vec2, falloff_percent: u32) -> Layer {
    Layer::new(LayerId::Spotlight, "layer layer-spotlight")
        .style(Style::new().with("background", spotlight_gradient(pos, falloff_percent)))
}

fn glow(id: LayerId, class: &'static str, pos: Vec2, diameter_rem: f32, gradient: &str) -> Layer {
    let (left, top) = glow_anchor(pos, diameter_rem);
    Layer::new(id, class).style(
        Style::new()
            .with("background", gradient)
            .with("width", format!("{}rem", fmt_num(diameter_rem)))
            .with("height", format!("{}rem", fmt_num(diameter_rem)))
            .with("left", left)
            .with("top", top),
    )
}

/// Background translate in percent: opposite to the pointer's displacement
/// from center.
#[inline]
pub fn parallax_offset(pos: Vec2) -> Vec2 {
    (pos - center()) * PARALLAX_FACTOR
}

pub fn background_transform(pos: Vec2) -> String {
    let d = parallax_offset(pos);
    format!(
        "scale({}) translate({}%, {}%)",
        fmt_num(BACKGROUND_SCALE),
        fmt_num(d.x),
        fmt_num(d.y)
    )
}

#[inline]
pub fn overlay_opacity(pressed: bool) -> f32 {
    if pressed {
        PRESS_OVERLAY_OPACITY
    } else {
        0.0
    }
}

pub fn spotlight_gradient(pos: Vec2, falloff_percent: u32) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, rgba(255,255,255,0.25) 0%, rgba(0,0,0,0) {}%)",
        fmt_num(pos.x),
        fmt_num(pos.y),
        falloff_percent
    )
}

/// `left`/`top` values centering a glow of `diameter_rem` on `pos`.
pub fn glow_anchor(pos: Vec2, diameter_rem: f32) -> (String, String) {
    let half = fmt_num(diameter_rem / 2.0);
    (
        format!("calc({}% - {}rem)", fmt_num(pos.x), half),
        format!("calc({}% - {}rem)", fmt_num(pos.y), half),
    )
}

/// Up to three decimals, no trailing zeros, never `-0`.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
