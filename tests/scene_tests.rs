// Host-side tests for render composition.

use exhibit_core::scene::{
    background_transform, fmt_num, glow_anchor, parallax_offset, spotlight_gradient,
};
use exhibit_core::{compose, Content, Fit, LayerId, PageState, Sizing, Viewport};
use glam::Vec2;

fn state(width: f64, height: f64, touch: bool) -> PageState {
    let mut s = PageState::default();
    s.on_resize(&Viewport::new(width, height, touch));
    s
}

#[test]
fn desktop_layer_stack() {
    let scene = compose(&state(1440.0, 900.0, false));
    assert_eq!(
        scene.layer_ids(),
        vec![
            LayerId::Background,
            LayerId::PressOverlay,
            LayerId::Spotlight,
            LayerId::GlowViolet,
            LayerId::GlowPink,
            LayerId::Info,
        ]
    );
    assert_eq!(
        scene.image_sources(),
        vec!["/images/japanese-gradient-background.png", "/images/info.png"]
    );
    assert_eq!(scene.root_style.get("min-height"), Some("100vh"));
}

#[test]
fn mobile_layer_stack() {
    let scene = compose(&state(390.0, 844.0, true));
    assert_eq!(
        scene.layer_ids(),
        vec![
            LayerId::Background,
            LayerId::Spotlight,
            LayerId::GlowBlended,
            LayerId::CornerTopLeft,
            LayerId::CornerTopRight,
            LayerId::CornerBottomLeft,
            LayerId::CornerBottomRight,
        ]
    );
    assert_eq!(
        scene.image_sources(),
        vec![
            "/images/mobile-background.png",
            "/images/iii.svg",
            "/images/venue-ok.svg",
            "/images/dates-ok.svg",
        ]
    );
    assert_eq!(scene.root_style.get("height"), Some("844px"));
}

#[test]
fn crossing_the_breakpoint_switches_assets_and_structure() {
    let mut s = state(1024.0, 768.0, false);
    let before = compose(&s);
    s.on_resize(&Viewport::new(500.0, 768.0, false));
    let after = compose(&s);

    assert_ne!(before.layer_ids(), after.layer_ids());
    assert_ne!(before.image_sources(), after.image_sources());
    assert!(after.layer(LayerId::Info).is_none());
    assert!(after.layer(LayerId::CornerBottomRight).is_some());
}

#[test]
fn every_corner_carries_a_halo() {
    let scene = compose(&state(390.0, 844.0, true));
    let corners = scene
        .layers
        .iter()
        .filter(|l| l.class.split(' ').any(|c| c == "corner"))
        .collect::<Vec<_>>();
    assert_eq!(corners.len(), 4);
    assert!(corners.iter().all(|l| l.class.split(' ').any(|c| c == "halo")));
}

#[test]
fn wordmark_renders_as_inline_svg() {
    let scene = compose(&state(390.0, 844.0, true));
    let layer = scene.layer(LayerId::CornerTopLeft).expect("top left corner");
    match &layer.content {
        Content::Wordmark(mark) => {
            let svg = mark.to_svg();
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains("viewBox=\"0 0 217.35 30\""));
            assert!(svg.contains("東京大学制作展"));
        }
        other => panic!("expected wordmark, got {:?}", other),
    }
}

#[test]
fn corner_images_keep_intrinsic_size() {
    let scene = compose(&state(390.0, 844.0, true));
    let img = scene
        .layer(LayerId::CornerTopRight)
        .and_then(|l| l.image())
        .expect("event mark");
    assert_eq!(
        img.sizing,
        Sizing::Intrinsic {
            width: 140,
            height: 60
        }
    );
    assert!(img.priority);
}

#[test]
fn info_overlay_is_contained_and_background_covers() {
    let scene = compose(&state(1440.0, 900.0, false));
    let info = scene.layer(LayerId::Info).and_then(|l| l.image()).unwrap();
    assert_eq!(info.sizing, Sizing::Fill { fit: Fit::Contain });
    let bg = scene.layer(LayerId::Background).and_then(|l| l.image()).unwrap();
    assert_eq!(bg.sizing, Sizing::Fill { fit: Fit::Cover });
}

#[test]
fn parallax_moves_against_the_pointer() {
    assert_eq!(parallax_offset(Vec2::new(50.0, 50.0)), Vec2::ZERO);
    let d = parallax_offset(Vec2::new(100.0, 0.0));
    assert!((d.x + 1.0).abs() < 1e-5, "dx={}", d.x);
    assert!((d.y - 1.0).abs() < 1e-5, "dy={}", d.y);

    assert_eq!(
        background_transform(Vec2::new(50.0, 50.0)),
        "scale(1.05) translate(0%, 0%)"
    );
    assert_eq!(
        background_transform(Vec2::new(75.0, 25.0)),
        "scale(1.05) translate(-0.5%, 0.5%)"
    );
}

#[test]
fn desktop_background_follows_tracked_position() {
    let mut s = state(1000.0, 800.0, false);
    s.on_pointer_move(Vec2::new(1000.0, 800.0), Vec2::new(1000.0, 800.0));
    let scene = compose(&s);
    let bg = scene.layer(LayerId::Background).unwrap();
    assert_eq!(
        bg.style.get("transform"),
        Some("scale(1.05) translate(-1%, -1%)")
    );
}

#[test]
fn mobile_background_has_no_transform() {
    let scene = compose(&state(390.0, 844.0, true));
    let bg = scene.layer(LayerId::Background).unwrap();
    assert_eq!(bg.style.get("transform"), None);
}

#[test]
fn spotlight_falloff_depends_on_device() {
    let desktop = compose(&state(1440.0, 900.0, false));
    let mobile = compose(&state(390.0, 844.0, true));
    let bg = |scene: &exhibit_core::Scene| {
        scene
            .layer(LayerId::Spotlight)
            .and_then(|l| l.style.get("background"))
            .unwrap()
            .to_string()
    };
    assert_eq!(bg(&desktop), spotlight_gradient(Vec2::new(50.0, 50.0), 50));
    assert_eq!(bg(&mobile), spotlight_gradient(Vec2::new(50.0, 50.0), 40));
    assert_eq!(
        spotlight_gradient(Vec2::new(20.0, 80.0), 40),
        "radial-gradient(circle at 20% 80%, rgba(255,255,255,0.25) 0%, rgba(0,0,0,0) 40%)"
    );
}

#[test]
fn glows_are_centered_on_the_position() {
    let (left, top) = glow_anchor(Vec2::new(30.0, 60.0), 10.0);
    assert_eq!(left, "calc(30% - 5rem)");
    assert_eq!(top, "calc(60% - 5rem)");

    let scene = compose(&state(1440.0, 900.0, false));
    let pink = scene.layer(LayerId::GlowPink).unwrap();
    assert_eq!(pink.style.get("left"), Some("calc(50% - 3rem)"));
    assert_eq!(pink.style.get("width"), Some("6rem"));
    assert_eq!(pink.style.get("animation-delay"), Some("0.5s"));

    let mobile = compose(&state(390.0, 844.0, true));
    let blended = mobile.layer(LayerId::GlowBlended).unwrap();
    assert_eq!(blended.style.get("top"), Some("calc(50% - 4rem)"));
}

#[test]
fn numbers_format_compactly() {
    assert_eq!(fmt_num(50.0), "50");
    assert_eq!(fmt_num(100.0), "100");
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(0.3), "0.3");
    assert_eq!(fmt_num(12.3456), "12.346");
}

#[test]
fn style_serializes_in_insertion_order() {
    let mut style = exhibit_core::Style::new()
        .with("left", "1px")
        .with("top", "2px");
    style.set("left", "3px");
    assert_eq!(style.to_css(), "left: 3px; top: 2px;");
    assert!(exhibit_core::Style::new().to_css().is_empty());
}
