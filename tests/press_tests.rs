// Host-side tests for press darkening.

use exhibit_core::scene::overlay_opacity;
use exhibit_core::{compose, LayerId, PageState, Viewport};

const PRIMARY: i16 = 0;
const SECONDARY: i16 = 2;

fn desktop() -> PageState {
    let mut s = PageState::default();
    s.on_resize(&Viewport::new(1440.0, 900.0, false));
    s
}

fn rendered_opacity(s: &PageState) -> String {
    compose(s)
        .layer(LayerId::PressOverlay)
        .and_then(|l| l.style.get("opacity"))
        .map(str::to_string)
        .expect("desktop scene has a press overlay")
}

#[test]
fn press_then_release_darkens_only_in_between() {
    let mut s = desktop();
    assert_eq!(overlay_opacity(s.is_pressed()), 0.0);
    assert_eq!(rendered_opacity(&s), "0");

    assert!(s.on_press_down(PRIMARY));
    assert_eq!(overlay_opacity(s.is_pressed()), 0.3);
    assert_eq!(rendered_opacity(&s), "0.3");

    assert!(s.on_press_up());
    assert_eq!(overlay_opacity(s.is_pressed()), 0.0);
    assert_eq!(rendered_opacity(&s), "0");
}

#[test]
fn leaving_the_window_releases_the_press() {
    let mut s = desktop();
    s.on_press_down(PRIMARY);
    assert!(s.on_pointer_leave());
    assert!(!s.is_pressed());
    assert_eq!(rendered_opacity(&s), "0");
}

#[test]
fn leave_and_release_are_equivalent() {
    let mut a = desktop();
    let mut b = desktop();
    a.on_press_down(PRIMARY);
    b.on_press_down(PRIMARY);
    a.on_press_up();
    b.on_pointer_leave();
    assert_eq!(compose(&a), compose(&b));
}

#[test]
fn only_the_primary_button_presses() {
    let mut s = desktop();
    assert!(!s.on_press_down(SECONDARY));
    assert!(!s.is_pressed());
}

#[test]
fn release_without_press_is_a_no_op() {
    let mut s = desktop();
    assert!(!s.on_press_up());
    assert!(!s.on_pointer_leave());
    assert!(!s.is_pressed());
}

#[test]
fn press_is_ignored_on_mobile() {
    let mut s = PageState::default();
    s.on_resize(&Viewport::new(500.0, 900.0, false));
    assert!(!s.on_press_down(PRIMARY));
    assert!(!s.is_pressed());
    assert!(compose(&s).layer(LayerId::PressOverlay).is_none());
}
