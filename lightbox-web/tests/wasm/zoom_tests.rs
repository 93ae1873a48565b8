use crate::fixture::{
    GALLERY, PIXEL, active_element, body_overflow, click, display, element, keydown, reset,
    zoom_image, zoom_overlay,
};
use lightbox_core::{ControllerConfig, ScrollLockPolicy};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlImageElement};

fn open_gallery_a() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    click("open-a");
}

#[wasm_bindgen_test]
fn image_click_zooms_and_focuses_overlay_image() {
    open_gallery_a();

    click("img-a1");

    let overlay = zoom_overlay();
    let image = zoom_image().dyn_into::<HtmlImageElement>().unwrap();
    assert!(overlay.class_list().contains("active"));
    assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(image.src(), PIXEL);
    assert_eq!(image.alt(), "Harbour");
    assert_eq!(active_element(), Some(image.into()));
    assert_eq!(body_overflow(), "hidden");
}

#[wasm_bindgen_test]
fn enter_on_lazy_image_uses_data_source_and_fallback_alt() {
    open_gallery_a();

    assert!(keydown(&element("img-a2"), "Enter"));

    let image = zoom_image().dyn_into::<HtmlImageElement>().unwrap();
    assert!(image.src().ends_with("lazy.jpg"));
    assert_eq!(image.alt(), "확대된 이미지");
}

#[wasm_bindgen_test]
fn escape_closes_zoom_before_modal() {
    open_gallery_a();
    click("img-a1");

    keydown(&element("img-a1"), "Escape");

    let overlay = zoom_overlay();
    assert!(!overlay.class_list().contains("active"));
    assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(zoom_image().get_attribute("src").as_deref(), Some(""));
    assert_eq!(display("gallery-a"), "flex");
    assert_eq!(body_overflow(), "hidden");
}

#[wasm_bindgen_test]
fn clicking_overlay_dismisses_zoom() {
    open_gallery_a();
    click("img-a1");

    zoom_overlay().dyn_into::<HtmlElement>().unwrap().click();

    assert!(!zoom_overlay().class_list().contains("active"));
    assert_eq!(display("gallery-a"), "flex");
}

#[wasm_bindgen_test]
fn per_overlay_policy_unlocks_scroll_on_zoom_close() {
    reset(GALLERY);
    let config = ControllerConfig {
        scroll_lock: ScrollLockPolicy::PerOverlay,
        ..ControllerConfig::default()
    };
    lightbox_web::install(config).unwrap();
    click("open-a");
    click("img-a1");

    zoom_overlay().dyn_into::<HtmlElement>().unwrap().click();
    assert_eq!(display("gallery-a"), "flex");
    assert_eq!(body_overflow(), "");
}
