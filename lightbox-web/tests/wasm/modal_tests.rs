use crate::fixture::{
    GALLERY, active_id, body_overflow, cancelable_click, click, display, document, element,
    keydown, reset, zoom_overlay,
};
use lightbox_core::ControllerConfig;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn install_runs_once_per_page() {
    reset(GALLERY);
    assert!(lightbox_web::install(ControllerConfig::default()).unwrap());
    assert!(!lightbox_web::install(ControllerConfig::default()).unwrap());

    let overlays = document().query_selector_all(".zoom-overlay").unwrap();
    assert_eq!(overlays.length(), 1);
    let listeners = lightbox_web::with_controller(|c| c.page().image_listener_count());
    assert_eq!(listeners, Some(6));
    assert_eq!(
        element("img-a2").get_attribute("data-zoom-handler").as_deref(),
        Some("1")
    );
    assert_eq!(element("img-a2").tab_index(), 0);
}

#[wasm_bindgen_test]
fn trigger_click_opens_modal_and_focuses_close_button() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();

    assert!(cancelable_click(&element("open-a-label")));

    assert_eq!(display("gallery-a"), "flex");
    assert_eq!(
        element("gallery-a").get_attribute("aria-hidden").as_deref(),
        Some("false")
    );
    assert_eq!(active_id(), "close-a");
    assert_eq!(body_overflow(), "hidden");
}

#[wasm_bindgen_test]
fn close_button_restores_trigger_focus() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    click("open-a");

    click("close-a");

    assert_eq!(display("gallery-a"), "none");
    assert_eq!(active_id(), "open-a");
    assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
fn backdrop_click_closes_and_content_click_does_not() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    click("open-a");

    click("content-a");
    assert_eq!(display("gallery-a"), "flex");

    click("gallery-a");
    assert_eq!(display("gallery-a"), "none");
}

#[wasm_bindgen_test]
fn escape_closes_open_modal() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    click("open-b");
    assert_eq!(active_id(), "img-b1");

    keydown(&document(), "Escape");
    assert_eq!(display("gallery-b"), "none");
    let generated = element("open-b").id();
    assert!(generated.starts_with("modal-trigger-"), "{generated}");
    assert_eq!(active_id(), generated);
}

#[wasm_bindgen_test]
fn focus_escaping_modal_is_pulled_back() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    click("open-a");

    element("outside").focus().unwrap();
    assert_eq!(active_id(), "close-a");
}

#[wasm_bindgen_test]
fn uninstall_detaches_listeners() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    lightbox_web::uninstall();

    click("open-a");
    assert_eq!(display("gallery-a"), "none");
    assert!(!lightbox_web::install::is_installed());
    assert_eq!(element("img-a1").get_attribute("data-zoom-handler"), None);
}

#[wasm_bindgen_test]
fn reinstall_rebinds_image_handlers() {
    reset(GALLERY);
    lightbox_web::install(ControllerConfig::default()).unwrap();
    lightbox_web::uninstall();
    assert!(lightbox_web::install(ControllerConfig::default()).unwrap());

    click("open-a");
    click("img-a1");

    assert!(zoom_overlay().class_list().contains("active"));
    let listeners = lightbox_web::with_controller(|c| c.page().image_listener_count());
    assert_eq!(listeners, Some(6));
}
