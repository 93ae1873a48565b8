#![allow(dead_code)]

use lightbox_core::{ControllerConfig, MemoryPage, NodeId, OverlayController, Page};

pub const SEED: u64 = 0x00C0_FFEE;

/// Page with two galleries:
///
/// * `#gallery-a`: close button, an eager image with alt text and a lazy
///   image with only `data-src`; opened by `#open-a` and `#open-a-again`.
/// * `#gallery-b`: no close button, one image; opened by a trigger without id.
///
/// Plus a trigger naming a modal that does not exist and a button outside
/// every overlay.
pub struct Gallery {
    pub page: MemoryPage,
    pub trigger_a: NodeId,
    pub trigger_a_label: NodeId,
    pub trigger_a_again: NodeId,
    pub trigger_b: NodeId,
    pub broken_trigger: NodeId,
    pub outside: NodeId,
    pub modal_a: NodeId,
    pub content_a: NodeId,
    pub close_a: NodeId,
    pub images_a: Vec<NodeId>,
    pub modal_b: NodeId,
    pub images_b: Vec<NodeId>,
}

pub fn gallery() -> Gallery {
    gallery_with(MemoryPage::new())
}

pub fn gallery_with(mut page: MemoryPage) -> Gallery {
    let body = page.body_id();
    let nav = page.element(body, "nav", &[]);
    let trigger_a = page.element(
        nav,
        "a",
        &[
            ("id", "open-a"),
            ("class", "modal-link"),
            ("href", "#gallery-a"),
            ("data-target", "gallery-a"),
        ],
    );
    let trigger_a_label = page.element(trigger_a, "span", &[]);
    let trigger_a_again = page.element(
        nav,
        "a",
        &[
            ("id", "open-a-again"),
            ("class", "modal-link"),
            ("data-target", "gallery-a"),
        ],
    );
    let trigger_b = page.element(
        nav,
        "a",
        &[("class", "modal-link"), ("data-target", "gallery-b")],
    );
    let broken_trigger = page.element(
        nav,
        "a",
        &[("class", "modal-link"), ("data-target", "no-such-modal")],
    );
    let outside = page.element(body, "button", &[("id", "outside")]);

    let modal_a = page.element(
        body,
        "div",
        &[
            ("id", "gallery-a"),
            ("class", "modal"),
            ("style", "display: none"),
            ("aria-hidden", "true"),
        ],
    );
    let content_a = page.element(modal_a, "div", &[("class", "modal-content")]);
    let close_a = page.element(content_a, "button", &[("class", "close-btn")]);
    let region_a = page.element(content_a, "div", &[("class", "modal-images")]);
    let images_a = vec![
        page.element(region_a, "img", &[("src", "a1.jpg"), ("alt", "Harbour")]),
        page.element(region_a, "img", &[("data-src", "a2-lazy.jpg")]),
    ];

    let modal_b = page.element(
        body,
        "div",
        &[
            ("id", "gallery-b"),
            ("class", "modal"),
            ("style", "display: none"),
        ],
    );
    let content_b = page.element(modal_b, "div", &[("class", "modal-content")]);
    let region_b = page.element(content_b, "div", &[("class", "modal-images")]);
    let images_b = vec![page.element(region_b, "img", &[("src", "b1.jpg")])];

    Gallery {
        page,
        trigger_a,
        trigger_a_label,
        trigger_a_again,
        trigger_b,
        broken_trigger,
        outside,
        modal_a,
        content_a,
        close_a,
        images_a,
        modal_b,
        images_b,
    }
}

pub fn controller(page: MemoryPage, config: ControllerConfig) -> OverlayController<MemoryPage> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut controller = OverlayController::new(page, config, SEED);
    assert!(controller.init());
    controller
}

pub fn display(controller: &OverlayController<MemoryPage>, node: NodeId) -> String {
    controller.page().style(&node, "display")
}

pub fn aria_hidden(controller: &OverlayController<MemoryPage>, node: NodeId) -> Option<String> {
    controller.page().attribute(&node, "aria-hidden")
}

pub fn body_overflow(controller: &OverlayController<MemoryPage>) -> String {
    let body = controller.page().body_id();
    controller.page().style(&body, "overflow")
}

pub fn focused(controller: &OverlayController<MemoryPage>) -> Option<NodeId> {
    controller.page().active_element()
}

pub fn zoom_image(controller: &OverlayController<MemoryPage>) -> NodeId {
    *controller
        .zoom_overlay()
        .expect("zoom overlay initialized")
        .image()
}

pub fn zoom_node(controller: &OverlayController<MemoryPage>) -> NodeId {
    *controller
        .zoom_overlay()
        .expect("zoom overlay initialized")
        .overlay()
}
