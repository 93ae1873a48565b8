use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, EventTarget, HtmlElement, KeyboardEvent,
    KeyboardEventInit,
};

pub const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

pub const GALLERY: &str = r##"
<a id="open-a" class="modal-link" href="#gallery-a" data-target="gallery-a"><span id="open-a-label">Harbour</span></a>
<a id="open-b" class="modal-link" href="#gallery-b" data-target="gallery-b">Market</a>
<button id="outside">Elsewhere</button>
<div id="gallery-a" class="modal" style="display: none" aria-hidden="true">
  <div id="content-a" class="modal-content">
    <button id="close-a" class="close-btn">x</button>
    <div class="modal-images">
      <img id="img-a1" src="data:image/gif;base64,R0lGODlhAQABAAAAACw=" alt="Harbour">
      <img id="img-a2" data-src="lazy.jpg">
    </div>
  </div>
</div>
<div id="gallery-b" class="modal" style="display: none">
  <div class="modal-content">
    <div class="modal-images"><img id="img-b1" src="b1.jpg"></div>
  </div>
</div>
"##;

pub fn document() -> Document {
    lightbox_web::dom::document().expect("document")
}

/// Drop any installed controller and replace the body with `markup`.
pub fn reset(markup: &str) -> Document {
    lightbox_web::uninstall();
    let document = document();
    if let Some(root) = document.document_element() {
        let _ = root.remove_attribute("lang");
    }
    let body = document.body().expect("document body");
    body.set_inner_html(markup);
    let _ = body.style().remove_property("overflow");
    document
}

pub fn element(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} missing"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

pub fn click(id: &str) {
    element(id).click();
}

/// Dispatch a cancelable bubbling click; returns whether the default was
/// prevented.
pub fn cancelable_click(target: &EventTarget) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).expect("click event");
    !target.dispatch_event(&event).expect("dispatch click")
}

/// Dispatch a keydown; returns whether the default was prevented.
pub fn keydown(target: &EventTarget, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown event");
    !target.dispatch_event(&event).expect("dispatch keydown")
}

pub fn display(id: &str) -> String {
    element(id)
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

pub fn body_overflow() -> String {
    document()
        .body()
        .expect("document body")
        .style()
        .get_property_value("overflow")
        .unwrap_or_default()
}

pub fn active_element() -> Option<Element> {
    document().active_element()
}

pub fn active_id() -> String {
    active_element().map(|el| el.id()).unwrap_or_default()
}

pub fn zoom_overlay() -> Element {
    document()
        .query_selector(".zoom-overlay")
        .ok()
        .flatten()
        .expect("zoom overlay")
}

pub fn zoom_image() -> Element {
    zoom_overlay()
        .query_selector("img")
        .ok()
        .flatten()
        .expect("zoom image")
}
