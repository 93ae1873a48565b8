//! [`Page`] over the live browser document.

use crate::dom;
use crate::events::EventBinding;
use crate::install;
use lightbox_core::{Page, PageError};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, Node};

fn js_err(err: JsValue) -> PageError {
    PageError::Dom(dom::js_error_message(&err))
}

/// The browser document plus the per-image listeners bound through it.
pub struct DomPage {
    document: Document,
    image_bindings: Vec<EventBinding>,
    bound_images: Vec<Element>,
}

impl DomPage {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self {
            document,
            image_bindings: Vec::new(),
            bound_images: Vec::new(),
        }
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Number of listeners currently attached to images.
    #[must_use]
    pub fn image_listener_count(&self) -> usize {
        self.image_bindings.len()
    }

    /// Detach every image listener and strip `marker` from the images so a
    /// later controller binds them again.
    pub fn unbind_images(&mut self, marker: &str) {
        self.image_bindings.clear();
        for image in self.bound_images.drain(..) {
            if let Err(err) = image.remove_attribute(marker) {
                log::warn!("clearing {marker} failed: {}", dom::js_error_message(&err));
            }
        }
    }
}

impl Page for DomPage {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn document_lang(&self) -> Option<String> {
        self.document
            .document_element()
            .and_then(|root| root.get_attribute("lang"))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, scope: Option<&Element>, selector: &str) -> Option<Element> {
        let found = match scope {
            Some(scope) => scope.query_selector(selector),
            None => self.document.query_selector(selector),
        };
        found.ok().flatten()
    }

    fn query_selector_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let found = match scope {
            Some(scope) => scope.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        let Ok(list) = found else {
            log::warn!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) -> Result<(), PageError> {
        node.class_list().add_1(class).map_err(js_err)
    }

    fn remove_class(&mut self, node: &Element, class: &str) -> Result<(), PageError> {
        node.class_list().remove_1(class).map_err(js_err)
    }

    fn id(&self, node: &Element) -> String {
        node.id()
    }

    fn set_id(&mut self, node: &Element, id: &str) -> Result<(), PageError> {
        node.set_id(id);
        Ok(())
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), PageError> {
        node.set_attribute(name, value).map_err(js_err)
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) -> Result<(), PageError> {
        node.remove_attribute(name).map_err(js_err)
    }

    fn style(&self, node: &Element, property: &str) -> String {
        node.dyn_ref::<HtmlElement>()
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<(), PageError> {
        let el = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::Dom(String::from("element has no inline style")))?;
        let style = el.style();
        if value.is_empty() {
            style.remove_property(property).map(drop).map_err(js_err)
        } else {
            style.set_property(property, value).map_err(js_err)
        }
    }

    fn focus(&mut self, node: &Element) -> Result<(), PageError> {
        node.dyn_ref::<HtmlElement>()
            .ok_or(PageError::NotFocusable)?
            .focus()
            .map_err(js_err)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, PageError> {
        self.document.create_element(tag).map_err(js_err)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), PageError> {
        parent.append_child(child).map(drop).map_err(js_err)
    }

    fn image_source(&self, image: &Element) -> String {
        image
            .dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::src)
            .unwrap_or_default()
    }

    fn set_image_source(&mut self, image: &Element, source: &str) -> Result<(), PageError> {
        image
            .dyn_ref::<HtmlImageElement>()
            .ok_or(PageError::NotAnImage)?
            .set_src(source);
        Ok(())
    }

    fn image_alt(&self, image: &Element) -> String {
        image
            .dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::alt)
            .unwrap_or_default()
    }

    fn set_image_alt(&mut self, image: &Element, alt: &str) -> Result<(), PageError> {
        image
            .dyn_ref::<HtmlImageElement>()
            .ok_or(PageError::NotAnImage)?
            .set_alt(alt);
        Ok(())
    }

    fn bind_zoom_handlers(&mut self, image: &Element) -> Result<(), PageError> {
        let clicked = image.clone();
        let click = EventBinding::new(image, "click", move |_event: Event| {
            install::dispatch(|controller| controller.on_image_click(&clicked));
        })
        .map_err(js_err)?;

        let pressed = image.clone();
        let keydown = EventBinding::new(image, "keydown", move |event: Event| {
            let Some(key) = dom::event_key(&event) else {
                return;
            };
            if let Some(outcome) =
                install::dispatch(|controller| controller.on_image_keydown(&pressed, &key))
            {
                install::apply(&event, outcome);
            }
        })
        .map_err(js_err)?;

        self.image_bindings.extend([click, keydown]);
        self.bound_images.push(image.clone());
        Ok(())
    }
}
