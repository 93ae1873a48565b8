//! The document seam.
//!
//! The controller only ever talks to the page through [`Page`], so the same
//! state machine drives a real browser document (see `lightbox-web`) and the
//! in-memory [`crate::MemoryPage`] used by tests.
//!
//! Selectors passed to the query methods are restricted to descendant chains
//! of compound selectors made of an optional tag name and class names, e.g.
//! `.modal .modal-images img`.

use crate::error::PageError;
use std::fmt::Debug;

/// `aria-hidden` attribute name.
pub const ARIA_HIDDEN: &str = "aria-hidden";
/// `tabindex` attribute name.
pub const TAB_INDEX: &str = "tabindex";

/// Platform abstraction over a live document.
pub trait Page {
    /// Handle to one element. Comparing two handles compares identity.
    type Node: Clone + PartialEq + Debug;

    /// The `<body>` element, if the document has one.
    fn body(&self) -> Option<Self::Node>;

    /// Primary language declared on the root element (`<html lang>`).
    fn document_lang(&self) -> Option<String>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in document order matching `selector`, restricted to
    /// descendants of `scope` when given.
    fn query_selector(&self, scope: Option<&Self::Node>, selector: &str) -> Option<Self::Node>;

    /// Every element in document order matching `selector`, restricted to
    /// descendants of `scope` when given.
    fn query_selector_all(&self, scope: Option<&Self::Node>, selector: &str) -> Vec<Self::Node>;

    /// Nearest inclusive ancestor of `node` matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn is_connected(&self, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<(), PageError>;

    /// Element id, empty when the element has none.
    fn id(&self, node: &Self::Node) -> String;

    /// # Errors
    ///
    /// Returns an error if the id cannot be assigned.
    fn set_id(&mut self, node: &Self::Node, id: &str) -> Result<(), PageError>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the attribute cannot be written.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str)
    -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns an error if the attribute cannot be removed.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str) -> Result<(), PageError>;

    /// Inline style property value, empty when unset.
    fn style(&self, node: &Self::Node, property: &str) -> String;

    /// Set an inline style property. An empty value removes the property.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no inline style or the write fails.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str)
    -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns an error if the element cannot be focused.
    fn focus(&mut self, node: &Self::Node) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns an error if the element cannot be created.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, PageError>;

    /// # Errors
    ///
    /// Returns an error if the child cannot be inserted.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), PageError>;

    /// Live source of an image (the resolved `src`), empty when unset.
    fn image_source(&self, image: &Self::Node) -> String;

    /// # Errors
    ///
    /// Returns [`PageError::NotAnImage`] when `image` is not an image element.
    fn set_image_source(&mut self, image: &Self::Node, source: &str) -> Result<(), PageError>;

    /// Live alternative text of an image, empty when unset.
    fn image_alt(&self, image: &Self::Node) -> String;

    /// # Errors
    ///
    /// Returns [`PageError::NotAnImage`] when `image` is not an image element.
    fn set_image_alt(&mut self, image: &Self::Node, alt: &str) -> Result<(), PageError>;

    /// Attach click and keydown listeners routing to
    /// [`crate::OverlayController::on_image_click`] and
    /// [`crate::OverlayController::on_image_keydown`].
    ///
    /// The controller guards this with a marker attribute; implementations
    /// attach unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the listeners cannot be registered.
    fn bind_zoom_handlers(&mut self, image: &Self::Node) -> Result<(), PageError>;
}

/// Log a failed page mutation and carry on.
pub(crate) fn report(result: Result<(), PageError>, action: &str) {
    if let Err(err) = result {
        log::warn!("{action}: {err}");
    }
}
