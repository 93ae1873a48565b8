//! In-memory document implementing [`Page`].
//!
//! Backs the controller in tests and in native embeddings that mirror a page
//! structure without a browser. Supports the selector subset described in
//! [`crate::page`], document-order queries, inline styles, a focus pointer
//! and a count of zoom handler bindings per element.

use crate::error::PageError;
use crate::page::{Page, TAB_INDEX};
use std::collections::BTreeMap;

/// Handle to an element in a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .map(String::as_str)
            .unwrap_or_default()
            .split_whitespace()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

fn parse_selector(selector: &str) -> Vec<Compound> {
    selector
        .split_whitespace()
        .map(|token| {
            let mut parts = token.split('.');
            let tag = parts
                .next()
                .filter(|tag| !tag.is_empty())
                .map(str::to_ascii_lowercase);
            let classes = parts
                .filter(|class| !class.is_empty())
                .map(str::to_string)
                .collect();
            Compound { tag, classes }
        })
        .collect()
}

fn parse_inline_style(text: &str) -> BTreeMap<String, String> {
    text.split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            (!property.is_empty() && !value.is_empty())
                .then(|| (property.to_ascii_lowercase(), value.to_string()))
        })
        .collect()
}

const NATIVELY_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea"];

#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<NodeData>,
    root: usize,
    body: usize,
    focused: Option<usize>,
    focus_history: Vec<NodeId>,
    zoom_bindings: BTreeMap<NodeId, usize>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// An empty document: `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            nodes: vec![NodeData::new("html")],
            root: 0,
            body: 0,
            focused: None,
            focus_history: Vec::new(),
            zoom_bindings: BTreeMap::new(),
        };
        page.body = page.push(NodeData::new("body"));
        page.attach(page.root, page.body);
        page
    }

    /// Set the root element's `lang`.
    #[must_use]
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.nodes[self.root]
            .attributes
            .insert(String::from("lang"), lang.to_string());
        self
    }

    #[must_use]
    pub const fn body_id(&self) -> NodeId {
        NodeId(self.body)
    }

    /// Create an element with `attributes` and append it to `parent`.
    ///
    /// A `style` attribute is parsed into inline style properties.
    pub fn element(&mut self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut data = NodeData::new(tag);
        for (name, value) in attributes {
            if *name == "style" {
                data.style = parse_inline_style(value);
            } else {
                data.attributes
                    .insert(name.to_ascii_lowercase(), (*value).to_string());
            }
        }
        let index = self.push(data);
        self.attach(parent.0, index);
        NodeId(index)
    }

    /// Detach `node` (and its subtree) from its parent.
    pub fn remove(&mut self, node: NodeId) {
        let parent = self
            .nodes
            .get_mut(node.0)
            .and_then(|data| data.parent.take());
        if let Some(parent) = parent.and_then(|index| self.nodes.get_mut(index)) {
            parent.children.retain(|child| *child != node.0);
        }
        if self.focused.is_some_and(|f| !self.is_connected(&NodeId(f))) {
            self.focused = None;
        }
    }

    /// Element currently holding focus.
    #[must_use]
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused.map(NodeId)
    }

    /// Every element focused so far, oldest first.
    #[must_use]
    pub fn focus_history(&self) -> &[NodeId] {
        &self.focus_history
    }

    /// Move focus without going through the controller, as a user tabbing
    /// through the page would. Returns the node for convenience.
    pub fn move_focus(&mut self, node: NodeId) -> NodeId {
        self.focused = Some(node.0);
        self.focus_history.push(node);
        node
    }

    /// How many times zoom handlers were bound to `node`.
    #[must_use]
    pub fn zoom_bindings(&self, node: NodeId) -> usize {
        self.zoom_bindings.get(&node).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        self.data(&node).map_or("", |data| data.tag.as_str())
    }

    fn push(&mut self, data: NodeData) -> usize {
        self.nodes.push(data);
        self.nodes.len() - 1
    }

    fn attach(&mut self, parent: usize, child: usize) {
        if parent >= self.nodes.len() || child >= self.nodes.len() {
            return;
        }
        if let Some(old) = self.nodes[child].parent.replace(parent) {
            self.nodes[old].children.retain(|c| *c != child);
        }
        self.nodes[parent].children.push(child);
    }

    fn data(&self, node: &NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    fn parent(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).and_then(|data| data.parent)
    }

    /// Descendants of `index` in document order, excluding `index`.
    fn descendants(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self
            .nodes
            .get(index)
            .map(|data| data.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next].children.iter().rev());
        }
        out
    }

    fn matches_compound(&self, index: usize, compound: &Compound) -> bool {
        let Some(node) = self.nodes.get(index) else {
            return false;
        };
        compound.tag.as_ref().is_none_or(|tag| *tag == node.tag)
            && compound
                .classes
                .iter()
                .all(|class| node.classes().any(|c| c == class.as_str()))
    }

    fn matches(&self, index: usize, chain: &[Compound]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(index, last) {
            return false;
        }
        let mut ancestor = self.parent(index);
        for compound in rest.iter().rev() {
            loop {
                let Some(candidate) = ancestor else {
                    return false;
                };
                ancestor = self.parent(candidate);
                if self.matches_compound(candidate, compound) {
                    break;
                }
            }
        }
        true
    }

    fn candidates(&self, scope: Option<&NodeId>) -> Vec<usize> {
        match scope {
            Some(scope) => self.descendants(scope.0),
            None => {
                let mut all = vec![self.root];
                all.extend(self.descendants(self.root));
                all
            }
        }
    }

    fn node_mut(&mut self, node: &NodeId) -> Result<&mut NodeData, PageError> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| PageError::Dom(format!("unknown node {}", node.0)))
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(self.body))
    }

    fn document_lang(&self) -> Option<String> {
        self.data(&NodeId(self.root))
            .and_then(|root| root.attributes.get("lang").cloned())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.candidates(None)
            .into_iter()
            .find(|index| self.nodes[*index].attributes.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn query_selector(&self, scope: Option<&NodeId>, selector: &str) -> Option<NodeId> {
        let chain = parse_selector(selector);
        self.candidates(scope)
            .into_iter()
            .find(|index| self.matches(*index, &chain))
            .map(NodeId)
    }

    fn query_selector_all(&self, scope: Option<&NodeId>, selector: &str) -> Vec<NodeId> {
        let chain = parse_selector(selector);
        self.candidates(scope)
            .into_iter()
            .filter(|index| self.matches(*index, &chain))
            .map(NodeId)
            .collect()
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let chain = parse_selector(selector);
        let mut current = Some(node.0);
        while let Some(index) = current {
            if self.matches(index, &chain) {
                return Some(NodeId(index));
            }
            current = self.parent(index);
        }
        None
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == ancestor.0 {
                return true;
            }
            current = self.parent(index);
        }
        false
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&NodeId(self.root), node)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.data(node)
            .is_some_and(|data| data.classes().any(|c| c == class))
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> Result<(), PageError> {
        if self.has_class(node, class) {
            return Ok(());
        }
        let data = self.node_mut(node)?;
        let entry = data.attributes.entry(String::from("class")).or_default();
        if !entry.is_empty() {
            entry.push(' ');
        }
        entry.push_str(class);
        Ok(())
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) -> Result<(), PageError> {
        let data = self.node_mut(node)?;
        if let Some(list) = data.attributes.get_mut("class") {
            *list = list
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
        }
        Ok(())
    }

    fn id(&self, node: &NodeId) -> String {
        self.attribute(node, "id").unwrap_or_default()
    }

    fn set_id(&mut self, node: &NodeId, id: &str) -> Result<(), PageError> {
        self.set_attribute(node, "id", id)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.data(node)
            .and_then(|data| data.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), PageError> {
        self.node_mut(node)?
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) -> Result<(), PageError> {
        self.node_mut(node)?.attributes.remove(name);
        Ok(())
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.data(node)
            .and_then(|data| data.style.get(property).cloned())
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), PageError> {
        let style = &mut self.node_mut(node)?.style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn focus(&mut self, node: &NodeId) -> Result<(), PageError> {
        if !self.is_connected(node) {
            return Err(PageError::Detached);
        }
        let data = self
            .data(node)
            .ok_or_else(|| PageError::Dom(format!("unknown node {}", node.0)))?;
        let focusable = NATIVELY_FOCUSABLE.contains(&data.tag.as_str())
            || data.attributes.contains_key(TAB_INDEX);
        if !focusable {
            return Err(PageError::NotFocusable);
        }
        self.move_focus(*node);
        Ok(())
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, PageError> {
        Ok(NodeId(self.push(NodeData::new(tag))))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), PageError> {
        self.node_mut(parent)?;
        self.node_mut(child)?;
        if self.contains(child, parent) {
            return Err(PageError::Dom(String::from(
                "cannot insert an element into its own subtree",
            )));
        }
        self.attach(parent.0, child.0);
        Ok(())
    }

    fn image_source(&self, image: &NodeId) -> String {
        self.data(image)
            .filter(|data| data.tag == "img")
            .and_then(|data| data.attributes.get("src").cloned())
            .unwrap_or_default()
    }

    fn set_image_source(&mut self, image: &NodeId, source: &str) -> Result<(), PageError> {
        if self.node_mut(image)?.tag != "img" {
            return Err(PageError::NotAnImage);
        }
        self.set_attribute(image, "src", source)
    }

    fn image_alt(&self, image: &NodeId) -> String {
        self.data(image)
            .filter(|data| data.tag == "img")
            .and_then(|data| data.attributes.get("alt").cloned())
            .unwrap_or_default()
    }

    fn set_image_alt(&mut self, image: &NodeId, alt: &str) -> Result<(), PageError> {
        if self.node_mut(image)?.tag != "img" {
            return Err(PageError::NotAnImage);
        }
        self.set_attribute(image, "alt", alt)
    }

    fn bind_zoom_handlers(&mut self, image: &NodeId) -> Result<(), PageError> {
        *self.zoom_bindings.entry(*image).or_default() += 1;
        Ok(())
    }
}
