//! Backend-agnostic DOM access
//!
//! Widgets never talk to a browser directly. They go through the [`Dom`]
//! trait, which exposes the handful of operations the page behaviours need:
//! class-name queries, attribute and class mutation, inline styles, text and
//! focus. Backends (the browser, or the in-memory [`Document`] below) decide
//! what an element handle is.

use std::collections::BTreeMap;
use std::fmt;

/// Minimal DOM surface used by every widget
///
/// All queries select by a single class name (without the leading dot) and
/// only ever match descendants of the scope, never the scope itself.
pub trait Dom {
    /// Handle to an element in this DOM
    type Element: Clone + PartialEq + fmt::Debug;

    /// First element in the document carrying `class`
    fn query(&self, class: &str) -> Option<Self::Element>;

    /// First descendant of `scope` carrying `class`
    fn query_within(&self, scope: &Self::Element, class: &str) -> Option<Self::Element>;

    /// All descendants of `scope` carrying `class`, in document order
    fn query_all_within(&self, scope: &Self::Element, class: &str) -> Vec<Self::Element>;

    /// Parent element, if any
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Read an attribute value
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Set an attribute value
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Remove an attribute (no-op if absent)
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    /// Whether the element's class list contains `class`
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Force a class on or off (`classList.toggle(class, present)`)
    fn set_class(&mut self, element: &Self::Element, class: &str, present: bool);

    /// Set an inline style property (e.g. `transform`)
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Replace the element's text content
    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Move keyboard focus to the element
    fn focus(&mut self, element: &Self::Element);

    /// Current viewport width in CSS pixels
    fn viewport_width(&self) -> f64;

    /// Flip a class and return whether it is now present
    fn toggle_class(&mut self, element: &Self::Element, class: &str) -> bool {
        let present = !self.has_class(element, class);
        self.set_class(element, class, present);
        present
    }

    /// Write a boolean attribute as the literal `"true"` / `"false"`
    fn set_bool_attribute(&mut self, element: &Self::Element, name: &str, value: bool) {
        self.set_attribute(element, name, if value { "true" } else { "false" });
    }
}

/// Handle to an element of a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
struct ElementData {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
}

/// In-memory document tree
///
/// Used by tests, demos and any host without a real browser. Element handles
/// are arena indices; handles from another document are ignored by every
/// operation rather than panicking.
///
/// # Example
///
/// ```
/// use vitrine::{Document, Dom};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let marquee = doc.create_element(body, "div", &["logos__marquee"]);
/// assert_eq!(doc.query("logos__marquee"), Some(marquee));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<ElementData>,
    focused: Option<ElementId>,
    viewport_width: f64,
}

impl Document {
    /// Default viewport width for new documents
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

    /// Create an empty document containing only `<body>`
    pub fn new() -> Self {
        Self {
            elements: vec![ElementData {
                tag: "body".to_string(),
                ..Default::default()
            }],
            focused: None,
            viewport_width: Self::DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// The `<body>` element
    pub fn body(&self) -> ElementId {
        ElementId(0)
    }

    /// Append a new element under `parent`
    ///
    /// # Arguments
    /// * `parent` - Element to append to
    /// * `tag` - Tag name (informational only)
    /// * `classes` - Initial class list
    pub fn create_element(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(ElementData {
            tag: tag.to_string(),
            parent: Some(parent),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        });
        if let Some(parent) = self.elements.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    /// Tag name of an element
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.data(element).map(|d| d.tag.as_str())
    }

    /// Direct children of an element
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.data(element).map_or(&[], |d| d.children.as_slice())
    }

    /// Class list of an element
    pub fn classes(&self, element: ElementId) -> &[String] {
        self.data(element).map_or(&[], |d| d.classes.as_slice())
    }

    /// Inline style property of an element
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.data(element)
            .and_then(|d| d.style.get(property))
            .map(String::as_str)
    }

    /// Text content of an element
    pub fn text(&self, element: ElementId) -> &str {
        self.data(element).map_or("", |d| d.text.as_str())
    }

    /// Whether the element carries the attribute at all
    pub fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.data(element)
            .is_some_and(|d| d.attributes.contains_key(name))
    }

    /// Currently focused element
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Change the viewport width reported by [`Dom::viewport_width`]
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    fn data(&self, element: ElementId) -> Option<&ElementData> {
        self.elements.get(element.0)
    }

    fn data_mut(&mut self, element: ElementId) -> Option<&mut ElementData> {
        self.elements.get_mut(element.0)
    }

    /// Pre-order descendants of `scope`, excluding `scope` itself
    fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    type Element = ElementId;

    fn query(&self, class: &str) -> Option<ElementId> {
        let body = self.body();
        if self.has_class(&body, class) {
            return Some(body);
        }
        self.query_within(&body, class)
    }

    fn query_within(&self, scope: &ElementId, class: &str) -> Option<ElementId> {
        self.descendants(*scope)
            .into_iter()
            .find(|id| self.has_class(id, class))
    }

    fn query_all_within(&self, scope: &ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(*scope)
            .into_iter()
            .filter(|id| self.has_class(id, class))
            .collect()
    }

    fn parent(&self, element: &ElementId) -> Option<ElementId> {
        self.data(*element).and_then(|d| d.parent)
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.data(*element)
            .and_then(|d| d.attributes.get(name))
            .cloned()
    }

    fn set_attribute(&mut self, element: &ElementId, name: &str, value: &str) {
        if let Some(d) = self.data_mut(*element) {
            d.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, element: &ElementId, name: &str) {
        if let Some(d) = self.data_mut(*element) {
            d.attributes.remove(name);
        }
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.data(*element)
            .is_some_and(|d| d.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, element: &ElementId, class: &str, present: bool) {
        let Some(d) = self.data_mut(*element) else {
            return;
        };
        let existing = d.classes.iter().position(|c| c == class);
        match (present, existing) {
            (true, None) => d.classes.push(class.to_string()),
            (false, Some(index)) => {
                d.classes.remove(index);
            }
            _ => {}
        }
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        if let Some(d) = self.data_mut(*element) {
            d.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_text(&mut self, element: &ElementId, text: &str) {
        if let Some(d) = self.data_mut(*element) {
            d.text = text.to_string();
        }
    }

    fn focus(&mut self, element: &ElementId) {
        if self.data(*element).is_some() {
            self.focused = Some(*element);
        }
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element(body, "div", &["card"]);
        let a_child = doc.create_element(a, "div", &["card"]);
        let b = doc.create_element(body, "div", &["card"]);

        assert_eq!(doc.query("card"), Some(a));
        assert_eq!(doc.query_all_within(&body, "card"), vec![a, a_child, b]);
    }

    #[test]
    fn test_query_excludes_scope() {
        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc.create_element(body, "div", &["group"]);
        let inner = doc.create_element(outer, "div", &["group"]);

        assert_eq!(doc.query_within(&outer, "group"), Some(inner));
        assert!(doc.query_within(&inner, "group").is_none());
    }

    #[test]
    fn test_class_toggling() {
        let mut doc = Document::new();
        let body = doc.body();
        let el = doc.create_element(body, "ul", &["nav"]);

        doc.set_class(&el, "open", true);
        doc.set_class(&el, "open", true);
        assert_eq!(doc.classes(el), &["nav".to_string(), "open".to_string()]);

        assert!(!doc.toggle_class(&el, "open"));
        assert!(!doc.has_class(&el, "open"));
        assert!(doc.toggle_class(&el, "open"));
    }

    #[test]
    fn test_attributes_and_parent() {
        let mut doc = Document::new();
        let body = doc.body();
        let el = doc.create_element(body, "button", &[]);

        doc.set_bool_attribute(&el, "aria-pressed", true);
        assert_eq!(doc.attribute(&el, "aria-pressed").as_deref(), Some("true"));

        doc.remove_attribute(&el, "aria-pressed");
        assert!(!doc.has_attribute(el, "aria-pressed"));
        assert_eq!(doc.parent(&el), Some(body));
        assert_eq!(doc.parent(&body), None);
        assert_eq!(doc.tag(el), Some("button"));
        assert_eq!(doc.tag(body), Some("body"));
    }

    #[test]
    fn test_foreign_handles_are_ignored() {
        let mut small = Document::new();
        let mut big = Document::new();
        let body = big.body();
        let foreign = big.create_element(body, "div", &[]);

        small.set_attribute(&foreign, "hidden", "hidden");
        small.focus(&foreign);
        assert!(small.attribute(&foreign, "hidden").is_none());
        assert!(small.focused().is_none());
    }
}
