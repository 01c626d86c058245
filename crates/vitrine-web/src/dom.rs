//! [`Dom`] over the browser document

use vitrine::Dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Browser DOM access through `web-sys`
///
/// Mutations that the browser rejects are logged and otherwise ignored; a
/// widget never fails because one attribute could not be written.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Wrap the window and its document
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

fn selector(class: &str) -> String {
    format!(".{class}")
}

fn warn_on_err(operation: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{operation} failed: {err:?}");
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn query(&self, class: &str) -> Option<Element> {
        self.document.query_selector(&selector(class)).ok().flatten()
    }

    fn query_within(&self, scope: &Element, class: &str) -> Option<Element> {
        scope.query_selector(&selector(class)).ok().flatten()
    }

    fn query_all_within(&self, scope: &Element, class: &str) -> Vec<Element> {
        let Ok(nodes) = scope.query_selector_all(&selector(class)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        warn_on_err("setAttribute", element.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, element: &Element, name: &str) {
        warn_on_err("removeAttribute", element.remove_attribute(name));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&mut self, element: &Element, class: &str, present: bool) {
        let result = element.class_list().toggle_with_force(class, present);
        warn_on_err("classList.toggle", result.map(|_| ()));
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            warn_on_err("style.setProperty", element.style().set_property(property, value));
        }
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn focus(&mut self, element: &Element) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            warn_on_err("focus", element.focus());
        }
    }

    fn viewport_width(&self) -> f64 {
        viewport_width(&self.window)
    }
}

/// `window.innerWidth`, falling back to a desktop width
pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(vitrine::Document::DEFAULT_VIEWPORT_WIDTH)
}
