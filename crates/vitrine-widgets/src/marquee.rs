//! Logo marquee that pauses while hovered or focused

use vitrine::{
    require, DefaultAction, Dom, EventKind, ListenTarget, Listener, PageContext, PageEvent, Widget,
};

/// Marquee root class
pub const ROOT_CLASS: &str = "logos__marquee";
/// Modifier that stops the scrolling animation
pub const PAUSED_CLASS: &str = "logos__marquee--paused";

/// Adds [`PAUSED_CLASS`] while the pointer or focus is inside the marquee
#[derive(Debug, Clone)]
pub struct MarqueePause<E> {
    root: E,
}

impl<E: Clone + PartialEq> MarqueePause<E> {
    /// Find the marquee; `None` when the page has none
    pub fn mount<D: Dom<Element = E>>(cx: &mut PageContext<'_, D>) -> Option<Self> {
        match require(&*cx.dom, ROOT_CLASS) {
            Ok(root) => Some(Self { root }),
            Err(err) => {
                log::debug!("marquee pause skipped: {err}");
                None
            }
        }
    }
}

impl<D: Dom> Widget<D> for MarqueePause<D::Element> {
    fn name(&self) -> &'static str {
        "marquee pause"
    }

    fn listeners(&self) -> Vec<Listener<D::Element>> {
        [
            EventKind::MouseEnter,
            EventKind::MouseLeave,
            EventKind::FocusIn,
            EventKind::FocusOut,
        ]
        .into_iter()
        .map(|kind| Listener::on(self.root.clone(), kind))
        .collect()
    }

    fn handle(
        &mut self,
        cx: &mut PageContext<'_, D>,
        _current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction {
        match event {
            PageEvent::MouseEnter | PageEvent::FocusIn => {
                cx.dom.set_class(&self.root, PAUSED_CLASS, true);
            }
            PageEvent::MouseLeave | PageEvent::FocusOut => {
                cx.dom.set_class(&self.root, PAUSED_CLASS, false);
            }
            _ => {}
        }
        DefaultAction::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    #[test]
    fn test_missing_marquee() {
        let mut h = Harness::new();
        assert!(MarqueePause::mount(&mut h.cx()).is_none());
    }

    #[test]
    fn test_hover_and_focus_pause() {
        let mut h = Harness::new();
        let body = h.doc.body();
        let root = h.doc.create_element(body, "div", &[ROOT_CLASS]);
        let mut marquee = MarqueePause::mount(&mut h.cx()).unwrap();

        h.send(&mut marquee, root, PageEvent::MouseEnter);
        assert!(h.doc.has_class(&root, PAUSED_CLASS));
        h.send(&mut marquee, root, PageEvent::MouseLeave);
        assert!(!h.doc.has_class(&root, PAUSED_CLASS));

        h.send(&mut marquee, root, PageEvent::FocusIn);
        h.send(&mut marquee, root, PageEvent::FocusIn);
        assert!(h.doc.has_class(&root, PAUSED_CLASS));
        assert_eq!(h.doc.classes(root).len(), 2);
        h.send(&mut marquee, root, PageEvent::FocusOut);
        assert!(!h.doc.has_class(&root, PAUSED_CLASS));
    }
}
