//! Hamburger toggle for the mobile site navigation

use vitrine::{
    require, DefaultAction, Dom, EventKind, ListenTarget, Listener, PageContext, PageEvent, Widget,
};

/// Class names the header markup must use
pub mod classes {
    /// Menu button
    pub const HAMBURGER: &str = "site-header__hamburger";
    /// Navigation list the button controls
    pub const NAV_LIST: &str = "site-header__nav-list";
    /// A link inside the list
    pub const NAV_LINK: &str = "site-header__nav-link";
    /// Modifier on the open list
    pub const NAV_LIST_OPEN: &str = "site-header__nav-list--open";
}

/// Opens and closes the mobile navigation list
///
/// The button's `aria-expanded` is the source of truth: a click reads it and
/// writes the opposite. Following any link closes the menu.
#[derive(Debug, Clone)]
pub struct MobileNav<E> {
    hamburger: E,
    list: E,
    links: Vec<E>,
}

impl<E: Clone + PartialEq> MobileNav<E> {
    /// Find the hamburger and the list; links are optional
    pub fn mount<D: Dom<Element = E>>(cx: &mut PageContext<'_, D>) -> Option<Self> {
        let dom = &*cx.dom;
        let resolved = require(dom, classes::HAMBURGER)
            .and_then(|hamburger| Ok((hamburger, require(dom, classes::NAV_LIST)?)));
        let (hamburger, list) = match resolved {
            Ok(found) => found,
            Err(err) => {
                log::debug!("mobile nav skipped: {err}");
                return None;
            }
        };
        let links = dom.query_all_within(&list, classes::NAV_LINK);
        Some(Self {
            hamburger,
            list,
            links,
        })
    }

    /// Whether the menu is currently open
    pub fn is_open<D: Dom<Element = E>>(&self, dom: &D) -> bool {
        dom.attribute(&self.hamburger, "aria-expanded").as_deref() == Some("true")
    }

    fn set_open<D: Dom<Element = E>>(&self, dom: &mut D, open: bool) {
        dom.set_bool_attribute(&self.hamburger, "aria-expanded", open);
        dom.set_class(&self.list, classes::NAV_LIST_OPEN, open);
    }
}

impl<D: Dom> Widget<D> for MobileNav<D::Element> {
    fn name(&self) -> &'static str {
        "mobile nav"
    }

    fn listeners(&self) -> Vec<Listener<D::Element>> {
        let mut listeners = vec![Listener::on(self.hamburger.clone(), EventKind::Click)];
        listeners.extend(
            self.links
                .iter()
                .map(|link| Listener::on(link.clone(), EventKind::Click)),
        );
        listeners
    }

    fn handle(
        &mut self,
        cx: &mut PageContext<'_, D>,
        current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction {
        let (PageEvent::Click, ListenTarget::Element(current)) = (event, current) else {
            return DefaultAction::Allow;
        };
        if *current == self.hamburger {
            let open = !self.is_open(&*cx.dom);
            log::trace!("mobile nav {}", if open { "opened" } else { "closed" });
            self.set_open(cx.dom, open);
        } else if self.links.contains(current) {
            self.set_open(cx.dom, false);
        }
        DefaultAction::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use vitrine::ElementId;

    fn header(h: &mut Harness) -> (ElementId, ElementId, ElementId) {
        let body = h.doc.body();
        let header = h.doc.create_element(body, "header", &[]);
        let hamburger = h.doc.create_element(header, "button", &[classes::HAMBURGER]);
        let list = h.doc.create_element(header, "ul", &[classes::NAV_LIST]);
        let item = h.doc.create_element(list, "li", &[]);
        let link = h.doc.create_element(item, "a", &[classes::NAV_LINK]);
        (hamburger, list, link)
    }

    #[test]
    fn test_requires_list() {
        let mut h = Harness::new();
        let body = h.doc.body();
        h.doc.create_element(body, "button", &[classes::HAMBURGER]);
        assert!(MobileNav::mount(&mut h.cx()).is_none());
    }

    #[test]
    fn test_hamburger_toggles() {
        let mut h = Harness::new();
        let (hamburger, list, _) = header(&mut h);
        let mut nav = MobileNav::mount(&mut h.cx()).unwrap();

        h.send(&mut nav, hamburger, PageEvent::Click);
        assert_eq!(h.doc.attribute(&hamburger, "aria-expanded").as_deref(), Some("true"));
        assert!(h.doc.has_class(&list, classes::NAV_LIST_OPEN));

        h.send(&mut nav, hamburger, PageEvent::Click);
        assert_eq!(h.doc.attribute(&hamburger, "aria-expanded").as_deref(), Some("false"));
        assert!(!h.doc.has_class(&list, classes::NAV_LIST_OPEN));
    }

    #[test]
    fn test_reads_state_from_markup() {
        let mut h = Harness::new();
        let (hamburger, list, _) = header(&mut h);
        h.doc.set_attribute(&hamburger, "aria-expanded", "true");
        let mut nav = MobileNav::mount(&mut h.cx()).unwrap();

        h.send(&mut nav, hamburger, PageEvent::Click);
        assert!(!nav.is_open(&h.doc));
        assert!(!h.doc.has_class(&list, classes::NAV_LIST_OPEN));
    }

    #[test]
    fn test_link_closes() {
        let mut h = Harness::new();
        let (hamburger, list, link) = header(&mut h);
        let mut nav = MobileNav::mount(&mut h.cx()).unwrap();

        h.send(&mut nav, hamburger, PageEvent::Click);
        h.send(&mut nav, link, PageEvent::Click);
        assert_eq!(h.doc.attribute(&hamburger, "aria-expanded").as_deref(), Some("false"));
        assert!(!h.doc.has_class(&list, classes::NAV_LIST_OPEN));

        h.send(&mut nav, link, PageEvent::Click);
        assert!(!nav.is_open(&h.doc));
    }
}
