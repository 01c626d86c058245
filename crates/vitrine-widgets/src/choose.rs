//! "Choose" carousel: one card at a time on narrow viewports
//!
//! Below the breakpoint a single card is shown and a row of dots selects it.
//! At or above the breakpoint every card is visible and the dots are purely
//! cosmetic. Navigation clamps at both ends; nothing wraps here.

use vitrine::index::{clamp, max_index};
use vitrine::{
    require, require_all_within, require_within, DefaultAction, Dom, EventKind, Key,
    ListenTarget, Listener, NamedKey, PageConfig, PageContext, PageEvent, PresentationMode,
    ResolveError, Swipe, SwipeGesture, Widget,
};

/// Class names the carousel markup must use
pub mod classes {
    /// Carousel root
    pub const ROOT: &str = "choose__carousel";
    /// Grid holding the cards
    pub const GRID: &str = "choose__grid";
    /// A single card
    pub const CARD: &str = "choose__card";
    /// A navigation dot
    pub const DOT: &str = "choose__dot";
    /// Modifier on the selected dot
    pub const DOT_ACTIVE: &str = "choose__dot--active";
}

#[derive(Debug, Clone)]
struct ChooseElements<E> {
    root: E,
    cards: Vec<E>,
    dots: Vec<E>,
}

impl<E: Clone> ChooseElements<E> {
    fn resolve<D: Dom<Element = E>>(dom: &D) -> Result<Self, ResolveError> {
        let root = require(dom, classes::ROOT)?;
        require_within(dom, &root, classes::GRID)?;
        Ok(Self {
            cards: require_all_within(dom, &root, classes::CARD)?,
            dots: require_all_within(dom, &root, classes::DOT)?,
            root,
        })
    }
}

/// Responsive card carousel with dot navigation
#[derive(Debug, Clone)]
pub struct ChooseCarousel<E> {
    elements: ChooseElements<E>,
    active: usize,
    mode: PresentationMode,
    breakpoint: f64,
    swipe: SwipeGesture<E>,
}

impl<E: Clone + PartialEq> ChooseCarousel<E> {
    /// Resolve the carousel markup and apply the mode for the current width
    ///
    /// # Returns
    /// `None` when the root, the grid, every card or every dot is missing
    pub fn mount<D: Dom<Element = E>>(
        cx: &mut PageContext<'_, D>,
        config: &PageConfig,
    ) -> Option<Self> {
        let elements = match ChooseElements::resolve(&*cx.dom) {
            Ok(elements) => elements,
            Err(err) => {
                log::debug!("choose carousel skipped: {err}");
                return None;
            }
        };
        let swipe = SwipeGesture::attach(Some(&elements.root), config.swipe_threshold)?;

        let mut carousel = Self {
            elements,
            active: 0,
            mode: PresentationMode::Wide,
            breakpoint: config.choose_breakpoint,
            swipe,
        };
        let width = cx.dom.viewport_width();
        carousel.resize(cx.dom, width);
        Some(carousel)
    }

    /// Index of the selected card
    pub fn active(&self) -> usize {
        self.active
    }

    /// Presentation currently applied
    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Select card `index`, clamped to the collection
    pub fn go_to<D: Dom<Element = E>>(&mut self, dom: &mut D, index: isize) {
        self.active = clamp(index, max_index(self.elements.cards.len()));
        log::trace!("choose carousel at {}", self.active);
        self.render(dom);
    }

    /// Re-evaluate the presentation for a viewport `width`
    pub fn resize<D: Dom<Element = E>>(&mut self, dom: &mut D, width: f64) {
        self.mode = PresentationMode::for_width(width, self.breakpoint);
        self.render(dom);
    }

    fn render<D: Dom<Element = E>>(&self, dom: &mut D) {
        match self.mode {
            PresentationMode::Narrow => {
                for (index, card) in self.elements.cards.iter().enumerate() {
                    if index == self.active {
                        dom.remove_attribute(card, "hidden");
                        dom.set_attribute(card, "aria-hidden", "false");
                    } else {
                        dom.set_attribute(card, "hidden", "hidden");
                        dom.set_attribute(card, "aria-hidden", "true");
                    }
                }
                self.render_dots(dom, self.active);
            }
            PresentationMode::Wide => {
                for card in &self.elements.cards {
                    dom.remove_attribute(card, "hidden");
                    dom.set_attribute(card, "aria-hidden", "false");
                }
                self.render_dots(dom, 0);
            }
        }
    }

    fn render_dots<D: Dom<Element = E>>(&self, dom: &mut D, selected: usize) {
        for (index, dot) in self.elements.dots.iter().enumerate() {
            let is_active = index == selected;
            dom.set_class(dot, classes::DOT_ACTIVE, is_active);
            dom.set_bool_attribute(dot, "aria-selected", is_active);
            dom.set_attribute(dot, "tabindex", if is_active { "0" } else { "-1" });
        }
    }

    fn handle_dot_key<D: Dom<Element = E>>(
        &mut self,
        dom: &mut D,
        dot: usize,
        key: &Key,
    ) -> DefaultAction {
        let target = match key.named() {
            Some(NamedKey::Enter | NamedKey::Space) => {
                self.go_to(dom, dot as isize);
                return DefaultAction::Prevent;
            }
            Some(NamedKey::ArrowRight) => dot as isize + 1,
            Some(NamedKey::ArrowLeft) => dot as isize - 1,
            _ => return DefaultAction::Allow,
        };
        self.go_to(dom, target);
        if self.mode == PresentationMode::Narrow {
            if let Some(dot) = self.elements.dots.get(self.active) {
                dom.focus(dot);
            }
        }
        DefaultAction::Prevent
    }
}

impl<D: Dom> Widget<D> for ChooseCarousel<D::Element> {
    fn name(&self) -> &'static str {
        "choose carousel"
    }

    fn listeners(&self) -> Vec<Listener<D::Element>> {
        let mut listeners: Vec<_> = self
            .elements
            .dots
            .iter()
            .flat_map(|dot| {
                [
                    Listener::on(dot.clone(), EventKind::Click),
                    Listener::on(dot.clone(), EventKind::KeyDown),
                ]
            })
            .collect();
        listeners.extend(self.swipe.listeners());
        listeners.push(Listener::window(EventKind::Resize));
        listeners
    }

    fn handle(
        &mut self,
        cx: &mut PageContext<'_, D>,
        current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction {
        let current = match current {
            ListenTarget::Window => {
                if let PageEvent::Resize { width } = event {
                    self.resize(cx.dom, *width);
                }
                return DefaultAction::Allow;
            }
            ListenTarget::Element(current) => current,
        };

        if *current == self.elements.root {
            match self.swipe.handle(event) {
                Some(Swipe::Left) => self.go_to(cx.dom, self.active as isize + 1),
                Some(Swipe::Right) => self.go_to(cx.dom, self.active as isize - 1),
                None => {}
            }
            return DefaultAction::Allow;
        }

        let Some(dot) = self.elements.dots.iter().position(|d| d == current) else {
            return DefaultAction::Allow;
        };
        match event {
            PageEvent::Click => {
                self.go_to(cx.dom, dot as isize);
                DefaultAction::Allow
            }
            PageEvent::KeyDown(key) => self.handle_dot_key(cx.dom, dot, key),
            _ => DefaultAction::Allow,
        }
    }
}
