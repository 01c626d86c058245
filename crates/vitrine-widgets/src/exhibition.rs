//! Exhibition slider: a single row of cards with optional autoplay
//!
//! Autoplay is off until the visitor presses the toggle. Hovering, focusing
//! or touching the slider pauses it. Leaving re-arms autoplay only if it is
//! still playing at the moment of leaving, so hovering never turns on
//! autoplay the visitor did not start.

use vitrine::index::{clamp, max_index, wrap_next, wrap_prev};
use vitrine::{
    require, require_all_within, require_within, AutoplayTimer, DefaultAction, Dom, EventKind,
    Key, ListenTarget, Listener, NamedKey, PageConfig, PageContext, PageEvent, Preferences,
    ResolveError, Swipe, SwipeGesture, TimerId, Widget,
};

use crate::autoplay::AutoplayControl;

/// Class names the exhibition markup must use
pub mod classes {
    /// Slider root
    pub const ROOT: &str = "exhibition__slider";
    /// Horizontal track holding the cards
    pub const TRACK: &str = "exhibition__track";
    /// A single card
    pub const CARD: &str = "exhibition__card";
    /// Previous card button
    pub const PREV: &str = "exhibition__control--prev";
    /// Next card button
    pub const NEXT: &str = "exhibition__control--next";
    /// Play/pause button
    pub const TOGGLE: &str = "exhibition__control--toggle";
    /// Screen-reader text inside the play/pause button
    pub const TOGGLE_LABEL: &str = "visually-hidden";
}

#[derive(Debug, Clone)]
struct ExhibitionElements<E> {
    root: E,
    track: E,
    cards: Vec<E>,
    prev: Option<E>,
    next: Option<E>,
    toggle: Option<E>,
    toggle_label: Option<E>,
}

impl<E: Clone> ExhibitionElements<E> {
    fn resolve<D: Dom<Element = E>>(dom: &D) -> Result<Self, ResolveError> {
        let root = require(dom, classes::ROOT)?;
        let track = require_within(dom, &root, classes::TRACK)?;
        let cards = require_all_within(dom, &root, classes::CARD)?;
        let toggle = dom.query_within(&root, classes::TOGGLE);
        let toggle_label = toggle
            .as_ref()
            .and_then(|toggle| dom.query_within(toggle, classes::TOGGLE_LABEL));
        Ok(Self {
            prev: dom.query_within(&root, classes::PREV),
            next: dom.query_within(&root, classes::NEXT),
            root,
            track,
            cards,
            toggle,
            toggle_label,
        })
    }
}

/// Single-axis card slider
#[derive(Debug, Clone)]
pub struct ExhibitionSlider<E> {
    elements: ExhibitionElements<E>,
    current: usize,
    autoplay: AutoplayControl<E>,
    swipe: SwipeGesture<E>,
}

impl<E: Clone + PartialEq> ExhibitionSlider<E> {
    /// Resolve the exhibition markup and show the first card, paused
    ///
    /// # Returns
    /// `None` when the root, the track or every card is missing
    pub fn mount<D: Dom<Element = E>>(
        cx: &mut PageContext<'_, D>,
        preferences: &Preferences,
        config: &PageConfig,
    ) -> Option<Self> {
        let elements = match ExhibitionElements::resolve(&*cx.dom) {
            Ok(elements) => elements,
            Err(err) => {
                log::debug!("exhibition slider skipped: {err}");
                return None;
            }
        };

        let timer = AutoplayTimer::new(config.exhibition.delay(), preferences);
        let autoplay = AutoplayControl::new(
            elements.root.clone(),
            elements.toggle.clone(),
            elements.toggle_label.clone(),
            timer,
        );
        let swipe = SwipeGesture::attach(Some(&elements.root), config.swipe_threshold)?;

        let mut slider = Self {
            elements,
            current: 0,
            autoplay,
            swipe,
        };
        slider.go_to(cx.dom, 0);
        slider.autoplay.stop(cx);
        Some(slider)
    }

    /// Index of the visible card
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of cards
    pub fn card_count(&self) -> usize {
        self.elements.cards.len()
    }

    /// Whether autoplay is running
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Show card `index`, clamped to the collection
    pub fn go_to<D: Dom<Element = E>>(&mut self, dom: &mut D, index: isize) {
        self.current = clamp(index, max_index(self.card_count()));
        log::trace!("exhibition slider at {}", self.current);

        let x = -(self.current as i64) * 100;
        dom.set_style(&self.elements.track, "transform", &format!("translateX({x}%)"));
        for (index, card) in self.elements.cards.iter().enumerate() {
            dom.set_bool_attribute(card, "aria-hidden", index != self.current);
        }
    }

    /// Next card, wrapping to the first
    pub fn next<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let next = wrap_next(self.current, max_index(self.card_count()));
        self.go_to(dom, next as isize);
    }

    /// Previous card, wrapping to the last
    pub fn prev<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let prev = wrap_prev(self.current, max_index(self.card_count()));
        self.go_to(dom, prev as isize);
    }

    /// Start or stop autoplay, as the toggle button does
    pub fn toggle_autoplay<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>) {
        self.autoplay.toggle(cx);
    }

    fn step<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>, forward: bool) {
        self.autoplay.stop(cx);
        if forward {
            self.next(cx.dom);
        } else {
            self.prev(cx.dom);
        }
    }

    // Re-arms only while still playing; an interaction that paused playback
    // leaves it paused.
    fn resume_after_interaction<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>) {
        if self.autoplay.is_playing() {
            self.autoplay.start(cx);
        }
    }

    fn handle_key<D: Dom<Element = E>>(
        &mut self,
        cx: &mut PageContext<'_, D>,
        key: &Key,
    ) -> DefaultAction {
        match key.named() {
            Some(NamedKey::ArrowRight) => self.step(cx, true),
            Some(NamedKey::ArrowLeft) => self.step(cx, false),
            _ => return DefaultAction::Allow,
        }
        DefaultAction::Prevent
    }

    fn handle_root<D: Dom<Element = E>>(
        &mut self,
        cx: &mut PageContext<'_, D>,
        event: &PageEvent,
    ) -> DefaultAction {
        match event {
            PageEvent::KeyDown(key) => return self.handle_key(cx, key),
            PageEvent::MouseEnter | PageEvent::FocusIn => self.autoplay.stop(cx),
            PageEvent::MouseLeave | PageEvent::FocusOut => self.resume_after_interaction(cx),
            PageEvent::TouchStart(_) => {
                self.autoplay.stop(cx);
                self.swipe.handle(event);
            }
            PageEvent::TouchEnd(_) => match self.swipe.handle(event) {
                Some(Swipe::Left) => self.step(cx, true),
                Some(Swipe::Right) => self.step(cx, false),
                None => {}
            },
            _ => {}
        }
        DefaultAction::Allow
    }
}

impl<D: Dom> Widget<D> for ExhibitionSlider<D::Element> {
    fn name(&self) -> &'static str {
        "exhibition slider"
    }

    fn listeners(&self) -> Vec<Listener<D::Element>> {
        let root = &self.elements.root;
        let mut listeners: Vec<_> = [
            EventKind::KeyDown,
            EventKind::MouseEnter,
            EventKind::MouseLeave,
            EventKind::FocusIn,
            EventKind::FocusOut,
        ]
        .into_iter()
        .map(|kind| Listener::on(root.clone(), kind))
        .collect();
        listeners.extend(self.swipe.listeners());
        listeners.extend(
            [&self.elements.prev, &self.elements.next, &self.elements.toggle]
                .into_iter()
                .flatten()
                .map(|control| Listener::on(control.clone(), EventKind::Click)),
        );
        listeners
    }

    fn handle(
        &mut self,
        cx: &mut PageContext<'_, D>,
        current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction {
        let ListenTarget::Element(current) = current else {
            return DefaultAction::Allow;
        };
        if *current == self.elements.root {
            return self.handle_root(cx, event);
        }
        if *event != PageEvent::Click {
            return DefaultAction::Allow;
        }

        let current = Some(current);
        if current == self.elements.next.as_ref() {
            self.step(cx, true);
        } else if current == self.elements.prev.as_ref() {
            self.step(cx, false);
        } else if current == self.elements.toggle.as_ref() {
            self.toggle_autoplay(cx);
        }
        DefaultAction::Allow
    }

    fn on_timer(&mut self, cx: &mut PageContext<'_, D>, timer: TimerId) {
        if self.autoplay.owns(timer) {
            self.next(cx.dom);
        }
    }

    fn teardown(&mut self, cx: &mut PageContext<'_, D>) {
        self.autoplay.stop(cx);
    }
}
