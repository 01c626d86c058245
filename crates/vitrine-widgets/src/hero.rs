//! Hero slider with two navigation axes
//!
//! Groups of slides are laid out horizontally; the slides of each group are
//! stacked vertically. The slider tracks a `(horizontal, vertical)` position,
//! translates the tracks to show it, and keeps only the active slide in the
//! tab order.
//!
//! Autoplay advances vertically every 5 seconds. Any explicit navigation
//! (buttons, arrow keys, swipes) stops it; hovering or focusing the slider
//! pauses it, and leaving resumes it unless reduced motion was requested.

use vitrine::index::{clamp, max_index, wrap_next, wrap_prev};
use vitrine::{
    require, require_all_within, require_within, AutoplayTimer, DefaultAction, Dom, EventKind,
    Key, ListenTarget, Listener, NamedKey, PageConfig, PageContext, PageEvent, Preferences,
    ResolveError, Swipe, SwipeGesture, TimerId, Widget,
};

use crate::autoplay::AutoplayControl;

/// Class names the hero markup must use
pub mod classes {
    /// Slider root
    pub const ROOT: &str = "hero__slider";
    /// Horizontal track holding every group
    pub const TRACK: &str = "hero__slider-track";
    /// One column of slides
    pub const GROUP: &str = "hero__slider-group";
    /// A single slide
    pub const SLIDE: &str = "hero__slide";
    /// Vertical track inside a group
    pub const VERTICAL_TRACK: &str = "hero__slider-vertical-track";
    /// Previous group button
    pub const PREV_X: &str = "hero__control--prev-x";
    /// Next group button
    pub const NEXT_X: &str = "hero__control--next-x";
    /// Previous slide button
    pub const PREV_Y: &str = "hero__control--prev-y";
    /// Next slide button
    pub const NEXT_Y: &str = "hero__control--next-y";
    /// Play/pause button
    pub const TOGGLE: &str = "hero__control--toggle";
    /// Text inside the play/pause button
    pub const TOGGLE_LABEL: &str = "hero__control-label";
}

#[derive(Debug, Clone)]
struct HeroGroup<E> {
    slides: Vec<E>,
    vertical_track: Option<E>,
}

#[derive(Debug, Clone)]
struct HeroControls<E> {
    prev_x: Option<E>,
    next_x: Option<E>,
    prev_y: Option<E>,
    next_y: Option<E>,
}

#[derive(Debug, Clone)]
struct HeroElements<E> {
    root: E,
    track: E,
    groups: Vec<HeroGroup<E>>,
    slides: Vec<E>,
    controls: HeroControls<E>,
    toggle: Option<E>,
    toggle_label: Option<E>,
}

impl<E: Clone> HeroElements<E> {
    fn resolve<D: Dom<Element = E>>(dom: &D) -> Result<Self, ResolveError> {
        let root = require(dom, classes::ROOT)?;
        let track = require_within(dom, &root, classes::TRACK)?;
        let groups = require_all_within(dom, &root, classes::GROUP)?
            .into_iter()
            .map(|group| -> Result<HeroGroup<E>, ResolveError> {
                Ok(HeroGroup {
                    slides: require_all_within(dom, &group, classes::SLIDE)?,
                    vertical_track: dom.query_within(&group, classes::VERTICAL_TRACK),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let slides = dom.query_all_within(&root, classes::SLIDE);
        let toggle = dom.query_within(&root, classes::TOGGLE);
        let toggle_label = toggle
            .as_ref()
            .and_then(|toggle| dom.query_within(toggle, classes::TOGGLE_LABEL));

        Ok(Self {
            controls: HeroControls {
                prev_x: dom.query_within(&root, classes::PREV_X),
                next_x: dom.query_within(&root, classes::NEXT_X),
                prev_y: dom.query_within(&root, classes::PREV_Y),
                next_y: dom.query_within(&root, classes::NEXT_Y),
            },
            root,
            track,
            groups,
            slides,
            toggle,
            toggle_label,
        })
    }
}

/// Which control a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeroControl {
    PrevX,
    NextX,
    PrevY,
    NextY,
    Toggle,
}

/// Dual-axis hero slider
#[derive(Debug, Clone)]
pub struct HeroSlider<E> {
    elements: HeroElements<E>,
    horizontal: usize,
    vertical: usize,
    autoplay: AutoplayControl<E>,
    swipe: SwipeGesture<E>,
}

impl<E: Clone + PartialEq> HeroSlider<E> {
    /// Resolve the hero markup and start it at `(0, 0)`
    ///
    /// Autoplay starts immediately unless reduced motion is set, in which
    /// case the paused state is rendered instead.
    ///
    /// # Returns
    /// `None` when the root, the track, any group or any group's slides are missing
    pub fn mount<D: Dom<Element = E>>(
        cx: &mut PageContext<'_, D>,
        preferences: &Preferences,
        config: &PageConfig,
    ) -> Option<Self> {
        let elements = match HeroElements::resolve(&*cx.dom) {
            Ok(elements) => elements,
            Err(err) => {
                log::debug!("hero slider skipped: {err}");
                return None;
            }
        };

        let timer = AutoplayTimer::new(config.hero.delay(), preferences);
        let autoplay = AutoplayControl::new(
            elements.root.clone(),
            elements.toggle.clone(),
            elements.toggle_label.clone(),
            timer,
        );
        let swipe = SwipeGesture::attach(Some(&elements.root), config.swipe_threshold)?;

        let mut slider = Self {
            elements,
            horizontal: 0,
            vertical: 0,
            autoplay,
            swipe,
        };
        slider.go_to(cx.dom, 0, 0);
        if !slider.autoplay.start(cx) {
            slider.autoplay.stop(cx);
        }
        Some(slider)
    }

    /// Current `(horizontal, vertical)` position
    pub fn position(&self) -> (usize, usize) {
        (self.horizontal, self.vertical)
    }

    /// Number of groups along the horizontal axis
    pub fn group_count(&self) -> usize {
        self.elements.groups.len()
    }

    /// Number of slides in group `group` (0 for an unknown group)
    pub fn slides_in_group(&self, group: usize) -> usize {
        self.elements.groups.get(group).map_or(0, |g| g.slides.len())
    }

    /// Whether autoplay is running
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Jump to a position, clamping both axes
    ///
    /// The vertical index is clamped against the slide count of the clamped
    /// horizontal group.
    pub fn go_to<D: Dom<Element = E>>(&mut self, dom: &mut D, horizontal: isize, vertical: isize) {
        self.horizontal = clamp(horizontal, max_index(self.group_count()));
        self.vertical = clamp(vertical, max_index(self.slides_in_group(self.horizontal)));
        log::trace!("hero slider at ({}, {})", self.horizontal, self.vertical);
        self.update_transforms(dom);
        self.update_focusability(dom);
    }

    /// Next slide in the current group, wrapping to the first
    pub fn next_vertical<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let max = max_index(self.slides_in_group(self.horizontal));
        self.go_to(dom, self.horizontal as isize, wrap_next(self.vertical, max) as isize);
    }

    /// Previous slide in the current group, wrapping to the last
    pub fn prev_vertical<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let max = max_index(self.slides_in_group(self.horizontal));
        self.go_to(dom, self.horizontal as isize, wrap_prev(self.vertical, max) as isize);
    }

    /// Next group (wrapping), back at its first slide
    pub fn next_horizontal<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let max = max_index(self.group_count());
        self.go_to(dom, wrap_next(self.horizontal, max) as isize, 0);
    }

    /// Previous group (wrapping), back at its first slide
    pub fn prev_horizontal<D: Dom<Element = E>>(&mut self, dom: &mut D) {
        let max = max_index(self.group_count());
        self.go_to(dom, wrap_prev(self.horizontal, max) as isize, 0);
    }

    fn update_transforms<D: Dom<Element = E>>(&self, dom: &mut D) {
        let x = -(self.horizontal as i64) * 100;
        dom.set_style(&self.elements.track, "transform", &format!("translateX({x}%)"));

        for (index, group) in self.elements.groups.iter().enumerate() {
            let Some(track) = &group.vertical_track else {
                continue;
            };
            let y_index = if index == self.horizontal { self.vertical } else { 0 };
            let y = -(y_index as i64) * 100;
            dom.set_style(track, "transform", &format!("translateY({y}%)"));
        }
    }

    fn update_focusability<D: Dom<Element = E>>(&self, dom: &mut D) {
        for slide in &self.elements.slides {
            dom.set_attribute(slide, "tabindex", "-1");
        }
        let current = self
            .elements
            .groups
            .get(self.horizontal)
            .and_then(|group| group.slides.get(self.vertical));
        if let Some(slide) = current {
            dom.set_attribute(slide, "tabindex", "0");
        }
    }

    fn control_at(&self, element: &E) -> Option<HeroControl> {
        let controls = &self.elements.controls;
        let is = |candidate: &Option<E>| candidate.as_ref() == Some(element);
        if is(&controls.prev_x) {
            Some(HeroControl::PrevX)
        } else if is(&controls.next_x) {
            Some(HeroControl::NextX)
        } else if is(&controls.prev_y) {
            Some(HeroControl::PrevY)
        } else if is(&controls.next_y) {
            Some(HeroControl::NextY)
        } else if is(&self.elements.toggle) {
            Some(HeroControl::Toggle)
        } else {
            None
        }
    }

    fn handle_control<D: Dom<Element = E>>(
        &mut self,
        cx: &mut PageContext<'_, D>,
        control: HeroControl,
    ) {
        match control {
            HeroControl::Toggle => self.autoplay.toggle(cx),
            HeroControl::PrevX => {
                self.autoplay.stop(cx);
                self.prev_horizontal(cx.dom);
            }
            HeroControl::NextX => {
                self.autoplay.stop(cx);
                self.next_horizontal(cx.dom);
            }
            HeroControl::PrevY => {
                self.autoplay.stop(cx);
                self.prev_vertical(cx.dom);
            }
            HeroControl::NextY => {
                self.autoplay.stop(cx);
                self.next_vertical(cx.dom);
            }
        }
    }

    // Up moves to the previous slide and Down to the next one.
    fn handle_key<D: Dom<Element = E>>(
        &mut self,
        cx: &mut PageContext<'_, D>,
        key: &Key,
    ) -> DefaultAction {
        let control = match key.named() {
            Some(NamedKey::ArrowRight) => HeroControl::NextX,
            Some(NamedKey::ArrowLeft) => HeroControl::PrevX,
            Some(NamedKey::ArrowUp) => HeroControl::PrevY,
            Some(NamedKey::ArrowDown) => HeroControl::NextY,
            _ => return DefaultAction::Allow,
        };
        self.handle_control(cx, control);
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
            PageEvent::MouseLeave | PageEvent::FocusOut => {
                self.autoplay.start(cx);
            }
            PageEvent::TouchStart(_) => {
                self.autoplay.stop(cx);
                self.swipe.handle(event);
            }
            PageEvent::TouchEnd(_) => match self.swipe.handle(event) {
                Some(Swipe::Left) => self.handle_control(cx, HeroControl::NextX),
                Some(Swipe::Right) => self.handle_control(cx, HeroControl::PrevX),
                None => {}
            },
            _ => {}
        }
        DefaultAction::Allow
    }
}

impl<D: Dom> Widget<D> for HeroSlider<D::Element> {
    fn name(&self) -> &'static str {
        "hero slider"
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

        let controls = &self.elements.controls;
        listeners.extend(
            [
                &controls.prev_x,
                &controls.next_x,
                &controls.prev_y,
                &controls.next_y,
                &self.elements.toggle,
            ]
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
        if *event == PageEvent::Click {
            if let Some(control) = self.control_at(current) {
                self.handle_control(cx, control);
            }
        }
        DefaultAction::Allow
    }

    fn on_timer(&mut self, cx: &mut PageContext<'_, D>, timer: TimerId) {
        if self.autoplay.owns(timer) {
            self.next_vertical(cx.dom);
        }
    }

    fn teardown(&mut self, cx: &mut PageContext<'_, D>) {
        self.autoplay.stop(cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{PAUSE_LABEL, START_LABEL};
    use crate::testing::Harness;
    use std::time::Duration;
    use vitrine::{Document, ElementId, TouchPoint};

    struct HeroMarkup {
        root: ElementId,
        track: ElementId,
        vertical_tracks: Vec<ElementId>,
        slides: Vec<Vec<ElementId>>,
        prev_x: ElementId,
        next_x: ElementId,
        next_y: ElementId,
        toggle: ElementId,
        label: ElementId,
    }

    fn hero_markup(doc: &mut Document, group_sizes: &[usize]) -> HeroMarkup {
        let body = doc.body();
        let root = doc.create_element(body, "section", &[classes::ROOT]);
        let track = doc.create_element(root, "div", &[classes::TRACK]);
        let mut vertical_tracks = Vec::new();
        let mut slides = Vec::new();
        for &size in group_sizes {
            let group = doc.create_element(track, "div", &[classes::GROUP]);
            let vertical = doc.create_element(group, "div", &[classes::VERTICAL_TRACK]);
            vertical_tracks.push(vertical);
            slides.push(
                (0..size)
                    .map(|_| doc.create_element(vertical, "article", &[classes::SLIDE]))
                    .collect(),
            );
        }
        let prev_x = doc.create_element(root, "button", &[classes::PREV_X]);
        let next_x = doc.create_element(root, "button", &[classes::NEXT_X]);
        doc.create_element(root, "button", &[classes::PREV_Y]);
        let next_y = doc.create_element(root, "button", &[classes::NEXT_Y]);
        let toggle = doc.create_element(root, "button", &[classes::TOGGLE]);
        let label = doc.create_element(toggle, "span", &[classes::TOGGLE_LABEL]);
        HeroMarkup {
            root,
            track,
            vertical_tracks,
            slides,
            prev_x,
            next_x,
            next_y,
            toggle,
            label,
        }
    }

    fn mount(h: &mut Harness, preferences: Preferences) -> HeroSlider<ElementId> {
        HeroSlider::mount(&mut h.cx(), &preferences, &PageConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_markup_skips() {
        let mut h = Harness::new();
        assert!(HeroSlider::mount(&mut h.cx(), &Preferences::default(), &PageConfig::default())
            .is_none());

        let body = h.doc.body();
        let root = h.doc.create_element(body, "section", &[classes::ROOT]);
        let track = h.doc.create_element(root, "div", &[classes::TRACK]);
        h.doc.create_element(track, "div", &[classes::GROUP]);
        assert!(HeroSlider::mount(&mut h.cx(), &Preferences::default(), &PageConfig::default())
            .is_none());
        assert_eq!(h.scheduler.armed_total(), 0);
    }

    #[test]
    fn test_initial_state() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2, 1, 3]);
        let slider = mount(&mut h, Preferences::default());

        assert_eq!(slider.position(), (0, 0));
        assert!(slider.is_playing());
        assert_eq!(h.doc.style(m.track, "transform"), Some("translateX(0%)"));
        assert_eq!(h.doc.attribute(&m.slides[0][0], "tabindex").as_deref(), Some("0"));
        assert_eq!(h.doc.attribute(&m.slides[2][2], "tabindex").as_deref(), Some("-1"));
        assert_eq!(h.doc.attribute(&m.toggle, "aria-pressed").as_deref(), Some("true"));
        assert_eq!(h.doc.text(m.label), PAUSE_LABEL);
        assert_eq!(h.doc.attribute(&m.root, "aria-live").as_deref(), Some("off"));
    }

    #[test]
    fn test_navigation_scenario() {
        let mut h = Harness::new();
        hero_markup(&mut h.doc, &[2, 1, 3]);
        let mut slider = mount(&mut h, Preferences::default());

        slider.next_vertical(&mut h.doc);
        assert_eq!(slider.position(), (0, 1));
        slider.next_vertical(&mut h.doc);
        assert_eq!(slider.position(), (0, 0));
        slider.next_horizontal(&mut h.doc);
        assert_eq!(slider.position(), (1, 0));
        slider.next_vertical(&mut h.doc);
        assert_eq!(slider.position(), (1, 0));
    }

    #[test]
    fn test_horizontal_wraps_and_resets_vertical() {
        let mut h = Harness::new();
        hero_markup(&mut h.doc, &[2, 1, 3]);
        let mut slider = mount(&mut h, Preferences::default());

        slider.go_to(&mut h.doc, 2, 2);
        assert_eq!(slider.position(), (2, 2));
        slider.next_horizontal(&mut h.doc);
        assert_eq!(slider.position(), (0, 0));

        slider.prev_horizontal(&mut h.doc);
        assert_eq!(slider.position(), (2, 0));
        slider.prev_vertical(&mut h.doc);
        assert_eq!(slider.position(), (2, 2));
    }

    #[test]
    fn test_go_to_clamps_both_axes() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2, 1, 3]);
        let mut slider = mount(&mut h, Preferences::default());

        for (h_req, v_req, expected) in [
            (-4, 7, (0, 1)),
            (1, 2, (1, 0)),
            (9, 9, (2, 2)),
            (2, -1, (2, 0)),
        ] {
            slider.go_to(&mut h.doc, h_req, v_req);
            assert_eq!(slider.position(), expected);
        }

        slider.go_to(&mut h.doc, 2, 1);
        assert_eq!(h.doc.style(m.track, "transform"), Some("translateX(-200%)"));
        assert_eq!(h.doc.style(m.vertical_tracks[2], "transform"), Some("translateY(-100%)"));
        assert_eq!(h.doc.style(m.vertical_tracks[0], "transform"), Some("translateY(0%)"));
        assert_eq!(h.doc.attribute(&m.slides[2][1], "tabindex").as_deref(), Some("0"));
        assert_eq!(h.doc.attribute(&m.slides[0][0], "tabindex").as_deref(), Some("-1"));
    }

    #[test]
    fn test_autoplay_advances_vertically() {
        let mut h = Harness::new();
        hero_markup(&mut h.doc, &[3, 1]);
        let mut slider = mount(&mut h, Preferences::default());

        h.advance(&mut slider, Duration::from_millis(4999));
        assert_eq!(slider.position(), (0, 0));
        h.advance(&mut slider, Duration::from_millis(1));
        assert_eq!(slider.position(), (0, 1));
        h.advance(&mut slider, Duration::from_millis(10_000));
        assert_eq!(slider.position(), (0, 0));
    }

    #[test]
    fn test_button_navigation_stops_autoplay() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2, 1, 3]);
        let mut slider = mount(&mut h, Preferences::default());

        h.send(&mut slider, m.next_x, PageEvent::Click);
        assert_eq!(slider.position(), (1, 0));
        assert!(!slider.is_playing());
        assert_eq!(h.scheduler.active_intervals(), 0);
        assert_eq!(h.doc.text(m.label), START_LABEL);
        assert_eq!(h.doc.attribute(&m.root, "aria-live").as_deref(), Some("polite"));

        h.send(&mut slider, m.prev_x, PageEvent::Click);
        h.send(&mut slider, m.next_y, PageEvent::Click);
        assert_eq!(slider.position(), (0, 1));
    }

    #[test]
    fn test_keyboard_mapping() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[3, 2]);
        let mut slider = mount(&mut h, Preferences::default());

        let action = h.send(&mut slider, m.root, PageEvent::key(NamedKey::ArrowDown));
        assert!(action.is_prevented());
        assert_eq!(slider.position(), (0, 1));
        assert!(!slider.is_playing());

        h.send(&mut slider, m.root, PageEvent::key(NamedKey::ArrowUp));
        h.send(&mut slider, m.root, PageEvent::key(NamedKey::ArrowUp));
        assert_eq!(slider.position(), (0, 2));

        h.send(&mut slider, m.root, PageEvent::key(NamedKey::ArrowRight));
        assert_eq!(slider.position(), (1, 0));
        h.send(&mut slider, m.root, PageEvent::key(NamedKey::ArrowLeft));
        assert_eq!(slider.position(), (0, 0));

        let other = h.send(&mut slider, m.root, PageEvent::key(NamedKey::Enter));
        assert_eq!(other, DefaultAction::Allow);
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2]);
        let mut slider = mount(&mut h, Preferences::default());

        h.send(&mut slider, m.root, PageEvent::MouseEnter);
        assert!(!slider.is_playing());
        h.send(&mut slider, m.root, PageEvent::MouseLeave);
        assert!(slider.is_playing());

        // Explicitly paused sliders still resume when focus leaves.
        h.send(&mut slider, m.toggle, PageEvent::Click);
        assert!(!slider.is_playing());
        h.send(&mut slider, m.root, PageEvent::FocusOut);
        assert!(slider.is_playing());
        assert_eq!(h.scheduler.active_intervals(), 1);

        h.send(&mut slider, m.root, PageEvent::FocusIn);
        assert!(!slider.is_playing());
        assert_eq!(h.scheduler.active_intervals(), 0);
        assert_eq!(h.doc.attribute(&m.toggle, "aria-pressed").as_deref(), Some("false"));
        h.send(&mut slider, m.root, PageEvent::FocusOut);
        assert!(slider.is_playing());

        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::none()));
        assert!(!slider.is_playing());
    }

    #[test]
    fn test_swipe_navigates_horizontally() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[1, 1, 1]);
        let mut slider = mount(&mut h, Preferences::default());

        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::at(300.0)));
        assert!(!slider.is_playing());
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::at(260.0)));
        assert_eq!(slider.position(), (0, 0));

        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::at(300.0)));
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::at(259.0)));
        assert_eq!(slider.position(), (1, 0));

        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::at(100.0)));
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::at(200.0)));
        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::at(100.0)));
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::at(200.0)));
        assert_eq!(slider.position(), (2, 0));

        // No coordinates: the start stays at 100.
        h.send(&mut slider, m.root, PageEvent::TouchStart(TouchPoint::none()));
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::at(200.0)));
        assert_eq!(slider.position(), (1, 0));
        h.send(&mut slider, m.root, PageEvent::TouchEnd(TouchPoint::none()));
        assert_eq!(slider.position(), (1, 0));
    }

    #[test]
    fn test_reduced_motion_never_schedules() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2, 2]);
        let reduced = Preferences::default().with_reduced_motion(true);
        let mut slider = mount(&mut h, reduced);

        assert_eq!(slider.position(), (0, 0));
        assert_eq!(h.doc.attribute(&m.root, "aria-live").as_deref(), Some("polite"));
        assert_eq!(h.doc.text(m.label), START_LABEL);

        for event in [PageEvent::MouseEnter, PageEvent::MouseLeave, PageEvent::FocusOut] {
            h.send(&mut slider, m.root, event);
        }
        h.send(&mut slider, m.toggle, PageEvent::Click);
        h.advance(&mut slider, Duration::from_secs(60));

        assert!(!slider.is_playing());
        assert_eq!(slider.position(), (0, 0));
        assert_eq!(h.scheduler.armed_total(), 0);
    }

    #[test]
    fn test_teardown_renders_stopped_state() {
        let mut h = Harness::new();
        let m = hero_markup(&mut h.doc, &[2]);
        let mut slider = mount(&mut h, Preferences::default());
        assert_eq!(h.doc.attribute(&m.toggle, "aria-pressed").as_deref(), Some("true"));

        Widget::<Document>::teardown(&mut slider, &mut h.cx());
        assert_eq!(h.scheduler.active_intervals(), 0);
        assert!(!slider.is_playing());
        assert_eq!(h.doc.attribute(&m.toggle, "aria-pressed").as_deref(), Some("false"));
        assert_eq!(h.doc.text(m.label), START_LABEL);
        assert_eq!(h.doc.attribute(&m.root, "aria-live").as_deref(), Some("polite"));

        Widget::<Document>::teardown(&mut slider, &mut h.cx());
        assert_eq!(h.scheduler.active_intervals(), 0);
    }
}
