//! Page runtime
//!
//! The [`Page`] is the coordinator that owns all the plumbing widgets need:
//! - The DOM and the scheduler
//! - Boot-time [`Preferences`] and the [`PageConfig`]
//! - The mounted widgets, in initialization order
//!
//! Hosts feed it events (either with DOM-style propagation through
//! [`Page::dispatch`], or pre-routed through [`Page::deliver`]) and interval
//! ticks through [`Page::fire_timer`].

use std::time::Duration;

use crate::config::{PageConfig, Preferences};
use crate::dom::Dom;
use crate::events::{DefaultAction, ListenTarget, Listener, PageEvent};
use crate::timer::{ManualScheduler, Scheduler, TimerId};
use crate::widget::{PageContext, Widget};

/// Index of a mounted widget within its page
pub type WidgetIndex = usize;

/// A page of independent widgets sharing one event queue
pub struct Page<D: Dom, S: Scheduler> {
    dom: D,
    scheduler: S,
    preferences: Preferences,
    config: PageConfig,
    widgets: Vec<Box<dyn Widget<D>>>,
}

impl<D: Dom, S: Scheduler> Page<D, S> {
    /// Create a page with no widgets mounted
    pub fn new(dom: D, scheduler: S, preferences: Preferences, config: PageConfig) -> Self {
        Self {
            dom,
            scheduler,
            preferences,
            config,
            widgets: Vec::new(),
        }
    }

    /// The page's DOM
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable access to the DOM (for hosts and tests)
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// The page's scheduler
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Names of the mounted widgets, in mount order
    pub fn widget_names(&self) -> Vec<&'static str> {
        self.widgets.iter().map(|w| w.name()).collect()
    }

    /// Run a widget initializer and keep the widget if it resolved
    ///
    /// # Returns
    /// The widget's index, or `None` when the initializer skipped itself
    pub fn mount<W, F>(&mut self, init: F) -> Option<WidgetIndex>
    where
        W: Widget<D> + 'static,
        F: FnOnce(&mut PageContext<'_, D>, &Preferences, &PageConfig) -> Option<W>,
    {
        let mut cx = PageContext::new(&mut self.dom, &mut self.scheduler);
        let widget = init(&mut cx, &self.preferences, &self.config)?;
        log::debug!("mounted {}", widget.name());
        self.widgets.push(Box::new(widget));
        Some(self.widgets.len() - 1)
    }

    /// Every listener of every widget, tagged with the widget index
    pub fn listeners(&self) -> Vec<(WidgetIndex, Listener<D::Element>)> {
        self.widgets
            .iter()
            .enumerate()
            .flat_map(|(index, widget)| {
                widget
                    .listeners()
                    .into_iter()
                    .map(move |listener| (index, listener))
            })
            .collect()
    }

    /// Deliver an event to one widget at `current`, without propagation
    pub fn deliver(
        &mut self,
        widget: WidgetIndex,
        current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction {
        let Some(widget) = self.widgets.get_mut(widget) else {
            return DefaultAction::Allow;
        };
        let mut cx = PageContext::new(&mut self.dom, &mut self.scheduler);
        widget.handle(&mut cx, current, event)
    }

    /// Dispatch an event the way the DOM would
    ///
    /// Bubbling events visit the target and then each ancestor; non-bubbling
    /// events only the target. At each stop, every widget listening for that
    /// `(target, kind)` pair is called once, in mount order.
    ///
    /// # Returns
    /// `Prevent` if any handler asked to prevent the default action
    pub fn dispatch(&mut self, target: ListenTarget<D::Element>, event: PageEvent) -> DefaultAction {
        let kind = event.kind();
        let path = match target {
            ListenTarget::Window => vec![ListenTarget::Window],
            ListenTarget::Element(element) => {
                let mut path = vec![element.clone()];
                if kind.bubbles() {
                    let mut current = element;
                    while let Some(parent) = self.dom.parent(&current) {
                        path.push(parent.clone());
                        current = parent;
                    }
                }
                path.into_iter().map(ListenTarget::Element).collect()
            }
        };

        let mut action = DefaultAction::Allow;
        for current in &path {
            for index in 0..self.widgets.len() {
                let listening = self.widgets[index]
                    .listeners()
                    .iter()
                    .any(|l| l.kind == kind && &l.target == current);
                if listening {
                    action = action.merge(self.deliver(index, current, &event));
                }
            }
        }
        action
    }

    /// Dispatch an event at an element
    pub fn dispatch_at(&mut self, element: &D::Element, event: PageEvent) -> DefaultAction {
        self.dispatch(ListenTarget::Element(element.clone()), event)
    }

    /// Route an interval tick to the widgets
    pub fn fire_timer(&mut self, timer: TimerId) {
        let mut cx = PageContext::new(&mut self.dom, &mut self.scheduler);
        for widget in self.widgets.iter_mut() {
            widget.on_timer(&mut cx, timer);
        }
    }

    /// Stop every widget's timers
    ///
    /// Safe to call more than once; also runs when the page is dropped.
    pub fn teardown(&mut self) {
        let mut cx = PageContext::new(&mut self.dom, &mut self.scheduler);
        for widget in self.widgets.iter_mut() {
            widget.teardown(&mut cx);
        }
    }
}

impl<D: Dom> Page<D, ManualScheduler> {
    /// Advance virtual time, firing every due tick in order
    ///
    /// Ticks are re-evaluated after each firing, so a handler that stops or
    /// restarts autoplay affects the remaining window.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(timer) = self.scheduler.next_due(until) {
            self.fire_timer(timer);
        }
        self.scheduler.advance_to(until);
    }
}

impl<D: Dom, S: Scheduler> Drop for Page<D, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<D: Dom, S: Scheduler> std::fmt::Debug for Page<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("preferences", &self.preferences)
            .field("config", &self.config)
            .field("widgets", &self.widget_names())
            .finish()
    }
}
