//! Widget trait for page behaviours
//!
//! A widget owns one DOM subtree and reacts to the events it subscribed to.
//! Handlers run to completion on the page's single event queue, so a widget
//! never observes its own state mid-transition.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::{DefaultAction, Dom, EventKind, Listener, ListenTarget, PageContext, PageEvent, Widget};
//!
//! struct Highlight<E> {
//!     root: E,
//! }
//!
//! impl<D: Dom> Widget<D> for Highlight<D::Element> {
//!     fn name(&self) -> &'static str {
//!         "highlight"
//!     }
//!
//!     fn listeners(&self) -> Vec<Listener<D::Element>> {
//!         vec![Listener::on(self.root.clone(), EventKind::Click)]
//!     }
//!
//!     fn handle(
//!         &mut self,
//!         cx: &mut PageContext<'_, D>,
//!         _current: &ListenTarget<D::Element>,
//!         _event: &PageEvent,
//!     ) -> DefaultAction {
//!         cx.dom.toggle_class(&self.root, "is-highlighted");
//!         DefaultAction::Allow
//!     }
//! }
//! ```

use crate::dom::Dom;
use crate::events::{DefaultAction, ListenTarget, Listener, PageEvent};
use crate::timer::{Scheduler, TimerId};

/// Everything a handler may touch: the DOM and the timer source
pub struct PageContext<'a, D: Dom> {
    /// DOM the widget mutates
    pub dom: &'a mut D,
    /// Source of autoplay intervals
    pub scheduler: &'a mut dyn Scheduler,
}

impl<'a, D: Dom> PageContext<'a, D> {
    /// Bundle a DOM and a scheduler
    pub fn new(dom: &'a mut D, scheduler: &'a mut dyn Scheduler) -> Self {
        Self { dom, scheduler }
    }
}

/// A page behaviour bound to a DOM subtree
pub trait Widget<D: Dom> {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Events this widget wants, and where
    ///
    /// Listed once per `(target, kind)`; a single `handle` call covers every
    /// reaction the widget has to that pair.
    fn listeners(&self) -> Vec<Listener<D::Element>>;

    /// React to an event delivered at `current`
    ///
    /// # Arguments
    /// * `cx` - DOM and scheduler access
    /// * `current` - The listener target the event is being delivered to
    /// * `event` - The event itself
    fn handle(
        &mut self,
        cx: &mut PageContext<'_, D>,
        current: &ListenTarget<D::Element>,
        event: &PageEvent,
    ) -> DefaultAction;

    /// An interval fired; widgets ignore ids they do not own
    fn on_timer(&mut self, _cx: &mut PageContext<'_, D>, _timer: TimerId) {}

    /// Release timers before the page goes away
    fn teardown(&mut self, _cx: &mut PageContext<'_, D>) {}
}
