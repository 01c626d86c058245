//! Browser event listeners feeding the page
//!
//! The browser already propagates events, so each `(target, kind)` pair gets
//! exactly one native listener, which delivers straight to the widgets that
//! subscribed to it.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine::{
    DefaultAction, EventKind, Key, ListenTarget, PageEvent, TouchPoint, WidgetIndex,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, KeyboardEvent, TouchEvent, Window};

use crate::dom::viewport_width;
use crate::WebPage;

/// One native listener and the widgets behind it
struct Subscription {
    target: ListenTarget<Element>,
    kind: EventKind,
    widgets: Vec<WidgetIndex>,
}

/// Group the page's listeners by `(target, kind)`
fn subscriptions(page: &WebPage) -> Vec<Subscription> {
    let mut grouped: Vec<Subscription> = Vec::new();
    for (widget, listener) in page.listeners() {
        match grouped
            .iter_mut()
            .find(|s| s.kind == listener.kind && s.target == listener.target)
        {
            Some(existing) => {
                if !existing.widgets.contains(&widget) {
                    existing.widgets.push(widget);
                }
            }
            None => grouped.push(Subscription {
                target: listener.target,
                kind: listener.kind,
                widgets: vec![widget],
            }),
        }
    }
    grouped
}

/// Register one native listener per subscription of the mounted widgets
///
/// # Returns
/// Number of native listeners added
pub fn attach(window: &Window, page: &Rc<RefCell<WebPage>>) -> Result<usize, JsValue> {
    let subscriptions = subscriptions(&page.borrow());
    let count = subscriptions.len();

    for subscription in subscriptions {
        let event_target: EventTarget = match &subscription.target {
            ListenTarget::Window => window.clone().into(),
            ListenTarget::Element(element) => element.clone().into(),
        };
        let name = subscription.kind.dom_name();
        let page = Rc::clone(page);
        let window = window.clone();

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let page_event = convert(subscription.kind, &event, &window);
            let Ok(mut page) = page.try_borrow_mut() else {
                log::debug!("{} skipped: page busy", subscription.kind.dom_name());
                return;
            };
            let action = subscription
                .widgets
                .iter()
                .fold(DefaultAction::Allow, |action, widget| {
                    action.merge(page.deliver(*widget, &subscription.target, &page_event))
                });
            if action.is_prevented() {
                event.prevent_default();
            }
        })
        .into_js_value();
        event_target.add_event_listener_with_callback(name, callback.unchecked_ref())?;
    }

    log::debug!("attached {count} listeners");
    Ok(count)
}

/// Translate a native event into the page vocabulary
fn convert(kind: EventKind, event: &Event, window: &Window) -> PageEvent {
    match kind {
        EventKind::Click => PageEvent::Click,
        EventKind::KeyDown => PageEvent::KeyDown(
            event
                .dyn_ref::<KeyboardEvent>()
                .map_or(Key::Unknown, |event| Key::from_dom_key(&event.key())),
        ),
        EventKind::TouchStart => PageEvent::TouchStart(touch_point(event)),
        EventKind::TouchEnd => PageEvent::TouchEnd(touch_point(event)),
        EventKind::MouseEnter => PageEvent::MouseEnter,
        EventKind::MouseLeave => PageEvent::MouseLeave,
        EventKind::FocusIn => PageEvent::FocusIn,
        EventKind::FocusOut => PageEvent::FocusOut,
        EventKind::Resize => PageEvent::Resize {
            width: viewport_width(window),
        },
    }
}

/// `screenX` of the first changed touch
fn touch_point(event: &Event) -> TouchPoint {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|event| event.changed_touches().get(0))
        .map_or_else(TouchPoint::none, |touch| {
            TouchPoint::at(f64::from(touch.screen_x()))
        })
}
