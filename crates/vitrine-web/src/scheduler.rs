//! `setInterval` scheduler routed back into the page

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use vitrine::{Scheduler, TimerId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::WebPage;

/// Browser intervals; each tick calls [`vitrine::Page::fire_timer`]
///
/// Holds only a weak handle to the page that owns it, so a dropped page
/// silently ignores ticks that were still queued.
pub struct WebScheduler {
    window: Window,
    page: Weak<RefCell<WebPage>>,
    next_id: u64,
    // TimerId -> browser interval handle
    intervals: HashMap<TimerId, i32>,
}

impl WebScheduler {
    /// Create a scheduler firing into `page`
    pub fn new(window: Window, page: Weak<RefCell<WebPage>>) -> Self {
        Self {
            window,
            page,
            next_id: 0,
            intervals: HashMap::new(),
        }
    }
}

fn fire(page: &Weak<RefCell<WebPage>>, timer: TimerId) {
    let Some(page) = page.upgrade() else {
        return;
    };
    match page.try_borrow_mut() {
        Ok(mut page) => page.fire_timer(timer),
        Err(_) => log::debug!("tick {} dropped: page busy", timer.raw()),
    };
}

impl Scheduler for WebScheduler {
    fn set_interval(&mut self, delay: Duration) -> TimerId {
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;

        let page = self.page.clone();
        // Owned by the JS side; collected once the interval is cleared
        let callback = Closure::<dyn FnMut()>::new(move || fire(&page, id)).into_js_value();
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(handle) => {
                self.intervals.insert(id, handle);
            }
            Err(err) => log::warn!("setInterval failed: {err:?}"),
        }
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if let Some(handle) = self.intervals.remove(&id) {
            self.window.clear_interval_with_handle(handle);
        }
    }
}
