//! Browser backend for vitrine
//!
//! Builds a [`vitrine::Page`] over the live document once it has loaded,
//! mounts every widget, and wires native listeners and intervals to it.
//! Everything here only exists on `wasm32`.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod scheduler;

#[cfg(target_arch = "wasm32")]
pub use dom::WebDom;
#[cfg(target_arch = "wasm32")]
pub use scheduler::WebScheduler;

#[cfg(target_arch = "wasm32")]
pub use boot::{init_log, start, WebPage};

#[cfg(target_arch = "wasm32")]
mod boot {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vitrine::{Page, PageConfig, Preferences};
    use wasm_bindgen::prelude::*;
    use web_sys::Window;

    use crate::dom::WebDom;
    use crate::listeners;
    use crate::scheduler::WebScheduler;

    /// A page running in the browser
    pub type WebPage = Page<WebDom, WebScheduler>;

    const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

    /// Route `log` records to the browser console
    pub fn init_log() {
        let (global_level, my_code_level) = if cfg!(debug_assertions) {
            (log::LevelFilter::Warn, log::LevelFilter::Debug)
        } else {
            (log::LevelFilter::Error, log::LevelFilter::Warn)
        };

        let _ = fern::Dispatch::new()
            .level(global_level)
            .level_for("vitrine", my_code_level)
            .level_for("vitrine_widgets", my_code_level)
            .level_for(env!("CARGO_CRATE_NAME"), my_code_level)
            .chain(fern::Output::call(|record| {
                let msg = format!("[{}] {}", record.target(), record.args());
                match record.level() {
                    log::Level::Error => web_sys::console::error_1(&msg.into()),
                    log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                    log::Level::Info => web_sys::console::info_1(&msg.into()),
                    log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
                }
            }))
            .apply();
    }

    fn prefers_reduced_motion(window: &Window) -> bool {
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia failed: {err:?}");
                false
            }
        }
    }

    /// Build the page, mount the widgets and hook up the browser
    fn boot(window: Window) -> Result<(), JsValue> {
        let document = window.document().ok_or("no document on window")?;
        let preferences =
            Preferences::default().with_reduced_motion(prefers_reduced_motion(&window));

        let dom = WebDom::new(window.clone(), document);
        let page: Rc<RefCell<WebPage>> = Rc::new_cyclic(|handle| {
            RefCell::new(Page::new(
                dom,
                WebScheduler::new(window.clone(), handle.clone()),
                preferences,
                PageConfig::default(),
            ))
        });

        let mounted = vitrine_widgets::mount_all(&mut *page.borrow_mut());
        let attached = listeners::attach(&window, &page)?;
        log::info!("vitrine ready: {mounted} widgets, {attached} listeners");

        let teardown = Closure::<dyn FnMut()>::new(move || match page.try_borrow_mut() {
            Ok(mut page) => page.teardown(),
            Err(_) => log::warn!("pagehide during an event; intervals left running"),
        })
        .into_js_value();
        window.add_event_listener_with_callback("pagehide", teardown.unchecked_ref())?;
        Ok(())
    }

    /// Module entry point
    ///
    /// Boots immediately when the document has already been parsed, and on
    /// `DOMContentLoaded` otherwise.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        init_log();

        let window = web_sys::window().ok_or("no global `window` exists")?;
        let document = window.document().ok_or("no document on window")?;

        if document.ready_state() == "loading" {
            let ready = Closure::once_into_js(move || {
                if let Err(err) = boot(window) {
                    log::error!("boot failed: {err:?}");
                }
            });
            document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
        } else {
            boot(window)?;
        }
        Ok(())
    }
}
