//! Page widgets built on `vitrine`
//!
//! Each widget resolves its markup by class name when it is mounted and stays
//! inert (mounting returns `None`) when its root is missing:
//!
//! - [`HeroSlider`] - Dual-axis hero slider with autoplay
//! - [`ExhibitionSlider`] - Single row of cards, autoplay on request
//! - [`ChooseCarousel`] - One card at a time below the breakpoint
//! - [`MarqueePause`] - Pauses the logo marquee on hover/focus
//! - [`MobileNav`] - Hamburger menu toggle
//!
//! [`mount_all`] wires all of them onto a [`vitrine::Page`].

pub mod autoplay;
pub mod boot;
pub mod choose;
pub mod exhibition;
pub mod hero;
pub mod marquee;
pub mod nav;

pub use autoplay::AutoplayControl;
pub use boot::mount_all;
pub use choose::ChooseCarousel;
pub use exhibition::ExhibitionSlider;
pub use hero::HeroSlider;
pub use marquee::MarqueePause;
pub use nav::MobileNav;

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use vitrine::{
        DefaultAction, Document, ElementId, ListenTarget, ManualScheduler, PageContext,
        PageEvent, Widget,
    };

    /// Document plus virtual clock for driving a single widget
    pub struct Harness {
        pub doc: Document,
        pub scheduler: ManualScheduler,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                doc: Document::new(),
                scheduler: ManualScheduler::new(),
            }
        }

        pub fn cx(&mut self) -> PageContext<'_, Document> {
            PageContext::new(&mut self.doc, &mut self.scheduler)
        }

        /// Deliver `event` to `widget` as if its listener on `at` fired
        pub fn send<W: Widget<Document>>(
            &mut self,
            widget: &mut W,
            at: ElementId,
            event: PageEvent,
        ) -> DefaultAction {
            widget.handle(&mut self.cx(), &ListenTarget::Element(at), &event)
        }

        pub fn send_window<W: Widget<Document>>(
            &mut self,
            widget: &mut W,
            event: PageEvent,
        ) -> DefaultAction {
            widget.handle(&mut self.cx(), &ListenTarget::Window, &event)
        }

        /// Advance virtual time, feeding every due tick to `widget`
        pub fn advance<W: Widget<Document>>(&mut self, widget: &mut W, by: Duration) {
            let until = self.scheduler.now() + by;
            while let Some(timer) = self.scheduler.next_due(until) {
                widget.on_timer(&mut self.cx(), timer);
            }
            self.scheduler.advance_to(until);
        }
    }
}
