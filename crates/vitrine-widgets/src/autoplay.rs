//! Play/pause control shared by the autoplaying sliders
//!
//! Couples an [`AutoplayTimer`] with the attribute contract of the slider's
//! toggle button and live region, so both sliders present playback the same
//! way.

use vitrine::{AutoplayTimer, Dom, PageContext, TimerId};

/// Toggle label while autoplay is stopped
pub const START_LABEL: &str = "Start autoplay";
/// Toggle label while autoplay is running
pub const PAUSE_LABEL: &str = "Pause autoplay";

/// Autoplay timer plus the elements reflecting its state
///
/// - toggle: `aria-pressed` = `"true"` while playing
/// - label: [`PAUSE_LABEL`] while playing, [`START_LABEL`] otherwise
/// - root: `aria-live` = `"off"` while playing, `"polite"` otherwise
#[derive(Debug, Clone)]
pub struct AutoplayControl<E> {
    root: E,
    toggle: Option<E>,
    label: Option<E>,
    timer: AutoplayTimer,
}

impl<E: Clone + PartialEq> AutoplayControl<E> {
    /// Create a control; nothing is rendered until the first start/stop
    ///
    /// # Arguments
    /// * `root` - Slider root carrying `aria-live`
    /// * `toggle` - Optional play/pause button
    /// * `label` - Optional text element inside the toggle
    /// * `timer` - Timer that drives the slider
    pub fn new(root: E, toggle: Option<E>, label: Option<E>, timer: AutoplayTimer) -> Self {
        Self {
            root,
            toggle,
            label,
            timer,
        }
    }

    /// Arm the timer and render the playing state
    ///
    /// # Returns
    /// `false` (and nothing rendered) when reduced motion suppresses autoplay
    pub fn start<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>) -> bool {
        if !self.timer.start(cx.scheduler) {
            return false;
        }
        self.render(cx.dom, true);
        true
    }

    /// Clear the timer and render the paused state
    pub fn stop<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>) {
        self.timer.stop(cx.scheduler);
        self.render(cx.dom, false);
    }

    /// Flip between playing and paused
    pub fn toggle<D: Dom<Element = E>>(&mut self, cx: &mut PageContext<'_, D>) {
        if self.timer.is_playing() {
            self.stop(cx);
        } else {
            self.start(cx);
        }
    }

    /// Whether autoplay is running
    pub fn is_playing(&self) -> bool {
        self.timer.is_playing()
    }

    /// Whether `id` is this control's live interval
    pub fn owns(&self, id: TimerId) -> bool {
        self.timer.owns(id)
    }

    /// The play/pause button, if the markup has one
    pub fn toggle_element(&self) -> Option<&E> {
        self.toggle.as_ref()
    }

    fn render<D: Dom<Element = E>>(&self, dom: &mut D, playing: bool) {
        if let Some(toggle) = &self.toggle {
            dom.set_bool_attribute(toggle, "aria-pressed", playing);
        }
        if let Some(label) = &self.label {
            dom.set_text(label, if playing { PAUSE_LABEL } else { START_LABEL });
        }
        dom.set_attribute(&self.root, "aria-live", if playing { "off" } else { "polite" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vitrine::{Document, ElementId, ManualScheduler, Preferences};

    fn fixture(reduced_motion: bool) -> (Document, ManualScheduler, AutoplayControl<ElementId>) {
        let mut doc = Document::new();
        let body = doc.body();
        let root = doc.create_element(body, "section", &[]);
        let toggle = doc.create_element(root, "button", &[]);
        let label = doc.create_element(toggle, "span", &[]);
        let prefs = Preferences { reduced_motion };
        let timer = AutoplayTimer::new(Duration::from_millis(5000), &prefs);
        let control = AutoplayControl::new(root, Some(toggle), Some(label), timer);
        (doc, ManualScheduler::new(), control)
    }

    #[test]
    fn test_start_renders_playing_state() {
        let (mut doc, mut scheduler, mut control) = fixture(false);
        let mut cx = PageContext::new(&mut doc, &mut scheduler);
        assert!(control.start(&mut cx));

        let toggle = *control.toggle_element().unwrap();
        let root = control.root;
        let label = control.label.unwrap();
        assert_eq!(doc.attribute(&toggle, "aria-pressed").as_deref(), Some("true"));
        assert_eq!(doc.text(label), PAUSE_LABEL);
        assert_eq!(doc.attribute(&root, "aria-live").as_deref(), Some("off"));
        assert_eq!(scheduler.active_intervals(), 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let (mut doc, mut scheduler, mut control) = fixture(false);
        let mut cx = PageContext::new(&mut doc, &mut scheduler);
        control.toggle(&mut cx);
        assert!(control.is_playing());
        control.toggle(&mut cx);
        assert!(!control.is_playing());

        let root = control.root;
        let label = control.label.unwrap();
        assert_eq!(doc.text(label), START_LABEL);
        assert_eq!(doc.attribute(&root, "aria-live").as_deref(), Some("polite"));
        assert_eq!(scheduler.active_intervals(), 0);
    }

    #[test]
    fn test_reduced_motion_start_changes_nothing() {
        let (mut doc, mut scheduler, mut control) = fixture(true);
        let mut cx = PageContext::new(&mut doc, &mut scheduler);
        assert!(!control.start(&mut cx));

        let root = control.root;
        assert!(doc.attribute(&root, "aria-live").is_none());
        assert_eq!(scheduler.armed_total(), 0);
    }
}
