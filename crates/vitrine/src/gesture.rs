//! Horizontal swipe detection
//!
//! Turns a touch-start / touch-end pair on a container into a directional
//! [`Swipe`] when the horizontal travel exceeds a threshold. The detector
//! never asks for `preventDefault`, so vertical page scrolling keeps working.

use crate::events::{EventKind, Listener, PageEvent, TouchPoint};

/// Default minimum horizontal travel, in pixels
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 40.0;

/// Direction of a recognised swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left
    Left,
    /// Finger moved left-to-right
    Right,
}

/// Swipe detector bound to one container element
#[derive(Debug, Clone)]
pub struct SwipeGesture<E> {
    container: E,
    threshold: f64,
    start_x: f64,
}

impl<E: Clone> SwipeGesture<E> {
    /// Bind a detector to `container`
    ///
    /// Returns `None` when there is no container, so callers can treat an
    /// absent element as "no swipe support" without branching later.
    pub fn attach(container: Option<&E>, threshold: f64) -> Option<Self> {
        container.map(|container| Self {
            container: container.clone(),
            threshold,
            start_x: 0.0,
        })
    }

    /// Element the detector listens on
    pub fn container(&self) -> &E {
        &self.container
    }

    /// `touchstart` and `touchend` listeners on the container
    pub fn listeners(&self) -> [Listener<E>; 2] {
        [
            Listener::on(self.container.clone(), EventKind::TouchStart),
            Listener::on(self.container.clone(), EventKind::TouchEnd),
        ]
    }

    /// Record where a touch started
    ///
    /// A touch without coordinates leaves the previous start in place.
    pub fn touch_start(&mut self, point: TouchPoint) {
        if let Some(x) = point.screen_x {
            self.start_x = x;
        }
    }

    /// Finish a touch and classify it
    ///
    /// # Returns
    /// `Some(Swipe)` when `|end - start|` strictly exceeds the threshold
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<Swipe> {
        let end_x = point.screen_x?;
        let delta = end_x - self.start_x;
        if delta < -self.threshold {
            Some(Swipe::Left)
        } else if delta > self.threshold {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    /// Feed any page event; only touch events are considered
    pub fn handle(&mut self, event: &PageEvent) -> Option<Swipe> {
        match event {
            PageEvent::TouchStart(point) => {
                self.touch_start(*point);
                None
            }
            PageEvent::TouchEnd(point) => self.touch_end(*point),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> SwipeGesture<u32> {
        SwipeGesture::attach(Some(&7), DEFAULT_SWIPE_THRESHOLD).unwrap()
    }

    fn swipe(g: &mut SwipeGesture<u32>, from: f64, to: f64) -> Option<Swipe> {
        g.handle(&PageEvent::TouchStart(TouchPoint::at(from)));
        g.handle(&PageEvent::TouchEnd(TouchPoint::at(to)))
    }

    #[test]
    fn test_absent_container() {
        assert!(SwipeGesture::<u32>::attach(None, 40.0).is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut g = gesture();
        assert_eq!(swipe(&mut g, 200.0, 160.0), None);
        assert_eq!(swipe(&mut g, 200.0, 159.0), Some(Swipe::Left));
        assert_eq!(swipe(&mut g, 100.0, 140.0), None);
        assert_eq!(swipe(&mut g, 100.0, 141.0), Some(Swipe::Right));
    }

    #[test]
    fn test_missing_coordinates_are_ignored() {
        let mut g = gesture();
        g.handle(&PageEvent::TouchStart(TouchPoint::at(300.0)));
        g.handle(&PageEvent::TouchStart(TouchPoint::none()));
        assert_eq!(g.handle(&PageEvent::TouchEnd(TouchPoint::none())), None);
        assert_eq!(
            g.handle(&PageEvent::TouchEnd(TouchPoint::at(200.0))),
            Some(Swipe::Left)
        );
    }

    #[test]
    fn test_listeners_target_container() {
        let g = gesture();
        let [start, end] = g.listeners();
        assert_eq!(start, Listener::on(7, EventKind::TouchStart));
        assert_eq!(end, Listener::on(7, EventKind::TouchEnd));
        assert_eq!(g.container(), &7);
    }
}
