//! Page events delivered to widgets
//!
//! This module provides the backend-agnostic event vocabulary: which DOM
//! events a widget can listen for, the payload each one carries, and the
//! key representation used by keyboard handlers.

/// Kind of DOM event a widget can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `click`
    Click,
    /// `keydown`
    KeyDown,
    /// `touchstart`
    TouchStart,
    /// `touchend`
    TouchEnd,
    /// `mouseenter`
    MouseEnter,
    /// `mouseleave`
    MouseLeave,
    /// `focusin`
    FocusIn,
    /// `focusout`
    FocusOut,
    /// `resize` (window only)
    Resize,
}

impl EventKind {
    /// DOM event type name, as passed to `addEventListener`
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchEnd => "touchend",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::FocusIn => "focusin",
            EventKind::FocusOut => "focusout",
            EventKind::Resize => "resize",
        }
    }

    /// Whether the event propagates from its target to the ancestors
    pub fn bubbles(self) -> bool {
        !matches!(
            self,
            EventKind::MouseEnter | EventKind::MouseLeave | EventKind::Resize
        )
    }
}

/// Horizontal position of a touch, if the event carried one
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    /// `changedTouches[0].screenX`, or `None` when the list was empty
    pub screen_x: Option<f64>,
}

impl TouchPoint {
    /// Touch at the given screen x coordinate
    pub fn at(screen_x: f64) -> Self {
        Self {
            screen_x: Some(screen_x),
        }
    }

    /// Touch event without coordinate data
    pub fn none() -> Self {
        Self { screen_x: None }
    }
}

/// An event as seen by a widget handler
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Element was clicked (or activated)
    Click,
    /// A key was pressed while the element or a descendant had focus
    KeyDown(Key),
    /// A touch started
    TouchStart(TouchPoint),
    /// A touch ended
    TouchEnd(TouchPoint),
    /// Pointer entered the element
    MouseEnter,
    /// Pointer left the element
    MouseLeave,
    /// Focus moved into the element or a descendant
    FocusIn,
    /// Focus moved out of the element or a descendant
    FocusOut,
    /// Viewport was resized
    Resize {
        /// New viewport width in CSS pixels
        width: f64,
    },
}

impl PageEvent {
    /// The subscription kind this event is delivered under
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click => EventKind::Click,
            PageEvent::KeyDown(_) => EventKind::KeyDown,
            PageEvent::TouchStart(_) => EventKind::TouchStart,
            PageEvent::TouchEnd(_) => EventKind::TouchEnd,
            PageEvent::MouseEnter => EventKind::MouseEnter,
            PageEvent::MouseLeave => EventKind::MouseLeave,
            PageEvent::FocusIn => EventKind::FocusIn,
            PageEvent::FocusOut => EventKind::FocusOut,
            PageEvent::Resize { .. } => EventKind::Resize,
        }
    }

    /// Shorthand for a named key press
    pub fn key(key: NamedKey) -> Self {
        PageEvent::KeyDown(Key::Named(key))
    }
}

/// Where a listener is attached
#[derive(Debug, Clone, PartialEq)]
pub enum ListenTarget<E> {
    /// A specific element
    Element(E),
    /// The window (used for `resize`)
    Window,
}

/// A single `(target, event kind)` subscription
#[derive(Debug, Clone, PartialEq)]
pub struct Listener<E> {
    /// Where the listener is attached
    pub target: ListenTarget<E>,
    /// Which events it receives
    pub kind: EventKind,
}

impl<E> Listener<E> {
    /// Listener on an element
    pub fn on(element: E, kind: EventKind) -> Self {
        Self {
            target: ListenTarget::Element(element),
            kind,
        }
    }

    /// Listener on the window
    pub fn window(kind: EventKind) -> Self {
        Self {
            target: ListenTarget::Window,
            kind,
        }
    }
}

/// What the host should do with the browser's default action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultAction {
    /// Let the default action (scrolling, activation, ...) happen
    #[default]
    Allow,
    /// Call `preventDefault()`
    Prevent,
}

impl DefaultAction {
    /// Combine two handler results; any `Prevent` wins
    pub fn merge(self, other: DefaultAction) -> DefaultAction {
        if self == DefaultAction::Prevent || other == DefaultAction::Prevent {
            DefaultAction::Prevent
        } else {
            DefaultAction::Allow
        }
    }

    /// Whether `preventDefault()` should be called
    pub fn is_prevented(self) -> bool {
        self == DefaultAction::Prevent
    }
}

/// Named key representation, covering the keys page widgets react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Tab key
    Tab,
    /// Left arrow key
    ArrowLeft,
    /// Right arrow key
    ArrowRight,
    /// Up arrow key
    ArrowUp,
    /// Down arrow key
    ArrowDown,
    /// Home key
    Home,
    /// End key
    End,
}

/// Backend-agnostic key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named key (Enter, Escape, arrows, etc.)
    Named(NamedKey),
    /// A character key (letters, numbers, symbols)
    Character(String),
    /// Unknown/unhandled key
    Unknown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    ///
    /// The space bar reports `" "`; other named keys use their DOM names.
    pub fn from_dom_key(value: &str) -> Self {
        let named = match value {
            "Enter" => NamedKey::Enter,
            "Escape" | "Esc" => NamedKey::Escape,
            " " | "Spacebar" => NamedKey::Space,
            "Tab" => NamedKey::Tab,
            "ArrowLeft" | "Left" => NamedKey::ArrowLeft,
            "ArrowRight" | "Right" => NamedKey::ArrowRight,
            "ArrowUp" | "Up" => NamedKey::ArrowUp,
            "ArrowDown" | "Down" => NamedKey::ArrowDown,
            "Home" => NamedKey::Home,
            "End" => NamedKey::End,
            _ if value.chars().count() == 1 => return Key::Character(value.to_string()),
            _ => return Key::Unknown,
        };
        Key::Named(named)
    }

    /// The named key, if this is one
    pub fn named(&self) -> Option<NamedKey> {
        match self {
            Key::Named(named) => Some(*named),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_parsing() {
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Named(NamedKey::ArrowUp));
        assert_eq!(Key::from_dom_key(" "), Key::Named(NamedKey::Space));
        assert_eq!(Key::from_dom_key("Enter"), Key::Named(NamedKey::Enter));
        assert_eq!(Key::from_dom_key("a"), Key::Character("a".to_string()));
        assert_eq!(Key::from_dom_key("F5"), Key::Unknown);
    }

    #[test]
    fn test_bubbling() {
        assert!(EventKind::Click.bubbles());
        assert!(EventKind::FocusOut.bubbles());
        assert!(!EventKind::MouseEnter.bubbles());
        assert!(!EventKind::Resize.bubbles());
    }

    #[test]
    fn test_default_action_merge() {
        use DefaultAction::*;
        assert_eq!(Allow.merge(Allow), Allow);
        assert_eq!(Allow.merge(Prevent), Prevent);
        assert!(Prevent.merge(Allow).is_prevented());
    }

    #[test]
    fn test_event_kind_round_trip() {
        assert_eq!(PageEvent::TouchEnd(TouchPoint::none()).kind(), EventKind::TouchEnd);
        assert_eq!(PageEvent::Resize { width: 500.0 }.kind(), EventKind::Resize);
        assert_eq!(PageEvent::key(NamedKey::Enter).kind(), EventKind::KeyDown);
    }
}
