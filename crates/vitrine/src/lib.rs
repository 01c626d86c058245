//! # vitrine
//!
//! Backend agnostic page-behaviour library.
//!
//! This crate provides the core primitives for interactive page widgets with
//! zero dependencies on a browser. DOM access goes through the [`Dom`] trait
//! and timers through the [`Scheduler`] trait; the browser backend lives in
//! `vitrine-web`, the widgets themselves in `vitrine-widgets`.
//!
//! ## Core Types
//!
//! - [`Dom`] - The DOM surface widgets use
//! - [`Document`] - In-memory DOM for tests and native hosts
//! - [`Widget`] - Trait for page behaviours
//! - [`Page`] - Owns the DOM, the scheduler and the mounted widgets
//!
//! ## Input & Events
//!
//! - [`PageEvent`] - Events delivered to widgets (click, key, touch, ...)
//! - [`Listener`] - A `(target, kind)` subscription
//! - [`SwipeGesture`] - Touch-start/touch-end swipe detection
//!
//! ## Sliders
//!
//! - [`index`] - Clamp and wraparound arithmetic
//! - [`AutoplayTimer`] - Idempotent repeating-timer handle
//! - [`ManualScheduler`] - Virtual-time scheduler
//!
//! ## Configuration
//!
//! - [`Preferences`] - Boot-time user preferences (reduced motion)
//! - [`PageConfig`] - Intervals, swipe threshold, breakpoint

mod config;
mod dom;
mod events;
mod gesture;
pub mod index;
mod page;
mod resolve;
mod timer;
mod widget;

// Core types
pub use dom::*;
pub use page::*;
pub use widget::*;

// Input & Events
pub use events::*;
pub use gesture::*;

// Sliders
pub use timer::*;

// Configuration & element lookup
pub use config::*;
pub use resolve::*;
