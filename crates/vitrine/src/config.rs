//! Page configuration and boot-time preferences
//!
//! [`Preferences`] is a snapshot of user/system settings taken once when the
//! page boots and handed to every widget at construction. [`PageConfig`]
//! carries the tunable constants (autoplay intervals, swipe threshold,
//! breakpoint); its defaults match the production page.

use std::time::Duration;

use vitrine_macros::WithBuilders;

use crate::gesture::DEFAULT_SWIPE_THRESHOLD;

/// User preferences read once at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Preferences {
    /// `(prefers-reduced-motion: reduce)` matched; disables every autoplay
    pub reduced_motion: bool,
}

/// Autoplay tuning for one slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoplayConfig {
    /// Milliseconds between automatic advances
    pub delay_ms: u64,
}

impl AutoplayConfig {
    /// Config with the given interval
    pub const fn every_ms(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Interval as a [`Duration`]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self::every_ms(5000)
    }
}

/// Tunable constants for all page widgets
///
/// # Example
///
/// ```
/// use vitrine::{AutoplayConfig, PageConfig};
///
/// let config = PageConfig::default()
///     .with_exhibition(AutoplayConfig::every_ms(8000))
///     .with_swipe_threshold(60.0);
/// assert_eq!(config.hero.delay_ms, 5000);
/// ```
#[derive(Debug, Clone, PartialEq, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Hero slider autoplay (vertical advance)
    pub hero: AutoplayConfig,
    /// Exhibition slider autoplay
    pub exhibition: AutoplayConfig,
    /// Minimum horizontal travel for a swipe, in pixels
    pub swipe_threshold: f64,
    /// Viewport width at which the choose carousel shows every card
    pub choose_breakpoint: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero: AutoplayConfig::every_ms(5000),
            exhibition: AutoplayConfig::every_ms(6000),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            choose_breakpoint: 768.0,
        }
    }
}

/// Presentation selected by the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Below the breakpoint: one card at a time
    Narrow,
    /// At or above the breakpoint: every card visible
    Wide,
}

impl PresentationMode {
    /// Mode for a viewport `width` against `breakpoint`
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            PresentationMode::Narrow
        } else {
            PresentationMode::Wide
        }
    }
}
