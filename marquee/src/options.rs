use alloc::string::String;
use alloc::sync::Arc;

use crate::marquee::Marquee;

/// A callback fired when a marquee state update occurs.
///
/// The second argument is `structural`: `true` when the region's item counts changed
/// (initialize/reinitialize/recount), `false` for configuration-only updates.
pub type OnChangeCallback = Arc<dyn Fn(&Marquee, bool) + Send + Sync>;

/// Configuration for [`crate::Marquee`].
///
/// This type is designed to be cheap to clone: the callback is stored in an `Arc` so adapters
/// can update a few fields and call `Marquee::set_options` without reallocating closures.
pub struct MarqueeOptions {
    /// Milliseconds of animation per original item (speed control).
    pub time_per_item_ms: u64,
    /// Base item count used by the ratio-form duration. Captured lazily on first
    /// initialization when unset; overwritten on every forced reinitialization.
    pub base_count: Option<usize>,
    /// CSS selector identifying the scroll container.
    pub selector: String,
    /// Name of the CSS keyframe rule driving the loop.
    pub keyframes: String,
    /// Enables/disables the marquee. When disabled, `animation()` returns `None`.
    pub enabled: bool,
    /// Optional callback fired when the marquee's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl MarqueeOptions {
    /// Creates options with the given per-item time and container selector.
    ///
    /// `base_count` starts unset and is captured automatically on first initialization.
    pub fn new(time_per_item_ms: u64, selector: impl Into<String>) -> Self {
        Self {
            time_per_item_ms,
            base_count: None,
            selector: selector.into(),
            keyframes: String::from("scroll-left"),
            enabled: true,
            on_change: None,
        }
    }

    pub fn with_time_per_item_ms(mut self, time_per_item_ms: u64) -> Self {
        self.time_per_item_ms = time_per_item_ms;
        self
    }

    pub fn with_base_count(mut self, base_count: Option<usize>) -> Self {
        self.base_count = base_count;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_keyframes(mut self, keyframes: impl Into<String>) -> Self {
        self.keyframes = keyframes.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Marquee, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for MarqueeOptions {
    fn clone(&self) -> Self {
        Self {
            time_per_item_ms: self.time_per_item_ms,
            base_count: self.base_count,
            selector: self.selector.clone(),
            keyframes: self.keyframes.clone(),
            enabled: self.enabled,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for MarqueeOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarqueeOptions")
            .field("time_per_item_ms", &self.time_per_item_ms)
            .field("base_count", &self.base_count)
            .field("selector", &self.selector)
            .field("keyframes", &self.keyframes)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
