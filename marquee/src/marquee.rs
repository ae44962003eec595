use core::cell::Cell;

use alloc::sync::Arc;

use crate::duration::{compute_duration_ms, scale_duration_ms};
use crate::{AnimationSpec, ClonePlan, MarqueeOptions, Phase};

/// A headless seamless-carousel engine for a single scroll region.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any DOM objects.
/// - Your adapter drives it by reporting observed original-item counts.
/// - DOM effects are expressed as [`ClonePlan`]s and [`AnimationSpec`]s for the adapter to
///   apply to the real container.
///
/// For multi-region management, mutation batching, and restart toggles, see the
/// `marquee-adapter` crate.
#[derive(Clone, Debug)]
pub struct Marquee {
    options: MarqueeOptions,
    phase: Phase,
    original_count: usize,
    clone_count: usize,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
    notify_structural: Cell<bool>,
}

impl Marquee {
    /// Creates a new marquee from options.
    ///
    /// The region starts [`Phase::Uninitialized`] with zero observed items; call
    /// [`Marquee::initialize`] with the first observed count to enter [`Phase::Seamless`].
    pub fn new(options: MarqueeOptions) -> Self {
        mdebug!(
            time_per_item_ms = options.time_per_item_ms,
            enabled = options.enabled,
            selector = %options.selector,
            "Marquee::new"
        );
        Self {
            options,
            phase: Phase::Uninitialized,
            original_count: 0,
            clone_count: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
            notify_structural: Cell::new(false),
        }
    }

    pub fn options(&self) -> &MarqueeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: MarqueeOptions) {
        self.options = options;
        mtrace!(
            time_per_item_ms = self.options.time_per_item_ms,
            enabled = self.options.enabled,
            "Marquee::set_options"
        );
        self.notify(false);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut MarqueeOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Marquee, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify(false);
    }

    pub fn set_time_per_item_ms(&mut self, time_per_item_ms: u64) {
        if self.options.time_per_item_ms == time_per_item_ms {
            return;
        }
        self.options.time_per_item_ms = time_per_item_ms;
        self.notify(false);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.notify(false);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of original (non-clone) items observed at the last report.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Number of tagged clones the host is expected to hold.
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Base item count used by the ratio-form duration, once captured.
    pub fn base_count(&self) -> Option<usize> {
        self.options.base_count
    }

    /// Total item count the host should hold after (re)initialization: originals + clones.
    pub fn expected_len(&self) -> usize {
        self.original_count + self.clone_count
    }

    /// First-time setup for a region.
    ///
    /// Records the observed original count, captures `base_count` if it is still unset, and
    /// transitions to [`Phase::Seamless`]. The returned plan appends one tagged clone per
    /// original without clearing, so this is meant to run once at startup; use
    /// [`Marquee::reinitialize`] for structural changes.
    pub fn initialize(&mut self, observed_originals: usize) -> ClonePlan {
        if self.options.base_count.is_none() {
            self.options.base_count = Some(observed_originals);
            mdebug!(
                selector = %self.options.selector,
                base_count = observed_originals,
                "base count auto-set"
            );
        }
        self.original_count = observed_originals;
        self.clone_count = observed_originals;
        self.phase = Phase::Seamless;
        self.notify(true);
        ClonePlan {
            clear_existing: false,
            append: observed_originals,
        }
    }

    /// Forced reset after a structural change.
    ///
    /// Unlike [`Marquee::initialize`], this unconditionally overwrites `base_count` with the
    /// freshly observed count, and the returned plan clears all existing clones before
    /// appending new ones, so repeated resets never accumulate.
    pub fn reinitialize(&mut self, observed_originals: usize) -> ClonePlan {
        self.options.base_count = Some(observed_originals);
        mdebug!(
            selector = %self.options.selector,
            base_count = observed_originals,
            "base count reset"
        );
        self.original_count = observed_originals;
        self.clone_count = observed_originals;
        self.phase = Phase::Seamless;
        self.notify(true);
        ClonePlan {
            clear_existing: true,
            append: observed_originals,
        }
    }

    /// Refreshes the observed original count without touching clones or `base_count`.
    ///
    /// This is the recount performed when speeds are (re)applied.
    pub fn set_original_count(&mut self, original_count: usize) {
        if self.original_count == original_count {
            return;
        }
        self.original_count = original_count;
        self.notify(true);
    }

    /// Total animation duration for the current original count.
    ///
    /// Zero when the region holds no originals; callers treat that as "no animation needed".
    pub fn duration_ms(&self) -> u64 {
        compute_duration_ms(self.options.time_per_item_ms, self.original_count)
    }

    /// Ratio-form duration for an arbitrary item count, scaled against `base_count`.
    ///
    /// Returns `None` while `base_count` is unset or zero.
    pub fn scaled_duration_ms(&self, actual_count: usize) -> Option<u64> {
        let base_count = self.options.base_count?;
        scale_duration_ms(self.options.time_per_item_ms, base_count, actual_count)
    }

    /// The animation to apply to the region container, if any.
    ///
    /// `None` when the marquee is disabled or the region holds no originals.
    pub fn animation(&self) -> Option<AnimationSpec> {
        if !self.options.enabled || self.original_count == 0 {
            return None;
        }
        Some(AnimationSpec::new(
            self.options.keyframes.clone(),
            self.duration_ms(),
        ))
    }

    fn notify_now(&self, structural: bool) {
        if let Some(cb) = &self.options.on_change {
            cb(self, structural);
        }
    }

    fn notify(&self, structural: bool) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            if structural {
                self.notify_structural.set(true);
            }
            return;
        }
        self.notify_now(structural);
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: a structural pass typically records a new count, applies a
    /// clone plan, and reapplies the animation together. Without batching, each setter may
    /// trigger `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now(self.notify_structural.replace(false));
        }
    }
}
