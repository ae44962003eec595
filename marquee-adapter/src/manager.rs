use alloc::string::String;
use alloc::vec::Vec;

use marquee::{ClonePlan, Marquee, MarqueeOptions};

use crate::{MutationRecord, RegionHost, RestartToggle};

/// A framework-neutral manager that wraps one [`Marquee`] per named region and provides the
/// common page workflows: one-time initialization, speed application, and mutation-driven
/// forced resets.
///
/// This type does not hold any DOM objects beyond the injected hosts. A page layer drives it
/// by calling:
/// - `initialize()` once on document ready
/// - `on_mutations(batch)` when its change observer fires
/// - `on_animation_end(key, now_ms)` + `tick(now_ms)` for clean loop restarts
///
/// Regions whose container is absent from the page are registered with `host: None` and
/// silently skipped by every operation.
#[derive(Clone, Debug)]
pub struct Manager<K, H> {
    regions: Vec<Entry<K, H>>,
    applying: bool,
}

#[derive(Clone, Debug)]
struct Entry<K, H> {
    key: K,
    marquee: Marquee,
    host: Option<H>,
    pending_restart: Option<RestartToggle>,
}

impl<K, H> Default for Manager<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H> Manager<K, H> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            applying: false,
        }
    }

    /// Registers a region. `host: None` marks a region whose container is missing from the
    /// page; it stays registered but every operation skips it.
    pub fn insert_region(&mut self, key: K, options: MarqueeOptions, host: Option<H>) {
        self.regions.push(Entry {
            key,
            marquee: Marquee::new(options),
            host,
            pending_restart: None,
        });
    }

    /// Builder form of [`Manager::insert_region`].
    pub fn with_region(mut self, key: K, options: MarqueeOptions, host: Option<H>) -> Self {
        self.insert_region(key, options, host);
        self
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates over all regions (present or not) without allocations.
    pub fn for_each_region(&self, mut f: impl FnMut(&K, &Marquee)) {
        for entry in &self.regions {
            f(&entry.key, &entry.marquee);
        }
    }
}

impl<K: PartialEq, H: RegionHost> Manager<K, H> {
    pub fn marquee(&self, key: &K) -> Option<&Marquee> {
        self.entry(key).map(|e| &e.marquee)
    }

    pub fn marquee_mut(&mut self, key: &K) -> Option<&mut Marquee> {
        self.entry_mut(key).map(|e| &mut e.marquee)
    }

    pub fn host(&self, key: &K) -> Option<&H> {
        self.entry(key).and_then(|e| e.host.as_ref())
    }

    pub fn host_mut(&mut self, key: &K) -> Option<&mut H> {
        self.entry_mut(key).and_then(|e| e.host.as_mut())
    }

    /// One-time startup pass: for every present region, observe the original items, append
    /// one tagged clone per original, and capture the base count if still unset.
    ///
    /// Call [`Manager::apply_speeds`] afterwards to push the computed animations.
    pub fn initialize(&mut self) {
        for entry in &mut self.regions {
            let Some(host) = entry.host.as_mut() else {
                continue;
            };
            let observed = host.original_count();
            let plan = entry.marquee.initialize(observed);
            apply_plan(host, plan);
            adebug!(
                selector = %entry.marquee.options().selector,
                originals = observed,
                "region initialized"
            );
        }
    }

    /// Recomputes each present region's original count and duration, then pushes the
    /// resulting animation to its host (`None` for zero-item regions).
    pub fn apply_speeds(&mut self) {
        for entry in &mut self.regions {
            let Some(host) = entry.host.as_mut() else {
                continue;
            };
            let originals = host.original_count();
            entry.marquee.set_original_count(originals);
            let animation = entry.marquee.animation();
            host.set_animation(animation.as_ref());
            adebug!(
                selector = %entry.marquee.options().selector,
                items = originals,
                time_per_item_ms = entry.marquee.options().time_per_item_ms,
                duration_ms = entry.marquee.duration_ms(),
                "speed applied"
            );
        }
    }

    /// Alias of [`Manager::apply_speeds`], matching the exported page surface.
    pub fn update_speeds(&mut self) {
        self.apply_speeds();
    }

    /// Rebuilds every present region's clone set.
    ///
    /// With `force_reset`, existing clones are removed first and each region's base count is
    /// overwritten with the freshly observed originals; without it, this behaves like
    /// [`Manager::initialize`].
    pub fn reinitialize(&mut self, force_reset: bool) {
        for entry in &mut self.regions {
            let Some(host) = entry.host.as_mut() else {
                continue;
            };
            let observed = host.original_count();
            let plan = if force_reset {
                entry.marquee.reinitialize(observed)
            } else {
                entry.marquee.initialize(observed)
            };
            apply_plan(host, plan);
            adebug!(
                selector = %entry.marquee.options().selector,
                originals = observed,
                force_reset,
                "region reinitialized"
            );
        }
    }

    /// Reacts to a batch of observed structural changes.
    ///
    /// If at least one record added nodes, performs exactly one `reinitialize(true)` +
    /// `apply_speeds()` pass across *all* regions, not just the one that changed. Batches
    /// reported while the manager is applying its own mutations are ignored, so clone
    /// insertion can never feed back into an infinite reinitialization loop.
    ///
    /// Returns whether a pass ran.
    pub fn on_mutations(&mut self, records: impl IntoIterator<Item = MutationRecord>) -> bool {
        if self.applying {
            atrace!("self-triggered mutation batch ignored");
            return false;
        }
        let has_additions = records.into_iter().any(|r| r.added > 0);
        if !has_additions {
            return false;
        }
        adebug!("structural change detected, updating scroll speeds");
        self.applying = true;
        self.reinitialize(true);
        self.apply_speeds();
        self.applying = false;
        true
    }

    /// Reacts to a region's animation-cycle-complete event by clearing its animation and
    /// scheduling a restart toggle.
    ///
    /// Returns whether a restart was scheduled (false for unknown or absent regions).
    pub fn on_animation_end(&mut self, key: &K, now_ms: u64) -> bool {
        let Some(entry) = self.entry_mut(key) else {
            return false;
        };
        let Some(host) = entry.host.as_mut() else {
            return false;
        };
        host.set_animation(None);
        entry.pending_restart = Some(RestartToggle::new(now_ms));
        true
    }

    /// Advances pending restart toggles; restores the animation (after a forced reflow) for
    /// every region whose toggle is due.
    ///
    /// Returns how many regions were restarted.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut restarted = 0;
        for entry in &mut self.regions {
            let Some(toggle) = entry.pending_restart else {
                continue;
            };
            if !toggle.is_due(now_ms) {
                continue;
            }
            entry.pending_restart = None;
            let Some(host) = entry.host.as_mut() else {
                continue;
            };
            host.force_reflow();
            host.set_animation(entry.marquee.animation().as_ref());
            restarted += 1;
        }
        restarted
    }

    fn entry(&self, key: &K) -> Option<&Entry<K, H>> {
        self.regions.iter().find(|e| &e.key == key)
    }

    fn entry_mut(&mut self, key: &K) -> Option<&mut Entry<K, H>> {
        self.regions.iter_mut().find(|e| &e.key == key)
    }
}

fn apply_plan<H: RegionHost>(host: &mut H, plan: ClonePlan) {
    if plan.clear_existing {
        host.remove_clones();
    }
    if plan.append > 0 {
        let appended = host.append_clones();
        debug_assert_eq!(appended, plan.append, "host cloned a stale original set");
    }
}

/// The three built-in region configurations, keyed by region name.
pub fn standard_regions() -> Vec<(String, MarqueeOptions)> {
    Vec::from([
        (
            String::from("alumni"),
            MarqueeOptions::new(2500, ".alumni-scroll-wrapper"),
        ),
        (
            String::from("activities"),
            MarqueeOptions::new(10_000, ".activities-scroll-wrapper"),
        ),
        (
            String::from("photos"),
            MarqueeOptions::new(4000, ".photos-scroll-wrapper"),
        ),
    ])
}
