/// Delay between clearing and restoring a region's animation, in milliseconds.
///
/// Long enough for the style engine to observe the cleared state, short enough to be
/// invisible.
pub const RESTART_DELAY_MS: u64 = 10;

/// A pending animation restart for one region.
///
/// When a full animation cycle ends, restoring the style immediately risks a visual snap;
/// the workaround is a minimal-delay toggle: clear the animation, then restore it once the
/// delay has passed. Like a tween, this is adapter-driven: create it at `now_ms` and sample
/// it from `tick(now_ms)` calls, no real timers involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartToggle {
    pub resume_at_ms: u64,
}

impl RestartToggle {
    pub fn new(now_ms: u64) -> Self {
        Self {
            resume_at_ms: now_ms.saturating_add(RESTART_DELAY_MS),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.resume_at_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.resume_at_ms.saturating_sub(now_ms)
    }
}
