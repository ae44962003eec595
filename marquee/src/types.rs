use alloc::string::String;
use core::fmt;

/// Lifecycle of a carousel region.
///
/// A region starts [`Phase::Uninitialized`] (no clones present) and becomes
/// [`Phase::Seamless`] once a full clone of its originals has been appended. Reinitialization
/// is a self-loop on `Seamless`; there is no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Uninitialized,
    Seamless,
}

/// The DOM effect a host must apply after `initialize`/`reinitialize`.
///
/// When `clear_existing` is set, all previously tagged clones must be removed *before* the new
/// clones are appended, so repeated resets never accumulate stale copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClonePlan {
    /// Remove all currently tagged clones first.
    pub clear_existing: bool,
    /// Number of tagged deep copies to append, one per original, preserving order.
    pub append: usize,
}

impl ClonePlan {
    pub fn is_noop(&self) -> bool {
        !self.clear_existing && self.append == 0
    }
}

/// A computed animation for a region container.
///
/// `Display` renders the inline CSS style value, e.g. `scroll-left 12.5s linear infinite`.
/// The duration is formatted with millisecond precision, trailing zeros trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    /// Name of the CSS keyframe rule driving the loop.
    pub keyframes: String,
    /// Total animation duration in milliseconds.
    pub duration_ms: u64,
}

impl AnimationSpec {
    pub fn new(keyframes: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            keyframes: keyframes.into(),
            duration_ms,
        }
    }
}

impl fmt::Display for AnimationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.keyframes)?;
        write_seconds(f, self.duration_ms)?;
        f.write_str("s linear infinite")
    }
}

fn write_seconds(f: &mut fmt::Formatter<'_>, ms: u64) -> fmt::Result {
    let whole = ms / 1000;
    let frac = ms % 1000;
    if frac == 0 {
        write!(f, "{whole}")
    } else if frac % 100 == 0 {
        write!(f, "{whole}.{}", frac / 100)
    } else if frac % 10 == 0 {
        write!(f, "{whole}.{:02}", frac / 10)
    } else {
        write!(f, "{whole}.{frac:03}")
    }
}
