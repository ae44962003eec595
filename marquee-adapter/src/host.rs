use marquee::AnimationSpec;

/// The marker class a DOM host must put on appended clones, so originals and copies can be
/// told apart (and copies removed) by selector.
pub const CLONED_MARKER: &str = "cloned";

/// The narrow read/write contract between the manager and a real scroll container.
///
/// A DOM layer implements this once per region; tests implement it with an in-memory fake.
/// All methods must be infallible: a host wraps a container that exists, and the manager
/// represents absent regions as `None` instead.
pub trait RegionHost {
    /// Number of items not carrying the cloned marker.
    fn original_count(&self) -> usize;

    /// Number of items carrying the cloned marker.
    fn clone_count(&self) -> usize;

    /// Appends one tagged deep copy of every original, preserving order.
    ///
    /// Returns the number of clones appended.
    fn append_clones(&mut self) -> usize;

    /// Removes every item carrying the cloned marker.
    ///
    /// Returns the number of clones removed.
    fn remove_clones(&mut self) -> usize;

    /// Sets the container's inline animation style; `None` clears it.
    fn set_animation(&mut self, animation: Option<&AnimationSpec>);

    /// Forces a style recalculation between clearing and restoring an animation.
    ///
    /// Browser hosts read back a layout property here; the default is a no-op so the
    /// capability can be stubbed out entirely in non-browser environments.
    fn force_reflow(&mut self) {}
}

/// One entry of a batched structural-change observation.
///
/// Mirrors the shape a DOM mutation observer reports: how many child nodes a single
/// mutation added and removed. The manager only reacts to batches containing additions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    pub added: usize,
    pub removed: usize,
}

impl MutationRecord {
    pub fn added(n: usize) -> Self {
        Self { added: n, removed: 0 }
    }

    pub fn removed(n: usize) -> Self {
        Self { added: 0, removed: n }
    }
}
