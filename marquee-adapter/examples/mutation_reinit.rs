// Example: a fake page layer driving the manager through a structural change.
//
// A DOM adapter would:
// - implement RegionHost once per scroll container (querying by selector)
// - call initialize() + apply_speeds() on document ready
// - forward mutation-observer batches to on_mutations()
use marquee::AnimationSpec;
use marquee_adapter::{Manager, MutationRecord, RegionHost, standard_regions};

#[derive(Default)]
struct FakeRegion {
    originals: usize,
    clones: usize,
    animation: Option<String>,
}

impl RegionHost for FakeRegion {
    fn original_count(&self) -> usize {
        self.originals
    }

    fn clone_count(&self) -> usize {
        self.clones
    }

    fn append_clones(&mut self) -> usize {
        self.clones += self.originals;
        self.originals
    }

    fn remove_clones(&mut self) -> usize {
        std::mem::take(&mut self.clones)
    }

    fn set_animation(&mut self, animation: Option<&AnimationSpec>) {
        self.animation = animation.map(ToString::to_string);
    }
}

fn main() {
    let mut manager = Manager::new();
    for ((name, options), count) in standard_regions().into_iter().zip([5, 2, 8]) {
        manager.insert_region(
            name,
            options,
            Some(FakeRegion {
                originals: count,
                ..FakeRegion::default()
            }),
        );
    }

    manager.initialize();
    manager.apply_speeds();
    manager.for_each_region(|name, m| {
        println!(
            "{name}: {} originals, animation={:?}",
            m.original_count(),
            m.animation().map(|a| a.to_string())
        );
    });

    // Two items land in the alumni region; the observer reports a batch.
    manager.host_mut(&"alumni".to_string()).unwrap().originals += 2;
    manager.on_mutations([MutationRecord::added(2)]);

    let alumni = manager.marquee(&"alumni".to_string()).unwrap();
    println!(
        "after mutation: {} + {} items, animation={}",
        alumni.original_count(),
        alumni.clone_count(),
        alumni.animation().unwrap()
    );
}
