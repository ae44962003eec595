// Example: the animation-restart workaround driven by a frame loop.
//
// On animationend the style is cleared; tick(now_ms) restores it once the
// minimal delay has passed, forcing the browser to restart the loop cleanly.
use marquee::{AnimationSpec, MarqueeOptions};
use marquee_adapter::{Manager, RegionHost};

#[derive(Default)]
struct FakeRegion {
    originals: usize,
    clones: usize,
    animation: Option<String>,
    reflows: usize,
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

    fn force_reflow(&mut self) {
        self.reflows += 1;
    }
}

fn main() {
    let mut manager = Manager::new().with_region(
        "photos",
        MarqueeOptions::new(4000, ".photos-scroll-wrapper"),
        Some(FakeRegion {
            originals: 6,
            ..FakeRegion::default()
        }),
    );
    manager.initialize();
    manager.apply_speeds();

    manager.on_animation_end(&"photos", 1_000);
    println!("cleared: {:?}", manager.host(&"photos").unwrap().animation);

    let mut now_ms = 1_000u64;
    loop {
        now_ms += 4;
        if manager.tick(now_ms) > 0 {
            break;
        }
    }
    let host = manager.host(&"photos").unwrap();
    println!(
        "restored at t={now_ms}: {:?} (reflows={})",
        host.animation, host.reflows
    );
}
