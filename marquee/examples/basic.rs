// Example: minimal region lifecycle and the computed animation style.
use marquee::{Marquee, MarqueeOptions};

fn main() {
    let mut m = Marquee::new(MarqueeOptions::new(2500, ".photos-scroll-wrapper"));

    let plan = m.initialize(5);
    println!("plan={plan:?}");
    println!("phase={:?} expected_len={}", m.phase(), m.expected_len());
    println!("animation={}", m.animation().unwrap());

    // Two items arrive; a forced reset rebuilds the clone set and the base count.
    let plan = m.reinitialize(7);
    println!("plan={plan:?}");
    println!("animation={}", m.animation().unwrap());
}
