// Example: the two duration formulas side by side.
use marquee::{compute_duration_ms, scale_duration_ms};

fn main() {
    // Per-item form: total time grows linearly with the original count.
    for n in [0usize, 1, 5, 12] {
        println!("{n:>2} items -> {} ms", compute_duration_ms(2500, n));
    }

    // Ratio form: scale a base time by actual/base item counts.
    println!("scaled={:?}", scale_duration_ms(12_500, 5, 7));
    // A zero base count is a guarded edge case, not a crash.
    println!("degenerate={:?}", scale_duration_ms(12_500, 0, 7));
}
