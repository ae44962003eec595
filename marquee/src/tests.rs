use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

fn opts(time_per_item_ms: u64) -> MarqueeOptions {
    MarqueeOptions::new(time_per_item_ms, ".photos-scroll-wrapper")
}

#[test]
fn duration_is_proportional_to_item_count() {
    for n in 1..200usize {
        assert_eq!(compute_duration_ms(2500, n), 2500 * n as u64);
    }
    assert_eq!(compute_duration_ms(2500, 0), 0);
    assert_eq!(compute_duration_ms(0, 17), 0);
}

#[test]
fn duration_saturates_instead_of_overflowing() {
    assert_eq!(compute_duration_ms(u64::MAX, 2), u64::MAX);
}

#[test]
fn ratio_form_guards_zero_base_count() {
    assert_eq!(scale_duration_ms(2500, 0, 10), None);
    assert_eq!(scale_duration_ms(2500, 5, 10), Some(5000));
    assert_eq!(scale_duration_ms(2500, 5, 0), Some(0));
    // Widened intermediate: base_ms * actual would overflow u64.
    assert_eq!(scale_duration_ms(u64::MAX, 4, 2), Some(u64::MAX / 2));
}

#[test]
fn animation_style_matches_dom_write_contract() {
    let mut m = Marquee::new(opts(2500));
    m.initialize(5);
    let anim = m.animation().unwrap();
    assert_eq!(anim.duration_ms, 12_500);
    assert_eq!(anim.to_string(), "scroll-left 12.5s linear infinite");
}

#[test]
fn animation_seconds_formatting_trims_trailing_zeros() {
    let cases = [
        (12_000, "k 12s linear infinite"),
        (12_500, "k 12.5s linear infinite"),
        (12_340, "k 12.34s linear infinite"),
        (12_345, "k 12.345s linear infinite"),
        (500, "k 0.5s linear infinite"),
        (7, "k 0.007s linear infinite"),
    ];
    for (ms, expected) in cases {
        assert_eq!(AnimationSpec::new("k", ms).to_string(), expected);
    }
}

#[test]
fn initialize_enters_seamless_and_doubles_items() {
    let mut m = Marquee::new(opts(1000));
    assert_eq!(m.phase(), Phase::Uninitialized);
    assert_eq!(m.base_count(), None);

    let plan = m.initialize(7);
    assert_eq!(
        plan,
        ClonePlan {
            clear_existing: false,
            append: 7
        }
    );
    assert_eq!(m.phase(), Phase::Seamless);
    assert_eq!(m.original_count(), 7);
    assert_eq!(m.clone_count(), 7);
    assert_eq!(m.expected_len(), 14);
    assert_eq!(m.base_count(), Some(7));
}

#[test]
fn initialize_keeps_preset_base_count() {
    let mut m = Marquee::new(opts(1000).with_base_count(Some(10)));
    m.initialize(4);
    assert_eq!(m.base_count(), Some(10));
}

#[test]
fn reinitialize_overwrites_base_count_and_clears_clones() {
    let mut m = Marquee::new(opts(1000));
    m.initialize(5);
    assert_eq!(m.base_count(), Some(5));

    let plan = m.reinitialize(7);
    assert_eq!(
        plan,
        ClonePlan {
            clear_existing: true,
            append: 7
        }
    );
    assert_eq!(m.base_count(), Some(7));
    assert_eq!(m.expected_len(), 14);
    assert_eq!(m.phase(), Phase::Seamless);
}

#[test]
fn recount_leaves_clones_and_base_count_alone() {
    let mut m = Marquee::new(opts(1000));
    m.initialize(5);
    m.set_original_count(9);
    assert_eq!(m.original_count(), 9);
    assert_eq!(m.clone_count(), 5);
    assert_eq!(m.base_count(), Some(5));
    assert_eq!(m.duration_ms(), 9000);
}

#[test]
fn zero_item_region_yields_no_animation() {
    let mut m = Marquee::new(opts(2500));
    m.initialize(0);
    assert_eq!(m.duration_ms(), 0);
    assert_eq!(m.animation(), None);
    assert_eq!(m.base_count(), Some(0));
    assert_eq!(m.scaled_duration_ms(3), None);
}

#[test]
fn disabled_marquee_yields_no_animation() {
    let mut m = Marquee::new(opts(2500));
    m.initialize(5);
    m.set_enabled(false);
    assert_eq!(m.animation(), None);
    m.set_enabled(true);
    assert!(m.animation().is_some());
}

#[test]
fn scaled_duration_uses_captured_base_count() {
    let mut m = Marquee::new(opts(2500));
    assert_eq!(m.scaled_duration_ms(10), None);
    m.initialize(5);
    assert_eq!(m.scaled_duration_ms(7), Some(3500));
    assert_eq!(m.scaled_duration_ms(5), Some(2500));
}

#[test]
fn on_change_reports_structural_updates() {
    let structural = Arc::new(AtomicUsize::new(0));
    let style_only = Arc::new(AtomicUsize::new(0));
    let (s, t) = (Arc::clone(&structural), Arc::clone(&style_only));

    let mut m = Marquee::new(opts(1000).with_on_change(Some(move |_: &Marquee, is_structural| {
        if is_structural {
            s.fetch_add(1, Ordering::SeqCst);
        } else {
            t.fetch_add(1, Ordering::SeqCst);
        }
    })));

    m.initialize(3);
    assert_eq!(structural.load(Ordering::SeqCst), 1);

    m.set_time_per_item_ms(2000);
    assert_eq!(style_only.load(Ordering::SeqCst), 1);

    // No-op setters stay silent.
    m.set_time_per_item_ms(2000);
    m.set_original_count(3);
    assert_eq!(structural.load(Ordering::SeqCst), 1);
    assert_eq!(style_only.load(Ordering::SeqCst), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);

    let mut m = Marquee::new(opts(1000).with_on_change(Some(move |_: &Marquee, _| {
        c.fetch_add(1, Ordering::SeqCst);
    })));

    m.batch_update(|m| {
        m.initialize(5);
        m.set_original_count(6);
        m.set_time_per_item_ms(1500);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn batched_structural_flag_survives_coalescing() {
    let last_structural = Arc::new(AtomicUsize::new(usize::MAX));
    let l = Arc::clone(&last_structural);

    let mut m = Marquee::new(opts(1000).with_on_change(Some(move |_: &Marquee, is_structural| {
        l.store(is_structural as usize, Ordering::SeqCst);
    })));

    m.batch_update(|m| {
        m.set_time_per_item_ms(1500);
        m.initialize(5);
    });
    assert_eq!(last_structural.load(Ordering::SeqCst), 1);
}
