//! Property-based invariant tests for the carousel and theme controller.
//!
//! 1. `k` nexts from `p` land on `(p + k) mod N`; `k` prevs on `(p - k) mod N`
//! 2. The index never leaves `0..N`
//! 3. After any navigation exactly one card is active
//! 4. Progress is `(index + 1) * 100 / N`
//! 5. Unknown theme keys leave every style variable untouched
//! 6. Swipes within the threshold never navigate; beyond it, exactly one step
//! 7. Drags within the threshold never navigate; beyond it, exactly one step
//! 8. Frame gate grants at most one pending frame

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use spiceberg_core::ambient::FrameGate;
use spiceberg_core::css::CardTransform;
use spiceberg_core::{
    Carousel, DishItem, LandingConfig, LandingController, RecordingSurface, ThemeTable,
};

// ── Helpers ──────────────────────────────────────────────────────────

const KEYS: [&str; 4] = ["truffle", "saffron", "ocean", "ember"];

fn items(n: usize) -> Vec<DishItem> {
    (0..n).map(|i| DishItem::themed(KEYS[i % KEYS.len()])).collect()
}

fn controller(n: usize) -> (LandingController, RecordingSurface) {
    let mut c = LandingController::new(LandingConfig::default(), ThemeTable::builtin(), items(n))
        .expect("valid controller");
    let mut s = RecordingSurface::new();
    c.boot(&mut s, &mut SmallRng::seed_from_u64(0));
    (c, s)
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Prev,
    Goto(isize),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Next),
        Just(Nav::Prev),
        (-50isize..50).prop_map(Nav::Goto),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Modular stepping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_k_times_is_modular(n in 1usize..12, p in 0usize..12, k in 0usize..40) {
        let p = p % n;
        let mut carousel = Carousel::new(items(n), 398.0).unwrap();
        carousel.go_to(p as isize);
        for _ in 0..k {
            carousel.next();
        }
        prop_assert_eq!(carousel.index(), (p + k) % n);
    }

    #[test]
    fn prev_k_times_is_modular(n in 1usize..12, p in 0usize..12, k in 0usize..40) {
        let p = p % n;
        let mut carousel = Carousel::new(items(n), 398.0).unwrap();
        carousel.go_to(p as isize);
        for _ in 0..k {
            carousel.prev();
        }
        let expected = (p as isize - k as isize).rem_euclid(n as isize) as usize;
        prop_assert_eq!(carousel.index(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–4. Index bounds, single active card, progress
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn navigation_keeps_rendered_invariants(
        n in 1usize..10,
        navs in proptest::collection::vec(nav_strategy(), 0..30),
    ) {
        let (mut c, mut s) = controller(n);
        for nav in navs {
            match nav {
                Nav::Next => c.next(&mut s),
                Nav::Prev => c.prev(&mut s),
                Nav::Goto(t) => c.go_to_slide(t, &mut s),
            }
            let index = c.active_index();
            prop_assert!(index < n);

            let active: Vec<usize> = (0..n)
                .filter(|card| s.cards[card].transform == CardTransform::Scale(1.05))
                .collect();
            prop_assert_eq!(active, vec![index]);
            for card in 0..n {
                let expected = if card == index { 1.0 } else { 0.6 };
                prop_assert_eq!(s.card_opacity[&card], expected);
            }

            let progress = s.progress.unwrap();
            prop_assert_eq!(progress, (index + 1) as f64 * 100.0 / n as f64);
            prop_assert_eq!(s.track_offset.unwrap(), -(index as f64) * 398.0);
        }
    }

    #[test]
    fn progress_endpoints(n in 1usize..20) {
        let mut carousel = Carousel::new(items(n), 398.0).unwrap();
        prop_assert_eq!(carousel.go_to(n as isize - 1).progress_percent, 100.0);
        prop_assert_eq!(carousel.go_to(0).progress_percent, 100.0 / n as f64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Unknown themes are no-ops
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_theme_changes_nothing(steps in 0usize..8, key in "[a-z]{1,12}") {
        prop_assume!(!KEYS.contains(&key.as_str()));
        let (mut c, mut s) = controller(5);
        for _ in 0..steps {
            c.next(&mut s);
        }
        let before = s.clone();
        let theme_before = c.active_theme().to_owned();
        prop_assert!(!c.apply_theme(&key, &mut s));
        prop_assert_eq!(&s, &before);
        prop_assert_eq!(c.active_theme(), theme_before.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Gesture thresholds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn swipe_threshold(start in -1000.0f64..1000.0, delta in -400.0f64..400.0) {
        let (mut c, mut s) = controller(5);
        c.touch_start(start);
        let moved = c.touch_end(start - delta, &mut s).is_some();
        let index = c.active_index();
        let diff = start - (start - delta);
        if diff.abs() > 50.0 {
            prop_assert!(moved);
            let expected = if diff > 0.0 { 1 } else { 4 };
            prop_assert_eq!(index, expected);
        } else {
            prop_assert!(!moved);
            prop_assert_eq!(index, 0);
        }
    }

    #[test]
    fn drag_threshold(start in 0.0f64..1000.0, dx in -200.0f64..200.0) {
        let (mut c, mut s) = controller(5);
        c.mouse_down(start, &mut s);
        let moved = c.mouse_up(start + dx, &mut s).is_some();
        let walk = ((start + dx) - start) * 2.0;
        let index = c.active_index();
        if walk > 50.0 {
            prop_assert!(moved);
            prop_assert_eq!(index, 4);
        } else if walk < -50.0 {
            prop_assert!(moved);
            prop_assert_eq!(index, 1);
        } else {
            prop_assert!(!moved);
            prop_assert_eq!(index, 0);
        }
        prop_assert!(!s.grabbing);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Frame gate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn frame_gate_grants_one_frame_per_completion(events in 1usize..64) {
        let mut gate = FrameGate::new();
        let granted = (0..events).filter(|_| gate.request()).count();
        prop_assert_eq!(granted, 1);
        gate.complete();
        prop_assert!(gate.request());
    }
}
