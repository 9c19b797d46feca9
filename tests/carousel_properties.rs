//! Property-based tests for carousel invariants.
//!
//! Properties Under Test:
//! - The cursor always stays within `0..len`, whatever is requested.
//! - Exactly one slide and one indicator are active after every operation,
//!   and both match the cursor.
//! - Control visibility is a function of the cursor alone.
//! - A move onto the current cursor never runs a layout pass.
//! - The recorded translation always centers the active slide.

use cardreel::config::CarouselConfig;
use cardreel::state::{gesture, Carousel, CarouselView, NavControl, SwipeDirection};
use cardreel::view_state::{Presentation, SlideMetrics};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

#[derive(Debug, Clone)]
enum Op {
    GoTo(i64),
    Next,
    Prev,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-50i64..50).prop_map(Op::GoTo),
        Just(Op::Next),
        Just(Op::Prev),
    ]
}

fn metrics_strategy() -> impl Strategy<Value = SlideMetrics> {
    (1u16..=100, 1u16..=100).prop_map(|(active_percent, inactive_percent)| SlideMetrics {
        active_percent,
        inactive_percent,
    })
}

fn build(count: usize, viewport: u32, metrics: SlideMetrics, looping: bool) -> Carousel<Presentation> {
    let config = CarouselConfig {
        looping,
        ..CarouselConfig::default()
    };
    Carousel::new(Presentation::new(count, viewport, metrics, true), config).unwrap()
}

fn apply(carousel: &mut Carousel<Presentation>, op: &Op) -> bool {
    match op {
        Op::GoTo(target) => carousel.go_to(*target),
        Op::Next => carousel.next(),
        Op::Prev => carousel.prev(),
    }
}

/// Translation computed independently from the recorded widths.
fn expected_translation(carousel: &Carousel<Presentation>) -> i64 {
    let view = carousel.view();
    let gap = i64::from(carousel.config().gap);
    let cursor = carousel.cursor();
    let preceding: i64 = (0..cursor).map(|i| i64::from(view.slide_width(i)) + gap).sum();
    let slack = i64::from(view.viewport_width()) - i64::from(view.slide_width(cursor));
    // half rounded towards positive infinity
    let target = (slack + 1).div_euclid(2);
    target - preceding
}

proptest! {
    #[test]
    fn cursor_stays_in_range(
        count in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..40),
        looping in any::<bool>(),
    ) {
        let mut carousel = build(count, 800, SlideMetrics::default(), looping);
        for op in &ops {
            apply(&mut carousel, op);
            prop_assert!(carousel.cursor() < count);
        }
    }

    #[test]
    fn exactly_one_active_slide_and_indicator(
        count in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut carousel = build(count, 800, SlideMetrics::default(), false);
        for op in &ops {
            apply(&mut carousel, op);
            let cursor = carousel.cursor();
            prop_assert_eq!(carousel.view().active_slides(), vec![cursor]);
            prop_assert_eq!(carousel.view().active_indicators(), vec![cursor]);
            prop_assert_eq!(carousel.view().indicators().len(), count);
        }
    }

    #[test]
    fn controls_follow_cursor(
        count in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut carousel = build(count, 800, SlideMetrics::default(), false);
        for op in &ops {
            apply(&mut carousel, op);
            let cursor = carousel.cursor();
            let view = carousel.view();
            prop_assert_eq!(view.is_control_visible(NavControl::Prev), cursor > 0);
            prop_assert_eq!(view.is_control_visible(NavControl::Next), cursor < count - 1);
        }
    }

    #[test]
    fn move_to_current_cursor_runs_no_layout(
        count in 1usize..20,
        target in -50i64..50,
    ) {
        let mut carousel = build(count, 800, SlideMetrics::default(), false);
        carousel.go_to(target);
        let passes = carousel.layout_passes();
        let translation = carousel.view().translation();

        prop_assert!(!carousel.go_to(target));
        prop_assert_eq!(carousel.layout_passes(), passes);
        prop_assert_eq!(carousel.view().translation(), translation);
    }

    #[test]
    fn translation_centers_active_slide(
        count in 1usize..20,
        viewport in 1u32..5000,
        metrics in metrics_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut carousel = build(count, viewport, metrics, false);
        prop_assert_eq!(carousel.view().translation(), expected_translation(&carousel));
        for op in &ops {
            apply(&mut carousel, op);
            prop_assert_eq!(carousel.view().translation(), expected_translation(&carousel));
        }
    }

    #[test]
    fn swipe_classification_is_antisymmetric(dx in 1i64..1000, threshold in 0u32..500) {
        let forward = gesture::classify(-dx, threshold);
        let backward = gesture::classify(dx, threshold);
        if dx > i64::from(threshold) {
            prop_assert_eq!(forward, Some(SwipeDirection::Forward));
            prop_assert_eq!(backward, Some(SwipeDirection::Backward));
        } else {
            prop_assert_eq!(forward, None);
            prop_assert_eq!(backward, None);
        }
    }
}
