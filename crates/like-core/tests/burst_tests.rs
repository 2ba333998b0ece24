// Host-side tests for the popping-circle decay animator and its easing curves.

use like_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

#[test]
fn bezier_endpoints_are_fixed() {
    for curve in [POP_SCALE_EASING, EASE_IN, CubicBezier::new(0.25, 0.1, 0.25, 1.0)] {
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-3.0), 0.0);
        assert_eq!(curve.ease(7.0), 1.0);
    }
}

#[test]
fn bezier_curves_are_monotonic() {
    for curve in [POP_SCALE_EASING, EASE_IN] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = curve.ease(i as f32 / 100.0);
            assert!(y + 1e-5 >= prev, "curve {curve:?} dipped at {i}");
            prev = y;
        }
    }
}

#[test]
fn linear_bezier_is_identity() {
    let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        assert!((linear.ease(t) - t).abs() < 1e-3);
    }
}

#[test]
fn ease_in_starts_slow() {
    assert!(EASE_IN.ease(0.25) < 0.25);
    assert!(EASE_IN.ease(0.5) < 0.5);
}

#[test]
fn burst_scales_in_300ms_and_fades_over_500ms() {
    let mut field = BurstField::new();
    field.spawn(POPPING_CIRCLE_COLOR, 40.0, false).unwrap();
    let b = field.iter().next().unwrap();
    assert_eq!(b.scale(), 0.0);
    assert_eq!(b.opacity(), 1.0);
    assert_eq!(b.duration(), Duration::from_millis(500));

    field.advance(Duration::from_millis(300));
    let b = field.iter().next().unwrap();
    assert_eq!(b.scale(), 1.0);
    assert!(b.opacity() > 0.0 && b.opacity() < 1.0);

    field.advance(Duration::from_millis(150));
    let b = field.iter().next().unwrap();
    assert_eq!(b.scale(), 1.0);
    assert!(b.opacity() < 0.5);
}

#[test]
fn burst_expires_and_never_comes_back() {
    let mut field = BurstField::new();
    field.spawn(POPPING_CIRCLE_COLOR, 40.0, false);
    let mut frames = 0;
    while field.advance(FRAME) {
        frames += 1;
        assert!(frames < 100, "burst never expired");
    }
    // ~500ms at 60fps
    assert!((29..=31).contains(&frames), "expired after {frames} frames");
    assert!(field.is_empty());
    for _ in 0..60 {
        assert!(!field.advance(FRAME));
        assert_eq!(field.len(), 0);
    }
}

#[test]
fn overlapping_bursts_expire_independently() {
    let mut field = BurstField::new();
    let first = field.spawn(POPPING_CIRCLE_COLOR, 40.0, false).unwrap();
    field.advance(Duration::from_millis(200));
    let second = field.spawn(POPPING_CIRCLE_COLOR, 40.0, false).unwrap();
    assert_ne!(first, second);
    assert_eq!(field.len(), 2);

    field.advance(Duration::from_millis(300));
    let ids: Vec<BurstId> = field.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second]);
    assert_eq!(field.iter().next().unwrap().elapsed(), Duration::from_millis(300));

    field.advance(Duration::from_millis(200));
    assert!(field.is_empty());
}

#[test]
fn reduced_motion_never_spawns() {
    let mut field = BurstField::new();
    assert_eq!(field.spawn(POPPING_CIRCLE_COLOR, 40.0, true), None);
    assert!(field.is_empty());
    assert!(!field.advance(FRAME));
}

#[test]
fn clear_unmounts_live_bursts() {
    let mut field = BurstField::new();
    field.spawn(POPPING_CIRCLE_COLOR, 40.0, false);
    field.spawn(POPPING_CIRCLE_COLOR, 40.0, false);
    field.clear();
    assert!(field.is_empty());
}
