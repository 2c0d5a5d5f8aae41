// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::SeedableRng;
use valuestream_core::{DoubleSource, FloatSource, IntSource, RangeSource, ValueSource};

#[test]
fn int_values_stay_in_inclusive_range() {
    let mut source = IntSource::new(-3..=3).unwrap();

    for _ in 0..500 {
        let value = source.generate();
        assert!((-3..=3).contains(&value), "{value} out of range");
    }
}

#[test]
fn int_range_reaches_both_bounds() {
    let mut source = RangeSource::with_rng(0u8..=2, StdRng::seed_from_u64(3)).unwrap();
    let mut seen = [false; 3];

    for _ in 0..300 {
        seen[usize::from(source.generate())] = true;
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn double_values_stay_in_inclusive_range() {
    let mut source = DoubleSource::new(-1.5..=2.5).unwrap();

    for _ in 0..500 {
        let value = source.generate();
        assert!((-1.5..=2.5).contains(&value), "{value} out of range");
    }
}

#[test]
fn degenerate_range_returns_its_only_value() {
    let mut ints = IntSource::new(7..=7).unwrap();
    let mut doubles = DoubleSource::new(0.25..=0.25).unwrap();

    assert_eq!(ints.generate(), 7);
    assert_eq!(doubles.generate(), 0.25);
}

#[test]
fn reversed_range_is_rejected() {
    let err = IntSource::new(10..=1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn nan_and_infinite_bounds_are_rejected() {
    assert!(DoubleSource::new(f64::NAN..=1.0).unwrap_err().is_invalid_argument());
    assert!(DoubleSource::new(0.0..=f64::INFINITY)
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn float_range_whose_span_overflows_is_rejected() {
    assert!(DoubleSource::new(f64::MIN..=f64::MAX)
        .unwrap_err()
        .is_invalid_argument());

    let wide = DoubleSource::new(0.0..=f64::MAX / 2.0).unwrap();
    assert_eq!(wide.high(), f64::MAX / 2.0);
}

#[test]
fn defaults_match_documented_ranges() {
    let double = DoubleSource::default();
    assert_eq!((double.low(), double.high()), (0.0, 1.0));

    let float = FloatSource::default();
    assert_eq!((float.low(), float.high()), (0.0, 1.0));

    let int = IntSource::default();
    assert_eq!((int.low(), int.high()), (0, 100));
}

#[test]
fn seeded_sources_repeat_the_same_draws() {
    let mut a = RangeSource::with_rng(0..=1_000_000, StdRng::seed_from_u64(9)).unwrap();
    let mut b = RangeSource::with_rng(0..=1_000_000, StdRng::seed_from_u64(9)).unwrap();

    let left: Vec<i32> = (0..10).map(|_| a.generate()).collect();
    let right: Vec<i32> = (0..10).map(|_| b.generate()).collect();
    assert_eq!(left, right);
}

#[test]
fn debug_shows_bounds() {
    let source = IntSource::new(1..=6).unwrap();
    let rendered = format!("{source:?}");

    assert!(rendered.contains("RangeSource"));
    assert!(rendered.contains("low: 1"));
    assert!(rendered.contains("high: 6"));
}
