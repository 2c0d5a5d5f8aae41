// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::f64::consts::PI;
use valuestream_core::{SineWaveSource, ValueSource};

const TOLERANCE: f64 = 1e-9;

#[test]
fn kth_value_is_sine_of_k_times_increment() {
    let increment = 0.37;
    let mut wave = SineWaveSource::new(increment);

    for k in 1..=1_000 {
        let expected = (f64::from(k) * increment).sin();
        assert!((wave.generate() - expected).abs() < TOLERANCE, "k = {k}");
    }
}

#[test]
fn first_value_is_not_sine_of_zero() {
    let mut wave = SineWaveSource::new(PI / 6.0);
    assert!((wave.generate() - 0.5).abs() < TOLERANCE);
}

#[test]
fn phase_accumulates() {
    let mut wave = SineWaveSource::new(0.25);
    assert_eq!(wave.phase(), 0.0);

    wave.generate();
    wave.generate();
    assert!((wave.phase() - 0.5).abs() < TOLERANCE);
}

#[test]
fn changing_increment_keeps_phase() {
    let mut wave = SineWaveSource::new(0.5);
    wave.generate();

    wave.set_increment(1.0);
    assert_eq!(wave.increment(), 1.0);
    assert!((wave.generate() - 1.5_f64.sin()).abs() < TOLERANCE);
}

#[test]
fn default_increment() {
    let mut wave = SineWaveSource::default();
    assert_eq!(wave.increment(), SineWaveSource::DEFAULT_INCREMENT);
    assert!((wave.generate() - 0.1_f64.sin()).abs() < TOLERANCE);
}

#[test]
fn zero_increment_stays_flat() {
    let mut wave = SineWaveSource::new(0.0);
    for _ in 0..5 {
        assert_eq!(wave.generate(), 0.0);
    }
}
