// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::SeedableRng;
use valuestream_core::{BoolSource, ValueSource};

#[test]
fn produces_both_values() {
    let mut source = BoolSource::with_rng(StdRng::seed_from_u64(1));
    let draws: Vec<bool> = (0..200).map(|_| source.generate()).collect();

    assert!(draws.contains(&true));
    assert!(draws.contains(&false));
}

#[test]
fn roughly_balanced() {
    let mut source = BoolSource::with_rng(StdRng::seed_from_u64(2024));
    let trues = (0..10_000).filter(|_| source.generate()).count();

    assert!((4_000..=6_000).contains(&trues), "got {trues} trues");
}

#[test]
fn default_source_generates() {
    let mut source = BoolSource::default();
    let _ = source.generate();
}
