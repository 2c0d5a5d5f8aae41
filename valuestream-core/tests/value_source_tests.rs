// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use valuestream_core::{ArrayMode, ArraySource, BoxedSource, SineWaveSource, ValueSource};

#[test]
fn boxed_sources_share_one_type() {
    let mut sources: Vec<BoxedSource<f64>> = vec![
        Box::new(ArraySource::new(vec![1.0, 2.0], ArrayMode::Increment).unwrap()),
        Box::new(SineWaveSource::new(0.0)),
    ];

    let drawn: Vec<f64> = sources.iter_mut().map(|s| s.generate()).collect();
    assert_eq!(drawn, vec![1.0, 0.0]);
}

fn draw_twice<S: ValueSource>(mut source: S) -> (S::Output, S::Output) {
    (source.generate(), source.generate())
}

#[test]
fn mutable_reference_advances_the_original() {
    let mut source = ArraySource::new(vec![1, 2, 3], ArrayMode::Increment).unwrap();

    assert_eq!(draw_twice(&mut source), (1, 2));
    assert_eq!(source.generate(), 3);
}
