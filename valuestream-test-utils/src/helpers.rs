// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = T> + Unpin,
    T: Debug + PartialEq,
{
    let item = stream.next().await.expect("expected next item");
    assert_eq!(item, expected);
}

/// Awaits exactly `count` items, failing if the stream ends first.
pub async fn collect_next<S, T>(stream: &mut S, count: usize) -> Vec<T>
where
    S: Stream<Item = T> + Unpin,
{
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(stream.next().await.expect("stream ended early"));
    }
    items
}

/// Asserts `actual` and `expected` differ by less than `tolerance`.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}
