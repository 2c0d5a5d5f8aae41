// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use valuestream_core::StopToken;

#[test]
fn new_token_is_not_stopped() {
    assert!(!StopToken::new().is_stopped());
}

#[test]
fn stop_is_idempotent_and_shared_by_clones() {
    let token = StopToken::default();
    let clone = token.clone();

    clone.stop();
    clone.stop();

    assert!(token.is_stopped());
    assert!(clone.is_stopped());
}

#[tokio::test]
async fn stopped_resolves_immediately_when_already_stopped() {
    let token = StopToken::new();
    token.stop();
    token.stopped().await;
}

#[tokio::test]
async fn stopped_waits_for_stop() {
    let token = StopToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.stopped().await;
        true
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!handle.is_finished());

    token.stop();
    assert!(handle.await.unwrap());
}

#[tokio::test]
async fn all_waiters_are_woken() {
    let token = StopToken::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let waiter = token.clone();
            tokio::spawn(async move { waiter.stopped().await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(5)).await;
    token.stop();

    for handle in handles {
        handle.await.unwrap();
    }
}
