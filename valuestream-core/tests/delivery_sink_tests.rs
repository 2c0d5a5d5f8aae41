// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use std::sync::{Arc, Mutex};
use valuestream_core::{DeliverySink, ValueStreamError};

#[test]
fn value_without_observers_is_dropped() {
    let sink = DeliverySink::<u32>::new();

    assert_eq!(sink.observer_count(), 0);
    assert_eq!(sink.deliver(1), 0);
}

#[test]
fn callback_receives_values_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let sink = DeliverySink::with_action(move |v| seen_clone.lock().unwrap().push(v));

    for v in 0..4 {
        assert_eq!(sink.deliver(v), 1);
    }

    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn set_action_replaces_previous_callback() {
    let first = Arc::new(Mutex::new(0));
    let second = Arc::new(Mutex::new(0));

    let sink = DeliverySink::new();
    let first_clone = first.clone();
    sink.set_action(move |v: i32| *first_clone.lock().unwrap() += v);
    sink.deliver(1);

    let second_clone = second.clone();
    sink.set_action(move |v: i32| *second_clone.lock().unwrap() += v);
    sink.deliver(10);

    assert_eq!(*first.lock().unwrap(), 1);
    assert_eq!(*second.lock().unwrap(), 10);
}

#[test]
fn clear_action_detaches_callback() {
    let sink = DeliverySink::with_action(|_: u8| {});
    assert!(sink.has_action());

    sink.clear_action();
    assert!(!sink.has_action());
    assert_eq!(sink.deliver(1), 0);
}

#[tokio::test]
async fn callback_and_subscribers_both_receive() -> anyhow::Result<()> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let sink = DeliverySink::with_action(move |v| seen_clone.lock().unwrap().push(v));
    let mut a = sink.subscribe()?;
    let mut b = sink.subscribe()?;

    assert_eq!(sink.observer_count(), 3);
    assert_eq!(sink.deliver("tick"), 3);

    assert_eq!(a.next().await, Some("tick"));
    assert_eq!(b.next().await, Some("tick"));
    assert_eq!(*seen.lock().unwrap(), vec!["tick"]);
    Ok(())
}

#[tokio::test]
async fn close_ends_streams_and_detaches_callback() {
    let sink = DeliverySink::with_action(|_: i32| {});
    let mut stream = sink.subscribe().unwrap();

    sink.close();

    assert!(sink.is_closed());
    assert!(!sink.has_action());
    assert_eq!(stream.next().await, None);
    assert_eq!(sink.deliver(3), 0);
    assert_eq!(
        sink.subscribe().err(),
        Some(ValueStreamError::SubjectClosed)
    );
}

#[test]
fn debug_lists_observers() {
    let sink = DeliverySink::with_action(|_: i32| {});
    let rendered = format!("{sink:?}");

    assert!(rendered.contains("has_action: true"));
    assert!(rendered.contains("subscribers: 0"));
}
