// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use valuestream_core::{SubjectError, ValueStreamError, ValueSubject};

#[tokio::test]
async fn broadcasts_to_multiple_subscribers() {
    let subject = ValueSubject::<i32>::new();
    let mut a = subject.subscribe().unwrap();
    let mut b = subject.subscribe().unwrap();

    assert_eq!(subject.send(1).unwrap(), 2);

    assert_eq!(a.next().await, Some(1));
    assert_eq!(b.next().await, Some(1));
}

#[tokio::test]
async fn late_subscriber_misses_earlier_values() {
    let subject = ValueSubject::<&'static str>::new();
    subject.send("early").unwrap();

    let mut late = subject.subscribe().unwrap();
    subject.send("late").unwrap();
    subject.close();

    assert_eq!(late.next().await, Some("late"));
    assert_eq!(late.next().await, None);
}

#[tokio::test]
async fn dropped_subscribers_are_pruned_on_send() {
    let subject = ValueSubject::<u8>::new();
    let keep = subject.subscribe().unwrap();
    let gone = subject.subscribe().unwrap();
    drop(gone);

    assert_eq!(subject.subscriber_count(), 2);
    assert_eq!(subject.send(9).unwrap(), 1);
    assert_eq!(subject.subscriber_count(), 1);
    drop(keep);
}

#[test]
fn send_and_subscribe_after_close_fail() {
    let subject = ValueSubject::<i32>::new();
    subject.close();
    subject.close();

    assert!(subject.is_closed());
    assert_eq!(subject.send(1).unwrap_err(), SubjectError::Closed);
    assert!(matches!(subject.subscribe(), Err(SubjectError::Closed)));
}

#[test]
fn subject_error_converts_to_root_error() {
    let err: ValueStreamError = SubjectError::Closed.into();
    assert_eq!(err, ValueStreamError::SubjectClosed);
    assert_eq!(SubjectError::Closed.to_string(), "Subject is closed");
}

#[tokio::test]
async fn clones_share_subscribers() {
    let subject = ValueSubject::<i32>::new();
    let clone = subject.clone();
    let mut stream = subject.subscribe().unwrap();

    clone.send(5).unwrap();
    assert_eq!(stream.next().await, Some(5));
}
