// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Collects values handed to a dispatcher callback.
///
/// ```
/// use valuestream_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let mut action = recorder.action();
/// action(1);
/// action(2);
///
/// assert_eq!(recorder.values(), vec![1, 2]);
/// assert_eq!(recorder.last(), Some(2));
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends to this recorder.
    pub fn action(&self) -> impl FnMut(T) + Send + 'static {
        let values = Arc::clone(&self.values);
        move |value| values.lock().push(value)
    }

    /// Snapshot of everything recorded so far.
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T: Clone + Send + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}
