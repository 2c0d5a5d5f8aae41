// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use valuestream_error::ValueStreamError;

/// Errors from [`ValueSubject`](crate::ValueSubject) lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items or subscribers.
    Closed,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Subject is closed"),
        }
    }
}

impl std::error::Error for SubjectError {}

impl From<SubjectError> for ValueStreamError {
    fn from(err: SubjectError) -> Self {
        match err {
            SubjectError::Closed => Self::SubjectClosed,
        }
    }
}
