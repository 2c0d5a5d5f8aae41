// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the valuestream library
//!
//! Generation itself never fails once a source is built. Errors only surface at the edges:
//! while validating constructor arguments, while arming a timer on the host scheduler, and
//! while attaching to a delivery channel that has already been closed.
//!
//! # Examples
//!
//! ```
//! use valuestream_error::{Result, ValueStreamError};
//!
//! fn checked_interval(seconds: f64) -> Result<f64> {
//!     if seconds > 0.0 {
//!         Ok(seconds)
//!     } else {
//!         Err(ValueStreamError::invalid_argument("interval must be positive"))
//!     }
//! }
//!
//! assert!(checked_interval(-1.0).is_err());
//! ```

/// Root error type for all valuestream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueStreamError {
    /// A constructor or operation received an argument it cannot work with
    ///
    /// Raised for an empty array source, a numeric range whose lower bound exceeds
    /// its upper bound (or is not finite), and a timer interval that is not positive.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Which argument was rejected and why
        message: String,
    },

    /// The host scheduler could not arm a timer
    ///
    /// Distinct from generator errors: the source is fine, there is just nothing to drive it.
    #[error("Scheduling failed: {context}")]
    Scheduling {
        /// What the scheduler reported
        context: String,
    },

    /// The delivery channel was closed and accepts no new subscribers
    #[error("Delivery channel is closed")]
    SubjectClosed,
}

impl ValueStreamError {
    /// Create an invalid argument error with the given message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a scheduling error with the given context
    pub fn scheduling(context: impl Into<String>) -> Self {
        Self::Scheduling {
            context: context.into(),
        }
    }

    /// Check if this error was caused by a rejected argument
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this error came from the host scheduler
    #[must_use]
    pub const fn is_scheduling(&self) -> bool {
        matches!(self, Self::Scheduling { .. })
    }

    /// Check if retrying the same call could succeed
    ///
    /// Only scheduling failures qualify: once a runtime is available, `start` can be retried.
    /// Argument errors will fail the same way every time.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.is_scheduling()
    }
}

/// Specialized Result type for valuestream operations
///
/// ```
/// use valuestream_error::Result;
///
/// fn build() -> Result<u8> {
///     Ok(7)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ValueStreamError>;
