// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for valuestream.
//!
//! For development and testing only.
//!
//! - [`Recorder`]: a cloneable callback target that remembers every value it received
//! - [`helpers`]: stream assertions with timeouts
//! - [`test_data`]: shared fixtures

pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use recorder::Recorder;
