// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub const PANGRAM: &str = "Sphinx of black quartz judge my vow";

/// The seven words of [`PANGRAM`].
pub fn pangram_words() -> Vec<String> {
    PANGRAM.split(' ').map(String::from).collect()
}

pub fn digits() -> Vec<i32> {
    vec![0, 1, 2, 3, 4]
}
