// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Lowercase ASCII letters and their zero-based alphabet index.

use crate::error::Error;

/// Number of letters in the lowercase ASCII alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Maps `'a'..='z'` to `0..=25`.
///
/// ```rust
/// # use bitword::letter::letter_index;
/// assert_eq!(letter_index('a').unwrap(), 0);
/// assert_eq!(letter_index('z').unwrap(), 25);
/// assert!(letter_index('A').is_err());
/// ```
pub fn letter_index(letter: char) -> Result<u8, Error> {
    if letter.is_ascii_lowercase() {
        Ok(letter as u8 - b'a')
    } else {
        Err(Error::invalid_character("expected a lowercase ASCII letter")
            .with_context("letter", letter.escape_debug()))
    }
}

/// Maps `0..=25` back to `'a'..='z'`.
pub fn index_letter(index: u8) -> Result<char, Error> {
    if index < ALPHABET_LEN {
        Ok((b'a' + index) as char)
    } else {
        Err(Error::out_of_range(format!(
            "letter index must be less than {ALPHABET_LEN}"
        ))
        .with_context("index", index))
    }
}
