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

//! Single-bit operations on 64-bit words.
//!
//! Bit positions are 1-based: position 1 is the least significant bit, position 64 the most
//! significant one. Every position in `[1, 64]` is supported; anything else is rejected with
//! [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange).
//!
//! # Usage
//!
//! ```rust
//! # use bitword::bits;
//! let word = bits::set_bit(0, 1).unwrap();
//! assert_eq!(word, 0b1);
//! assert_eq!(bits::toggle_bit(word, 64).unwrap(), 0x8000_0000_0000_0001);
//! assert_eq!(bits::clear_bit(word, 1).unwrap(), 0);
//! assert!(bits::set_bit(0, 65).is_err());
//! ```

mod position;
pub use self::position::BitPosition;

use crate::error::Error;

/// Returns `word` with bit `position` set to 1.
pub fn set_bit(word: u64, position: u32) -> Result<u64, Error> {
    BitPosition::new(position).map(|p| p.set(word))
}

/// Returns `word` with bit `position` set to 0.
pub fn clear_bit(word: u64, position: u32) -> Result<u64, Error> {
    BitPosition::new(position).map(|p| p.clear(word))
}

/// Returns `word` with bit `position` flipped.
pub fn toggle_bit(word: u64, position: u32) -> Result<u64, Error> {
    BitPosition::new(position).map(|p| p.toggle(word))
}

/// Returns whether bit `position` of `word` is 1.
pub fn test_bit(word: u64, position: u32) -> Result<bool, Error> {
    BitPosition::new(position).map(|p| p.test(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear_toggle() {
        assert_eq!(set_bit(0, 1).unwrap(), 1);
        assert_eq!(set_bit(0, 8).unwrap(), 0x80);
        assert_eq!(set_bit(0x80, 8).unwrap(), 0x80);
        assert_eq!(clear_bit(0xff, 8).unwrap(), 0x7f);
        assert_eq!(clear_bit(0x7f, 8).unwrap(), 0x7f);
        assert_eq!(toggle_bit(0b1010, 2).unwrap(), 0b1000);
        assert_eq!(toggle_bit(0b1000, 2).unwrap(), 0b1010);
    }

    #[test]
    fn test_high_positions() {
        assert_eq!(set_bit(0, 32).unwrap(), 1 << 31);
        assert_eq!(set_bit(0, 33).unwrap(), 1 << 32);
        assert_eq!(set_bit(0, 64).unwrap(), 1 << 63);
        assert_eq!(clear_bit(u64::MAX, 64).unwrap(), u64::MAX >> 1);
        assert_eq!(toggle_bit(u64::MAX, 40).unwrap(), u64::MAX ^ (1 << 39));
        assert!(test_bit(1 << 63, 64).unwrap());
        assert!(!test_bit(1 << 63, 63).unwrap());
    }

    #[test]
    fn test_rejects_out_of_range() {
        for position in [0, 65, 100, u32::MAX] {
            assert!(set_bit(0, position).is_err());
            assert!(clear_bit(0, position).is_err());
            assert!(toggle_bit(0, position).is_err());
            assert!(test_bit(0, position).is_err());
        }
    }
}
