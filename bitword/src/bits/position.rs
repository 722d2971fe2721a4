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

use std::fmt;

use crate::error::Error;

/// A validated, 1-based bit position inside a `u64`.
///
/// Position 1 is the least significant bit and position 64 the most significant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition(u32);

impl BitPosition {
    /// The lowest valid position.
    pub const FIRST: BitPosition = BitPosition(1);

    /// The highest valid position.
    pub const LAST: BitPosition = BitPosition(u64::BITS);

    /// Validates `position` against `[1, 64]`.
    pub fn new(position: u32) -> Result<Self, Error> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&position) {
            Ok(BitPosition(position))
        } else {
            Err(Error::out_of_range(format!(
                "bit position must be in [{}, {}]",
                Self::FIRST.0,
                Self::LAST.0
            ))
            .with_context("position", position))
        }
    }

    /// Returns the 1-based position.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the 0-based shift amount.
    pub const fn index(self) -> u32 {
        self.0 - 1
    }

    /// Returns a word with only this bit set.
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    pub const fn set(self, word: u64) -> u64 {
        word | self.mask()
    }

    pub const fn clear(self, word: u64) -> u64 {
        word & !self.mask()
    }

    pub const fn toggle(self, word: u64) -> u64 {
        word ^ self.mask()
    }

    pub const fn test(self, word: u64) -> bool {
        word & self.mask() != 0
    }
}

impl TryFrom<u32> for BitPosition {
    type Error = Error;

    fn try_from(position: u32) -> Result<Self, Self::Error> {
        BitPosition::new(position)
    }
}

impl From<BitPosition> for u32 {
    fn from(position: BitPosition) -> Self {
        position.get()
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_bounds() {
        assert_eq!(BitPosition::new(1).unwrap(), BitPosition::FIRST);
        assert_eq!(BitPosition::new(64).unwrap(), BitPosition::LAST);
        assert_eq!(
            BitPosition::new(0).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            BitPosition::new(65).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_mask_extremes() {
        assert_eq!(BitPosition::FIRST.mask(), 1);
        assert_eq!(BitPosition::LAST.mask(), 1 << 63);
        assert_eq!(BitPosition::new(32).unwrap().mask(), 0x8000_0000);
        assert_eq!(BitPosition::new(33).unwrap().mask(), 0x1_0000_0000);
    }

    #[test]
    fn test_index_is_zero_based() {
        for k in 1..=64 {
            let position = BitPosition::new(k).unwrap();
            assert_eq!(position.index(), k - 1);
            assert_eq!(u32::from(position), k);
        }
    }
}
