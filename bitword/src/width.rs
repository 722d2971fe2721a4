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

//! Unsigned integers narrower than 64 bits, stored in a `u64`.
//!
//! [`U48`] and [`U56`] behave like 48- and 56-bit bit-fields: [`new`](U48::new) rejects values
//! that do not fit while [`wrapping`](U48::wrapping) keeps only the low bits.
//!
//! ```rust
//! # use bitword::width::U48;
//! assert_eq!(U48::wrapping(u64::MAX).get(), U48::MAX);
//! assert!(U48::new(1 << 48).is_err());
//! ```

use std::fmt;

use crate::error::Error;

macro_rules! impl_width {
    ($name:ident, $bits:expr) => {
        #[doc = concat!("A ", stringify!($bits), "-bit unsigned integer.")]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Number of value bits.
            pub const BITS: u32 = $bits;

            /// Largest representable value.
            pub const MAX: u64 = (1u64 << $bits) - 1;

            /// Returns the value if it fits in [`Self::BITS`] bits.
            pub fn new(value: u64) -> Result<Self, Error> {
                if value <= Self::MAX {
                    Ok($name(value))
                } else {
                    Err(Error::out_of_range(format!(
                        "value does not fit in {} bits",
                        Self::BITS
                    ))
                    .with_context("value", value)
                    .with_context("type", stringify!($name)))
                }
            }

            /// Keeps the low [`Self::BITS`] bits of `value`.
            #[inline(always)]
            pub const fn wrapping(value: u64) -> Self {
                $name(value & Self::MAX)
            }

            #[inline(always)]
            pub const fn get(self) -> u64 {
                self.0
            }

            #[inline(always)]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                Self::wrapping(self.0.wrapping_add(rhs.0))
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<u64> for $name {
            type Error = Error;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                $name::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_width!(U48, 48);
impl_width!(U56, 56);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_max() {
        assert_eq!(U48::MAX, 0xffff_ffff_ffff);
        assert_eq!(U56::MAX, 0xff_ffff_ffff_ffff);
        assert_eq!(U48::new(U48::MAX).unwrap().get(), U48::MAX);
        assert_eq!(U56::new(U56::MAX).unwrap().get(), U56::MAX);
    }

    #[test]
    fn test_new_rejects_overflow() {
        let err = U48::new(U48::MAX + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.context("type"), Some("U48"));
        assert!(U56::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(U48::wrapping(0x1234_5678_9abc_def0).get(), 0x5678_9abc_def0);
        assert_eq!(U56::wrapping(0x1234_5678_9abc_def0).get(), 0x34_5678_9abc_def0);
        assert_eq!(
            U48::wrapping(U48::MAX).wrapping_add(U48::wrapping(2)).get(),
            1
        );
    }
}
