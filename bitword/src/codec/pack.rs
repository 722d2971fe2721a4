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

use log::debug;

use crate::codec::assert::ensure_buffer_holds;
use crate::codec::assert::ensure_fits_word;
use crate::error::Error;

/// Number of data bytes a packed word holds.
pub const PACKED_LEN: usize = std::mem::size_of::<u64>();

/// Number of bytes written by an unpack: the data bytes plus a NUL terminator.
pub const UNPACKED_LEN: usize = PACKED_LEN + 1;

/// What [`pack_with`] does with input longer than [`PACKED_LEN`] bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Keep the first [`PACKED_LEN`] bytes and drop the rest.
    #[default]
    Truncate,
    /// Fail with [`ErrorKind::ValueTooLong`](crate::ErrorKind::ValueTooLong).
    Reject,
}

/// Returns the bytes before the first NUL, or the whole slice if it has none.
#[inline]
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Packs at most [`PACKED_LEN`] bytes, byte `i` landing in bits `8*i..8*i+8`.
#[inline]
fn pack_prefix(data: &[u8]) -> u64 {
    data.iter()
        .take(PACKED_LEN)
        .enumerate()
        .fold(0u64, |word, (i, &b)| word | ((b as u64) << (8 * i)))
}

#[inline]
fn write_word(word: u64, out: &mut [u8]) {
    debug_assert!(out.len() >= UNPACKED_LEN, "unpack buffer too small");
    for (i, byte) in out[..PACKED_LEN].iter_mut().enumerate() {
        *byte = (word >> (8 * i)) as u8;
    }
    out[PACKED_LEN] = 0;
}

/// Packs a NUL-terminated byte string into a word.
///
/// Copying stops at the first NUL byte, at the end of `bytes`, or after [`PACKED_LEN`] bytes,
/// whichever comes first. Bytes past the eighth are silently dropped; use [`pack_with`] with
/// [`Overflow::Reject`] to refuse such input instead.
///
/// The first byte lands in the least significant byte of the result regardless of the host
/// byte order.
///
/// ```rust
/// # use bitword::codec::pack;
/// assert_eq!(pack(b"ab\0"), 0x6261);
/// assert_eq!(pack(b"abcdefghij"), pack(b"abcdefgh"));
/// ```
pub fn pack(bytes: &[u8]) -> u64 {
    let data = until_nul(bytes);
    if data.len() > PACKED_LEN {
        debug!(
            "truncating {} byte input to {PACKED_LEN} bytes while packing",
            data.len()
        );
    }
    pack_prefix(data)
}

/// Packs the UTF-8 bytes of `s`. See [`pack`].
pub fn pack_str(s: &str) -> u64 {
    pack(s.as_bytes())
}

/// Packs a NUL-terminated byte string, handling over-long input according to `overflow`.
pub fn pack_with(bytes: &[u8], overflow: Overflow) -> Result<u64, Error> {
    match overflow {
        Overflow::Truncate => Ok(pack(bytes)),
        Overflow::Reject => {
            let data = until_nul(bytes);
            ensure_fits_word(PACKED_LEN, data.len())?;
            Ok(pack_prefix(data))
        }
    }
}

/// Writes the eight bytes of `word` followed by a NUL terminator into `buf`.
///
/// Exactly [`UNPACKED_LEN`] bytes are written. Zero bytes inside the word are written as data,
/// not treated as an early terminator. Bytes of `buf` past index 8 are left untouched.
///
/// Returns [`ErrorKind::BufferTooSmall`](crate::ErrorKind::BufferTooSmall) without writing
/// anything if `buf` is shorter than [`UNPACKED_LEN`].
pub fn unpack_into(word: u64, buf: &mut [u8]) -> Result<(), Error> {
    ensure_buffer_holds(UNPACKED_LEN, buf.len())?;
    write_word(word, buf);
    Ok(())
}

/// Returns the eight bytes of `word` followed by a NUL terminator.
///
/// ```rust
/// # use bitword::codec::{pack, unpack};
/// assert_eq!(&unpack(pack(b"ab")), b"ab\0\0\0\0\0\0\0");
/// ```
pub fn unpack(word: u64) -> [u8; UNPACKED_LEN] {
    let mut out = [0u8; UNPACKED_LEN];
    write_word(word, &mut out);
    out
}

/// Decodes the bytes of `word` up to the first NUL as a UTF-8 string.
pub fn unpack_to_string(word: u64) -> Result<String, Error> {
    let bytes = unpack(word);
    let data = until_nul(&bytes);
    match std::str::from_utf8(data) {
        Ok(s) => Ok(s.to_owned()),
        Err(err) => Err(
            Error::invalid_character("packed bytes are not valid UTF-8")
                .with_context("valid_up_to", err.valid_up_to()),
        ),
    }
}
