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

//! Packing of short byte strings into 64-bit words.
//!
//! A packed word holds up to [`PACKED_LEN`] bytes of a NUL-terminated string, the first byte in
//! the least significant position. Byte `i` of the string is `(word >> (8 * i)) & 0xff`, so the
//! layout does not depend on the host byte order.
//!
//! Packing stops at the first NUL and unpacking always produces [`UNPACKED_LEN`] bytes: zero bytes
//! in the middle of a word are kept as data and a NUL terminator follows the eighth byte.
//!
//! # Usage
//!
//! ```rust
//! # use bitword::codec::{pack_str, pack_with, unpack, Overflow};
//! let word = pack_str("abcdefgh");
//! assert_eq!(&unpack(word), b"abcdefgh\0");
//!
//! assert!(pack_with(b"abcdefghij", Overflow::Reject).is_err());
//! ```

mod assert;

mod pack;
pub use self::pack::Overflow;
pub use self::pack::PACKED_LEN;
pub use self::pack::UNPACKED_LEN;
pub use self::pack::pack;
pub use self::pack::pack_str;
pub use self::pack::pack_with;
pub use self::pack::unpack;
pub use self::pack::unpack_into;
pub use self::pack::unpack_to_string;
