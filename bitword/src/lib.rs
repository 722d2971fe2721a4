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

//! Small helpers over 64-bit words.
//!
//! * [`bits`]: set, clear, toggle and test a single 1-based bit position.
//! * [`letter`]: lowercase ASCII letters to zero-based alphabet indexes and back.
//! * [`codec`]: pack up to eight bytes of a NUL-terminated string into a `u64` and back.
//! * [`width`]: 48- and 56-bit unsigned integers.
//!
//! All operations are pure. Inputs outside an operation's domain are reported through
//! [`Error`] instead of being truncated or wrapped silently.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bits;
pub mod codec;
pub mod letter;
pub mod width;

mod error;
pub use self::error::Error;
pub use self::error::ErrorKind;
