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

use bitword::ErrorKind;
use bitword::letter::index_letter;
use bitword::letter::letter_index;

#[test]
fn test_known_indexes() {
    assert_eq!(letter_index('a').unwrap(), 0);
    assert_eq!(letter_index('m').unwrap(), 12);
    assert_eq!(letter_index('z').unwrap(), 25);
    assert_eq!(index_letter(12).unwrap(), 'm');
}

#[test]
fn test_uppercase_is_rejected() {
    let err = letter_index('A').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
    insta::assert_snapshot!(
        err.to_string(),
        @"InvalidCharacter, context: { letter: A } => expected a lowercase ASCII letter"
    );
}
