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

use crate::error::Error;

pub(crate) fn ensure_fits_word(limit: usize, actual: usize) -> Result<(), Error> {
    if actual <= limit {
        Ok(())
    } else {
        Err(Error::value_too_long(limit, actual))
    }
}

pub(crate) fn ensure_buffer_holds(required: usize, actual: usize) -> Result<(), Error> {
    if actual >= required {
        Ok(())
    } else {
        Err(Error::buffer_too_small(required, actual))
    }
}
