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

use bytes::Bytes;
use kinesign_core::{Error, Result};

/// A record to put into a stream.
///
/// `data` is opaque, it's base64 encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Key used by the service to route the record to a shard.
    pub partition_key: String,
    /// Raw record payload.
    pub data: Bytes,
}

impl Record {
    /// Create a new record.
    pub fn new(partition_key: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            partition_key: partition_key.into(),
            data: data.into(),
        }
    }
}

/// Pair every payload with a partition key.
///
/// Keys are assigned in order. Once keys run out, the last key is reused for
/// all remaining payloads. Extra keys are ignored.
pub fn assign_partition_keys<K, D>(keys: &[K], payloads: Vec<D>) -> Result<Vec<Record>>
where
    K: AsRef<str>,
    D: Into<Bytes>,
{
    if payloads.is_empty() {
        return Ok(Vec::new());
    }
    let Some(last) = keys.last() else {
        return Err(Error::request_invalid(
            "at least one partition key is required",
        ));
    };

    Ok(payloads
        .into_iter()
        .enumerate()
        .map(|(idx, data)| {
            let key = keys.get(idx).unwrap_or(last);
            Record::new(key.as_ref(), data)
        })
        .collect())
}
